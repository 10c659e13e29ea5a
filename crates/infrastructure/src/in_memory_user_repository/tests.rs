use std::sync::Arc;

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use usergate_application::{UserRecordService, UserRepository};
use usergate_core::{AppError, AppResult, NonEmptyString};
use usergate_domain::{
    Actor, EmailAddress, PlaintextPassword, UserId, UserRole, UserUpdate, UserUpdateInput,
};

use super::InMemoryUserRepository;
use crate::Argon2PasswordHasher;

async fn seeded_repository() -> AppResult<Arc<InMemoryUserRepository>> {
    let repository = Arc::new(InMemoryUserRepository::new());
    repository
        .insert(
            NonEmptyString::new("Root")?,
            EmailAddress::new("root@example.com")?,
            "$argon2id$seed".to_owned(),
            UserRole::Admin,
        )
        .await?;
    repository
        .insert(
            NonEmptyString::new("Alice")?,
            EmailAddress::new("alice@example.com")?,
            "$argon2id$seed".to_owned(),
            UserRole::User,
        )
        .await?;
    Ok(repository)
}

#[tokio::test]
async fn insert_assigns_sequential_ids() -> AppResult<()> {
    let repository = seeded_repository().await?;

    let users = repository.find_all().await?;
    let ids: Vec<i64> = users.iter().map(|user| user.id.as_i64()).collect();
    assert_eq!(ids, vec![1, 2]);
    Ok(())
}

#[tokio::test]
async fn insert_rejects_duplicate_email_case_insensitively() -> AppResult<()> {
    let repository = seeded_repository().await?;

    let result = repository
        .insert(
            NonEmptyString::new("Impostor")?,
            EmailAddress::new("ALICE@example.com")?,
            "$argon2id$seed".to_owned(),
            UserRole::User,
        )
        .await;

    assert!(matches!(result, Err(AppError::Storage(_))));
    Ok(())
}

#[tokio::test]
async fn deleted_ids_are_not_reused() -> AppResult<()> {
    let repository = seeded_repository().await?;
    assert!(repository.delete(UserId::new(2)?).await?);

    let user = repository
        .insert(
            NonEmptyString::new("Dave")?,
            EmailAddress::new("dave@example.com")?,
            "$argon2id$seed".to_owned(),
            UserRole::User,
        )
        .await?;

    assert_eq!(user.id.as_i64(), 3);
    Ok(())
}

#[tokio::test]
async fn email_change_to_taken_address_is_a_storage_error() -> AppResult<()> {
    let repository = seeded_repository().await?;
    let service = UserRecordService::new(repository, Arc::new(Argon2PasswordHasher::new()));
    let actor = Actor::authenticated(UserId::new(2)?, UserRole::User);

    let update = UserUpdate::from_input(UserUpdateInput {
        email: Some("Root@Example.com".to_owned()),
        ..UserUpdateInput::default()
    })?;
    let result = service.update_user(&actor, UserId::new(2)?, update).await;

    assert!(matches!(result, Err(AppError::Storage(_))));
    Ok(())
}

#[tokio::test]
async fn password_update_persists_verifiable_argon2_hash() -> AppResult<()> {
    let repository = seeded_repository().await?;
    let service =
        UserRecordService::new(repository.clone(), Arc::new(Argon2PasswordHasher::new()));
    let actor = Actor::authenticated(UserId::new(2)?, UserRole::User);

    service
        .update_user(
            &actor,
            UserId::new(2)?,
            UserUpdate::change_password(PlaintextPassword::new("new-passphrase-2026")?),
        )
        .await?;

    let stored = repository.find_by_id(UserId::new(2)?).await?;
    let stored_hash = stored.map(|user| user.password_hash).unwrap_or_default();
    assert_ne!(stored_hash, "new-passphrase-2026");

    let parsed = PasswordHash::new(&stored_hash).unwrap_or_else(|_| unreachable!());
    assert!(
        Argon2::default()
            .verify_password(b"new-passphrase-2026", &parsed)
            .is_ok()
    );
    Ok(())
}

#[tokio::test]
async fn admin_update_applies_every_field() -> AppResult<()> {
    let repository = seeded_repository().await?;
    let service = UserRecordService::new(repository, Arc::new(Argon2PasswordHasher::new()));
    let admin = Actor::authenticated(UserId::new(1)?, UserRole::Admin);

    let update = UserUpdate::from_input(UserUpdateInput {
        name: Some("Alice Liddell".to_owned()),
        email: Some("a.liddell@example.com".to_owned()),
        password: None,
        role: Some("guest".to_owned()),
    })?;
    let profile = service.update_user(&admin, UserId::new(2)?, update).await?;

    assert_eq!(profile.name, "Alice Liddell");
    assert_eq!(profile.email, "a.liddell@example.com");
    assert_eq!(profile.role, UserRole::Guest);
    Ok(())
}
