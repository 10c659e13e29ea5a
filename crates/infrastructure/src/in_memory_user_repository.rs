use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use usergate_application::{StoredUser, UserChanges, UserRepository, UserSummary};
use usergate_core::{AppError, AppResult, NonEmptyString};
use usergate_domain::{EmailAddress, UserId, UserRole};

#[derive(Debug, Default)]
struct UserTable {
    rows: BTreeMap<UserId, StoredUser>,
    last_id: i64,
}

impl UserTable {
    fn email_taken(&self, email: &str, except: Option<UserId>) -> bool {
        self.rows
            .values()
            .any(|user| Some(user.id) != except && user.email.eq_ignore_ascii_case(email))
    }
}

/// In-memory user repository.
///
/// Each operation holds the table lock for its whole duration, so single
/// operations are atomic while read-then-write sequences are not.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    table: RwLock<UserTable>,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a user with the next identifier, enforcing email uniqueness.
    pub async fn insert(
        &self,
        name: NonEmptyString,
        email: EmailAddress,
        password_hash: String,
        role: UserRole,
    ) -> AppResult<StoredUser> {
        let mut table = self.table.write().await;

        if table.email_taken(email.as_str(), None) {
            return Err(AppError::Storage(
                "an account with this email already exists".to_owned(),
            ));
        }

        let id = UserId::new(table.last_id + 1)?;
        let now = Utc::now();
        let user = StoredUser {
            id,
            name: name.into(),
            email: email.into(),
            password_hash,
            role,
            created_at: now,
            updated_at: now,
        };

        table.last_id = id.as_i64();
        table.rows.insert(id, user.clone());
        Ok(user)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<StoredUser>> {
        Ok(self.table.read().await.rows.get(&user_id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<UserSummary>> {
        Ok(self
            .table
            .read()
            .await
            .rows
            .values()
            .cloned()
            .map(UserSummary::from)
            .collect())
    }

    async fn update(
        &self,
        user_id: UserId,
        changes: &UserChanges,
    ) -> AppResult<Option<StoredUser>> {
        let mut table = self.table.write().await;

        if let Some(email) = changes.email.as_deref()
            && table.email_taken(email, Some(user_id))
        {
            return Err(AppError::Storage(
                "an account with this email already exists".to_owned(),
            ));
        }

        Ok(table.rows.get_mut(&user_id).map(|user| {
            changes.apply_to(user);
            user.clone()
        }))
    }

    async fn delete(&self, user_id: UserId) -> AppResult<bool> {
        Ok(self.table.write().await.rows.remove(&user_id).is_some())
    }
}

#[cfg(test)]
mod tests;
