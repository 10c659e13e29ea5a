use chrono::{DateTime, Utc};
use usergate_core::AppResult;
use usergate_domain::{UserRole, UserUpdate};

use crate::{PasswordHasher, StoredUser};

/// Storage-ready change set: credentials already hashed, timestamp stamped.
#[derive(Clone, PartialEq, Eq)]
pub struct UserChanges {
    /// New display name.
    pub name: Option<String>,
    /// New canonical email.
    pub email: Option<String>,
    /// New password hash.
    pub password_hash: Option<String>,
    /// New role.
    pub role: Option<UserRole>,
    /// Value written to `updated_at`.
    pub updated_at: DateTime<Utc>,
}

impl UserChanges {
    /// Hashes any credential in `update` and stamps `updated_at` with `now`.
    ///
    /// The plaintext password is dropped once hashed.
    pub fn prepare(
        update: UserUpdate,
        password_hasher: &dyn PasswordHasher,
        now: DateTime<Utc>,
    ) -> AppResult<Self> {
        let (name, email, password, role) = update.into_parts();
        let password_hash = password
            .map(|password| password_hasher.hash_password(&password))
            .transpose()?;

        Ok(Self {
            name: name.map(String::from),
            email: email.map(String::from),
            password_hash,
            role,
            updated_at: now,
        })
    }

    /// Applies the change set to an in-memory row.
    pub fn apply_to(&self, user: &mut StoredUser) {
        if let Some(name) = &self.name {
            user.name.clone_from(name);
        }
        if let Some(email) = &self.email {
            user.email.clone_from(email);
        }
        if let Some(password_hash) = &self.password_hash {
            user.password_hash.clone_from(password_hash);
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        user.updated_at = self.updated_at;
    }
}

impl std::fmt::Debug for UserChanges {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("UserChanges")
            .field("name", &self.name)
            .field("email", &self.email)
            .field(
                "password_hash",
                &self.password_hash.as_ref().map(|_| "<redacted>"),
            )
            .field("role", &self.role)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use usergate_core::{AppResult, NonEmptyString};
    use usergate_domain::{PlaintextPassword, UserId, UserRole, UserUpdate};

    use super::UserChanges;
    use crate::{PasswordHasher, StoredUser};

    struct ReversingHasher;

    impl PasswordHasher for ReversingHasher {
        fn hash_password(&self, password: &PlaintextPassword) -> AppResult<String> {
            Ok(format!("hashed:{}", password.expose().chars().rev().collect::<String>()))
        }
    }

    #[test]
    fn prepare_hashes_password_and_stamps_time() -> AppResult<()> {
        let now = Utc::now();
        let update = UserUpdate::change_password(PlaintextPassword::new("plain-secret")?);

        let changes = UserChanges::prepare(update, &ReversingHasher, now)?;

        assert_eq!(changes.password_hash.as_deref(), Some("hashed:terces-nialp"));
        assert_eq!(changes.updated_at, now);
        assert!(!format!("{changes:?}").contains("terces"));
        Ok(())
    }

    #[test]
    fn apply_to_leaves_absent_fields_untouched() -> AppResult<()> {
        let created_at = Utc::now() - Duration::days(1);
        let mut user = StoredUser {
            id: UserId::new(5)?,
            name: "Alice".to_owned(),
            email: "alice@example.com".to_owned(),
            password_hash: "original".to_owned(),
            role: UserRole::User,
            created_at,
            updated_at: created_at,
        };
        let now = Utc::now();
        let changes = UserChanges::prepare(
            UserUpdate::rename(NonEmptyString::new("Bob")?),
            &ReversingHasher,
            now,
        )?;

        changes.apply_to(&mut user);

        assert_eq!(user.name, "Bob");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.password_hash, "original");
        assert_eq!(user.updated_at, now);
        Ok(())
    }
}
