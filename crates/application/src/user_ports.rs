//! Storage and hashing ports plus the outward user read models.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use usergate_core::AppResult;
use usergate_domain::{PlaintextPassword, UserId, UserRole};

use crate::UserChanges;

/// Full user row as held by storage. Never leaves the application layer.
#[derive(Clone, PartialEq, Eq)]
pub struct StoredUser {
    /// Server-assigned identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Canonical email address, unique across users.
    pub email: String,
    /// Argon2id PHC string.
    pub password_hash: String,
    /// Current role.
    pub role: UserRole,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last mutation.
    pub updated_at: DateTime<Utc>,
}

impl std::fmt::Debug for StoredUser {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("StoredUser")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("role", &self.role)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

/// Listing projection: no email, no credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    /// User identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Current role.
    pub role: UserRole,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last mutation.
    pub updated_at: DateTime<Utc>,
}

impl From<StoredUser> for UserSummary {
    fn from(user: StoredUser) -> Self {
        Self {
            id: user.id,
            name: user.name,
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Single-record projection: includes email, never credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    /// User identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Canonical email address.
    pub email: String,
    /// Current role.
    pub role: UserRole,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last mutation.
    pub updated_at: DateTime<Utc>,
}

impl From<StoredUser> for UserProfile {
    fn from(user: StoredUser) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Confirmation returned after a deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeletedUser {
    /// Identifier of the removed record.
    pub id: UserId,
}

/// Repository port for user persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by identifier.
    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<StoredUser>>;

    /// Lists every user, ordered by identifier.
    async fn find_all(&self) -> AppResult<Vec<UserSummary>>;

    /// Applies a change set to one record. Returns `None` when no row matched.
    async fn update(&self, user_id: UserId, changes: &UserChanges)
    -> AppResult<Option<StoredUser>>;

    /// Removes one record. Returns whether a row was deleted.
    async fn delete(&self, user_id: UserId) -> AppResult<bool>;
}

/// Port for one-way password hashing.
pub trait PasswordHasher: Send + Sync {
    /// Hashes a plaintext password into a self-describing hash string.
    fn hash_password(&self, password: &PlaintextPassword) -> AppResult<String>;
}
