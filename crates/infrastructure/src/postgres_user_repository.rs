//! PostgreSQL-backed user repository.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use usergate_application::{StoredUser, UserChanges, UserRepository, UserSummary};
use usergate_core::{AppError, AppResult};
use usergate_domain::{UserId, UserRole};

/// PostgreSQL implementation of the user repository port.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    password_hash: String,
    role: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for StoredUser {
    type Error = AppError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row_user_id(row.id)?,
            name: row.name,
            email: row.email,
            password_hash: row.password_hash,
            role: row_role(&row.role)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct UserSummaryRow {
    id: i64,
    name: String,
    role: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserSummaryRow> for UserSummary {
    type Error = AppError;

    fn try_from(row: UserSummaryRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row_user_id(row.id)?,
            name: row.name,
            role: row_role(&row.role)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

mod lookup;
mod mutation;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<StoredUser>> {
        self.find_by_id_impl(user_id).await
    }

    async fn find_all(&self) -> AppResult<Vec<UserSummary>> {
        self.find_all_impl().await
    }

    async fn update(
        &self,
        user_id: UserId,
        changes: &UserChanges,
    ) -> AppResult<Option<StoredUser>> {
        self.update_impl(user_id, changes).await
    }

    async fn delete(&self, user_id: UserId) -> AppResult<bool> {
        self.delete_impl(user_id).await
    }
}

fn row_user_id(value: i64) -> AppResult<UserId> {
    UserId::new(value).map_err(|_| AppError::Storage(format!("stored user id {value} is invalid")))
}

fn row_role(value: &str) -> AppResult<UserRole> {
    UserRole::from_str(value)
        .map_err(|_| AppError::Storage(format!("stored user role '{value}' is invalid")))
}

fn storage_error(error: sqlx::Error, operation: &str) -> AppError {
    if let sqlx::Error::Database(ref database_error) = error
        && database_error.code().as_deref() == Some("23505")
    {
        return AppError::Storage("an account with this email already exists".to_owned());
    }

    AppError::Storage(format!("failed to {operation}: {error}"))
}
