//! Composition helpers for host applications.

use std::sync::Arc;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::info;
use tracing_subscriber::EnvFilter;
use usergate_application::UserRecordService;
use usergate_core::{AppError, AppResult};

use crate::{Argon2PasswordHasher, PostgresUserRepository, UserStoreConfig};

/// Installs a compact `tracing` subscriber filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() -> AppResult<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|error| AppError::Internal(format!("failed to install tracing: {error}")))
}

/// Connects the pool and, unless disabled, applies the bundled migrations.
pub async fn connect_and_migrate(config: &UserStoreConfig) -> AppResult<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .map_err(|error| AppError::Storage(format!("failed to connect to database: {error}")))?;

    if config.run_migrations {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|error| AppError::Storage(format!("failed to run migrations: {error}")))?;
        info!("user store migrations applied");
    }

    Ok(pool)
}

/// Wires the PostgreSQL repository and Argon2id hasher into the service.
#[must_use]
pub fn build_user_record_service(pool: PgPool) -> UserRecordService {
    UserRecordService::new(
        Arc::new(PostgresUserRepository::new(pool)),
        Arc::new(Argon2PasswordHasher::new()),
    )
}
