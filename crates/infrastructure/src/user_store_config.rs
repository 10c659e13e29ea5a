use std::env;

use usergate_core::{AppError, AppResult};

const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Storage settings read from the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStoreConfig {
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Upper bound for pooled connections.
    pub max_connections: u32,
    /// Whether migrations run on connect.
    pub run_migrations: bool,
}

impl UserStoreConfig {
    /// Loads `.env` if present, then reads `DATABASE_URL`,
    /// `DATABASE_MAX_CONNECTIONS` and `RUN_MIGRATIONS`.
    pub fn load() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let database_url = lookup("DATABASE_URL")
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| AppError::Validation("DATABASE_URL is required".to_owned()))?;

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => value
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|parsed| *parsed >= 1)
                .ok_or_else(|| {
                    AppError::Validation(format!(
                        "DATABASE_MAX_CONNECTIONS must be a positive integer, got '{value}'"
                    ))
                })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let run_migrations = match lookup("RUN_MIGRATIONS") {
            Some(value) => parse_flag("RUN_MIGRATIONS", &value)?,
            None => true,
        };

        Ok(Self {
            database_url,
            max_connections,
            run_migrations,
        })
    }
}

fn parse_flag(name: &str, value: &str) -> AppResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(AppError::Validation(format!(
            "{name} must be true or false, got '{other}'"
        ))),
    }
}
