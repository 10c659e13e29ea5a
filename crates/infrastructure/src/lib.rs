//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod argon2_password_hasher;
mod bootstrap;
mod in_memory_user_repository;
mod postgres_user_repository;
mod user_store_config;

pub use argon2_password_hasher::Argon2PasswordHasher;
pub use bootstrap::{build_user_record_service, connect_and_migrate, init_tracing};
pub use in_memory_user_repository::InMemoryUserRepository;
pub use postgres_user_repository::PostgresUserRepository;
pub use user_store_config::UserStoreConfig;
