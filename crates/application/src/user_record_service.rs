//! User record application service.
//!
//! Orchestrates read-modify-write cycles against the [`UserRepository`] port
//! under the [`AuthorizationPolicy`]. Every call is logged once here, with the
//! actor and target ids. Password material is never logged or returned.

use std::sync::Arc;

use tracing::{error, warn};
use usergate_core::AppError;
use usergate_domain::{Actor, UserId};

use crate::{AuthorizationPolicy, Operation, PasswordHasher, UserRepository};

mod mutation;
mod retrieval;

/// Application service for listing, reading, updating and deleting users.
#[derive(Clone)]
pub struct UserRecordService {
    user_repository: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    policy: AuthorizationPolicy,
}

impl UserRecordService {
    /// Creates a new user record service.
    #[must_use]
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
            policy: AuthorizationPolicy::new(),
        }
    }
}

fn user_not_found(user_id: UserId) -> AppError {
    AppError::NotFound(format!("user {user_id} not found"))
}

fn log_mutation_failure(error: &AppError, actor: &Actor, user_id: UserId, operation: Operation) {
    match error {
        AppError::NotFound(_) | AppError::Forbidden(_) | AppError::Validation(_) => warn!(
            error = %error,
            actor_id = %actor,
            target_id = %user_id,
            operation = operation.as_str(),
            "user mutation rejected"
        ),
        AppError::Storage(_) | AppError::Internal(_) => error!(
            error = %error,
            error_kind = error.kind(),
            actor_id = %actor,
            target_id = %user_id,
            operation = operation.as_str(),
            "user mutation failed"
        ),
    }
}
