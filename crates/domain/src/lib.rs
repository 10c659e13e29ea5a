//! Domain types for user management.

#![forbid(unsafe_code)]

mod actor;
mod user;
mod user_update;

pub use actor::{Actor, AuthenticatedActor};
pub use user::{
    EmailAddress, NAME_MAX_LENGTH, PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH, PlaintextPassword,
    UserId, UserRole, validate_display_name,
};
pub use user_update::{UserUpdate, UserUpdateInput};
