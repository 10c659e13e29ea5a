//! Application services and ports.

#![forbid(unsafe_code)]

mod authorization_policy;
mod user_changes;
mod user_ports;
mod user_record_service;

pub use authorization_policy::{AuthorizationPolicy, Decision, DenialReason, Operation};
pub use user_changes::UserChanges;
pub use user_ports::{
    DeletedUser, PasswordHasher, StoredUser, UserProfile, UserRepository, UserSummary,
};
pub use user_record_service::UserRecordService;
