//! Ownership and role rules for mutating user records.
//!
//! The policy is a pure function of the actor, the target id and the kind of
//! mutation. It performs no I/O and emits no logs.

use usergate_core::{AppError, AppResult};
use usergate_domain::{Actor, UserId};

/// Mutation kinds guarded by the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Partial update of a user record.
    Update,
    /// Removal of a user record.
    Delete,
}

impl Operation {
    /// Returns a stable label for messages and log fields.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// Why a mutation was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DenialReason {
    /// Caller has no resolved identity.
    Anonymous,
    /// Caller is neither the record owner nor an admin.
    NotOwner,
    /// Caller attempted a role change without the admin role.
    RoleChangeRequiresAdmin,
}

impl DenialReason {
    /// Returns a caller-facing explanation.
    #[must_use]
    pub fn message(&self, operation: Operation) -> &'static str {
        match (self, operation) {
            (Self::RoleChangeRequiresAdmin, _) => "only admins can change user roles",
            (Self::Anonymous, _) => "authentication is required to modify users",
            (Self::NotOwner, Operation::Update) => "you can only update your own information",
            (Self::NotOwner, Operation::Delete) => {
                "you can only delete your own account or must be an admin"
            }
        }
    }
}

/// Binary policy outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// The mutation may proceed.
    Allow,
    /// The mutation must not proceed.
    Deny(DenialReason),
}

impl Decision {
    /// Returns whether the decision allows the mutation.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Converts a deny into [`AppError::Forbidden`].
    pub fn into_result(self, operation: Operation) -> AppResult<()> {
        match self {
            Self::Allow => Ok(()),
            Self::Deny(reason) => Err(AppError::Forbidden(reason.message(operation).to_owned())),
        }
    }
}

/// Decides who may update or delete which user record.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorizationPolicy;

impl AuthorizationPolicy {
    /// Creates the policy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Decides whether `actor` may apply `operation` to the record `target_id`.
    ///
    /// Admins are always allowed. A role change by anyone else is denied
    /// before ownership is considered. Anonymous callers own
    /// nothing. Everyone else may only touch their own record.
    #[must_use]
    pub fn can_modify(
        &self,
        actor: &Actor,
        target_id: UserId,
        operation: Operation,
        attempts_role_change: bool,
    ) -> Decision {
        if actor.is_admin() {
            return Decision::Allow;
        }

        if attempts_role_change {
            return Decision::Deny(DenialReason::RoleChangeRequiresAdmin);
        }

        let owner = match actor {
            Actor::Anonymous => return Decision::Deny(DenialReason::Anonymous),
            Actor::Authenticated(authenticated) => authenticated.id(),
        };

        match operation {
            Operation::Update | Operation::Delete if owner == target_id => Decision::Allow,
            Operation::Update | Operation::Delete => Decision::Deny(DenialReason::NotOwner),
        }
    }
}

#[cfg(test)]
mod tests;
