use crate::{UserId, UserRole};

/// Identity and role resolved by authentication for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedActor {
    id: UserId,
    role: UserRole,
}

impl AuthenticatedActor {
    /// Creates an authenticated actor.
    #[must_use]
    pub fn new(id: UserId, role: UserRole) -> Self {
        Self { id, role }
    }

    /// Returns the actor's user id.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Returns the actor's role.
    #[must_use]
    pub fn role(&self) -> UserRole {
        self.role
    }
}

/// Caller performing a request: either anonymous or an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    /// No identity was resolved for the request.
    Anonymous,
    /// Authentication produced an identity and role.
    Authenticated(AuthenticatedActor),
}

impl Actor {
    /// Creates an authenticated actor.
    #[must_use]
    pub fn authenticated(id: UserId, role: UserRole) -> Self {
        Self::Authenticated(AuthenticatedActor::new(id, role))
    }

    /// Builds an actor from the optional claims of an authentication layer.
    #[must_use]
    pub fn from_claims(claims: Option<(UserId, UserRole)>) -> Self {
        match claims {
            Some((id, role)) => Self::authenticated(id, role),
            None => Self::Anonymous,
        }
    }

    /// Returns the resolved user id, if any.
    #[must_use]
    pub fn id(&self) -> Option<UserId> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(actor) => Some(actor.id()),
        }
    }

    /// Returns the effective role. Anonymous callers act as guests.
    #[must_use]
    pub fn role(&self) -> UserRole {
        match self {
            Self::Anonymous => UserRole::Guest,
            Self::Authenticated(actor) => actor.role(),
        }
    }

    /// Returns whether the actor carries the admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role().is_admin()
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Anonymous => formatter.write_str("anonymous"),
            Self::Authenticated(actor) => write!(formatter, "{}", actor.id()),
        }
    }
}
