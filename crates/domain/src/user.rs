//! User domain types and validation rules.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use usergate_core::{AppError, AppResult, NonEmptyString};

/// Server-assigned identifier for a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Creates a user identifier, rejecting zero and negative values.
    pub fn new(value: i64) -> AppResult<Self> {
        if value <= 0 {
            return Err(AppError::Validation(format!(
                "user id must be a positive integer, got {value}"
            )));
        }

        Ok(Self(value))
    }

    /// Returns the underlying integer value.
    #[must_use]
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parsed = value
            .trim()
            .parse::<i64>()
            .map_err(|_| AppError::Validation(format!("invalid user id '{value}'")))?;
        Self::new(parsed)
    }
}

/// Closed set of roles a user record can hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Lowest-privilege role; still owns its own record.
    Guest,
    /// Regular account that may manage its own record.
    #[default]
    User,
    /// Operator that may manage every record, including roles.
    Admin,
}

impl UserRole {
    /// Returns a stable storage value for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Guest => "guest",
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    /// Returns all known roles.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[UserRole] = &[UserRole::Guest, UserRole::User, UserRole::Admin];

        ALL
    }

    /// Returns whether this role carries the admin override.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "guest" => Ok(Self::Guest),
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            _ => Err(AppError::Validation(format!("unknown user role '{value}'"))),
        }
    }
}

/// Validated email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated, lowercased email address.
    ///
    /// Performs structural validation only: exactly one `@`, non-empty local
    /// part, and a domain containing at least one `.`.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        let normalized = value.trim().to_lowercase();

        if normalized.is_empty() {
            return Err(AppError::Validation(
                "email address must not be empty".to_owned(),
            ));
        }

        let Some((local, domain)) = normalized.split_once('@') else {
            return Err(AppError::Validation(
                "email address must contain exactly one '@'".to_owned(),
            ));
        };

        if domain.contains('@') {
            return Err(AppError::Validation(
                "email address must contain exactly one '@'".to_owned(),
            ));
        }

        if local.is_empty() {
            return Err(AppError::Validation(
                "email local part must not be empty".to_owned(),
            ));
        }

        if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
            return Err(AppError::Validation(
                "email domain must contain at least one inner '.'".to_owned(),
            ));
        }

        if normalized.len() > 254 {
            return Err(AppError::Validation(
                "email address must not exceed 254 characters".to_owned(),
            ));
        }

        Ok(Self(normalized))
    }

    /// Returns the validated email string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

/// Maximum number of characters in a display name.
pub const NAME_MAX_LENGTH: usize = 255;

/// Validates a display name: non-blank, bounded length.
///
/// The accepted name is stored exactly as given.
pub fn validate_display_name(value: &str) -> AppResult<NonEmptyString> {
    if value.chars().count() > NAME_MAX_LENGTH {
        return Err(AppError::Validation(format!(
            "name must not exceed {NAME_MAX_LENGTH} characters"
        )));
    }

    NonEmptyString::new(value)
        .map_err(|_| AppError::Validation("name must not be empty".to_owned()))
}

/// Minimum password length accepted on update.
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Maximum password length (bounds Argon2id work per request).
pub const PASSWORD_MAX_LENGTH: usize = 128;

/// Plaintext password held only between validation and hashing.
///
/// Has no `Serialize` impl and never prints its value.
#[derive(Clone, PartialEq, Eq)]
pub struct PlaintextPassword(String);

impl PlaintextPassword {
    /// Creates a password after checking length bounds.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        let char_count = value.chars().count();

        if char_count < PASSWORD_MIN_LENGTH {
            return Err(AppError::Validation(format!(
                "password must be at least {PASSWORD_MIN_LENGTH} characters"
            )));
        }

        if char_count > PASSWORD_MAX_LENGTH {
            return Err(AppError::Validation(format!(
                "password must not exceed {PASSWORD_MAX_LENGTH} characters"
            )));
        }

        Ok(Self(value))
    }

    /// Returns the plaintext for the hashing step.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Debug for PlaintextPassword {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("PlaintextPassword(<redacted>)")
    }
}
