//! Partial user updates.
//!
//! Raw transport fields arrive as [`UserUpdateInput`] and are validated into a
//! typed [`UserUpdate`]. Credential hashing is a separate, later stage owned
//! by the application layer.

use std::str::FromStr;

use serde::Deserialize;
use usergate_core::{AppError, AppResult, NonEmptyString};

use crate::{EmailAddress, PlaintextPassword, UserRole, validate_display_name};

/// Untyped update fields as received from a transport.
///
/// Unknown fields are rejected during deserialization.
#[derive(Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserUpdateInput {
    /// New display name.
    pub name: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New plaintext password.
    pub password: Option<String>,
    /// New role storage value.
    pub role: Option<String>,
}

impl std::fmt::Debug for UserUpdateInput {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("UserUpdateInput")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("role", &self.role)
            .finish()
    }
}

/// Validated partial update of a user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUpdate {
    name: Option<NonEmptyString>,
    email: Option<EmailAddress>,
    password: Option<PlaintextPassword>,
    role: Option<UserRole>,
}

impl UserUpdate {
    /// Validates raw input into a typed update. At least one field is required.
    pub fn from_input(input: UserUpdateInput) -> AppResult<Self> {
        let update = Self {
            name: input
                .name
                .as_deref()
                .map(validate_display_name)
                .transpose()?,
            email: input.email.map(EmailAddress::new).transpose()?,
            password: input.password.map(PlaintextPassword::new).transpose()?,
            role: input
                .role
                .as_deref()
                .map(UserRole::from_str)
                .transpose()?,
        };

        if update.is_empty() {
            return Err(AppError::Validation(
                "update must include at least one field".to_owned(),
            ));
        }

        Ok(update)
    }

    /// Update that only renames the user.
    #[must_use]
    pub fn rename(name: NonEmptyString) -> Self {
        Self {
            name: Some(name),
            email: None,
            password: None,
            role: None,
        }
    }

    /// Update that only changes the role.
    #[must_use]
    pub fn change_role(role: UserRole) -> Self {
        Self {
            name: None,
            email: None,
            password: None,
            role: Some(role),
        }
    }

    /// Update that only replaces the password.
    #[must_use]
    pub fn change_password(password: PlaintextPassword) -> Self {
        Self {
            name: None,
            email: None,
            password: Some(password),
            role: None,
        }
    }

    /// Returns the requested name.
    #[must_use]
    pub fn name(&self) -> Option<&NonEmptyString> {
        self.name.as_ref()
    }

    /// Returns the requested email.
    #[must_use]
    pub fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }

    /// Returns the requested password.
    #[must_use]
    pub fn password(&self) -> Option<&PlaintextPassword> {
        self.password.as_ref()
    }

    /// Returns the requested role.
    #[must_use]
    pub fn role(&self) -> Option<UserRole> {
        self.role
    }

    /// Returns whether the update touches the role field.
    #[must_use]
    pub fn attempts_role_change(&self) -> bool {
        self.role.is_some()
    }

    fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none() && self.role.is_none()
    }

    /// Splits the update into its fields.
    #[must_use]
    pub fn into_parts(
        self,
    ) -> (
        Option<NonEmptyString>,
        Option<EmailAddress>,
        Option<PlaintextPassword>,
        Option<UserRole>,
    ) {
        (self.name, self.email, self.password, self.role)
    }
}
