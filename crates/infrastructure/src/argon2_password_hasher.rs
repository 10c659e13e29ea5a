//! Argon2id password hasher implementation.
//!
//! Uses OWASP-recommended Argon2id parameters:
//! m=19456 (19 MiB), t=2, p=1.

use argon2::password_hash::SaltString;
use argon2::{Algorithm, Argon2, Params, PasswordHasher, Version};
use usergate_application::PasswordHasher as PasswordHasherPort;
use usergate_core::{AppError, AppResult};
use usergate_domain::PlaintextPassword;

/// Memory cost in KiB.
const MEMORY_COST_KIB: u32 = 19_456;
/// Number of passes.
const TIME_COST: u32 = 2;
/// Degree of parallelism.
const PARALLELISM: u32 = 1;

/// Argon2id hasher producing PHC strings with a random salt per call.
#[derive(Clone)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    /// Creates a hasher with the recommended parameters.
    #[must_use]
    pub fn new() -> Self {
        let params = Params::new(MEMORY_COST_KIB, TIME_COST, PARALLELISM, None)
            .unwrap_or_else(|_| Params::default());

        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        }
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Argon2PasswordHasher {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Argon2PasswordHasher")
            .field("algorithm", &"argon2id")
            .field("memory_cost_kib", &MEMORY_COST_KIB)
            .field("time_cost", &TIME_COST)
            .finish()
    }
}

impl PasswordHasherPort for Argon2PasswordHasher {
    fn hash_password(&self, password: &PlaintextPassword) -> AppResult<String> {
        let salt = SaltString::generate(&mut argon2::password_hash::rand_core::OsRng);

        let hash = self
            .argon2
            .hash_password(password.expose().as_bytes(), &salt)
            .map_err(|error| AppError::Internal(format!("failed to hash password: {error}")))?;

        Ok(hash.to_string())
    }
}
