//! Argon2id key derivation for password-based encryption.

use crate::config::{argon2_params, DEFAULT_CONTEXT};
use crate::error::{Error, Result};
use argon2::{Algorithm, Argon2, Params, Version};
use sha2::{Digest, Sha256};

/// Key derivation using Argon2id, salted by a caller-supplied context string.
///
/// Both sides of a seal/open exchange must agree on the context. When none
/// is given the fixed [`DEFAULT_CONTEXT`] is used, so the password alone is
/// enough to recover the payload.
#[derive(Debug, Clone)]
pub struct KeyDerivation {
    salt: [u8; argon2_params::SALT_LENGTH],
}

impl KeyDerivation {
    /// Create a KDF from an optional context string.
    ///
    /// Contexts are free-form and may be shorter than Argon2's minimum
    /// salt length, so the context is hashed down to a fixed 32-byte salt.
    pub fn from_context(context: Option<&str>) -> Self {
        let context = context.unwrap_or(DEFAULT_CONTEXT);
        let salt: [u8; argon2_params::SALT_LENGTH] = Sha256::digest(context.as_bytes()).into();
        Self { salt }
    }

    /// Get the salt bytes actually fed to Argon2.
    pub fn salt(&self) -> &[u8; argon2_params::SALT_LENGTH] {
        &self.salt
    }

    /// Derive a 256-bit key from a password.
    ///
    /// Uses Argon2id with the following parameters:
    /// - Memory: 64 MB
    /// - Iterations: 3
    /// - Parallelism: 4
    pub fn derive_key(&self, password: &str) -> Result<[u8; 32]> {
        let params = Params::new(
            argon2_params::MEMORY_COST,
            argon2_params::TIME_COST,
            argon2_params::PARALLELISM,
            Some(argon2_params::OUTPUT_LENGTH),
        )
        .map_err(|e| Error::KeyDerivation(e.to_string()))?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        let mut key = [0u8; 32];
        argon2
            .hash_password_into(password.as_bytes(), &self.salt, &mut key)
            .map_err(|e| Error::KeyDerivation(e.to_string()))?;

        Ok(key)
    }
}
