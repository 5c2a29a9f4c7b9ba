//! Error types for Pixel Vault.

use thiserror::Error;

/// Result type alias for Pixel Vault operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Pixel Vault operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The payload plus header needs more bit slots than the surface has
    /// pixels. Raised before any pixel is touched.
    #[error("capacity exceeded: surface holds {available} bits, data requires {needed} bits")]
    CapacityExceeded { needed: usize, available: usize },

    /// Extracted header did not carry the expected magic or version.
    ///
    /// The message covers both the wrong-credentials case and the
    /// never-sealed case; distinguishing them would leak which check
    /// failed.
    #[error("authentication failed: wrong password/context or not a sealed image")]
    Authentication,

    /// AEAD verification failed after a structurally valid header.
    #[error("integrity check failed: embedded data tampered with or wrong credentials")]
    Integrity,

    /// Key derivation error.
    #[error("key derivation error: {0}")]
    KeyDerivation(String),

    /// Encryption error.
    #[error("encryption error: {0}")]
    Encryption(String),

    /// Pixel surface does not satisfy the RGBA layout contract.
    #[error("invalid pixel surface: {0}")]
    Surface(String),
}
