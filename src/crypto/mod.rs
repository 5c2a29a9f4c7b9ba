//! Cryptographic operations for Pixel Vault.
//!
//! This module provides:
//! - AES-256-GCM authenticated encryption
//! - Argon2id password-based key derivation, salted by a context string

mod cipher;
mod kdf;

pub use cipher::{decrypt, encrypt, Cipher, Envelope, IV_SIZE, TAG_SIZE};
pub use kdf::KeyDerivation;
