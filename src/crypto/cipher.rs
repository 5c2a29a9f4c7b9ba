//! AES-256-GCM authenticated encryption.

use crate::crypto::kdf::KeyDerivation;
use crate::error::{Error, Result};
use aes_gcm::aead::Aead;
use aes_gcm::{Aes256Gcm, KeyInit, Nonce};
use rand::RngCore;

/// Nonce size for AES-GCM (96 bits).
pub const IV_SIZE: usize = 12;

/// Authentication tag size (128 bits).
pub const TAG_SIZE: usize = 16;

/// Output of one encryption call: everything `decrypt` needs besides the
/// password. Never reused across calls; the iv is freshly drawn each time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// Random per-call nonce.
    pub iv: [u8; IV_SIZE],
    /// GCM authentication tag over the ciphertext.
    pub auth_tag: [u8; TAG_SIZE],
    /// Encrypted payload, same length as the plaintext.
    pub ciphertext: Vec<u8>,
}

/// AES-256-GCM cipher wrapper.
pub struct Cipher {
    cipher: Aes256Gcm,
}

impl Cipher {
    /// Create a new cipher from a derived key.
    pub fn new(key: [u8; 32]) -> Result<Self> {
        let cipher = Aes256Gcm::new_from_slice(&key)
            .map_err(|e| Error::Encryption(e.to_string()))?;
        Ok(Self { cipher })
    }

    /// Encrypt plaintext with a random nonce.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Envelope> {
        let mut iv = [0u8; IV_SIZE];
        rand::thread_rng().fill_bytes(&mut iv);
        let nonce = Nonce::from_slice(&iv);

        // The aead API appends the 16-byte tag to the ciphertext; the wire
        // format carries them as separate fields.
        let mut sealed = self
            .cipher
            .encrypt(nonce, plaintext)
            .map_err(|e| Error::Encryption(e.to_string()))?;

        let tag_offset = sealed.len() - TAG_SIZE;
        let mut auth_tag = [0u8; TAG_SIZE];
        auth_tag.copy_from_slice(&sealed[tag_offset..]);
        sealed.truncate(tag_offset);

        Ok(Envelope {
            iv,
            auth_tag,
            ciphertext: sealed,
        })
    }

    /// Decrypt an envelope produced by `encrypt`.
    ///
    /// Verification and decryption are a single AEAD call; a tag mismatch
    /// yields [`Error::Integrity`] and no plaintext.
    pub fn decrypt(&self, envelope: &Envelope) -> Result<Vec<u8>> {
        let nonce = Nonce::from_slice(&envelope.iv);

        let mut sealed = Vec::with_capacity(envelope.ciphertext.len() + TAG_SIZE);
        sealed.extend_from_slice(&envelope.ciphertext);
        sealed.extend_from_slice(&envelope.auth_tag);

        self.cipher
            .decrypt(nonce, sealed.as_ref())
            .map_err(|_| Error::Integrity)
    }
}

/// Encrypt a payload with a password and optional context.
///
/// Uses Argon2id for key derivation and AES-256-GCM for encryption.
pub fn encrypt(plaintext: &[u8], password: &str, context: Option<&str>) -> Result<Envelope> {
    let kdf = KeyDerivation::from_context(context);
    let key = kdf.derive_key(password)?;
    Cipher::new(key)?.encrypt(plaintext)
}

/// Decrypt an envelope with a password and optional context.
///
/// The context must match the one used for encryption.
pub fn decrypt(envelope: &Envelope, password: &str, context: Option<&str>) -> Result<Vec<u8>> {
    let kdf = KeyDerivation::from_context(context);
    let key = kdf.derive_key(password)?;
    Cipher::new(key)?.decrypt(envelope)
}
