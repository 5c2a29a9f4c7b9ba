//! Configuration constants for Pixel Vault.

/// Wire format magic number: "PXLV" in bytes.
pub const MAGIC: [u8; 4] = [0x50, 0x58, 0x4C, 0x56];

/// Current wire format version.
pub const FORMAT_VERSION: u8 = 1;

/// Default context string used for key derivation and pixel sequencing
/// when the caller supplies none.
///
/// This constant is public: two parties only need to share a password to
/// exchange sealed images. The trade-off is that every user who omits a
/// context shares the same salt, which weakens resistance to precomputed
/// dictionary attacks. Supply a context for anything sensitive.
pub const DEFAULT_CONTEXT: &str = "pixel-vault-static-salt-v1";

/// Separator mixed between password and context when hashing the
/// sequence generator seed.
pub const SEED_SEPARATOR: &[u8] = b"::";

/// Argon2id parameters for key derivation.
pub mod argon2_params {
    /// Memory cost in KiB (64 MB).
    pub const MEMORY_COST: u32 = 65536;

    /// Time cost (iterations).
    pub const TIME_COST: u32 = 3;

    /// Parallelism factor.
    pub const PARALLELISM: u32 = 4;

    /// Output length in bytes (256 bits).
    pub const OUTPUT_LENGTH: usize = 32;

    /// Salt length in bytes.
    pub const SALT_LENGTH: usize = 32;
}
