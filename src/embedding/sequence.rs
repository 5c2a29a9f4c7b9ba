//! Password-seeded deterministic number stream.

use crate::config::{DEFAULT_CONTEXT, SEED_SEPARATOR};
use sha2::{Digest, Sha256};

/// Deterministic pseudo-random number generator driving pixel selection.
///
/// The 32-bit state is seeded from a SHA-256 hash of the password and
/// context, then advanced with the Mulberry32 mixing function. The stream
/// is bit-exact across platforms: all arithmetic is wrapping `u32`, and the
/// final scale-and-floor runs in `f64`, which represents every 32-bit
/// intermediate exactly.
///
/// State is call-scoped; a generator is built, drained, and dropped within
/// one seal or open invocation.
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    state: u32,
}

impl SequenceGenerator {
    /// Seed a generator from a password and optional context.
    ///
    /// Changing either input completely alters the slot sequence, so a
    /// sealed image can only be walked again with both values intact.
    pub fn new(password: &str, context: Option<&str>) -> Self {
        let context = context.unwrap_or(DEFAULT_CONTEXT);

        let mut hasher = Sha256::new();
        hasher.update(password.as_bytes());
        hasher.update(SEED_SEPARATOR);
        hasher.update(context.as_bytes());
        let digest = hasher.finalize();

        // Seed is the first four digest bytes, big-endian.
        let state = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
        Self { state }
    }

    /// Draw the next value in `[0, bound)`.
    pub fn next(&mut self, bound: usize) -> usize {
        self.state = self.state.wrapping_add(0x6D2B_79F5);

        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        let uniform = t ^ (t >> 14);

        let fraction = uniform as f64 / 4_294_967_296.0;
        (fraction * bound as f64) as usize
    }
}
