//! Pixel Vault
//!
//! Hides an encrypted payload inside a raster image by writing one payload
//! bit into the least-significant bit of a deterministically-chosen pixel's
//! blue channel, recoverable only with the correct password (and optional
//! context string).
//!
//! # Features
//!
//! - **AES-256-GCM Encryption**: authenticated encryption with Argon2id key
//!   derivation, salted by an optional context string
//! - **Password-Seeded Scattering**: a deterministic generator scatters bits
//!   across the image, so without the credentials there is nothing to find
//! - **Tamper Detection**: any flipped payload bit fails authentication on
//!   open instead of yielding corrupted data
//! - **CLI Interface**: seal, open, and inspect PNG images from the shell
//!
//! # Architecture
//!
//! ```text
//! Payload → Encrypt (AES-256-GCM) → Frame (wire header) → Scatter (LSB slots)
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use pixel_vault::{vault, PixelSurface};
//!
//! // A 100x100 RGBA surface holds 10,000 bit slots.
//! let mut surface = PixelSurface::from_rgba(100, 100, vec![0u8; 100 * 100 * 4]).unwrap();
//!
//! vault::seal(&mut surface, b"meet at the usual place", "password", None).unwrap();
//!
//! let payload = vault::open(&surface, "password", None).unwrap();
//! assert_eq!(payload, b"meet at the usual place");
//! ```

pub mod config;
pub mod crypto;
pub mod embedding;
pub mod envelope;
pub mod error;
pub mod surface;
pub mod vault;

pub use error::{Error, Result};
pub use surface::PixelSurface;
pub use vault::{open, seal};
