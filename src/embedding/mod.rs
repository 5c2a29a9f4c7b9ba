//! Deterministic pixel-slot selection.
//!
//! This module provides the password-seeded number stream and the
//! collision-free mapping of payload bits onto unique pixel slots. Seal and
//! open both derive the identical slot order from the same credentials.

mod allocator;
mod sequence;

pub use allocator::{allocate, SlotSequence};
pub use sequence::SequenceGenerator;
