//! Collision-free slot allocation over a finite pixel surface.

use crate::embedding::sequence::SequenceGenerator;
use crate::error::{Error, Result};
use std::collections::HashSet;

/// A lazily-drawn sequence of unique pixel slots.
///
/// Each draw rejection-samples the generator until it lands on a slot not
/// yet used within this call. There is no upper bound on the number of
/// retries; with payloads far smaller than capacity the expected retry
/// count stays near zero, degrading only as the surface fills up
/// (coupon-collector behavior).
#[derive(Debug)]
pub struct SlotSequence {
    capacity: usize,
    used: HashSet<usize>,
    generator: SequenceGenerator,
}

impl SlotSequence {
    /// Create a slot sequence over `capacity` slots.
    pub fn new(capacity: usize, generator: SequenceGenerator) -> Self {
        Self {
            capacity,
            used: HashSet::new(),
            generator,
        }
    }

    /// Number of slots not yet handed out.
    pub fn remaining(&self) -> usize {
        self.capacity - self.used.len()
    }

    /// Draw the next unused slot index in `[0, capacity)`.
    ///
    /// Fails with [`Error::CapacityExceeded`] once every slot is used.
    /// Callers are expected to bound their demand up front so this draw
    /// never spins on a full set.
    pub fn next_slot(&mut self) -> Result<usize> {
        if self.remaining() == 0 {
            return Err(Error::CapacityExceeded {
                needed: self.used.len() + 1,
                available: self.capacity,
            });
        }

        loop {
            let slot = self.generator.next(self.capacity);
            if self.used.insert(slot) {
                return Ok(slot);
            }
        }
    }
}

/// Allocate `bit_count` unique slot indices in `[0, capacity)`, in strict
/// draw order.
///
/// Fails with [`Error::CapacityExceeded`] before the first draw when the
/// demand cannot fit. The same `(password, context, capacity, bit_count)`
/// tuple reproduces the identical index sequence, which is what lets open
/// retrace the slots seal wrote.
pub fn allocate(
    capacity: usize,
    bit_count: usize,
    generator: SequenceGenerator,
) -> Result<Vec<usize>> {
    if bit_count > capacity {
        return Err(Error::CapacityExceeded {
            needed: bit_count,
            available: capacity,
        });
    }

    let mut slots = SlotSequence::new(capacity, generator);
    let mut indices = Vec::with_capacity(bit_count);
    for _ in 0..bit_count {
        indices.push(slots.next_slot()?);
    }
    Ok(indices)
}
