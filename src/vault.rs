//! Seal and open orchestration.
//!
//! `seal` encrypts a payload, frames it with the wire header, and scatters
//! the resulting bits across password-chosen pixels. `open` retraces the
//! identical pixel sequence, reassembles the stream, and decrypts it.
//! Every piece of state involved lives and dies within one call.

use crate::crypto;
use crate::embedding::{allocate, SequenceGenerator, SlotSequence};
use crate::envelope::{self, HEADER_LEN};
use crate::error::{Error, Result};
use crate::surface::PixelSurface;

/// Encrypt `payload` and hide it inside `surface`.
///
/// The surface is mutated in place: one bit of the embedded stream lands
/// in the blue-channel LSB of each selected pixel. On
/// [`Error::CapacityExceeded`] the surface is left byte-for-byte untouched;
/// slot allocation happens before the first write.
pub fn seal(
    surface: &mut PixelSurface,
    payload: &[u8],
    password: &str,
    context: Option<&str>,
) -> Result<()> {
    let sealed = crypto::encrypt(payload, password, context)?;
    let stream = envelope::build(&sealed)?;

    let bit_count = stream.len() * 8;
    let capacity = surface.capacity();

    let generator = SequenceGenerator::new(password, context);
    let indices = allocate(capacity, bit_count, generator)?;

    for (i, &slot) in indices.iter().enumerate() {
        // Byte order, LSB-first within each byte.
        let bit = (stream[i / 8] >> (i % 8)) & 1;
        surface.write_bit(slot, bit);
    }

    Ok(())
}

/// Recover the payload hidden in `surface`.
///
/// Reads the fixed-size header first, validates it, then reads exactly the
/// advertised number of ciphertext bytes. Fails with
/// [`Error::Authentication`] when the header cannot be genuine (bad magic
/// or version, or an advertised length the surface could never hold) and
/// with [`Error::Integrity`] when AEAD verification rejects the extracted
/// ciphertext. No partial payload is ever returned.
pub fn open(surface: &PixelSurface, password: &str, context: Option<&str>) -> Result<Vec<u8>> {
    let capacity = surface.capacity();

    // A surface too small for even the header was never sealed.
    if HEADER_LEN * 8 > capacity {
        return Err(Error::Authentication);
    }

    let generator = SequenceGenerator::new(password, context);
    let mut slots = SlotSequence::new(capacity, generator);

    let mut header_bytes = [0u8; HEADER_LEN];
    read_bytes(surface, &mut slots, &mut header_bytes)?;
    let header = envelope::parse_header(&header_bytes)?;

    // Wrong credentials decode the length field from random bits; anything
    // the surface cannot hold is rejected here rather than read to
    // exhaustion.
    let ciphertext_len = header.ciphertext_len as usize;
    if HEADER_LEN * 8 + ciphertext_len * 8 > capacity {
        return Err(Error::Authentication);
    }

    let mut ciphertext = vec![0u8; ciphertext_len];
    read_bytes(surface, &mut slots, &mut ciphertext)?;

    let envelope = crypto::Envelope {
        iv: header.iv,
        auth_tag: header.auth_tag,
        ciphertext,
    };
    crypto::decrypt(&envelope, password, context)
}

/// Fill `buf` by reading one embedded bit per slot, eight per byte,
/// LSB-first — the mirror of the write loop in [`seal`].
fn read_bytes(surface: &PixelSurface, slots: &mut SlotSequence, buf: &mut [u8]) -> Result<()> {
    for byte in buf.iter_mut() {
        let mut value = 0u8;
        for bit in 0..8 {
            let slot = slots.next_slot()?;
            value |= surface.read_bit(slot) << bit;
        }
        *byte = value;
    }
    Ok(())
}
