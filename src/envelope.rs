//! Wire codec for the embedded byte stream.
//!
//! Layout, in order: magic (4) | version (1) | iv (12) | auth tag (16) |
//! ciphertext length (4, unsigned little-endian) | ciphertext. This layout
//! is fixed; changing it breaks every previously sealed image.

use crate::config::{FORMAT_VERSION, MAGIC};
use crate::crypto::{Envelope, IV_SIZE, TAG_SIZE};
use crate::error::{Error, Result};

/// Fixed header length: everything before the ciphertext.
pub const HEADER_LEN: usize = 4 + 1 + IV_SIZE + TAG_SIZE + 4;

/// Parsed header fields. The ciphertext itself is read separately once the
/// length is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub iv: [u8; IV_SIZE],
    pub auth_tag: [u8; TAG_SIZE],
    pub ciphertext_len: u32,
}

/// Serialize an envelope into the embedded byte stream.
pub fn build(envelope: &Envelope) -> Result<Vec<u8>> {
    let ciphertext_len = u32::try_from(envelope.ciphertext.len())
        .map_err(|_| Error::Encryption("ciphertext exceeds wire format length limit".into()))?;

    let mut stream = Vec::with_capacity(HEADER_LEN + envelope.ciphertext.len());
    stream.extend_from_slice(&MAGIC);
    stream.push(FORMAT_VERSION);
    stream.extend_from_slice(&envelope.iv);
    stream.extend_from_slice(&envelope.auth_tag);
    stream.extend_from_slice(&ciphertext_len.to_le_bytes());
    stream.extend_from_slice(&envelope.ciphertext);
    Ok(stream)
}

/// Parse the fixed-size header from extracted bytes.
///
/// A wrong password or context yields effectively random bits, so a magic
/// or version mismatch is reported as [`Error::Authentication`] without
/// distinguishing the two cases. Ciphertext content is never inspected
/// here; that is the AEAD layer's job.
pub fn parse_header(bytes: &[u8; HEADER_LEN]) -> Result<Header> {
    if bytes[0..4] != MAGIC {
        return Err(Error::Authentication);
    }
    if bytes[4] != FORMAT_VERSION {
        return Err(Error::Authentication);
    }

    let mut iv = [0u8; IV_SIZE];
    iv.copy_from_slice(&bytes[5..5 + IV_SIZE]);

    let mut auth_tag = [0u8; TAG_SIZE];
    auth_tag.copy_from_slice(&bytes[5 + IV_SIZE..5 + IV_SIZE + TAG_SIZE]);

    let len_offset = 5 + IV_SIZE + TAG_SIZE;
    let ciphertext_len = u32::from_le_bytes([
        bytes[len_offset],
        bytes[len_offset + 1],
        bytes[len_offset + 2],
        bytes[len_offset + 3],
    ]);

    Ok(Header {
        iv,
        auth_tag,
        ciphertext_len,
    })
}
