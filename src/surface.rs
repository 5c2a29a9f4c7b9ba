//! Abstract RGBA pixel surface the vault embeds into.

use crate::error::{Error, Result};

/// Bytes per pixel (R, G, B, A).
const CHANNELS: usize = 4;

/// Offset of the blue channel within a pixel.
const BLUE: usize = 2;

/// A rectangular grid of RGBA pixels, one byte per channel.
///
/// The vault owns no image-format knowledge: collaborators decode a
/// container (PNG in the bundled CLI) into this buffer and re-encode it
/// afterwards. The container must be lossless; any codec that perturbs
/// channel bytes destroys the embedded bits.
///
/// Each pixel contributes exactly one bit slot, carried in bit 0 of the
/// blue channel. All other bits are never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelSurface {
    /// Wrap a raw RGBA buffer.
    ///
    /// Fails with [`Error::Surface`] when the dimensions are zero or the
    /// buffer length is not `width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::Surface(format!(
                "dimensions must be positive, got {}x{}",
                width, height
            )));
        }

        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(Error::Surface(format!(
                "buffer length {} does not match {}x{} RGBA ({} bytes)",
                data.len(),
                width,
                height,
                expected
            )));
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of bit slots (one per pixel).
    pub fn capacity(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Borrow the raw RGBA bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the surface, returning the raw RGBA buffer for re-encoding.
    pub fn into_rgba(self) -> Vec<u8> {
        self.data
    }

    /// Read the embedded bit at `slot`.
    pub fn read_bit(&self, slot: usize) -> u8 {
        self.data[slot * CHANNELS + BLUE] & 1
    }

    /// Write `bit` into the blue-channel LSB at `slot`.
    pub fn write_bit(&mut self, slot: usize, bit: u8) {
        let offset = slot * CHANNELS + BLUE;
        self.data[offset] = (self.data[offset] & 0xFE) | (bit & 1);
    }
}
