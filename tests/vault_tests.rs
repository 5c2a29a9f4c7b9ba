//! Integration tests for seal/open end-to-end behavior.

use pixel_vault::embedding::{allocate, SequenceGenerator};
use pixel_vault::envelope::HEADER_LEN;
use pixel_vault::{vault, Error, PixelSurface};

const PASSWORD: &str = "correct-horse-battery-staple";
const PAYLOAD: &[u8] = b"{\"mission\":\"top_secret\"}";

/// Deterministic noise surface so failures reproduce across runs.
fn noise_surface(width: u32, height: u32) -> PixelSurface {
    let data: Vec<u8> = (0..width as usize * height as usize * 4)
        .map(|i| (i.wrapping_mul(131).wrapping_add(89) % 253) as u8)
        .collect();
    PixelSurface::from_rgba(width, height, data).expect("valid surface")
}

#[test]
fn test_seal_and_open_roundtrip() {
    let mut surface = noise_surface(100, 100);

    vault::seal(&mut surface, PAYLOAD, PASSWORD, None).expect("seal failed");
    let revealed = vault::open(&surface, PASSWORD, None).expect("open failed");

    assert_eq!(revealed, PAYLOAD);
}

#[test]
fn test_empty_payload_roundtrip() {
    let mut surface = noise_surface(100, 100);

    vault::seal(&mut surface, b"", PASSWORD, None).expect("seal failed");
    let revealed = vault::open(&surface, PASSWORD, None).expect("open failed");

    assert!(revealed.is_empty());
}

#[test]
fn test_custom_context_workflow() {
    let context = "unique-context-id";
    let mut surface = noise_surface(100, 100);

    vault::seal(&mut surface, PAYLOAD, PASSWORD, Some(context)).expect("seal failed");

    // Without the context the pixel walk is wrong, so the magic never
    // appears.
    assert!(vault::open(&surface, PASSWORD, None).is_err());

    let revealed = vault::open(&surface, PASSWORD, Some(context)).expect("open failed");
    assert_eq!(revealed, PAYLOAD);
}

#[test]
fn test_wrong_password_fails() {
    let mut surface = noise_surface(100, 100);

    vault::seal(&mut surface, PAYLOAD, PASSWORD, None).expect("seal failed");

    assert!(vault::open(&surface, "not-the-password", None).is_err());
}

#[test]
fn test_capacity_exceeded_on_tiny_image() {
    let mut surface = noise_surface(1, 1);
    let original = surface.data().to_vec();

    let result = vault::seal(&mut surface, PAYLOAD, PASSWORD, None);

    assert!(matches!(result, Err(Error::CapacityExceeded { .. })));
    assert_eq!(surface.data(), original.as_slice(), "surface must stay unmutated");
}

#[test]
fn test_capacity_boundary_exact_fit() {
    // An empty payload embeds exactly the header: HEADER_LEN * 8 bits.
    let exact_bits = (HEADER_LEN * 8) as u32;

    let mut surface = noise_surface(exact_bits, 1);
    vault::seal(&mut surface, b"", PASSWORD, None).expect("exact fit must succeed");

    let revealed = vault::open(&surface, PASSWORD, None).expect("open failed");
    assert!(revealed.is_empty());
}

#[test]
fn test_capacity_boundary_one_bit_over() {
    let exact_bits = HEADER_LEN * 8;

    let mut surface = noise_surface((exact_bits - 1) as u32, 1);
    let original = surface.data().to_vec();

    let result = vault::seal(&mut surface, b"", PASSWORD, None);

    assert!(matches!(
        result,
        Err(Error::CapacityExceeded { needed, available })
            if needed == exact_bits && available == exact_bits - 1
    ));
    assert_eq!(surface.data(), original.as_slice(), "surface must stay unmutated");
}

#[test]
fn test_max_payload_fills_surface() {
    // 100x100 = 10,000 bit slots = 1,250 bytes of stream.
    let max_payload = 10_000 / 8 - HEADER_LEN;
    let payload: Vec<u8> = (0..max_payload).map(|i| (i % 256) as u8).collect();

    let mut surface = noise_surface(100, 100);
    vault::seal(&mut surface, &payload, PASSWORD, None).expect("max payload must fit");

    let revealed = vault::open(&surface, PASSWORD, None).expect("open failed");
    assert_eq!(revealed, payload);

    // One more byte no longer fits.
    let mut surface = noise_surface(100, 100);
    let over: Vec<u8> = vec![0u8; max_payload + 1];
    assert!(matches!(
        vault::seal(&mut surface, &over, PASSWORD, None),
        Err(Error::CapacityExceeded { .. })
    ));
}

/// Flipping a single embedded bit must fail open, never return wrong data.
#[test]
fn test_tamper_detection_on_single_bit() {
    let mut surface = noise_surface(100, 100);
    vault::seal(&mut surface, PAYLOAD, PASSWORD, None).expect("seal failed");

    // Retrace the slot sequence to find which pixels carry the stream.
    let stream_bits = (HEADER_LEN + PAYLOAD.len()) * 8;
    let generator = SequenceGenerator::new(PASSWORD, None);
    let indices = allocate(surface.capacity(), stream_bits, generator).expect("allocate failed");

    // A header bit (first magic bit) breaks header parsing.
    let mut tampered = surface.clone();
    tampered.write_bit(indices[0], tampered.read_bit(indices[0]) ^ 1);
    assert!(matches!(
        vault::open(&tampered, PASSWORD, None),
        Err(Error::Authentication)
    ));

    // A ciphertext bit (last slot) passes the header but fails AEAD.
    let last = *indices.last().unwrap();
    let mut tampered = surface.clone();
    tampered.write_bit(last, tampered.read_bit(last) ^ 1);
    assert!(matches!(
        vault::open(&tampered, PASSWORD, None),
        Err(Error::Integrity)
    ));
}

#[test]
fn test_seal_is_nondeterministic_but_open_is_stable() {
    // Two seals of the same payload differ (fresh iv) yet both open.
    let mut surface1 = noise_surface(100, 100);
    let mut surface2 = noise_surface(100, 100);

    vault::seal(&mut surface1, PAYLOAD, PASSWORD, None).expect("seal failed");
    vault::seal(&mut surface2, PAYLOAD, PASSWORD, None).expect("seal failed");

    assert_ne!(surface1.data(), surface2.data());
    assert_eq!(vault::open(&surface1, PASSWORD, None).unwrap(), PAYLOAD);
    assert_eq!(vault::open(&surface2, PASSWORD, None).unwrap(), PAYLOAD);
}

/// The PNG collaborator must round-trip every byte exactly.
#[test]
fn test_png_container_roundtrip() {
    let temp_dir = tempfile::TempDir::new().expect("failed to create temp dir");
    let path = temp_dir.path().join("sealed.png");

    let mut surface = noise_surface(64, 64);
    vault::seal(&mut surface, PAYLOAD, PASSWORD, None).expect("seal failed");

    let (width, height) = (surface.width(), surface.height());
    let img = image::RgbaImage::from_raw(width, height, surface.into_rgba())
        .expect("surface buffer mismatch");
    img.save_with_format(&path, image::ImageFormat::Png)
        .expect("failed to write PNG");

    let reloaded = image::open(&path).expect("failed to read PNG").to_rgba8();
    let surface = PixelSurface::from_rgba(width, height, reloaded.into_raw())
        .expect("valid surface");

    let revealed = vault::open(&surface, PASSWORD, None).expect("open failed");
    assert_eq!(revealed, PAYLOAD);
}
