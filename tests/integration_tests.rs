//! Integration tests for Ghosthide
//!
//! These exercise the whole pipeline the way the CLI does:
//! hide = encrypt -> pack -> embed, reveal = extract -> unpack -> decrypt.
//!
//! Contracts under test:
//! - Byte-exact Ghost frame layout (68-byte header + ciphertext + tag)
//! - Tamper sensitivity: any flipped bit fails authentication
//! - Capacity boundary: floor(w*h*3/8) bytes, prefix included
//! - Alpha channels survive embedding untouched

use ghosthide::crypto::CryptoError;
use ghosthide::{
    decrypt_message, encrypt_message, hide_message, pack, packed_len, reveal_message, unpack,
    ImageStego, RevealError,
};
use image::{DynamicImage, ImageBuffer, Rgba};

fn create_test_image(width: u32, height: u32) -> DynamicImage {
    let img = ImageBuffer::from_fn(width, height, |x, y| {
        Rgba([
            ((x * 17) % 256) as u8,
            ((y * 23) % 256) as u8,
            (((x + y) * 31) % 256) as u8,
            ((128 + 3 * x + y) % 256) as u8,
        ])
    });
    DynamicImage::ImageRgba8(img)
}

/// Test the full hide/reveal roundtrip
#[test]
fn test_hide_reveal_roundtrip() {
    let mut stego = ImageStego::from_image(create_test_image(100, 100));
    let password = "correct horse battery staple";
    let message = "The package is in locker 42.";

    hide_message(password, message, &mut stego).unwrap();
    let revealed = reveal_message(password, &stego).unwrap();

    assert_eq!(revealed, message);
}

/// Concrete scenario pinned by the wire format: a 12-byte UTF-8 message
/// packs to exactly 68 + 12 + 16 = 96 bytes.
#[test]
fn test_concrete_frame_size_scenario() {
    let password = "Secret123!";
    let message = "meet at dawn";

    let encrypted = encrypt_message(password, message).unwrap();
    assert_eq!(encrypted.ciphertext.len(), 12);

    let frame = pack(&encrypted).unwrap();
    assert_eq!(frame.len(), 96);
    assert_eq!(frame.len(), packed_len(message.len()));

    let unpacked = unpack(&frame).unwrap();
    assert_eq!(unpacked, encrypted);

    let decrypted = decrypt_message(password, &frame).unwrap();
    assert_eq!(decrypted, message);
}

/// Flipping any single bit in the salt, nonce, ciphertext, or tag region
/// of a packed frame must fail authentication, never yield altered text.
#[test]
fn test_tamper_sensitivity() {
    let password = "pw";
    let message = "meet at dawn";

    let encrypted = encrypt_message(password, message).unwrap();
    let frame = pack(&encrypted).unwrap();

    // One offset inside each sensitive region: salt (10..42),
    // nonce (42..58), ciphertext (68..80), tag (80..96).
    for &offset in &[10, 41, 42, 57, 68, 79, 80, 95] {
        for bit in 0..8 {
            let mut tampered = frame.clone();
            tampered[offset] ^= 1 << bit;

            let result = decrypt_message(password, &tampered);
            assert!(
                matches!(
                    result,
                    Err(RevealError::Crypto(CryptoError::AuthenticationFailure))
                ),
                "bit {} at offset {} was not caught",
                bit,
                offset
            );
        }
    }
}

/// Test that the wrong password always fails authentication
#[test]
fn test_wrong_password_fails() {
    let mut stego = ImageStego::from_image(create_test_image(64, 64));

    hide_message("right", "secret rendezvous", &mut stego).unwrap();
    let result = reveal_message("wrong", &stego);

    assert!(matches!(
        result,
        Err(RevealError::Crypto(CryptoError::AuthenticationFailure))
    ));
}

/// Test multibyte UTF-8 messages survive the pipeline
#[test]
fn test_utf8_message_roundtrip() {
    let mut stego = ImageStego::from_image(create_test_image(64, 64));
    let message = "αποστολή εξετελέσθη 🕶️";

    hide_message("pw", message, &mut stego).unwrap();

    assert_eq!(reveal_message("pw", &stego).unwrap(), message);
}

/// Test the exact capacity boundary at pipeline level.
///
/// The LSB payload for an n-byte message is 4 (length prefix) + 68
/// (header) + n + 16 (tag) = 88 + n bytes. A 267x1 image holds exactly
/// floor(267*3/8) = 100 bytes: a 12-byte message fits with nothing to
/// spare, a 13-byte one must be rejected.
#[test]
fn test_capacity_boundary() {
    let mut stego = ImageStego::from_image(create_test_image(267, 1));
    assert_eq!(stego.capacity(), 100);

    let at_boundary = "twelve bytes";
    hide_message("pw", at_boundary, &mut stego).unwrap();
    assert_eq!(reveal_message("pw", &stego).unwrap(), at_boundary);

    let mut stego = ImageStego::from_image(create_test_image(267, 1));
    let result = hide_message("pw", "thirteen byte", &mut stego);
    assert!(result.is_err());
}

/// Test that an image never touched by embedding does not produce a
/// plausible message.
#[test]
fn test_garbage_image_never_reveals() {
    let stego = ImageStego::from_image(create_test_image(80, 80));

    let result = reveal_message("any password", &stego);

    assert!(result.is_err());
}

/// Test that the hidden message survives PNG encoding and decoding
#[test]
fn test_message_survives_png_roundtrip() {
    let mut stego = ImageStego::from_image(create_test_image(100, 100));
    let password = "png-safe";
    let message = "lossless formats keep every bit";

    hide_message(password, message, &mut stego).unwrap();

    let png_bytes = stego.to_png_bytes().unwrap();
    let reloaded = ImageStego::from_bytes(&png_bytes).unwrap();

    assert_eq!(reveal_message(password, &reloaded).unwrap(), message);
}

/// Test that embedding preserves every alpha value end to end
#[test]
fn test_alpha_preserved_through_pipeline() {
    let original = create_test_image(64, 64);
    let mut stego = ImageStego::from_image(original.clone());

    hide_message("pw", "transparency intact", &mut stego).unwrap();

    let before = original.to_rgba8();
    let after = stego.image().to_rgba8();
    for (p_before, p_after) in before.pixels().zip(after.pixels()) {
        assert_eq!(p_before.0[3], p_after.0[3]);
    }
}

/// Test that two hides of the same message produce different frames
/// (fresh salt and nonce per message)
#[test]
fn test_frames_are_unique_per_message() {
    let a = pack(&encrypt_message("pw", "same").unwrap()).unwrap();
    let b = pack(&encrypt_message("pw", "same").unwrap()).unwrap();

    assert_ne!(a, b);

    // Both still decrypt with the same password.
    assert_eq!(decrypt_message("pw", &a).unwrap(), "same");
    assert_eq!(decrypt_message("pw", &b).unwrap(), "same");
}

/// Test hiding the longest message that fits and revealing it back
#[test]
fn test_large_message_roundtrip() {
    // 200x200 -> capacity 15000 bytes; frame overhead is 88 + 4 prefix.
    let mut stego = ImageStego::from_image(create_test_image(200, 200));
    let message: String = std::iter::repeat("all work and no play. ")
        .take(600)
        .collect();
    assert!(packed_len(message.len()) + 4 <= stego.capacity());

    hide_message("pw", &message, &mut stego).unwrap();

    assert_eq!(reveal_message("pw", &stego).unwrap(), message);
}
