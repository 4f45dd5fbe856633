//! # Ghosthide - Hide encrypted messages in images
//!
//! Ghosthide hides an authenticated-encrypted text message inside the
//! pixel data of a raster image, so the existence of the message is not
//! apparent from casual inspection, and recovers it later given the
//! correct password.
//!
//! ## Overview
//!
//! Three layers form one pipeline:
//! - The message is encrypted with **AES-256-GCM**; the key is derived
//!   from the password with **PBKDF2-HMAC-SHA1** (100,000 iterations) and
//!   a fresh random salt
//! - The cryptographic artifacts are packed into the **Ghost protocol**
//!   frame: a fixed 68-byte header ("GHST" magic, version, lengths, salt,
//!   nonce) followed by ciphertext and tag
//! - The frame is embedded into the image with **LSB steganography**: one
//!   bit in each R, G, B channel, alpha untouched
//!
//! Hiding runs `encrypt -> pack -> embed`; revealing runs
//! `extract -> unpack -> decrypt`. Tampering with the image, or a wrong
//! password, is caught by GCM tag verification - garbage plaintext is
//! never returned.
//!
//! Lossless image formats only (PNG, BMP): lossy recompression destroys
//! the embedded bits.
//!
//! ## Example Usage
//!
//! ```rust
//! use ghosthide::{hide_message, reveal_message, ImageStego};
//! use image::{DynamicImage, RgbaImage};
//!
//! // Any lossless cover image works; 64x64 holds up to 1536 bytes.
//! let cover = DynamicImage::ImageRgba8(RgbaImage::new(64, 64));
//! let mut stego = ImageStego::from_image(cover);
//!
//! hide_message("Secret123!", "meet at dawn", &mut stego).unwrap();
//!
//! // Later, from the saved image...
//! let message = reveal_message("Secret123!", &stego).unwrap();
//! assert_eq!(message, "meet at dawn");
//! ```
//!
//! ## Modules
//!
//! - [`crypto`]: Key derivation and authenticated encryption
//! - [`protocol`]: Ghost frame packing and unpacking
//! - [`stego`]: LSB embedding and extraction
//! - [`encoder`]: Hide pipeline (encrypt, pack, embed)
//! - [`decoder`]: Reveal pipeline (extract, unpack, decrypt)

pub mod crypto;
pub mod decoder;
pub mod encoder;
pub mod protocol;
pub mod stego;

// Re-export commonly used types at the crate root
pub use crypto::{CryptoError, EncryptedMessage};
pub use decoder::{decrypt_message, reveal_message, RevealError};
pub use encoder::{encrypt_message, hide_message, HideError};
pub use protocol::{pack, packed_len, unpack, ProtocolError};
pub use stego::{ImageStego, ImageStegoError, LENGTH_PREFIX_SIZE};
