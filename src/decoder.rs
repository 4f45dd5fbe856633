//! Reveal pipeline: extract, unpack, decrypt.
//!
//! The inverse of [`crate::encoder`], run bottom-up: pull the frame bits
//! out of the pixels, parse the Ghost frame, derive the key from the
//! password and the frame's salt, then decrypt and verify.

use thiserror::Error;

use crate::crypto::{self, CryptoError};
use crate::protocol::{self, ProtocolError};
use crate::stego::{ImageStego, ImageStegoError};

/// Errors that can occur while revealing a message.
#[derive(Error, Debug)]
pub enum RevealError {
    #[error("steganography error: {0}")]
    Stego(#[from] ImageStegoError),

    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("decryption error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("decrypted message is not valid UTF-8")]
    InvalidUtf8,
}

/// Decrypts a packed Ghost frame with a password.
///
/// Any bit flip anywhere in the frame's salt, nonce, ciphertext, or tag
/// regions, and any wrong password, surfaces as
/// [`CryptoError::AuthenticationFailure`]; unverified plaintext is never
/// returned.
pub fn decrypt_message(password: &str, frame: &[u8]) -> Result<String, RevealError> {
    let encrypted = protocol::unpack(frame)?;

    let key = crypto::derive_key(password.as_bytes(), &encrypted.salt);
    let plaintext = crypto::decrypt(
        &key,
        &encrypted.nonce,
        &encrypted.ciphertext,
        &encrypted.tag,
    )?;

    String::from_utf8(plaintext).map_err(|_| RevealError::InvalidUtf8)
}

/// Recovers a hidden message from a stego image.
pub fn reveal_message(password: &str, image: &ImageStego) -> Result<String, RevealError> {
    let frame = image.extract()?;
    decrypt_message(password, &frame)
}
