//! Hide pipeline: encrypt, pack, embed.
//!
//! Randomness enters the system here and only here: a fresh 32-byte salt
//! and 16-byte nonce are drawn from the OS RNG for every message, then
//! threaded through key derivation and the cipher.

use rand::rngs::OsRng;
use rand::RngCore;
use thiserror::Error;

use crate::crypto::{self, CryptoError, EncryptedMessage, NONCE_SIZE, SALT_SIZE};
use crate::protocol::{self, ProtocolError};
use crate::stego::{ImageStego, ImageStegoError};

/// Errors that can occur while hiding a message.
#[derive(Error, Debug)]
pub enum HideError {
    #[error("encryption error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("steganography error: {0}")]
    Stego(#[from] ImageStegoError),
}

/// Encrypts a plaintext message under a password.
///
/// Generates a fresh salt and nonce, derives the key, and encrypts. The
/// derived key lives only for the duration of this call.
pub fn encrypt_message(password: &str, plaintext: &str) -> Result<EncryptedMessage, CryptoError> {
    let mut salt = [0u8; SALT_SIZE];
    OsRng.fill_bytes(&mut salt);

    let mut nonce = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce);

    let key = crypto::derive_key(password.as_bytes(), &salt);
    let (ciphertext, tag) = crypto::encrypt(&key, &nonce, plaintext.as_bytes())?;

    Ok(EncryptedMessage {
        salt,
        nonce,
        ciphertext,
        tag,
    })
}

/// Hides an encrypted message inside a carrier image.
///
/// Runs the full pipeline: encrypt the plaintext, pack the artifacts into
/// a Ghost frame, embed the frame into the image's pixel buffer. If any
/// step fails the image is left unmodified.
pub fn hide_message(
    password: &str,
    plaintext: &str,
    image: &mut ImageStego,
) -> Result<(), HideError> {
    let encrypted = encrypt_message(password, plaintext)?;
    let frame = protocol::pack(&encrypted)?;
    image.embed(&frame)?;
    Ok(())
}
