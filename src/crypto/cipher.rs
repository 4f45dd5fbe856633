//! Authenticated encryption for Ghosthide.
//!
//! AES-256-GCM with a 128-bit tag and a 16-byte nonce. The wire format
//! predates this implementation and fixes the nonce at 16 bytes rather
//! than the conventional 12, so the cipher is instantiated with an
//! explicit nonce size instead of the stock `Aes256Gcm` alias.

use aes_gcm::{
    aead::{consts::U16, generic_array::GenericArray, Aead, KeyInit},
    aes::Aes256,
    AesGcm, Nonce,
};
use thiserror::Error;

use crate::crypto::kdf::{KEY_SIZE, SALT_SIZE};

/// AES-256-GCM parameterized with the protocol's 16-byte nonce.
type GhostCipher = AesGcm<Aes256, U16>;

/// Nonce size for AES-GCM as used by the Ghost protocol.
pub const NONCE_SIZE: usize = 16;

/// GCM authentication tag size.
pub const TAG_SIZE: usize = 16;

/// Errors that can occur during authenticated encryption.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Tag verification failed. This is the sole detection mechanism for
    /// a wrong password or any alteration of salt, nonce, ciphertext, or
    /// tag; no plaintext is released when it fires.
    #[error("authentication failed: wrong password or corrupted data")]
    AuthenticationFailure,

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),
}

/// The cryptographic artifacts of one encrypted message.
///
/// Everything needed to decrypt (given the password) travels together:
/// the salt for key derivation, the nonce, the ciphertext, and the tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedMessage {
    /// Key derivation salt, fresh per message.
    pub salt: [u8; SALT_SIZE],
    /// AES-GCM nonce, fresh per message.
    pub nonce: [u8; NONCE_SIZE],
    /// Encrypted payload.
    pub ciphertext: Vec<u8>,
    /// GCM authentication tag.
    pub tag: [u8; TAG_SIZE],
}

/// Encrypts plaintext under a derived key, returning ciphertext and tag
/// separately.
pub fn encrypt(
    key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    plaintext: &[u8],
) -> Result<(Vec<u8>, [u8; TAG_SIZE]), CryptoError> {
    let cipher = GhostCipher::new(GenericArray::from_slice(key));
    let nonce = Nonce::<U16>::from_slice(nonce);

    // The aead API appends the tag to the ciphertext; split it back out
    // because the wire format carries the two as separate fields.
    let mut combined = cipher
        .encrypt(nonce, plaintext)
        .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;

    let tag_start = combined.len() - TAG_SIZE;
    let mut tag = [0u8; TAG_SIZE];
    tag.copy_from_slice(&combined[tag_start..]);
    combined.truncate(tag_start);

    Ok((combined, tag))
}

/// Decrypts and verifies a ciphertext + tag pair.
///
/// Fails with [`CryptoError::AuthenticationFailure`] if the tag does not
/// verify; partial or unverified plaintext is never returned.
pub fn decrypt(
    key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    ciphertext: &[u8],
    tag: &[u8; TAG_SIZE],
) -> Result<Vec<u8>, CryptoError> {
    let cipher = GhostCipher::new(GenericArray::from_slice(key));
    let nonce = Nonce::<U16>::from_slice(nonce);

    let mut combined = Vec::with_capacity(ciphertext.len() + TAG_SIZE);
    combined.extend_from_slice(ciphertext);
    combined.extend_from_slice(tag);

    cipher
        .decrypt(nonce, combined.as_ref())
        .map_err(|_| CryptoError::AuthenticationFailure)
}
