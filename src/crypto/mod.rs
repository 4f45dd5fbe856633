//! Cryptographic operations for Ghosthide.
//!
//! This module provides:
//! - Key derivation from password + salt (PBKDF2-HMAC-SHA1, 100k iterations)
//! - Authenticated encryption (AES-256-GCM, 16-byte nonce, 128-bit tag)
//!
//! Both operations are deterministic given their inputs; all randomness
//! (salt, nonce) is injected by the pipeline layer in [`crate::encoder`].

pub mod cipher;
pub mod kdf;

pub use cipher::{decrypt, encrypt, CryptoError, EncryptedMessage, NONCE_SIZE, TAG_SIZE};
pub use kdf::{derive_key, KEY_SIZE, PBKDF2_ITERATIONS, SALT_SIZE};
