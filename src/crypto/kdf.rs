//! Password-based key derivation for Ghosthide.
//!
//! Derives the AES-256 key from a password and a per-message random salt
//! using PBKDF2-HMAC-SHA1 with a fixed iteration count. The same
//! password + salt pair always yields the same key, which is what makes
//! the hide/reveal round trip possible.

use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;
use zeroize::Zeroizing;

/// PBKDF2 iteration count. Part of the wire-compatibility contract:
/// changing it breaks decryption of existing stego images.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Salt size in bytes.
pub const SALT_SIZE: usize = 32;

/// Derived key size in bytes (AES-256).
pub const KEY_SIZE: usize = 32;

/// Derives a 256-bit key from a password and a 32-byte salt.
///
/// The key is wrapped in [`Zeroizing`] so it is wiped from memory as soon
/// as the caller drops it; it must never be persisted.
pub fn derive_key(password: &[u8], salt: &[u8; SALT_SIZE]) -> Zeroizing<[u8; KEY_SIZE]> {
    let mut key = Zeroizing::new([0u8; KEY_SIZE]);
    pbkdf2_hmac::<Sha1>(password, salt, PBKDF2_ITERATIONS, &mut *key);
    key
}
