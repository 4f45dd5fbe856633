//! Frame packing and unpacking.
//!
//! Wire layout (all multi-byte integers big-endian):
//!
//! ```text
//! offset  size  field
//! 0       4     magic = "GHST"
//! 4       2     version = 1
//! 6       4     ciphertext length
//! 10      32    salt
//! 42      16    nonce
//! 58      10    reserved, zero
//! 68      N     ciphertext
//! 68+N    16    authentication tag
//! ```
//!
//! The layout is normative and immutable for the lifetime of the process;
//! a stego image produced by any conforming implementation must unpack
//! here byte for byte.

use thiserror::Error;

use crate::crypto::{EncryptedMessage, NONCE_SIZE, SALT_SIZE, TAG_SIZE};

/// Magic bytes identifying a Ghost frame.
pub const MAGIC: [u8; 4] = *b"GHST";

/// Current protocol version. Parsed on read but not branched on; a
/// future multi-version format would decide compatibility here.
pub const PROTOCOL_VERSION: u16 = 1;

/// Fixed header size in bytes.
pub const HEADER_SIZE: usize = 68;

/// Reserved trailing header bytes, zero on write, ignored on read.
const RESERVED_SIZE: usize = 10;

const VERSION_OFFSET: usize = 4;
const LENGTH_OFFSET: usize = 6;
const SALT_OFFSET: usize = 10;
const NONCE_OFFSET: usize = SALT_OFFSET + SALT_SIZE;

/// Errors that can occur while packing or unpacking a frame.
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// Buffer is too short to hold a header, or the magic bytes do not
    /// match. Typical when extracting from an image that never carried a
    /// message, or one that went through lossy recompression.
    #[error("not a Ghost frame: {0}")]
    InvalidHeader(String),

    /// The header declares more ciphertext than the buffer contains.
    #[error("incomplete frame: expected {expected} bytes, got {actual}")]
    IncompleteFrame { expected: usize, actual: usize },

    /// Ciphertext length does not fit the 32-bit length field.
    #[error("ciphertext too large for frame: {0} bytes exceeds the u32 length field")]
    PayloadTooLarge(usize),
}

/// Total frame size for a ciphertext of `ciphertext_len` bytes.
pub fn packed_len(ciphertext_len: usize) -> usize {
    HEADER_SIZE + ciphertext_len + TAG_SIZE
}

/// Serializes an encrypted message into a wire frame.
pub fn pack(message: &EncryptedMessage) -> Result<Vec<u8>, ProtocolError> {
    let ciphertext_len = u32::try_from(message.ciphertext.len())
        .map_err(|_| ProtocolError::PayloadTooLarge(message.ciphertext.len()))?;

    let mut frame = Vec::with_capacity(packed_len(message.ciphertext.len()));
    frame.extend_from_slice(&MAGIC);
    frame.extend_from_slice(&PROTOCOL_VERSION.to_be_bytes());
    frame.extend_from_slice(&ciphertext_len.to_be_bytes());
    frame.extend_from_slice(&message.salt);
    frame.extend_from_slice(&message.nonce);
    frame.extend_from_slice(&[0u8; RESERVED_SIZE]);
    frame.extend_from_slice(&message.ciphertext);
    frame.extend_from_slice(&message.tag);

    Ok(frame)
}

/// Parses a wire frame back into an encrypted message.
pub fn unpack(frame: &[u8]) -> Result<EncryptedMessage, ProtocolError> {
    let min_size = HEADER_SIZE + TAG_SIZE;
    if frame.len() < min_size {
        return Err(ProtocolError::InvalidHeader(format!(
            "buffer is {} bytes, a frame needs at least {}",
            frame.len(),
            min_size
        )));
    }

    if frame[..4] != MAGIC {
        return Err(ProtocolError::InvalidHeader(format!(
            "bad magic {:02x?}, expected {:02x?}",
            &frame[..4],
            MAGIC
        )));
    }

    // Read but do not enforce: this implementation speaks version 1 only,
    // and the format has never shipped another version.
    let _version = u16::from_be_bytes([frame[VERSION_OFFSET], frame[VERSION_OFFSET + 1]]);

    let ciphertext_len = u32::from_be_bytes([
        frame[LENGTH_OFFSET],
        frame[LENGTH_OFFSET + 1],
        frame[LENGTH_OFFSET + 2],
        frame[LENGTH_OFFSET + 3],
    ]) as usize;

    let expected = packed_len(ciphertext_len);
    if frame.len() < expected {
        return Err(ProtocolError::IncompleteFrame {
            expected,
            actual: frame.len(),
        });
    }

    let mut salt = [0u8; SALT_SIZE];
    salt.copy_from_slice(&frame[SALT_OFFSET..SALT_OFFSET + SALT_SIZE]);

    let mut nonce = [0u8; NONCE_SIZE];
    nonce.copy_from_slice(&frame[NONCE_OFFSET..NONCE_OFFSET + NONCE_SIZE]);

    let ciphertext_end = HEADER_SIZE + ciphertext_len;
    let ciphertext = frame[HEADER_SIZE..ciphertext_end].to_vec();

    let mut tag = [0u8; TAG_SIZE];
    tag.copy_from_slice(&frame[ciphertext_end..ciphertext_end + TAG_SIZE]);

    Ok(EncryptedMessage {
        salt,
        nonce,
        ciphertext,
        tag,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_message(ciphertext: Vec<u8>) -> EncryptedMessage {
        EncryptedMessage {
            salt: [0xAA; SALT_SIZE],
            nonce: [0xBB; NONCE_SIZE],
            ciphertext,
            tag: [0xCC; TAG_SIZE],
        }
    }

    #[test]
    fn test_pack_unpack_roundtrip() {
        let message = make_test_message(vec![1, 2, 3, 4, 5]);

        let frame = pack(&message).unwrap();
        let unpacked = unpack(&frame).unwrap();

        assert_eq!(message, unpacked);
    }

    #[test]
    fn test_packed_layout() {
        let message = make_test_message(vec![9; 7]);
        let frame = pack(&message).unwrap();

        assert_eq!(frame.len(), packed_len(7));
        assert_eq!(&frame[..4], b"GHST");
        // Version 1, big-endian.
        assert_eq!(&frame[4..6], &[0x00, 0x01]);
        // Ciphertext length 7, big-endian.
        assert_eq!(&frame[6..10], &[0x00, 0x00, 0x00, 0x07]);
        assert_eq!(&frame[10..42], &[0xAA; 32]);
        assert_eq!(&frame[42..58], &[0xBB; 16]);
        // Reserved bytes must be zero.
        assert_eq!(&frame[58..68], &[0u8; 10]);
        assert_eq!(&frame[68..75], &[9; 7]);
        assert_eq!(&frame[75..91], &[0xCC; 16]);
    }

    #[test]
    fn test_empty_ciphertext() {
        let message = make_test_message(vec![]);

        let frame = pack(&message).unwrap();
        assert_eq!(frame.len(), HEADER_SIZE + TAG_SIZE);

        let unpacked = unpack(&frame).unwrap();
        assert!(unpacked.ciphertext.is_empty());
    }

    #[test]
    fn test_buffer_too_short() {
        let result = unpack(&[0u8; 40]);
        assert!(matches!(result, Err(ProtocolError::InvalidHeader(_))));
    }

    #[test]
    fn test_bad_magic() {
        let message = make_test_message(vec![1, 2, 3]);
        let mut frame = pack(&message).unwrap();
        frame[0] = b'X';

        let result = unpack(&frame);
        assert!(matches!(result, Err(ProtocolError::InvalidHeader(_))));
    }

    #[test]
    fn test_truncated_ciphertext() {
        let message = make_test_message(vec![7; 100]);
        let frame = pack(&message).unwrap();

        // Drop the last 10 bytes; the declared length no longer fits.
        let result = unpack(&frame[..frame.len() - 10]);
        assert!(matches!(
            result,
            Err(ProtocolError::IncompleteFrame {
                expected: 184,
                actual: 174
            })
        ));
    }

    #[test]
    fn test_unknown_version_is_not_rejected() {
        let message = make_test_message(vec![1, 2, 3]);
        let mut frame = pack(&message).unwrap();
        frame[5] = 0x02;

        // Version is parsed but not enforced in the single-version format.
        assert!(unpack(&frame).is_ok());
    }

    #[test]
    fn test_reserved_bytes_ignored_on_read() {
        let message = make_test_message(vec![1, 2, 3]);
        let mut frame = pack(&message).unwrap();
        for b in &mut frame[58..68] {
            *b = 0xFF;
        }

        let unpacked = unpack(&frame).unwrap();
        assert_eq!(unpacked, message);
    }
}
