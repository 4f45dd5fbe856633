//! Ghost protocol wire format.
//!
//! Packages the cryptographic artifacts of one message (salt, nonce,
//! ciphertext, tag) into a single flat byte buffer with a fixed 68-byte
//! header, and parses such buffers back.

pub mod frame;

pub use frame::{
    pack, packed_len, unpack, ProtocolError, HEADER_SIZE, MAGIC, PROTOCOL_VERSION,
};
