//! Steganography module for hiding byte payloads in carrier images.
//!
//! The codec is protocol-agnostic: it transports an arbitrary byte buffer
//! behind a 4-byte big-endian length prefix and knows nothing about what
//! the bytes mean.

pub mod image;

pub use image::{ImageStego, ImageStegoError, LENGTH_PREFIX_SIZE};
