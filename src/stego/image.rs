//! LSB (Least Significant Bit) steganography for images.
//!
//! Hides data in bit 0 of the R, G, and B channels, walking pixels in
//! raster order and channels in R, G, B order within each pixel. Bits are
//! taken most-significant-first from each payload byte. The alpha channel
//! is never touched, so transparency survives embedding.
//!
//! On-image format: [4-byte big-endian length] + [data bytes]. Lossless
//! output formats only (PNG, BMP); lossy recompression destroys the bits.

use image::{DynamicImage, GenericImageView, ImageFormat};
use std::io::Cursor;
use std::path::Path;
use thiserror::Error;

/// Size of the length prefix written before the payload.
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// Errors that can occur during image steganography.
#[derive(Error, Debug)]
pub enum ImageStegoError {
    /// Payload plus length prefix does not fit in the image. Reported
    /// before any pixel is modified.
    #[error("payload too large: need {needed} bytes, image holds {capacity}")]
    CapacityExceeded { needed: usize, capacity: usize },

    /// The first 32 extracted bits declare a length the image could not
    /// possibly hold. The image carries no message, or a corrupted one.
    #[error("invalid length header: declared {declared} bytes, capacity is {capacity}")]
    InvalidLengthHeader { declared: usize, capacity: usize },

    /// The pixel stream ran out before the declared payload was read.
    #[error("incomplete extraction: expected {expected} bytes, recovered {recovered}")]
    IncompleteExtraction { expected: usize, recovered: usize },

    #[error("image load error: {0}")]
    ImageLoad(String),

    #[error("image save error: {0}")]
    ImageSave(String),
}

/// A carrier image for LSB embedding and extraction.
///
/// The pixel buffer is exclusively owned and mutated in place by
/// [`embed`](ImageStego::embed); extraction reads the same traversal
/// order without modifying anything.
pub struct ImageStego {
    image: DynamicImage,
}

impl ImageStego {
    /// Loads a carrier image from a file path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ImageStegoError> {
        let image = image::open(path).map_err(|e| ImageStegoError::ImageLoad(e.to_string()))?;
        Ok(Self { image })
    }

    /// Loads a carrier image from encoded bytes (PNG, BMP, ...).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ImageStegoError> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| ImageStegoError::ImageLoad(e.to_string()))?;
        Ok(Self { image })
    }

    /// Wraps an already decoded image.
    pub fn from_image(image: DynamicImage) -> Self {
        Self { image }
    }

    /// Image dimensions as (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Maximum number of bytes this image can carry, length prefix
    /// included: `floor(width * height * 3 / 8)`.
    ///
    /// Three bit-channels per pixel (R, G, B); alpha is off limits.
    pub fn capacity(&self) -> usize {
        let (width, height) = self.image.dimensions();
        (width as usize) * (height as usize) * 3 / 8
    }

    /// Embeds a payload into the image, mutating the pixel buffer in place.
    ///
    /// The payload is prefixed with its length as a big-endian u32; bits
    /// are written most-significant-first into the LSB of each R, G, B
    /// channel in raster order. Pixels past the end of the payload are
    /// left untouched. Fails with [`ImageStegoError::CapacityExceeded`]
    /// before any mutation if the framed payload does not fit.
    pub fn embed(&mut self, payload: &[u8]) -> Result<(), ImageStegoError> {
        let capacity = self.capacity();
        let needed = LENGTH_PREFIX_SIZE + payload.len();

        // The 4-byte prefix also caps payloads at u32::MAX bytes.
        if needed > capacity || payload.len() > u32::MAX as usize {
            return Err(ImageStegoError::CapacityExceeded { needed, capacity });
        }

        let mut framed = Vec::with_capacity(needed);
        framed.extend_from_slice(&(payload.len() as u32).to_be_bytes());
        framed.extend_from_slice(payload);

        let mut rgba = self.image.to_rgba8();
        let total_bits = framed.len() * 8;
        let mut bit_index = 0;

        'pixels: for pixel in rgba.pixels_mut() {
            for channel in 0..3 {
                if bit_index >= total_bits {
                    break 'pixels;
                }

                let bit = (framed[bit_index / 8] >> (7 - bit_index % 8)) & 1;
                pixel.0[channel] = (pixel.0[channel] & 0xFE) | bit;
                bit_index += 1;
            }
        }

        self.image = DynamicImage::ImageRgba8(rgba);
        Ok(())
    }

    /// Extracts a payload previously written by [`embed`](ImageStego::embed).
    ///
    /// Reads the declared length from the first 32 bits, validates it
    /// against the image capacity, then reads exactly that many bytes and
    /// returns. Fails with [`ImageStegoError::InvalidLengthHeader`] when
    /// the declared length is impossible and
    /// [`ImageStegoError::IncompleteExtraction`] when the pixel stream
    /// runs out early.
    pub fn extract(&self) -> Result<Vec<u8>, ImageStegoError> {
        let capacity = self.capacity();
        let rgba = self.image.to_rgba8();

        let mut bits = rgba
            .pixels()
            .flat_map(|p| [p.0[0] & 1, p.0[1] & 1, p.0[2] & 1]);

        // First 32 bits, most-significant-first: the declared length.
        let mut declared: u32 = 0;
        for _ in 0..32 {
            let bit = bits.next().ok_or(ImageStegoError::IncompleteExtraction {
                expected: LENGTH_PREFIX_SIZE,
                recovered: 0,
            })?;
            declared = (declared << 1) | u32::from(bit);
        }

        let declared = declared as usize;
        if declared > capacity {
            return Err(ImageStegoError::InvalidLengthHeader { declared, capacity });
        }

        let mut data = Vec::with_capacity(declared);
        let mut acc = 0u8;
        let mut filled = 0;

        while data.len() < declared {
            let bit = bits.next().ok_or(ImageStegoError::IncompleteExtraction {
                expected: declared,
                recovered: data.len(),
            })?;

            acc = (acc << 1) | bit;
            filled += 1;
            if filled == 8 {
                data.push(acc);
                acc = 0;
                filled = 0;
            }
        }

        Ok(data)
    }

    /// Saves the (possibly embedded) image to a file. Use a lossless
    /// format; the image crate picks the codec from the extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ImageStegoError> {
        self.image
            .save(path)
            .map_err(|e| ImageStegoError::ImageSave(e.to_string()))
    }

    /// Encodes the image as PNG bytes.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>, ImageStegoError> {
        let mut bytes = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|e| ImageStegoError::ImageSave(e.to_string()))?;
        Ok(bytes)
    }

    /// Returns a reference to the underlying image.
    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    /// Consumes self and returns the underlying image.
    pub fn into_image(self) -> DynamicImage {
        self.image
    }
}
