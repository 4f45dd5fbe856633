//! Hide command - encrypt a message and embed it in a cover image.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use ghosthide::{hide_message, packed_len, HideError, ImageStego, ImageStegoError};

use super::CommandExecutor;

/// Hide an encrypted message in a cover image.
///
/// The message is encrypted with the password (AES-256-GCM, key derived
/// via PBKDF2) and written into the least significant bits of the image's
/// pixels. The output must be a lossless format - PNG or BMP.
#[derive(Args, Debug)]
pub struct HideCommand {
    /// Path to the cover image (PNG or BMP recommended)
    #[arg(short, long)]
    pub image: PathBuf,

    /// Message to hide
    #[arg(short, long)]
    pub message: String,

    /// Encryption password (keep it safe - there is no recovery)
    #[arg(short, long)]
    pub password: String,

    /// Output path for the stego image (use a lossless extension)
    #[arg(short, long)]
    pub output: PathBuf,
}

impl CommandExecutor for HideCommand {
    fn execute(&self) -> Result<()> {
        let ext = self
            .output
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if matches!(ext.as_str(), "jpg" | "jpeg" | "webp") {
            bail!(
                "{} is a lossy format and would destroy the hidden data; use .png or .bmp",
                ext
            );
        }

        let mut stego = ImageStego::from_file(&self.image)
            .with_context(|| format!("Failed to load cover image {}", self.image.display()))?;

        let capacity = stego.capacity();

        match hide_message(&self.password, &self.message, &mut stego) {
            Ok(()) => {}
            Err(HideError::Stego(ImageStegoError::CapacityExceeded { needed, capacity })) => {
                bail!(
                    "Message too large for this image: need {} bytes, capacity is {}. \
                     Pick a larger cover image or shorten the message.",
                    needed,
                    capacity
                );
            }
            Err(e) => return Err(e).context("Failed to hide message"),
        }

        stego
            .save(&self.output)
            .with_context(|| format!("Failed to save stego image {}", self.output.display()))?;

        let frame_len = packed_len(self.message.len());
        println!("Hidden {} message bytes in {}", self.message.len(), self.output.display());
        println!(
            "  Frame size: {} bytes ({:.2}% of {} byte capacity)",
            frame_len,
            frame_len as f64 / capacity as f64 * 100.0,
            capacity
        );

        Ok(())
    }
}
