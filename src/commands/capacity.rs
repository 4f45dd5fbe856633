//! Capacity command - report how much a carrier image can hold.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use ghosthide::{packed_len, ImageStego, LENGTH_PREFIX_SIZE};

use super::CommandExecutor;

/// Show how much data an image can hold.
#[derive(Args, Debug)]
pub struct CapacityCommand {
    /// Path to the image to check
    #[arg(short, long)]
    pub image: PathBuf,
}

impl CommandExecutor for CapacityCommand {
    fn execute(&self) -> Result<()> {
        let stego = ImageStego::from_file(&self.image)
            .with_context(|| format!("Failed to load image {}", self.image.display()))?;

        let (width, height) = stego.dimensions();
        let capacity = stego.capacity();

        // Fixed overhead per message: 4-byte LSB length prefix plus the
        // 68-byte frame header and 16-byte tag.
        let overhead = LENGTH_PREFIX_SIZE + packed_len(0);
        let max_message = capacity.saturating_sub(overhead);

        println!("{}", self.image.display());
        println!("  Dimensions: {}x{} ({} pixels)", width, height, width as u64 * height as u64);
        println!("  Capacity:   {} bytes ({:.2} KB)", capacity, capacity as f64 / 1024.0);
        if max_message == 0 {
            println!("  Too small to hold a message ({} bytes of overhead)", overhead);
        } else {
            println!("  Longest hideable message: {} bytes", max_message);
        }

        Ok(())
    }
}
