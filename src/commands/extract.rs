//! Extract command - recover and decrypt a hidden message.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use ghosthide::{reveal_message, CryptoError, ImageStego, RevealError};

use super::CommandExecutor;

/// Extract and decrypt a hidden message from a stego image.
#[derive(Args, Debug)]
pub struct ExtractCommand {
    /// Path to the stego image
    #[arg(short, long)]
    pub image: PathBuf,

    /// Decryption password
    #[arg(short, long)]
    pub password: String,

    /// Write the message to a file instead of printing it
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CommandExecutor for ExtractCommand {
    fn execute(&self) -> Result<()> {
        let stego = ImageStego::from_file(&self.image)
            .with_context(|| format!("Failed to load image {}", self.image.display()))?;

        let message = match reveal_message(&self.password, &stego) {
            Ok(message) => message,
            Err(RevealError::Crypto(CryptoError::AuthenticationFailure)) => {
                bail!("Wrong password, or the image was modified after embedding");
            }
            Err(RevealError::Stego(e)) => {
                bail!("No hidden message found in {}: {}", self.image.display(), e);
            }
            Err(RevealError::Protocol(e)) => {
                bail!(
                    "Extracted data is not a Ghost frame ({}); the image may have been \
                     recompressed with a lossy format",
                    e
                );
            }
            Err(e) => return Err(e).context("Failed to extract message"),
        };

        match &self.output {
            Some(path) => {
                fs::write(path, message.as_bytes())
                    .with_context(|| format!("Failed to write message to {}", path.display()))?;
                println!("Recovered {} bytes to {}", message.len(), path.display());
            }
            None => println!("{}", message),
        }

        Ok(())
    }
}
