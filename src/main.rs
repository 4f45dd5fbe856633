//! Ghosthide - hide encrypted messages in images.
//!
//! CLI front end over the hide/reveal pipelines. All the interesting
//! behavior lives in the library; commands only do argument parsing,
//! file IO, and error presentation.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CapacityCommand, CommandExecutor, ExtractCommand, HideCommand};

/// Ghosthide - hide encrypted messages in images
///
/// Encrypts a message with a password (AES-256-GCM, PBKDF2 key
/// derivation) and embeds the result in the least significant bits of an
/// image's pixels. Lossless formats only: PNG in, PNG out.
#[derive(Parser)]
#[command(name = "ghosthide")]
#[command(version)]
#[command(about = "Hide AES-256-GCM encrypted messages inside images")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hide an encrypted message in a cover image
    Hide(HideCommand),

    /// Extract and decrypt a hidden message from a stego image
    Extract(ExtractCommand),

    /// Show how much data an image can hold
    Capacity(CapacityCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Hide(cmd) => cmd.execute(),
        Commands::Extract(cmd) => cmd.execute(),
        Commands::Capacity(cmd) => cmd.execute(),
    }
}
