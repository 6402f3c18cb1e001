//! Seal command - wrap a message in a password-protected envelope.

use std::path::PathBuf;

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use clap::Args;

use wavstek::StegoProcessor;

use super::{with_kind, CommandExecutor, MessageInput};

/// Seal a message into an envelope.
///
/// Without -o the envelope is printed as base64.
#[derive(Args, Debug)]
pub struct SealCommand {
    #[command(flatten)]
    pub input: MessageInput,

    /// Password for encryption
    #[arg(short, long)]
    pub password: String,

    /// Output file for the raw envelope (prints base64 to stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CommandExecutor for SealCommand {
    fn execute(&self, processor: &StegoProcessor) -> Result<()> {
        let message = self.input.read()?;

        let envelope = processor
            .encode(&message, &self.password)
            .map_err(with_kind)
            .context("Failed to seal message")?;

        if let Some(output_path) = &self.output {
            std::fs::write(output_path, &envelope)
                .with_context(|| format!("Failed to write to {}", output_path.display()))?;
            eprintln!("Envelope written to {}", output_path.display());
        } else {
            println!("{}", BASE64.encode(&envelope));
        }

        eprintln!("  Message size:  {} bytes", message.len());
        eprintln!("  Envelope size: {} bytes", envelope.len());

        Ok(())
    }
}
