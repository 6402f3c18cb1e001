//! Open command - recover a message from an envelope.

use std::path::PathBuf;

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use clap::Args;

use wavstek::StegoProcessor;

use super::{read_file, with_kind, write_message, CommandExecutor};

/// Open an envelope and print or save the message.
#[derive(Args, Debug)]
pub struct OpenCommand {
    /// Envelope file (raw bytes)
    #[arg(short, long, conflicts_with = "code", required_unless_present = "code")]
    pub input: Option<PathBuf>,

    /// Envelope as base64 text
    #[arg(long, conflicts_with = "input")]
    pub code: Option<String>,

    /// Password for decryption
    #[arg(short, long)]
    pub password: String,

    /// Output file for the message (prints lossy UTF-8 to stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CommandExecutor for OpenCommand {
    fn execute(&self, processor: &StegoProcessor) -> Result<()> {
        let envelope = match (&self.input, &self.code) {
            (Some(path), _) => read_file(path, "envelope")?,
            (None, Some(code)) => BASE64
                .decode(code.trim())
                .context("Failed to decode base64 envelope")?,
            (None, None) => anyhow::bail!("Either --input or --code is required"),
        };

        let message = processor
            .decode(&envelope, &self.password)
            .map_err(with_kind)
            .context("Failed to open envelope")?;

        write_message(self.output.as_ref(), &message)
    }
}
