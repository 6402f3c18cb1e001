//! Extract command - recover a hidden message from a WAV file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use wavstek::{stego, StegoProcessor};

use super::{read_file, with_kind, write_message, CommandExecutor};

/// Extract and open the envelope hidden in a WAV file.
#[derive(Args, Debug)]
pub struct ExtractCommand {
    /// WAV file carrying a STEK chunk
    #[arg(short, long)]
    pub carrier: PathBuf,

    /// Password for decryption (not needed with --raw)
    #[arg(short, long, required_unless_present = "raw")]
    pub password: Option<String>,

    /// Write the envelope itself instead of opening it (requires -o)
    #[arg(long, requires = "output")]
    pub raw: bool,

    /// Output file (prints lossy UTF-8 to stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CommandExecutor for ExtractCommand {
    fn execute(&self, processor: &StegoProcessor) -> Result<()> {
        let wav = read_file(&self.carrier, "carrier")?;

        if self.raw {
            let blob = stego::extract(&wav)
                .map_err(with_kind)
                .context("Failed to extract STEK chunk")?;
            return write_message(self.output.as_ref(), &blob);
        }

        let password = self
            .password
            .as_deref()
            .context("--password is required unless --raw is given")?;

        let message = processor
            .reveal(&wav, password)
            .map_err(with_kind)
            .context("Failed to extract message")?;

        write_message(self.output.as_ref(), &message)
    }
}
