//! Embed command - seal a message and hide it in a WAV file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use wavstek::{ExistingChunk, ProcessorConfig, StegoProcessor};

use super::{read_file, with_kind, CommandExecutor, MessageInput};

/// Seal a message and append it to a WAV file as a STEK chunk.
///
/// Audio samples are not modified. The chunk is visible to any tool that
/// lists RIFF chunks.
#[derive(Args, Debug)]
pub struct EmbedCommand {
    /// Carrier WAV file
    #[arg(short, long)]
    pub carrier: PathBuf,

    #[command(flatten)]
    pub input: MessageInput,

    /// Password for encryption
    #[arg(short, long)]
    pub password: String,

    /// Output WAV file
    #[arg(short, long)]
    pub output: PathBuf,

    /// Remove existing STEK chunks instead of adding another one
    /// (by default only the first chunk is ever extracted)
    #[arg(long)]
    pub replace: bool,
}

impl CommandExecutor for EmbedCommand {
    fn execute(&self, processor: &StegoProcessor) -> Result<()> {
        let wav = read_file(&self.carrier, "carrier")?;
        let message = self.input.read()?;

        let processor = if self.replace {
            StegoProcessor::new(ProcessorConfig {
                existing: ExistingChunk::Replace,
                ..*processor.config()
            })
        } else {
            processor.clone()
        };

        let out = processor
            .embed(&wav, &message, &self.password)
            .map_err(with_kind)
            .context("Failed to embed message")?;

        std::fs::write(&self.output, &out)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("Message embedded in {}", self.output.display());
        println!("  Carrier size: {} bytes", wav.len());
        println!("  Output size:  {} bytes", out.len());

        Ok(())
    }
}
