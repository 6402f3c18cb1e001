//! Inspect command - list the chunks of a WAV file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use wavstek::{envelope::Envelope, stego, StegoProcessor, CHUNK_ID};

use super::{read_file, CommandExecutor};

/// List RIFF chunks and report whether a STEK payload is present.
#[derive(Args, Debug)]
pub struct InspectCommand {
    /// WAV file to inspect
    #[arg(short, long)]
    pub carrier: PathBuf,
}

impl CommandExecutor for InspectCommand {
    fn execute(&self, _processor: &StegoProcessor) -> Result<()> {
        let wav = read_file(&self.carrier, "carrier")?;

        let riff_size = stego::declared_riff_size(&wav).context("Not a RIFF/WAVE file")?;
        println!("{}", self.carrier.display());
        println!("  File size:  {} bytes", wav.len());
        println!("  RIFF size:  {} bytes (declared)", riff_size);
        println!();
        println!("  {:<6} {:>10} {:>10}", "ID", "OFFSET", "SIZE");

        let mut payloads = 0usize;
        for chunk in stego::chunks(&wav)? {
            let note = if !chunk.is_complete() {
                " (truncated)"
            } else if &chunk.id == CHUNK_ID {
                payloads += 1;
                match Envelope::parse(chunk.data) {
                    Ok(_) if payloads == 1 => " <- envelope",
                    Ok(_) => " <- envelope (ignored, not first)",
                    Err(_) => " <- payload, not an envelope",
                }
            } else {
                ""
            };
            println!(
                "  {:<6} {:>10} {:>10}{}",
                format!("{:?}", chunk.id_str()),
                chunk.offset,
                chunk.size,
                note
            );
        }

        println!();
        match payloads {
            0 => println!("No STEK chunk found."),
            1 => println!("One STEK chunk found."),
            n => println!("{} STEK chunks found; only the first is extracted.", n),
        }

        Ok(())
    }
}
