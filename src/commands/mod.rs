//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor` trait.

mod embed;
mod extract;
mod inspect;
mod open;
mod seal;

pub use embed::EmbedCommand;
pub use extract::ExtractCommand;
pub use inspect::InspectCommand;
pub use open::OpenCommand;
pub use seal::SealCommand;

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use wavstek::{StegoError, StegoProcessor};

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements
/// this trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with the processor built from global options.
    fn execute(&self, processor: &StegoProcessor) -> Result<()>;
}

/// Converts a library error into an `anyhow` error tagged with its kind.
///
/// The original error stays in the chain as the source of the `[kind]` context.
pub fn with_kind<E: Into<StegoError>>(e: E) -> anyhow::Error {
    let e = e.into();
    let kind = e.kind();
    anyhow::Error::new(e).context(format!("[{}]", kind))
}

/// Message source shared by commands that seal something.
#[derive(Args, Debug)]
pub struct MessageInput {
    /// Text message to seal (mutually exclusive with --file)
    #[arg(short, long, conflicts_with = "file")]
    pub message: Option<String>,

    /// File whose raw bytes are sealed (mutually exclusive with --message)
    #[arg(short, long, conflicts_with = "message")]
    pub file: Option<PathBuf>,
}

impl MessageInput {
    /// Reads the message from --message, --file, or stdin.
    pub fn read(&self) -> Result<Vec<u8>> {
        if let Some(message) = &self.message {
            return Ok(message.as_bytes().to_vec());
        }

        if let Some(path) = &self.file {
            return std::fs::read(path)
                .with_context(|| format!("Failed to read message file {}", path.display()));
        }

        eprintln!("Reading message from stdin (Ctrl+D to finish):");
        let mut buffer = Vec::new();
        io::stdin()
            .read_to_end(&mut buffer)
            .context("Failed to read message from stdin")?;
        Ok(buffer)
    }
}

/// Reads a whole file with a contextual error.
pub fn read_file(path: &Path, what: &str) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to read {} from {}", what, path.display()))
}

/// Writes raw bytes to a file, or prints them as lossy UTF-8 to stdout.
pub fn write_message(output: Option<&PathBuf>, message: &[u8]) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, message)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
            eprintln!("Wrote {} bytes to {}", message.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout();
            writeln!(stdout, "{}", String::from_utf8_lossy(message))
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}
