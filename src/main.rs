//! wavstek - Hide messages in WAV files
//!
//! A CLI tool that seals messages in password-protected envelopes and
//! carries them in a custom RIFF chunk of a WAV file.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    CommandExecutor, EmbedCommand, ExtractCommand, InspectCommand, OpenCommand, SealCommand,
};
use wavstek::{Method, ProcessorConfig, StegoProcessor};

/// wavstek - Hide messages in WAV files
///
/// Messages are gzip-compressed and sealed with AES-256-GCM under a
/// password-derived key, then optionally appended to a WAV file as a
/// STEK chunk.
#[derive(Parser)]
#[command(name = "wavstek")]
#[command(version)]
#[command(about = "Seal messages with a password and carry them inside WAV files")]
#[command(long_about = None)]
struct Cli {
    /// Hiding method (only "container-chunk" is supported)
    #[arg(long, global = true, default_value = "container-chunk")]
    method: String,

    /// Verbose output (debug logging to stderr; RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seal a message into an envelope
    Seal(SealCommand),

    /// Open an envelope
    Open(OpenCommand),

    /// Seal a message and hide it in a WAV file
    Embed(EmbedCommand),

    /// Extract and open a message hidden in a WAV file
    Extract(ExtractCommand),

    /// List the chunks of a WAV file
    Inspect(InspectCommand),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let method: Method = cli
        .method
        .parse()
        .with_context(|| format!("Invalid --method '{}'", cli.method))?;
    let processor = StegoProcessor::new(ProcessorConfig {
        method,
        ..ProcessorConfig::default()
    });

    let command: &dyn CommandExecutor = match &cli.command {
        Commands::Seal(cmd) => cmd,
        Commands::Open(cmd) => cmd,
        Commands::Embed(cmd) => cmd,
        Commands::Extract(cmd) => cmd,
        Commands::Inspect(cmd) => cmd,
    };

    command.execute(&processor)
}
