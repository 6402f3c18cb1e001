//! Crate-level error type and the stable error taxonomy.

use std::fmt;

use thiserror::Error;

use crate::crypto::{CompressionError, SymmetricError};
use crate::envelope::EnvelopeError;
use crate::processor::ConfigError;
use crate::stego::RiffError;

/// Stable classification of every failure the crate can report.
///
/// Callers branch on this instead of matching message strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed, truncated or signature-mismatched binary structure.
    Format,
    /// AEAD authentication failed (wrong password or tampered data).
    Crypto,
    /// Stream decompression failed after successful authentication.
    Compression,
    /// Sealing side failure: compressor, cipher setup or randomness source.
    Io,
}

impl ErrorKind {
    /// Short lowercase name, stable across releases.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Format => "format",
            ErrorKind::Crypto => "crypto",
            ErrorKind::Compression => "compression",
            ErrorKind::Io => "io",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any error produced by the public API.
#[derive(Error, Debug)]
pub enum StegoError {
    #[error("Envelope error: {0}")]
    Envelope(#[from] EnvelopeError),

    #[error("Container error: {0}")]
    Container(#[from] RiffError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl StegoError {
    /// Returns the stable kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StegoError::Envelope(e) => e.kind(),
            StegoError::Container(e) => e.kind(),
            StegoError::Config(_) => ErrorKind::Format,
        }
    }
}

impl From<CompressionError> for StegoError {
    fn from(e: CompressionError) -> Self {
        StegoError::Envelope(EnvelopeError::from(e))
    }
}

impl From<SymmetricError> for StegoError {
    fn from(e: SymmetricError) -> Self {
        StegoError::Envelope(EnvelopeError::from(e))
    }
}
