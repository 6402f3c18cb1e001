//! Message compression for envelopes.
//!
//! Plaintext is gzip-compressed before encryption. The gzip container is
//! stored as-is inside the ciphertext, with no marker byte, so envelopes
//! stay readable by any gzip-compatible implementation.

use flate2::read::{GzEncoder, MultiGzDecoder};
use flate2::Compression;
use std::io::Read;
use thiserror::Error;

use crate::error::ErrorKind;

/// Compression errors.
#[derive(Error, Debug)]
pub enum CompressionError {
    #[error("Compression failed: {0}")]
    CompressionFailed(String),

    #[error("Decompression failed: {0}")]
    DecompressionFailed(String),
}

impl CompressionError {
    /// Compressing happens while sealing, so it reports as an I/O failure;
    /// decompressing only happens after authentication succeeded.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CompressionError::CompressionFailed(_) => ErrorKind::Io,
            CompressionError::DecompressionFailed(_) => ErrorKind::Compression,
        }
    }
}

/// Compresses data into a gzip stream.
pub fn compress(data: &[u8]) -> Result<Vec<u8>, CompressionError> {
    let mut encoder = GzEncoder::new(data, Compression::default());
    let mut compressed = Vec::new();

    encoder
        .read_to_end(&mut compressed)
        .map_err(|e| CompressionError::CompressionFailed(e.to_string()))?;

    Ok(compressed)
}

/// Decompresses a gzip stream produced by [`compress`].
///
/// Concatenated gzip members are all decoded, as a standard gzip reader does.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, CompressionError> {
    if data.is_empty() {
        return Err(CompressionError::DecompressionFailed(
            "Empty data".to_string(),
        ));
    }

    let mut decoder = MultiGzDecoder::new(data);
    let mut decompressed = Vec::new();

    decoder
        .read_to_end(&mut decompressed)
        .map_err(|e| CompressionError::DecompressionFailed(e.to_string()))?;

    Ok(decompressed)
}
