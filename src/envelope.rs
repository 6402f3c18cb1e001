//! Envelope framing.
//!
//! Wire layout (all multi-byte integers little-endian):
//!
//! ```text
//! +-------------+------------+------------------------------------------+
//! | DE AD BE EF | length u32 | nonce (12) | AES-256-GCM ciphertext+tag |
//! +-------------+------------+------------------------------------------+
//!    magic (4)      (4)         `length` bytes
//! ```
//!
//! Bytes after `8 + length` are ignored when opening, so an envelope can sit
//! inside a padded container.

use thiserror::Error;
use tracing::debug;

use crate::crypto::{decrypt_with_password, encrypt_with_password, CryptoLayerError};
use crate::crypto::{CompressionError, SymmetricError};
use crate::error::ErrorKind;

/// Envelope magic bytes.
pub const MAGIC: [u8; 4] = [0xDE, 0xAD, 0xBE, 0xEF];

/// Magic plus length field.
pub const HEADER_SIZE: usize = 8;

/// Errors that can occur while sealing or opening an envelope.
#[derive(Error, Debug)]
pub enum EnvelopeError {
    #[error("Envelope too short: {0} bytes")]
    TooShort(usize),

    #[error("Invalid magic bytes: expected {expected:02X?}, got {got:02X?}")]
    InvalidMagic { expected: [u8; 4], got: [u8; 4] },

    #[error("Envelope corrupted: expected {expected} bytes, got {got}")]
    Truncated { expected: usize, got: usize },

    #[error("Payload too large to frame: {0} bytes")]
    PayloadTooLarge(usize),

    #[error(transparent)]
    Crypto(#[from] CryptoLayerError),
}

impl EnvelopeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EnvelopeError::TooShort(_)
            | EnvelopeError::InvalidMagic { .. }
            | EnvelopeError::Truncated { .. } => ErrorKind::Format,
            EnvelopeError::PayloadTooLarge(_) => ErrorKind::Io,
            EnvelopeError::Crypto(e) => e.kind(),
        }
    }
}

impl From<SymmetricError> for EnvelopeError {
    fn from(e: SymmetricError) -> Self {
        EnvelopeError::Crypto(e.into())
    }
}

impl From<CompressionError> for EnvelopeError {
    fn from(e: CompressionError) -> Self {
        EnvelopeError::Crypto(e.into())
    }
}

/// A validated view over an envelope buffer. Nothing is decrypted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Envelope<'a> {
    ciphertext: &'a [u8],
    trailing: usize,
}

impl<'a> Envelope<'a> {
    /// Checks magic and length bounds and borrows the ciphertext region.
    pub fn parse(bytes: &'a [u8]) -> Result<Self, EnvelopeError> {
        if bytes.len() < HEADER_SIZE {
            return Err(EnvelopeError::TooShort(bytes.len()));
        }

        let mut magic = [0u8; 4];
        magic.copy_from_slice(&bytes[..4]);
        if magic != MAGIC {
            return Err(EnvelopeError::InvalidMagic {
                expected: MAGIC,
                got: magic,
            });
        }

        let declared = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]) as usize;
        let end = HEADER_SIZE
            .checked_add(declared)
            .filter(|&end| end <= bytes.len())
            .ok_or(EnvelopeError::Truncated {
                expected: HEADER_SIZE.saturating_add(declared),
                got: bytes.len(),
            })?;

        Ok(Self {
            ciphertext: &bytes[HEADER_SIZE..end],
            trailing: bytes.len() - end,
        })
    }

    /// The `nonce || sealed` region.
    pub fn ciphertext(&self) -> &'a [u8] {
        self.ciphertext
    }

    /// Value of the length field.
    pub fn declared_len(&self) -> usize {
        self.ciphertext.len()
    }

    /// Bytes present after the framed region.
    pub fn trailing_len(&self) -> usize {
        self.trailing
    }
}

/// Returns true if `bytes` starts with the envelope magic.
pub fn is_envelope(bytes: &[u8]) -> bool {
    bytes.len() >= MAGIC.len() && bytes[..MAGIC.len()] == MAGIC
}

/// Frames an already-sealed ciphertext: magic || length || ciphertext.
pub fn frame(ciphertext: &[u8]) -> Result<Vec<u8>, EnvelopeError> {
    let len = u32::try_from(ciphertext.len())
        .map_err(|_| EnvelopeError::PayloadTooLarge(ciphertext.len()))?;

    let mut out = Vec::with_capacity(HEADER_SIZE + ciphertext.len());
    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(&len.to_le_bytes());
    out.extend_from_slice(ciphertext);
    Ok(out)
}

/// Seals a message: compress, encrypt with the password-derived key, frame.
///
/// Every call draws a fresh nonce, so sealing the same input twice gives
/// different envelopes.
pub fn seal(message: &[u8], password: &str) -> Result<Vec<u8>, EnvelopeError> {
    debug!(message_len = message.len(), password_len = password.len(), "sealing envelope");

    let ciphertext = encrypt_with_password(message, password)?;
    let envelope = frame(&ciphertext)?;

    debug!(envelope_len = envelope.len(), "sealed envelope");
    Ok(envelope)
}

/// Opens an envelope produced by [`seal`].
///
/// Fails with a format error on bad framing, a crypto error when
/// authentication fails, and a compression error if the authenticated
/// contents do not decompress.
pub fn open(envelope: &[u8], password: &str) -> Result<Vec<u8>, EnvelopeError> {
    debug!(envelope_len = envelope.len(), "opening envelope");

    let parsed = Envelope::parse(envelope)?;
    debug!(
        ciphertext_len = parsed.declared_len(),
        trailing_len = parsed.trailing_len(),
        "parsed envelope header"
    );

    let message = decrypt_with_password(parsed.ciphertext(), password)?;

    debug!(message_len = message.len(), "opened envelope");
    Ok(message)
}
