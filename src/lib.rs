//! # wavstek - Hide messages in WAV files
//!
//! wavstek seals a message in a password-protected envelope and carries the
//! envelope inside a WAV file as a custom RIFF chunk.
//!
//! ## Overview
//!
//! Two independent, composable layers:
//! - **Envelope**: gzip compression, then AES-256-GCM with a random nonce,
//!   framed as `DE AD BE EF || length (u32 LE) || nonce || ciphertext`
//! - **Container**: the envelope (or any blob) appended to a RIFF/WAVE file
//!   as a `STEK` chunk; audio data is left untouched
//!
//! ## Security Model
//!
//! - **Authenticated**: wrong password and tampering both fail as [`ErrorKind::Crypto`]
//! - **Legacy key derivation**: the password is zero-padded or truncated to
//!   32 bytes with no salt, for compatibility with existing envelopes
//! - **Not covert**: the `STEK` chunk shows up in any RIFF chunk listing
//!
//! ## Example Usage
//!
//! ```rust
//! use wavstek::{envelope, stego};
//!
//! let sealed = envelope::seal(b"meet at noon", "hunter2").unwrap();
//! assert_eq!(envelope::open(&sealed, "hunter2").unwrap(), b"meet at noon");
//!
//! # let mut wav = Vec::new();
//! # wav.extend_from_slice(b"RIFF");
//! # wav.extend_from_slice(&36u32.to_le_bytes());
//! # wav.extend_from_slice(b"WAVEfmt ");
//! # wav.extend_from_slice(&[16, 0, 0, 0, 1, 0, 1, 0, 0x40, 0x1f, 0, 0, 0x80, 0x3e, 0, 0, 2, 0, 16, 0]);
//! # wav.extend_from_slice(b"data\0\0\0\0");
//! let carrier = stego::insert(&wav, &sealed).unwrap();
//! assert_eq!(stego::extract(&carrier).unwrap(), sealed);
//! ```
//!
//! ## Modules
//!
//! - [`crypto`]: key derivation, AES-256-GCM, gzip
//! - [`envelope`]: envelope framing, seal and open
//! - [`stego`]: RIFF chunk insertion, extraction and listing
//! - [`processor`]: configured processor composing both layers

pub mod crypto;
pub mod envelope;
pub mod error;
pub mod processor;
pub mod stego;

#[cfg(test)]
mod proptests;

pub use envelope::{is_envelope, open, seal, Envelope, EnvelopeError, MAGIC};
pub use error::{ErrorKind, StegoError};
pub use processor::{ConfigError, ExistingChunk, Method, ProcessorConfig, StegoProcessor};
pub use stego::{chunks, extract, insert, replace, Chunk, RiffError, CHUNK_ID};
