//! High-level processor tying the envelope codec to the container embedder.
//!
//! [`StegoProcessor::encode`] and [`StegoProcessor::decode`] work on envelope
//! blobs only. [`StegoProcessor::embed`] and [`StegoProcessor::reveal`] also
//! place the envelope into, or take it out of, a WAV container.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::envelope;
use crate::error::StegoError;
use crate::stego;

/// Errors raised while building a processor configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unsupported hiding method: {0}")]
    UnsupportedMethod(String),
}

/// How the envelope is hidden.
///
/// Only container-chunk insertion exists. Signal-domain methods (LSB, echo,
/// spread spectrum) are not implemented and are rejected when parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    /// Custom `STEK` chunk in the RIFF structure.
    #[default]
    ContainerChunk,
}

impl Method {
    /// Maps the numeric selector used by host bindings.
    pub fn from_code(code: i32) -> Result<Self, ConfigError> {
        match code {
            0 => Ok(Method::ContainerChunk),
            other => Err(ConfigError::UnsupportedMethod(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::ContainerChunk => "container-chunk",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "container-chunk" | "chunk" | "0" => Ok(Method::ContainerChunk),
            _ => Err(ConfigError::UnsupportedMethod(s.to_string())),
        }
    }
}

/// What to do when the container already carries a `STEK` chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExistingChunk {
    /// Append another chunk; extraction keeps returning the first one.
    #[default]
    Append,
    /// Drop existing chunks before appending.
    Replace,
}

/// Configuration for the processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProcessorConfig {
    /// Hiding method.
    pub method: Method,
    /// Behaviour when a payload chunk is already present.
    pub existing: ExistingChunk,
}

/// Seals, opens, embeds and reveals messages.
///
/// Holds configuration only; every call is independent.
#[derive(Debug, Clone, Default)]
pub struct StegoProcessor {
    config: ProcessorConfig,
}

impl StegoProcessor {
    pub fn new(config: ProcessorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Seals a message into an envelope blob.
    pub fn encode(&self, message: &[u8], password: &str) -> Result<Vec<u8>, StegoError> {
        Ok(envelope::seal(message, password)?)
    }

    /// Opens an envelope blob.
    pub fn decode(&self, envelope: &[u8], password: &str) -> Result<Vec<u8>, StegoError> {
        Ok(envelope::open(envelope, password)?)
    }

    /// Places an already-sealed envelope (or any blob) into a WAV container.
    pub fn hide(&self, wav: &[u8], blob: &[u8]) -> Result<Vec<u8>, StegoError> {
        let out = match self.config.existing {
            ExistingChunk::Append => stego::insert(wav, blob)?,
            ExistingChunk::Replace => stego::replace(wav, blob)?,
        };
        Ok(out)
    }

    /// Seals a message and places the envelope into a WAV container.
    pub fn embed(&self, wav: &[u8], message: &[u8], password: &str) -> Result<Vec<u8>, StegoError> {
        debug!(method = %self.config.method, wav_len = wav.len(), "embedding message");

        let blob = self.encode(message, password)?;
        self.hide(wav, &blob)
    }

    /// Extracts the envelope from a WAV container and opens it.
    pub fn reveal(&self, wav: &[u8], password: &str) -> Result<Vec<u8>, StegoError> {
        debug!(method = %self.config.method, wav_len = wav.len(), "revealing message");

        let blob = stego::extract(wav)?;
        self.decode(&blob, password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::stego::riff::minimal_wav;

    #[test]
    fn test_method_parsing() {
        assert_eq!("container-chunk".parse::<Method>().unwrap(), Method::ContainerChunk);
        assert_eq!(" Chunk ".parse::<Method>().unwrap(), Method::ContainerChunk);
        assert_eq!("0".parse::<Method>().unwrap(), Method::ContainerChunk);

        let err = "lsb".parse::<Method>().unwrap_err();
        assert_eq!(err, ConfigError::UnsupportedMethod("lsb".to_string()));
    }

    #[test]
    fn test_method_codes() {
        assert_eq!(Method::from_code(0).unwrap(), Method::ContainerChunk);
        assert!(Method::from_code(1).is_err());
        assert!(Method::from_code(-1).is_err());
    }

    #[test]
    fn test_default_config() {
        let config = ProcessorConfig::default();
        assert_eq!(config.method, Method::ContainerChunk);
        assert_eq!(config.existing, ExistingChunk::Append);
        assert_eq!(config.method.to_string(), "container-chunk");
    }

    #[test]
    fn test_encode_decode() {
        let processor = StegoProcessor::default();
        let blob = processor.encode(b"message", "pw").unwrap();

        assert_eq!(processor.decode(&blob, "pw").unwrap(), b"message");
    }

    #[test]
    fn test_embed_reveal() {
        let processor = StegoProcessor::default();
        let wav = processor.embed(&minimal_wav(), b"in the wav", "pw").unwrap();

        assert_eq!(processor.reveal(&wav, "pw").unwrap(), b"in the wav");
    }

    #[test]
    fn test_append_mode_keeps_first() {
        let processor = StegoProcessor::default();
        let wav = processor.embed(&minimal_wav(), b"first", "pw").unwrap();
        let wav = processor.embed(&wav, b"second", "pw").unwrap();

        assert_eq!(processor.reveal(&wav, "pw").unwrap(), b"first");
    }

    #[test]
    fn test_replace_mode_keeps_latest() {
        let processor = StegoProcessor::new(ProcessorConfig {
            existing: ExistingChunk::Replace,
            ..ProcessorConfig::default()
        });
        let wav = processor.embed(&minimal_wav(), b"first", "pw").unwrap();
        let wav = processor.embed(&wav, b"second", "pw").unwrap();

        assert_eq!(processor.reveal(&wav, "pw").unwrap(), b"second");
    }

    #[test]
    fn test_reveal_error_kinds() {
        let processor = StegoProcessor::default();

        let err = processor.reveal(&minimal_wav(), "pw").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);

        let wav = processor.embed(&minimal_wav(), b"secret", "right").unwrap();
        let err = processor.reveal(&wav, "wrong").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Crypto);
    }
}
