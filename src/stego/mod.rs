//! Container embedding for hiding envelopes in WAV files.
//!
//! Supports:
//! - RIFF/WAVE chunk insertion (`STEK` chunk appended after existing chunks)
//! - Chunk listing, extraction and replacement

pub mod riff;

pub use riff::{
    chunks, declared_riff_size, extract, insert, replace, Chunk, Chunks, RiffError, CHUNK_ID,
    MIN_WAV_HEADER_LEN,
};
