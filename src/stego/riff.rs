//! Payload carriage in a RIFF/WAVE chunk.
//!
//! The payload travels as a custom `STEK` chunk appended after every
//! existing chunk. Audio samples are never touched, so any WAV reader that
//! skips unknown chunks still plays the file. The chunk is equally visible to
//! anything that lists RIFF chunks.
//!
//! Chunk layout: id (4) || size u32 LE (4) || data || pad byte when size is odd.
//! The pad byte is not counted in `size`.

use thiserror::Error;
use tracing::debug;

use crate::error::ErrorKind;

/// RIFF header magic bytes.
pub const RIFF_MAGIC: &[u8; 4] = b"RIFF";

/// WAV form type.
pub const WAVE_FORM: &[u8; 4] = b"WAVE";

/// Chunk id carrying the payload.
pub const CHUNK_ID: &[u8; 4] = b"STEK";

/// "RIFF" + size + "WAVE".
pub const RIFF_HEADER_LEN: usize = 12;

/// Canonical PCM WAV header: RIFF header, 24-byte `fmt ` chunk, `data` header.
pub const MIN_WAV_HEADER_LEN: usize = 44;

/// Chunk id plus size field.
const CHUNK_HEADER_LEN: usize = 8;

/// Errors that can occur while reading or writing container chunks.
#[derive(Error, Debug)]
pub enum RiffError {
    #[error("Invalid WAV file: too short ({got} bytes, need at least {needed})")]
    TooShort { needed: usize, got: usize },

    #[error("Not a valid WAV file: missing RIFF signature")]
    NotRiff,

    #[error("Not a valid WAV file: missing WAVE form type")]
    NotWave,

    #[error("STEK chunk not found in WAV file")]
    ChunkNotFound,

    #[error("STEK chunk size exceeds file: chunk at {offset} declares {size} bytes, {available} available")]
    ChunkOverrun {
        offset: usize,
        size: u32,
        available: usize,
    },

    #[error("Container would exceed the 4 GiB RIFF limit ({0} bytes)")]
    TooLarge(usize),
}

impl RiffError {
    /// Every container failure is a structural one.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Format
    }
}

/// One chunk found while scanning a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    /// Four-byte chunk id.
    pub id: [u8; 4],
    /// Offset of the chunk header within the container.
    pub offset: usize,
    /// Declared data size, pad byte excluded.
    pub size: u32,
    /// Data bytes actually present; shorter than `size` when the file is cut.
    pub data: &'a [u8],
}

impl Chunk<'_> {
    /// Chunk id as text, with invalid bytes replaced.
    pub fn id_str(&self) -> String {
        String::from_utf8_lossy(&self.id).into_owned()
    }

    /// True if all declared data bytes are inside the buffer.
    pub fn is_complete(&self) -> bool {
        self.data.len() as u64 == self.size as u64
    }

    /// Header, data and pad byte, as laid out in the container.
    pub fn span_len(&self) -> usize {
        CHUNK_HEADER_LEN
            .saturating_add(self.size as usize)
            .saturating_add(self.size as usize & 1)
    }
}

/// Forward iterator over the chunks of a RIFF/WAVE buffer.
///
/// Scanning starts right after the 12-byte RIFF header and stops once a full
/// chunk header no longer fits inside both the declared RIFF extent and the
/// buffer.
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    buf: &'a [u8],
    pos: usize,
    end: usize,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let header_end = self.pos.checked_add(CHUNK_HEADER_LEN)?;
        if header_end > self.end {
            return None;
        }

        let offset = self.pos;
        let mut id = [0u8; 4];
        id.copy_from_slice(&self.buf[offset..offset + 4]);
        let size = read_u32_le(&self.buf[offset + 4..header_end]);

        let data_end = header_end
            .saturating_add(size as usize)
            .min(self.buf.len());
        let chunk = Chunk {
            id,
            offset,
            size,
            data: &self.buf[header_end..data_end],
        };

        self.pos = offset.saturating_add(chunk.span_len());
        Some(chunk)
    }
}

fn read_u32_le(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Checks the RIFF/WAVE signature of a buffer of at least `min_len` bytes.
fn check_header(container: &[u8], min_len: usize) -> Result<(), RiffError> {
    if container.len() < min_len {
        return Err(RiffError::TooShort {
            needed: min_len,
            got: container.len(),
        });
    }
    if &container[0..4] != RIFF_MAGIC {
        return Err(RiffError::NotRiff);
    }
    if &container[8..12] != WAVE_FORM {
        return Err(RiffError::NotWave);
    }
    Ok(())
}

/// Returns the declared RIFF size field (bytes following the field itself).
pub fn declared_riff_size(container: &[u8]) -> Result<u32, RiffError> {
    check_header(container, RIFF_HEADER_LEN)?;
    Ok(read_u32_le(&container[4..8]))
}

/// Lists the chunks of a RIFF/WAVE buffer in file order.
pub fn chunks(container: &[u8]) -> Result<Chunks<'_>, RiffError> {
    let riff_size = declared_riff_size(container)?;
    let end = (riff_size as usize)
        .saturating_add(8)
        .min(container.len());

    Ok(Chunks {
        buf: container,
        pos: RIFF_HEADER_LEN,
        end,
    })
}

/// Encodes a `STEK` chunk, pad byte included.
fn build_chunk(payload: &[u8]) -> Result<Vec<u8>, RiffError> {
    let size = u32::try_from(payload.len()).map_err(|_| RiffError::TooLarge(payload.len()))?;

    let mut chunk = Vec::with_capacity(CHUNK_HEADER_LEN + payload.len() + 1);
    chunk.extend_from_slice(CHUNK_ID);
    chunk.extend_from_slice(&size.to_le_bytes());
    chunk.extend_from_slice(payload);
    if payload.len() % 2 == 1 {
        chunk.push(0);
    }
    Ok(chunk)
}

/// Writes `RIFF || size || body || chunk`, with size = everything after the field.
fn assemble(body: &[u8], chunk: &[u8]) -> Result<Vec<u8>, RiffError> {
    let total = 8 + body.len() + chunk.len();
    let riff_size = u32::try_from(total - 8).map_err(|_| RiffError::TooLarge(total))?;

    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(RIFF_MAGIC);
    out.extend_from_slice(&riff_size.to_le_bytes());
    out.extend_from_slice(body);
    out.extend_from_slice(chunk);
    Ok(out)
}

/// Appends `payload` as a `STEK` chunk and fixes up the RIFF size.
///
/// Existing bytes after the 8-byte RIFF preamble are copied unchanged and
/// never parsed. An existing `STEK` chunk is left in place, so inserting
/// twice yields two chunks and [`extract`] returns the first. Use [`replace`]
/// to overwrite instead.
pub fn insert(container: &[u8], payload: &[u8]) -> Result<Vec<u8>, RiffError> {
    check_header(container, MIN_WAV_HEADER_LEN)?;

    let chunk = build_chunk(payload)?;
    let out = assemble(&container[8..], &chunk)?;

    debug!(
        container_len = container.len(),
        payload_len = payload.len(),
        output_len = out.len(),
        "inserted STEK chunk"
    );
    Ok(out)
}

/// Removes every `STEK` chunk, then appends `payload` as a new one.
///
/// The scan covers the whole buffer rather than the declared RIFF extent:
/// the output's size field covers every byte, so a chunk past a stale size
/// would otherwise become visible again.
pub fn replace(container: &[u8], payload: &[u8]) -> Result<Vec<u8>, RiffError> {
    check_header(container, MIN_WAV_HEADER_LEN)?;

    let mut body = Vec::with_capacity(container.len());
    let mut copied_to = 8;
    let mut removed = 0usize;
    let whole = Chunks {
        buf: container,
        pos: RIFF_HEADER_LEN,
        end: container.len(),
    };
    for chunk in whole.filter(|c| &c.id == CHUNK_ID) {
        body.extend_from_slice(&container[copied_to..chunk.offset]);
        copied_to = chunk
            .offset
            .saturating_add(chunk.span_len())
            .min(container.len());
        removed += 1;
    }
    body.extend_from_slice(&container[copied_to..]);

    let out = assemble(&body, &build_chunk(payload)?)?;

    debug!(removed, payload_len = payload.len(), output_len = out.len(), "replaced STEK chunk");
    Ok(out)
}

/// Returns the data of the first `STEK` chunk, pad byte excluded.
pub fn extract(container: &[u8]) -> Result<Vec<u8>, RiffError> {
    let found = chunks(container)?.find(|c| &c.id == CHUNK_ID);

    match found {
        Some(chunk) if chunk.is_complete() => {
            debug!(offset = chunk.offset, size = chunk.size, "found STEK chunk");
            Ok(chunk.data.to_vec())
        }
        Some(chunk) => Err(RiffError::ChunkOverrun {
            offset: chunk.offset,
            size: chunk.size,
            available: chunk.data.len(),
        }),
        None => Err(RiffError::ChunkNotFound),
    }
}

#[cfg(test)]
pub(crate) fn minimal_wav() -> Vec<u8> {
    // 44-byte PCM header, 8 kHz mono 16-bit, empty data chunk
    let mut wav = Vec::with_capacity(MIN_WAV_HEADER_LEN);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&36u32.to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes());
    wav.extend_from_slice(&8000u32.to_le_bytes());
    wav.extend_from_slice(&16000u32.to_le_bytes());
    wav.extend_from_slice(&2u16.to_le_bytes());
    wav.extend_from_slice(&16u16.to_le_bytes());
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&0u32.to_le_bytes());
    wav
}
