//! Cryptographic operations for wavstek.
//!
//! This module provides:
//! - Password-to-key derivation (legacy zero-pad/truncate to 32 bytes)
//! - Symmetric authenticated encryption (AES-256-GCM, random nonce)
//! - Message compression (gzip)

pub mod compression;
pub mod keys;
pub mod symmetric;

pub use compression::{compress, decompress, CompressionError};
pub use keys::{derive_key, KEY_SIZE};
pub use symmetric::{decrypt, encrypt, SymmetricError, NONCE_SIZE, TAG_SIZE};

use tracing::debug;

/// Compresses, then encrypts with the key derived from `password`:
/// 1. Derive the 32-byte key
/// 2. Compress the plaintext (gzip)
/// 3. Encrypt with AES-256-GCM, nonce prepended
pub fn encrypt_with_password(plaintext: &[u8], password: &str) -> Result<Vec<u8>, CryptoLayerError> {
    let key = derive_key(password);

    let compressed = compress(plaintext)?;
    debug!(plaintext_len = plaintext.len(), compressed_len = compressed.len(), "compressed message");

    let sealed = encrypt(&compressed, &key)?;
    debug!(sealed_len = sealed.len(), "encrypted message");

    Ok(sealed)
}

/// Reverses [`encrypt_with_password`]:
/// 1. Derive the 32-byte key
/// 2. Decrypt and authenticate
/// 3. Decompress
pub fn decrypt_with_password(ciphertext: &[u8], password: &str) -> Result<Vec<u8>, CryptoLayerError> {
    let key = derive_key(password);

    let compressed = decrypt(ciphertext, &key)?;
    let plaintext = decompress(&compressed)?;
    debug!(plaintext_len = plaintext.len(), "decrypted message");

    Ok(plaintext)
}

/// Errors from the combined compress-and-encrypt layer.
#[derive(thiserror::Error, Debug)]
pub enum CryptoLayerError {
    #[error("Symmetric encryption error: {0}")]
    Symmetric(#[from] SymmetricError),

    #[error("Compression error: {0}")]
    Compression(#[from] CompressionError),
}

impl CryptoLayerError {
    pub fn kind(&self) -> crate::error::ErrorKind {
        match self {
            CryptoLayerError::Symmetric(e) => e.kind(),
            CryptoLayerError::Compression(e) => e.kind(),
        }
    }
}
