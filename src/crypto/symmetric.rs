//! Symmetric authenticated encryption for envelopes.
//!
//! AES-256-GCM with a fresh random 96-bit nonce per call and no associated
//! data. Output format: nonce (12 bytes) || ciphertext || tag (16 bytes).

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Key, Nonce,
};
use rand::rngs::OsRng;
use rand::RngCore;
use thiserror::Error;

use super::keys::KEY_SIZE;
use crate::error::ErrorKind;

/// Nonce size for AES-GCM.
pub const NONCE_SIZE: usize = 12;

/// Authentication tag size for AES-GCM.
pub const TAG_SIZE: usize = 16;

/// Errors that can occur during symmetric encryption.
#[derive(Error, Debug)]
pub enum SymmetricError {
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Randomness source unavailable: {0}")]
    RandomnessUnavailable(String),

    #[error("Invalid ciphertext: too short ({0} bytes)")]
    CiphertextTooShort(usize),

    /// Wrong key and tampered data are deliberately reported the same way.
    #[error("Authentication failed")]
    AuthenticationFailed,
}

impl SymmetricError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SymmetricError::EncryptionFailed(_) | SymmetricError::RandomnessUnavailable(_) => {
                ErrorKind::Io
            }
            SymmetricError::CiphertextTooShort(_) => ErrorKind::Format,
            SymmetricError::AuthenticationFailed => ErrorKind::Crypto,
        }
    }
}

fn cipher(key: &[u8; KEY_SIZE]) -> Aes256Gcm {
    Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key))
}

/// Encrypts data with a 32-byte key.
///
/// Returns nonce || ciphertext || tag.
pub fn encrypt(plaintext: &[u8], key: &[u8; KEY_SIZE]) -> Result<Vec<u8>, SymmetricError> {
    let mut nonce_bytes = [0u8; NONCE_SIZE];
    OsRng
        .try_fill_bytes(&mut nonce_bytes)
        .map_err(|e| SymmetricError::RandomnessUnavailable(e.to_string()))?;
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher(key)
        .encrypt(nonce, plaintext)
        .map_err(|e| SymmetricError::EncryptionFailed(e.to_string()))?;

    let mut result = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
    result.extend_from_slice(&nonce_bytes);
    result.extend_from_slice(&ciphertext);

    Ok(result)
}

/// Decrypts nonce || ciphertext || tag with a 32-byte key.
pub fn decrypt(data: &[u8], key: &[u8; KEY_SIZE]) -> Result<Vec<u8>, SymmetricError> {
    if data.len() < NONCE_SIZE {
        return Err(SymmetricError::CiphertextTooShort(data.len()));
    }

    let (nonce_bytes, ciphertext) = data.split_at(NONCE_SIZE);
    let nonce = Nonce::from_slice(nonce_bytes);

    cipher(key)
        .decrypt(nonce, ciphertext)
        .map_err(|_| SymmetricError::AuthenticationFailed)
}
