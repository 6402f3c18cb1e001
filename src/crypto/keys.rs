//! Password-to-key derivation.
//!
//! The envelope format derives its AES-256 key by copying the password's raw
//! UTF-8 bytes into a zero-filled 32-byte buffer. Longer passwords are
//! truncated. There is no salt and no iteration count; envelopes sealed by
//! other implementations of the format depend on this exact derivation.

use zeroize::Zeroizing;

/// Key size in bytes (AES-256).
pub const KEY_SIZE: usize = 32;

/// Derives the 32-byte envelope key from a password.
///
/// Two passwords that agree on their first 32 bytes produce the same key.
pub fn derive_key(password: &str) -> Zeroizing<[u8; KEY_SIZE]> {
    let mut key = Zeroizing::new([0u8; KEY_SIZE]);
    let bytes = password.as_bytes();
    let n = bytes.len().min(KEY_SIZE);
    key[..n].copy_from_slice(&bytes[..n]);
    key
}
