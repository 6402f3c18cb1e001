//! Property-based tests for the envelope and container layers.
//!
//! These tests verify invariants hold for arbitrary inputs:
//!
//! - Sealing then opening returns the original bytes for any password
//! - Tampering with the sealed region is always detected
//! - Any non-magic prefix is rejected as a format error
//! - Inserting then extracting returns the payload, leaving the rest intact

use proptest::prelude::*;

use crate::envelope::{open, seal, HEADER_SIZE};
use crate::error::ErrorKind;
use crate::stego::riff::{chunks, extract, insert, minimal_wav, MIN_WAV_HEADER_LEN};

// ==================== Envelope Property Tests ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Any message round-trips under any password.
    #[test]
    fn seal_open_roundtrip(
        message in prop::collection::vec(any::<u8>(), 0..2048),
        password in ".{0,48}",
    ) {
        let envelope = seal(&message, &password).unwrap();
        prop_assert_eq!(envelope.len(), HEADER_SIZE + u32::from_le_bytes(
            [envelope[4], envelope[5], envelope[6], envelope[7]]) as usize);
        prop_assert_eq!(open(&envelope, &password).unwrap(), message);
    }

    /// Flipping one bit after the header breaks authentication.
    #[test]
    fn bit_flip_is_detected(
        message in prop::collection::vec(any::<u8>(), 0..256),
        index in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let mut envelope = seal(&message, "pw").unwrap();
        let pos = HEADER_SIZE + index.index(envelope.len() - HEADER_SIZE);
        envelope[pos] ^= 1 << bit;

        prop_assert_eq!(open(&envelope, "pw").unwrap_err().kind(), ErrorKind::Crypto);
    }

    /// Distinct passwords (within the 32-byte key window) never open each other's envelopes.
    #[test]
    fn wrong_password_is_rejected(
        p1 in "[a-z]{1,32}",
        p2 in "[a-z]{1,32}",
    ) {
        prop_assume!(p1 != p2);
        let envelope = seal(b"payload", &p1).unwrap();

        prop_assert_eq!(open(&envelope, &p2).unwrap_err().kind(), ErrorKind::Crypto);
    }

    /// Anything without the magic prefix is a format error.
    #[test]
    fn bad_magic_is_rejected(
        prefix in prop::array::uniform4(any::<u8>()),
        rest in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        prop_assume!(prefix != [0xDE, 0xAD, 0xBE, 0xEF]);
        let mut bytes = prefix.to_vec();
        bytes.extend(rest);

        prop_assert_eq!(open(&bytes, "pw").unwrap_err().kind(), ErrorKind::Format);
    }

    /// Arbitrary bytes never panic the parser.
    #[test]
    fn open_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..128)) {
        let _ = open(&bytes, "pw");
    }
}

// ==================== Container Property Tests ====================

proptest! {
    /// Insert then extract returns the payload; original region is untouched.
    #[test]
    fn insert_extract_roundtrip(payload in prop::collection::vec(any::<u8>(), 0..512)) {
        let wav = minimal_wav();
        let out = insert(&wav, &payload).unwrap();

        prop_assert_eq!(&out[12..MIN_WAV_HEADER_LEN], &wav[12..]);
        prop_assert_eq!(out.len(), wav.len() + 8 + payload.len() + payload.len() % 2);
        prop_assert_eq!(
            u32::from_le_bytes([out[4], out[5], out[6], out[7]]) as usize,
            out.len() - 8
        );
        prop_assert_eq!(extract(&out).unwrap(), payload);
    }

    /// Arbitrary bytes after a valid header never panic the scanner.
    #[test]
    fn scan_never_panics(
        riff_size in any::<u32>(),
        tail in prop::collection::vec(any::<u8>(), 0..256),
    ) {
        let mut buf = b"RIFF".to_vec();
        buf.extend_from_slice(&riff_size.to_le_bytes());
        buf.extend_from_slice(b"WAVE");
        buf.extend(tail);

        let _ = extract(&buf);
        for chunk in chunks(&buf).unwrap() {
            prop_assert!(chunk.offset + 8 <= buf.len());
            prop_assert!(chunk.data.len() <= chunk.size as usize);
        }
    }
}
