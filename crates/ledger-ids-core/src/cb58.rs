//! CB58: base-58 text with a 4-byte checksum suffix.
//!
//! ```text
//! text = base58(payload || last_4_bytes(sha256(payload)))
//! ```
//!
//! The base-58 alphabet is the Bitcoin one. Encoding is deterministic, so
//! the same payload always produces the same text.

use crate::error::{IdError, Result};
use crate::hashing::checksum;

/// Number of checksum bytes appended to the payload.
pub const CHECKSUM_LEN: usize = 4;

/// Encode `payload` as CB58 text.
pub fn encode(payload: &[u8]) -> String {
    let mut buf = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    buf.extend_from_slice(payload);
    buf.extend_from_slice(&checksum(payload, CHECKSUM_LEN));
    bs58::encode(buf).into_string()
}

/// Decode CB58 text back into its payload, verifying the checksum.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    let mut raw = decode_raw(text)?;
    if raw.len() < CHECKSUM_LEN {
        return Err(IdError::MalformedEncoding(
            "input string is smaller than the checksum size".into(),
        ));
    }

    let split = raw.len() - CHECKSUM_LEN;
    let expected = checksum(&raw[..split], CHECKSUM_LEN);
    if raw[split..] != expected[..] {
        return Err(IdError::BadChecksum);
    }
    raw.truncate(split);
    Ok(raw)
}

/// Plain base-58 decode with no checksum handling.
///
/// Only the force-decode path should reach for this.
pub fn decode_raw(text: &str) -> Result<Vec<u8>> {
    bs58::decode(text)
        .into_vec()
        .map_err(|e| IdError::MalformedEncoding(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known_vector() {
        let mut payload = [0u8; 32];
        payload[..8].copy_from_slice(b"ava labs");
        assert_eq!(
            encode(&payload),
            "jvYi6Tn9idMi7BaymUVi9zWjg5tpmW7trfKG1AYJLKZJ2fsU7"
        );
    }

    #[test]
    fn test_roundtrip() {
        let payload = b"arbitrary payload of any size";
        assert_eq!(decode(&encode(payload)).unwrap(), payload.to_vec());
    }

    #[test]
    fn test_empty_payload() {
        let text = encode(&[]);
        assert_eq!(decode(&text).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_bad_checksum() {
        let mut buf = vec![7u8; 32];
        buf.extend_from_slice(&[0, 0, 0, 0]);
        let text = bs58::encode(buf).into_string();
        assert_eq!(decode(&text), Err(IdError::BadChecksum));
    }

    #[test]
    fn test_missing_checksum() {
        let text = bs58::encode([1u8, 2]).into_string();
        assert!(matches!(decode(&text), Err(IdError::MalformedEncoding(_))));
    }

    #[test]
    fn test_invalid_alphabet() {
        // '0', 'O', 'I' and 'l' are not part of the alphabet.
        assert!(matches!(decode("0OIl"), Err(IdError::MalformedEncoding(_))));
    }
}
