//! Hash primitives used to reduce byte strings to identifiers.
//!
//! - `hash256` is SHA-256 and feeds 32-byte [`Id`](crate::Id) values.
//! - `hash160` is RIPEMD-160 and feeds 20-byte [`ShortId`](crate::ShortId)
//!   and [`NodeId`](crate::NodeId) values, always applied over a `hash256`
//!   digest.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Size of a `hash256` digest.
pub const HASH256_LEN: usize = 32;

/// Size of a `hash160` digest.
pub const HASH160_LEN: usize = 20;

/// Compute the SHA-256 digest of `data`.
pub fn hash256(data: &[u8]) -> [u8; HASH256_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute the RIPEMD-160 digest of `data`.
pub fn hash160(data: &[u8]) -> [u8; HASH160_LEN] {
    let mut hasher = Ripemd160::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Two-stage reduction: `hash160(hash256(data))`.
pub fn hash256_then_160(data: &[u8]) -> [u8; HASH160_LEN] {
    hash160(&hash256(data))
}

/// The trailing `len` bytes of `hash256(data)`.
///
/// `len` is clamped to the digest size.
pub fn checksum(data: &[u8], len: usize) -> Vec<u8> {
    let digest = hash256(data);
    let len = len.min(HASH256_LEN);
    digest[HASH256_LEN - len..].to_vec()
}
