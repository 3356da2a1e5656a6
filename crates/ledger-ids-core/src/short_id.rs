//! The 20-byte short identifier.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::cb58;
use crate::error::{IdError, Result};
use crate::hashing::hash256_then_160;
use crate::serde_fixed;
use crate::text::QuotedText;

/// Size of a [`ShortId`] in bytes.
pub const SHORT_ID_LEN: usize = 20;

/// A 20-byte identifier, typically `hash160(hash256(data))`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ShortId(pub [u8; SHORT_ID_LEN]);

impl ShortId {
    /// The all-zero sentinel.
    pub const EMPTY: Self = Self([0u8; SHORT_ID_LEN]);

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; SHORT_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Create from a slice, which must be exactly [`SHORT_ID_LEN`] bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; SHORT_ID_LEN] =
            bytes.try_into().map_err(|_| IdError::LengthMismatch {
                expected: SHORT_ID_LEN,
                got: bytes.len(),
            })?;
        Ok(Self(arr))
    }

    /// Reduce arbitrary bytes with `hash160(hash256(data))`.
    pub fn hash_of(data: &[u8]) -> Self {
        Self(hash256_then_160(data))
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; SHORT_ID_LEN] {
        &self.0
    }

    /// Copy the raw bytes into a vector.
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Whether this is [`ShortId::EMPTY`].
    pub fn is_zero(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Lexicographic byte comparison.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s).map_err(|e| IdError::MalformedEncoding(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    /// CB58 text with `prefix` in front.
    pub fn prefixed_string(&self, prefix: &str) -> String {
        format!("{prefix}{self}")
    }

    /// Inverse of [`ShortId::prefixed_string`].
    pub fn from_prefixed_str(text: &str, prefix: &str) -> Result<Self> {
        let rest = text.strip_prefix(prefix).ok_or_else(|| {
            IdError::MalformedEncoding(format!("missing {prefix:?} prefix in {text:?}"))
        })?;
        rest.parse()
    }
}

impl fmt::Debug for ShortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShortId({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for ShortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&cb58::encode(&self.0))
    }
}

impl FromStr for ShortId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = cb58::decode(s)?;
        Self::from_slice(&bytes).map_err(|_| IdError::payload_length(SHORT_ID_LEN, bytes.len()))
    }
}

impl QuotedText for ShortId {
    const NAME: &'static str = "ShortID";
}

impl AsRef<[u8]> for ShortId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; SHORT_ID_LEN]> for ShortId {
    fn from(bytes: [u8; SHORT_ID_LEN]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for ShortId {
    type Error = IdError;

    fn try_from(slice: &[u8]) -> Result<Self> {
        Self::from_slice(slice)
    }
}

impl Serialize for ShortId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serde_fixed::serialize(self, &self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for ShortId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        serde_fixed::deserialize::<D, Self, SHORT_ID_LEN>(deserializer)
    }
}
