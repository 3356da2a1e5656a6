//! Node identities.
//!
//! A [`NodeId`] is a 20-byte value derived from a node's credentials:
//!
//! ```text
//! from certificate:  hash160(hash256(cert.raw))
//! from ML-DSA key:   hash160(hash256("LedgerNodeID/v1" || pubkey))
//! ```
//!
//! The domain tag keeps the two derivations apart: a certificate encoding can
//! never be mistaken for a tagged key. Each new derivation purpose needs its
//! own tag.
//!
//! Text form is `NodeID-` followed by the CB58 encoding of the bytes.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{IdError, Result};
use crate::hashing::hash256_then_160;
use crate::serde_fixed;
use crate::short_id::{ShortId, SHORT_ID_LEN};
use crate::text::QuotedText;

/// Text prefix of every node id.
pub const NODE_ID_PREFIX: &str = "NodeID-";

/// Size of a [`NodeId`] in bytes.
pub const NODE_ID_LEN: usize = SHORT_ID_LEN;

/// Domain tag for node ids derived from ML-DSA public keys.
pub const NODE_ID_MLDSA_DOMAIN: &str = "LedgerNodeID/v1";

/// Anything that carries a raw certificate encoding.
///
/// Node id derivation only hashes the raw bytes; it never looks inside.
pub trait Certificate {
    /// Complete DER encoding of the certificate.
    fn raw_bytes(&self) -> &[u8];
}

/// A certificate held as its raw DER bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCertificate {
    pub raw: Vec<u8>,
}

impl RawCertificate {
    pub fn new(raw: impl Into<Vec<u8>>) -> Self {
        Self { raw: raw.into() }
    }
}

impl Certificate for RawCertificate {
    fn raw_bytes(&self) -> &[u8] {
        &self.raw
    }
}

/// A 20-byte node identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct NodeId(pub [u8; NODE_ID_LEN]);

impl NodeId {
    /// The all-zero sentinel.
    pub const EMPTY: Self = Self([0u8; NODE_ID_LEN]);

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; NODE_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Create from a slice, which must be exactly [`NODE_ID_LEN`] bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        ShortId::from_slice(bytes).map(Self::from)
    }

    /// Derive from a certificate's raw encoding.
    pub fn from_certificate(cert: &impl Certificate) -> Self {
        Self(hash256_then_160(cert.raw_bytes()))
    }

    /// Derive from key material under a domain separation `tag`.
    pub fn from_domain_separated_key(tag: &str, key: &[u8]) -> Self {
        let mut data = Vec::with_capacity(tag.len() + key.len());
        data.extend_from_slice(tag.as_bytes());
        data.extend_from_slice(key);
        Self(hash256_then_160(&data))
    }

    /// Derive from a post-quantum ML-DSA public key.
    pub fn from_mldsa_key(public_key: &[u8]) -> Self {
        Self::from_domain_separated_key(NODE_ID_MLDSA_DOMAIN, public_key)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; NODE_ID_LEN] {
        &self.0
    }

    /// Whether this is [`NodeId::EMPTY`].
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
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ShortId::from(*self).prefixed_string(NODE_ID_PREFIX))
    }
}

impl FromStr for NodeId {
    type Err = IdError;

    /// Text no longer than the prefix fails with `InsufficientLength`.
    fn from_str(s: &str) -> Result<Self> {
        if s.len() <= NODE_ID_PREFIX.len() {
            return Err(IdError::InsufficientLength {
                expected: NODE_ID_PREFIX.len(),
                got: s.len(),
            });
        }
        ShortId::from_prefixed_str(s, NODE_ID_PREFIX).map(Self::from)
    }
}

impl QuotedText for NodeId {
    const NAME: &'static str = "NodeID";
    const PREFIX: &'static str = NODE_ID_PREFIX;
}

impl From<ShortId> for NodeId {
    fn from(id: ShortId) -> Self {
        Self(id.0)
    }
}

impl From<NodeId> for ShortId {
    fn from(id: NodeId) -> Self {
        ShortId(id.0)
    }
}

impl From<[u8; NODE_ID_LEN]> for NodeId {
    fn from(bytes: [u8; NODE_ID_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for NodeId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for NodeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serde_fixed::serialize(self, &self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        serde_fixed::deserialize::<D, Self, NODE_ID_LEN>(deserializer)
    }
}
