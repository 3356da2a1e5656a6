//! The general 32-byte identifier.
//!
//! Used for chain ids, request ids, and object ids. Ids are plain values:
//! every derivation below returns a new `Id` and leaves its input alone.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::cb58;
use crate::error::{IdError, Result};
use crate::hashing::hash256;
use crate::reserved::ReservedTable;
use crate::serde_fixed;
use crate::text::QuotedText;

/// Size of an [`Id`] in bytes.
pub const ID_LEN: usize = 32;

/// Number of bits in an [`Id`].
pub const ID_BITS: usize = ID_LEN * 8;

/// A 32-byte identifier.
///
/// Equality is byte-wise and ordering is lexicographic over the bytes.
/// [`Id::EMPTY`] (all zeros) means "unset" and is never produced by
/// [`Id::hash_of`] in practice.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Id(pub [u8; ID_LEN]);

impl Id {
    /// The all-zero sentinel.
    pub const EMPTY: Self = Self([0u8; ID_LEN]);

    /// Create an id from raw bytes.
    pub const fn from_bytes(bytes: [u8; ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Create an id from a slice, which must be exactly [`ID_LEN`] bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; ID_LEN] = bytes.try_into().map_err(|_| IdError::LengthMismatch {
            expected: ID_LEN,
            got: bytes.len(),
        })?;
        Ok(Self(arr))
    }

    /// Reduce arbitrary bytes to an id with `hash256`.
    pub fn hash_of(data: &[u8]) -> Self {
        Self(hash256(data))
    }

    pub(crate) const fn reserved(letter: u8) -> Self {
        let mut bytes = [0u8; ID_LEN];
        bytes[ID_LEN - 1] = letter;
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; ID_LEN] {
        &self.0
    }

    /// Copy the raw bytes into a vector.
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Whether this is [`Id::EMPTY`].
    pub fn is_zero(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Lexicographic byte comparison.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }

    /// The bit at index `i`, as 0 or 1.
    ///
    /// Bit `i` is bit `i % 8` of byte `i / 8`, counting from the least
    /// significant bit of that byte.
    ///
    /// # Panics
    ///
    /// Panics if `i >= ID_BITS`.
    pub fn bit(&self, i: usize) -> u8 {
        (self.0[i / 8] >> (i % 8)) & 1
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

    /// Namespace this id under a sequence of integers.
    ///
    /// Returns `hash256(be64(p_1) || ... || be64(p_n) || id)`. Order matters:
    /// `prefix(&[1, 2])` and `prefix(&[2, 1])` are different ids. Used to
    /// keep several records under one base id, e.g. one prefix for
    /// confidence and another for the vertex itself.
    pub fn prefix(&self, prefixes: &[u64]) -> Self {
        let mut buf = Vec::with_capacity(prefixes.len() * 8 + ID_LEN);
        for prefix in prefixes {
            buf.extend_from_slice(&prefix.to_be_bytes());
        }
        buf.extend_from_slice(&self.0);
        Self::hash_of(&buf)
    }

    /// Extend this id with a sequence of integers and re-hash.
    ///
    /// Returns `hash256(id || be32(s_1) || ... || be32(s_n))`. This is the
    /// layout used to derive validation ids from a subnet conversion id.
    pub fn append(&self, suffixes: &[u32]) -> Self {
        let mut buf = Vec::with_capacity(ID_LEN + suffixes.len() * 4);
        buf.extend_from_slice(&self.0);
        for suffix in suffixes {
            buf.extend_from_slice(&suffix.to_be_bytes());
        }
        Self::hash_of(&buf)
    }

    /// Byte-wise exclusive-or.
    pub fn xor(&self, other: &Self) -> Self {
        let mut out = self.0;
        for (byte, rhs) in out.iter_mut().zip(other.0.iter()) {
            *byte ^= rhs;
        }
        Self(out)
    }

    /// Decode CB58 text, skipping the reserved-id fast path.
    pub fn from_cb58(text: &str) -> Result<Self> {
        let bytes = cb58::decode(text)?;
        Self::from_slice(&bytes).map_err(|_| IdError::payload_length(ID_LEN, bytes.len()))
    }

    /// [`Id::from_cb58`] with an opt-in escape hatch for damaged text.
    ///
    /// With `force_ignore_checksum` set, text that fails *only* the checksum
    /// is decoded as raw base-58 and its first [`ID_LEN`] bytes are taken as
    /// the id. Nothing vouches for those bytes: the input may have been
    /// corrupted anywhere. Reserve this for recovering legacy or hand-edited
    /// values, never for untrusted input.
    pub fn from_cb58_with_force(text: &str, force_ignore_checksum: bool) -> Result<Self> {
        match Self::from_cb58(text) {
            Err(IdError::BadChecksum) if force_ignore_checksum => {
                let raw = cb58::decode_raw(text)?;
                if raw.len() < ID_LEN {
                    return Err(IdError::BadChecksum);
                }
                Self::from_slice(&raw[..ID_LEN])
            }
            other => other,
        }
    }

    /// Like [`FromStr`], optionally ignoring checksum failures.
    ///
    /// See [`Id::from_cb58_with_force`] for what forcing gives up.
    pub fn from_str_with_force(text: &str, force_ignore_checksum: bool) -> Result<Self> {
        if let Some(id) = ReservedTable::standard().parse(text) {
            return Ok(id);
        }
        Self::from_cb58_with_force(text, force_ignore_checksum)
    }

    /// Parse or panic.
    ///
    /// For constants and tests only.
    ///
    /// # Panics
    ///
    /// Panics if `text` is not a valid id.
    pub fn must_parse(text: &str) -> Self {
        match text.parse::<Self>() {
            Ok(id) => id,
            Err(e) => panic!("invalid id {text:?}: {e}"),
        }
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match ReservedTable::standard().format(self) {
            Some(text) => f.write_str(text),
            None => f.write_str(&cb58::encode(&self.0)),
        }
    }
}

impl FromStr for Id {
    type Err = IdError;

    /// Reserved ids are recognized first; everything else is CB58.
    fn from_str(s: &str) -> Result<Self> {
        if let Some(id) = ReservedTable::standard().parse(s) {
            return Ok(id);
        }
        Self::from_cb58(s)
    }
}

impl QuotedText for Id {
    const NAME: &'static str = "ID";
}

impl AsRef<[u8]> for Id {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; ID_LEN]> for Id {
    fn from(bytes: [u8; ID_LEN]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Id {
    type Error = IdError;

    fn try_from(slice: &[u8]) -> Result<Self> {
        Self::from_slice(slice)
    }
}

impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serde_fixed::serialize(self, &self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        serde_fixed::deserialize::<D, Self, ID_LEN>(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reserved::{C_CHAIN_ID, P_CHAIN_ID};
    use proptest::prelude::*;

    fn counting_id() -> Id {
        let mut bytes = [0u8; ID_LEN];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8 + 1;
        }
        Id(bytes)
    }

    #[test]
    fn test_display_known_vector() {
        let id = counting_id();
        assert_eq!(
            id.to_string(),
            "SkB92YpWm4Q2ijQHH34cqbKkCZWszsiQgHVjtNeFF2HdvDQU"
        );
        assert_eq!(Id::EMPTY.to_string(), "11111111111111111111111111111111LpoYY");
    }

    #[test]
    fn test_parse_roundtrip() {
        let id = counting_id();
        assert_eq!(id.to_string().parse::<Id>().unwrap(), id);
        assert_eq!(Id::EMPTY.to_string().parse::<Id>().unwrap(), Id::EMPTY);
    }

    #[test]
    fn test_reserved_fast_path() {
        assert_eq!(P_CHAIN_ID.to_string(), "11111111111111111111111111111111P");
        assert_eq!("P".parse::<Id>().unwrap(), P_CHAIN_ID);
        assert_eq!("c".parse::<Id>().unwrap(), C_CHAIN_ID);
        assert_eq!(
            "11111111111111111111111111111111P".parse::<Id>().unwrap(),
            P_CHAIN_ID
        );
    }

    #[test]
    fn test_from_cb58_skips_reserved() {
        assert!(Id::from_cb58("P").is_err());
        assert!(Id::from_cb58("11111111111111111111111111111111P").is_err());
        // The reserved id still has an ordinary CB58 form.
        let text = cb58::encode(P_CHAIN_ID.as_bytes());
        assert_eq!(text, "1111111111111111111111111111111A6SYP9h");
        assert_eq!(Id::from_cb58(&text).unwrap(), P_CHAIN_ID);
        assert_eq!(text.parse::<Id>().unwrap(), P_CHAIN_ID);
    }

    #[test]
    fn test_from_slice_length_mismatch() {
        assert_eq!(
            Id::from_slice(&[0u8; 31]),
            Err(IdError::LengthMismatch { expected: 32, got: 31 })
        );
        assert!(Id::from_slice(&[0u8; 32]).is_ok());
    }

    #[test]
    fn test_parse_wrong_payload_length() {
        let text = cb58::encode(&[1u8; 20]);
        assert_eq!(text.parse::<Id>(), Err(IdError::payload_length(32, 20)));
    }

    #[test]
    fn test_hash_of_known_vector() {
        assert_eq!(
            Id::hash_of(b"hello").to_hex(),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn test_prefix_known_vectors() {
        let id = counting_id();
        assert_eq!(
            id.prefix(&[1, 2]).to_hex(),
            "6b1d41979272107f04ce8f4de9143c75450c04ce8814aa7b70491e7033f1d17e"
        );
        assert_eq!(
            id.prefix(&[2, 1]).to_hex(),
            "77ed642a9d3bc7ce471f832008f5f56a0bd9420e6b550dfc291e7e722bccb308"
        );
    }

    #[test]
    fn test_append_known_vectors() {
        let id = counting_id();
        assert_eq!(
            id.append(&[7]).to_hex(),
            "5dbd1652f570fcbb719ea7ffcf3f8451dd0ea71472bd8c8a4d175d957df0c5ca"
        );
        assert_eq!(
            id.append(&[1, 2]).to_hex(),
            "9c6d93518160c9790d7f2a63dd5f47c0339d0a479152e4294bf5923b8b1cc0d7"
        );
    }

    #[test]
    fn test_derivations_leave_input_unchanged() {
        let id = counting_id();
        let copy = id;
        let _ = id.prefix(&[1]);
        let _ = id.append(&[1]);
        let _ = id.xor(&P_CHAIN_ID);
        assert_eq!(id, copy);
    }

    #[test]
    fn test_bit() {
        let mut bytes = [0u8; ID_LEN];
        bytes[0] = 0b0000_0101;
        bytes[31] = 0b1000_0000;
        let id = Id(bytes);
        assert_eq!(id.bit(0), 1);
        assert_eq!(id.bit(1), 0);
        assert_eq!(id.bit(2), 1);
        assert_eq!(id.bit(255), 1);
        assert_eq!(id.bit(254), 0);
    }

    #[test]
    fn test_compare() {
        let mut low = [0u8; ID_LEN];
        low[0] = 1;
        let mut high = [0u8; ID_LEN];
        high[0] = 2;
        assert_eq!(Id(low).compare(&Id(high)), Ordering::Less);
        assert_eq!(Id(high).compare(&Id(low)), Ordering::Greater);
        assert_eq!(Id(low).compare(&Id(low)), Ordering::Equal);
        assert!(Id(low) < Id(high));
    }

    #[test]
    fn test_hex_roundtrip() {
        let id = counting_id();
        assert_eq!(Id::from_hex(&id.to_hex()).unwrap(), id);
        assert!(matches!(
            Id::from_hex("abcd"),
            Err(IdError::LengthMismatch { .. })
        ));
        assert!(matches!(Id::from_hex("zz"), Err(IdError::MalformedEncoding(_))));
    }

    #[test]
    fn test_force_decode() {
        let id = counting_id();
        let mut damaged = id.to_vec();
        damaged.extend_from_slice(&[0, 0, 0, 0]);
        let text = bs58::encode(damaged).into_string();

        assert_eq!(text.parse::<Id>(), Err(IdError::BadChecksum));
        assert_eq!(Id::from_str_with_force(&text, false), Err(IdError::BadChecksum));
        assert_eq!(Id::from_str_with_force(&text, true).unwrap(), id);
    }

    #[test]
    fn test_force_decode_keeps_other_errors() {
        assert!(matches!(
            Id::from_str_with_force("0OIl", true),
            Err(IdError::MalformedEncoding(_))
        ));

        // Too short to yield an id even without the checksum.
        let mut short = vec![9u8; 10];
        short.extend_from_slice(&[0, 0, 0, 0]);
        let text = bs58::encode(short).into_string();
        assert_eq!(Id::from_str_with_force(&text, true), Err(IdError::BadChecksum));
    }

    #[test]
    #[should_panic(expected = "invalid id")]
    fn test_must_parse_panics() {
        Id::must_parse("not an id");
    }

    #[test]
    fn test_quoted() {
        let id = counting_id();
        let quoted = id.to_quoted();
        assert_eq!(quoted, format!("\"{id}\""));

        let mut target = Id::EMPTY;
        target.merge_quoted(&quoted).unwrap();
        assert_eq!(target, id);

        // null leaves the target unchanged
        target.merge_quoted("null").unwrap();
        assert_eq!(target, id);

        assert!(matches!(
            target.merge_quoted("x"),
            Err(IdError::MalformedEncoding(_))
        ));
        assert!(matches!(
            target.merge_quoted(&id.to_string()),
            Err(IdError::MalformedEncoding(_))
        ));
        assert!(matches!(
            target.merge_quoted("\"!!\""),
            Err(IdError::MalformedEncoding(msg)) if msg.starts_with("couldn't decode ID")
        ));
        assert_eq!(target, id);
    }

    #[test]
    fn test_serde_json() {
        let id = counting_id();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, id.to_quoted());
        let back: Id = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);

        let reserved: Id = serde_json::from_str("\"P\"").unwrap();
        assert_eq!(reserved, P_CHAIN_ID);

        assert!(serde_json::from_str::<Id>("\"garbage\"").is_err());
        let missing: Option<Id> = serde_json::from_str("null").unwrap();
        assert_eq!(missing, None);
    }

    #[test]
    fn test_serde_cbor_bytes() {
        let id = counting_id();
        let mut buf = Vec::new();
        ciborium::ser::into_writer(&id, &mut buf).unwrap();
        // 2-byte byte-string header + 32 bytes
        assert_eq!(buf.len(), 34);
        let back: Id = ciborium::de::from_reader(buf.as_slice()).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_debug() {
        let id = Id([0xcd; ID_LEN]);
        assert_eq!(format!("{:?}", id), "Id(cdcdcdcdcdcdcdcd)");
    }

    fn any_id() -> impl Strategy<Value = Id> {
        any::<[u8; ID_LEN]>().prop_map(Id)
    }

    proptest! {
        #[test]
        fn prop_text_roundtrip(id in any_id()) {
            prop_assert_eq!(id.to_string().parse::<Id>().unwrap(), id);
        }

        #[test]
        fn prop_encoding_deterministic(id in any_id()) {
            prop_assert_eq!(id.to_string(), id.to_string());
        }

        #[test]
        fn prop_hash_deterministic(data in prop::collection::vec(any::<u8>(), 0..256)) {
            prop_assert_eq!(Id::hash_of(&data), Id::hash_of(&data));
        }

        #[test]
        fn prop_xor_self_inverse(a in any_id(), b in any_id()) {
            prop_assert_eq!(a.xor(&b).xor(&b), a);
            prop_assert_eq!(a.xor(&b), b.xor(&a));
        }

        #[test]
        fn prop_bits_reconstruct(id in any_id()) {
            let mut bytes = [0u8; ID_LEN];
            for i in 0..ID_BITS {
                let bit = id.bit(i);
                prop_assert!(bit <= 1);
                bytes[i / 8] |= bit << (i % 8);
            }
            prop_assert_eq!(Id(bytes), id);
        }

        #[test]
        fn prop_compare_matches_ord(a in any_id(), b in any_id()) {
            prop_assert_eq!(a.compare(&b), a.cmp(&b));
        }
    }
}
