//! Golden test vectors for deterministic verification.
//!
//! Expected outputs were computed independently of this workspace. Any
//! implementation of the identifier codec must reproduce them exactly.

use ledger_ids_core::{cb58, Id, NodeId, RawCertificate, ShortId, P_CHAIN_ID};

/// The operation a vector exercises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorKind {
    /// CB58 text of the raw input bytes.
    Cb58,
    /// Text of the input as an [`Id`].
    IdText,
    /// Text of the input as a [`ShortId`].
    ShortIdText,
    /// Text of the input as a [`NodeId`].
    NodeIdText,
    /// Hex of [`Id::hash_of`].
    HashToId,
    /// Hex of [`Id::prefix`] applied to the input id.
    Prefix(Vec<u64>),
    /// Hex of [`Id::append`] applied to the input id.
    Append(Vec<u32>),
    /// Hex of [`NodeId::from_certificate`] over the input as raw DER.
    CertificateNodeId,
    /// Hex of [`NodeId::from_mldsa_key`] over the input as a public key.
    MldsaNodeId,
}

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    pub kind: VectorKind,
    /// Input bytes.
    pub input: Vec<u8>,
    /// Expected output (text or hex, per kind).
    pub expected: &'static str,
}

/// Bytes `1, 2, ..., n`.
pub fn counting_bytes(n: usize) -> Vec<u8> {
    (1..=n).map(|i| i as u8).collect()
}

/// `bytes` followed by zeros up to `len`.
pub fn zero_padded(bytes: &[u8], len: usize) -> Vec<u8> {
    let mut out = bytes.to_vec();
    out.resize(len.max(bytes.len()), 0);
    out
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "cb58 of zero-padded ascii text",
            kind: VectorKind::Cb58,
            input: zero_padded(b"ava labs", 32),
            expected: "jvYi6Tn9idMi7BaymUVi9zWjg5tpmW7trfKG1AYJLKZJ2fsU7",
        },
        GoldenVector {
            name: "counting id text",
            kind: VectorKind::IdText,
            input: counting_bytes(32),
            expected: "SkB92YpWm4Q2ijQHH34cqbKkCZWszsiQgHVjtNeFF2HdvDQU",
        },
        GoldenVector {
            name: "empty id text",
            kind: VectorKind::IdText,
            input: vec![0u8; 32],
            expected: "11111111111111111111111111111111LpoYY",
        },
        GoldenVector {
            name: "reserved P-chain id text",
            kind: VectorKind::IdText,
            input: P_CHAIN_ID.to_vec(),
            expected: "11111111111111111111111111111111P",
        },
        GoldenVector {
            name: "reserved P-chain id as plain cb58",
            kind: VectorKind::Cb58,
            input: P_CHAIN_ID.to_vec(),
            expected: "1111111111111111111111111111111A6SYP9h",
        },
        GoldenVector {
            name: "counting short id text",
            kind: VectorKind::ShortIdText,
            input: counting_bytes(20),
            expected: "6L5yRNPTuciSgXGHqYwn9N6NeoKMvqvy",
        },
        GoldenVector {
            name: "counting node id text",
            kind: VectorKind::NodeIdText,
            input: counting_bytes(20),
            expected: "NodeID-6L5yRNPTuciSgXGHqYwn9N6NeoKMvqvy",
        },
        GoldenVector {
            name: "hash to id",
            kind: VectorKind::HashToId,
            input: b"hello".to_vec(),
            expected: "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824",
        },
        GoldenVector {
            name: "prefix [1, 2]",
            kind: VectorKind::Prefix(vec![1, 2]),
            input: counting_bytes(32),
            expected: "6b1d41979272107f04ce8f4de9143c75450c04ce8814aa7b70491e7033f1d17e",
        },
        GoldenVector {
            name: "prefix [2, 1]",
            kind: VectorKind::Prefix(vec![2, 1]),
            input: counting_bytes(32),
            expected: "77ed642a9d3bc7ce471f832008f5f56a0bd9420e6b550dfc291e7e722bccb308",
        },
        GoldenVector {
            name: "append [7]",
            kind: VectorKind::Append(vec![7]),
            input: counting_bytes(32),
            expected: "5dbd1652f570fcbb719ea7ffcf3f8451dd0ea71472bd8c8a4d175d957df0c5ca",
        },
        GoldenVector {
            name: "append [1, 2]",
            kind: VectorKind::Append(vec![1, 2]),
            input: counting_bytes(32),
            expected: "9c6d93518160c9790d7f2a63dd5f47c0339d0a479152e4294bf5923b8b1cc0d7",
        },
        GoldenVector {
            name: "node id from certificate",
            kind: VectorKind::CertificateNodeId,
            input: b"cert".to_vec(),
            expected: "c19e9f6012d5e995aeda5eb9aa9e94505bd88b4b",
        },
        GoldenVector {
            name: "node id from ml-dsa key",
            kind: VectorKind::MldsaNodeId,
            input: vec![0xab; 32],
            expected: "99e6e609249f2358f76d1c24c7396e9d7da330c3",
        },
    ]
}

/// Compute the output of a vector with the current implementation.
///
/// Inputs of the wrong size for their kind produce an error message rather
/// than a value, so they fail verification instead of panicking.
pub fn compute_vector(vector: &GoldenVector) -> String {
    let input = &vector.input;
    let result = match &vector.kind {
        VectorKind::Cb58 => Ok(cb58::encode(input)),
        VectorKind::IdText => Id::from_slice(input).map(|id| id.to_string()),
        VectorKind::ShortIdText => ShortId::from_slice(input).map(|id| id.to_string()),
        VectorKind::NodeIdText => NodeId::from_slice(input).map(|id| id.to_string()),
        VectorKind::HashToId => Ok(Id::hash_of(input).to_hex()),
        VectorKind::Prefix(prefixes) => {
            Id::from_slice(input).map(|id| id.prefix(prefixes).to_hex())
        }
        VectorKind::Append(suffixes) => {
            Id::from_slice(input).map(|id| id.append(suffixes).to_hex())
        }
        VectorKind::CertificateNodeId => {
            Ok(NodeId::from_certificate(&RawCertificate::new(input.clone())).to_hex())
        }
        VectorKind::MldsaNodeId => Ok(NodeId::from_mldsa_key(input).to_hex()),
    };
    result.unwrap_or_else(|e| format!("error: {e}"))
}

/// Verify all golden vectors.
///
/// Returns `(name, matches, computed)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let computed = compute_vector(v);
            let matches = computed == v.expected;
            (v.name.to_string(), matches, computed)
        })
        .collect()
}
