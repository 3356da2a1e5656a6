//! Error types for identifier primitives.

use thiserror::Error;

/// Errors produced while constructing, decoding, or parsing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    /// Raw input does not have the fixed identifier size.
    #[error("length mismatch: expected {expected} bytes, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    /// Text is structurally invalid (bad alphabet, missing quotes, missing prefix).
    #[error("malformed encoding: {0}")]
    MalformedEncoding(String),

    /// The CB58 checksum did not match the payload.
    #[error("invalid input checksum")]
    BadChecksum,

    /// Text is too short to hold its mandatory prefix.
    #[error("insufficient length: expected more than {expected} characters, got {got}")]
    InsufficientLength { expected: usize, got: usize },

    /// A reserved-table letter is not usable.
    #[error("invalid reserved letter: {0:?}")]
    InvalidReservedLetter(char),
}

impl IdError {
    /// A CB58 payload that decoded to the wrong number of bytes.
    pub(crate) fn payload_length(expected: usize, got: usize) -> Self {
        IdError::MalformedEncoding(format!(
            "decoded payload is {got} bytes, expected {expected}"
        ))
    }

    /// Wrap a decode failure with the context it happened in.
    ///
    /// `BadChecksum` and length errors are kept as-is so callers can still
    /// match on them.
    pub(crate) fn context(self, what: &str) -> Self {
        match self {
            IdError::MalformedEncoding(msg) => {
                IdError::MalformedEncoding(format!("couldn't decode {what}: {msg}"))
            }
            other => other,
        }
    }
}

/// Result type for identifier operations.
pub type Result<T> = std::result::Result<T, IdError>;
