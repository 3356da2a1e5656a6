//! Quoted (JSON-style) text form of identifiers.
//!
//! Mirrors how identifiers appear inside JSON documents: a quoted canonical
//! string, or the literal `null` which leaves an existing value untouched.

use std::fmt;
use std::str::FromStr;

use crate::error::{IdError, Result};

/// The JSON null literal.
pub const NULL_LITERAL: &str = "null";

/// Quoted text encoding for identifier types.
pub trait QuotedText: FromStr<Err = IdError> + fmt::Display + Sized {
    /// Type name used in error messages.
    const NAME: &'static str;

    /// Mandatory text prefix, if the type has one.
    const PREFIX: &'static str = "";

    /// Canonical text wrapped in double quotes.
    fn to_quoted(&self) -> String {
        format!("\"{self}\"")
    }

    /// Decode a quoted value into `self`.
    ///
    /// `null` is a no-op. Anything else must be a quoted canonical string.
    fn merge_quoted(&mut self, raw: &str) -> Result<()> {
        if raw == NULL_LITERAL {
            return Ok(());
        }

        let min_len = 2 + Self::PREFIX.len();
        if !Self::PREFIX.is_empty() && raw.len() <= min_len {
            return Err(IdError::InsufficientLength {
                expected: min_len,
                got: raw.len(),
            });
        }

        let inner = unquote(raw)?;
        *self = inner.parse().map_err(|e: IdError| e.context(Self::NAME))?;
        Ok(())
    }
}

/// Strip one pair of surrounding double quotes.
pub fn unquote(raw: &str) -> Result<&str> {
    raw.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(|| {
            IdError::MalformedEncoding("first and last characters should be quotes".into())
        })
}
