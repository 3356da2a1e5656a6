//! Parser configuration.

use serde::{Deserialize, Serialize};

use ledger_ids_core::reserved::STANDARD_LETTERS;

/// Configuration for an [`IdParser`](crate::IdParser).
///
/// Deserializable so it can sit inside a caller's own configuration file.
/// Missing fields take their default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Accept CB58 text whose checksum does not match, keeping the first 32
    /// decoded bytes. Off by default; every such acceptance is logged.
    pub force_ignore_checksum: bool,
    /// Letters of the reserved table. `None` uses the standard table.
    pub reserved_letters: Option<Vec<char>>,
}

impl ParseConfig {
    /// Standard letters followed by `extra`.
    pub fn with_extra_letters(extra: impl IntoIterator<Item = char>) -> Self {
        Self {
            reserved_letters: Some(STANDARD_LETTERS.into_iter().chain(extra).collect()),
            ..Self::default()
        }
    }

    /// Enable or disable force mode.
    pub fn force_ignore_checksum(mut self, force: bool) -> Self {
        self.force_ignore_checksum = force;
        self
    }
}
