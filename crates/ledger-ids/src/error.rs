//! Error types for the facade.

use ledger_ids_alias::AliasError;
use ledger_ids_core::IdError;
use thiserror::Error;

/// Errors from identifier parsing or alias resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Identifier decoding or validation error.
    #[error("id error: {0}")]
    Id(#[from] IdError),

    /// Alias registry error.
    #[error("alias error: {0}")]
    Alias(#[from] AliasError),
}

/// Result type for facade operations.
pub type Result<T> = std::result::Result<T, Error>;
