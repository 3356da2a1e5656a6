//! Error types for the alias registry.

use ledger_ids_core::Id;
use thiserror::Error;

/// Errors that can occur during alias operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AliasError {
    /// The alias is already bound to a different id.
    #[error("alias {alias:?} is already used for {existing}")]
    AliasConflict { alias: String, existing: Id },

    /// No id is bound to the alias.
    #[error("there is no ID with alias {0:?}")]
    AliasNotFound(String),

    /// The id has never been given an alias.
    #[error("there is no alias for ID {0}")]
    NoPrimaryAlias(Id),

    /// Aliases must be non-empty.
    #[error("alias must not be empty")]
    EmptyAlias,
}

/// Result type for alias operations.
pub type Result<T> = std::result::Result<T, AliasError>;
