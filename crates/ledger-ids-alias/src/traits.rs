//! Reader and writer halves of an alias registry.
//!
//! Subsystems that only resolve names take an [`AliasReader`]; the component
//! that assigns names holds the [`AliasWriter`].

use ledger_ids_core::Id;

use crate::error::Result;

/// Read access to an alias registry.
pub trait AliasReader: Send + Sync {
    /// The id bound to `alias`.
    fn lookup(&self, alias: &str) -> Result<Id>;

    /// The first alias ever registered for `id`.
    fn primary_alias(&self, id: &Id) -> Result<String>;

    /// The primary alias, or the id's own canonical text if it has none.
    fn primary_alias_or_default(&self, id: &Id) -> String {
        self.primary_alias(id).unwrap_or_else(|_| id.to_string())
    }

    /// All aliases of `id` in registration order; empty if none.
    fn aliases(&self, id: &Id) -> Vec<String>;
}

/// Write access to an alias registry.
pub trait AliasWriter: Send + Sync {
    /// Bind `alias` to `id`.
    ///
    /// Re-binding the same pair succeeds without change. Binding an alias
    /// that belongs to another id fails with `AliasConflict`.
    fn alias(&self, id: Id, alias: &str) -> Result<()>;

    /// Unbind `alias`, returning the id it belonged to.
    fn remove_alias(&self, alias: &str) -> Result<Id>;

    /// Unbind every alias of `id`, returning them in registration order.
    fn remove_aliases(&self, id: &Id) -> Vec<String>;
}
