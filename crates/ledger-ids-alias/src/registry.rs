//! In-memory alias registry.
//!
//! Both directions of the mapping live behind one `RwLock`, so a reader never
//! sees an alias in one map and not the other. Lookups take the read lock;
//! registrations and removals take the write lock. No operation does I/O or
//! calls out while holding either.

use std::collections::{BTreeMap, HashMap};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use ledger_ids_core::Id;

use crate::error::{AliasError, Result};
use crate::traits::{AliasReader, AliasWriter};

/// Point-in-time copy of a registry: id -> aliases, primary first.
///
/// The registry itself is memory-only; callers that need persistence
/// serialize this with the format of their choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasSnapshot {
    pub entries: BTreeMap<Id, Vec<String>>,
}

/// Concurrent bidirectional id <-> alias registry.
///
/// An alias names exactly one id; an id may have any number of aliases.
/// The first alias registered for an id is its primary alias until the id
/// loses all of its aliases.
pub struct Aliaser {
    inner: RwLock<AliaserInner>,
}

#[derive(Default)]
struct AliaserInner {
    /// alias -> id.
    by_alias: HashMap<String, Id>,

    /// id -> aliases in registration order. Never holds an empty list.
    by_id: HashMap<Id, Vec<String>>,
}

impl Aliaser {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(AliaserInner::default()),
        }
    }

    /// Rebuild a registry from a snapshot.
    ///
    /// Fails if the snapshot binds one alias to two ids or holds an empty
    /// alias.
    pub fn from_snapshot(snapshot: &AliasSnapshot) -> Result<Self> {
        let aliaser = Self::new();
        for (id, aliases) in &snapshot.entries {
            for alias in aliases {
                aliaser.alias(*id, alias)?;
            }
        }
        tracing::debug!(ids = aliaser.len(), "restored alias registry from snapshot");
        Ok(aliaser)
    }

    /// Copy the current contents.
    pub fn snapshot(&self) -> AliasSnapshot {
        let inner = self.inner.read();
        AliasSnapshot {
            entries: inner
                .by_id
                .iter()
                .map(|(id, aliases)| (*id, aliases.clone()))
                .collect(),
        }
    }

    /// Number of ids with at least one alias.
    pub fn len(&self) -> usize {
        self.inner.read().by_id.len()
    }

    /// Whether no id has an alias.
    pub fn is_empty(&self) -> bool {
        self.inner.read().by_id.is_empty()
    }
}

impl Default for Aliaser {
    fn default() -> Self {
        Self::new()
    }
}

impl AliasReader for Aliaser {
    fn lookup(&self, alias: &str) -> Result<Id> {
        self.inner
            .read()
            .by_alias
            .get(alias)
            .copied()
            .ok_or_else(|| AliasError::AliasNotFound(alias.to_string()))
    }

    fn primary_alias(&self, id: &Id) -> Result<String> {
        self.inner
            .read()
            .by_id
            .get(id)
            .and_then(|aliases| aliases.first())
            .cloned()
            .ok_or(AliasError::NoPrimaryAlias(*id))
    }

    fn aliases(&self, id: &Id) -> Vec<String> {
        self.inner.read().by_id.get(id).cloned().unwrap_or_default()
    }
}

impl AliasWriter for Aliaser {
    fn alias(&self, id: Id, alias: &str) -> Result<()> {
        if alias.is_empty() {
            return Err(AliasError::EmptyAlias);
        }

        let mut inner = self.inner.write();
        match inner.by_alias.get(alias) {
            Some(existing) if *existing == id => return Ok(()),
            Some(existing) => {
                return Err(AliasError::AliasConflict {
                    alias: alias.to_string(),
                    existing: *existing,
                })
            }
            None => {}
        }

        inner.by_alias.insert(alias.to_string(), id);
        inner.by_id.entry(id).or_default().push(alias.to_string());
        tracing::debug!(%id, alias, "registered alias");
        Ok(())
    }

    fn remove_alias(&self, alias: &str) -> Result<Id> {
        let mut inner = self.inner.write();
        let id = inner
            .by_alias
            .remove(alias)
            .ok_or_else(|| AliasError::AliasNotFound(alias.to_string()))?;

        let now_unaliased = match inner.by_id.get_mut(&id) {
            Some(aliases) => {
                aliases.retain(|a| a != alias);
                aliases.is_empty()
            }
            None => false,
        };
        if now_unaliased {
            inner.by_id.remove(&id);
        }
        tracing::debug!(%id, alias, "removed alias");
        Ok(id)
    }

    fn remove_aliases(&self, id: &Id) -> Vec<String> {
        let mut inner = self.inner.write();
        let removed = inner.by_id.remove(id).unwrap_or_default();
        for alias in &removed {
            inner.by_alias.remove(alias);
        }
        if !removed.is_empty() {
            tracing::debug!(%id, count = removed.len(), "removed all aliases");
        }
        removed
    }
}
