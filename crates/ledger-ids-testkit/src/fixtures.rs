//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};

use ledger_ids_alias::{AliasWriter, Aliaser};
use ledger_ids_core::{Id, NodeId, RawCertificate, ShortId};

/// A deterministic source of identifiers.
pub struct IdFixture {
    rng: StdRng,
}

impl IdFixture {
    /// Create a fixture seeded from the OS.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create with a fixed seed so runs are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A random id.
    pub fn id(&mut self) -> Id {
        Id::from_bytes(self.rng.gen())
    }

    /// `count` distinct random ids.
    pub fn ids(&mut self, count: usize) -> Vec<Id> {
        let mut ids: Vec<Id> = Vec::with_capacity(count);
        while ids.len() < count {
            let id = self.id();
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }

    /// A random short id.
    pub fn short_id(&mut self) -> ShortId {
        ShortId::from_bytes(self.rng.gen())
    }

    /// A node id derived from a random certificate of `len` bytes.
    pub fn node_id(&mut self, len: usize) -> (RawCertificate, NodeId) {
        let mut raw = vec![0u8; len];
        self.rng.fill_bytes(&mut raw);
        let cert = RawCertificate::new(raw);
        let node_id = NodeId::from_certificate(&cert);
        (cert, node_id)
    }
}

impl Default for IdFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Id used for the `Batman` aliases in [`populated_aliaser`].
pub fn batman_id() -> Id {
    Id::hash_of(b"batman")
}

/// Id used for the `Gordon` aliases in [`populated_aliaser`].
pub fn gordon_id() -> Id {
    Id::hash_of(b"gordon")
}

/// A registry with two ids and several aliases each.
///
/// `Batman` is registered first, so it is the primary alias of [`batman_id`].
pub fn populated_aliaser() -> Aliaser {
    let aliaser = Aliaser::new();
    for (id, alias) in [
        (batman_id(), "Batman"),
        (batman_id(), "Dark Knight"),
        (gordon_id(), "Commissioner Gordon"),
        (gordon_id(), "Jim"),
    ] {
        if let Err(e) = aliaser.alias(id, alias) {
            panic!("fixture alias {alias:?} failed: {e}");
        }
    }
    aliaser
}
