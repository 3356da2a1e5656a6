//! # Ledger IDs Testkit
//!
//! Testing utilities for the ledger identifier crates.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known inputs with independently computed outputs
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Seeded id sources and a pre-populated alias registry
//! - **Conformance**: Checks every alias registry implementation must pass
//!
//! ## Golden Vectors
//!
//! ```rust
//! use ledger_ids_testkit::vectors::verify_all_vectors;
//!
//! for (name, matches, computed) in verify_all_vectors() {
//!     assert!(matches, "{name}: {computed}");
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use ledger_ids_testkit::generators;
//!
//! proptest! {
//!     #[test]
//!     fn xor_is_self_inverse(a in generators::id(), b in generators::id()) {
//!         prop_assert_eq!(a.xor(&b).xor(&b), a);
//!     }
//! }
//! ```
//!
//! ## Alias Registry Conformance
//!
//! ```rust
//! use ledger_ids_alias::Aliaser;
//! use ledger_ids_testkit::run_all_alias;
//!
//! run_all_alias(Aliaser::new);
//! ```

pub mod conformance;
pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use conformance::run_all_alias;
pub use fixtures::{batman_id, gordon_id, populated_aliaser, IdFixture};
pub use vectors::{all_vectors, compute_vector, verify_all_vectors, GoldenVector, VectorKind};
