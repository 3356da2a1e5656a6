//! # Ledger IDs Alias
//!
//! A concurrent registry that lets several human-friendly names resolve to
//! one identifier, and each identifier report its names back.
//!
//! ## Overview
//!
//! - [`AliasReader`] / [`AliasWriter`] - the two halves of the registry
//!   interface, so subsystems can be handed read-only access
//! - [`Aliaser`] - the in-memory implementation, safe to share across threads
//! - [`AliasSnapshot`] - serializable copy of the id -> aliases mapping
//!
//! ```rust
//! use ledger_ids_alias::{AliasReader, AliasWriter, Aliaser};
//! use ledger_ids_core::P_CHAIN_ID;
//!
//! let aliaser = Aliaser::new();
//! aliaser.alias(P_CHAIN_ID, "platform").unwrap();
//! aliaser.alias(P_CHAIN_ID, "P").unwrap();
//!
//! assert_eq!(aliaser.lookup("platform").unwrap(), P_CHAIN_ID);
//! assert_eq!(aliaser.primary_alias_or_default(&P_CHAIN_ID), "platform");
//! ```

pub mod error;
pub mod registry;
pub mod traits;

pub use error::{AliasError, Result};
pub use registry::{AliasSnapshot, Aliaser};
pub use traits::{AliasReader, AliasWriter};
