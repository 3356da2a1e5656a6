//! # Ledger IDs Core
//!
//! Fixed-size identifiers used across the ledger's internal protocols, and
//! their checksummed text encoding.
//!
//! This crate contains no I/O and no shared mutable state. Everything here is
//! a pure function over byte arrays and safe to call from any thread.
//!
//! ## Key Types
//!
//! - [`Id`] - 32-byte identifier for chains, requests and objects
//! - [`ShortId`] - 20-byte identifier
//! - [`NodeId`] - 20-byte node identity, displayed as `NodeID-...`
//! - [`ReservedTable`] - well-known chain ids recognized without CB58
//!
//! ## Text Encoding
//!
//! Identifiers are written as CB58: base-58 of the bytes followed by a
//! 4-byte SHA-256 checksum. See the [`cb58`] module. Reserved ids use their
//! own 33-character form, e.g. `11111111111111111111111111111111P`.
//!
//! ```rust
//! use ledger_ids_core::{Id, P_CHAIN_ID};
//!
//! let id = Id::hash_of(b"genesis");
//! let text = id.to_string();
//! assert_eq!(text.parse::<Id>().unwrap(), id);
//!
//! assert_eq!("P".parse::<Id>().unwrap(), P_CHAIN_ID);
//! ```

pub mod cb58;
pub mod error;
pub mod hashing;
pub mod id;
pub mod node_id;
pub mod reserved;
mod serde_fixed;
pub mod short_id;
pub mod sorting;
pub mod text;

pub use error::{IdError, Result};
pub use id::{Id, ID_BITS, ID_LEN};
pub use node_id::{Certificate, NodeId, RawCertificate, NODE_ID_LEN, NODE_ID_PREFIX};
pub use reserved::{
    ReservedTable, A_CHAIN_ID, B_CHAIN_ID, C_CHAIN_ID, D_CHAIN_ID, G_CHAIN_ID, I_CHAIN_ID,
    K_CHAIN_ID, P_CHAIN_ID, Q_CHAIN_ID, T_CHAIN_ID, X_CHAIN_ID, Z_CHAIN_ID,
};
pub use short_id::{ShortId, SHORT_ID_LEN};
pub use text::QuotedText;
