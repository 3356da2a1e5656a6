//! # Ledger IDs
//!
//! The unified API for ledger identifiers: fixed-size ids with a checksummed
//! text form, well-known reserved chain ids, and a registry of human-friendly
//! aliases.
//!
//! ## Overview
//!
//! - **Identifiers**: [`Id`] (32 bytes), [`ShortId`] and [`NodeId`] (20 bytes)
//! - **Text**: CB58, with reserved chain ids written as `1...1P` and the like
//! - **Aliases**: many names per id, each name bound to one id
//! - **Parsing**: [`IdParser`] applies a [`ParseConfig`] (reserved letters,
//!   opt-in checksum forcing)
//!
//! ## Usage
//!
//! ```rust
//! use ledger_ids::{AliasWriter, Aliaser, IdParser, ParseConfig, P_CHAIN_ID};
//!
//! let parser = IdParser::new(ParseConfig::default()).unwrap();
//! let aliaser = Aliaser::new();
//! aliaser.alias(P_CHAIN_ID, "platform").unwrap();
//!
//! assert_eq!(parser.parse_id("P").unwrap(), P_CHAIN_ID);
//! assert_eq!(parser.resolve(&aliaser, "platform").unwrap(), P_CHAIN_ID);
//! assert_eq!(parser.display_name(&aliaser, &P_CHAIN_ID), "platform");
//! ```
//!
//! ## Re-exports
//!
//! - `ledger_ids::core` - identifier types, hashing, CB58, reserved table
//! - `ledger_ids::alias` - alias registry

pub mod config;
pub mod error;
pub mod parser;

// Re-export component crates
pub use ledger_ids_alias as alias;
pub use ledger_ids_core as core;

// Re-export main types for convenience
pub use config::ParseConfig;
pub use error::{Error, Result};
pub use parser::IdParser;

// Re-export commonly used component types
pub use ledger_ids_alias::{AliasError, AliasReader, AliasSnapshot, AliasWriter, Aliaser};
pub use ledger_ids_core::{
    Certificate, Id, IdError, NodeId, QuotedText, RawCertificate, ReservedTable, ShortId,
    C_CHAIN_ID, P_CHAIN_ID, X_CHAIN_ID,
};
