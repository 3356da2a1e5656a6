//! Reserved identifiers: well-known chain ids recognized without CB58.
//!
//! A reserved id is all zeros except for byte 31, which holds an ASCII
//! letter. Its canonical text is 32 filler characters followed by the letter:
//!
//! ```text
//!   P-Chain: 11111111111111111111111111111111P
//!   C-Chain: 11111111111111111111111111111111C
//!   X-Chain: 11111111111111111111111111111111X
//! ```
//!
//! Formatting and parsing go through a [`ReservedTable`] and never touch the
//! base-58 codec. Single-letter shorthand (`"P"`, `"p"`) is accepted on input
//! but never produced on output.

use once_cell::sync::Lazy;

use crate::error::{IdError, Result};
use crate::id::{Id, ID_LEN};

/// Byte position holding the reserved letter.
pub const RESERVED_LETTER_POS: usize = ID_LEN - 1;

/// Filler text preceding the letter in canonical form.
pub const RESERVED_FILLER: &str = "11111111111111111111111111111111";

/// Length of the canonical text (filler plus one letter).
pub const RESERVED_TEXT_LEN: usize = RESERVED_FILLER.len() + 1;

/// Letters of the standard table, in enumeration order.
pub const STANDARD_LETTERS: [char; 12] = [
    'P', 'C', 'X', 'Q', 'A', 'B', 'T', 'Z', 'G', 'I', 'K', 'D',
];

/// Platform chain.
pub const P_CHAIN_ID: Id = Id::reserved(b'P');
/// Contract chain.
pub const C_CHAIN_ID: Id = Id::reserved(b'C');
/// Exchange chain.
pub const X_CHAIN_ID: Id = Id::reserved(b'X');
/// Quantum chain.
pub const Q_CHAIN_ID: Id = Id::reserved(b'Q');
/// AI chain.
pub const A_CHAIN_ID: Id = Id::reserved(b'A');
/// Bridge chain.
pub const B_CHAIN_ID: Id = Id::reserved(b'B');
/// Threshold chain.
pub const T_CHAIN_ID: Id = Id::reserved(b'T');
/// Reserved chain `Z`.
pub const Z_CHAIN_ID: Id = Id::reserved(b'Z');
/// Reserved chain `G`.
pub const G_CHAIN_ID: Id = Id::reserved(b'G');
/// Reserved chain `I`.
pub const I_CHAIN_ID: Id = Id::reserved(b'I');
/// Reserved chain `K`.
pub const K_CHAIN_ID: Id = Id::reserved(b'K');
/// Reserved chain `D`.
pub const D_CHAIN_ID: Id = Id::reserved(b'D');

static STANDARD: Lazy<ReservedTable> =
    Lazy::new(|| ReservedTable::from_normalized(STANDARD_LETTERS.to_vec()));

/// One row of the table.
#[derive(Debug, Clone)]
struct Entry {
    letter: char,
    id: Id,
    text: String,
}

/// Immutable letter <-> id lookup table.
///
/// Built once; lookups never allocate. Classification checks the zero prefix
/// and then indexes a 256-slot byte table, so its cost is the same for every
/// letter.
#[derive(Debug, Clone)]
pub struct ReservedTable {
    entries: Vec<Entry>,
    /// Last id byte -> index into `entries`.
    by_byte: [Option<u8>; 256],
}

impl ReservedTable {
    /// The process-wide standard table.
    pub fn standard() -> &'static ReservedTable {
        &STANDARD
    }

    /// Build a custom table, e.g. to extend the standard letters.
    ///
    /// Letters are case-insensitive and stored upper-case. Each must be an
    /// ASCII letter and appear once.
    pub fn new(letters: impl IntoIterator<Item = char>) -> Result<Self> {
        let mut normalized: Vec<char> = Vec::new();
        for letter in letters {
            if !letter.is_ascii_alphabetic() {
                return Err(IdError::InvalidReservedLetter(letter));
            }
            let upper = letter.to_ascii_uppercase();
            if normalized.contains(&upper) {
                return Err(IdError::InvalidReservedLetter(letter));
            }
            normalized.push(upper);
        }
        Ok(Self::from_normalized(normalized))
    }

    fn from_normalized(letters: Vec<char>) -> Self {
        let mut by_byte = [None; 256];
        let entries: Vec<Entry> = letters
            .into_iter()
            .enumerate()
            .map(|(index, letter)| {
                let byte = letter as u8;
                by_byte[byte as usize] = Some(index as u8);
                Entry {
                    letter,
                    id: Id::reserved(byte),
                    text: format!("{RESERVED_FILLER}{letter}"),
                }
            })
            .collect();
        Self { entries, by_byte }
    }

    fn entry(&self, id: &Id) -> Option<&Entry> {
        let bytes = id.as_bytes();
        // Groups of 8 so the common non-reserved case bails out early.
        let zero_prefix = bytes[..RESERVED_LETTER_POS]
            .chunks(8)
            .all(|group| group.iter().fold(0u8, |acc, b| acc | b) == 0);
        if !zero_prefix {
            return None;
        }
        self.by_byte[bytes[RESERVED_LETTER_POS] as usize].map(|i| &self.entries[i as usize])
    }

    fn entry_for_letter(&self, letter: char) -> Option<&Entry> {
        if !letter.is_ascii() {
            return None;
        }
        self.by_byte[letter.to_ascii_uppercase() as usize].map(|i| &self.entries[i as usize])
    }

    /// The letter of a reserved id, or `None`.
    pub fn classify(&self, id: &Id) -> Option<char> {
        self.entry(id).map(|e| e.letter)
    }

    /// Whether `id` is a reserved id of this table.
    pub fn is_reserved(&self, id: &Id) -> bool {
        self.entry(id).is_some()
    }

    /// Canonical 33-character text of a reserved id.
    pub fn format(&self, id: &Id) -> Option<&str> {
        self.entry(id).map(|e| e.text.as_str())
    }

    /// Single-letter display alias of a reserved id.
    pub fn alias(&self, id: &Id) -> Option<char> {
        self.classify(id)
    }

    /// Parse either a single letter (any case) or the canonical text.
    pub fn parse(&self, text: &str) -> Option<Id> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => return self.id_for_letter(letter),
            (None, _) => return None,
            _ => {}
        }

        if text.len() != RESERVED_TEXT_LEN || !text.starts_with(RESERVED_FILLER) {
            return None;
        }
        let letter = char::from(text.as_bytes()[RESERVED_FILLER.len()]);
        self.entry_for_letter(letter)
            .filter(|e| e.letter == letter)
            .map(|e| e.id)
    }

    /// Reserved id for `letter` (any case).
    pub fn id_for_letter(&self, letter: char) -> Option<Id> {
        self.entry_for_letter(letter).map(|e| e.id)
    }

    /// All reserved ids, in table order.
    pub fn all(&self) -> impl Iterator<Item = Id> + '_ {
        self.entries.iter().map(|e| e.id)
    }

    /// All letters, in table order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.iter().map(|e| e.letter)
    }

    /// Number of reserved ids.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no letters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
