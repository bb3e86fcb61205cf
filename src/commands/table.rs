//! Reference table command
//!
//! Lists the code of every letter and digit for a table and a shift, the
//! printable sheet correspondents keep next to them.

use crate::cipher::NumericCodec;
use crate::core::{CodeUnit, SubstitutionTable};

/// Result of building a reference table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableResult {
    /// Table code, `None` for the alphabet table
    pub table_code: Option<String>,
    pub shift: i64,
    pub letters: Vec<(char, CodeUnit)>,
    pub digits: Vec<(char, CodeUnit)>,
}

/// Build the letter and digit listing
#[must_use]
pub fn reference_table(table: &SubstitutionTable, shift: i64) -> TableResult {
    let codec = NumericCodec::new(table, shift);

    TableResult {
        table_code: table.code(),
        shift,
        letters: listing(&codec, 'A'..='Z'),
        digits: listing(&codec, '0'..='9'),
    }
}

fn listing(codec: &NumericCodec<'_>, symbols: impl Iterator<Item = char>) -> Vec<(char, CodeUnit)> {
    symbols
        .filter_map(|ch| codec.encode_char(ch).map(|unit| (ch, unit)))
        .collect()
}
