//! Encode command
//!
//! Turns a plain message into a numeric cipher text.

use crate::cipher::{Cipher, shuffle_words};
use crate::core::{ShiftResolver, SubstitutionTable, Weekday};

/// Options for encoding one message
#[derive(Debug, Clone, Default)]
pub struct EncodeConfig {
    pub text: String,
    /// Day whose shift and marker are applied
    pub weekday: Option<Weekday>,
    pub secret: String,
    pub table: Option<String>,
    /// Scramble the word order before encoding
    pub shuffle: bool,
}

/// Result of encoding a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeResult {
    /// The text that was actually encoded (after shuffling)
    pub plain_text: String,
    pub cipher_text: String,
    pub weekday: Option<Weekday>,
    pub shift: i64,
    /// Table code in use, if keyed
    pub table_code: Option<String>,
}

/// Encode a message
#[must_use]
pub fn encode_text(config: &EncodeConfig) -> EncodeResult {
    let table = SubstitutionTable::resolve(config.table.as_deref());
    let cipher = Cipher::new(table);

    let plain_text = if config.shuffle {
        shuffle_words(&config.text, &mut rand::rng())
    } else {
        config.text.clone()
    };

    let cipher_text = cipher.encode_message(&plain_text, config.weekday, &config.secret);

    EncodeResult {
        plain_text,
        cipher_text,
        weekday: config.weekday,
        shift: ShiftResolver::combined_shift(config.weekday, &config.secret),
        table_code: table.code(),
    }
}
