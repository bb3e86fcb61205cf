//! Decode command
//!
//! Decodes with a known shift, or searches for the day and direction.

use crate::cipher::{Cipher, DayMarker};
use crate::decoder::{AutoDecodeConfig, AutoDecoded, AutoDecoder};
use crate::dictionary::Dictionary;

/// How the shift is found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeMode {
    /// Shift given explicitly; a day marker, if any, is removed first
    Shift(i64),
    /// Day and direction searched, words segmented
    Auto(AutoDecodeConfig),
    /// Day and direction searched, no segmentation
    Glued(AutoDecodeConfig),
}

/// Decode a cipher text
#[must_use]
pub fn decode_text(
    cipher_text: &str,
    secret: &str,
    table: Option<&str>,
    mode: DecodeMode,
    dictionary: &Dictionary,
) -> AutoDecoded {
    let cipher = Cipher::with_table_seed(table);

    match mode {
        DecodeMode::Shift(shift) => {
            let code: String = cipher_text.chars().filter(|c| !c.is_whitespace()).collect();
            let hit = DayMarker::extract(&code);
            let body = hit.map_or_else(|| code.clone(), |h| DayMarker::strip(&code, h.offset));
            let text = cipher.decode(&body, shift);
            AutoDecoded {
                score: crate::segment::recognized_word_score(dictionary, &text),
                text,
                weekday: hit.map(|h| h.weekday),
                reversed: false,
                marker_found: hit.is_some(),
            }
        }
        DecodeMode::Auto(config) => {
            AutoDecoder::new(cipher, dictionary, config).decode(cipher_text, secret)
        }
        DecodeMode::Glued(config) => {
            AutoDecoder::new(cipher, dictionary, config).decode_glued(cipher_text, secret)
        }
    }
}
