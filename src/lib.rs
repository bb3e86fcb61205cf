//! Courrier Code
//!
//! A keyed numeric substitution cipher for French correspondence. Letters and
//! digits become two-digit code units, shifted by the day of the week and a
//! shared secret; the receiver's side can recover the day, the direction and the
//! word boundaries automatically with a French dictionary.
//!
//! # Quick Start
//!
//! ```rust
//! use courrier_code::{decode, decode_automatic, encode_on};
//! use courrier_code::core::Weekday;
//!
//! let sent = encode_on("Rendez-vous demain à la plage", Some(Weekday::Tuesday), "", None);
//! let received = decode_automatic(&sent, true, "", None);
//! assert_eq!(received.text, "RENDEZVOUS DEMAIN A LA PLAGE");
//! assert_eq!(received.indication(), "🔓 Mardi");
//!
//! assert_eq!(decode("02151410152118", 0, None), "BONJOUR");
//! ```

// Core domain types
pub mod core;

// French word list
pub mod dictionary;

// Cipher primitives
pub mod cipher;

// Word segmentation and scoring
pub mod segment;

// Automatic decoding and key matching
pub mod decoder;

// Picture codec
pub mod picture;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Tracing setup
pub mod logging;

use crate::cipher::Cipher;
use crate::core::Weekday;
use crate::decoder::{
    AutoDecodeConfig, AutoDecoded, AutoDecoder, DayMode, KeyCandidate, KeyMatch, KeyMatcher,
};
use crate::dictionary::Dictionary;
use crate::segment::PolicyType;

/// Encode a message, with today's day shift and marker when `use_day_shift`
#[must_use]
pub fn encode(text: &str, use_day_shift: bool, secret: &str, table_seed: Option<&str>) -> String {
    encode_on(text, use_day_shift.then(Weekday::today), secret, table_seed)
}

/// Encode a message for a given day (or none)
#[must_use]
pub fn encode_on(
    text: &str,
    weekday: Option<Weekday>,
    secret: &str,
    table_seed: Option<&str>,
) -> String {
    Cipher::with_table_seed(table_seed).encode_message(text, weekday, secret)
}

/// Decode with an explicit shift
#[must_use]
pub fn decode(cipher_text: &str, shift: i64, table_seed: Option<&str>) -> String {
    Cipher::with_table_seed(table_seed).decode(cipher_text, shift)
}

/// Decode without knowing the day or direction
///
/// With `use_day_mode` the day comes from the marker or a brute-force search;
/// without it only the secret shift is applied.
#[must_use]
pub fn decode_automatic(
    cipher_text: &str,
    use_day_mode: bool,
    secret: &str,
    table_seed: Option<&str>,
) -> AutoDecoded {
    let config = AutoDecodeConfig {
        day_mode: if use_day_mode {
            DayMode::Marker
        } else {
            DayMode::Off
        },
        policy: PolicyType::default(),
    };
    AutoDecoder::new(Cipher::with_table_seed(table_seed), Dictionary::french(), config)
        .decode(cipher_text, secret)
}

/// Find which known key a message was written with
///
/// Returns `None` for an empty list or when no key yields at least two
/// recognised words.
#[must_use]
pub fn match_against_known_keys(cipher_text: &str, candidates: &[KeyCandidate]) -> Option<KeyMatch> {
    KeyMatcher::new(Dictionary::french(), PolicyType::default())
        .match_day_mode(cipher_text, candidates)
}
