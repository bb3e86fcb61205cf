//! Matching a cipher text against a book of known keys
//!
//! Each correspondent has a secret and an optional table code. The matcher
//! runs the automatic decoder once per key and reports the key whose decoding
//! reads most like French.

use super::auto::{AutoDecodeConfig, AutoDecoded, AutoDecoder, DayMode};
use crate::cipher::Cipher;
use crate::dictionary::Dictionary;
use crate::segment::{PolicyType, recognized_word_count};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Minimum number of recognised words for a day-mode match to count
const MIN_RECOGNIZED_WORDS: usize = 2;

/// Errors that can occur while loading a key book
#[derive(Error, Debug)]
pub enum KeyBookError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Keying material shared with one correspondent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyCandidate {
    pub label: String,
    #[serde(default)]
    pub secret: String,
    /// 6-digit table code, `None` for the alphabet table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
}

impl KeyCandidate {
    #[must_use]
    pub fn new(label: impl Into<String>, secret: impl Into<String>, table: Option<&str>) -> Self {
        Self {
            label: label.into(),
            secret: secret.into(),
            table: table.map(str::to_string),
        }
    }

    fn cipher(&self) -> Cipher {
        Cipher::with_table_seed(self.table.as_deref())
    }
}

/// The key that decoded best, with its decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMatch {
    pub candidate: KeyCandidate,
    pub decoded: AutoDecoded,
}

impl KeyMatch {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.decoded.text
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.decoded.score
    }
}

/// Parse a key book: a JSON array of `{"label", "secret", "table"}` objects
///
/// # Errors
/// Returns an error if the JSON is malformed.
pub fn parse_key_book(json: &str) -> Result<Vec<KeyCandidate>, KeyBookError> {
    Ok(serde_json::from_str(json)?)
}

/// Load a key book from a JSON file
///
/// # Errors
/// Returns an error if the file cannot be read or is not a valid key book.
pub fn load_key_book<P: AsRef<Path>>(path: P) -> Result<Vec<KeyCandidate>, KeyBookError> {
    let content = fs::read_to_string(path)?;
    parse_key_book(&content)
}

/// Finds which known key a cipher text was written with
pub struct KeyMatcher<'a> {
    dictionary: &'a Dictionary,
    policy: PolicyType,
}

impl<'a> KeyMatcher<'a> {
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary, policy: PolicyType) -> Self {
        Self { dictionary, policy }
    }

    /// Match a message encoded with day shifts
    ///
    /// The winner needs a positive score made of at least two recognised
    /// words; otherwise no key matches. Ties keep the earlier candidate.
    #[must_use]
    pub fn match_day_mode(&self, cipher_text: &str, candidates: &[KeyCandidate]) -> Option<KeyMatch> {
        let best = self.best_match(cipher_text, candidates)?;
        let words = recognized_word_count(self.dictionary, best.text());

        if best.score() > 0 && words >= MIN_RECOGNIZED_WORDS {
            Some(best)
        } else {
            tracing::debug!(
                label = %best.candidate.label,
                score = best.score(),
                words,
                "best key below the recognition floor"
            );
            None
        }
    }

    /// Match a message sent without word separators
    ///
    /// No floor: the best candidate is returned whenever the list is not empty.
    #[must_use]
    pub fn match_glued(&self, cipher_text: &str, candidates: &[KeyCandidate]) -> Option<KeyMatch> {
        self.best_match(cipher_text, candidates)
    }

    fn best_match(&self, cipher_text: &str, candidates: &[KeyCandidate]) -> Option<KeyMatch> {
        let config = AutoDecodeConfig {
            day_mode: DayMode::Marker,
            policy: self.policy,
        };

        let results: Vec<KeyMatch> = candidates
            .par_iter()
            .map(|candidate| {
                let decoded = AutoDecoder::new(candidate.cipher(), self.dictionary, config)
                    .decode(cipher_text, &candidate.secret);
                tracing::debug!(label = %candidate.label, score = decoded.score, "key tried");
                KeyMatch {
                    candidate: candidate.clone(),
                    decoded,
                }
            })
            .collect();

        results.into_iter().fold(None, |best, candidate| match best {
            Some(current) if candidate.score() <= current.score() => Some(current),
            _ => Some(candidate),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // "BONJOUR MON AMI", Friday, secret "chat", table 123456
    const MESSAGE: &str = "211316011325000523241316092405";

    fn matcher() -> KeyMatcher<'static> {
        KeyMatcher::new(Dictionary::french(), PolicyType::default())
    }

    fn wrong_keys() -> Vec<KeyCandidate> {
        vec![
            KeyCandidate::new("nobody", "", None),
            KeyCandidate::new("chien", "chien", None),
            KeyCandidate::new("chat sans table", "chat", None),
            KeyCandidate::new("table seule", "", Some("123456")),
            KeyCandidate::new("autre table", "chat", Some("654321")),
        ]
    }

    #[test]
    fn empty_candidate_list_is_none() {
        assert_eq!(matcher().match_day_mode(MESSAGE, &[]), None);
        assert_eq!(matcher().match_glued(MESSAGE, &[]), None);
    }

    #[test]
    fn finds_the_right_key() {
        let mut keys = wrong_keys();
        keys.push(KeyCandidate::new("Alice", "chat", Some("123456")));
        keys.push(KeyCandidate::new("Alice bis", "chat", Some("123456")));

        let found = matcher().match_day_mode(MESSAGE, &keys).unwrap();
        assert_eq!(found.candidate.label, "Alice");
        assert_eq!(found.text(), "BONJOUR MON AMI");
        assert_eq!(found.score(), 67);
    }

    #[test]
    fn day_mode_rejects_single_word_matches() {
        // the best wrong key recognises only one short word
        assert_eq!(matcher().match_day_mode(MESSAGE, &wrong_keys()), None);
    }

    #[test]
    fn glued_mode_has_no_floor() {
        let found = matcher().match_glued(MESSAGE, &wrong_keys()).unwrap();
        assert_eq!(found.candidate.label, "chat sans table");
        assert_eq!(found.score(), 4);
    }

    #[test]
    fn key_book_json() {
        let json = r#"[
            {"label": "Alice", "secret": "chat", "table": "123456"},
            {"label": "Bob"}
        ]"#;
        let book = parse_key_book(json).unwrap();
        assert_eq!(book.len(), 2);
        assert_eq!(book[0], KeyCandidate::new("Alice", "chat", Some("123456")));
        assert_eq!(book[1].secret, "");
        assert_eq!(book[1].table, None);
    }

    #[test]
    fn key_book_rejects_bad_json() {
        assert!(matches!(
            parse_key_book("{not json"),
            Err(KeyBookError::JsonError(_))
        ));
    }

    #[test]
    fn key_book_missing_file() {
        assert!(matches!(
            load_key_book("/nonexistent/keys.json"),
            Err(KeyBookError::IoError(_))
        ));
    }
}
