//! Key matching command
//!
//! Finds which correspondent from a key book wrote a message.

use crate::decoder::{KeyCandidate, KeyMatch, KeyMatcher};
use crate::dictionary::Dictionary;
use crate::segment::PolicyType;
use std::time::{Duration, Instant};

/// Result of matching a message against a key book
#[derive(Debug, Clone)]
pub struct MatchReport {
    pub candidates_tried: usize,
    pub best: Option<KeyMatch>,
    pub glued: bool,
    pub duration: Duration,
}

/// Try every key of the book on `cipher_text`
#[must_use]
pub fn match_keys(
    cipher_text: &str,
    book: &[KeyCandidate],
    glued: bool,
    dictionary: &Dictionary,
    policy: PolicyType,
) -> MatchReport {
    let start = Instant::now();
    let matcher = KeyMatcher::new(dictionary, policy);

    let best = if glued {
        matcher.match_glued(cipher_text, book)
    } else {
        matcher.match_day_mode(cipher_text, book)
    };

    MatchReport {
        candidates_tried: book.len(),
        best,
        glued,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_names_the_winner() {
        let book = vec![
            KeyCandidate::new("Bob", "chien", None),
            KeyCandidate::new("Alice", "chat", Some("123456")),
        ];
        let report = match_keys(
            "211316011325000523241316092405",
            &book,
            false,
            Dictionary::french(),
            PolicyType::default(),
        );
        assert_eq!(report.candidates_tried, 2);
        let best = report.best.unwrap();
        assert_eq!(best.candidate.label, "Alice");
        assert_eq!(best.text(), "BONJOUR MON AMI");
    }

    #[test]
    fn empty_book_matches_nothing() {
        let report = match_keys("0102", &[], true, Dictionary::french(), PolicyType::default());
        assert!(report.best.is_none());
        assert_eq!(report.candidates_tried, 0);
    }
}
