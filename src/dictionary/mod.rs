//! French word dictionary
//!
//! Word membership oracle used to segment and rank decoded text. Plural forms
//! are inferred from their singular instead of being listed.

mod embedded;
pub mod loader;

pub use embedded::{FRENCH_WORDS, FRENCH_WORDS_COUNT};

use rustc_hash::FxHashSet;
use std::sync::LazyLock;

static FRENCH: LazyLock<Dictionary> = LazyLock::new(Dictionary::embedded);

/// Set of lower-case words with plural inference
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from arbitrary words (lower-cased on insert)
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// A fresh copy of the embedded French word list
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(FRENCH_WORDS)
    }

    /// Shared embedded French dictionary
    #[must_use]
    pub fn french() -> &'static Self {
        &FRENCH
    }

    /// Add more words, e.g. loaded with [`loader::load_from_file`]
    #[must_use]
    pub fn with_extra_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// Number of stored words (inferred plurals not counted)
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether `word` is a known word or a recognised plural of one
    ///
    /// Case-insensitive. Words ending in `ss` or `xx` are always rejected.
    ///
    /// # Examples
    /// ```
    /// use courrier_code::dictionary::Dictionary;
    ///
    /// let dict = Dictionary::from_words(["cheval", "voiture"]);
    /// assert!(dict.contains("Voiture"));
    /// assert!(dict.contains("voitures"));
    /// assert!(dict.contains("chevaux"));
    /// assert!(!dict.contains("voituress"));
    /// ```
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let word = word.to_lowercase();

        if word.ends_with("ss") || word.ends_with("xx") {
            return false;
        }

        self.words.contains(&word) || self.is_inferred_plural(&word)
    }

    /// Plural rules, tried in order; each needs the singular to be stored
    fn is_inferred_plural(&self, word: &str) -> bool {
        let len = word.chars().count();
        if len < 3 {
            return false;
        }

        // -aux → -al (chevaux → cheval)
        if len >= 4 && word.ends_with("aux") {
            let singular = format!("{}al", &word[..word.len() - 3]);
            if !singular.ends_with('s') && !singular.ends_with('x') && self.has(&singular) {
                return true;
            }
        }

        // -eaux → -eau, -eux → -eu, -oux → -ou: drop the x
        if let Some(drop_x) = word.strip_suffix('x') {
            if len >= 5 && word.ends_with("eaux") && self.has(drop_x) {
                return true;
            }
            if len >= 4 && (word.ends_with("eux") || word.ends_with("oux")) && self.has(drop_x) {
                return true;
            }
        }

        // -s / -x → drop it, unless the singular already ends the same way
        if let Some(singular) = word.strip_suffix('s') {
            if !singular.ends_with('s') && self.has(singular) {
                return true;
            }
        }
        if let Some(singular) = word.strip_suffix('x') {
            if !singular.ends_with('x') && self.has(singular) {
                return true;
            }
        }

        false
    }

    fn has(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}
