//! Dictionary-driven word segmentation
//!
//! Inserts word boundaries into an unspaced stream of decoded letters with a
//! right-to-left dynamic program over every split point.

use super::strategy::{PolicyType, ScoringPolicy};
use crate::dictionary::Dictionary;

/// French determiners that call for a plural noun after them
const PLURAL_DETERMINERS: &[&str] = &[
    "les", "des", "ces", "mes", "tes", "ses", "nos", "vos", "leurs", "aux", "quelques",
    "plusieurs", "certains", "certaines", "tous", "toutes", "quels", "quelles", "differents",
    "differentes",
];

/// Best split found for a text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    /// Upper-cased tokens, left to right
    pub tokens: Vec<String>,
    /// Total policy score of the split
    pub score: i64,
}

impl Segmentation {
    /// Tokens joined by single spaces
    #[must_use]
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }
}

/// Best way to cover `chars[i..]`: total score and end of the first token
#[derive(Debug, Clone, Copy)]
struct Cell {
    score: i64,
    end: usize,
}

/// Splits letter streams into the highest-scoring word sequence
pub struct WordSegmenter<'a, P: ScoringPolicy = PolicyType> {
    dictionary: &'a Dictionary,
    policy: P,
}

impl<'a, P: ScoringPolicy> WordSegmenter<'a, P> {
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary, policy: P) -> Self {
        Self { dictionary, policy }
    }

    /// Segment `text` and join the tokens with spaces
    ///
    /// # Examples
    /// ```
    /// use courrier_code::dictionary::Dictionary;
    /// use courrier_code::segment::{PolicyType, WordSegmenter};
    ///
    /// let segmenter = WordSegmenter::new(Dictionary::french(), PolicyType::default());
    /// assert_eq!(
    ///     segmenter.segment("RENDEZVOUSDEMAINALAPLAGE"),
    ///     "RENDEZVOUS DEMAIN A LA PLAGE"
    /// );
    /// assert_eq!(segmenter.segment(""), "");
    /// ```
    #[must_use]
    pub fn segment(&self, text: &str) -> String {
        self.split(text).text()
    }

    /// Run the dynamic program and return the winning split with its score
    ///
    /// At every position the longest candidate is tried first and only a
    /// strictly better score replaces it, so ties favour longer words.
    #[must_use]
    pub fn split(&self, text: &str) -> Segmentation {
        let chars: Vec<char> = text.to_lowercase().chars().collect();
        let n = chars.len();
        let max_len = self.policy.max_word_len().max(1);

        // best[n] is the empty suffix
        let mut best: Vec<Cell> = vec![Cell { score: 0, end: n }; n + 1];

        for start in (0..n).rev() {
            let mut chosen: Option<Cell> = None;

            for end in (start + 1..=n.min(start + max_len)).rev() {
                let word: String = chars[start..end].iter().collect();
                let recognized = self.dictionary.contains(&word);

                let mut score = best[end].score + self.policy.word_score(end - start, recognized);
                if recognized && self.agrees_with_next(&word, &chars, &best, end) {
                    score += self.policy.agreement_bonus();
                }

                if chosen.is_none_or(|cell| score > cell.score) {
                    chosen = Some(Cell { score, end });
                }
            }

            if let Some(cell) = chosen {
                best[start] = cell;
            }
        }

        let mut tokens = Vec::new();
        let mut start = 0;
        while start < n {
            let end = best[start].end;
            tokens.push(chars[start..end].iter().collect::<String>().to_uppercase());
            start = end;
        }

        tracing::trace!(len = n, tokens = tokens.len(), "segmented");

        Segmentation {
            tokens,
            score: best[0].score,
        }
    }

    /// Determiner followed by a recognised word ending in `s` or `x`
    fn agrees_with_next(&self, word: &str, chars: &[char], best: &[Cell], next: usize) -> bool {
        if self.policy.agreement_bonus() == 0
            || next >= chars.len()
            || !PLURAL_DETERMINERS.contains(&word)
        {
            return false;
        }

        let next_word: String = chars[next..best[next].end].iter().collect();
        (next_word.ends_with('s') || next_word.ends_with('x'))
            && self.dictionary.contains(&next_word)
    }
}
