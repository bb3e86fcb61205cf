//! Whole-message encoding and decoding

use super::codec::NumericCodec;
use super::marker::DayMarker;
use crate::core::{CodeUnit, ShiftResolver, SubstitutionTable, Weekday, normalize};
use rand::Rng;
use rand::seq::SliceRandom;

/// Message cipher bound to one substitution table
///
/// The table is an immutable value owned by the cipher, so ciphers with
/// different tables can run side by side on any thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cipher {
    table: SubstitutionTable,
}

impl Cipher {
    #[must_use]
    pub const fn new(table: SubstitutionTable) -> Self {
        Self { table }
    }

    /// Cipher for an optional 6-digit table code (identity when absent or malformed)
    #[must_use]
    pub fn with_table_seed(seed: Option<&str>) -> Self {
        Self::new(SubstitutionTable::resolve(seed))
    }

    #[must_use]
    pub const fn table(&self) -> &SubstitutionTable {
        &self.table
    }

    /// Encode `text` with an explicit shift, no day marker
    ///
    /// The text is accent-folded and upper-cased; characters other than letters
    /// and digits produce nothing.
    ///
    /// # Examples
    /// ```
    /// use courrier_code::cipher::Cipher;
    ///
    /// let cipher = Cipher::default();
    /// assert_eq!(cipher.encode("Bonjour !", 0), "02151410152118");
    /// ```
    #[must_use]
    pub fn encode(&self, text: &str, shift: i64) -> String {
        let codec = NumericCodec::new(&self.table, shift);
        let mut output = String::with_capacity(text.len() * 2);
        for unit in normalize(text).chars().filter_map(|ch| codec.encode_char(ch)) {
            unit.push_to(&mut output);
        }
        output
    }

    /// Encode a message the way a sender does
    ///
    /// With a `weekday`, that day's shift is added to the secret shift and the
    /// day marker is embedded in the result.
    #[must_use]
    pub fn encode_message(&self, text: &str, weekday: Option<Weekday>, secret: &str) -> String {
        let shift = ShiftResolver::combined_shift(weekday, secret);
        let encoded = self.encode(text, shift);
        match weekday {
            Some(day) => DayMarker::embed(&encoded, day),
            None => encoded,
        }
    }

    /// Decode a cipher text with a known shift
    ///
    /// Whitespace is ignored. The text is read in two-character windows; windows
    /// that are not a code unit, and a trailing odd character, are dropped. Day
    /// markers must be stripped beforehand.
    ///
    /// # Examples
    /// ```
    /// use courrier_code::cipher::Cipher;
    ///
    /// let cipher = Cipher::default();
    /// assert_eq!(cipher.decode("02 15 14 10 15 21 18", 0), "BONJOUR");
    /// assert_eq!(cipher.decode("02xx9915", 0), "BO");
    /// ```
    #[must_use]
    pub fn decode(&self, cipher_text: &str, shift: i64) -> String {
        let codec = NumericCodec::new(&self.table, shift);
        let chars: Vec<char> = cipher_text.chars().filter(|c| !c.is_whitespace()).collect();

        chars
            .chunks_exact(2)
            .filter_map(|pair| CodeUnit::parse(pair[0], pair[1]))
            .filter_map(|unit| codec.decode_unit(unit))
            .collect()
    }

    /// Full character reversal, as a sender may apply to the whole cipher text
    #[must_use]
    pub fn reverse(text: &str) -> String {
        text.chars().rev().collect()
    }
}

/// Randomly reorder the whitespace-separated words of `text`
///
/// Used before encoding to scramble word order; single words come back as is.
pub fn shuffle_words<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    let mut words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= 1 {
        return text.to_string();
    }
    words.shuffle(rng);
    words.join(" ")
}
