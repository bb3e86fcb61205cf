//! Letter substitution tables
//!
//! A table is a bijection between the 26 Latin letters and the ranks 1-26. The
//! default table is the alphabet order (A=1 … Z=26); a keyed table is a
//! permutation derived from a 6-digit code with a xorshift generator.

use rand::Rng;
use std::fmt;

const ALPHABET_LEN: usize = 26;

/// 64-bit xorshift generator (13, 7, 17)
///
/// The table shuffle draws from it with the forward Fisher-Yates order used by
/// the mobile clients, so a code yields the same table on every device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advance the generator and return the new state
    pub const fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform value in `0..upper_bound` (Lemire's multiply-and-reject)
    ///
    /// # Panics
    /// Panics in debug mode if `upper_bound` is 0.
    pub fn next_below(&mut self, upper_bound: u64) -> u64 {
        debug_assert!(upper_bound > 0, "upper bound must be positive");
        let mut product = u128::from(self.next_u64()) * u128::from(upper_bound);
        if (product as u64) < upper_bound {
            let threshold = upper_bound.wrapping_neg() % upper_bound;
            while (product as u64) < threshold {
                product = u128::from(self.next_u64()) * u128::from(upper_bound);
            }
        }
        (product >> 64) as u64
    }
}

/// Bijection letter ↔ rank (1-26)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubstitutionTable {
    /// `ranks[i]` is the rank of letter `A + i`
    ranks: [u8; ALPHABET_LEN],
    /// `letters[r - 1]` is the letter holding rank `r`
    letters: [u8; ALPHABET_LEN],
    seed: Option<u32>,
}

impl SubstitutionTable {
    /// The default table: A=1, B=2, …, Z=26
    #[must_use]
    pub const fn identity() -> Self {
        let mut ranks = [0u8; ALPHABET_LEN];
        let mut letters = [0u8; ALPHABET_LEN];
        let mut i = 0;
        while i < ALPHABET_LEN {
            ranks[i] = i as u8 + 1;
            letters[i] = b'A' + i as u8;
            i += 1;
        }
        Self {
            ranks,
            letters,
            seed: None,
        }
    }

    /// Build the keyed table for a 6-digit code
    ///
    /// Anything other than exactly six ASCII digits yields the identity table.
    ///
    /// # Examples
    /// ```
    /// use courrier_code::core::SubstitutionTable;
    ///
    /// let keyed = SubstitutionTable::from_seed("123456");
    /// assert!(keyed.is_keyed());
    /// assert_eq!(keyed, SubstitutionTable::from_seed("123456"));
    ///
    /// assert_eq!(SubstitutionTable::from_seed("12345"), SubstitutionTable::identity());
    /// assert_eq!(SubstitutionTable::from_seed("12a456"), SubstitutionTable::identity());
    /// ```
    #[must_use]
    pub fn from_seed(seed: &str) -> Self {
        let Some(value) = parse_seed(seed) else {
            tracing::warn!(seed, "table code is not six ASCII digits, using the default table");
            return Self::identity();
        };

        // A zero state is a fixed point of xorshift: every draw is 0 and no swap
        // moves an element, so the keyed table is the alphabet order.
        if value == 0 {
            return Self {
                seed: Some(0),
                ..Self::identity()
            };
        }

        let mut rng = XorShift64::new(u64::from(value));
        let mut shuffled: [u8; ALPHABET_LEN] = Self::identity().ranks;

        let mut remaining = ALPHABET_LEN as u64;
        let mut current = 0;
        while remaining > 1 {
            let offset = rng.next_below(remaining) as usize;
            remaining -= 1;
            shuffled.swap(current, current + offset);
            current += 1;
        }

        let mut letters = [0u8; ALPHABET_LEN];
        for (i, &rank) in shuffled.iter().enumerate() {
            letters[usize::from(rank) - 1] = b'A' + i as u8;
        }

        Self {
            ranks: shuffled,
            letters,
            seed: Some(value),
        }
    }

    /// Keyed table when a code is given, identity otherwise
    #[must_use]
    pub fn resolve(seed: Option<&str>) -> Self {
        seed.map_or_else(Self::identity, Self::from_seed)
    }

    /// Draw a fresh random 6-digit table code
    pub fn generate_seed<R: Rng + ?Sized>(rng: &mut R) -> String {
        format!("{:06}", rng.random_range(0..=999_999u32))
    }

    /// Rank of an upper-case ASCII letter
    ///
    /// Returns `None` for anything outside `A..=Z`.
    #[inline]
    #[must_use]
    pub fn encode(&self, letter: char) -> Option<u8> {
        letter
            .is_ascii_uppercase()
            .then(|| self.ranks[(letter as u8 - b'A') as usize])
    }

    /// Letter holding a rank
    ///
    /// Returns `None` outside 1-26.
    #[inline]
    #[must_use]
    pub fn decode(&self, rank: u8) -> Option<char> {
        (1..=ALPHABET_LEN as u8)
            .contains(&rank)
            .then(|| char::from(self.letters[usize::from(rank) - 1]))
    }

    /// Ranks in alphabet order (`ranks()[0]` is the rank of A)
    #[inline]
    #[must_use]
    pub const fn ranks(&self) -> &[u8; ALPHABET_LEN] {
        &self.ranks
    }

    /// The 6-digit code this table was derived from, if keyed
    #[must_use]
    pub fn code(&self) -> Option<String> {
        self.seed.map(|seed| format!("{seed:06}"))
    }

    #[inline]
    #[must_use]
    pub const fn is_keyed(&self) -> bool {
        self.seed.is_some()
    }
}

impl Default for SubstitutionTable {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for SubstitutionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rank) in self.ranks.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}={rank:02}", char::from(b'A' + i as u8))?;
        }
        Ok(())
    }
}

fn parse_seed(seed: &str) -> Option<u32> {
    if seed.len() != 6 || !seed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    seed.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn is_bijection(table: &SubstitutionTable) -> bool {
        let mut seen = [false; ALPHABET_LEN];
        for &rank in table.ranks() {
            if !(1..=26).contains(&rank) || seen[usize::from(rank) - 1] {
                return false;
            }
            seen[usize::from(rank) - 1] = true;
        }
        seen.iter().all(|&s| s)
    }

    #[test]
    fn identity_is_alphabet_order() {
        let table = SubstitutionTable::identity();
        assert_eq!(table.encode('A'), Some(1));
        assert_eq!(table.encode('Z'), Some(26));
        assert_eq!(table.decode(2), Some('B'));
        assert!(!table.is_keyed());
        assert_eq!(table.code(), None);
    }

    #[test]
    fn xorshift_first_steps() {
        let mut rng = XorShift64::new(1);
        assert_eq!(rng.next_u64(), 1_082_269_761);
        let mut stuck = XorShift64::new(0);
        assert_eq!(stuck.next_u64(), 0);
    }

    #[test]
    fn golden_table_123456() {
        let table = SubstitutionTable::from_seed("123456");
        assert_eq!(
            table.ranks(),
            &[
                1, 13, 3, 20, 14, 21, 9, 7, 23, 19, 12, 2, 16, 8, 5, 4, 25, 15, 6, 24, 17, 10, 18,
                11, 26, 22
            ]
        );
        assert_eq!(table.code().as_deref(), Some("123456"));
    }

    #[test]
    fn golden_table_999999() {
        let table = SubstitutionTable::from_seed("999999");
        assert_eq!(
            table.ranks(),
            &[
                1, 5, 25, 3, 18, 4, 22, 7, 10, 23, 20, 13, 6, 2, 8, 19, 12, 16, 15, 9, 11, 21, 24,
                14, 17, 26
            ]
        );
    }

    #[test]
    fn zero_seed_is_alphabet_order() {
        let table = SubstitutionTable::from_seed("000000");
        assert_eq!(table.ranks(), SubstitutionTable::identity().ranks());
        assert_eq!(table.code().as_deref(), Some("000000"));
    }

    #[test]
    fn malformed_seeds_fall_back_to_identity() {
        for seed in ["", "12345", "1234567", "12 456", "+12345", "abcdef", "١٢٣٤٥٦"] {
            assert_eq!(
                SubstitutionTable::from_seed(seed),
                SubstitutionTable::identity(),
                "seed {seed:?}"
            );
        }
    }

    #[test]
    fn resolve_without_seed_is_identity() {
        assert_eq!(SubstitutionTable::resolve(None), SubstitutionTable::identity());
        assert!(SubstitutionTable::resolve(Some("654321")).is_keyed());
    }

    #[test]
    fn encode_rejects_non_letters() {
        let table = SubstitutionTable::from_seed("123456");
        assert_eq!(table.encode('a'), None);
        assert_eq!(table.encode('1'), None);
        assert_eq!(table.encode('É'), None);
        assert_eq!(table.decode(0), None);
        assert_eq!(table.decode(27), None);
    }

    #[test]
    fn generated_seed_is_six_digits() {
        let seed = SubstitutionTable::generate_seed(&mut rand::rng());
        assert_eq!(seed.len(), 6);
        assert!(seed.bytes().all(|b| b.is_ascii_digit()));
        assert!(SubstitutionTable::from_seed(&seed).is_keyed());
    }

    #[test]
    fn display_lists_every_letter() {
        let rendered = SubstitutionTable::identity().to_string();
        assert!(rendered.starts_with("A=01 B=02"));
        assert!(rendered.ends_with("Z=26"));
    }

    proptest! {
        #[test]
        fn keyed_tables_are_bijections(value in 0u32..=999_999) {
            let table = SubstitutionTable::from_seed(&format!("{value:06}"));
            prop_assert!(is_bijection(&table));
            for letter in 'A'..='Z' {
                let rank = table.encode(letter).unwrap();
                prop_assert_eq!(table.decode(rank), Some(letter));
            }
        }
    }
}
