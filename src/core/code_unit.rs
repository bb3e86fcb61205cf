//! Two-digit numeric code unit
//!
//! A code unit is the cipher's alphabet: values 1-26 stand for letters (after the
//! substitution table), values 27-36 stand for the digits 0-9. On the wire it is
//! always rendered as exactly two ASCII digits, `01` through `36`.

use std::fmt;

/// A single code unit in the range 1-36
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CodeUnit(u8);

impl CodeUnit {
    /// Lowest letter code (`01`)
    pub const FIRST_LETTER: u8 = 1;
    /// Highest letter code (`26`)
    pub const LAST_LETTER: u8 = 26;
    /// Code of the digit 0 (`27`)
    pub const FIRST_DIGIT: u8 = 27;
    /// Code of the digit 9 (`36`)
    pub const LAST_DIGIT: u8 = 36;

    /// Create a code unit from a raw value
    ///
    /// Returns `None` outside 1-36.
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::FIRST_LETTER && value <= Self::LAST_DIGIT {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Parse a two-character window
    ///
    /// Both characters must be ASCII digits and the value must be in range;
    /// anything else is `None`.
    ///
    /// # Examples
    /// ```
    /// use courrier_code::core::CodeUnit;
    ///
    /// assert_eq!(CodeUnit::parse('0', '2').map(CodeUnit::value), Some(2));
    /// assert_eq!(CodeUnit::parse('3', '6').map(CodeUnit::value), Some(36));
    /// assert!(CodeUnit::parse('3', '7').is_none());
    /// assert!(CodeUnit::parse('0', '0').is_none());
    /// assert!(CodeUnit::parse('+', '5').is_none());
    /// ```
    #[must_use]
    pub fn parse(tens: char, units: char) -> Option<Self> {
        let tens = tens.to_digit(10)?;
        let units = units.to_digit(10)?;
        Self::new((tens * 10 + units) as u8)
    }

    /// Get the raw value (1-36)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Whether this unit encodes a letter
    #[inline]
    #[must_use]
    pub const fn is_letter(self) -> bool {
        self.0 <= Self::LAST_LETTER
    }

    /// Whether this unit encodes a digit
    #[inline]
    #[must_use]
    pub const fn is_digit(self) -> bool {
        self.0 >= Self::FIRST_DIGIT
    }

    /// Append the two-digit rendering to `out`
    #[inline]
    pub fn push_to(self, out: &mut String) {
        out.push(char::from(b'0' + self.0 / 10));
        out.push(char::from(b'0' + self.0 % 10));
    }
}

impl fmt::Display for CodeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_full_range() {
        for value in 1..=36 {
            assert_eq!(CodeUnit::new(value).map(CodeUnit::value), Some(value));
        }
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert!(CodeUnit::new(0).is_none());
        assert!(CodeUnit::new(37).is_none());
        assert!(CodeUnit::new(99).is_none());
    }

    #[test]
    fn letter_digit_split() {
        let a = CodeUnit::new(1).unwrap();
        let z = CodeUnit::new(26).unwrap();
        let zero = CodeUnit::new(27).unwrap();
        assert!(a.is_letter() && !a.is_digit());
        assert!(z.is_letter() && !z.is_digit());
        assert!(zero.is_digit() && !zero.is_letter());
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(CodeUnit::new(2).unwrap().to_string(), "02");
        assert_eq!(CodeUnit::new(36).unwrap().to_string(), "36");
    }

    #[test]
    fn push_to_matches_display() {
        let mut out = String::new();
        for value in 1..=36 {
            let unit = CodeUnit::new(value).unwrap();
            out.clear();
            unit.push_to(&mut out);
            assert_eq!(out, unit.to_string());
        }
    }

    #[test]
    fn parse_rejects_non_ascii_digits() {
        // Arabic-Indic digit two
        assert!(CodeUnit::parse('0', '\u{0662}').is_none());
        assert!(CodeUnit::parse('a', '1').is_none());
    }
}
