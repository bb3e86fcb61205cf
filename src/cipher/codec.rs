//! Single character ↔ code unit conversion

use crate::core::{CodeUnit, SubstitutionTable};

/// Converts one letter or digit to a code unit and back, under a table and a shift
///
/// Letters shift modulo 26 within 1-26, digits modulo 10 within 27-36. Any
/// integer shift is accepted, negative ones included.
#[derive(Debug, Clone, Copy)]
pub struct NumericCodec<'a> {
    table: &'a SubstitutionTable,
    shift: i64,
}

impl<'a> NumericCodec<'a> {
    #[must_use]
    pub const fn new(table: &'a SubstitutionTable, shift: i64) -> Self {
        Self { table, shift }
    }

    #[inline]
    #[must_use]
    pub const fn shift(&self) -> i64 {
        self.shift
    }

    // Reduced first so the arithmetic below cannot overflow for extreme shifts.
    const fn letter_shift(&self) -> i64 {
        self.shift.rem_euclid(26)
    }

    const fn digit_shift(&self) -> i64 {
        self.shift.rem_euclid(10)
    }

    /// Encode an upper-case ASCII letter
    ///
    /// # Examples
    /// ```
    /// use courrier_code::cipher::NumericCodec;
    /// use courrier_code::core::SubstitutionTable;
    ///
    /// let table = SubstitutionTable::identity();
    /// let codec = NumericCodec::new(&table, 3);
    /// assert_eq!(codec.encode_letter('A').map(|u| u.value()), Some(4));
    /// assert_eq!(codec.encode_letter('Z').map(|u| u.value()), Some(3));
    /// ```
    #[must_use]
    pub fn encode_letter(&self, letter: char) -> Option<CodeUnit> {
        let rank = i64::from(self.table.encode(letter)?);
        CodeUnit::new(((rank - 1 + self.letter_shift()).rem_euclid(26) + 1) as u8)
    }

    /// Decode a letter code unit (1-26)
    #[must_use]
    pub fn decode_letter(&self, unit: CodeUnit) -> Option<char> {
        if !unit.is_letter() {
            return None;
        }
        let code = i64::from(unit.value());
        let adjusted = (code - 1 - self.letter_shift()).rem_euclid(26) + 1;
        self.table.decode(adjusted as u8)
    }

    /// Encode a digit 0-9
    #[must_use]
    pub fn encode_digit(&self, digit: u8) -> Option<CodeUnit> {
        if digit > 9 {
            return None;
        }
        let shifted = (i64::from(digit) + self.digit_shift()).rem_euclid(10);
        CodeUnit::new(CodeUnit::FIRST_DIGIT + shifted as u8)
    }

    /// Decode a digit code unit (27-36)
    #[must_use]
    pub fn decode_digit(&self, unit: CodeUnit) -> Option<u8> {
        if !unit.is_digit() {
            return None;
        }
        let code = i64::from(unit.value() - CodeUnit::FIRST_DIGIT);
        Some((code - self.digit_shift()).rem_euclid(10) as u8)
    }

    /// Encode any normalised character; everything but `A-Z` and `0-9` is dropped
    #[must_use]
    pub fn encode_char(&self, ch: char) -> Option<CodeUnit> {
        match ch {
            'A'..='Z' => self.encode_letter(ch),
            '0'..='9' => self.encode_digit(ch as u8 - b'0'),
            _ => None,
        }
    }

    /// Decode any code unit to its character
    #[must_use]
    pub fn decode_unit(&self, unit: CodeUnit) -> Option<char> {
        if unit.is_letter() {
            self.decode_letter(unit)
        } else {
            self.decode_digit(unit).map(|d| char::from(b'0' + d))
        }
    }
}
