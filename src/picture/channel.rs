//! Per-channel digit codec
//!
//! A channel value 0-255 is written as its three decimal digits, each shifted
//! modulo 10 and offset into the digit code units 27-36. Every channel thus
//! takes six characters.

use crate::core::CodeUnit;

/// Encode one channel value
///
/// # Examples
/// ```
/// use courrier_code::picture::encode_channel;
///
/// assert_eq!(encode_channel(165, 0), "283332");
/// assert_eq!(encode_channel(165, 11), "293433");
/// assert_eq!(encode_channel(0, 0), "272727");
/// ```
#[must_use]
pub fn encode_channel(value: u8, shift: i64) -> String {
    let shift = shift.rem_euclid(10);
    let digits = [value / 100, (value / 10) % 10, value % 10];
    let mut encoded = String::with_capacity(6);
    for digit in digits {
        let unit = i64::from(CodeUnit::FIRST_DIGIT) + (i64::from(digit) + shift).rem_euclid(10);
        encoded.push_str(&unit.to_string());
    }
    encoded
}

/// Decode one channel value
///
/// Pairs are read right to left, units first. Pairs outside 27-36 are skipped
/// without consuming a decimal place. The result is clamped to 255. Returns
/// `None` for codes shorter than three characters.
///
/// # Examples
/// ```
/// use courrier_code::picture::decode_channel;
///
/// assert_eq!(decode_channel("293433", 11), Some(165));
/// assert_eq!(decode_channel("363636", 0), Some(255));
/// assert_eq!(decode_channel("29", 0), None);
/// ```
#[must_use]
pub fn decode_channel(code: &str, shift: i64) -> Option<u8> {
    let chars: Vec<char> = code.chars().collect();
    if chars.len() < 3 {
        return None;
    }

    let shift = shift.rem_euclid(10);
    let mut value: u32 = 0;
    let mut multiplier: u32 = 1;
    let mut end = chars.len();

    while end >= 2 {
        let pair = CodeUnit::parse(chars[end - 2], chars[end - 1]).filter(|unit| unit.is_digit());
        if let Some(unit) = pair {
            let digit = (i64::from(unit.value() - CodeUnit::FIRST_DIGIT) - shift).rem_euclid(10);
            value = value.saturating_add((digit as u32).saturating_mul(multiplier));
            multiplier = multiplier.saturating_mul(10);
        }
        end -= 2;
    }

    Some(value.min(u32::from(u8::MAX)) as u8)
}
