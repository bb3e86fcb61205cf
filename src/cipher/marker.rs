//! In-band day marker
//!
//! The marker is the literal `00` followed by the two-digit weekday index
//! (`0000` … `0006`). Code units never render as `00`, so a pair-aligned `00`
//! can only be a marker.

use crate::core::Weekday;

/// A marker located in a cipher text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerHit {
    pub weekday: Weekday,
    /// Character offset of the marker's first `0`
    pub offset: usize,
}

/// Embeds, locates and removes day markers
pub struct DayMarker;

impl DayMarker {
    /// Marker length in characters
    pub const LEN: usize = 4;

    /// The marker text for a day
    #[must_use]
    pub fn text(weekday: Weekday) -> String {
        format!("00{:02}", weekday.index())
    }

    /// Insert the marker at the even offset closest below the midpoint
    ///
    /// Texts shorter than four characters are returned unchanged.
    ///
    /// # Examples
    /// ```
    /// use courrier_code::cipher::DayMarker;
    /// use courrier_code::core::Weekday;
    ///
    /// let tagged = DayMarker::embed("0215141015182118", Weekday::Tuesday);
    /// assert_eq!(tagged, "02151410000215182118");
    /// ```
    #[must_use]
    pub fn embed(cipher: &str, weekday: Weekday) -> String {
        let len = cipher.chars().count();
        if len < Self::LEN {
            return cipher.to_string();
        }

        let middle = len / 2;
        let insert_at = byte_offset(cipher, middle - middle % 2);

        let mut tagged = String::with_capacity(cipher.len() + Self::LEN);
        tagged.push_str(&cipher[..insert_at]);
        tagged.push_str(&Self::text(weekday));
        tagged.push_str(&cipher[insert_at..]);
        tagged
    }

    /// Find the first pair-aligned `000d` window with `d` in 0-6
    #[must_use]
    pub fn extract(cipher: &str) -> Option<MarkerHit> {
        let chars: Vec<char> = cipher.chars().collect();

        chars
            .windows(Self::LEN)
            .enumerate()
            .step_by(2)
            .find_map(|(offset, window)| match window {
                ['0', '0', '0', day] => day
                    .to_digit(10)
                    .and_then(|d| Weekday::from_index(d as u8))
                    .map(|weekday| MarkerHit { weekday, offset }),
                _ => None,
            })
    }

    /// Remove the four characters starting at `offset`
    ///
    /// Offsets past the end remove nothing.
    #[must_use]
    pub fn strip(cipher: &str, offset: usize) -> String {
        let start = byte_offset(cipher, offset);
        let end = byte_offset(cipher, offset + Self::LEN);
        let mut stripped = String::with_capacity(cipher.len());
        stripped.push_str(&cipher[..start]);
        stripped.push_str(&cipher[end..]);
        stripped
    }
}

/// Byte index of the `char_offset`-th character, clamped to the end
fn byte_offset(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map_or(text.len(), |(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn marker_text() {
        assert_eq!(DayMarker::text(Weekday::Sunday), "0000");
        assert_eq!(DayMarker::text(Weekday::Saturday), "0006");
    }

    #[test]
    fn embed_uses_even_midpoint() {
        // len 16, middle 8 (already even)
        assert_eq!(
            DayMarker::embed("0215141015182118", Weekday::Tuesday),
            "02151410000215182118"
        );
        // len 6, middle 3 → offset 2
        assert_eq!(DayMarker::embed("010203", Weekday::Monday), "0100010203");
        // len 4, middle 2
        assert_eq!(DayMarker::embed("0102", Weekday::Friday), "01000502");
    }

    #[test]
    fn embed_skips_short_text() {
        assert_eq!(DayMarker::embed("", Weekday::Monday), "");
        assert_eq!(DayMarker::embed("012", Weekday::Monday), "012");
    }

    #[test]
    fn extract_finds_marker() {
        let hit = DayMarker::extract("02151410000215182118").unwrap();
        assert_eq!(hit.weekday, Weekday::Tuesday);
        assert_eq!(hit.offset, 8);
    }

    #[test]
    fn extract_is_pair_aligned() {
        // "0003" starts at odd offset 1 only
        assert_eq!(DayMarker::extract("1000320"), None);
        assert!(DayMarker::extract("10000320").is_some());
    }

    #[test]
    fn extract_rejects_day_seven_and_above() {
        assert_eq!(DayMarker::extract("01000702"), None);
        assert_eq!(DayMarker::extract("01000902"), None);
    }

    #[test]
    fn extract_returns_first_match() {
        let hit = DayMarker::extract("0001000502").unwrap();
        assert_eq!(hit.offset, 0);
        assert_eq!(hit.weekday, Weekday::Monday);
    }

    #[test]
    fn extract_short_text_is_none() {
        assert_eq!(DayMarker::extract(""), None);
        assert_eq!(DayMarker::extract("000"), None);
    }

    #[test]
    fn strip_removes_four_chars() {
        assert_eq!(DayMarker::strip("02151410000215182118", 8), "0215141015182118");
        assert_eq!(DayMarker::strip("0102", 10), "0102");
        assert_eq!(DayMarker::strip("010200", 4), "0102");
    }

    proptest! {
        #[test]
        fn embed_extract_strip_round_trip(
            units in prop::collection::vec(1u8..=36, 2..40),
            day in 0u8..7,
        ) {
            let cipher: String = units.iter().map(|u| format!("{u:02}")).collect();
            let weekday = Weekday::from_index(day).unwrap();
            let tagged = DayMarker::embed(&cipher, weekday);
            let hit = DayMarker::extract(&tagged).unwrap();
            prop_assert_eq!(hit.weekday, weekday);
            prop_assert_eq!(DayMarker::strip(&tagged, hit.offset), cipher);
        }
    }
}
