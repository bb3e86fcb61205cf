//! Shift resolution: weekday shift plus secret-phrase shift

use super::normalize::fold_diacritics;
use chrono::Datelike;
use std::fmt;
use std::str::FromStr;

/// Least common multiple of the letter (26) and digit (10) shift periods
pub const SHIFT_PERIOD: i64 = 130;

/// Day of the week, Sunday first (index 0) as in the wire marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All days in marker-index order
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Day for a marker index (0 = Sunday … 6 = Saturday)
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < Self::ALL.len() {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Marker index (0 = Sunday … 6 = Saturday)
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The shift assigned to this day
    #[must_use]
    pub const fn shift(self) -> i64 {
        match self {
            Self::Sunday => 7,
            Self::Monday => 3,
            Self::Tuesday => 11,
            Self::Wednesday => 5,
            Self::Thursday => 9,
            Self::Friday => 2,
            Self::Saturday => 13,
        }
    }

    /// French display name, as shown to correspondents
    #[must_use]
    pub const fn french_name(self) -> &'static str {
        match self {
            Self::Sunday => "Dimanche",
            Self::Monday => "Lundi",
            Self::Tuesday => "Mardi",
            Self::Wednesday => "Mercredi",
            Self::Thursday => "Jeudi",
            Self::Friday => "Vendredi",
            Self::Saturday => "Samedi",
        }
    }

    /// Today in the local time zone
    #[must_use]
    pub fn today() -> Self {
        let index = chrono::Local::now().weekday().num_days_from_sunday();
        Self::ALL[index as usize]
    }
}

impl FromStr for Weekday {
    type Err = String;

    /// Accepts a marker index (`0`-`6`), a French or an English day name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = fold_diacritics(s.trim()).to_lowercase();
        if let Ok(index) = name.parse::<u8>() {
            return Self::from_index(index).ok_or_else(|| format!("day index out of range: {index}"));
        }

        let day = match name.as_str() {
            "dimanche" | "sunday" | "dim" | "sun" => Self::Sunday,
            "lundi" | "monday" | "lun" | "mon" => Self::Monday,
            "mardi" | "tuesday" | "mar" | "tue" => Self::Tuesday,
            "mercredi" | "wednesday" | "mer" | "wed" => Self::Wednesday,
            "jeudi" | "thursday" | "jeu" | "thu" => Self::Thursday,
            "vendredi" | "friday" | "ven" | "fri" => Self::Friday,
            "samedi" | "saturday" | "sam" | "sat" => Self::Saturday,
            _ => return Err(format!("unknown day: {s}")),
        };
        Ok(day)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.french_name())
    }
}

/// Computes the additive shift applied to every code unit
pub struct ShiftResolver;

impl ShiftResolver {
    /// Shift for a marker index; unknown indices contribute nothing
    #[must_use]
    pub fn day_shift(weekday: u8) -> i64 {
        Weekday::from_index(weekday).map_or(0, Weekday::shift)
    }

    /// Sum of the secret's letters (A=1 … Z=26) and digits (face value)
    ///
    /// Accents are folded first; any other character contributes 0.
    ///
    /// # Examples
    /// ```
    /// use courrier_code::core::ShiftResolver;
    ///
    /// assert_eq!(ShiftResolver::secret_shift("ABC"), 6);
    /// assert_eq!(ShiftResolver::secret_shift("abc"), 6);
    /// assert_eq!(ShiftResolver::secret_shift("é9!"), 14);
    /// assert_eq!(ShiftResolver::secret_shift(""), 0);
    /// ```
    #[must_use]
    pub fn secret_shift(secret: &str) -> i64 {
        fold_diacritics(secret)
            .chars()
            .map(|ch| match ch.to_ascii_uppercase() {
                c @ 'A'..='Z' => i64::from(c as u8 - b'A' + 1),
                c @ '0'..='9' => i64::from(c as u8 - b'0'),
                _ => 0,
            })
            .sum()
    }

    /// Day shift (when enabled) plus secret shift
    #[must_use]
    pub fn combined_shift(weekday: Option<Weekday>, secret: &str) -> i64 {
        weekday.map_or(0, Weekday::shift) + Self::secret_shift(secret)
    }

    /// An explicit shift on top of the combined one
    ///
    /// `base` is reduced modulo 130 first (both letter and digit shifts repeat
    /// with that period), so any `i64` is accepted.
    ///
    /// # Examples
    /// ```
    /// use courrier_code::core::{ShiftResolver, Weekday};
    ///
    /// assert_eq!(ShiftResolver::offset_shift(1, Some(Weekday::Sunday), "ABC"), 14);
    /// assert_eq!(ShiftResolver::offset_shift(-1, None, ""), 129);
    /// ```
    #[must_use]
    pub fn offset_shift(base: i64, weekday: Option<Weekday>, secret: &str) -> i64 {
        base.rem_euclid(SHIFT_PERIOD) + Self::combined_shift(weekday, secret)
    }
}
