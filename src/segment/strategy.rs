//! Segmentation scoring policies
//!
//! Defines the `ScoringPolicy` trait and the two weightings in use.

/// Weights used by the word segmenter to rank candidate splits
pub trait ScoringPolicy {
    /// Longest candidate word the segmenter tries at each position
    fn max_word_len(&self) -> usize;

    /// Score contributed by one token of `len` characters
    fn word_score(&self, len: usize, recognized: bool) -> i64;

    /// Bonus for a plural determiner followed by a recognised plural word
    ///
    /// Zero disables the agreement check.
    fn agreement_bonus(&self) -> i64 {
        0
    }
}

/// Enum wrapper for all scoring policies
///
/// Allows runtime selection of the policy while keeping static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyType {
    /// Quartic weights with length tiers and determiner agreement (default)
    Reference(ReferenceScoring),
    /// Cubic weights, lighter penalties for long unknown runs
    Legacy(LegacyScoring),
}

impl ScoringPolicy for PolicyType {
    fn max_word_len(&self) -> usize {
        match self {
            Self::Reference(p) => p.max_word_len(),
            Self::Legacy(p) => p.max_word_len(),
        }
    }

    fn word_score(&self, len: usize, recognized: bool) -> i64 {
        match self {
            Self::Reference(p) => p.word_score(len, recognized),
            Self::Legacy(p) => p.word_score(len, recognized),
        }
    }

    fn agreement_bonus(&self) -> i64 {
        match self {
            Self::Reference(p) => p.agreement_bonus(),
            Self::Legacy(p) => p.agreement_bonus(),
        }
    }
}

impl PolicyType {
    /// Create a policy from its name
    ///
    /// Supported names: "reference", "legacy" (alias "script").
    /// Defaults to reference if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "legacy" | "script" => Self::Legacy(LegacyScoring),
            _ => Self::Reference(ReferenceScoring),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Reference(_) => "reference",
            Self::Legacy(_) => "legacy",
        }
    }
}

impl Default for PolicyType {
    fn default() -> Self {
        Self::Reference(ReferenceScoring)
    }
}

/// Canonical weighting
///
/// Recognised words score `len⁴`, plus `100·len` from five characters or
/// `50·len` at exactly four. Unknown runs cost 200, 100 or 50 for lengths 1-3
/// and `10·len` beyond.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReferenceScoring;

impl ScoringPolicy for ReferenceScoring {
    fn max_word_len(&self) -> usize {
        25
    }

    fn word_score(&self, len: usize, recognized: bool) -> i64 {
        let len = len as i64;
        if recognized {
            let tier = match len {
                5.. => 100 * len,
                4 => 50 * len,
                _ => 0,
            };
            len.pow(4) + tier
        } else {
            match len {
                1 => -200,
                2 => -100,
                3 => -50,
                _ => -10 * len,
            }
        }
    }

    fn agreement_bonus(&self) -> i64 {
        200
    }
}

/// Weighting of the standalone web page
///
/// Recognised words score `len³ + 5`. Unknown runs cost 100, 50 or 20 for
/// lengths 1-3; longer ones score `2·len - 30`, which turns positive past 15
/// characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LegacyScoring;

impl ScoringPolicy for LegacyScoring {
    fn max_word_len(&self) -> usize {
        20
    }

    fn word_score(&self, len: usize, recognized: bool) -> i64 {
        let len = len as i64;
        if recognized {
            len.pow(3) + 5
        } else {
            match len {
                1 => -100,
                2 => -50,
                3 => -20,
                _ => 2 * len - 30,
            }
        }
    }
}
