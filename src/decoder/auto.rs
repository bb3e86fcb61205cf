//! Automatic decoding without knowing the day or the direction
//!
//! Every plausible hypothesis (marker day, brute-forced day, forward or reversed
//! text) is decoded, segmented and scored; the best-scoring one wins.

use crate::cipher::{Cipher, DayMarker};
use crate::core::{ShiftResolver, Weekday};
use crate::dictionary::Dictionary;
use crate::segment::{PolicyType, WordSegmenter, recognized_word_score};
use rayon::prelude::*;

/// How the weekday shift is searched for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DayMode {
    /// No day shift at all, only the secret shift
    Off,
    /// Trust an embedded day marker, brute-force the day when none is found
    #[default]
    Marker,
    /// Always try every day in both directions, ignoring markers
    Exhaustive,
}

/// Search configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AutoDecodeConfig {
    pub day_mode: DayMode,
    pub policy: PolicyType,
}

/// Outcome of an automatic decode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutoDecoded {
    /// Decoded text (segmented, except for glued decodes)
    pub text: String,
    /// Day whose shift produced `text`
    pub weekday: Option<Weekday>,
    /// Whether the cipher text had been reversed by the sender
    pub reversed: bool,
    /// Whether the day came from an embedded marker
    pub marker_found: bool,
    /// Recognition score of `text`
    pub score: usize,
}

impl AutoDecoded {
    /// Short status line: lock for a marker day, calendar for a guessed day,
    /// arrows when reversed
    ///
    /// # Examples
    /// ```
    /// use courrier_code::core::Weekday;
    /// use courrier_code::decoder::AutoDecoded;
    ///
    /// let decoded = AutoDecoded {
    ///     text: "BONJOUR".into(),
    ///     weekday: Some(Weekday::Tuesday),
    ///     reversed: true,
    ///     marker_found: true,
    ///     score: 49,
    /// };
    /// assert_eq!(decoded.indication(), "🔓 Mardi 🔄");
    /// ```
    #[must_use]
    pub fn indication(&self) -> String {
        let mut parts = Vec::with_capacity(2);
        if let Some(day) = self.weekday {
            let icon = if self.marker_found { "🔓" } else { "📅" };
            parts.push(format!("{icon} {day}"));
        }
        if self.reversed {
            parts.push("🔄".to_string());
        }
        parts.join(" ")
    }
}

/// One decoding hypothesis before it is evaluated
#[derive(Debug, Clone)]
struct Hypothesis {
    body: String,
    shift: i64,
    weekday: Option<Weekday>,
    reversed: bool,
    marker_found: bool,
}

/// Multi-hypothesis decoder for one key (table + secret)
pub struct AutoDecoder<'a> {
    cipher: Cipher,
    dictionary: &'a Dictionary,
    config: AutoDecodeConfig,
}

impl<'a> AutoDecoder<'a> {
    #[must_use]
    pub const fn new(cipher: Cipher, dictionary: &'a Dictionary, config: AutoDecodeConfig) -> Self {
        Self {
            cipher,
            dictionary,
            config,
        }
    }

    /// Decode with segmentation, trying every hypothesis the day mode allows
    ///
    /// Ties keep the earliest hypothesis: marker before brute force, Sunday
    /// before Saturday, forward before reversed.
    #[must_use]
    pub fn decode(&self, cipher_text: &str, secret: &str) -> AutoDecoded {
        let (code, reversed) = prepare(cipher_text);
        let secret_shift = ShiftResolver::secret_shift(secret);

        let hypotheses = match self.config.day_mode {
            DayMode::Off => vec![
                Hypothesis::plain(code, secret_shift, false),
                Hypothesis::plain(reversed, secret_shift, true),
            ],
            DayMode::Marker => {
                let marked = marker_hypotheses(&code, &reversed, secret_shift);
                if marked.is_empty() {
                    brute_force_hypotheses(&code, &reversed, secret_shift)
                } else {
                    marked
                }
            }
            DayMode::Exhaustive => brute_force_hypotheses(&code, &reversed, secret_shift),
        };

        self.best_of(hypotheses, true)
    }

    /// Decode without segmentation, for messages sent as one glued word stream
    ///
    /// A marker in either direction is trusted outright; otherwise the 14
    /// day/direction combinations are scored on the raw decoded text.
    #[must_use]
    pub fn decode_glued(&self, cipher_text: &str, secret: &str) -> AutoDecoded {
        let (code, reversed) = prepare(cipher_text);
        let secret_shift = ShiftResolver::secret_shift(secret);

        let marked = marker_hypotheses(&code, &reversed, secret_shift);
        if let Some(first) = marked.into_iter().next() {
            return self.evaluate(first, false);
        }

        self.best_of(brute_force_hypotheses(&code, &reversed, secret_shift), false)
    }

    fn evaluate(&self, hypothesis: Hypothesis, segmented: bool) -> AutoDecoded {
        let raw = self.cipher.decode(&hypothesis.body, hypothesis.shift);
        let text = if segmented {
            WordSegmenter::new(self.dictionary, self.config.policy).segment(&raw)
        } else {
            raw
        };
        let score = recognized_word_score(self.dictionary, &text);

        tracing::debug!(
            weekday = ?hypothesis.weekday,
            reversed = hypothesis.reversed,
            marker = hypothesis.marker_found,
            score,
            "hypothesis evaluated"
        );

        AutoDecoded {
            text,
            weekday: hypothesis.weekday,
            reversed: hypothesis.reversed,
            marker_found: hypothesis.marker_found,
            score,
        }
    }

    /// Evaluate in parallel, then keep the first strict maximum in input order
    fn best_of(&self, hypotheses: Vec<Hypothesis>, segmented: bool) -> AutoDecoded {
        let results: Vec<AutoDecoded> = hypotheses
            .into_par_iter()
            .map(|hypothesis| self.evaluate(hypothesis, segmented))
            .collect();

        first_best(results).unwrap_or_default()
    }
}

impl Hypothesis {
    const fn plain(body: String, shift: i64, reversed: bool) -> Self {
        Self {
            body,
            shift,
            weekday: None,
            reversed,
            marker_found: false,
        }
    }
}

/// Keep the first result whose score beats every earlier one
fn first_best<I>(results: I) -> Option<AutoDecoded>
where
    I: IntoIterator<Item = AutoDecoded>,
{
    results.into_iter().fold(None, |best, candidate| match best {
        Some(current) if candidate.score <= current.score => Some(current),
        _ => Some(candidate),
    })
}

/// Whitespace-free code and its character reversal
fn prepare(cipher_text: &str) -> (String, String) {
    let code: String = cipher_text.chars().filter(|c| !c.is_whitespace()).collect();
    let reversed = Cipher::reverse(&code);
    (code, reversed)
}

/// Marker-driven hypotheses, forward first
fn marker_hypotheses(code: &str, reversed: &str, secret_shift: i64) -> Vec<Hypothesis> {
    [(code, false), (reversed, true)]
        .into_iter()
        .filter_map(|(text, is_reversed)| {
            DayMarker::extract(text).map(|hit| Hypothesis {
                body: DayMarker::strip(text, hit.offset),
                shift: hit.weekday.shift() + secret_shift,
                weekday: Some(hit.weekday),
                reversed: is_reversed,
                marker_found: true,
            })
        })
        .collect()
}

/// Every weekday in both directions, Sunday forward first
fn brute_force_hypotheses(code: &str, reversed: &str, secret_shift: i64) -> Vec<Hypothesis> {
    Weekday::ALL
        .into_iter()
        .flat_map(|day| {
            [(code, false), (reversed, true)]
                .into_iter()
                .map(move |(text, is_reversed)| Hypothesis {
                    body: text.to_string(),
                    shift: day.shift() + secret_shift,
                    weekday: Some(day),
                    reversed: is_reversed,
                    marker_found: false,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoder(day_mode: DayMode) -> AutoDecoder<'static> {
        decoder_with(Cipher::default(), day_mode)
    }

    fn decoder_with(cipher: Cipher, day_mode: DayMode) -> AutoDecoder<'static> {
        AutoDecoder::new(
            cipher,
            Dictionary::french(),
            AutoDecodeConfig {
                day_mode,
                policy: PolicyType::default(),
            },
        )
    }

    #[test]
    fn marker_gives_day_directly() {
        let code = "0316251516110726060415160002241220251223120123121816";
        let decoded = decoder(DayMode::Marker).decode(code, "");
        assert_eq!(decoded.text, "RENDEZVOUS DEMAIN A LA PLAGE");
        assert_eq!(decoded.weekday, Some(Weekday::Tuesday));
        assert!(decoded.marker_found);
        assert!(!decoded.reversed);
        assert_eq!(decoded.score, 166);
        assert_eq!(decoded.indication(), "🔓 Mardi");
    }

    #[test]
    fn marker_found_in_reversed_text() {
        let code = Cipher::reverse("0316251516110726060415160002241220251223120123121816");
        let decoded = decoder(DayMode::Marker).decode(&code, "");
        assert_eq!(decoded.text, "RENDEZVOUS DEMAIN A LA PLAGE");
        assert_eq!(decoded.weekday, Some(Weekday::Tuesday));
        assert!(decoded.reversed);
        assert_eq!(decoded.indication(), "🔓 Mardi 🔄");
    }

    #[test]
    fn brute_force_without_marker() {
        // Thursday shift (9), no marker
        let code = "21140214231510230302192404142303131023022114191001131823";
        let decoded = decoder(DayMode::Marker).decode(code, "");
        assert_eq!(decoded.text, "LES ENFANTS JOUENT DANS LE JARDIN");
        assert_eq!(decoded.weekday, Some(Weekday::Thursday));
        assert!(!decoded.marker_found);
        assert_eq!(decoded.indication(), "📅 Jeudi");

        let reversed = decoder(DayMode::Exhaustive).decode(&Cipher::reverse(code), "");
        assert_eq!(reversed.text, decoded.text);
        assert!(reversed.reversed);
    }

    #[test]
    fn whitespace_in_cipher_text_is_ignored() {
        let code = "2114 0214 2315 1023 0302 1924 0414 2303 1310 2302 2114 1910 0113 1823";
        let decoded = decoder(DayMode::Marker).decode(code, "");
        assert_eq!(decoded.text, "LES ENFANTS JOUENT DANS LE JARDIN");
    }

    #[test]
    fn off_mode_uses_secret_shift_only() {
        let code = "08212016210124192120071915";
        let forward = decoder(DayMode::Off).decode(code, "ABC");
        assert_eq!(forward.text, "BONJOUR MON AMI");
        assert_eq!(forward.weekday, None);
        assert!(!forward.reversed);
        assert_eq!(forward.indication(), "");

        let backward = decoder(DayMode::Off).decode(&Cipher::reverse(code), "ABC");
        assert_eq!(backward.text, "BONJOUR MON AMI");
        assert!(backward.reversed);
        assert_eq!(backward.indication(), "🔄");
    }

    #[test]
    fn keyed_table_and_secret() {
        let code = "211316011325000523241316092405";
        let cipher = Cipher::with_table_seed(Some("123456"));
        let decoded = decoder_with(cipher, DayMode::Marker).decode(code, "chat");
        assert_eq!(decoded.text, "BONJOUR MON AMI");
        assert_eq!(decoded.weekday, Some(Weekday::Friday));
        assert_eq!(decoded.score, 67);
    }

    #[test]
    fn empty_cipher_text() {
        let decoded = decoder(DayMode::Marker).decode("", "");
        assert_eq!(decoded.text, "");
        assert_eq!(decoded.score, 0);
        assert_eq!(decoded.weekday, Some(Weekday::Sunday));
    }

    #[test]
    fn glued_trusts_marker_without_segmenting() {
        let code = "211316011325000523241316092405";
        let cipher = Cipher::with_table_seed(Some("123456"));
        let decoded = decoder_with(cipher, DayMode::Marker).decode_glued(code, "chat");
        assert_eq!(decoded.text, "BONJOURMONAMI");
        assert!(decoded.marker_found);
        assert_eq!(decoded.weekday, Some(Weekday::Friday));
    }

    #[test]
    fn glued_brute_force_scores_raw_text() {
        let decoded = decoder(DayMode::Marker).decode_glued("11242319240401", "");
        assert_eq!(decoded.text, "BONJOUR");
        assert_eq!(decoded.weekday, Some(Weekday::Thursday));
        assert_eq!(decoded.score, 49);
        assert!(!decoded.marker_found);
    }

    #[test]
    fn first_best_keeps_earliest_tie() {
        let make = |score, reversed| AutoDecoded {
            score,
            reversed,
            ..AutoDecoded::default()
        };
        let best = first_best([make(3, false), make(5, false), make(5, true)]).unwrap();
        assert_eq!(best.score, 5);
        assert!(!best.reversed);
        assert_eq!(first_best(Vec::new()), None);
    }
}
