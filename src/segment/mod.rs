//! Word segmentation and recognition scoring
//!
//! Turns an unspaced decoded letter stream back into words and rates how
//! French a candidate decoding looks.

mod score;
mod segmenter;
mod strategy;

pub use score::{recognized_word_count, recognized_word_score};
pub use segmenter::{Segmentation, WordSegmenter};
pub use strategy::{LegacyScoring, PolicyType, ReferenceScoring, ScoringPolicy};
