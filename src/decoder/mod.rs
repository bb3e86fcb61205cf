//! Decoding when the key or the day is not known up front

mod auto;
mod matcher;

pub use auto::{AutoDecodeConfig, AutoDecoded, AutoDecoder, DayMode};
pub use matcher::{
    KeyBookError, KeyCandidate, KeyMatch, KeyMatcher, load_key_book, parse_key_book,
};
