//! Numeric substitution cipher
//!
//! Letters and digits become two-digit code units, shifted by the day and the
//! secret, optionally tagged with an in-band day marker.

mod codec;
mod engine;
mod marker;

pub use codec::NumericCodec;
pub use engine::{Cipher, shuffle_words};
pub use marker::{DayMarker, MarkerHit};
