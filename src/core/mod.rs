//! Core domain types for the cipher
//!
//! This module contains the fundamental value types shared by every other layer.
//! All types here are pure, immutable once built, and cheap to pass by value or reference.

mod code_unit;
mod normalize;
mod shift;
mod table;

pub use code_unit::CodeUnit;
pub use normalize::{fold_diacritics, normalize};
pub use shift::{SHIFT_PERIOD, ShiftResolver, Weekday};
pub use table::{SubstitutionTable, XorShift64};
