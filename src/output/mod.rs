//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_batch_result, print_decode_result, print_encode_result, print_image_decode_result,
    print_image_encode_result, print_image_metadata, print_match_report, print_reference_table,
};
