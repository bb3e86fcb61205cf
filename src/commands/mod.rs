//! Command implementations

pub mod batch;
pub mod decode;
pub mod encode;
pub mod keys;
pub mod picture;
pub mod table;

pub use batch::{BatchEntry, BatchResult, run_batch};
pub use decode::{DecodeMode, decode_text};
pub use encode::{EncodeConfig, EncodeResult, encode_text};
pub use keys::{MatchReport, match_keys};
pub use picture::{
    DEFAULT_MAX_SIDE, ImageDecodeResult, ImageEncodeResult, decode_image_file, encode_image_file,
    inspect_image_file,
};
pub use table::{TableResult, reference_table};
