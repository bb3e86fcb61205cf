//! Image encoding
//!
//! Pictures are encoded pixel by pixel with the digit part of the numeric
//! codec and exchanged as a JSON record.

mod channel;
mod file;
mod record;

pub use channel::{decode_channel, encode_channel};
pub use file::{RgbaPixels, load_rgba, save_rgba};
pub use record::{
    EncodedImage, EncodedImageMetadata, EncodedPixel, FORMAT_VERSION, ImageError, ImageKey,
    estimate_json_size,
};
