//! PNG loading and saving for the command line

use super::record::{ImageError, rgba_len};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, RgbaImage};
use std::path::Path;

/// An RGBA pixel buffer with its dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaPixels {
    pub width: u32,
    pub height: u32,
    /// Row-major, four bytes per pixel
    pub data: Vec<u8>,
}

impl RgbaPixels {
    /// Convert a decoded image, shrinking it to fit in `max_side` if given
    #[must_use]
    pub fn from_image(image: &DynamicImage, max_side: Option<u32>) -> Self {
        let (width, height) = image.dimensions();
        let rgba = match max_side {
            Some(max) if max > 0 && (width > max || height > max) => {
                image.resize(max, max, FilterType::Triangle).to_rgba8()
            }
            _ => image.to_rgba8(),
        };

        Self {
            width: rgba.width(),
            height: rgba.height(),
            data: rgba.into_raw(),
        }
    }
}

/// Load an image file as RGBA
///
/// # Errors
/// Returns an error if the file cannot be opened or decoded.
pub fn load_rgba<P: AsRef<Path>>(path: P, max_side: Option<u32>) -> Result<RgbaPixels, ImageError> {
    let image = image::open(path).map_err(|e| ImageError::ImageLoadError(e.to_string()))?;
    Ok(RgbaPixels::from_image(&image, max_side))
}

/// Save an RGBA buffer; the format follows the file extension
///
/// # Errors
/// Returns an error if the buffer does not match the dimensions or the file
/// cannot be written.
pub fn save_rgba<P: AsRef<Path>>(path: P, pixels: RgbaPixels) -> Result<(), ImageError> {
    let actual = pixels.data.len();
    let expected = rgba_len(pixels.width, pixels.height).unwrap_or(usize::MAX);
    let buffer = RgbaImage::from_raw(pixels.width, pixels.height, pixels.data)
        .ok_or(ImageError::BufferSize { expected, actual })?;
    buffer
        .save(path)
        .map_err(|e| ImageError::ImageSaveError(e.to_string()))
}
