//! Encoded image record and its JSON form

use super::channel::{decode_channel, encode_channel};
use crate::core::{ShiftResolver, SubstitutionTable, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Format version written into new records
pub const FORMAT_VERSION: &str = "1.0";

/// Average JSON characters per encoded pixel
const JSON_BYTES_PER_PIXEL: u64 = 60;

/// Errors that can occur while encoding, importing or exporting images
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Pixel buffer has {actual} bytes, expected {expected} for the given size")]
    BufferSize { expected: usize, actual: usize },

    #[error("Pixel matrix does not match the declared {width}x{height} size")]
    Dimensions { width: u32, height: u32 },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Image load error: {0}")]
    ImageLoadError(String),

    #[error("Image save error: {0}")]
    ImageSaveError(String),
}

/// One pixel, each channel as six code-unit digits
///
/// Fields are declared in key order so the exported JSON has sorted keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedPixel {
    pub a: String,
    pub b: String,
    pub g: String,
    pub r: String,
}

impl EncodedPixel {
    fn encode(rgba: &[u8], shift: i64) -> Self {
        Self {
            a: encode_channel(rgba[3], shift),
            b: encode_channel(rgba[2], shift),
            g: encode_channel(rgba[1], shift),
            r: encode_channel(rgba[0], shift),
        }
    }

    fn decode(&self, shift: i64) -> Option<[u8; 4]> {
        Some([
            decode_channel(&self.r, shift)?,
            decode_channel(&self.g, shift)?,
            decode_channel(&self.b, shift)?,
            decode_channel(&self.a, shift)?,
        ])
    }
}

/// Keys applied when encoding an image
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageKey<'a> {
    /// Day whose shift is applied and recorded
    pub weekday: Option<Weekday>,
    pub secret: &'a str,
    /// Table code; digits are not affected by the table, only the flag is kept
    pub table: Option<&'a str>,
}

/// A whole encoded image
///
/// Fields are declared in key order so the exported JSON has sorted keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedImage {
    /// Marker index of the day used, absent without day shift
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_offset: Option<u8>,
    pub encoding_date: String,
    pub height: u32,
    /// Row-major pixels
    pub pixels: Vec<Vec<EncodedPixel>>,
    /// Whether a secret was applied
    pub secret_code: bool,
    /// Whether a keyed table was active
    pub table_code: bool,
    pub version: String,
    pub width: u32,
}

impl EncodedImage {
    /// Encode a raw RGBA buffer (`width * height * 4` bytes, row-major)
    ///
    /// # Errors
    /// Returns [`ImageError::BufferSize`] if the buffer length does not match
    /// the dimensions.
    pub fn encode_rgba(
        width: u32,
        height: u32,
        rgba: &[u8],
        key: &ImageKey<'_>,
    ) -> Result<Self, ImageError> {
        let expected = rgba_len(width, height).unwrap_or(usize::MAX);
        if rgba.len() != expected {
            return Err(ImageError::BufferSize {
                expected,
                actual: rgba.len(),
            });
        }

        let shift = ShiftResolver::combined_shift(key.weekday, key.secret);
        let pixels = if width == 0 {
            vec![Vec::new(); height as usize]
        } else {
            rgba.chunks_exact(width as usize * 4)
                .map(|row| {
                    row.chunks_exact(4)
                        .map(|px| EncodedPixel::encode(px, shift))
                        .collect()
                })
                .collect()
        };

        tracing::debug!(width, height, shift, "image encoded");

        Ok(Self {
            day_offset: key.weekday.map(Weekday::index),
            encoding_date: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            height,
            pixels,
            secret_code: !key.secret.is_empty(),
            table_code: SubstitutionTable::resolve(key.table).is_keyed(),
            version: FORMAT_VERSION.to_string(),
            width,
        })
    }

    /// Shift needed to decode, given the receiver's secret
    ///
    /// The secret only counts if the record says one was applied.
    #[must_use]
    pub fn shift(&self, secret: &str) -> i64 {
        let day = self.day_offset.map_or(0, ShiftResolver::day_shift);
        let secret = if self.secret_code {
            ShiftResolver::secret_shift(secret)
        } else {
            0
        };
        day + secret
    }

    /// Whether the pixel matrix has exactly `height` rows of `width` pixels
    #[must_use]
    pub fn has_consistent_size(&self) -> bool {
        self.pixels.len() == self.height as usize
            && self.pixels.iter().all(|row| row.len() == self.width as usize)
    }

    /// Decode back to a row-major RGBA buffer of the declared size
    ///
    /// Pixels with an undecodable channel stay transparent black. Returns
    /// `None` when the pixel matrix does not match the declared size.
    #[must_use]
    pub fn decode_rgba(&self, secret: &str) -> Option<Vec<u8>> {
        if !self.has_consistent_size() {
            return None;
        }
        let shift = self.shift(secret);
        let mut rgba = vec![0u8; rgba_len(self.width, self.height)?];

        let cells = self.pixels.iter().flatten();
        for (channels, pixel) in rgba.chunks_exact_mut(4).zip(cells) {
            if let Some(decoded) = pixel.decode(shift) {
                channels.copy_from_slice(&decoded);
            }
        }

        Some(rgba)
    }

    /// Import from JSON, `None` if malformed
    #[must_use]
    pub fn from_json(json: &str) -> Option<Self> {
        match Self::try_from_json(json) {
            Ok(image) => Some(image),
            Err(err) => {
                tracing::warn!(error = %err, "encoded image rejected");
                None
            }
        }
    }

    /// Import from JSON, reporting why it failed
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed, misses a required field, or
    /// its pixel matrix does not match `width` and `height`.
    pub fn try_from_json(json: &str) -> Result<Self, ImageError> {
        let image: Self = serde_json::from_str(json.trim())?;
        if !image.has_consistent_size() {
            return Err(ImageError::Dimensions {
                width: image.width,
                height: image.height,
            });
        }
        Ok(image)
    }

    /// Export as pretty-printed JSON with sorted keys
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, ImageError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[must_use]
    pub fn metadata(&self) -> EncodedImageMetadata {
        EncodedImageMetadata {
            version: self.version.clone(),
            width: self.width,
            height: self.height,
            encoding_date: self.encoding_date.clone(),
            pixel_count: u64::from(self.width) * u64::from(self.height),
        }
    }

    #[must_use]
    pub fn estimated_size(&self) -> String {
        estimate_json_size(self.width, self.height)
    }
}

/// Header fields of an encoded image, readable without the pixels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedImageMetadata {
    pub version: String,
    pub width: u32,
    pub height: u32,
    pub encoding_date: String,
    pub pixel_count: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Header {
    version: String,
    width: u32,
    height: u32,
    encoding_date: String,
}

impl EncodedImageMetadata {
    /// Read the header of an exported image; the pixel matrix is not required
    #[must_use]
    pub fn extract(json: &str) -> Option<Self> {
        let header: Header = serde_json::from_str(json.trim()).ok()?;
        Some(Self {
            pixel_count: u64::from(header.width) * u64::from(header.height),
            version: header.version,
            width: header.width,
            height: header.height,
            encoding_date: header.encoding_date,
        })
    }
}

/// Length of a `width` x `height` RGBA buffer, `None` if it does not fit in memory
pub(crate) fn rgba_len(width: u32, height: u32) -> Option<usize> {
    usize::try_from(width)
        .ok()?
        .checked_mul(usize::try_from(height).ok()?)?
        .checked_mul(4)
}

/// Human-readable JSON size estimate (`o`, `Ko`, `Mo`)
///
/// # Examples
/// ```
/// use courrier_code::picture::estimate_json_size;
///
/// assert_eq!(estimate_json_size(4, 4), "960 o");
/// assert_eq!(estimate_json_size(100, 100), "585.9 Ko");
/// assert_eq!(estimate_json_size(200, 200), "2.3 Mo");
/// ```
#[must_use]
pub fn estimate_json_size(width: u32, height: u32) -> String {
    let bytes = u64::from(width)
        .saturating_mul(u64::from(height))
        .saturating_mul(JSON_BYTES_PER_PIXEL);
    if bytes < 1024 {
        format!("{bytes} o")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} Ko", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} Mo", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2x1: opaque red, half-transparent grey
    const PIXELS: [u8; 8] = [255, 0, 0, 255, 128, 128, 128, 127];

    fn key(weekday: Option<Weekday>, secret: &str) -> ImageKey<'_> {
        ImageKey {
            weekday,
            secret,
            table: None,
        }
    }

    #[test]
    fn encode_records_keys() {
        let image = EncodedImage::encode_rgba(
            2,
            1,
            &PIXELS,
            &ImageKey {
                weekday: Some(Weekday::Tuesday),
                secret: "chat",
                table: Some("123456"),
            },
        )
        .unwrap();
        assert_eq!(image.version, "1.0");
        assert_eq!(image.day_offset, Some(2));
        assert!(image.secret_code);
        assert!(image.table_code);
        assert_eq!(image.pixels.len(), 1);
        assert_eq!(image.pixels[0].len(), 2);
        assert_eq!(image.shift("chat"), 11 + 32);
    }

    #[test]
    fn plain_encoding_is_readable() {
        let image = EncodedImage::encode_rgba(2, 1, &PIXELS, &key(None, "")).unwrap();
        assert_eq!(image.pixels[0][0].r, "293232");
        assert_eq!(image.pixels[0][0].g, "272727");
        assert_eq!(image.day_offset, None);
        assert!(!image.secret_code);
        assert!(!image.table_code);
    }

    #[test]
    fn decode_restores_pixels() {
        let image =
            EncodedImage::encode_rgba(2, 1, &PIXELS, &key(Some(Weekday::Saturday), "secret"))
                .unwrap();
        assert_eq!(image.decode_rgba("secret").unwrap(), PIXELS);
        assert_ne!(image.decode_rgba("autre").unwrap(), PIXELS);
    }

    #[test]
    fn secret_ignored_when_not_recorded() {
        let image = EncodedImage::encode_rgba(2, 1, &PIXELS, &key(None, "")).unwrap();
        assert_eq!(image.decode_rgba("anything").unwrap(), PIXELS);
    }

    #[test]
    fn wrong_buffer_size_is_an_error() {
        let result = EncodedImage::encode_rgba(3, 1, &PIXELS, &key(None, ""));
        assert!(matches!(
            result,
            Err(ImageError::BufferSize {
                expected: 12,
                actual: 8
            })
        ));
    }

    #[test]
    fn undecodable_pixel_stays_zero() {
        let mut image = EncodedImage::encode_rgba(2, 1, &PIXELS, &key(None, "")).unwrap();
        image.pixels[0][0].a = "7".to_string();
        let rgba = image.decode_rgba("").unwrap();
        assert_eq!(rgba[..4], [0; 4]);
        assert_eq!(rgba[4..], PIXELS[4..]);
    }

    #[test]
    fn missing_pixels_are_rejected() {
        let mut image = EncodedImage::encode_rgba(2, 1, &PIXELS, &key(None, "")).unwrap();
        image.pixels[0].truncate(1);
        assert!(!image.has_consistent_size());
        assert_eq!(image.decode_rgba(""), None);
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        let json = r#"{"encodingDate": "", "height": 4294967295, "pixels": [],
            "secretCode": false, "tableCode": false, "version": "1.0", "width": 4294967295}"#;
        assert_eq!(EncodedImage::from_json(json), None);
        assert!(matches!(
            EncodedImage::try_from_json(json),
            Err(ImageError::Dimensions {
                width: u32::MAX,
                height: u32::MAX
            })
        ));

        let image = EncodedImage {
            day_offset: None,
            encoding_date: String::new(),
            height: u32::MAX,
            pixels: Vec::new(),
            secret_code: false,
            table_code: false,
            version: FORMAT_VERSION.to_string(),
            width: u32::MAX,
        };
        assert_eq!(image.decode_rgba(""), None);
        assert_eq!(image.estimated_size(), format!("{:.1} Mo", u64::MAX as f64 / (1024.0 * 1024.0)));
    }

    #[test]
    fn empty_image_decodes_to_nothing() {
        let image = EncodedImage::encode_rgba(0, 3, &[], &key(None, "")).unwrap();
        let json = image.to_json_pretty().unwrap();
        let imported = EncodedImage::from_json(&json).unwrap();
        assert_eq!(imported.decode_rgba(""), Some(Vec::new()));
    }

    #[test]
    fn json_round_trip_with_sorted_keys() {
        let image = EncodedImage::encode_rgba(2, 1, &PIXELS, &key(None, "")).unwrap();
        let json = image.to_json_pretty().unwrap();
        assert!(!json.contains("dayOffset"));

        let keys = ["encodingDate", "height", "pixels", "secretCode", "tableCode", "version", "width"];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert_eq!(EncodedImage::from_json(&format!("\n  {json}\n")), Some(image));
    }

    #[test]
    fn malformed_json_is_none() {
        assert_eq!(EncodedImage::from_json("{"), None);
        assert_eq!(EncodedImage::from_json(r#"{"version": "1.0"}"#), None);
        assert!(matches!(
            EncodedImage::try_from_json("[]"),
            Err(ImageError::JsonError(_))
        ));
    }

    #[test]
    fn metadata_without_pixels() {
        let json = r#"{"version": "1.0", "width": 40, "height": 30, "encodingDate": "2025-01-02 03:04:05"}"#;
        let meta = EncodedImageMetadata::extract(json).unwrap();
        assert_eq!(meta.pixel_count, 1200);
        assert_eq!(meta.encoding_date, "2025-01-02 03:04:05");
        assert_eq!(EncodedImageMetadata::extract(r#"{"width": 1}"#), None);
    }

    #[test]
    fn metadata_matches_record() {
        let image = EncodedImage::encode_rgba(2, 1, &PIXELS, &key(None, "")).unwrap();
        let json = image.to_json_pretty().unwrap();
        assert_eq!(EncodedImageMetadata::extract(&json), Some(image.metadata()));
        assert_eq!(image.estimated_size(), "120 o");
    }
}
