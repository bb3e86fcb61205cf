//! Picture commands
//!
//! Encode a picture file to the JSON record and back.

use crate::picture::{
    EncodedImage, EncodedImageMetadata, ImageError, ImageKey, RgbaPixels, load_rgba, save_rgba,
};
use std::fs;
use std::path::Path;

/// Largest side kept by default; bigger pictures are shrunk
pub const DEFAULT_MAX_SIDE: u32 = 100;

/// Result of encoding a picture
#[derive(Debug, Clone)]
pub struct ImageEncodeResult {
    pub metadata: EncodedImageMetadata,
    pub estimated_size: String,
    pub json_bytes: usize,
}

/// Result of decoding a record back to a picture
#[derive(Debug, Clone)]
pub struct ImageDecodeResult {
    pub metadata: EncodedImageMetadata,
    pub day_offset: Option<u8>,
    pub secret_applied: bool,
}

/// Read a picture, encode it and write the JSON record
///
/// # Errors
/// Returns an error if the picture cannot be read or the record written.
pub fn encode_image_file(
    input: &Path,
    output: &Path,
    key: &ImageKey<'_>,
    max_side: Option<u32>,
) -> Result<ImageEncodeResult, ImageError> {
    let pixels = load_rgba(input, max_side)?;
    let encoded = EncodedImage::encode_rgba(pixels.width, pixels.height, &pixels.data, key)?;
    let json = encoded.to_json_pretty()?;
    fs::write(output, &json).map_err(|e| ImageError::ImageSaveError(e.to_string()))?;

    Ok(ImageEncodeResult {
        metadata: encoded.metadata(),
        estimated_size: encoded.estimated_size(),
        json_bytes: json.len(),
    })
}

/// Read a JSON record, decode it and write the picture
///
/// # Errors
/// Returns an error if the record cannot be read or parsed, or the picture
/// cannot be written.
pub fn decode_image_file(
    input: &Path,
    output: &Path,
    secret: &str,
) -> Result<ImageDecodeResult, ImageError> {
    let json = fs::read_to_string(input).map_err(|e| ImageError::ImageLoadError(e.to_string()))?;
    let encoded = EncodedImage::try_from_json(&json)?;
    let data = encoded.decode_rgba(secret).ok_or(ImageError::Dimensions {
        width: encoded.width,
        height: encoded.height,
    })?;

    save_rgba(
        output,
        RgbaPixels {
            width: encoded.width,
            height: encoded.height,
            data,
        },
    )?;

    Ok(ImageDecodeResult {
        metadata: encoded.metadata(),
        day_offset: encoded.day_offset,
        secret_applied: encoded.secret_code,
    })
}

/// Read only the header of a JSON record
///
/// # Errors
/// Returns an error if the file cannot be read or has no valid header.
pub fn inspect_image_file(input: &Path) -> Result<EncodedImageMetadata, ImageError> {
    let json = fs::read_to_string(input).map_err(|e| ImageError::ImageLoadError(e.to_string()))?;
    EncodedImageMetadata::extract(&json)
        .ok_or_else(|| ImageError::ImageLoadError("missing image header".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Weekday;

    fn temp(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("courrier_code_{}_{name}", std::process::id()))
    }

    #[test]
    fn picture_round_trip_through_json() {
        let original = temp("original.png");
        let record = temp("record.json");
        let restored = temp("restored.png");

        let pixels = RgbaPixels {
            width: 3,
            height: 2,
            data: (0..24).map(|i| (i * 10) as u8).collect(),
        };
        save_rgba(&original, pixels.clone()).unwrap();

        let key = ImageKey {
            weekday: Some(Weekday::Wednesday),
            secret: "rose",
            table: None,
        };
        let encoded = encode_image_file(&original, &record, &key, None).unwrap();
        assert_eq!(encoded.metadata.pixel_count, 6);

        let header = inspect_image_file(&record).unwrap();
        assert_eq!(header.width, 3);

        let decoded = decode_image_file(&record, &restored, "rose").unwrap();
        assert_eq!(decoded.day_offset, Some(3));
        assert!(decoded.secret_applied);
        assert_eq!(load_rgba(&restored, None).unwrap(), pixels);

        for path in [original, record, restored] {
            let _ = fs::remove_file(path);
        }
    }

    #[test]
    fn malformed_record_is_an_error() {
        let record = temp("broken.json");
        fs::write(&record, "{ nope").unwrap();
        assert!(decode_image_file(&record, &temp("never.png"), "").is_err());
        assert!(inspect_image_file(&record).is_err());
        let _ = fs::remove_file(record);
    }
}
