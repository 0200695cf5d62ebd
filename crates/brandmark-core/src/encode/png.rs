//! PNG encoding.

use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::format::validate;
use super::EncodeError;
use crate::decode::DecodedImage;

/// Encode an RGBA image to PNG bytes.
///
/// Output is deterministic: the same pixels always encode to the same bytes.
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` or `EncodeError::InvalidPixelData`
/// for a malformed image, `EncodeError::EncodingFailed` if the encoder fails.
pub fn encode_png(image: &DecodedImage) -> Result<Vec<u8>, EncodeError> {
    validate(image)?;

    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(
            &image.pixels,
            image.width,
            image.height,
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| EncodeError::EncodingFailed {
            format: "PNG",
            message: e.to_string(),
        })?;

    Ok(buffer.into_inner())
}
