//! WebP encoding.
//!
//! The `image` crate only provides a lossless WebP encoder. Lossless output
//! is what maximum quality asks for, so quality 100 is the single accepted
//! setting and anything lower is rejected rather than silently upgraded.

use std::io::Cursor;

use image::codecs::webp::WebPEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::format::{validate, WEBP_MAX_QUALITY};
use super::EncodeError;
use crate::decode::DecodedImage;

/// Encode an RGBA image to WebP bytes at the given quality (1-100).
///
/// # Errors
///
/// Returns `EncodeError::UnsupportedQuality` for any quality below 100,
/// validation errors for a malformed image, and
/// `EncodeError::EncodingFailed` if the encoder fails.
pub fn encode_webp(image: &DecodedImage, quality: u8) -> Result<Vec<u8>, EncodeError> {
    // Anything above 100 clamps to 100; the error reports the requested value
    if quality.clamp(1, WEBP_MAX_QUALITY) != WEBP_MAX_QUALITY {
        return Err(EncodeError::UnsupportedQuality {
            format: "WEBP",
            quality,
        });
    }

    validate(image)?;

    let mut buffer = Cursor::new(Vec::new());
    WebPEncoder::new_lossless(&mut buffer)
        .write_image(
            &image.pixels,
            image.width,
            image.height,
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| EncodeError::EncodingFailed {
            format: "WEBP",
            message: e.to_string(),
        })?;

    Ok(buffer.into_inner())
}
