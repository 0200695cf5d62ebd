//! Image loading with forced RGBA conversion.

use std::io::Cursor;
use std::path::Path;

use image::ImageReader;
use tracing::debug;

use super::{DecodeError, DecodedImage};

/// Decode an image from bytes, converting it to RGBA8.
///
/// The container format is guessed from the leading magic bytes, so any
/// format enabled on the `image` crate (PNG, JPEG, WebP) is accepted.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format cannot be recognized.
/// Returns `DecodeError::CorruptedFile` if the decoder rejects the data.
pub fn decode_rgba(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    Ok(DecodedImage::from_rgba_image(img.into_rgba8()))
}

/// Read an image file from disk and decode it to RGBA8.
///
/// The file handle is scoped to the read, so it is closed before decoding
/// starts and on every error path.
///
/// # Errors
///
/// Returns `DecodeError::NotFound` if `path` does not exist, `DecodeError::Io`
/// for other read failures, and any error from [`decode_rgba`].
pub fn load_rgba(path: impl AsRef<Path>) -> Result<DecodedImage, DecodeError> {
    let path = path.as_ref();

    let bytes = std::fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            DecodeError::NotFound(path.to_path_buf())
        } else {
            DecodeError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let image = decode_rgba(&bytes)?;
    debug!(
        path = %path.display(),
        width = image.width,
        height = image.height,
        "decoded image"
    );
    Ok(image)
}
