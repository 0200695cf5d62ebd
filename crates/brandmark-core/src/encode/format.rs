//! Output formats and encoding errors.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::{DecodedImage, RGBA_CHANNELS};

/// Highest WebP quality setting; encoded losslessly.
pub const WEBP_MAX_QUALITY: u8 = 100;

/// Errors that can occur while encoding or writing an image.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The encoder has no mode for the requested quality
    #[error("{format} quality {quality} is not supported (only 100, lossless)")]
    UnsupportedQuality { format: &'static str, quality: u8 },

    /// No output format could be inferred from the file name
    #[error("Cannot infer output format from {}", .0.display())]
    UnsupportedExtension(PathBuf),

    /// Encoder failure
    #[error("{format} encoding failed: {message}")]
    EncodingFailed {
        format: &'static str,
        message: String,
    },

    /// Writing the output file failed
    #[error("Failed to write {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Container format for saved images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Lossless PNG with alpha.
    Png,
    /// WebP with alpha. Quality 1-100; only 100 is supported.
    WebP { quality: u8 },
}

impl OutputFormat {
    /// Infer the format from a file extension (`png`, `webp`, any case).
    ///
    /// WebP is inferred at maximum quality.
    ///
    /// # Errors
    ///
    /// Returns `EncodeError::UnsupportedExtension` for any other extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EncodeError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("png") => Ok(OutputFormat::Png),
            Some("webp") => Ok(OutputFormat::WebP {
                quality: WEBP_MAX_QUALITY,
            }),
            _ => Err(EncodeError::UnsupportedExtension(path.to_path_buf())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Png => "PNG",
            OutputFormat::WebP { .. } => "WEBP",
        }
    }
}

/// Check dimensions and buffer length before handing pixels to an encoder.
pub(crate) fn validate(image: &DecodedImage) -> Result<(), EncodeError> {
    let (width, height) = (image.width, image.height);
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = width as usize * height as usize * RGBA_CHANNELS;
    if image.pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: image.pixels.len(),
        });
    }

    Ok(())
}
