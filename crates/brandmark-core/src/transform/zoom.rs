//! Centered zoom: crop a centered box and resample it back to full size.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::crop::{apply_crop_box, CropBox, PixelRect};
use crate::decode::{resize, DecodeError, DecodedImage, FilterType};

/// Fraction of each dimension kept by the logo zoom (5% margin per edge).
pub const ZOOM_FACTOR: f64 = 0.9;

/// Output of [`zoom`].
#[derive(Debug, Clone)]
pub struct ZoomResult {
    /// The zoomed image, same dimensions as the input.
    pub image: DecodedImage,
    /// Fractional crop box that was requested.
    pub crop_box: CropBox,
    /// Whole-pixel region that was actually copied.
    pub rect: PixelRect,
}

/// Summary of a zoom step, for logs and reports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomPlan {
    pub width: u32,
    pub height: u32,
    pub zoom_factor: f64,
    pub crop_box: CropBox,
}

impl ZoomPlan {
    /// Plan a zoom of a `width` x `height` image.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::InvalidDimensions` for a zero dimension and
    /// `DecodeError::InvalidZoomFactor` unless `0 < zoom_factor <= 1`.
    pub fn new(width: u32, height: u32, zoom_factor: f64) -> Result<Self, DecodeError> {
        if width == 0 || height == 0 {
            return Err(DecodeError::InvalidDimensions { width, height });
        }
        if !(zoom_factor > 0.0 && zoom_factor <= 1.0) {
            return Err(DecodeError::InvalidZoomFactor(zoom_factor));
        }

        Ok(Self {
            width,
            height,
            zoom_factor,
            crop_box: CropBox::centered(width, height, zoom_factor),
        })
    }
}

/// Crop box used for the logo zoom.
pub fn zoom_crop_box(width: u32, height: u32) -> CropBox {
    CropBox::centered(width, height, ZOOM_FACTOR)
}

/// Crop the centered `zoom_factor` box and resize it back to the input size.
///
/// # Errors
///
/// Any error from [`ZoomPlan::new`] or from resizing.
pub fn zoom(
    image: &DecodedImage,
    zoom_factor: f64,
    filter: FilterType,
) -> Result<ZoomResult, DecodeError> {
    let plan = ZoomPlan::new(image.width, image.height, zoom_factor)?;
    apply_zoom_plan(image, &plan, filter)
}

/// Execute a previously computed [`ZoomPlan`].
///
/// # Errors
///
/// Returns `DecodeError::InvalidDimensions` if the plan was made for a
/// different image size, or any error from resizing.
pub fn apply_zoom_plan(
    image: &DecodedImage,
    plan: &ZoomPlan,
    filter: FilterType,
) -> Result<ZoomResult, DecodeError> {
    if image.width != plan.width || image.height != plan.height {
        return Err(DecodeError::InvalidDimensions {
            width: image.width,
            height: image.height,
        });
    }

    let rect = plan.crop_box.to_pixels(image.width, image.height);
    let cropped = apply_crop_box(image, rect);
    debug!(?rect, "cropped zoom region");

    let zoomed = resize(&cropped, image.width, image.height, filter)?;

    Ok(ZoomResult {
        image: zoomed,
        crop_box: plan.crop_box,
        rect,
    })
}
