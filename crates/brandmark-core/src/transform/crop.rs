//! Centered crop boxes and pixel-rectangle cropping.
//!
//! A [`CropBox`] holds fractional pixel bounds in `(left, top, right, bottom)`
//! order. It is snapped to whole pixels with [`CropBox::to_pixels`], rounding
//! every edge to the nearest integer, before any pixels are copied.
//!
//! # Coordinate System
//!
//! - (0, 0) = top-left corner
//! - right/bottom are exclusive edges, measured from the origin

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::decode::{DecodedImage, RGBA_CHANNELS};

/// Fractional crop bounds in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

/// Whole-pixel crop region, always non-empty and inside the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropBox {
    /// Centered box keeping `zoom` of each dimension.
    ///
    /// The margin on each axis is `dim * (1 - zoom) / 2`, applied to both
    /// opposing edges, so the box stays centered.
    pub fn centered(width: u32, height: u32, zoom: f64) -> Self {
        let margin_w = width as f64 * (1.0 - zoom) / 2.0;
        let margin_h = height as f64 * (1.0 - zoom) / 2.0;

        Self {
            left: margin_w,
            top: margin_h,
            right: width as f64 - margin_w,
            bottom: height as f64 - margin_h,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Snap to whole pixels inside a `width` x `height` image.
    ///
    /// Each edge is rounded to the nearest integer and clamped to the image.
    /// A region that collapses to zero is widened to one pixel.
    pub fn to_pixels(&self, width: u32, height: u32) -> PixelRect {
        let (x, w) = snap_axis(self.left, self.right, width);
        let (y, h) = snap_axis(self.top, self.bottom, height);
        PixelRect {
            x,
            y,
            width: w,
            height: h,
        }
    }
}

impl fmt::Display for CropBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug formatting keeps the ".0" on integral floats.
        write!(
            f,
            "({:?}, {:?}, {:?}, {:?})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

fn snap_axis(start: f64, end: f64, extent: u32) -> (u32, u32) {
    let extent_f = extent as f64;
    let lo = start.round().clamp(0.0, extent_f) as u32;
    let hi = end.round().clamp(0.0, extent_f) as u32;

    if hi > lo {
        return (lo, hi - lo);
    }

    let lo = lo.min(extent.saturating_sub(1));
    (lo, 1)
}

/// Copy the pixels inside `rect` into a new image.
///
/// `rect` is clamped to the source bounds first, so a rectangle from
/// [`CropBox::to_pixels`] is copied as-is and anything larger is trimmed.
pub fn apply_crop_box(image: &DecodedImage, rect: PixelRect) -> DecodedImage {
    if image.is_empty() {
        return image.clone();
    }

    let x = rect.x.min(image.width.saturating_sub(1));
    let y = rect.y.min(image.height.saturating_sub(1));
    let out_width = rect.width.min(image.width - x).max(1);
    let out_height = rect.height.min(image.height - y).max(1);

    // Fast path: full-frame crop returns a clone
    if x == 0 && y == 0 && out_width == image.width && out_height == image.height {
        return image.clone();
    }

    let src_stride = image.width as usize * RGBA_CHANNELS;
    let row_len = out_width as usize * RGBA_CHANNELS;
    let mut output = Vec::with_capacity(row_len * out_height as usize);

    // Copy pixel data row by row
    for row in 0..out_height as usize {
        let start = (y as usize + row) * src_stride + x as usize * RGBA_CHANNELS;
        output.extend_from_slice(&image.pixels[start..start + row_len]);
    }

    DecodedImage {
        width: out_width,
        height: out_height,
        pixels: output,
    }
}
