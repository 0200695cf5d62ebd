//! Geometric transforms: centered crop boxes, cropping and zoom.
//!
//! # Coordinate System
//!
//! - Crop boxes are in pixels, as `(left, top, right, bottom)` floats
//! - Boxes are snapped to whole pixels by rounding each edge to nearest
//! - Origin is top-left corner

mod crop;
mod zoom;

pub use crop::{apply_crop_box, CropBox, PixelRect};
pub use zoom::{apply_zoom_plan, zoom, zoom_crop_box, ZoomPlan, ZoomResult, ZOOM_FACTOR};
