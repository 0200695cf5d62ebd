//! Brandmark Core - Logo processing library
//!
//! This crate provides the image operations behind the brandmark logo
//! scripts: RGBA decoding, flat recoloring, centered zoom-cropping with
//! high-quality resampling, and PNG/WebP encoding with atomic writes.
//!
//! All operations are synchronous and work on a single in-memory
//! [`DecodedImage`].

pub mod decode;
pub mod encode;
pub mod recolor;
pub mod transform;

pub use decode::{load_rgba, DecodeError, DecodedImage, FilterType};
pub use encode::{save, EncodeError, OutputFormat};
pub use recolor::{recolor_opaque, recolored, RgbColor, BRAND_ORANGE};
pub use transform::{zoom, zoom_crop_box, CropBox, PixelRect, ZoomPlan, ZOOM_FACTOR};
