//! Image decoding pipeline for brandmark.
//!
//! This module provides functionality for:
//! - Reading and decoding logo files into RGBA8 buffers
//! - Exact-size resizing with a choice of resampling filter
//!
//! Every decoded image is forced to RGBA so that alpha is always available
//! to the recolor and zoom operations, whatever the source color mode.
//!
//! # Examples
//!
//! ```ignore
//! use brandmark_core::decode::load_rgba;
//!
//! let image = load_rgba("public/fc_logo_orange.png").unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod load;
mod resize;
mod types;

pub use load::{decode_rgba, load_rgba};
pub use resize::resize;
pub use types::{DecodeError, DecodedImage, FilterType, RGBA_CHANNELS};
