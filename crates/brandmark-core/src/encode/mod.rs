//! Image encoding pipeline for brandmark.
//!
//! This module provides functionality for:
//! - Encoding RGBA images to PNG
//! - Encoding RGBA images to WebP at maximum quality (lossless)
//! - Writing encoded bytes atomically, so a failed run never leaves a
//!   half-written output file
//!
//! # Examples
//!
//! ```ignore
//! use brandmark_core::encode::{save, OutputFormat};
//!
//! let format = OutputFormat::from_path("public/fc_logo_orange.webp")?;
//! save(&image, "public/fc_logo_orange.webp", format)?;
//! ```

mod format;
mod png;
mod webp;
mod write;

pub use format::{EncodeError, OutputFormat, WEBP_MAX_QUALITY};
pub use png::encode_png;
pub use webp::encode_webp;
pub use write::{encode, save, write_atomic};
