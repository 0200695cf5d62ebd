//! Flat recoloring of logo artwork.
//!
//! A logo drawn in a single color on a transparent background can be
//! recolored by replacing the RGB channels of every visible pixel while
//! keeping its alpha. Anti-aliased edges keep their partial alpha, so the
//! silhouette is preserved exactly.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decode::{DecodedImage, RGBA_CHANNELS};

/// An opaque RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// The brand orange (`#ea580c`).
pub const BRAND_ORANGE: RgbColor = RgbColor::new(234, 88, 12);

/// Replace the RGB channels of every pixel with alpha > 0, in place.
///
/// Pixels with alpha == 0 are left byte-for-byte unchanged, including any
/// color data hidden under the zero alpha. Returns the number of pixels
/// that were recolored.
pub fn recolor_opaque(image: &mut DecodedImage, color: RgbColor) -> usize {
    let mut recolored = 0;

    for px in image.pixels.chunks_exact_mut(RGBA_CHANNELS) {
        if px[3] > 0 {
            px[0] = color.r;
            px[1] = color.g;
            px[2] = color.b;
            recolored += 1;
        }
    }

    debug!(
        recolored,
        total = image.pixel_count(),
        color = %color.to_hex(),
        "recolored pixels"
    );
    recolored
}

/// Non-mutating variant of [`recolor_opaque`].
pub fn recolored(image: &DecodedImage, color: RgbColor) -> DecodedImage {
    let mut output = image.clone();
    recolor_opaque(&mut output, color);
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_brand_orange_hex() {
        assert_eq!(BRAND_ORANGE.to_hex(), "#ea580c");
    }

    #[test]
    fn test_white_and_transparent_pair() {
        let mut img = DecodedImage::new(2, 1, vec![255, 255, 255, 255, 0, 0, 0, 0]);
        let count = recolor_opaque(&mut img, BRAND_ORANGE);

        assert_eq!(count, 1);
        assert_eq!(img.pixels, vec![234, 88, 12, 255, 0, 0, 0, 0]);
    }

    #[test]
    fn test_partial_alpha_is_kept() {
        let mut img = DecodedImage::new(1, 1, vec![255, 255, 255, 1]);
        recolor_opaque(&mut img, BRAND_ORANGE);
        assert_eq!(img.pixels, vec![234, 88, 12, 1]);
    }

    #[test]
    fn test_hidden_color_under_zero_alpha_untouched() {
        let mut img = DecodedImage::new(1, 1, vec![17, 200, 99, 0]);
        let count = recolor_opaque(&mut img, BRAND_ORANGE);

        assert_eq!(count, 0);
        assert_eq!(img.pixels, vec![17, 200, 99, 0]);
    }

    #[test]
    fn test_recolored_leaves_source_alone() {
        let src = DecodedImage::filled(3, 3, [255, 255, 255, 128]);
        let out = recolored(&src, BRAND_ORANGE);

        assert_eq!(src.pixel(0, 0), Some([255, 255, 255, 128]));
        assert_eq!(out.pixel(0, 0), Some([234, 88, 12, 128]));
    }

    #[test]
    fn test_recolor_is_deterministic() {
        let src = DecodedImage::new(2, 2, (0..16).map(|v| v * 15).collect());
        assert_eq!(recolored(&src, BRAND_ORANGE), recolored(&src, BRAND_ORANGE));
    }

    fn arb_image() -> impl Strategy<Value = DecodedImage> {
        (1u32..8, 1u32..8).prop_flat_map(|(w, h)| {
            proptest::collection::vec(any::<u8>(), (w * h * 4) as usize)
                .prop_map(move |pixels| DecodedImage::new(w, h, pixels))
        })
    }

    proptest! {
        #[test]
        fn prop_recolor_invariants(
            src in arb_image(),
            r in any::<u8>(),
            g in any::<u8>(),
            b in any::<u8>()
        ) {
            let color = RgbColor::new(r, g, b);
            let out = recolored(&src, color);

            prop_assert_eq!(out.width, src.width);
            prop_assert_eq!(out.height, src.height);

            for (before, after) in src.pixels.chunks_exact(4).zip(out.pixels.chunks_exact(4)) {
                if before[3] > 0 {
                    prop_assert_eq!(after, &[r, g, b, before[3]][..]);
                } else {
                    prop_assert_eq!(after, before);
                }
            }
        }
    }
}
