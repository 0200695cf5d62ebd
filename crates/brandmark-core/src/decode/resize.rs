//! Exact-size image resizing.
//!
//! Uses the `image` crate's separable resampling on premultiplied alpha, so
//! color hidden under fully transparent pixels never bleeds into
//! anti-aliased edges. The input is never modified; a new `DecodedImage` is
//! returned.

use image::Rgba32FImage;

use super::{DecodeError, DecodedImage, FilterType, RGBA_CHANNELS};

/// Resize an image to exact dimensions.
///
/// # Arguments
///
/// * `image` - The source image to resize
/// * `width` - Target width in pixels
/// * `height` - Target height in pixels
/// * `filter` - Interpolation filter to use
///
/// # Errors
///
/// Returns `DecodeError::InvalidDimensions` if either target dimension is zero.
/// Returns `DecodeError::CorruptedFile` if the pixel buffer does not match the
/// stated dimensions.
pub fn resize(
    image: &DecodedImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidDimensions { width, height });
    }

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let premultiplied = premultiply(image)
        .ok_or_else(|| DecodeError::CorruptedFile("Failed to create Rgba32FImage".to_string()))?;

    let resized = image::imageops::resize(&premultiplied, width, height, filter.to_image_filter());

    Ok(unpremultiply(resized))
}

/// Convert to normalized floats with RGB scaled by alpha.
fn premultiply(image: &DecodedImage) -> Option<Rgba32FImage> {
    let data: Vec<f32> = image
        .pixels
        .chunks_exact(RGBA_CHANNELS)
        .flat_map(|px| {
            let a = px[3] as f32 / 255.0;
            [
                px[0] as f32 / 255.0 * a,
                px[1] as f32 / 255.0 * a,
                px[2] as f32 / 255.0 * a,
                a,
            ]
        })
        .collect();

    Rgba32FImage::from_raw(image.width, image.height, data)
}

/// Divide RGB back out by alpha. Fully transparent output is (0, 0, 0, 0).
fn unpremultiply(image: Rgba32FImage) -> DecodedImage {
    let (width, height) = image.dimensions();
    let raw = image.into_raw();

    let pixels = raw
        .chunks_exact(RGBA_CHANNELS)
        .flat_map(|px| {
            let a = px[3].clamp(0.0, 1.0);
            let alpha = to_u8(a);
            if alpha == 0 {
                return [0; RGBA_CHANNELS];
            }
            [to_u8(px[0] / a), to_u8(px[1] / a), to_u8(px[2] / a), alpha]
        })
        .collect();

    DecodedImage::new(width, height, pixels)
}

#[inline]
fn to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_image(width: u32, height: u32) -> DecodedImage {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 255) / width.max(1)) as u8); // R
                pixels.push(((y * 255) / height.max(1)) as u8); // G
                pixels.push(128); // B
                pixels.push(255); // A
            }
        }
        DecodedImage::new(width, height, pixels)
    }

    #[test]
    fn test_resize_basic() {
        let img = create_test_image(100, 50);
        let resized = resize(&img, 50, 25, FilterType::Bilinear).unwrap();

        assert_eq!(resized.width, 50);
        assert_eq!(resized.height, 25);
        assert_eq!(resized.pixels.len(), 50 * 25 * 4);
    }

    #[test]
    fn test_resize_same_dimensions() {
        let img = create_test_image(100, 50);
        let resized = resize(&img, 100, 50, FilterType::Lanczos3).unwrap();

        assert_eq!(resized, img);
    }

    #[test]
    fn test_resize_upscale() {
        let img = create_test_image(90, 45);
        let resized = resize(&img, 100, 50, FilterType::Lanczos3).unwrap();

        assert_eq!(resized.width, 100);
        assert_eq!(resized.height, 50);
    }

    #[test]
    fn test_resize_zero_dimensions_error() {
        let img = create_test_image(100, 50);

        assert!(matches!(
            resize(&img, 0, 50, FilterType::Bilinear),
            Err(DecodeError::InvalidDimensions { .. })
        ));
        assert!(resize(&img, 50, 0, FilterType::Bilinear).is_err());
    }

    #[test]
    fn test_resize_mismatched_buffer() {
        let img = DecodedImage {
            width: 10,
            height: 10,
            pixels: vec![0; 12],
        };
        assert!(matches!(
            resize(&img, 5, 5, FilterType::Nearest),
            Err(DecodeError::CorruptedFile(_))
        ));
    }

    #[test]
    fn test_lanczos_keeps_opaque_alpha() {
        let img = DecodedImage::filled(40, 40, [234, 88, 12, 255]);
        let resized = resize(&img, 57, 33, FilterType::Lanczos3).unwrap();

        assert!(resized.pixels.chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn test_transparent_black_does_not_darken_edges() {
        // Left half opaque orange, right half transparent black
        let mut img = DecodedImage::filled(40, 40, [0, 0, 0, 0]);
        for row in img.pixels.chunks_exact_mut(4 * 40) {
            for x in 0..20 {
                row[x * 4..x * 4 + 4].copy_from_slice(&[234, 88, 12, 255]);
            }
        }

        let resized = resize(&img, 47, 47, FilterType::Lanczos3).unwrap();

        let mut edge_pixels = 0;
        for px in resized.pixels.chunks_exact(4) {
            if px[3] > 0 && px[3] < 255 {
                edge_pixels += 1;
                assert!(
                    (px[0] as i32 - 234).abs() <= 2
                        && (px[1] as i32 - 88).abs() <= 2
                        && (px[2] as i32 - 12).abs() <= 2,
                    "edge pixel lost the logo color: {px:?}"
                );
            }
        }
        assert!(edge_pixels > 0);
    }

    #[test]
    fn test_premultiply_round_trip() {
        let img = DecodedImage::new(2, 1, vec![234, 88, 12, 255, 200, 100, 50, 128]);
        let back = unpremultiply(premultiply(&img).unwrap());

        assert_eq!(back.pixel(0, 0), Some([234, 88, 12, 255]));
        let px = back.pixel(1, 0).unwrap();
        assert_eq!(px[3], 128);
        assert!((px[0] as i32 - 200).abs() <= 1);
        assert!((px[1] as i32 - 100).abs() <= 1);
        assert!((px[2] as i32 - 50).abs() <= 1);
    }

    #[test]
    fn test_fully_transparent_output_is_cleared() {
        let img = DecodedImage::new(1, 1, vec![17, 200, 99, 0]);
        let back = unpremultiply(premultiply(&img).unwrap());
        assert_eq!(back.pixels, vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_all_filter_types() {
        let img = create_test_image(100, 50);

        for filter in [
            FilterType::Nearest,
            FilterType::Bilinear,
            FilterType::Lanczos3,
        ] {
            let resized = resize(&img, 50, 25, filter).unwrap();
            assert_eq!(resized.width, 50);
            assert_eq!(resized.height, 25);
        }
    }
}
