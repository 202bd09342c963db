//! Fit-within image resizing for dot matrix output.
//!
//! Downscales with nearest-neighbor sampling so hard edges survive into the
//! thresholded grid.

use image::DynamicImage;
use image::imageops::FilterType;
use tracing::debug;

/// Resize an image so both dimensions fit within `max_size`.
///
/// Applies a single uniform scale factor `min(max_size/w, max_size/h, 1)`,
/// so the aspect ratio is preserved and the image is never upscaled. Target
/// dimensions are truncated, with a floor of one pixel per axis.
/// Returns the image unchanged if it already fits.
pub fn resize_to_fit(img: &DynamicImage, max_size: u32) -> DynamicImage {
    let (orig_w, orig_h) = (img.width(), img.height());

    let scale = (f64::from(max_size) / f64::from(orig_w))
        .min(f64::from(max_size) / f64::from(orig_h))
        .min(1.0);

    if scale >= 1.0 {
        debug!(orig_w, orig_h, max_size, "Image already within bounds, skipping resize");
        return img.clone();
    }

    let new_width = ((f64::from(orig_w) * scale) as u32).max(1);
    let new_height = ((f64::from(orig_h) * scale) as u32).max(1);

    debug!(
        orig_w,
        orig_h, new_width, new_height, "Resizing image to fit within bounds"
    );

    img.resize_exact(new_width, new_height, FilterType::Nearest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, GrayImage, Luma};

    /// Create a test DynamicImage with given dimensions.
    fn create_test_image(width: u32, height: u32) -> DynamicImage {
        let gray = GrayImage::from_pixel(width, height, Luma([128]));
        DynamicImage::ImageLuma8(gray)
    }

    #[test]
    fn test_downscale_long_side_to_max() {
        let img = create_test_image(64, 32);
        let result = resize_to_fit(&img, 16);
        assert_eq!(result.dimensions(), (16, 8));
    }

    #[test]
    fn test_never_upscales() {
        let img = create_test_image(10, 20);
        let result = resize_to_fit(&img, 32);
        assert_eq!(result.dimensions(), (10, 20));
    }

    #[test]
    fn test_exact_fit_unchanged() {
        let img = create_test_image(32, 32);
        let result = resize_to_fit(&img, 32);
        assert_eq!(result.dimensions(), (32, 32));
    }

    #[test]
    fn test_dimensions_truncate() {
        // scale = 4/10 = 0.4, height 3 * 0.4 = 1.2 -> 1
        let img = create_test_image(10, 3);
        let result = resize_to_fit(&img, 4);
        assert_eq!(result.dimensions(), (4, 1));
    }

    #[test]
    fn test_short_side_clamps_to_one() {
        // scale = 32/1000, height 1 * scale -> 0 before the clamp
        let img = create_test_image(1000, 1);
        let result = resize_to_fit(&img, 32);
        assert_eq!(result.dimensions(), (32, 1));
    }

    #[test]
    fn test_portrait_scales_by_height() {
        let img = create_test_image(30, 60);
        let result = resize_to_fit(&img, 20);
        assert_eq!(result.dimensions(), (10, 20));
    }

    #[test]
    fn test_nearest_preserves_binary_values() {
        // Checkerboard of pure black/white must stay pure after resize
        let mut gray = GrayImage::new(8, 8);
        for y in 0..8 {
            for x in 0..8 {
                let v = if (x + y) % 2 == 0 { 0 } else { 255 };
                gray.put_pixel(x, y, Luma([v]));
            }
        }
        let result = resize_to_fit(&DynamicImage::ImageLuma8(gray), 4).to_luma8();

        for p in result.pixels() {
            assert!(p.0[0] == 0 || p.0[0] == 255, "blended value {}", p.0[0]);
        }
    }
}
