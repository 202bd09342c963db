//! Threshold scan converting a brightness grid into dot coordinates.

use image::GrayImage;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single dark pixel as (x, y). Serializes as a two-element JSON array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dot(pub u32, pub u32);

/// Collect every pixel darker than `threshold`, in row-major order.
///
/// A pixel is included iff its brightness is strictly less than `threshold`,
/// so a threshold of 0 matches nothing and 255 matches everything but pure
/// white. The result order is top-to-bottom, left-to-right within each row.
pub fn scan_dots(img: &GrayImage, threshold: u8) -> Vec<Dot> {
    let (width, height) = img.dimensions();
    debug!(width, height, threshold, "Scanning for dark pixels");

    let mut dots = Vec::new();
    for y in 0..height {
        for x in 0..width {
            if img.get_pixel(x, y).0[0] < threshold {
                dots.push(Dot(x, y));
            }
        }
    }

    debug!(count = dots.len(), "Scan complete");
    dots
}
