//! Conversion entry points: image file or text string to dot list.

use std::path::Path;

use tracing::debug;

use crate::scan::{Dot, scan_dots};
use crate::text::{load_font, render_text};
use crate::{DotEngineError, resize};

/// Convert the image at `path` into dot coordinates.
///
/// The image is decoded, converted to grayscale, downscaled to fit within
/// `max_size`, and scanned against `threshold`. Decode failures propagate
/// unmodified.
pub fn image_to_dots(
    path: &Path,
    threshold: u8,
    max_size: u32,
) -> Result<Vec<Dot>, DotEngineError> {
    debug!(path = %path.display(), threshold, max_size, "Converting image to dot matrix");

    let img = image::open(path)?.grayscale();
    let img = resize::resize_to_fit(&img, max_size);
    Ok(scan_dots(&img.to_luma8(), threshold))
}

/// Render `text` and convert the result into dot coordinates.
///
/// Uses the font at `font_path` (or the system default) at `font_size`
/// pixels. Font failures propagate unmodified.
pub fn text_to_dots(
    text: &str,
    font_path: Option<&Path>,
    font_size: f32,
    threshold: u8,
) -> Result<Vec<Dot>, DotEngineError> {
    debug!(text, font_size, threshold, "Converting text to dot matrix");

    let font = load_font(font_path)?;
    let canvas = render_text(&font, font_size, text);
    Ok(scan_dots(&canvas, threshold))
}
