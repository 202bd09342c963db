//! Text rasterization onto a brightness grid.
//!
//! Renders a string in black onto an all-white grayscale canvas sized to the
//! measured text bounding box, ready for threshold scanning.

use std::path::Path;

use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use image::{GrayImage, Luma};
use imageproc::drawing::draw_text_mut;
use tracing::debug;

use crate::DotEngineError;

/// Fallback font used when no font path is given.
pub const DEFAULT_FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

/// Default font size in pixels.
pub const DEFAULT_FONT_SIZE: f32 = 32.0;

const WHITE: Luma<u8> = Luma([255]);
const BLACK: Luma<u8> = Luma([0]);

/// Load a TTF/OTF font from `path`, or from [`DEFAULT_FONT_PATH`] when `None`.
pub fn load_font(path: Option<&Path>) -> Result<FontVec, DotEngineError> {
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_FONT_PATH));
    let data = std::fs::read(path).map_err(|source| DotEngineError::FontRead {
        path: path.display().to_string(),
        source,
    })?;
    debug!(path = %path.display(), bytes = data.len(), "Loaded font file");

    FontVec::try_from_vec(data).map_err(|_| DotEngineError::FontParse)
}

/// Measure the pixel width of a string at the given font and scale.
pub fn measure_text_width(font: &FontVec, scale: PxScale, text: &str) -> u32 {
    let scaled = font.as_scaled(scale);
    let mut width = 0.0f32;
    let mut prev_glyph: Option<ab_glyph::GlyphId> = None;

    for ch in text.chars() {
        let glyph_id = scaled.glyph_id(ch);
        if let Some(prev) = prev_glyph {
            width += scaled.kern(prev, glyph_id);
        }
        width += scaled.h_advance(glyph_id);
        prev_glyph = Some(glyph_id);
    }

    width.ceil() as u32
}

/// Compute the line height for the given font and scale.
pub fn line_height(font: &FontVec, scale: PxScale) -> u32 {
    let scaled = font.as_scaled(scale);
    (scaled.ascent() - scaled.descent() + scaled.line_gap()).ceil() as u32
}

/// Render `text` in black onto a fresh all-white canvas.
///
/// The canvas is exactly the measured bounding box of the text: advance
/// width by line height. An empty string yields a zero-width canvas.
pub fn render_text(font: &FontVec, size: f32, text: &str) -> GrayImage {
    let scale = PxScale::from(size);
    let width = measure_text_width(font, scale, text);
    let height = line_height(font, scale);
    debug!(width, height, size, "Rendering text to canvas");

    let mut canvas = GrayImage::from_pixel(width, height, WHITE);
    draw_text_mut(&mut canvas, BLACK, 0, 0, scale, font, text);
    canvas
}
