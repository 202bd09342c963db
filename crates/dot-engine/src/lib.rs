//! Dot matrix conversion library.
//!
//! Converts raster images and rendered text strings into a sparse list of
//! dark-pixel coordinates under a brightness threshold.

pub mod matrix;
pub mod resize;
pub mod scan;
pub mod text;

// Re-exports for convenience
pub use matrix::{image_to_dots, text_to_dots};
pub use resize::resize_to_fit;
pub use scan::{Dot, scan_dots};
pub use text::{DEFAULT_FONT_PATH, DEFAULT_FONT_SIZE, load_font, render_text};

/// Default brightness cutoff: pixels below this value count as dots.
pub const DEFAULT_THRESHOLD: u8 = 128;

/// Default maximum image dimension after downscaling.
pub const DEFAULT_MAX_SIZE: u32 = 32;

/// Errors that can occur during dot matrix conversion.
#[derive(Debug, thiserror::Error)]
pub enum DotEngineError {
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("failed to read font file {path}: {source}")]
    FontRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid font data (only TTF/OTF supported)")]
    FontParse,
}
