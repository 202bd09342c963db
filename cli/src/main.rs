//! Command-line entry point for dot matrix conversion.
//!
//! Converts a source image or a rendered text string into a JSON array of
//! dark-pixel coordinates.
//!
//! # Usage
//!
//! ```bash
//! dotmatrix --img photo.png --size 32 --out dot_matrix.json
//! dotmatrix --text "Hello" --font custom.ttf --size 48
//! ```

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, bail};
use clap::Parser;
use dot_engine::{image_to_dots, text_to_dots};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dotmatrix")]
#[command(about = "Convert an image or a text string to a dot matrix JSON file")]
struct Args {
    /// Source image to convert.
    #[arg(long, value_name = "PATH")]
    img: Option<PathBuf>,

    /// Text to render and convert.
    #[arg(long, value_name = "STRING")]
    text: Option<String>,

    /// Font file for text mode (TTF/OTF); defaults to the system bold sans.
    #[arg(long, value_name = "PATH")]
    font: Option<PathBuf>,

    /// Maximum image dimension, or font size in text mode.
    #[arg(long, default_value_t = dot_engine::DEFAULT_MAX_SIZE)]
    size: u32,

    /// Brightness cutoff: pixels darker than this become dots.
    #[arg(long, default_value_t = dot_engine::DEFAULT_THRESHOLD)]
    threshold: u8,

    /// Output JSON file.
    #[arg(long, default_value = "dot_matrix.json")]
    out: PathBuf,
}

/// The one conversion input the run operates on.
enum Input {
    Image(PathBuf),
    Text(String),
}

/// Resolve the mutually exclusive `--img` / `--text` selection.
///
/// Returns `None` when neither or both are given; both cases are usage
/// errors.
fn select_input(img: Option<PathBuf>, text: Option<String>) -> Option<Input> {
    match (img, text) {
        (Some(path), None) => Some(Input::Image(path)),
        (None, Some(text)) => Some(Input::Text(text)),
        _ => None,
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let dots = match select_input(args.img, args.text) {
        Some(Input::Image(path)) => image_to_dots(&path, args.threshold, args.size)?,
        Some(Input::Text(text)) => {
            text_to_dots(&text, args.font.as_deref(), args.size as f32, args.threshold)?
        }
        None => bail!("specify exactly one of --img or --text"),
    };

    let file = File::create(&args.out)
        .with_context(|| format!("failed to create {}", args.out.display()))?;
    serde_json::to_writer(BufWriter::new(file), &dots)
        .with_context(|| format!("failed to write {}", args.out.display()))?;
    tracing::debug!(count = dots.len(), out = %args.out.display(), "Serialized dot matrix");

    println!("wrote {} dots to {}", dots.len(), args.out.display());
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
