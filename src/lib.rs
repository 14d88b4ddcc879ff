//! # Pastel Recolor
//!
//! A Rust crate for recoloring watercolor-style background images.
//!
//! The pipeline:
//! - Selects every pixel that is not near-white
//! - Replaces its hue with a target pastel hue and scales its saturation down,
//!   keeping lightness so the watercolor shading survives
//! - Composites the result over opaque white and over a near-white tint
//! - Exports each composite as PNG and as lossy WebP
//!
//! ## Example
//!
//! ```rust,no_run
//! use pastel_recolor::{recolor_background, RecolorConfig};
//! use std::path::Path;
//!
//! let outputs = recolor_background(
//!     Path::new("assets/backgrounds/BG1.png"),
//!     &RecolorConfig::default(),
//! )?;
//! for (key, path) in outputs.entries() {
//!     println!("{}: {}", key, path.display());
//! }
//! # Ok::<(), pastel_recolor::RecolorError>(())
//! ```

use std::path::Path;

use image::{Rgb32FImage, Rgba32FImage};
use log::{debug, info};

pub mod error;
pub mod constants;
pub mod config;
pub mod image_loader;
pub mod color;
pub mod detection;
pub mod composite;
pub mod export;

pub use config::RecolorConfig;
pub use error::{RecolorError, Result};
pub use export::OutputPaths;

use color::{hex_to_rgb, rgb_to_hex, HueRemapper};
use composite::composite_over;
use detection::WhiteMask;

/// Recolored source composited over both backgrounds, before quantization
#[derive(Debug, Clone)]
pub struct RecoloredImages {
    /// Composite over opaque white
    pub white: Rgb32FImage,
    /// Composite over the tint color
    pub tinted: Rgb32FImage,
    /// Number of pixels that received the remap
    pub remapped_pixels: usize,
}

/// Run mask, remap and compositing on an in-memory image
///
/// The input is not modified; the mask is computed from it before any
/// recoloring.
///
/// # Errors
///
/// Returns `RecolorError` if the configuration is invalid
pub fn recolor_pixels(source: &Rgba32FImage, config: &RecolorConfig) -> Result<RecoloredImages> {
    config.validate()?;
    let target = hex_to_rgb(&config.target_hex)?;
    let tint = hex_to_rgb(&config.tint_hex)?;

    let mask = WhiteMask::compute(source, config.white_threshold);
    debug!(
        "Mask selects {} of {} pixels ({:.1}%)",
        mask.masked_count(),
        mask.len(),
        mask.coverage() * 100.0
    );

    let remapper = HueRemapper::new(target, config.saturation_scale);
    let mut recolored = source.clone();
    let remapped_pixels = remapper.apply(&mut recolored, &mask)?;

    debug!("Compositing over white and tint {}", rgb_to_hex(tint));
    Ok(RecoloredImages {
        white: composite_over(&recolored, composite::white()),
        tinted: composite_over(&recolored, tint),
        remapped_pixels,
    })
}

/// Recolor a background image file and write the four outputs next to it
///
/// This is the main entry point. Nothing is written unless loading and
/// processing succeed.
///
/// # Arguments
///
/// * `input` - Path to the image file
/// * `config` - Transform parameters
///
/// # Returns
///
/// The paths of the PNG and WebP files for both backgrounds
///
/// # Errors
///
/// Returns `RecolorError` if:
/// - The input file does not exist
/// - A configured color or parameter is invalid
/// - The image cannot be decoded, encoded or written
pub fn recolor_background(input: &Path, config: &RecolorConfig) -> Result<OutputPaths> {
    if !input.is_file() {
        return Err(RecolorError::InputNotFound {
            path: input.to_path_buf(),
        });
    }
    config.validate()?;
    let paths = OutputPaths::for_input(input)?;

    info!("Processing {}", input.display());
    let source = image_loader::load_rgba(input)?;
    let recolored = recolor_pixels(&source, config)?;

    let white = export::quantize(&recolored.white);
    let tinted = export::quantize(&recolored.tinted);
    export::write_outputs(&white, &tinted, &paths, config.webp_quality)?;

    Ok(paths)
}
