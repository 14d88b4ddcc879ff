//! Quantization and file export
//!
//! Composites are quantized to 8-bit RGB, then encoded as lossless PNG
//! (via `image`) and lossy WebP (via `webp`). Output files live next to
//! the input and are named `<stem><suffix>.<ext>`.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgb, Rgb32FImage, RgbImage};
use log::info;

use crate::composite::Background;
use crate::constants::naming;
use crate::{RecolorError, Result};

/// Scale to [0, 255], round half to even, clamp and cast to `u8`
pub fn quantize(image: &Rgb32FImage) -> RgbImage {
    let mut out = RgbImage::new(image.width(), image.height());
    for (dst, src) in out.pixels_mut().zip(image.pixels()) {
        *dst = Rgb(src.0.map(quantize_channel));
    }
    out
}

fn quantize_channel(value: f32) -> u8 {
    (value * 255.0).round_ties_even().clamp(0.0, 255.0) as u8
}

/// The four files written for one input image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub png_white: PathBuf,
    pub png_tint: PathBuf,
    pub webp_white: PathBuf,
    pub webp_tint: PathBuf,
}

impl OutputPaths {
    /// Derive output paths from the input file's directory and stem
    ///
    /// # Errors
    ///
    /// Returns `RecolorError::InvalidParameter` if the path has no file stem
    pub fn for_input(input: &Path) -> Result<Self> {
        let stem = input
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| RecolorError::invalid_parameter("input", input.display()))?;
        let dir = input.parent().unwrap_or_else(|| Path::new(""));

        let name = |background: Background, ext: &str| {
            dir.join(format!("{}{}.{}", stem, background.suffix(), ext))
        };

        Ok(Self {
            png_white: name(Background::White, naming::PNG_EXTENSION),
            png_tint: name(Background::Tinted, naming::PNG_EXTENSION),
            webp_white: name(Background::White, naming::WEBP_EXTENSION),
            webp_tint: name(Background::Tinted, naming::WEBP_EXTENSION),
        })
    }

    pub fn png(&self, background: Background) -> &Path {
        match background {
            Background::White => &self.png_white,
            Background::Tinted => &self.png_tint,
        }
    }

    pub fn webp(&self, background: Background) -> &Path {
        match background {
            Background::White => &self.webp_white,
            Background::Tinted => &self.webp_tint,
        }
    }

    /// Keyed paths in reporting order
    pub fn entries(&self) -> [(&'static str, &Path); 4] {
        [
            ("png_white", &self.png_white),
            ("png_tint", &self.png_tint),
            ("webp_white", &self.webp_white),
            ("webp_tint", &self.webp_tint),
        ]
    }
}

/// Encode an RGB image as PNG bytes
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .map_err(|e| RecolorError::image_encode("PNG encoding failed", e))?;
    Ok(buffer)
}

/// Encode an RGB image as lossy WebP bytes at `quality` (0-100)
pub fn encode_webp(image: &RgbImage, quality: f32) -> Result<Vec<u8>> {
    let encoder = webp::Encoder::from_rgb(image.as_raw(), image.width(), image.height());
    let memory = encoder
        .encode_simple(false, quality)
        .map_err(|e| RecolorError::ImageEncodeError {
            message: format!("WebP encoding failed: {:?}", e),
            source: None,
        })?;
    Ok(memory.to_vec())
}

/// Encode both composites and write all four files
///
/// Every image is encoded before the first file is written.
pub fn write_outputs(
    white: &RgbImage,
    tinted: &RgbImage,
    paths: &OutputPaths,
    webp_quality: f32,
) -> Result<()> {
    let mut encoded = Vec::with_capacity(4);
    for (background, image) in [(Background::White, white), (Background::Tinted, tinted)] {
        encoded.push((paths.png(background), encode_png(image)?));
    }
    for (background, image) in [(Background::White, white), (Background::Tinted, tinted)] {
        encoded.push((paths.webp(background), encode_webp(image, webp_quality)?));
    }

    for (path, bytes) in encoded {
        std::fs::write(path, bytes).map_err(|e| RecolorError::io(path, e))?;
        info!("Wrote {}", path.display());
    }
    Ok(())
}
