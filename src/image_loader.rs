//! Image loading into normalized RGBA buffers
//!
//! Every input is decoded with the `image` crate and converted to
//! `Rgba32FImage`, with each 8-bit channel divided by 255. Images without
//! an alpha channel come out fully opaque.
//!
//! ## Supported Formats
//!
//! PNG, JPEG, GIF (first frame), WebP, TIFF, BMP, ICO, TGA, QOI and PNM.

use crate::error::{RecolorError, Result};
use image::{DynamicImage, ImageReader, Rgba32FImage};
use log::debug;
use std::io::ErrorKind;
use std::path::Path;

/// Load an image from disk as normalized RGBA
///
/// The format is detected from the file contents, so a mislabeled
/// extension still decodes.
///
/// # Errors
///
/// Returns `RecolorError::InputNotFound` if the file does not exist and
/// `RecolorError::ImageLoadError` if it cannot be opened or decoded
///
/// # Example
///
/// ```rust,no_run
/// use pastel_recolor::image_loader::load_rgba;
/// use std::path::Path;
///
/// let image = load_rgba(Path::new("assets/backgrounds/BG1.png"))?;
/// println!("Loaded image: {}x{}", image.width(), image.height());
/// # Ok::<(), pastel_recolor::RecolorError>(())
/// ```
pub fn load_rgba(path: &Path) -> Result<Rgba32FImage> {
    let reader = ImageReader::open(path)
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => RecolorError::InputNotFound {
                path: path.to_path_buf(),
            },
            _ => RecolorError::image_load(
                format!("Failed to open image file: {}", path.display()),
                e,
            ),
        })?
        .with_guessed_format()
        .map_err(|e| {
            RecolorError::image_load(format!("Failed to read image header: {}", path.display()), e)
        })?;

    let img: DynamicImage = reader.decode().map_err(|e| {
        RecolorError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })?;

    debug!(
        "Decoded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );
    Ok(to_normalized_rgba(&img))
}

/// Convert any decoded image to RGBA with channels in [0, 1]
pub fn to_normalized_rgba(img: &DynamicImage) -> Rgba32FImage {
    match img {
        // Keep the 8-bit path explicit so values are exactly byte / 255
        DynamicImage::ImageRgba8(_) | DynamicImage::ImageRgb8(_) | DynamicImage::ImageLuma8(_)
        | DynamicImage::ImageLumaA8(_) => {
            let rgba = img.to_rgba8();
            let mut out = Rgba32FImage::new(rgba.width(), rgba.height());
            for (dst, src) in out.pixels_mut().zip(rgba.pixels()) {
                dst.0 = src.0.map(|c| c as f32 / 255.0);
            }
            out
        }
        _ => img.to_rgba32f(),
    }
}
