//! Non-white pixel detection
//!
//! A pixel is "white" only when red, green and blue all exceed the
//! threshold. Everything else, including the slightly off-white
//! antialiased edges of the line art, is selected for recoloring.
//! Alpha plays no part in the classification.

use image::Rgba32FImage;

/// Boolean per-pixel selector, row-major, `true` = non-white
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhiteMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl WhiteMask {
    /// Classify every pixel of `image` against `threshold`
    pub fn compute(image: &Rgba32FImage, threshold: f32) -> Self {
        let bits = image
            .pixels()
            .map(|p| {
                let [r, g, b, _] = p.0;
                !(r > threshold && g > threshold && b > threshold)
            })
            .collect();

        Self {
            width: image.width(),
            height: image.height(),
            bits,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Whether the pixel at (x, y) is selected; out of bounds is `false`
    pub fn is_masked(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.bits[(y as usize) * (self.width as usize) + x as usize]
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of non-white pixels
    pub fn masked_count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Fraction of pixels selected (0.0 for an empty image)
    pub fn coverage(&self) -> f32 {
        if self.bits.is_empty() {
            return 0.0;
        }
        self.masked_count() as f32 / self.bits.len() as f32
    }
}
