//! Hue and saturation remapping toward a target color
//!
//! Each masked pixel keeps its lightness (the watercolor shading) while
//! its hue is replaced by the target hue and its saturation is scaled
//! down for a pastel look.

use image::Rgba32FImage;
use log::debug;
use palette::Srgb;

use crate::color::conversion::{hls_to_rgb, rgb_to_hls, Hls};
use crate::constants::defaults;
use crate::detection::WhiteMask;
use crate::{RecolorError, Result};

/// Remaps pixels to a target hue with scaled saturation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueRemapper {
    target_hue: f32,
    saturation_scale: f32,
}

impl HueRemapper {
    /// Create a remapper for the given target color
    ///
    /// Only the target's hue is used; its lightness and saturation are ignored.
    pub fn new(target: Srgb, saturation_scale: f32) -> Self {
        Self {
            target_hue: rgb_to_hls(target).hue,
            saturation_scale,
        }
    }

    /// Create a remapper with the default saturation scale
    pub fn with_target(target: Srgb) -> Self {
        Self::new(target, defaults::SATURATION_SCALE)
    }

    /// Target hue as a fraction of the color wheel
    pub fn target_hue(&self) -> f32 {
        self.target_hue
    }

    pub fn saturation_scale(&self) -> f32 {
        self.saturation_scale
    }

    /// Remap a single color: target hue, scaled saturation, same lightness
    pub fn remap(&self, rgb: Srgb) -> Srgb {
        let hls = rgb_to_hls(rgb);
        hls_to_rgb(Hls::new(
            self.target_hue,
            hls.lightness,
            hls.saturation * self.saturation_scale,
        ))
    }

    /// Remap every masked pixel of `image` in place
    ///
    /// Alpha and unmasked pixels are left untouched.
    ///
    /// # Errors
    ///
    /// Returns `RecolorError::InvalidParameter` if the mask dimensions do not
    /// match the image
    pub fn apply(&self, image: &mut Rgba32FImage, mask: &WhiteMask) -> Result<usize> {
        if image.dimensions() != mask.dimensions() {
            let (w, h) = mask.dimensions();
            return Err(RecolorError::invalid_parameter(
                "mask",
                format!(
                    "{}x{} does not match image {}x{}",
                    w,
                    h,
                    image.width(),
                    image.height()
                ),
            ));
        }

        let mut remapped = 0;
        for (pixel, &masked) in image.pixels_mut().zip(mask.as_slice()) {
            if !masked {
                continue;
            }
            let [r, g, b, _] = pixel.0;
            let out = self.remap(Srgb::new(r, g, b));
            pixel.0[0] = out.red;
            pixel.0[1] = out.green;
            pixel.0[2] = out.blue;
            remapped += 1;
        }

        debug!(
            "Remapped {} pixels to hue {:.4} (saturation x{})",
            remapped, self.target_hue, self.saturation_scale
        );
        Ok(remapped)
    }
}
