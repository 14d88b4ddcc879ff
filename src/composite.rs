//! Alpha compositing over opaque backgrounds
//!
//! `out = src * alpha + background * (1 - alpha)` per channel. The result
//! is fully opaque and carries no alpha channel.

use image::{Rgb, Rgb32FImage, Rgba32FImage};
use palette::Srgb;

use crate::constants::naming;

/// Background variants the recolored image is composited over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Background {
    /// Opaque white
    White,
    /// Near-white tint color
    Tinted,
}

impl Background {
    pub const ALL: [Background; 2] = [Background::White, Background::Tinted];

    /// File name suffix appended to the input stem
    pub fn suffix(&self) -> &'static str {
        match self {
            Background::White => naming::WHITE_SUFFIX,
            Background::Tinted => naming::TINTED_SUFFIX,
        }
    }

    /// Short key used when reporting outputs
    pub fn key(&self) -> &'static str {
        match self {
            Background::White => "white",
            Background::Tinted => "tint",
        }
    }
}

/// Composite `source` over a solid `background` color
pub fn composite_over(source: &Rgba32FImage, background: Srgb) -> Rgb32FImage {
    let bg = [background.red, background.green, background.blue];
    let mut out = Rgb32FImage::new(source.width(), source.height());

    for (dst, src) in out.pixels_mut().zip(source.pixels()) {
        let alpha = src.0[3];
        let blend = |i: usize| src.0[i] * alpha + bg[i] * (1.0 - alpha);
        *dst = Rgb([blend(0), blend(1), blend(2)]);
    }
    out
}

/// Opaque white background
pub fn white() -> Srgb {
    Srgb::new(1.0, 1.0, 1.0)
}
