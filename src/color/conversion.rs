//! Color space conversion utilities
//!
//! Provides the conversions used by the recolor pipeline:
//! - Hex strings to normalized sRGB and back
//! - sRGB to HLS (hue as a fraction of the color wheel) and back

use palette::convert::FromColorUnclamped;
use palette::{FromColor, Hsl, Srgb};
use crate::{RecolorError, Result};

/// Hue, lightness and saturation, all in [0, 1]
///
/// Hue is a fraction of the color wheel rather than degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hls {
    pub hue: f32,
    pub lightness: f32,
    pub saturation: f32,
}

impl Hls {
    pub fn new(hue: f32, lightness: f32, saturation: f32) -> Self {
        Self {
            hue,
            lightness,
            saturation,
        }
    }
}

/// Parse hexadecimal color string to normalized sRGB
///
/// # Arguments
///
/// * `hex` - Hex color string (e.g., "#6c6389" or "6c6389")
///
/// # Errors
///
/// Returns `RecolorError::InvalidColor` unless the string is exactly six hex
/// digits after an optional leading `#`
pub fn hex_to_rgb(hex: &str) -> Result<Srgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return Err(RecolorError::InvalidColor {
            value: hex.to_string(),
            reason: format!("expected 6 hex digits, got {}", digits.len()),
        });
    }
    if !digits.is_ascii() {
        return Err(RecolorError::InvalidColor {
            value: hex.to_string(),
            reason: "non-ASCII characters".to_string(),
        });
    }

    let channel = |range: std::ops::Range<usize>, name: &str| -> Result<f32> {
        u8::from_str_radix(&digits[range], 16)
            .map(|v| v as f32 / 255.0)
            .map_err(|e| RecolorError::InvalidColor {
                value: hex.to_string(),
                reason: format!("invalid {} value: {}", name, e),
            })
    };

    Ok(Srgb::new(
        channel(0..2, "red")?,
        channel(2..4, "green")?,
        channel(4..6, "blue")?,
    ))
}

/// Convert sRGB to hexadecimal color string (e.g., "#6C6389")
pub fn rgb_to_hex(rgb: Srgb) -> String {
    let to_byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02X}{:02X}{:02X}",
        to_byte(rgb.red),
        to_byte(rgb.green),
        to_byte(rgb.blue)
    )
}

/// Convert normalized sRGB to HLS
///
/// Achromatic colors get hue 0 and saturation 0.
pub fn rgb_to_hls(rgb: Srgb) -> Hls {
    let hsl: Hsl = Hsl::from_color(rgb);
    let hue = hsl.hue.into_positive_degrees() / 360.0;
    // into_positive_degrees can land on exactly 360 after float rounding
    let hue = if hue >= 1.0 { 0.0 } else { hue };
    Hls::new(hue, hsl.lightness, hsl.saturation)
}

/// Convert HLS back to sRGB
///
/// Saturation above 1 yields channels outside [0, 1]; they are kept as is
/// and only clamped when quantizing to 8-bit.
pub fn hls_to_rgb(hls: Hls) -> Srgb {
    let hsl: Hsl = Hsl::new(hls.hue * 360.0, hls.saturation, hls.lightness);
    Srgb::from_color_unclamped(hsl)
}
