//! Color conversion and remapping module
//!
//! This module handles hex parsing, RGB/HLS conversion and the
//! hue/saturation remap applied to non-white pixels.

pub mod conversion;
pub mod remap;

pub use conversion::{hex_to_rgb, hls_to_rgb, rgb_to_hex, rgb_to_hls, Hls};
pub use remap::HueRemapper;
