//! Pixel selection module
//!
//! Decides which pixels of the background receive the color remap.

pub mod mask;

pub use mask::WhiteMask;
