//! Default parameters and fixed naming for the recolor pipeline
//!
//! The numeric defaults are kept exactly as tuned for the original
//! watercolor backgrounds.

/// Default transform parameters
pub mod defaults {
    /// Target hue color (pastel lilac)
    pub const TARGET_HEX: &str = "#6c6389";

    /// Near-white tint used as the alternate background
    pub const TINT_HEX: &str = "#fbf6f7";

    /// Pixels with R, G and B all above this value count as white.
    ///
    /// Slightly off-white antialiased edges stay below it and get tinted.
    pub const WHITE_THRESHOLD: f32 = 240.0 / 255.0;

    /// Saturation multiplier applied to recolored pixels
    pub const SATURATION_SCALE: f32 = 0.55;

    /// Lossy WebP quality (0-100)
    pub const WEBP_QUALITY: f32 = 90.0;
}

/// Input location and output file naming
pub mod naming {
    /// Default input image, relative to the working directory
    pub const DEFAULT_INPUT: &str = "assets/backgrounds/BG1.png";

    /// Suffix for the composite over opaque white
    pub const WHITE_SUFFIX: &str = "_pastel_lilac_white";

    /// Suffix for the composite over the tint color
    pub const TINTED_SUFFIX: &str = "_pastel_lilac_tinted";

    pub const PNG_EXTENSION: &str = "png";
    pub const WEBP_EXTENSION: &str = "webp";
}
