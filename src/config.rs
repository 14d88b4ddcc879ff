//! Configuration for the recolor pipeline.
//!
//! All tunable parameters live in [`RecolorConfig`]. Defaults reproduce
//! the pastel lilac look; any field may be overridden from JSON or the CLI.
//!
//! ```no_run
//! use pastel_recolor::RecolorConfig;
//! use std::path::Path;
//!
//! // Load from file (missing fields fall back to defaults)
//! let config = RecolorConfig::from_json_file(Path::new("recolor.json"))?;
//!
//! // Or use defaults
//! let config = RecolorConfig::default();
//! # Ok::<(), pastel_recolor::RecolorError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::color::conversion::hex_to_rgb;
use crate::constants::defaults;
use crate::{RecolorError, Result};

/// Complete parameter set for one recolor run.
///
/// Serialized to/from JSON for reproducible runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecolorConfig {
    /// Color whose hue every non-white pixel takes
    pub target_hex: String,

    /// Alternate near-white background
    pub tint_hex: String,

    /// Pixels with R, G and B all above this are left alone (0.0-1.0)
    pub white_threshold: f32,

    /// Multiplier for the saturation of recolored pixels
    pub saturation_scale: f32,

    /// Lossy WebP quality (0-100)
    pub webp_quality: f32,
}

impl Default for RecolorConfig {
    fn default() -> Self {
        Self {
            target_hex: defaults::TARGET_HEX.to_string(),
            tint_hex: defaults::TINT_HEX.to_string(),
            white_threshold: defaults::WHITE_THRESHOLD,
            saturation_scale: defaults::SATURATION_SCALE,
            webp_quality: defaults::WEBP_QUALITY,
        }
    }
}

impl RecolorConfig {
    /// Check every parameter, including that both colors parse
    pub fn validate(&self) -> Result<()> {
        hex_to_rgb(&self.target_hex)?;
        hex_to_rgb(&self.tint_hex)?;

        if !(0.0..=1.0).contains(&self.white_threshold) {
            return Err(RecolorError::invalid_parameter(
                "white_threshold",
                self.white_threshold,
            ));
        }
        if !self.saturation_scale.is_finite() || self.saturation_scale < 0.0 {
            return Err(RecolorError::invalid_parameter(
                "saturation_scale",
                self.saturation_scale,
            ));
        }
        if !(0.0..=100.0).contains(&self.webp_quality) {
            return Err(RecolorError::invalid_parameter(
                "webp_quality",
                self.webp_quality,
            ));
        }
        Ok(())
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| RecolorError::io(path, e))?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            RecolorError::config(format!("Failed to parse {}", path.display()), e)
        })?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| RecolorError::config("Failed to serialize configuration", e))?;
        std::fs::write(path, json).map_err(|e| RecolorError::io(path, e))?;
        Ok(())
    }
}
