//! Error types for the pastel_recolor library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pastel_recolor operations
pub type Result<T> = std::result::Result<T, RecolorError>;

/// Error types for the recolor pipeline
#[derive(Error, Debug)]
pub enum RecolorError {
    /// Input image does not exist
    #[error("Input file not found: {}", .path.display())]
    InputNotFound { path: PathBuf },

    /// Image file could not be opened or decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Output image could not be encoded or written
    #[error("Failed to encode image: {message}")]
    ImageEncodeError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Hex color string is malformed
    #[error("Invalid color '{value}': {reason}")]
    InvalidColor { value: String, reason: String },

    /// Invalid configuration parameter
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Configuration file could not be parsed or serialized
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Filesystem operation failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RecolorError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an image encode error with context
    pub fn image_encode<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageEncodeError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with context
    pub fn config(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::ConfigError {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create an I/O error tied to a path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Whether the error was caused by user input rather than the codec or filesystem
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            RecolorError::InputNotFound { .. }
                | RecolorError::InvalidColor { .. }
                | RecolorError::InvalidParameter { .. }
        )
    }

    /// Get user-friendly error description for CLI display
    pub fn user_message(&self) -> String {
        match self {
            RecolorError::InputNotFound { path } => {
                format!("Input file not found: {}", path.display())
            }
            RecolorError::ImageLoadError { .. } => {
                "Could not load the image. Please check the file format and try again.".to_string()
            }
            RecolorError::ImageEncodeError { .. } => {
                "Could not write the output images. Please check the output directory.".to_string()
            }
            RecolorError::InvalidColor { value, .. } => {
                format!("'{}' is not a valid color. Use six hex digits, e.g. #6c6389.", value)
            }
            RecolorError::InvalidParameter { parameter, value } => {
                format!("Parameter '{}' has an invalid value: {}", parameter, value)
            }
            _ => "Recoloring failed. Please try again.".to_string(),
        }
    }
}
