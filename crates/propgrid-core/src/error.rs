//! Error types for propgrid-rs.

use thiserror::Error;

/// The main error type for propgrid-rs operations.
#[derive(Error, Debug)]
pub enum PropGridError {
    /// A bounded range was constructed with zero steps.
    #[error("step count must be at least 1")]
    ZeroStepCount,

    /// A bounded range was constructed with unusable bounds.
    #[error("invalid value bounds: min {min} must be finite and below max {max}")]
    InvalidBounds { min: f64, max: f64 },

    /// The requested combo-box selection is not a key of the action map.
    #[error("selection '{0}' is not in the action map")]
    UnknownSelection(String),

    /// An image file could not be read or decoded.
    #[error("failed to load image '{path}': {source}")]
    ImageLoad {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

/// A specialized Result type for propgrid-rs operations.
pub type Result<T> = std::result::Result<T, PropGridError>;
