//! Platform error types

use thiserror::Error;

/// Errors raised while validating host-supplied configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlatformError {
    /// Display density must be a positive, finite scale factor
    #[error("Invalid display density: {0}")]
    InvalidDensity(f32),

    /// A distance or speed threshold was negative or not finite
    #[error("Invalid value for {name}: {value}")]
    InvalidThreshold {
        /// Name of the offending field
        name: &'static str,
        /// Value that was rejected
        value: f32,
    },

    /// Minimum fling speed exceeds the maximum
    #[error("Minimum fling speed {min} exceeds maximum {max}")]
    FlingRange {
        /// Configured minimum fling speed (px/s)
        min: i32,
        /// Configured maximum fling speed (px/s)
        max: i32,
    },
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
