//! Error types for coordinate conversion

use std::fmt;

/// Coordinate-specific error types
#[derive(Debug, Clone, PartialEq)]
pub enum CoordinateError {
    /// DMS encoding that cannot be converted (zero denominator, too few parts)
    MalformedCoordinate(String),
    /// Direction byte that is not a valid hemisphere for the axis
    InvalidHemisphere(u8),
    /// Corners that do not form a non-empty, non-wrapping rectangle
    DegenerateRectangle,
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateError::MalformedCoordinate(msg) => write!(f, "malformed coordinate: {}", msg),
            CoordinateError::InvalidHemisphere(b) => write!(f, "invalid hemisphere indicator: {:?}", *b as char),
            CoordinateError::DegenerateRectangle => write!(f, "deformed bounding rectangle defined"),
        }
    }
}

impl std::error::Error for CoordinateError {}

/// Result type for coordinate operations
pub type CoordinateResult<T> = Result<T, CoordinateError>;
