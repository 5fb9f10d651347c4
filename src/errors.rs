//! Application-level error type

use std::fmt;
use std::io;

use crate::coordinate::CoordinateError;
use crate::exif::ExifError;

/// Errors surfaced by the bound pipeline
#[derive(Debug)]
pub enum BoundError {
    /// Invalid command line input; always fatal
    Config(String),
    /// Metadata container could not be read
    Exif(ExifError),
    /// Coordinate could not be derived
    Coordinate(CoordinateError),
    /// I/O error outside of metadata reading
    Io(io::Error),
}

impl fmt::Display for BoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundError::Config(msg) => write!(f, "{}", msg),
            BoundError::Exif(e) => write!(f, "{}", e),
            BoundError::Coordinate(e) => write!(f, "{}", e),
            BoundError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for BoundError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BoundError::Exif(e) => Some(e),
            BoundError::Coordinate(e) => Some(e),
            BoundError::Io(e) => Some(e),
            BoundError::Config(_) => None,
        }
    }
}

impl From<ExifError> for BoundError {
    fn from(error: ExifError) -> Self {
        BoundError::Exif(error)
    }
}

impl From<CoordinateError> for BoundError {
    fn from(error: CoordinateError) -> Self {
        BoundError::Coordinate(error)
    }
}

impl From<io::Error> for BoundError {
    fn from(error: io::Error) -> Self {
        BoundError::Io(error)
    }
}

/// Result type for bound operations
pub type BoundResult<T> = Result<T, BoundError>;
