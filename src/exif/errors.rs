//! Custom error types for EXIF container processing

use std::fmt;
use std::io;

use crate::exif::tag_names;
use crate::exif::value::TagCategory;

/// EXIF-specific error types
#[derive(Debug)]
pub enum ExifError {
    /// I/O error
    IoError(io::Error),
    /// The file carries no recognizable metadata container
    NoMetadata,
    /// Invalid byte order marker
    InvalidByteOrder(u16),
    /// Unsupported TIFF version in the EXIF header
    UnsupportedVersion(u16),
    /// IFD offset pointing outside the container
    InvalidIfdOffset(u64),
    /// Tag not present in the requested directory
    TagNotFound(TagCategory, u16),
    /// Tag present but its entry could not be decoded
    CorruptTag(TagCategory, u16, String),
    /// Unsupported field type
    UnsupportedFieldType(u16),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for ExifError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExifError::IoError(e) => write!(f, "I/O error: {}", e),
            ExifError::NoMetadata => write!(f, "No EXIF metadata container found"),
            ExifError::InvalidByteOrder(v) => write!(f, "Invalid byte order marker: {:#06x}", v),
            ExifError::UnsupportedVersion(v) => write!(f, "Unsupported TIFF version: {}", v),
            ExifError::InvalidIfdOffset(o) => write!(f, "Invalid IFD offset: {}", o),
            ExifError::TagNotFound(category, tag) => write!(
                f,
                "Tag not found: {} ({}) in {} directory",
                tag,
                tag_names::get_tag_name(*category, *tag),
                category.name()
            ),
            ExifError::CorruptTag(category, tag, reason) => write!(
                f,
                "Corrupt tag {} ({}) in {} directory: {}",
                tag,
                tag_names::get_tag_name(*category, *tag),
                category.name(),
                reason
            ),
            ExifError::UnsupportedFieldType(ft) => write!(f, "Unsupported field type: {}", ft),
            ExifError::GenericError(msg) => write!(f, "EXIF error: {}", msg),
        }
    }
}

impl std::error::Error for ExifError {}

impl From<io::Error> for ExifError {
    fn from(error: io::Error) -> Self {
        ExifError::IoError(error)
    }
}

impl From<String> for ExifError {
    fn from(msg: String) -> Self {
        ExifError::GenericError(msg)
    }
}

/// Result type for EXIF operations
pub type ExifResult<T> = Result<T, ExifError>;
