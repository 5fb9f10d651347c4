//! EXIF metadata parsing module
//!
//! This module provides structures and functions for reading the
//! TIFF-structured EXIF block embedded in image files.

pub mod accessor;
pub mod constants;
pub mod container;
pub mod errors;
pub mod ifd;
pub mod reader;
pub mod tag_names;
pub mod value;
pub(crate) mod validation;
#[cfg(test)]
mod tests;

pub use accessor::{ExifFileAccessor, MetadataAccessor};
pub use container::ContainerKind;
pub use errors::{ExifError, ExifResult};
pub use ifd::{IFD, IFDEntry};
pub use reader::ExifReader;
pub use value::{ExifData, TagCategory, TagEntry, TagValue};
