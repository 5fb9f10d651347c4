//! Metadata accessor abstraction
//!
//! The GPS locator only needs to ask "what is tag X of directory Y in this
//! file". [`MetadataAccessor`] is that capability; [`ExifFileAccessor`]
//! answers it from real files, tests answer it from memory.

use std::path::Path;

use crate::exif::errors::ExifResult;
use crate::exif::reader::ExifReader;
use crate::exif::value::{ExifData, TagCategory, TagValue};

/// Source of parsed metadata containers
pub trait MetadataAccessor {
    /// Parses the metadata container of the file at `path`
    ///
    /// # Returns
    /// The decoded tags, `ExifError::NoMetadata` if the file has no
    /// container, or another error if the container is unreadable.
    fn read_container(&self, path: &Path) -> ExifResult<ExifData>;

    /// Reads a single tag of the file at `path`
    fn read_tag(&self, path: &Path, category: TagCategory, tag: u16) -> ExifResult<TagValue> {
        let data = self.read_container(path)?;
        data.read_tag(category, tag).cloned()
    }
}

impl<A: MetadataAccessor + ?Sized> MetadataAccessor for &A {
    fn read_container(&self, path: &Path) -> ExifResult<ExifData> {
        (**self).read_container(path)
    }
}

/// Accessor backed by [`ExifReader`]
#[derive(Debug, Default, Clone, Copy)]
pub struct ExifFileAccessor;

impl ExifFileAccessor {
    pub fn new() -> Self {
        ExifFileAccessor
    }
}

impl MetadataAccessor for ExifFileAccessor {
    fn read_container(&self, path: &Path) -> ExifResult<ExifData> {
        ExifReader::new().load(path)
    }
}
