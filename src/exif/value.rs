//! Decoded tag values and the parsed metadata container

use std::collections::HashMap;
use std::fmt;
use std::io::Cursor;

use crate::exif::constants::field_types;
use crate::exif::errors::{ExifError, ExifResult};
use crate::io::byte_order::ByteOrder;

/// Directory a tag lives in
///
/// Tag ids are only unique within one directory: id 1 is
/// `GPSLatitudeRef` in the GPS IFD and something else entirely in IFD0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagCategory {
    /// IFD0, the primary image directory
    Primary,
    /// EXIF sub-IFD
    Exif,
    /// GPS sub-IFD
    Gps,
}

impl TagCategory {
    pub fn name(&self) -> &'static str {
        match self {
            TagCategory::Primary => "primary",
            TagCategory::Exif => "EXIF",
            TagCategory::Gps => "GPS",
        }
    }
}

impl fmt::Display for TagCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw value of a single tag
///
/// Keeps the bytes exactly as stored together with the field type and
/// byte order needed to interpret them.
#[derive(Debug, Clone, PartialEq)]
pub struct TagValue {
    field_type: u16,
    count: u64,
    bytes: Vec<u8>,
    byte_order: ByteOrder,
}

impl TagValue {
    /// Creates a tag value from its stored bytes
    pub fn new(field_type: u16, count: u64, bytes: Vec<u8>, byte_order: ByteOrder) -> Self {
        TagValue { field_type, count, bytes, byte_order }
    }

    /// Builds a little-endian RATIONAL array value
    pub fn from_rationals(rationals: &[(u32, u32)]) -> Self {
        let mut bytes = Vec::with_capacity(rationals.len() * 8);
        for (num, den) in rationals {
            bytes.extend_from_slice(&num.to_le_bytes());
            bytes.extend_from_slice(&den.to_le_bytes());
        }
        TagValue::new(field_types::RATIONAL, rationals.len() as u64, bytes, ByteOrder::LittleEndian)
    }

    /// Builds a NUL-terminated ASCII value
    pub fn from_ascii(text: &str) -> Self {
        let mut bytes = text.as_bytes().to_vec();
        bytes.push(0);
        TagValue::new(field_types::ASCII, bytes.len() as u64, bytes, ByteOrder::LittleEndian)
    }

    /// Raw byte view of the value
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Numeric view of a RATIONAL or SRATIONAL array
    ///
    /// Signed rationals with a negative component cannot be represented
    /// and are reported as corrupt by the caller.
    pub fn as_rationals(&self) -> ExifResult<Vec<(u32, u32)>> {
        let handler = self.byte_order.create_handler();
        let mut cursor = Cursor::new(self.bytes.as_slice());
        let mut values = Vec::with_capacity(self.bytes.len() / 8);

        match self.field_type {
            field_types::RATIONAL => {
                for _ in 0..self.count {
                    values.push(handler.read_rational(&mut cursor)?);
                }
            }
            field_types::SRATIONAL => {
                for _ in 0..self.count {
                    let (num, den) = handler.read_srational(&mut cursor)?;
                    let num = u32::try_from(num)
                        .map_err(|_| ExifError::GenericError(format!("negative rational numerator {}", num)))?;
                    let den = u32::try_from(den)
                        .map_err(|_| ExifError::GenericError(format!("negative rational denominator {}", den)))?;
                    values.push((num, den));
                }
            }
            other => return Err(ExifError::UnsupportedFieldType(other)),
        }

        Ok(values)
    }
}

/// State of a tag found in a directory
#[derive(Debug, Clone, PartialEq)]
pub enum TagEntry {
    /// Entry decoded successfully
    Present(TagValue),
    /// Entry exists but its value could not be read
    Corrupt(String),
}

/// Parsed metadata container of one file
#[derive(Debug, Clone, Default)]
pub struct ExifData {
    entries: HashMap<(TagCategory, u16), TagEntry>,
}

impl ExifData {
    pub fn new() -> Self {
        ExifData::default()
    }

    /// Records a decoded tag, replacing any earlier entry with the same id
    pub fn insert(&mut self, category: TagCategory, tag: u16, value: TagValue) {
        self.entries.insert((category, tag), TagEntry::Present(value));
    }

    /// Records a tag whose value could not be decoded
    pub fn insert_corrupt(&mut self, category: TagCategory, tag: u16, reason: impl Into<String>) {
        self.entries.insert((category, tag), TagEntry::Corrupt(reason.into()));
    }

    /// Builder-style variant of [`ExifData::insert`]
    pub fn with_tag(mut self, category: TagCategory, tag: u16, value: TagValue) -> Self {
        self.insert(category, tag, value);
        self
    }

    /// Builder-style variant of [`ExifData::insert_corrupt`]
    pub fn with_corrupt_tag(mut self, category: TagCategory, tag: u16, reason: &str) -> Self {
        self.insert_corrupt(category, tag, reason);
        self
    }

    /// Looks up a tag, distinguishing absent from corrupt entries
    pub fn read_tag(&self, category: TagCategory, tag: u16) -> ExifResult<&TagValue> {
        match self.entries.get(&(category, tag)) {
            Some(TagEntry::Present(value)) => Ok(value),
            Some(TagEntry::Corrupt(reason)) => Err(ExifError::CorruptTag(category, tag, reason.clone())),
            None => Err(ExifError::TagNotFound(category, tag)),
        }
    }

    pub fn has_tag(&self, category: TagCategory, tag: u16) -> bool {
        self.entries.contains_key(&(category, tag))
    }

    pub fn tag_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
