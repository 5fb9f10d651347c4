//! Image File Directory (IFD) structures and methods
//!
//! EXIF metadata is stored as a small TIFF structure: IFD0 describes the
//! primary image and links to the EXIF and GPS sub-directories through
//! pointer tags. Each directory is a list of tag entries.

use std::collections::HashMap;
use std::fmt;
use log::trace;

use crate::exif::constants::field_types;
use crate::exif::tag_names;
use crate::exif::value::TagCategory;

/// Represents one Image File Directory of an EXIF block
#[derive(Debug, Clone)]
pub struct IFD {
    /// Entries in this IFD
    pub entries: Vec<IFDEntry>,
    /// Which directory this is
    pub category: TagCategory,
    /// Offset to this IFD, relative to the TIFF header
    pub offset: u64,
    /// Cached entries for quick lookup
    tag_map: HashMap<u16, IFDEntry>,
}

/// Represents an entry in an Image File Directory (IFD)
///
/// For values of four bytes or less, `value_offset` holds the value
/// itself; otherwise it is an offset to the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IFDEntry {
    /// Tag identifier
    pub tag: u16,
    /// Field type
    pub field_type: u16,
    /// Number of values
    pub count: u32,
    /// Value or offset to values
    pub value_offset: u32,
}

impl IFDEntry {
    pub fn new(tag: u16, field_type: u16, count: u32, value_offset: u32) -> Self {
        Self {
            tag,
            field_type,
            count,
            value_offset,
        }
    }

    /// Size in bytes of a single value of this entry's field type
    ///
    /// Returns `None` for field types outside the TIFF 6.0 set.
    pub fn field_type_size(&self) -> Option<u64> {
        match self.field_type {
            field_types::BYTE | field_types::ASCII | field_types::SBYTE | field_types::UNDEFINED => Some(1),
            field_types::SHORT | field_types::SSHORT => Some(2),
            field_types::LONG | field_types::SLONG | field_types::FLOAT => Some(4),
            field_types::RATIONAL | field_types::SRATIONAL | field_types::DOUBLE => Some(8),
            _ => None,
        }
    }

    /// Total payload size in bytes, if the field type is known
    pub fn byte_len(&self) -> Option<u64> {
        self.field_type_size().map(|size| size * self.count as u64)
    }

    /// Whether the payload is stored inline in `value_offset`
    pub fn is_value_inline(&self) -> bool {
        matches!(self.byte_len(), Some(len) if len <= 4)
    }
}

impl IFD {
    pub fn new(category: TagCategory, offset: u64) -> Self {
        Self {
            entries: Vec::new(),
            category,
            offset,
            tag_map: HashMap::new(),
        }
    }

    /// Adds an entry to this IFD
    ///
    /// A repeated tag replaces the earlier entry in the lookup cache.
    pub fn add_entry(&mut self, entry: IFDEntry) {
        trace!("Adding entry to {} IFD: tag {} ({}), type {}, count {}",
               self.category, entry.tag, tag_names::get_tag_name(self.category, entry.tag),
               entry.field_type, entry.count);

        self.tag_map.insert(entry.tag, entry.clone());
        self.entries.push(entry);
    }

    /// Gets an IFD entry by tag
    pub fn get_entry(&self, tag: u16) -> Option<&IFDEntry> {
        self.tag_map.get(&tag)
    }

    /// Gets the value/offset field of a tag directly
    pub fn get_tag_value(&self, tag: u16) -> Option<u32> {
        self.get_entry(tag).map(|entry| entry.value_offset)
    }

    pub fn has_tag(&self, tag: u16) -> bool {
        self.tag_map.contains_key(&tag)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Display for IFD {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} IFD (offset: {})", self.category, self.offset)?;
        writeln!(f, "  Number of entries: {}", self.entries.len())?;

        for entry in &self.entries {
            writeln!(f, "    {} ({}): {} [type {}, count {}]",
                     entry.tag, tag_names::get_tag_name(self.category, entry.tag),
                     entry.value_offset, entry.field_type, entry.count)?;
        }

        Ok(())
    }
}
