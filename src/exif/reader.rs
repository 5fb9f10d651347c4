//! EXIF reader implementation
//!
//! This module walks the TIFF structure of an EXIF block: IFD0, then the
//! EXIF and GPS sub-directories it points to. Every entry is materialized
//! into an [`ExifData`] so callers never touch the file again.

use log::{debug, trace, warn};
use std::fs::File;
use std::io::{BufReader, Read, SeekFrom};
use std::path::Path;

use crate::exif::constants::{header, limits, pointers};
use crate::exif::container;
use crate::exif::errors::{ExifError, ExifResult};
use crate::exif::ifd::{IFD, IFDEntry};
use crate::exif::tag_names;
use crate::exif::validation;
use crate::exif::value::{ExifData, TagCategory, TagValue};
use crate::io::byte_order::{ByteOrder, ByteOrderHandler};
use crate::io::seekable::{OffsetReader, SeekableReader};

/// Reader for EXIF blocks embedded in JPEG, PNG and TIFF files
#[derive(Default)]
pub struct ExifReader {
    /// Byte order of the current TIFF header
    byte_order: Option<ByteOrder>,
    /// Current byte order handler
    byte_order_handler: Option<Box<dyn ByteOrderHandler>>,
    /// Size of the current TIFF structure
    container_size: u64,
}

impl ExifReader {
    pub fn new() -> Self {
        ExifReader::default()
    }

    /// Returns the byte order handler, with proper error handling for None case
    fn handler(&self) -> ExifResult<&dyn ByteOrderHandler> {
        self.byte_order_handler
            .as_deref()
            .ok_or_else(|| ExifError::GenericError("Byte order not yet determined".to_string()))
    }

    fn byte_order(&self) -> ExifResult<ByteOrder> {
        self.byte_order
            .ok_or_else(|| ExifError::GenericError("Byte order not yet determined".to_string()))
    }

    /// Loads the EXIF block of the file at `path`
    pub fn load(&mut self, path: &Path) -> ExifResult<ExifData> {
        debug!("Reading EXIF metadata from {}", path.display());

        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        self.read(&mut reader)
    }

    /// Reads the EXIF block of a whole image file
    ///
    /// Locates the embedded TIFF header and reads it through an
    /// [`OffsetReader`] so stored offsets can be used unchanged.
    pub fn read(&mut self, reader: &mut dyn SeekableReader) -> ExifResult<ExifData> {
        let (kind, base) = container::locate_tiff_header(reader)?;
        trace!("TIFF header of {:?} container at offset {}", kind, base);

        let mut tiff_reader = OffsetReader::new(reader, base)?;
        self.read_tiff(&mut tiff_reader)
    }

    /// Reads a TIFF structure whose header starts at position 0 of `reader`
    pub fn read_tiff(&mut self, reader: &mut dyn SeekableReader) -> ExifResult<ExifData> {
        reader.seek(SeekFrom::Start(0))?;

        let byte_order = ByteOrder::detect(reader)?;
        debug!("Detected byte order: {}", byte_order.name());
        self.byte_order = Some(byte_order);
        self.byte_order_handler = Some(byte_order.create_handler());

        let version = self.handler()?.read_u16(reader)?;
        if version != header::TIFF_VERSION {
            return Err(ExifError::UnsupportedVersion(version));
        }

        let first_ifd_offset = self.handler()?.read_u32(reader)? as u64;
        self.container_size = validation::get_container_size(reader)?;
        validation::validate_ifd_offset(first_ifd_offset, self.container_size)?;

        let mut data = ExifData::new();

        let ifd0 = self.read_ifd(reader, first_ifd_offset, TagCategory::Primary)?;
        self.collect_values(reader, &ifd0, &mut data);

        for (pointer, category) in [(pointers::EXIF_IFD, TagCategory::Exif), (pointers::GPS_IFD, TagCategory::Gps)] {
            let Some(offset) = ifd0.get_tag_value(pointer) else {
                trace!("No {} directory", category);
                continue;
            };

            let sub_ifd = validation::validate_ifd_offset(offset as u64, self.container_size)
                .and_then(|_| self.read_ifd(reader, offset as u64, category));

            match sub_ifd {
                Ok(ifd) => self.collect_values(reader, &ifd, &mut data),
                Err(e) => {
                    warn!("Could not read {} directory at offset {}: {}", category, offset, e);
                    data.insert_corrupt(TagCategory::Primary, pointer, e.to_string());
                }
            }
        }

        debug!("Read {} EXIF tags", data.tag_count());
        Ok(data)
    }

    /// Reads the entries of one IFD
    pub fn read_ifd(&self, reader: &mut dyn SeekableReader, offset: u64, category: TagCategory) -> ExifResult<IFD> {
        reader.seek(SeekFrom::Start(offset))?;

        let handler = self.handler()?;
        let entry_count = handler.read_u16(reader)?;
        if entry_count > limits::MAX_IFD_ENTRIES {
            return Err(ExifError::GenericError(format!(
                "{} IFD declares {} entries", category, entry_count
            )));
        }
        trace!("{} IFD at offset {} has {} entries", category, offset, entry_count);

        let mut ifd = IFD::new(category, offset);
        for _ in 0..entry_count {
            let tag = handler.read_u16(reader)?;
            let field_type = handler.read_u16(reader)?;
            let count = handler.read_u32(reader)?;
            let value_offset = handler.read_u32(reader)?;

            ifd.add_entry(IFDEntry::new(tag, field_type, count, value_offset));
        }

        trace!("{}", ifd);
        Ok(ifd)
    }

    /// Materializes every entry of `ifd` into `data`
    ///
    /// An entry that cannot be decoded is recorded as corrupt; the rest
    /// of the directory is still collected.
    fn collect_values(&self, reader: &mut dyn SeekableReader, ifd: &IFD, data: &mut ExifData) {
        for entry in &ifd.entries {
            match self.read_entry_value(reader, entry) {
                Ok(value) => data.insert(ifd.category, entry.tag, value),
                Err(e) => {
                    debug!("Tag {} ({}) in {} IFD is unreadable: {}",
                           entry.tag, tag_names::get_tag_name(ifd.category, entry.tag), ifd.category, e);
                    data.insert_corrupt(ifd.category, entry.tag, e.to_string());
                }
            }
        }
    }

    /// Reads the raw bytes of one entry's value
    pub fn read_entry_value(&self, reader: &mut dyn SeekableReader, entry: &IFDEntry) -> ExifResult<TagValue> {
        let byte_order = self.byte_order()?;
        let len = entry
            .byte_len()
            .ok_or(ExifError::UnsupportedFieldType(entry.field_type))?;

        if len > limits::MAX_TAG_BYTES {
            return Err(ExifError::GenericError(format!("value of {} bytes is too large", len)));
        }

        let bytes = if entry.is_value_inline() {
            byte_order.u32_bytes(entry.value_offset)[..len as usize].to_vec()
        } else {
            let offset = entry.value_offset as u64;
            validation::validate_value_range(offset, len, self.container_size)?;

            reader.seek(SeekFrom::Start(offset))?;
            let mut bytes = vec![0u8; len as usize];
            reader.read_exact(&mut bytes)?;
            bytes
        };

        Ok(TagValue::new(entry.field_type, entry.count as u64, bytes, byte_order))
    }
}
