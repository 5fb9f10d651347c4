//! EXIF structure validation utilities
//!
//! Checks applied to offsets and sizes read from untrusted files before
//! they are followed.

use log::warn;
use std::io::SeekFrom;

use crate::exif::constants::header;
use crate::exif::errors::{ExifError, ExifResult};
use crate::io::seekable::SeekableReader;

/// Validates an IFD offset against the container size
pub fn validate_ifd_offset(offset: u64, container_size: u64) -> ExifResult<()> {
    if offset >= container_size || offset < header::HEADER_SIZE {
        return Err(ExifError::InvalidIfdOffset(offset));
    }

    Ok(())
}

/// Validates that `len` bytes starting at `offset` lie inside the container
pub fn validate_value_range(offset: u64, len: u64, container_size: u64) -> ExifResult<()> {
    match offset.checked_add(len) {
        Some(end) if end <= container_size => Ok(()),
        _ => Err(ExifError::GenericError(format!(
            "value at offset {} with length {} exceeds container size {}",
            offset, len, container_size
        ))),
    }
}

/// Gets the size of the container as seen by the reader
///
/// Restores the current position. Returns u64::MAX if the size cannot
/// be determined.
pub fn get_container_size(reader: &mut dyn SeekableReader) -> ExifResult<u64> {
    let current_position = reader.stream_position()?;
    let size = match reader.seek(SeekFrom::End(0)) {
        Ok(size) => size,
        Err(e) => {
            warn!("Could not determine container size: {}", e);
            u64::MAX
        }
    };
    reader.seek(SeekFrom::Start(current_position))?;

    Ok(size)
}
