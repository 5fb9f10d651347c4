//! Locating the EXIF block inside an image file
//!
//! EXIF data is a TIFF structure. Bare TIFF files start with it; JPEG
//! files carry it in an APP1 segment opened by `Exif\0\0`; PNG files carry
//! it in an `eXIf` chunk. Anything else has no metadata container.

use byteorder::{BigEndian, ReadBytesExt};
use log::{debug, trace};
use std::io::{self, Read, SeekFrom};

use crate::exif::constants::{header, jpeg, png};
use crate::exif::errors::{ExifError, ExifResult};
use crate::io::seekable::SeekableReader;

/// File layouts that can carry an EXIF block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Jpeg,
    Png,
    Tiff,
}

/// Finds the offset of the embedded TIFF header
///
/// # Returns
/// The container kind and the absolute offset of the TIFF header, or
/// `ExifError::NoMetadata` when the file has no EXIF block.
pub fn locate_tiff_header(reader: &mut dyn SeekableReader) -> ExifResult<(ContainerKind, u64)> {
    reader.seek(SeekFrom::Start(0))?;

    let mut magic = [0u8; 8];
    let read = read_up_to(reader, &mut magic)?;

    if read >= 2 && magic[..2] == jpeg::SOI {
        let base = eof_as_missing(scan_jpeg(reader))?;
        debug!("EXIF block found in JPEG APP1 segment at offset {}", base);
        Ok((ContainerKind::Jpeg, base))
    } else if read == 8 && magic == png::SIGNATURE {
        let base = eof_as_missing(scan_png(reader))?;
        debug!("EXIF block found in PNG eXIf chunk at offset {}", base);
        Ok((ContainerKind::Png, base))
    } else if read >= 2 && (magic[..2] == header::LITTLE_ENDIAN_MARKER || magic[..2] == header::BIG_ENDIAN_MARKER) {
        Ok((ContainerKind::Tiff, 0))
    } else {
        Err(ExifError::NoMetadata)
    }
}

/// Walks JPEG marker segments up to the start of scan
fn scan_jpeg(reader: &mut dyn SeekableReader) -> ExifResult<u64> {
    let mut position = jpeg::SOI.len() as u64;

    loop {
        reader.seek(SeekFrom::Start(position))?;

        if reader.read_u8()? != 0xFF {
            debug!("JPEG marker expected at offset {}", position);
            return Err(ExifError::NoMetadata);
        }

        // Any number of 0xFF fill bytes may precede the marker code
        let mut marker = reader.read_u8()?;
        while marker == 0xFF {
            marker = reader.read_u8()?;
        }
        trace!("JPEG marker {:#04x} at offset {}", marker, position);

        match marker {
            jpeg::SOS | jpeg::EOI => return Err(ExifError::NoMetadata),
            jpeg::TEM | jpeg::RST0..=jpeg::RST7 => {
                position = reader.stream_position()?;
                continue;
            }
            _ => {}
        }

        let segment_start = reader.stream_position()?;
        let length = reader.read_u16::<BigEndian>()? as u64;
        if length < 2 {
            return Err(ExifError::NoMetadata);
        }

        if marker == jpeg::APP1 && length >= 2 + jpeg::EXIF_IDENTIFIER.len() as u64 + header::HEADER_SIZE {
            let mut identifier = [0u8; 6];
            reader.read_exact(&mut identifier)?;
            if &identifier == jpeg::EXIF_IDENTIFIER {
                return Ok(segment_start + 2 + jpeg::EXIF_IDENTIFIER.len() as u64);
            }
        }

        position = segment_start + length;
    }
}

/// Walks PNG chunks looking for `eXIf`
fn scan_png(reader: &mut dyn SeekableReader) -> ExifResult<u64> {
    let mut position = png::SIGNATURE.len() as u64;

    loop {
        reader.seek(SeekFrom::Start(position))?;

        let length = reader.read_u32::<BigEndian>()? as u64;
        let mut chunk_type = [0u8; 4];
        reader.read_exact(&mut chunk_type)?;
        trace!("PNG chunk {:?} ({} bytes) at offset {}", String::from_utf8_lossy(&chunk_type), length, position);

        if &chunk_type == png::EXIF_CHUNK {
            return Ok(position + 8);
        }
        if &chunk_type == png::IEND_CHUNK {
            return Err(ExifError::NoMetadata);
        }
        if &chunk_type == png::IDAT_CHUNK {
            trace!("Image data reached before eXIf, continuing scan");
        }

        // length, type, data, CRC
        position += 8 + length + 4;
    }
}

/// Reads as many bytes as are available, up to the buffer size
fn read_up_to(reader: &mut dyn SeekableReader, buffer: &mut [u8]) -> ExifResult<usize> {
    let mut filled = 0;
    while filled < buffer.len() {
        match reader.read(&mut buffer[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}

/// A truncated container simply has no usable metadata
fn eof_as_missing(result: ExifResult<u64>) -> ExifResult<u64> {
    match result {
        Err(ExifError::IoError(e)) if e.kind() == io::ErrorKind::UnexpectedEof => Err(ExifError::NoMetadata),
        other => other,
    }
}
