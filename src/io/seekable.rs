//! Seekable reader trait and implementations
//!
//! This module provides a unified trait for readers that support both
//! reading and seeking operations, and a wrapper that rebases offsets
//! onto an embedded TIFF structure.

use std::io::{self, Read, Seek, SeekFrom};

/// Trait for readers that can both read and seek
///
/// This trait combines the Read and Seek traits for use with
/// various readers throughout the application.
pub trait SeekableReader: Read + Seek + Send + Sync {}

// Blanket implementation for any type that implements the required traits
impl<T: Read + Seek + Send + Sync> SeekableReader for T {}

/// Reader that exposes a window of an underlying stream starting at `base`
///
/// TIFF offsets inside a JPEG APP1 segment or a PNG eXIf chunk are relative
/// to the start of the TIFF header, not to the start of the file. Wrapping
/// the file reader in an `OffsetReader` lets the IFD walker use the offsets
/// exactly as stored.
pub struct OffsetReader<R> {
    inner: R,
    base: u64,
}

impl<R: Read + Seek> OffsetReader<R> {
    /// Creates a new reader whose position 0 maps to `base` in `inner`
    pub fn new(mut inner: R, base: u64) -> io::Result<Self> {
        inner.seek(SeekFrom::Start(base))?;
        Ok(OffsetReader { inner, base })
    }
}

impl<R: Read> Read for OffsetReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl<R: Seek> Seek for OffsetReader<R> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let absolute = match pos {
            SeekFrom::Start(offset) => {
                let target = self.base.checked_add(offset).ok_or_else(|| {
                    io::Error::new(io::ErrorKind::InvalidInput, "seek offset overflows")
                })?;
                self.inner.seek(SeekFrom::Start(target))?
            }
            other => self.inner.seek(other)?,
        };

        absolute.checked_sub(self.base).ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "seek before start of TIFF header")
        })
    }
}
