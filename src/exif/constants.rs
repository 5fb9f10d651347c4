//! EXIF container format constants
//!
//! This module defines constants used throughout the EXIF processing code,
//! replacing magic numbers with descriptive names.

/// TIFF header constants
pub mod header {
    /// Standard TIFF version number (42)
    pub const TIFF_VERSION: u16 = 42;

    /// "II" byte order marker for little-endian
    pub const LITTLE_ENDIAN_MARKER: [u8; 2] = [0x49, 0x49];

    /// "MM" byte order marker for big-endian
    pub const BIG_ENDIAN_MARKER: [u8; 2] = [0x4D, 0x4D];

    /// Size of the classic TIFF header in bytes
    pub const HEADER_SIZE: u64 = 8;
}

/// JPEG segment markers
pub mod jpeg {
    /// Start of image
    pub const SOI: [u8; 2] = [0xFF, 0xD8];
    /// APP1 segment, carries EXIF
    pub const APP1: u8 = 0xE1;
    /// Start of scan, compressed data follows
    pub const SOS: u8 = 0xDA;
    /// End of image
    pub const EOI: u8 = 0xD9;
    /// Temporary marker without a length field
    pub const TEM: u8 = 0x01;
    /// First restart marker (RST0..RST7 carry no length field)
    pub const RST0: u8 = 0xD0;
    /// Last restart marker
    pub const RST7: u8 = 0xD7;
    /// Identifier that opens an EXIF APP1 payload
    pub const EXIF_IDENTIFIER: &[u8; 6] = b"Exif\0\0";
}

/// PNG chunk constants
pub mod png {
    /// Eight byte PNG file signature
    pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    /// Chunk holding a raw TIFF-structured EXIF block
    pub const EXIF_CHUNK: &[u8; 4] = b"eXIf";
    /// Chunk that opens the compressed image data
    pub const IDAT_CHUNK: &[u8; 4] = b"IDAT";
    /// Final chunk
    pub const IEND_CHUNK: &[u8; 4] = b"IEND";
}

/// Field types as defined by TIFF 6.0
pub mod field_types {
    pub const BYTE: u16 = 1;       // 8-bit unsigned integer
    pub const ASCII: u16 = 2;      // 8-bit byte containing ASCII character
    pub const SHORT: u16 = 3;      // 16-bit unsigned integer
    pub const LONG: u16 = 4;       // 32-bit unsigned integer
    pub const RATIONAL: u16 = 5;   // Two LONGs: numerator and denominator
    pub const SBYTE: u16 = 6;      // 8-bit signed integer
    pub const UNDEFINED: u16 = 7;  // 8-bit byte with unspecified format
    pub const SSHORT: u16 = 8;     // 16-bit signed integer
    pub const SLONG: u16 = 9;      // 32-bit signed integer
    pub const SRATIONAL: u16 = 10; // Two SLONGs: numerator and denominator
    pub const FLOAT: u16 = 11;     // Single precision IEEE floating point
    pub const DOUBLE: u16 = 12;    // Double precision IEEE floating point
}

/// Tags that link IFD0 to its sub-directories
pub mod pointers {
    pub const EXIF_IFD: u16 = 0x8769;
    pub const GPS_IFD: u16 = 0x8825;
}

/// GPS directory tags
pub mod gps {
    pub const VERSION_ID: u16 = 0x0000;
    pub const LATITUDE_REF: u16 = 0x0001;
    pub const LATITUDE: u16 = 0x0002;
    pub const LONGITUDE_REF: u16 = 0x0003;
    pub const LONGITUDE: u16 = 0x0004;
}

/// Limits applied while walking untrusted containers
pub mod limits {
    /// Largest tag payload materialized into memory
    pub const MAX_TAG_BYTES: u64 = 64 * 1024;
    /// Largest IFD entry count accepted
    pub const MAX_IFD_ENTRIES: u16 = 1024;
}
