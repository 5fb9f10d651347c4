//! Tests for the byte order module

use std::io::Cursor;
use byteorder::{BigEndian, LittleEndian, WriteBytesExt};

use crate::io::byte_order::{BigEndianHandler, ByteOrder, ByteOrderHandler, LittleEndianHandler};

#[test]
fn test_byte_order_detection_little_endian() {
    let mut cursor = Cursor::new(vec![0x49, 0x49]);
    assert_eq!(ByteOrder::detect(&mut cursor).unwrap(), ByteOrder::LittleEndian);
}

#[test]
fn test_byte_order_detection_big_endian() {
    let mut cursor = Cursor::new(vec![0x4D, 0x4D]);
    assert_eq!(ByteOrder::detect(&mut cursor).unwrap(), ByteOrder::BigEndian);
}

#[test]
fn test_byte_order_detection_invalid() {
    let mut buffer = Vec::new();
    buffer.write_u16::<LittleEndian>(0x1234).unwrap();
    let mut cursor = Cursor::new(buffer);

    assert!(ByteOrder::detect(&mut cursor).is_err());
}

#[test]
fn test_little_endian_handler() {
    let mut buffer = Vec::new();
    buffer.write_u16::<LittleEndian>(0x1234).unwrap();
    buffer.write_u32::<LittleEndian>(0x12345678).unwrap();
    buffer.write_u32::<LittleEndian>(4607).unwrap();
    buffer.write_u32::<LittleEndian>(100).unwrap();
    let mut cursor = Cursor::new(buffer);

    let handler = LittleEndianHandler;

    assert_eq!(handler.read_u16(&mut cursor).unwrap(), 0x1234);
    assert_eq!(handler.read_u32(&mut cursor).unwrap(), 0x12345678);
    assert_eq!(handler.read_rational(&mut cursor).unwrap(), (4607, 100));
}

#[test]
fn test_big_endian_handler() {
    let mut buffer = Vec::new();
    buffer.write_u16::<BigEndian>(0x1234).unwrap();
    buffer.write_u32::<BigEndian>(0x12345678).unwrap();
    buffer.write_i32::<BigEndian>(-3).unwrap();
    buffer.write_i32::<BigEndian>(2).unwrap();
    let mut cursor = Cursor::new(buffer);

    let handler = BigEndianHandler;

    assert_eq!(handler.read_u16(&mut cursor).unwrap(), 0x1234);
    assert_eq!(handler.read_u32(&mut cursor).unwrap(), 0x12345678);
    assert_eq!(handler.read_srational(&mut cursor).unwrap(), (-3, 2));
}

#[test]
fn test_inline_bytes_round_trip_through_u32() {
    // 'N' followed by NUL padding, as stored in an ASCII entry
    let raw = [b'N', 0, 0, 0];
    let le = u32::from_le_bytes(raw);
    let be = u32::from_be_bytes(raw);

    assert_eq!(ByteOrder::LittleEndian.u32_bytes(le), raw);
    assert_eq!(ByteOrder::BigEndian.u32_bytes(be), raw);
}
