#![allow(dead_code)]

use assert_cmd::Command;
use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use std::fs;
use std::path::Path;

pub fn bound_command() -> Command {
    Command::cargo_bin("bound").unwrap()
}

/// Whole degrees and minutes as a DMS rational triple
pub fn dms(degrees: u32, minutes: u32) -> [(u32, u32); 3] {
    [(degrees, 1), (minutes, 1), (0, 1)]
}

/// Little-endian TIFF block: IFD0 pointing at a GPS IFD with the four position tags
pub fn gps_tiff(latitude: [(u32, u32); 3], lat_ref: u8, longitude: [(u32, u32); 3], lon_ref: u8) -> Vec<u8> {
    let gps_offset: u32 = 8 + 2 + 12 + 4;
    let data_offset: u32 = gps_offset + 2 + 12 * 4 + 4;

    let mut buffer = Vec::new();
    buffer.extend_from_slice(b"II");
    buffer.write_u16::<LittleEndian>(42).unwrap();
    buffer.write_u32::<LittleEndian>(8).unwrap();

    // IFD0: GPSInfoIFDPointer
    buffer.write_u16::<LittleEndian>(1).unwrap();
    buffer.write_u16::<LittleEndian>(0x8825).unwrap();
    buffer.write_u16::<LittleEndian>(4).unwrap();
    buffer.write_u32::<LittleEndian>(1).unwrap();
    buffer.write_u32::<LittleEndian>(gps_offset).unwrap();
    buffer.write_u32::<LittleEndian>(0).unwrap();

    // GPS IFD
    buffer.write_u16::<LittleEndian>(4).unwrap();
    write_ascii_entry(&mut buffer, 1, lat_ref);
    write_rational_entry(&mut buffer, 2, data_offset);
    write_ascii_entry(&mut buffer, 3, lon_ref);
    write_rational_entry(&mut buffer, 4, data_offset + 24);
    buffer.write_u32::<LittleEndian>(0).unwrap();

    for (num, den) in latitude.iter().chain(longitude.iter()) {
        buffer.write_u32::<LittleEndian>(*num).unwrap();
        buffer.write_u32::<LittleEndian>(*den).unwrap();
    }

    buffer
}

fn write_ascii_entry(buffer: &mut Vec<u8>, tag: u16, value: u8) {
    buffer.write_u16::<LittleEndian>(tag).unwrap();
    buffer.write_u16::<LittleEndian>(2).unwrap();
    buffer.write_u32::<LittleEndian>(2).unwrap();
    buffer.extend_from_slice(&[value, 0, 0, 0]);
}

fn write_rational_entry(buffer: &mut Vec<u8>, tag: u16, offset: u32) {
    buffer.write_u16::<LittleEndian>(tag).unwrap();
    buffer.write_u16::<LittleEndian>(5).unwrap();
    buffer.write_u32::<LittleEndian>(3).unwrap();
    buffer.write_u32::<LittleEndian>(offset).unwrap();
}

/// Minimal JPEG carrying the given TIFF block in an APP1 segment
pub fn jpeg_with_exif(tiff: &[u8]) -> Vec<u8> {
    let mut buffer = vec![0xFF, 0xD8, 0xFF, 0xE1];
    buffer.write_u16::<BigEndian>((2 + 6 + tiff.len()) as u16).unwrap();
    buffer.extend_from_slice(b"Exif\0\0");
    buffer.extend_from_slice(tiff);
    buffer.extend_from_slice(&[0xFF, 0xDA, 0x00, 0x02, 0xFF, 0xD9]);
    buffer
}

/// JPEG without any metadata segment
pub fn jpeg_without_exif() -> Vec<u8> {
    vec![0xFF, 0xD8, 0xFF, 0xDA, 0x00, 0x02, 0x12, 0x34, 0xFF, 0xD9]
}

/// Writes a geotagged JPEG into `dir`
pub fn write_tagged_jpeg(dir: &Path, name: &str, latitude: [(u32, u32); 3], lat_ref: u8, longitude: [(u32, u32); 3], lon_ref: u8) -> Vec<u8> {
    let bytes = jpeg_with_exif(&gps_tiff(latitude, lat_ref, longitude, lon_ref));
    fs::write(dir.join(name), &bytes).unwrap();
    bytes
}

/// Names of the entries in `dir`, sorted
pub fn dir_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
