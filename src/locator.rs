//! GPS position lookup for a single file
//!
//! Reads the four GPS position tags through a [`MetadataAccessor`] and
//! converts them to a [`Coordinate`]. A file without a usable position is
//! an ordinary outcome, reported as `None`.

use log::debug;
use std::path::Path;

use crate::coordinate::{convert, Axis, Coordinate, CoordinateError, Hemisphere, RationalSextuple};
use crate::errors::BoundResult;
use crate::exif::constants::gps;
use crate::exif::{ExifData, ExifError, MetadataAccessor, TagCategory};

/// Locates files through a metadata accessor
pub struct GpsLocator<A> {
    accessor: A,
}

impl<A: MetadataAccessor> GpsLocator<A> {
    pub fn new(accessor: A) -> Self {
        GpsLocator { accessor }
    }

    /// Returns the GPS position of the file at `path`, if it has one
    ///
    /// Missing containers, missing or corrupt tags, malformed encodings and
    /// positions outside the geographic ranges all yield `None`.
    pub fn locate(&self, path: &Path) -> Option<Coordinate> {
        match self.try_locate(path) {
            Ok(coordinate) => {
                debug!("{} is at {}", path.display(), coordinate);
                Some(coordinate)
            }
            Err(e) => {
                debug!("No GPS position for {}: {}", path.display(), e);
                None
            }
        }
    }

    fn try_locate(&self, path: &Path) -> BoundResult<Coordinate> {
        let data = self.accessor.read_container(path)?;

        let latitude = read_sextuple(&data, gps::LATITUDE)?;
        let longitude = read_sextuple(&data, gps::LONGITUDE)?;
        let latitude_ref = read_indicator(&data, gps::LATITUDE_REF)?;
        let longitude_ref = read_indicator(&data, gps::LONGITUDE_REF)?;

        let coordinate = Coordinate::new(
            convert(&latitude, Hemisphere::for_axis(latitude_ref, Axis::Latitude)?)?,
            convert(&longitude, Hemisphere::for_axis(longitude_ref, Axis::Longitude)?)?,
        );

        if !coordinate.is_valid() {
            return Err(CoordinateError::MalformedCoordinate(format!("{} is out of range", coordinate)).into());
        }

        Ok(coordinate)
    }
}

fn read_sextuple(data: &ExifData, tag: u16) -> BoundResult<RationalSextuple> {
    let rationals = data.read_tag(TagCategory::Gps, tag)?.as_rationals()?;
    Ok(RationalSextuple::from_rationals(&rationals)?)
}

/// First byte of a reference tag
fn read_indicator(data: &ExifData, tag: u16) -> BoundResult<u8> {
    let value = data.read_tag(TagCategory::Gps, tag)?;
    value
        .as_bytes()
        .first()
        .copied()
        .ok_or_else(|| ExifError::CorruptTag(TagCategory::Gps, tag, "empty value".to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    use crate::exif::{ExifResult, TagValue};

    /// In-memory accessor keyed by path
    #[derive(Default)]
    struct FakeAccessor {
        files: HashMap<PathBuf, ExifData>,
    }

    impl FakeAccessor {
        fn with_file(mut self, name: &str, data: ExifData) -> Self {
            self.files.insert(PathBuf::from(name), data);
            self
        }
    }

    impl MetadataAccessor for FakeAccessor {
        fn read_container(&self, path: &Path) -> ExifResult<ExifData> {
            self.files.get(path).cloned().ok_or(ExifError::NoMetadata)
        }
    }

    fn gps_data(latitude: &[(u32, u32)], lat_ref: &str, longitude: &[(u32, u32)], lon_ref: &str) -> ExifData {
        ExifData::new()
            .with_tag(TagCategory::Gps, gps::LATITUDE, TagValue::from_rationals(latitude))
            .with_tag(TagCategory::Gps, gps::LATITUDE_REF, TagValue::from_ascii(lat_ref))
            .with_tag(TagCategory::Gps, gps::LONGITUDE, TagValue::from_rationals(longitude))
            .with_tag(TagCategory::Gps, gps::LONGITUDE_REF, TagValue::from_ascii(lon_ref))
    }

    fn complete() -> ExifData {
        gps_data(&[(38, 1), (0, 1), (0, 1)], "N", &[(121, 1), (30, 1), (0, 1)], "W")
    }

    fn without(tag: u16) -> ExifData {
        let full = complete();
        let mut data = ExifData::new();
        for t in [gps::LATITUDE, gps::LATITUDE_REF, gps::LONGITUDE, gps::LONGITUDE_REF] {
            if t != tag {
                data.insert(TagCategory::Gps, t, full.read_tag(TagCategory::Gps, t).unwrap().clone());
            }
        }
        data
    }

    fn locate_one(data: ExifData) -> Option<Coordinate> {
        let locator = GpsLocator::new(FakeAccessor::default().with_file("photo.jpg", data));
        locator.locate(Path::new("photo.jpg"))
    }

    #[test]
    fn test_accessor_reads_single_tag() {
        let accessor = FakeAccessor::default().with_file("photo.jpg", without(gps::LONGITUDE_REF));
        let path = Path::new("photo.jpg");

        let value = accessor.read_tag(path, TagCategory::Gps, gps::LATITUDE_REF).unwrap();
        assert_eq!(value.as_bytes(), b"N\0");
        assert!(matches!(
            accessor.read_tag(path, TagCategory::Gps, gps::LONGITUDE_REF),
            Err(ExifError::TagNotFound(TagCategory::Gps, gps::LONGITUDE_REF))
        ));
        assert!(matches!(
            accessor.read_tag(Path::new("other.jpg"), TagCategory::Gps, gps::LATITUDE),
            Err(ExifError::NoMetadata)
        ));
    }

    #[test]
    fn test_complete_tags_locate() {
        assert_eq!(locate_one(complete()), Some(Coordinate::new(38.0, -121.5)));
    }

    #[test]
    fn test_missing_latitude() {
        assert_eq!(locate_one(without(gps::LATITUDE)), None);
    }

    #[test]
    fn test_missing_longitude() {
        assert_eq!(locate_one(without(gps::LONGITUDE)), None);
    }

    #[test]
    fn test_missing_latitude_ref() {
        assert_eq!(locate_one(without(gps::LATITUDE_REF)), None);
    }

    #[test]
    fn test_missing_longitude_ref() {
        assert_eq!(locate_one(without(gps::LONGITUDE_REF)), None);
    }

    #[test]
    fn test_no_container() {
        let locator = GpsLocator::new(FakeAccessor::default());
        assert_eq!(locator.locate(Path::new("plain.png")), None);
    }

    #[test]
    fn test_corrupt_tag() {
        let data = complete().with_corrupt_tag(TagCategory::Gps, gps::LONGITUDE, "offset past end");
        assert_eq!(locate_one(data), None);
    }

    #[test]
    fn test_zero_denominator_is_unavailable() {
        let data = gps_data(&[(38, 0), (0, 1), (0, 1)], "N", &[(121, 1), (30, 1), (0, 1)], "W");
        assert_eq!(locate_one(data), None);
    }

    #[test]
    fn test_short_rational_array_is_unavailable() {
        let data = gps_data(&[(38, 1), (0, 1)], "N", &[(121, 1), (30, 1), (0, 1)], "W");
        assert_eq!(locate_one(data), None);
    }

    #[test]
    fn test_bad_hemisphere_is_unavailable() {
        let swapped = gps_data(&[(38, 1), (0, 1), (0, 1)], "W", &[(121, 1), (30, 1), (0, 1)], "N");
        assert_eq!(locate_one(swapped), None);

        let empty = gps_data(&[(38, 1), (0, 1), (0, 1)], "", &[(121, 1), (30, 1), (0, 1)], "W");
        // "" still carries its NUL terminator, which is not a direction
        assert_eq!(locate_one(empty), None);
    }

    #[test]
    fn test_out_of_range_is_unavailable() {
        let data = gps_data(&[(91, 1), (0, 1), (0, 1)], "S", &[(10, 1), (0, 1), (0, 1)], "E");
        assert_eq!(locate_one(data), None);
    }

    #[test]
    fn test_rational_tag_with_ascii_type_is_unavailable() {
        let data = complete().with_tag(TagCategory::Gps, gps::LATITUDE, TagValue::from_ascii("38"));
        assert_eq!(locate_one(data), None);
    }

    #[test]
    fn test_southern_eastern_position() {
        let data = gps_data(&[(33, 1), (52, 1), (0, 1)], "S", &[(151, 1), (12, 1), (36, 1)], "E");
        let coordinate = locate_one(data).unwrap();
        assert!((coordinate.latitude - (-(33.0 + 52.0 / 60.0))).abs() < 1e-12);
        assert!((coordinate.longitude - (151.0 + 12.0 / 60.0 + 36.0 / 3600.0)).abs() < 1e-12);
    }
}
