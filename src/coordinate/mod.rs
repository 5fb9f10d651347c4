//! Coordinate handling for GPS positions
//!
//! This module turns EXIF degrees/minutes/seconds encodings into decimal
//! degrees and tests decimal positions against a bounding rectangle.

mod bbox;
mod dms;
mod errors;
mod point;

// Re-export key types
pub use self::bbox::BoundingRectangle;
pub use self::dms::{convert, Axis, Hemisphere, RationalSextuple};
pub use self::errors::{CoordinateError, CoordinateResult};
pub use self::point::Coordinate;

/// Valid latitude range in decimal degrees
pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;

/// Valid longitude range in decimal degrees
pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;
