//! Bounding rectangle for selecting positions

use std::fmt;

use super::errors::{CoordinateError, CoordinateResult};
use super::point::Coordinate;

/// An axis-aligned latitude/longitude rectangle
///
/// Defined by its top-left (north-west) and bottom-right (south-east)
/// corners. Rectangles crossing the antimeridian are not representable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingRectangle {
    lat_top_left: f64,
    lon_top_left: f64,
    lat_bottom_right: f64,
    lon_bottom_right: f64,
}

impl BoundingRectangle {
    /// Create a new bounding rectangle
    ///
    /// Fails unless the top edge lies strictly north of the bottom edge and
    /// the left edge strictly west of the right edge. NaN corners fail.
    pub fn new(lat_top_left: f64, lon_top_left: f64, lat_bottom_right: f64, lon_bottom_right: f64) -> CoordinateResult<Self> {
        if !(lat_top_left > lat_bottom_right && lon_top_left < lon_bottom_right) {
            return Err(CoordinateError::DegenerateRectangle);
        }

        Ok(BoundingRectangle {
            lat_top_left,
            lon_top_left,
            lat_bottom_right,
            lon_bottom_right,
        })
    }

    pub fn top_left(&self) -> Coordinate {
        Coordinate::new(self.lat_top_left, self.lon_top_left)
    }

    pub fn bottom_right(&self) -> Coordinate {
        Coordinate::new(self.lat_bottom_right, self.lon_bottom_right)
    }

    /// Check if this rectangle contains a point, edges included
    pub fn contains(&self, point: &Coordinate) -> bool {
        point.latitude <= self.lat_top_left
            && point.latitude >= self.lat_bottom_right
            && point.longitude >= self.lon_top_left
            && point.longitude <= self.lon_bottom_right
    }
}

impl fmt::Display for BoundingRectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.top_left(), self.bottom_right())
    }
}
