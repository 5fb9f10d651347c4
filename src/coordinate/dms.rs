//! Degrees/minutes/seconds conversion

use super::errors::{CoordinateError, CoordinateResult};

/// Which axis a hemisphere indicator belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

/// Hemisphere decoded from an EXIF reference character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// Decodes a direction character (`N`, `S`, `E` or `W`)
    pub fn from_indicator(indicator: u8) -> CoordinateResult<Self> {
        match indicator {
            b'N' => Ok(Hemisphere::North),
            b'S' => Ok(Hemisphere::South),
            b'E' => Ok(Hemisphere::East),
            b'W' => Ok(Hemisphere::West),
            other => Err(CoordinateError::InvalidHemisphere(other)),
        }
    }

    /// Decodes a direction character that must belong to `axis`
    ///
    /// `E` is not a valid latitude reference and `N` is not a valid
    /// longitude reference.
    pub fn for_axis(indicator: u8, axis: Axis) -> CoordinateResult<Self> {
        let hemisphere = Self::from_indicator(indicator)?;
        if hemisphere.axis() != axis {
            return Err(CoordinateError::InvalidHemisphere(indicator));
        }
        Ok(hemisphere)
    }

    pub fn axis(&self) -> Axis {
        match self {
            Hemisphere::North | Hemisphere::South => Axis::Latitude,
            Hemisphere::East | Hemisphere::West => Axis::Longitude,
        }
    }

    /// +1 for North/East, -1 for South/West
    pub fn sign(&self) -> f64 {
        match self {
            Hemisphere::North | Hemisphere::East => 1.0,
            Hemisphere::South | Hemisphere::West => -1.0,
        }
    }
}

/// Three unsigned rationals: degrees, minutes, seconds
///
/// Stored as `[deg_num, deg_den, min_num, min_den, sec_num, sec_den]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RationalSextuple([u32; 6]);

impl RationalSextuple {
    pub fn new(parts: [u32; 6]) -> Self {
        RationalSextuple(parts)
    }

    /// Builds a sextuple from the first three rationals of a tag value
    pub fn from_rationals(rationals: &[(u32, u32)]) -> CoordinateResult<Self> {
        match rationals {
            [(dn, dd), (mn, md), (sn, sd), ..] => Ok(RationalSextuple([*dn, *dd, *mn, *md, *sn, *sd])),
            _ => Err(CoordinateError::MalformedCoordinate(format!(
                "expected 3 rationals, found {}",
                rationals.len()
            ))),
        }
    }

    pub fn parts(&self) -> [u32; 6] {
        self.0
    }
}

/// Converts a DMS sextuple to signed decimal degrees
///
/// No rounding and no range clamping is applied. A zero denominator is
/// reported as `MalformedCoordinate`.
pub fn convert(sextuple: &RationalSextuple, hemisphere: Hemisphere) -> CoordinateResult<f64> {
    let [dn, dd, mn, md, sn, sd] = sextuple.parts();

    if dd == 0 || md == 0 || sd == 0 {
        return Err(CoordinateError::MalformedCoordinate(format!(
            "zero denominator in {}/{} {}/{} {}/{}",
            dn, dd, mn, md, sn, sd
        )));
    }

    let degrees = dn as f64 / dd as f64;
    let minutes = mn as f64 / md as f64;
    let seconds = sn as f64 / sd as f64;

    Ok(hemisphere.sign() * (degrees + minutes / 60.0 + seconds / 3600.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected(parts: [u32; 6]) -> f64 {
        let [dn, dd, mn, md, sn, sd] = parts;
        dn as f64 / dd as f64 + (mn as f64 / md as f64) / 60.0 + (sn as f64 / sd as f64) / 3600.0
    }

    fn samples() -> Vec<[u32; 6]> {
        vec![
            [0, 1, 0, 1, 0, 1],
            [38, 1, 0, 1, 0, 1],
            [37, 1, 52, 1, 1234, 100],
            [122, 1, 15, 1, 30, 1],
            [4607, 100, 0, 1, 0, 1],
            [90, 1, 0, 1, 0, 1],
            [179, 1, 59, 1, 5999, 100],
            [u32::MAX, u32::MAX, 1, 3, 7, 9],
        ]
    }

    #[test]
    fn test_north_east_is_non_negative_sum() {
        for parts in samples() {
            let sextuple = RationalSextuple::new(parts);
            for hemisphere in [Hemisphere::North, Hemisphere::East] {
                let value = convert(&sextuple, hemisphere).unwrap();
                assert!(value >= 0.0);
                assert!((value - expected(parts)).abs() < 1e-12, "{:?}: {}", parts, value);
            }
        }
    }

    #[test]
    fn test_south_west_negates() {
        for parts in samples() {
            let sextuple = RationalSextuple::new(parts);
            let north = convert(&sextuple, Hemisphere::North).unwrap();
            assert_eq!(convert(&sextuple, Hemisphere::South).unwrap(), -north);
            assert_eq!(convert(&sextuple, Hemisphere::West).unwrap(), -north);
        }
    }

    #[test]
    fn test_known_values() {
        let half = RationalSextuple::new([121, 1, 30, 1, 0, 1]);
        assert_eq!(convert(&half, Hemisphere::West).unwrap(), -121.5);

        let quarter_minute = RationalSextuple::new([0, 1, 0, 1, 900, 1]);
        assert_eq!(convert(&quarter_minute, Hemisphere::North).unwrap(), 0.25);
    }

    #[test]
    fn test_no_clamping() {
        let beyond = RationalSextuple::new([200, 1, 0, 1, 0, 1]);
        assert_eq!(convert(&beyond, Hemisphere::North).unwrap(), 200.0);
    }

    #[test]
    fn test_zero_denominator_is_malformed() {
        for index in [1, 3, 5] {
            let mut parts = [10, 1, 20, 1, 30, 1];
            parts[index] = 0;
            let result = convert(&RationalSextuple::new(parts), Hemisphere::North);
            assert!(matches!(result, Err(CoordinateError::MalformedCoordinate(_))), "index {}", index);
        }
    }

    #[test]
    fn test_from_rationals() {
        let sextuple = RationalSextuple::from_rationals(&[(1, 2), (3, 4), (5, 6)]).unwrap();
        assert_eq!(sextuple.parts(), [1, 2, 3, 4, 5, 6]);

        let extra = RationalSextuple::from_rationals(&[(1, 1), (2, 1), (3, 1), (9, 9)]).unwrap();
        assert_eq!(extra.parts(), [1, 1, 2, 1, 3, 1]);

        assert!(RationalSextuple::from_rationals(&[(1, 1), (2, 1)]).is_err());
        assert!(RationalSextuple::from_rationals(&[]).is_err());
    }

    #[test]
    fn test_hemisphere_indicators() {
        assert_eq!(Hemisphere::from_indicator(b'N').unwrap(), Hemisphere::North);
        assert_eq!(Hemisphere::from_indicator(b'W').unwrap(), Hemisphere::West);
        assert!(Hemisphere::from_indicator(b'n').is_err());
        assert!(Hemisphere::from_indicator(0).is_err());

        assert!(Hemisphere::for_axis(b'S', Axis::Latitude).is_ok());
        assert!(Hemisphere::for_axis(b'E', Axis::Latitude).is_err());
        assert!(Hemisphere::for_axis(b'N', Axis::Longitude).is_err());
    }
}
