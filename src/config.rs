//! Validated run configuration
//!
//! Turns raw command line values into a [`BoundConfig`]. Checks run in a
//! fixed order and the first failure is reported; every failure is a
//! fatal [`BoundError::Config`].

use clap::ArgMatches;
use std::fs;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use crate::binder::BindOptions;
use crate::coordinate::{Axis, BoundingRectangle, LATITUDE_RANGE, LONGITUDE_RANGE};
use crate::errors::{BoundError, BoundResult};

/// Names of the positional coordinate arguments, in command line order
pub const COORDINATE_ARGS: [&str; 4] = ["lat-top-left", "lon-top-left", "lat-bottom-right", "lon-bottom-right"];

/// Immutable settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct BoundConfig {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub rectangle: BoundingRectangle,
    pub options: BindOptions,
}

impl BoundConfig {
    /// Builds the configuration from parsed CLI arguments
    pub fn from_args(args: &ArgMatches) -> BoundResult<Self> {
        let source = args.get_one::<String>("source").map(String::as_str);
        let destination = args.get_one::<String>("destination").map(String::as_str);
        let coordinates: Vec<&str> = COORDINATE_ARGS
            .iter()
            .filter_map(|name| args.get_one::<String>(name).map(String::as_str))
            .collect();

        let options = BindOptions {
            dry_run: args.get_flag("dry-run"),
            show_progress: args.get_flag("progress"),
        };

        Self::from_values(source, destination, &coordinates, options)
    }

    /// Validates raw values in command line order
    pub fn from_values(
        source: Option<&str>,
        destination: Option<&str>,
        coordinates: &[&str],
        options: BindOptions,
    ) -> BoundResult<Self> {
        let source = source.ok_or_else(|| fatal("no source path provided"))?;
        let source = validate_directory(source).ok_or_else(|| fatal("provided source path was invalid"))?;

        let destination = destination.ok_or_else(|| fatal("no destination path provided"))?;
        let destination =
            validate_directory(destination).ok_or_else(|| fatal("provided destination path was invalid"))?;

        if is_same_directory(&source, &destination) {
            return Err(fatal("source and destination are the same directory"));
        }

        if coordinates.len() < COORDINATE_ARGS.len() {
            return Err(fatal("some bounding coords are missing"));
        }

        let axes = [Axis::Latitude, Axis::Longitude, Axis::Latitude, Axis::Longitude];
        let mut values = [0.0; 4];
        for (i, (text, axis)) in coordinates.iter().zip(axes).enumerate() {
            values[i] = parse_coordinate(text, axis)?;
        }

        let rectangle = BoundingRectangle::new(values[0], values[1], values[2], values[3])?;

        Ok(BoundConfig {
            source,
            destination,
            rectangle,
            options,
        })
    }
}

fn fatal(message: &str) -> BoundError {
    BoundError::Config(message.to_string())
}

/// Accepts an existing directory given without a trailing separator
fn validate_directory(path: &str) -> Option<PathBuf> {
    if path.is_empty() || path.ends_with('/') || path.ends_with(MAIN_SEPARATOR) {
        return None;
    }

    Path::new(path).is_dir().then(|| PathBuf::from(path))
}

/// Compares resolved paths, so `dir` and `dir/.` or a symlink to `dir` match
fn is_same_directory(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Parses one decimal coordinate and checks it against its axis range
///
/// The whole argument must be a finite decimal number; surrounding
/// whitespace, trailing characters, `inf` and `NaN` are rejected.
pub fn parse_coordinate(text: &str, axis: Axis) -> BoundResult<f64> {
    let value: f64 = text
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| fatal("invalid floating point parameter"))?;

    match axis {
        Axis::Latitude if !LATITUDE_RANGE.contains(&value) => Err(fatal("latitude parameter out of range")),
        Axis::Longitude if !LONGITUDE_RANGE.contains(&value) => Err(fatal("longitude parameter out of range")),
        _ => Ok(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: BoundResult<BoundConfig>) -> String {
        match result {
            Err(BoundError::Config(msg)) => msg,
            Err(other) => panic!("unexpected error kind: {}", other),
            Ok(_) => panic!("expected a configuration error"),
        }
    }

    fn dirs() -> (tempfile::TempDir, tempfile::TempDir) {
        (tempfile::tempdir().unwrap(), tempfile::tempdir().unwrap())
    }

    fn with_coords(coords: &[&str]) -> BoundResult<BoundConfig> {
        let (src, dest) = dirs();
        BoundConfig::from_values(
            src.path().to_str(),
            dest.path().to_str(),
            coords,
            BindOptions::default(),
        )
    }

    #[test]
    fn test_valid_configuration() {
        let config = with_coords(&["38.5", "-122", "37.5", "-121"]).unwrap();
        assert_eq!(config.rectangle, BoundingRectangle::new(38.5, -122.0, 37.5, -121.0).unwrap());
    }

    #[test]
    fn test_missing_paths() {
        assert_eq!(message(BoundConfig::from_values(None, None, &[], BindOptions::default())), "no source path provided");

        let (src, _) = dirs();
        assert_eq!(
            message(BoundConfig::from_values(src.path().to_str(), None, &[], BindOptions::default())),
            "no destination path provided"
        );
    }

    #[test]
    fn test_invalid_paths() {
        let (src, dest) = dirs();
        let file = src.path().join("image.jpg");
        std::fs::write(&file, b"x").unwrap();

        let trailing = format!("{}/", src.path().display());
        assert_eq!(
            message(BoundConfig::from_values(Some(&trailing), dest.path().to_str(), &[], BindOptions::default())),
            "provided source path was invalid"
        );
        assert_eq!(
            message(BoundConfig::from_values(file.to_str(), dest.path().to_str(), &[], BindOptions::default())),
            "provided source path was invalid"
        );
        assert_eq!(
            message(BoundConfig::from_values(src.path().to_str(), Some("/no/such/dir"), &[], BindOptions::default())),
            "provided destination path was invalid"
        );
    }

    #[test]
    fn test_same_source_and_destination() {
        let (src, _) = dirs();
        let same = src.path().to_str();
        assert_eq!(
            message(BoundConfig::from_values(same, same, &["38.5", "-122", "37.5", "-121"], BindOptions::default())),
            "source and destination are the same directory"
        );

        let dotted = format!("{}/.", src.path().display());
        assert_eq!(
            message(BoundConfig::from_values(same, Some(&dotted), &["38.5", "-122", "37.5", "-121"], BindOptions::default())),
            "source and destination are the same directory"
        );
    }

    #[test]
    fn test_missing_coordinates() {
        assert_eq!(message(with_coords(&["38.5", "-122", "37.5"])), "some bounding coords are missing");
    }

    #[test]
    fn test_strict_parsing() {
        for bad in ["38.5abc", " 38.5", "", "inf", "NaN", "1,5"] {
            assert_eq!(message(with_coords(&[bad, "-122", "37.5", "-121"])), "invalid floating point parameter", "{:?}", bad);
        }
    }

    #[test]
    fn test_ranges() {
        assert_eq!(message(with_coords(&["-90.5", "-122", "37.5", "-121"])), "latitude parameter out of range");
        assert_eq!(message(with_coords(&["38.5", "-180.1", "37.5", "-121"])), "longitude parameter out of range");
        assert_eq!(message(with_coords(&["38.5", "-122", "91", "-121"])), "latitude parameter out of range");
        assert!(with_coords(&["90", "-180", "-90", "180"]).is_ok());
    }

    #[test]
    fn test_first_failure_wins() {
        // bad number in the second slot is reported before the range error in the third
        assert_eq!(message(with_coords(&["38.5", "x", "95", "-121"])), "invalid floating point parameter");
    }

    #[test]
    fn test_deformed_rectangle() {
        let result = with_coords(&["37.5", "-122", "38.5", "-121"]);
        assert!(matches!(result, Err(BoundError::Coordinate(_))));
        assert_eq!(result.unwrap_err().to_string(), "deformed bounding rectangle defined");
    }
}
