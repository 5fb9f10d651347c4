pub mod io;
pub mod exif;
pub mod utils;
pub mod coordinate;
pub mod locator;
pub mod binder;
pub mod config;
pub mod commands;
pub mod errors;

pub use binder::{BindOptions, BindReport, DirectoryBinder, FileCopier, FsCopier};
pub use config::BoundConfig;
pub use coordinate::{BoundingRectangle, Coordinate, Hemisphere, RationalSextuple};
pub use errors::{BoundError, BoundResult};
pub use exif::{ExifFileAccessor, ExifReader, MetadataAccessor};
pub use locator::GpsLocator;
