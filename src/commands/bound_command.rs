//! Directory bounding command
//!
//! Copies the images of a source directory whose GPS position lies in a
//! bounding rectangle into a destination directory.

use clap::ArgMatches;
use log::info;

use crate::binder::{BindReport, DirectoryBinder, FsCopier};
use crate::commands::command_traits::Command;
use crate::config::BoundConfig;
use crate::errors::BoundResult;
use crate::exif::ExifFileAccessor;

/// Command for binding a directory to a rectangle
pub struct BoundCommand {
    config: BoundConfig,
}

impl BoundCommand {
    /// Create a new bound command
    ///
    /// Validates every argument before anything is scanned.
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// A new BoundCommand instance or a fatal configuration error
    pub fn new(args: &ArgMatches) -> BoundResult<Self> {
        Ok(BoundCommand {
            config: BoundConfig::from_args(args)?,
        })
    }
}

impl Command for BoundCommand {
    fn execute(&self, out: &mut dyn std::io::Write) -> BoundResult<BindReport> {
        info!("Binding {} to {} within {}",
              self.config.source.display(), self.config.destination.display(), self.config.rectangle);

        let binder = DirectoryBinder::new(ExifFileAccessor::new(), self.config.rectangle, FsCopier, self.config.options);
        binder.bind(&self.config.source, &self.config.destination, out)
    }
}
