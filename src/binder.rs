//! Directory scan and copy of matching files
//!
//! Lists the regular files of a source directory, locates each one and
//! copies those inside the bounding rectangle into the destination
//! directory under their original names.

use log::{debug, error, info, warn};
use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::coordinate::BoundingRectangle;
use crate::errors::BoundResult;
use crate::exif::MetadataAccessor;
use crate::locator::GpsLocator;
use crate::utils::progress::ProgressTracker;

/// Copies one file to a new path
pub trait FileCopier {
    /// Copies `src` to `dest`, returning the number of bytes written
    fn copy(&self, src: &Path, dest: &Path) -> io::Result<u64>;
}

impl<C: FileCopier + ?Sized> FileCopier for &C {
    fn copy(&self, src: &Path, dest: &Path) -> io::Result<u64> {
        (**self).copy(src, dest)
    }
}

/// Copier using direct filesystem operations
#[derive(Debug, Default, Clone, Copy)]
pub struct FsCopier;

impl FileCopier for FsCopier {
    /// Refuses to copy a file onto itself, which would truncate it
    fn copy(&self, src: &Path, dest: &Path) -> io::Result<u64> {
        if let (Ok(from), Ok(to)) = (fs::canonicalize(src), fs::canonicalize(dest)) {
            if from == to {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("{} and {} are the same file", src.display(), dest.display()),
                ));
            }
        }

        fs::copy(src, dest)
    }
}

/// Outcome of one directory scan
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BindReport {
    /// Regular files examined
    pub scanned: usize,
    /// Files without a usable GPS position
    pub without_position: usize,
    /// Files located outside the rectangle
    pub outside: usize,
    /// Names of files copied, or that would be copied in a dry run
    pub copied: Vec<String>,
    /// Names of files whose copy failed, with the reason
    pub failed: Vec<(String, String)>,
}

impl BindReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Options that change how matches are handled
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BindOptions {
    /// Report matches without copying
    pub dry_run: bool,
    /// Draw a progress bar on stderr
    pub show_progress: bool,
}

/// Binds the files of one directory to a bounding rectangle
pub struct DirectoryBinder<A, C> {
    locator: GpsLocator<A>,
    rectangle: BoundingRectangle,
    copier: C,
    options: BindOptions,
}

impl<A: MetadataAccessor, C: FileCopier> DirectoryBinder<A, C> {
    pub fn new(accessor: A, rectangle: BoundingRectangle, copier: C, options: BindOptions) -> Self {
        DirectoryBinder {
            locator: GpsLocator::new(accessor),
            rectangle,
            copier,
            options,
        }
    }

    /// Scans `source` and copies matching files into `destination`
    ///
    /// One confirmation line per match is written to `out`. A failed copy
    /// is logged and recorded in the report; the scan continues.
    ///
    /// # Returns
    /// The scan report, or an error if `source` cannot be listed.
    pub fn bind(&self, source: &Path, destination: &Path, out: &mut dyn Write) -> BoundResult<BindReport> {
        let files = list_regular_files(source)?;
        info!("Scanning {} files in {} for positions inside {}",
              files.len(), source.display(), self.rectangle);

        let progress = if self.options.show_progress {
            ProgressTracker::new(files.len() as u64, "Scanning")
        } else {
            ProgressTracker::hidden()
        };

        let mut report = BindReport::default();

        for name in files {
            let src_path = source.join(&name);
            let display_name = name.to_string_lossy().into_owned();
            progress.set_message(&display_name);
            report.scanned += 1;

            match self.locator.locate(&src_path) {
                None => report.without_position += 1,
                Some(coordinate) if !self.rectangle.contains(&coordinate) => {
                    debug!("{} at {} is outside the rectangle", display_name, coordinate);
                    report.outside += 1;
                }
                Some(coordinate) => {
                    debug!("{} at {} is inside the rectangle", display_name, coordinate);
                    self.handle_match(&src_path, &destination.join(&name), display_name, &progress, out, &mut report);
                }
            }

            progress.increment(1);
        }

        progress.finish();
        info!("Scanned {} files: {} copied, {} failed, {} outside, {} without position",
              report.scanned, report.copied.len(), report.failed.len(), report.outside, report.without_position);

        Ok(report)
    }

    fn handle_match(
        &self,
        src: &Path,
        dest: &Path,
        name: String,
        progress: &ProgressTracker,
        out: &mut dyn Write,
        report: &mut BindReport,
    ) {
        if self.options.dry_run {
            confirm(progress, out, &format!("would copy: {}", name));
            report.copied.push(name);
            return;
        }

        match self.copier.copy(src, dest) {
            Ok(bytes) => {
                debug!("Copied {} bytes to {}", bytes, dest.display());
                confirm(progress, out, &format!("copied: {}", name));
                report.copied.push(name);
            }
            Err(e) => {
                progress.suspend(|| error!("Failed to copy {} to {}: {}", src.display(), dest.display(), e));
                report.failed.push((name, e.to_string()));
            }
        }
    }
}

/// Writes one confirmation line; a broken sink is logged, not fatal
fn confirm(progress: &ProgressTracker, out: &mut dyn Write, line: &str) {
    if let Err(e) = progress.suspend(|| writeln!(out, "{}", line)) {
        warn!("Could not write \"{}\": {}", line, e);
    }
}

/// Names of the regular files directly inside `dir`, sorted
///
/// Directories, symlinks and special files are skipped; nothing is
/// recursed into.
pub fn list_regular_files(dir: &Path) -> io::Result<Vec<OsString>> {
    let mut names = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        // DirEntry::file_type does not follow symlinks
        match entry.file_type() {
            Ok(file_type) if file_type.is_file() => names.push(entry.file_name()),
            Ok(_) => debug!("Skipping non-regular entry {}", PathBuf::from(entry.file_name()).display()),
            Err(e) => warn!("Skipping {}: {}", entry.path().display(), e),
        }
    }

    names.sort();
    Ok(names)
}
