//! Logger setup for the bound binary
//!
//! Log records go to stderr through `env_logger` by default, leaving
//! stdout for confirmation lines. With a log file configured, a
//! file-backed [`Logger`] is installed instead.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Level, Log, Metadata, Record};

/// File-backed logger
pub struct Logger {
    /// File handle for log output
    file: Mutex<File>,
    /// Most verbose level written
    level: Level,
}

impl Logger {
    /// Creates a new logger writing to `log_file`, truncating it
    pub fn new(log_file: &Path, level: Level) -> io::Result<Self> {
        let file = File::create(log_file)?;
        Ok(Logger {
            file: Mutex::new(file),
            level,
        })
    }

    /// Writes one line to the log file
    pub fn write_line(&self, message: &str) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        writeln!(file, "{}", message)?;
        file.flush()
    }

    /// Installs the process-wide logger
    ///
    /// # Arguments
    ///
    /// * `verbose` - Log at debug level instead of warn
    /// * `log_file` - Write records to this file instead of stderr
    pub fn init_global_logger(verbose: bool, log_file: Option<&Path>) -> io::Result<()> {
        let level = if verbose { Level::Debug } else { Level::Warn };

        match log_file {
            Some(path) => {
                let logger = Logger::new(path, level)?;
                if log::set_boxed_logger(Box::new(logger)).is_err() {
                    eprintln!("Warning: Global logger was already initialized");
                }
                log::set_max_level(level.to_level_filter());
            }
            None => {
                let default_filter = if verbose { "debug" } else { "warn" };
                let env = env_logger::Env::default().default_filter_or(default_filter);
                if env_logger::Builder::from_env(env)
                    .format_timestamp(None)
                    .try_init()
                    .is_err()
                {
                    eprintln!("Warning: Global logger was already initialized");
                }
            }
        }

        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = self.write_line(&message);
        }
    }

    fn flush(&self) {
        // Already flushing in write_line
    }
}
