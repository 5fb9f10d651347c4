use std::io::{self, Write};
use std::path::Path;
use std::process;
use clap::error::ErrorKind;
use log::{error, warn};

use geobound::commands::{build_cli, BoundCommand, Command};
use geobound::utils::logger::Logger;
use geobound::{BindReport, BoundResult};

/// Exit status for invalid input
const EXIT_FATAL: i32 = 1;
/// Exit status when the scan finished but some copies failed
const EXIT_COPY_FAILED: i32 = 2;

fn main() {
    let matches = match build_cli().try_get_matches() {
        Ok(matches) => matches,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => fatal(&usage_message(&e)),
    };

    let log_file = matches.get_one::<String>("log-file").map(Path::new);
    if let Err(e) = Logger::init_global_logger(matches.get_flag("verbose"), log_file) {
        fatal(&format!("could not open log file: {}", e));
    }

    match run(&matches) {
        Ok(report) if report.has_failures() => {
            error!("{} of {} matching files could not be copied",
                   report.failed.len(), report.failed.len() + report.copied.len());
            process::exit(EXIT_COPY_FAILED);
        }
        Ok(_) => {}
        Err(e) => fatal(&e.to_string()),
    }
}

fn run(matches: &clap::ArgMatches) -> BoundResult<BindReport> {
    let command = BoundCommand::new(matches)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = command.execute(&mut out)?;
    if let Err(e) = out.flush() {
        warn!("Could not flush stdout: {}", e);
    }

    Ok(report)
}

/// First line of a clap error without its `error: ` prefix
fn usage_message(error: &clap::Error) -> String {
    let rendered = error.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}

/// Prints the diagnostic line and terminates
fn fatal(message: &str) -> ! {
    let _ = writeln!(io::stdout(), "bound: fatal error: {}", message);
    process::exit(EXIT_FATAL);
}
