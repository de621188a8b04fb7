//! Tracing subscriber setup
//!
//! The terminal belongs to ratatui while the UI runs, so UI mode logs to a
//! file. Headless mode logs to stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    /// Logging disabled, e.g. no cache directory to put a log file in
    Off,
}

const CRATES: [&str; 3] = ["sumcalc", "sumcalc_core", "sumcalc_ui"];

/// Filter for the process, honouring `RUST_LOG` when it is set.
pub fn filter(level: &str, verbose: bool) -> Result<EnvFilter> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(env.as_deref(), level, verbose)
}

/// A usable `rust_log` wins outright. Otherwise each sumcalc crate logs at
/// `level`, or at debug when `verbose`.
pub fn filter_from(rust_log: Option<&str>, level: &str, verbose: bool) -> Result<EnvFilter> {
    if let Some(directives) = rust_log.filter(|d| !d.trim().is_empty()) {
        match EnvFilter::try_new(directives) {
            Ok(filter) => return Ok(filter),
            Err(e) => eprintln!("Warning: ignoring {}: {e}", EnvFilter::DEFAULT_ENV),
        }
    }

    let level = if verbose { "debug" } else { level };
    let directives = CRATES.map(|name| format!("{name}={level}")).join(",");
    EnvFilter::try_new(directives).wrap_err_with(|| format!("invalid log level {level:?}"))
}

/// Log target for a UI session.
///
/// A log file the user asked for must open. The default one under the cache
/// directory is best effort: if it can't be opened the UI runs unlogged.
pub fn ui_target(path: Option<PathBuf>, explicit: bool) -> Result<LogTarget> {
    let Some(path) = path else {
        return Ok(LogTarget::Off);
    };
    match open_log(&path) {
        Ok(_) => Ok(LogTarget::File(path)),
        Err(e) if explicit => Err(e),
        Err(e) => {
            eprintln!("Warning: {e:#}");
            eprintln!("Continuing without a log file...");
            Ok(LogTarget::Off)
        }
    }
}

/// Installs the global subscriber.
pub fn init(target: &LogTarget, level: &str, verbose: bool) -> Result<()> {
    let filter = filter(level, verbose)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    match target {
        LogTarget::Stderr => builder
            .with_target(false)
            .with_writer(std::io::stderr)
            .init(),
        LogTarget::File(path) => {
            let file = open_log(path)?;
            builder
                .with_target(true)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        LogTarget::Off => {}
    }
    Ok(())
}

fn open_log(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("creating log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("opening log file {}", path.display()))
}
