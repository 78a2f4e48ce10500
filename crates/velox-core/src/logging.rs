//! Logging init driven by the site settings.
//!
//! `error_logging` sends events to the application error log under the XDG
//! state dir; otherwise (or when that file cannot be opened) they go to stderr.
//! `development` picks a verbose filter; production sites log warnings only.
//! `RUST_LOG` overrides either filter.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::VeloxConfig;

pub const ERROR_LOG_FILE: &str = "error.log";

const DEVELOPMENT_FILTER: &str = "info,velox=debug,velox_core=debug";
const PRODUCTION_FILTER: &str = "warn";

/// Where log events are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    ErrorLog(PathBuf),
    Stderr,
}

/// Filter directive for the configured mode.
pub fn default_filter(cfg: &VeloxConfig) -> &'static str {
    if cfg.development {
        DEVELOPMENT_FILTER
    } else {
        PRODUCTION_FILTER
    }
}

/// Sink for the configured mode, with the error log placed in `state_dir`.
pub fn log_sink(cfg: &VeloxConfig, state_dir: &Path) -> LogSink {
    if cfg.error_logging {
        LogSink::ErrorLog(state_dir.join(ERROR_LOG_FILE))
    } else {
        LogSink::Stderr
    }
}

/// Error log file handle, or stderr when the handle cannot be cloned.
enum ErrorLogWriter {
    File(fs::File),
    Stderr,
}

impl io::Write for ErrorLogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            ErrorLogWriter::File(f) => f.write(buf),
            ErrorLogWriter::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            ErrorLogWriter::File(f) => f.flush(),
            ErrorLogWriter::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct ErrorLog(fs::File);

impl<'a> MakeWriter<'a> for ErrorLog {
    type Writer = ErrorLogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(ErrorLogWriter::File)
            .unwrap_or(ErrorLogWriter::Stderr)
    }
}

fn env_filter(cfg: &VeloxConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(cfg)))
}

/// Initialize logging for the loaded settings.
/// Returns Err when the error log cannot be opened so the caller can fall back to stderr.
pub fn init_logging(cfg: &VeloxConfig) -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("velox")?;
    let state_dir = xdg_dirs.get_state_home().join("velox");

    let path = match log_sink(cfg, &state_dir) {
        LogSink::Stderr => {
            init_logging_stderr(cfg);
            return Ok(());
        }
        LogSink::ErrorLog(path) => path,
    };

    fs::create_dir_all(&state_dir)?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(cfg))
        .with_writer(BoxMakeWriter::new(ErrorLog(file)))
        .with_ansi(false)
        .init();

    tracing::info!(
        sitename = %cfg.sitename,
        development = cfg.development,
        "velox error log at {}",
        path.display()
    );

    Ok(())
}

/// Initialize logging to stderr only.
pub fn init_logging_stderr(cfg: &VeloxConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(cfg))
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}
