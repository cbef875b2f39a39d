//! File-backed `tracing` setup.
//!
//! The terminal is owned by the UI, so logs only go to a file.

use crate::config::LoggingConfig;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber writing to `file`.
///
/// `RUST_LOG` takes precedence over `config.level`. Returns `Ok(false)`
/// when no file is configured and nothing was installed.
pub fn init_tracing(config: &LoggingConfig, file: Option<&Path>) -> io::Result<bool> {
    let Some(path) = file.or(config.file.as_deref()) else {
        return Ok(false);
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let writer = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(writer))
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .try_init()
        .map_err(|err| io::Error::new(io::ErrorKind::AlreadyExists, err.to_string()))?;

    Ok(true)
}
