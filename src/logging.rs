//! Tracing setup.
//!
//! The TUI owns stdout, so log output goes to a file. The filter comes from
//! `MINDWELL_LOG` (any `EnvFilter` directive) and defaults to `info`.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

pub const ENV_LOG_FILTER: &str = "MINDWELL_LOG";
pub const DEFAULT_FILTER: &str = "info";

/// Filter from `MINDWELL_LOG`, falling back to `info` when unset or invalid.
pub fn build_filter() -> EnvFilter {
    match EnvFilter::try_from_env(ENV_LOG_FILTER) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(DEFAULT_FILTER),
    }
}

/// Install the global subscriber writing to `path`, creating parent
/// directories as needed. The file is appended to.
pub fn init_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| color_eyre::eyre::eyre!("installing tracing subscriber: {}", e))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "mindwell starting");
    Ok(())
}
