//! Tracing setup for the demo binary.
//!
//! The demo owns the alternate screen, so log output goes to a file instead
//! of stderr. The filter is read from `MENU_AIM_LOG` using the usual
//! `EnvFilter` syntax, e.g. `MENU_AIM_LOG=menu_aim=trace`.

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "MENU_AIM_LOG";

/// Filter used when `MENU_AIM_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "menu_aim=info";

/// Default log file location: `<cache dir>/menu-aim/menu-aim.log`.
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("menu-aim")
        .join("menu-aim.log")
}

/// Build the filter from the environment, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a global subscriber appending to `path`.
///
/// Fails if the file cannot be opened or a global subscriber is already set.
pub fn init_logging(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(io::Error::other)?;

    tracing::info!(path = %path.display(), "logging initialised");
    Ok(())
}
