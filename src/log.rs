// src/log.rs
//
// Log sink + the short logf!/logd!/loge! macros used across the crate.
// The macros emit `tracing` events; `init_file` / `init_stderr` install the
// subscriber. Without a subscriber the macros are silent (tests, benches).

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::consts::{LOG_FILE, STORE_DIR};

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// GUI: append to `.store/debug.log`.
pub fn init_file() -> io::Result<()> {
    fs::create_dir_all(STORE_DIR)?;
    let path = Path::new(STORE_DIR).join(LOG_FILE);
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    // A second init (e.g. re-entrant GUI launch in tests) is harmless.
    let _ = fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

/// CLI: log to stderr so stdout stays clean for table output.
pub fn init_stderr(verbose: bool) {
    let filter = if verbose { EnvFilter::new("debug") } else { env_filter() };
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
