//! Tracing initialization
//!
//! Log lines go to stderr, filtered by the `ADOPT_RUFF_LOG` environment variable
//! (default `info`). When a log directory is given, a debug-level plain-text
//! copy is also written to `adopt-ruff.log` inside it.

use std::fs::{self, File};
use std::path::Path;
use std::sync::{Mutex, Once};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

/// Environment variable controlling the stderr log filter
pub const LOG_ENV: &str = "ADOPT_RUFF_LOG";

/// File name of the debug log
pub const LOG_FILE_NAME: &str = "adopt-ruff.log";

static INIT: Once = Once::new();

/// Initialize logging; calling it more than once is a no-op
pub fn init_logging(log_dir: Option<&Path>) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_filter(filter);

        let file_layer = log_dir.and_then(open_log_file).map(|file| {
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_filter(LevelFilter::DEBUG)
        });

        // A subscriber installed by an embedding application takes precedence
        let _ = tracing_subscriber::registry()
            .with(stderr_layer)
            .with(file_layer)
            .try_init();
    });
}

fn open_log_file(dir: &Path) -> Option<File> {
    fs::create_dir_all(dir).ok()?;
    File::create(dir.join(LOG_FILE_NAME)).ok()
}
