//! File logging for horse.
//!
//! stdout carries the single result line and the terminal belongs to the UI, so logs go to
//! `<state dir>/horse/horse.log` through a non-blocking tracing-appender writer.
//! The filter comes from `HORSE_LOG` and defaults to `warn`.

use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "HORSE_LOG";
const LOG_FILE: &str = "horse.log";

/// Directory the log file is written to.
fn log_dir() -> Option<PathBuf> {
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .map(|base| base.join("horse"))
}

/// Installs the global subscriber.
///
/// Returns the appender guard which must be kept alive until exit, or `None` when
/// logging could not be set up. Failing to log never stops the browser.
pub fn init_logging() -> Option<WorkerGuard> {
    let dir = log_dir()?;
    if std::fs::create_dir_all(&dir).is_err() {
        return None;
    }

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .ok()?;

    tracing::debug!(dir = %dir.display(), "logging initialised");
    Some(guard)
}
