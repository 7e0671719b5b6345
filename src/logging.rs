// Logging setup.
// The terminal belongs to the UI, so tracing output goes to a log file.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{CoachError, Result};

/// Env var holding a tracing filter directive.
pub const LOG_ENV: &str = "PLAYONME_LOG";

const LOG_FILE: &str = "playonme.log";

/// Build the filter from PLAYONME_LOG, falling back to `default_level`.
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to `dir/playonme.log`.
///
/// Keep the returned guard alive for the life of the program so buffered
/// lines are flushed on exit.
pub fn init(dir: &Path, default_level: &str) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(env_filter(default_level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()
        .map_err(|e| CoachError::Config(format!("logging already initialised: {}", e)))?;

    Ok(guard)
}
