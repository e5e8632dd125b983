// src/logging.rs

//! Stderr logging for the `ganttdag` binary.
//!
//! The filter comes from the `--log-level` flag when given, otherwise from
//! `GANTTDAG_LOG` (any `EnvFilter` directive such as `ganttdag::dag=debug`),
//! otherwise `warn`. Stdout is left to the schedule table.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::cli::LogLevel;

pub const LOG_ENV_VAR: &str = "GANTTDAG_LOG";
const DEFAULT_DIRECTIVE: &str = "warn";

/// Install the global subscriber. Call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let filter = log_filter(cli_level, std::env::var(LOG_ENV_VAR).ok().as_deref());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))?;

    Ok(())
}

/// Resolve the filter from the CLI flag and the raw env var value.
///
/// A malformed env value is ignored rather than failing startup.
pub fn log_filter(cli_level: Option<LogLevel>, env_value: Option<&str>) -> EnvFilter {
    if let Some(level) = cli_level {
        return EnvFilter::new(level.as_directive());
    }
    env_value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

impl LogLevel {
    fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
