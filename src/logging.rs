// src/logging.rs

//! Logging setup for `schedag` using `tracing` + `tracing-subscriber`.
//!
//! Priority for determining what gets logged:
//! 1. `--log-level` CLI flag (if provided), applied to every target
//! 2. `SCHEDAG_LOG` environment variable, in `EnvFilter` directive syntax
//!    (e.g. "debug" or "info,schedag::dag::scheduler=trace")
//! 3. default to `info`
//!
//! Logs are sent to STDERR so that stdout only carries the rendered
//! schedule (important for `--format json`).

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::LogLevel;

const LOG_ENV_VAR: &str = "SCHEDAG_LOG";

/// Initialise global logging subscriber.
///
/// Call once at startup; an unparsable `SCHEDAG_LOG` is reported as an error
/// rather than silently ignored.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let filter = match cli_level {
        Some(lvl) => EnvFilter::new(directive_for(lvl)),
        None => match std::env::var(LOG_ENV_VAR) {
            Ok(spec) if !spec.trim().is_empty() => EnvFilter::try_new(spec.trim())
                .with_context(|| format!("invalid {LOG_ENV_VAR} value {spec:?}"))?,
            _ => EnvFilter::new("info"),
        },
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn directive_for(lvl: LogLevel) -> &'static str {
    match lvl {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    }
}
