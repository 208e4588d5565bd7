//! Diagnostic tracing for the roster application.
//!
//! The terminal UI owns stdout and stderr, so events are only recorded when a
//! log file is given (`--log-file`). Filtering follows `RUST_LOG`; without it
//! the roster crate logs at `info` and dependencies at `warn`.
//!
//! ```bash
//! RUST_LOG=roster=debug roster --log-file roster.log
//! ```

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "warn,roster=info";

/// Initialize the tracing subscriber.
///
/// With `None` no subscriber is installed and every event is dropped.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path).with_context(|| format!("create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .compact(),
        )
        .try_init()
        .context("install tracing subscriber")?;
    Ok(())
}
