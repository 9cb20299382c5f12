//! File-backed tracing setup.
//!
//! The terminal runs in raw mode and owns the screen, so log output goes to
//! a file rather than stderr. The returned guard must be held for the
//! process lifetime or buffered lines are lost on exit.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub fn init(log_file: &Path) -> Result<WorkerGuard> {
    let file = File::create(log_file)
        .with_context(|| format!("failed to create log file {}", log_file.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
