//! Logger setup.
//!
//! The interactive game owns the terminal, so its logs go to rotating files.
//! Script mode keeps stdout for snapshots and logs to stderr.

use std::path::PathBuf;

use anyhow::{Context, Result};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Rotating files under this directory
    File(PathBuf),
    Stderr,
}

/// Start the global logger. `RUST_LOG` takes precedence over `spec`.
///
/// The returned handle must be kept alive for as long as logging is needed.
pub fn init(spec: &str, target: LogTarget) -> Result<LoggerHandle> {
    let logger = Logger::try_with_env_or_str(spec)
        .with_context(|| format!("invalid log spec `{spec}`"))?;

    let logger = match target {
        LogTarget::File(dir) => logger
            .log_to_file(FileSpec::default().directory(dir).basename("tui-memory"))
            .format(flexi_logger::detailed_format)
            .rotate(
                Criterion::Size(1024 * 1024),
                Naming::Numbers,
                Cleanup::KeepLogFiles(3),
            ),
        LogTarget::Stderr => logger.format(flexi_logger::default_format),
    };

    logger.start().context("failed to start logger")
}
