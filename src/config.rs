//! Command-line and environment configuration.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use crate::core::{validate_level, GameConfig};
use crate::types::{DEFAULT_LEVEL, MAX_LEVEL, MIN_LEVEL};

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "tui-memory",
    version,
    about = "Flip cards two at a time and find every pair before the clock runs out"
)]
pub struct Config {
    /// Grid side length (even, 2-8)
    #[arg(short, long, env = "MEMORY_LEVEL", default_value_t = DEFAULT_LEVEL, value_parser = parse_level)]
    pub level: u8,

    /// Seed for dealing boards (defaults to the current time)
    #[arg(long, env = "MEMORY_SEED")]
    pub seed: Option<u64>,

    /// Run a command script instead of the interactive game ("-" reads stdin)
    #[arg(long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Directory for log files in interactive mode
    #[arg(long, env = "MEMORY_LOG_DIR", value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log level spec used when RUST_LOG is unset, e.g. "info" or "debug"
    #[arg(long, env = "MEMORY_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn game_config(&self) -> GameConfig {
        GameConfig::new(self.level, self.seed.unwrap_or_else(clock_seed))
    }

    /// Log directory for interactive mode.
    pub fn log_dir_or_default(&self) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("tui-memory"))
    }
}

fn parse_level(s: &str) -> Result<u8, String> {
    let level: u8 = s
        .trim()
        .parse()
        .map_err(|_| format!("`{s}` is not a grid size"))?;
    validate_level(level).map_err(|e| e.to_string())?;
    if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
        return Err(format!(
            "level {level} is outside the supported range {MIN_LEVEL}-{MAX_LEVEL}"
        ));
    }
    Ok(level)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}
