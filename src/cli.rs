//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - TARGET_DIR is kept as a string so quotes can be trimmed and `~` expanded later.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};
use crate::config::{DEFAULT_LOG_FILE, strip_wrapping_quotes};

/// Sort the files of a directory into category folders by extension.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Sort the files of a directory into category folders by extension"
)]
pub struct Args {
    /// Directory to organize. Prompted for when omitted.
    #[arg(value_name = "TARGET_DIR", value_hint = ValueHint::DirPath)]
    pub target_dir: Option<String>,

    /// Dry-run: log actions but do not create folders or move files.
    #[arg(
        long,
        help = "Simulate the organization without moving files"
    )]
    pub dry_run: bool,

    /// Log file appended to in addition to the console.
    #[arg(
        long,
        value_name = "PATH",
        value_hint = ValueHint::FilePath,
        default_value = DEFAULT_LOG_FILE,
        help = "Path to save the log file"
    )]
    pub log_file: PathBuf,

    /// Console-only logging; ignores --log-file.
    #[arg(long, help = "Do not write a log file")]
    pub no_log_file: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Do not wait for Enter before exiting.
    #[arg(long, help = "Exit without the final 'Press Enter' pause")]
    pub no_wait: bool,

    /// Print the built-in category table, then exit.
    #[arg(long, help = "Print the extension categories and exit")]
    pub list_categories: bool,
}

impl Args {
    /// Target directory with surrounding whitespace and wrapping quotes removed.
    /// `None` when absent or empty after trimming.
    pub fn resolved_target(&self) -> Option<String> {
        self.target_dir
            .as_deref()
            .map(strip_wrapping_quotes)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        cfg.log_file = if self.no_log_file {
            None
        } else {
            Some(self.log_file.clone())
        };
        if self.dry_run {
            cfg.dry_run = true;
        }
        if self.no_wait {
            cfg.wait_on_exit = false;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
