//! Config module.
//! Provides runtime configuration types and path helpers. There is no config
//! file: everything comes from defaults overridden by CLI flags.

pub mod paths;
pub mod types;

pub use paths::{expand_home, strip_wrapping_quotes};
pub use types::{Config, LogLevel};

/// Log file written next to the working directory unless `--log-file` says otherwise.
pub const DEFAULT_LOG_FILE: &str = "organizer.log";
