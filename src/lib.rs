//! Core library for `file_sorter`.
//!
//! Moves the top-level files of a directory into category folders chosen by
//! extension (`Images/`, `Documents/`, ..., `Others/`), renaming on collision
//! and optionally only logging what would happen (dry run).
//!
//! The binary wires these pieces together: CLI parsing, an explicit tracing
//! dispatch, the interactive prompt, and the [`Organizer`] itself.

pub mod category;
pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod logging;
pub mod organizer;
pub mod output;
pub mod prompt;

pub use category::{CategoryTable, FALLBACK_CATEGORY};
pub use config::{Config, DEFAULT_LOG_FILE, LogLevel, expand_home};
pub use errors::OrganizerError;
pub use fs_ops::{FsMover, Mover, unique_destination};
pub use organizer::{Failure, Organizer, Placement, RunReport};
pub use prompt::{Console, Interact};
