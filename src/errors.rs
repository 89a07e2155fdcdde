//! Typed error definitions for file_sorter.
//! The Display output of each variant is the exact message written to the log.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrganizerError {
    #[error("Target directory '{}' does not exist.", .0.display())]
    TargetMissing(PathBuf),

    #[error("Target path '{}' is not a directory.", .0.display())]
    NotADirectory(PathBuf),

    #[error("Error moving '{name}': {cause}")]
    MoveFailed { name: String, cause: String },
}
