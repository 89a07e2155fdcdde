//! Filesystem operations used by the organizer.

mod duplicate;
mod file_move;
mod helpers;

pub use duplicate::unique_destination;
pub use file_move::move_file;
pub use helpers::io_error_with_help;

use anyhow::Result;
use std::path::Path;

/// Seam for relocating one file, so the organizer can run against a fake in tests.
pub trait Mover {
    fn move_file(&self, src: &Path, dest: &Path) -> Result<()>;
}

/// Real filesystem mover (rename, or copy + remove across devices).
#[derive(Debug, Clone, Copy, Default)]
pub struct FsMover;

impl Mover for FsMover {
    fn move_file(&self, src: &Path, dest: &Path) -> Result<()> {
        move_file(src, dest)
    }
}
