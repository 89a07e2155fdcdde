//! File move implementation.
//! Attempts a rename; across filesystems, falls back to copy + remove of the original.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

use super::helpers::io_error_with_help;

/// Move `src` to `dest`. `dest` must not exist; callers pick it via `unique_destination`.
pub fn move_file(src: &Path, dest: &Path) -> Result<()> {
    match fs::rename(src, dest) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            debug!(src = %src.display(), dest = %dest.display(), "rename crosses devices, copying instead");
            copy_then_remove(src, dest)
        }
        Err(e) => Err(io_error_with_help("rename", src)(e)),
    }
}

fn copy_then_remove(src: &Path, dest: &Path) -> Result<()> {
    fs::copy(src, dest).map_err(io_error_with_help("copy", src))?;
    if let Err(e) = fs::remove_file(src) {
        // Leave exactly one copy behind.
        let _ = fs::remove_file(dest);
        return Err(io_error_with_help("remove original", src)(e));
    }
    Ok(())
}
