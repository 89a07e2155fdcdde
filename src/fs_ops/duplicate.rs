//! Duplicate-name resolution.
//!
//! Picks a destination inside a folder that does not exist yet, appending
//! `_<n>` before the extension on collision ("report.txt" -> "report_1.txt").
//!
//! Notes:
//! - This only decides the path name based on current filesystem state. Nothing
//!   is reserved, so a concurrent writer can still claim the name before the move.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tracing::trace;

/// Return `dst_dir/name` if free, else the first free `dst_dir/<stem>_<n>[.ext]` for n = 1, 2, ...
///
/// Examples:
/// - "report.txt" -> "report_1.txt", "report_2.txt", ...
/// - ".env" -> ".env_1"
/// - "archive.tar.gz" -> "archive.tar_1.gz"
///
/// The counter is unbounded.
pub fn unique_destination(dst_dir: &Path, name: &OsStr) -> PathBuf {
    let candidate = dst_dir.join(name);
    if !candidate.exists() {
        return candidate;
    }

    // Extract stem and extension, preserving non-UTF8 via OsString.
    let base = Path::new(name);
    let stem: OsString = base
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| name.to_os_string());
    let ext: Option<&OsStr> = base.extension();

    let mut n: u64 = 1;
    loop {
        let candidate = dst_dir.join(name_with_counter(&stem, ext, n));
        if !candidate.exists() {
            return candidate;
        }
        if n == 3 {
            trace!(name = ?name, dir = %dst_dir.display(), "duplicate: multiple collisions, still searching");
        }
        n += 1;
    }
}

fn name_with_counter(stem: &OsStr, ext: Option<&OsStr>, n: u64) -> OsString {
    let mut new_name = OsString::from(stem);
    new_name.push(format!("_{n}"));
    if let Some(e) = ext {
        new_name.push(".");
        new_name.push(e);
    }
    new_name
}
