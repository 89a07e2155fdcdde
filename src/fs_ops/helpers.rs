//! I/O helper utilities.
//!
//! Provides a small adapter to enrich io::Error with actionable context/hints,
//! usable with map_err in anyhow::Result code paths.
//!
//! Usage:
//!   fs::create_dir(dir).map_err(io_error_with_help("create folder", dir))?;

use std::io;
use std::path::Path;

/// Hint for the error kinds a move is likely to hit; None when nothing useful can be said.
fn hint_for(kind: io::ErrorKind) -> Option<&'static str> {
    let hint = match kind {
        io::ErrorKind::PermissionDenied => "permission denied; check ownership and write permissions",
        io::ErrorKind::NotFound => "path not found; it may have been moved or deleted meanwhile",
        io::ErrorKind::AlreadyExists => "already exists; a file may be in the way of the folder",
        io::ErrorKind::NotADirectory => "a regular file is in the way of the folder",
        io::ErrorKind::ResourceBusy => "resource busy; the file may be open in another program",
        io::ErrorKind::StorageFull => "insufficient space on device",
        io::ErrorKind::ReadOnlyFilesystem => "read-only filesystem; cannot write here",
        io::ErrorKind::CrossesDevices => "cross-filesystem; atomic rename not possible",
        io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => {
            "busy/timed out; retry after the current write finishes"
        }
        _ => return None,
    };
    Some(hint)
}

/// Format a human-friendly message with op/path plus a kind-based hint.
fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);
    if let Some(hint) = hint_for(e.kind()) {
        msg.push_str(" (");
        msg.push_str(hint);
        msg.push(')');
    }
    msg
}

/// Adapter for anyhow::Result code.
/// Returns a closure suitable for `.map_err(...)` that converts io::Error -> anyhow::Error.
/// The original io::Error stays reachable through `downcast_ref` on the source chain.
pub fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| {
        let msg = build_message(op, path, &e);
        anyhow::Error::new(e).context(msg)
    }
}
