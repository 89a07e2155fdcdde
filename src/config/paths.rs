//! Path helpers for user-supplied input.
//! Trims shell quoting leftovers and expands the `~` home shorthand.

use dirs::home_dir;
use std::path::PathBuf;

/// Trim whitespace and one pair of matching wrapping quotes (`"..."` or `'...'`).
///
/// Users pasting paths from a file manager often include the quotes; an
/// unmatched quote is left alone.
pub fn strip_wrapping_quotes(input: &str) -> &str {
    let trimmed = input.trim();
    let quoted = trimmed.len() >= 2
        && ((trimmed.starts_with('"') && trimmed.ends_with('"'))
            || (trimmed.starts_with('\'') && trimmed.ends_with('\'')));
    if quoted {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    }
}

/// Expand a leading `~` to the current user's home directory.
///
/// Only `~` alone or followed by a separator is expanded (`~other` is kept as-is),
/// and the input is returned unchanged when no home directory can be determined.
pub fn expand_home(input: &str) -> PathBuf {
    let rest = if input == "~" {
        Some("")
    } else {
        input
            .strip_prefix("~/")
            .or_else(|| input.strip_prefix("~\\"))
    };

    match (rest, home_dir()) {
        (Some(""), Some(home)) => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(input),
    }
}
