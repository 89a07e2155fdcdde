//! Shared helpers for integration tests: run the organizer under a scoped
//! tracing dispatch and capture the formatted log lines.

#![allow(dead_code)]

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use file_sorter::logging::dispatch_with_writer;
use file_sorter::{LogLevel, Mover, Organizer, RunReport};
use walkdir::WalkDir;

/// In-memory log sink shared with the formatter.
#[derive(Clone, Default)]
pub struct Capture(Arc<Mutex<Vec<u8>>>);

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run the organizer under a scoped dispatch and return its result plus the log lines.
pub fn run_logged<M: Mover>(
    org: &Organizer<M>,
    target: &Path,
) -> (Result<Option<RunReport>>, Vec<String>) {
    let capture = Capture::default();
    let sink = capture.clone();
    let dispatch = dispatch_with_writer(&LogLevel::Normal, move || sink.clone());
    let result = tracing::dispatcher::with_default(&dispatch, || org.run(target));
    let bytes = capture.0.lock().unwrap().clone();
    let lines = String::from_utf8_lossy(&bytes)
        .lines()
        .map(str::to_string)
        .collect();
    (result, lines)
}

/// Message part of a `<timestamp> - <LEVEL> - <message>` line.
pub fn message(line: &str) -> &str {
    line.splitn(3, " - ").nth(2).unwrap_or(line)
}

/// Level part of a `<timestamp> - <LEVEL> - <message>` line.
pub fn level(line: &str) -> &str {
    line.splitn(3, " - ").nth(1).unwrap_or("")
}

/// Every path under `root` (relative, sorted) with file contents, for before/after comparisons.
pub fn snapshot(root: &Path) -> Vec<(PathBuf, Option<Vec<u8>>)> {
    WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .map(|e| {
            let e = e.unwrap();
            let rel = e.path().strip_prefix(root).unwrap().to_path_buf();
            let contents = e.file_type().is_file().then(|| fs::read(e.path()).unwrap());
            (rel, contents)
        })
        .collect()
}
