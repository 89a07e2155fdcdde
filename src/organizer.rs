//! Scan -> classify -> place pipeline.
//!
//! One pass over the immediate children of the target directory. Regular files
//! are moved into `<target>/<category>/`; directories (including category
//! folders from earlier runs) are never touched. Per-file failures are logged
//! and do not stop the batch.

use anyhow::{Context, Result};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};
use walkdir::WalkDir;

use crate::category::CategoryTable;
use crate::errors::OrganizerError;
use crate::fs_ops::{FsMover, Mover, io_error_with_help, unique_destination};

/// A planned (dry run) or performed move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub category: &'static str,
}

/// A file whose folder creation or move failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub name: String,
    pub message: String,
}

/// Outcome of one organizer run.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Files attempted, successful or not.
    pub processed: usize,
    pub placements: Vec<Placement>,
    pub failures: Vec<Failure>,
}

impl RunReport {
    /// Number of files per category among successful placements.
    pub fn count_for(&self, category: &str) -> usize {
        self.placements
            .iter()
            .filter(|p| p.category == category)
            .count()
    }
}

/// Moves the top-level files of a directory into category folders.
pub struct Organizer<M = FsMover> {
    table: &'static CategoryTable,
    dry_run: bool,
    excluded: Vec<OsString>,
    mover: M,
}

impl Organizer<FsMover> {
    pub fn new(table: &'static CategoryTable) -> Self {
        Self {
            table,
            dry_run: false,
            excluded: Vec::new(),
            mover: FsMover,
        }
    }
}

impl<M: Mover> Organizer<M> {
    /// Swap the file mover (tests inject failing movers here).
    pub fn with_mover<N: Mover>(self, mover: N) -> Organizer<N> {
        Organizer {
            table: self.table,
            dry_run: self.dry_run,
            excluded: self.excluded,
            mover,
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Never process a top-level file with this exact name.
    pub fn exclude_name(mut self, name: impl Into<OsString>) -> Self {
        let name = name.into();
        if !self.excluded.contains(&name) {
            self.excluded.push(name);
        }
        self
    }

    /// Exclude the file name of the running executable, when it can be determined.
    pub fn exclude_current_exe(self) -> Self {
        let exe_name = std::env::current_exe()
            .ok()
            .and_then(|p| p.file_name().map(OsStr::to_os_string));
        match exe_name {
            Some(name) => self.exclude_name(name),
            None => self,
        }
    }

    fn is_excluded(&self, name: &OsStr) -> bool {
        self.excluded.iter().any(|n| n == name)
    }

    /// Organize `target`.
    ///
    /// Returns `Ok(None)` when the target is missing or not a directory (an error
    /// line is logged and nothing is touched). Listing the directory is the only
    /// fatal failure; per-file errors land in the report.
    pub fn run(&self, target: &Path) -> Result<Option<RunReport>> {
        if !target.exists() {
            error!("{}", OrganizerError::TargetMissing(target.to_path_buf()));
            return Ok(None);
        }
        if !target.is_dir() {
            error!("{}", OrganizerError::NotADirectory(target.to_path_buf()));
            return Ok(None);
        }

        info!(
            "Starting organization of '{}'{}",
            target.display(),
            if self.dry_run { " (DRY RUN)" } else { "" }
        );

        // Snapshot the listing up front; files created during the run are not seen.
        let entries = WalkDir::new(target)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("Failed to list {}", target.display()))?;

        let mut report = RunReport::default();
        for entry in entries {
            let path = entry.path();
            // is_file() follows symlinks, so links to files are moved like files.
            if !path.is_file() {
                continue;
            }
            let name = entry.file_name();
            if self.is_excluded(name) {
                debug!(file = %path.display(), "skipping excluded file");
                continue;
            }

            report.processed += 1;
            let category = self.table.classify_path(path);
            match self.place(target, path, name, category) {
                Ok(destination) => report.placements.push(Placement {
                    source: path.to_path_buf(),
                    destination,
                    category,
                }),
                Err(e) => {
                    let failure = Failure {
                        name: name.to_string_lossy().into_owned(),
                        message: format!("{e}"),
                    };
                    error!(
                        "{}",
                        OrganizerError::MoveFailed {
                            name: failure.name.clone(),
                            cause: failure.message.clone(),
                        }
                    );
                    report.failures.push(failure);
                }
            }
        }

        info!(
            "Organization complete. {} files processed.",
            report.processed
        );
        Ok(Some(report))
    }

    /// Create the category folder, pick a free name, log, and move (unless dry run).
    fn place(
        &self,
        target: &Path,
        path: &Path,
        name: &OsStr,
        category: &'static str,
    ) -> Result<PathBuf> {
        let dest_dir = target.join(category);
        if !self.dry_run {
            ensure_folder(&dest_dir)?;
        }

        let destination = unique_destination(&dest_dir, name);
        let dest_name = destination.file_name().unwrap_or(name);
        info!(
            "Moving '{}' to '{}'",
            name.to_string_lossy(),
            Path::new(category).join(dest_name).display()
        );

        if !self.dry_run {
            self.mover.move_file(path, &destination)?;
        }
        Ok(destination)
    }
}

/// Create `dir` unless it already exists as a directory.
fn ensure_folder(dir: &Path) -> Result<()> {
    match fs::create_dir(dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && dir.is_dir() => Ok(()),
        Err(e) => Err(io_error_with_help("create folder", dir)(e)),
    }
}
