//! Extension-to-category classification.
//!
//! The table is fixed at compile time and indexed once per process. Lookups are
//! case-insensitive and tolerate a missing leading dot.

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

/// Category used for every extension not present in the table.
pub const FALLBACK_CATEGORY: &str = "Others";

/// Category name -> extensions (lowercase, leading dot). Order is the listing order.
const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Images",
        &[
            ".jpg", ".jpeg", ".png", ".gif", ".bmp", ".tiff", ".webp", ".svg", ".heic", ".raw",
        ],
    ),
    (
        "Videos",
        &[".mp4", ".mkv", ".avi", ".mov", ".wmv", ".flv", ".webm", ".m4v"],
    ),
    (
        "Documents",
        &[
            ".pdf", ".docx", ".doc", ".txt", ".xlsx", ".xls", ".pptx", ".ppt", ".csv", ".rtf",
            ".odt", ".md",
        ],
    ),
    ("Audio", &[".mp3", ".wav", ".flac", ".aac", ".ogg", ".m4a"]),
    ("Archives", &[".zip", ".rar", ".7z", ".tar", ".gz", ".iso"]),
    (
        "Programs",
        &[".exe", ".msi", ".bat", ".sh", ".apk", ".app", ".dmg"],
    ),
    (
        "Scripts",
        &[".py", ".js", ".html", ".css", ".java", ".cpp", ".c", ".php"],
    ),
];

static BUILTIN: LazyLock<CategoryTable> = LazyLock::new(CategoryTable::from_static);

/// Read-only lookup from extension to category name.
#[derive(Debug)]
pub struct CategoryTable {
    by_extension: HashMap<&'static str, &'static str>,
}

impl CategoryTable {
    /// The process-wide built-in table.
    pub fn builtin() -> &'static CategoryTable {
        &BUILTIN
    }

    fn from_static() -> Self {
        let by_extension = CATEGORIES
            .iter()
            .flat_map(|(category, exts)| exts.iter().map(move |ext| (*ext, *category)))
            .collect();
        Self { by_extension }
    }

    /// Category for an extension such as `".JPG"`, `"jpg"` or `""`.
    ///
    /// Never fails: unknown extensions yield [`FALLBACK_CATEGORY`].
    pub fn classify(&self, extension: &str) -> &'static str {
        let mut key = extension.to_lowercase();
        if !key.starts_with('.') {
            key.insert(0, '.');
        }
        self.by_extension
            .get(key.as_str())
            .copied()
            .unwrap_or(FALLBACK_CATEGORY)
    }

    /// Category for a path, judged by its final extension only.
    pub fn classify_path(&self, path: &Path) -> &'static str {
        match path.extension() {
            Some(ext) => self.classify(&ext.to_string_lossy()),
            None => FALLBACK_CATEGORY,
        }
    }

    /// Categories in declaration order with their extensions.
    pub fn categories(&self) -> impl Iterator<Item = (&'static str, &'static [&'static str])> {
        CATEGORIES.iter().copied()
    }
}
