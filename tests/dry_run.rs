mod common;

use assert_fs::TempDir;
use std::fs;
use std::path::Path;

use common::{message, run_logged, snapshot};
use file_sorter::{CategoryTable, Organizer};

fn seed(root: &Path) {
    for name in ["photo.jpg", "notes.txt", "archive.zip", "unknown.xyz", "clip.MOV"] {
        fs::write(root.join(name), name.as_bytes()).unwrap();
    }
    fs::create_dir(root.join("Documents")).unwrap();
    fs::write(root.join("Documents/notes.txt"), b"already here").unwrap();
}

fn moving_lines(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .map(|l| message(l))
        .filter(|m| m.starts_with("Moving '"))
        .map(str::to_string)
        .collect()
}

#[test]
fn dry_run_leaves_tree_unchanged() {
    let td = TempDir::new().unwrap();
    let root = dunce::canonicalize(td.path()).unwrap();
    seed(&root);
    let before = snapshot(&root);

    let org = Organizer::new(CategoryTable::builtin()).dry_run(true);
    let (result, lines) = run_logged(&org, &root);
    let report = result.unwrap().unwrap();

    assert_eq!(snapshot(&root), before);
    assert_eq!(report.processed, 5);
    assert_eq!(report.placements.len(), 5);
    assert!(!root.join("Images").exists());
    assert!(message(&lines[0]).ends_with(" (DRY RUN)"), "{}", lines[0]);
    assert_eq!(
        message(lines.last().unwrap()),
        "Organization complete. 5 files processed."
    );
}

#[test]
fn dry_run_logs_the_same_moves_as_a_live_run() {
    let dry = TempDir::new().unwrap();
    let live = TempDir::new().unwrap();
    seed(dry.path());
    seed(live.path());

    let (dry_result, dry_lines) = run_logged(
        &Organizer::new(CategoryTable::builtin()).dry_run(true),
        dry.path(),
    );
    let (live_result, live_lines) =
        run_logged(&Organizer::new(CategoryTable::builtin()), live.path());

    let planned = moving_lines(&dry_lines);
    assert_eq!(planned.len(), 5);
    assert_eq!(planned, moving_lines(&live_lines));

    // Destinations line up too, relative to each root.
    let rel = |root: &Path, report: file_sorter::RunReport| -> Vec<_> {
        report
            .placements
            .into_iter()
            .map(|p| p.destination.strip_prefix(root).unwrap().to_path_buf())
            .collect()
    };
    assert_eq!(
        rel(dry.path(), dry_result.unwrap().unwrap()),
        rel(live.path(), live_result.unwrap().unwrap())
    );
    assert!(live.path().join("Documents/notes_1.txt").exists());
}
