mod common;

use std::fs;
use tempfile::tempdir;

use common::{level, message, run_logged, snapshot};
use file_sorter::{CategoryTable, Organizer};

#[test]
fn missing_directory_logs_one_error_and_touches_nothing() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("bystander.jpg"), b"x").unwrap();
    let before = snapshot(td.path());
    let target = td.path().join("does-not-exist");

    let (result, lines) = run_logged(&Organizer::new(CategoryTable::builtin()), &target);

    assert!(result.unwrap().is_none());
    assert_eq!(lines.len(), 1, "{lines:?}");
    assert_eq!(level(&lines[0]), "ERROR");
    assert_eq!(
        message(&lines[0]),
        format!("Target directory '{}' does not exist.", target.display())
    );
    assert_eq!(snapshot(td.path()), before);
}

#[test]
fn missing_directory_in_dry_run_is_reported_the_same_way() {
    let td = tempdir().unwrap();
    let target = td.path().join("nope");
    let org = Organizer::new(CategoryTable::builtin()).dry_run(true);
    let (result, lines) = run_logged(&org, &target);
    assert!(result.unwrap().is_none());
    assert_eq!(lines.len(), 1);
    assert!(message(&lines[0]).ends_with("does not exist."));
}

#[test]
fn file_as_target_is_rejected_without_changes() {
    let td = tempdir().unwrap();
    let file = td.path().join("notes.txt");
    fs::write(&file, b"x").unwrap();
    let before = snapshot(td.path());

    let (result, lines) = run_logged(&Organizer::new(CategoryTable::builtin()), &file);

    assert!(result.unwrap().is_none());
    assert_eq!(lines.len(), 1, "{lines:?}");
    assert_eq!(level(&lines[0]), "ERROR");
    assert!(message(&lines[0]).ends_with("is not a directory."), "{}", lines[0]);
    assert_eq!(snapshot(td.path()), before);
}
