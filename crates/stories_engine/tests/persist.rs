use std::fs;

use stories_engine::{ensure_state_dir, write_atomically};
use tempfile::TempDir;

#[test]
fn creates_missing_state_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("state");
    assert!(!new_dir.exists());
    ensure_state_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing_content() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join(".stories_store.ron");

    write_atomically(&target, "(entries: {})").unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), "(entries: {})");

    write_atomically(&target, "(entries: {\"search\": \"Redux\"})").unwrap();
    assert_eq!(
        fs::read_to_string(&target).unwrap(),
        "(entries: {\"search\": \"Redux\"})"
    );
}

#[test]
fn no_partial_file_when_the_parent_is_not_a_directory() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("not_a_dir");
    fs::write(&blocker, "x").unwrap();

    let target = blocker.join("store.ron");
    assert!(write_atomically(&target, "data").is_err());
    assert!(!target.exists());
}
