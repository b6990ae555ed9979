use sizedupe::actions::{delete_selected, DeleteConfig, DeleteError, DeleteFailurePolicy};
use sizedupe::duplicates::{
    build_size_index, select_multiple, sort_sizes, DuplicateFinder, DuplicateIndex,
    EnumeratedDuplicates, HashGroup, SortOrder,
};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn numbered(paths: &[PathBuf]) -> EnumeratedDuplicates {
    let mut index = DuplicateIndex::new();
    index.insert(1, vec![HashGroup::new([7; 32], paths.to_vec())]);
    EnumeratedDuplicates::enumerate(&index, &[1])
}

#[test]
fn test_delete_only_selected_file() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a");
    let b = dir.path().join("b");
    fs::write(&a, b"12345").unwrap();
    fs::write(&b, b"12345").unwrap();

    let numbered = numbered(&[a.clone(), b.clone()]);
    let result = delete_selected(&numbered, &[1], &DeleteConfig::default());

    assert_eq!(result.bytes_freed, 5);
    assert!(!a.exists());
    assert!(b.exists());
}

#[test]
fn test_delete_unknown_number_is_noop() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a");
    let b = dir.path().join("b");
    fs::write(&a, b"12345").unwrap();
    fs::write(&b, b"12345").unwrap();

    let numbered = numbered(&[a.clone(), b.clone()]);
    let result = delete_selected(&numbered, &[3], &DeleteConfig::default());

    assert_eq!(result.bytes_freed, 0);
    assert!(result.successes.is_empty());
    assert!(result.failures.is_empty());
    assert!(a.exists() && b.exists());
}

#[test]
fn test_delete_uses_size_at_deletion_time() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a");
    let b = dir.path().join("b");
    fs::write(&a, b"1234").unwrap();
    fs::write(&b, b"1234").unwrap();

    let numbered = numbered(&[a.clone(), b]);
    fs::write(&a, b"grown to twenty bytes").unwrap();

    let result = delete_selected(&numbered, &[1], &DeleteConfig::default());
    assert_eq!(result.bytes_freed, 21);
}

#[test]
fn test_delete_abort_stops_batch() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a");
    let b = dir.path().join("b");
    let c = dir.path().join("c");
    fs::write(&a, b"xx").unwrap();
    fs::write(&c, b"xx").unwrap();

    let numbered = numbered(&[a.clone(), b, c.clone()]);
    let result = delete_selected(&numbered, &[1, 2, 3], &DeleteConfig::default());

    assert!(result.aborted);
    assert_eq!(result.bytes_freed, 2);
    assert_eq!(result.failure_count(), 1);
    assert!(matches!(result.failures[0].error, DeleteError::NotFound(_)));
    assert!(!a.exists());
    assert!(c.exists());
}

#[test]
fn test_delete_continue_attempts_everything() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a");
    let b = dir.path().join("b");
    let c = dir.path().join("c");
    fs::write(&a, b"xx").unwrap();
    fs::write(&c, b"xx").unwrap();

    let config = DeleteConfig::default().with_failure_policy(DeleteFailurePolicy::Continue);
    let numbered = numbered(&[a.clone(), b, c.clone()]);
    let result = delete_selected(&numbered, &[1, 2, 3], &config);

    assert!(!result.aborted);
    assert_eq!(result.bytes_freed, 4);
    assert_eq!(result.success_count(), 2);
    assert_eq!(result.failures[0].number, 2);
    assert!(!a.exists());
    assert!(!c.exists());
}

#[test]
fn test_delete_after_full_detection() {
    let dir = tempdir().unwrap();
    for name in ["x1", "x2", "x3"] {
        fs::write(dir.path().join(name), b"duplicate body").unwrap();
    }
    fs::write(dir.path().join("other"), b"distinct  body").unwrap();

    let index = select_multiple(build_size_index(dir.path()).unwrap());
    let detection = DuplicateFinder::with_defaults().find_duplicates(&index).unwrap();
    let order = sort_sizes(&detection.duplicates, SortOrder::Descending);
    let numbered = EnumeratedDuplicates::enumerate(&detection.duplicates, &order);
    assert_eq!(numbered.len(), 3);

    let selection = numbered.parse_selection("2 3").unwrap();
    let result = delete_selected(&numbered, &selection, &DeleteConfig::default());

    assert_eq!(result.bytes_freed, 28);
    assert!(dir.path().join("x1").exists());
    assert!(!dir.path().join("x2").exists());
    assert!(!dir.path().join("x3").exists());
    assert!(dir.path().join("other").exists());
}
