use sizedupe::duplicates::{
    build_size_index, index_path_count, select_extension, select_multiple, sort_sizes,
    DuplicateFinder, EnumeratedDuplicates, FinderConfig, HashFailurePolicy, SortOrder,
};
use sizedupe::scanner::ScanError;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use tempfile::tempdir;

fn write(path: PathBuf, content: &[u8]) {
    File::create(path).unwrap().write_all(content).unwrap();
}

#[test]
fn test_scan_empty_directory() {
    let dir = tempdir().unwrap();

    let index = build_size_index(dir.path()).unwrap();
    assert!(index.is_empty());

    let candidates = select_multiple(select_extension(index, ""));
    let order = sort_sizes(&candidates, SortOrder::Descending);
    assert!(order.is_empty());

    let detection = DuplicateFinder::with_defaults()
        .find_duplicates(&candidates)
        .unwrap();
    let numbered = EnumeratedDuplicates::enumerate(&detection.duplicates, &order);

    assert!(numbered.is_empty());
    assert!(numbered.parse_selection("1").is_err());
}

#[test]
fn test_scan_extension_scenario() {
    let dir = tempdir().unwrap();
    write(dir.path().join("a.txt"), b"abcd");
    write(dir.path().join("b.txt"), b"abcd");
    write(dir.path().join("c.txt"), b"wxyz");
    write(dir.path().join("d.log"), b"abcd");

    let index = build_size_index(dir.path()).unwrap();
    assert_eq!(index_path_count(&index), 4);

    let filtered = select_extension(index, "txt");
    assert_eq!(
        filtered.get(&4).unwrap(),
        &vec![
            dir.path().join("a.txt"),
            dir.path().join("b.txt"),
            dir.path().join("c.txt"),
        ]
    );

    let candidates = select_multiple(filtered);
    assert_eq!(candidates.len(), 1);

    let detection = DuplicateFinder::with_defaults()
        .find_duplicates(&candidates)
        .unwrap();
    let groups = detection.duplicates.get(&4).unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(
        groups[0].paths,
        vec![dir.path().join("a.txt"), dir.path().join("b.txt")]
    );

    let order = sort_sizes(&candidates, SortOrder::Descending);
    let numbered = EnumeratedDuplicates::enumerate(&detection.duplicates, &order);
    assert_eq!(numbered.len(), 2);
    assert_eq!(numbered.get(1), Some(dir.path().join("a.txt").as_path()));
    assert_eq!(numbered.get(2), Some(dir.path().join("b.txt").as_path()));
}

#[test]
fn test_scan_nested_directories() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("one/two")).unwrap();
    write(dir.path().join("top.bin"), b"same");
    write(dir.path().join("one/mid.bin"), b"same");
    write(dir.path().join("one/two/deep.bin"), b"same");

    let index = build_size_index(dir.path()).unwrap();
    let detection = DuplicateFinder::with_defaults().find_duplicates(&index).unwrap();

    assert_eq!(detection.stats.duplicate_groups, 1);
    assert_eq!(detection.stats.duplicate_files, 3);
    assert_eq!(detection.stats.reclaimable_bytes, 8);
}

#[test]
fn test_scan_zero_byte_files_are_duplicates() {
    let dir = tempdir().unwrap();
    write(dir.path().join("empty1"), b"");
    write(dir.path().join("empty2"), b"");

    let index = build_size_index(dir.path()).unwrap();
    let detection = DuplicateFinder::with_defaults().find_duplicates(&index).unwrap();

    assert_eq!(detection.duplicates.get(&0).map(|g| g[0].len()), Some(2));
    assert_eq!(detection.stats.reclaimable_bytes, 0);
}

#[test]
fn test_scan_size_order_controls_numbering() {
    let dir = tempdir().unwrap();
    write(dir.path().join("s1"), b"ab");
    write(dir.path().join("s2"), b"ab");
    write(dir.path().join("l1"), b"abcdef");
    write(dir.path().join("l2"), b"abcdef");

    let index = select_multiple(build_size_index(dir.path()).unwrap());
    let detection = DuplicateFinder::with_defaults().find_duplicates(&index).unwrap();

    let desc = EnumeratedDuplicates::enumerate(
        &detection.duplicates,
        &sort_sizes(&index, SortOrder::Descending),
    );
    let asc = EnumeratedDuplicates::enumerate(
        &detection.duplicates,
        &sort_sizes(&index, SortOrder::Ascending),
    );

    assert_eq!(desc.get(1), Some(dir.path().join("l1").as_path()));
    assert_eq!(asc.get(1), Some(dir.path().join("s1").as_path()));
}

#[test]
fn test_scan_parallel_matches_sequential() {
    let dir = tempdir().unwrap();
    for i in 0..20 {
        let content = format!("content-{}", i % 4);
        write(dir.path().join(format!("f{:02}.dat", i)), content.as_bytes());
    }

    let index = select_multiple(build_size_index(dir.path()).unwrap());
    let sequential = DuplicateFinder::with_defaults().find_duplicates(&index).unwrap();
    let parallel = DuplicateFinder::new(FinderConfig::default().with_hash_threads(4))
        .find_duplicates(&index)
        .unwrap();

    assert_eq!(sequential.duplicates, parallel.duplicates);
    assert_eq!(sequential.stats, parallel.stats);
}

#[test]
fn test_scan_missing_root_is_fatal() {
    let dir = tempdir().unwrap();
    let err = build_size_index(&dir.path().join("nope")).unwrap_err();
    assert!(matches!(err, ScanError::NotFound(_)));
}

#[test]
fn test_scan_file_root_is_fatal() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("plain.txt");
    write(file.clone(), b"x");

    let err = build_size_index(&file).unwrap_err();
    assert!(matches!(err, ScanError::NotADirectory(_)));
}

#[test]
fn test_scan_vanished_file_abort_and_skip() {
    let dir = tempdir().unwrap();
    write(dir.path().join("a"), b"1234");
    write(dir.path().join("b"), b"1234");
    write(dir.path().join("c"), b"1234");

    let index = build_size_index(dir.path()).unwrap();
    fs::remove_file(dir.path().join("b")).unwrap();

    let abort = DuplicateFinder::with_defaults().find_duplicates(&index);
    assert!(abort.is_err());

    let skip = DuplicateFinder::new(
        FinderConfig::default().with_failure_policy(HashFailurePolicy::Skip),
    )
    .find_duplicates(&index)
    .unwrap();
    assert_eq!(skip.skipped.len(), 1);
    assert_eq!(skip.skipped[0].path, dir.path().join("b"));
    assert_eq!(skip.stats.duplicate_files, 2);
}
