use super::helpers::{canonical, path_str, run_report, touch};
use namedupe::duplicates::group_files_by_name;
use namedupe::output::NO_DUPLICATES;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_empty_directory_reports_zero_files() {
    let dir = tempdir().unwrap();

    let report = run_report(&[path_str(dir.path())]);

    assert!(report.contains("Strict duplicates"));
    assert!(report.contains("Total files count: 0\n"));
    assert!(report.contains(NO_DUPLICATES));
    assert!(!report.contains("Fuzzy duplicates"));
}

#[test]
fn test_nested_duplicates_found_at_full_depth() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "notes.txt");
    touch(dir.path(), "2023/notes.txt");
    touch(dir.path(), "2023/q1/notes.txt");
    touch(dir.path(), "2023/q1/other.txt");

    let report = run_report(&[path_str(dir.path())]);

    assert!(report.contains("Total files count: 4\n"));
    assert!(report.contains("\nnotes.txt:\n"));
    assert!(!report.contains("other.txt:"));
    assert!(report.contains(path_str(&canonical(dir.path()).join("2023/q1/notes.txt"))));
}

#[test]
fn test_shallow_walk_excludes_subdirectory_files() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "top.txt");
    touch(dir.path(), "sub/top.txt");
    touch(dir.path(), "sub/only-below.txt");

    let report = run_report(&[path_str(dir.path()), "--full_depth", "false"]);

    assert!(report.contains("Total files count: 1\n"));
    assert!(report.contains(NO_DUPLICATES));
    assert!(!report.contains("only-below.txt"));
}

#[test]
fn test_directories_are_not_counted() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("same/same")).unwrap();
    touch(dir.path(), "same/file");

    let groups = group_files_by_name(&[dir.path().to_path_buf()], true, None).unwrap();

    assert_eq!(groups.total_files(), 1);
    assert!(groups.strict.get("same").is_none());
}

#[test]
fn test_fuzzy_removes_every_occurrence() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "a/photo.jpg");
    touch(dir.path(), "b/photo_copy_copy.jpg");
    touch(dir.path(), "c/photo_copy.jpg");

    let report = run_report(&[path_str(dir.path()), "--ignore_substr", "_copy"]);

    let fuzzy_at = report.find("Fuzzy duplicates (ignore `_copy` substr)").unwrap();
    let fuzzy = &report[fuzzy_at..];
    assert!(fuzzy.contains("\nphoto.jpg:\n"));
    assert!(fuzzy.contains("Total files count: 3\n"));
    for name in ["a/photo.jpg", "b/photo_copy_copy.jpg", "c/photo_copy.jpg"] {
        assert!(fuzzy.contains(path_str(&canonical(dir.path()).join(name))));
    }
}

#[test]
fn test_whole_name_substring_groups_under_empty_key() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "a/_v1");
    touch(dir.path(), "b/_v1_v1");

    let groups = group_files_by_name(&[dir.path().to_path_buf()], true, Some("_v1")).unwrap();

    let sets = groups.fuzzy.duplicate_sets();
    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].name, "");
    assert_eq!(sets[0].len(), 2);
}

#[test]
fn test_paths_listed_in_sorted_order() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "c/x.txt");
    touch(dir.path(), "a/x.txt");
    touch(dir.path(), "b/x.txt");

    let report = run_report(&[path_str(dir.path())]);

    let positions: Vec<usize> = ["a/x.txt", "b/x.txt", "c/x.txt"]
        .iter()
        .map(|name| report.find(path_str(&canonical(dir.path()).join(name))).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let dir = tempdir().unwrap();
    for name in ["z/a.txt", "y/a.txt", "x/b_old.txt", "w/b.txt", "v/c.txt"] {
        touch(dir.path(), name);
    }
    let args = [path_str(dir.path()), "--ignore_substr", "_old"];

    let first = run_report(&args);
    let second = run_report(&args);

    assert_eq!(first, second);
}

#[test]
fn test_json_output() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "a/x.txt");
    touch(dir.path(), "b/x.txt");

    let report = run_report(&[path_str(dir.path()), "--output", "json"]);
    let parsed: serde_json::Value = serde_json::from_str(&report).unwrap();

    assert_eq!(parsed["strict"]["total_files"], 2);
    assert_eq!(parsed["strict"]["duplicates"][0]["name"], "x.txt");
    assert_eq!(
        parsed["strict"]["duplicates"][0]["files"]
            .as_array()
            .unwrap()
            .len(),
        2
    );
    assert!(parsed["fuzzy"].is_null());
}

#[test]
fn test_missing_directory_is_not_an_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("not-here");

    let report = run_report(&[path_str(&missing)]);

    assert!(report.contains("Total files count: 0\n"));
}

#[cfg(unix)]
#[test]
fn test_non_utf8_names_are_not_strict_duplicates() {
    use std::ffi::OsStr;
    use std::fs::File;
    use std::os::unix::ffi::OsStrExt;

    let dir = tempdir().unwrap();
    File::create(dir.path().join(OsStr::from_bytes(b"\xff.txt"))).unwrap();
    File::create(dir.path().join(OsStr::from_bytes(b"\xfe.txt"))).unwrap();
    File::create(dir.path().join(OsStr::from_bytes(b"\xff_v1.txt"))).unwrap();

    let groups = group_files_by_name(&[dir.path().to_path_buf()], true, Some("_v1")).unwrap();

    assert_eq!(groups.total_files(), 3);
    assert!(groups.strict.duplicate_sets().is_empty());

    let fuzzy = groups.fuzzy.duplicate_sets();
    assert_eq!(fuzzy.len(), 1);
    assert_eq!(fuzzy[0].name.as_bytes(), b"\xff.txt");
    assert_eq!(fuzzy[0].len(), 2);
}
