use super::helpers::{canonical, path_str, run_report, touch};
use namedupe::duplicates::group_files_by_name;
use namedupe::output::NO_DUPLICATES;
use tempfile::tempdir;

#[test]
fn test_same_name_across_directories() {
    let a = tempdir().unwrap();
    let b = tempdir().unwrap();
    touch(a.path(), "x.txt");
    touch(b.path(), "x.txt");
    touch(b.path(), "y.txt");

    let report = run_report(&[path_str(a.path()), path_str(b.path())]);

    assert!(report.contains("Total files count: 3\n"));
    assert!(report.contains("\nx.txt:\n"));
    assert!(!report.contains("y.txt:"));
    assert!(!report.contains(NO_DUPLICATES));

    let mut expected = vec![
        canonical(a.path()).join("x.txt"),
        canonical(b.path()).join("x.txt"),
    ];
    expected.sort();
    let first = report.find(path_str(&expected[0])).unwrap();
    let second = report.find(path_str(&expected[1])).unwrap();
    assert!(first < second);
}

#[test]
fn test_versioned_names_with_filter() {
    let a = tempdir().unwrap();
    let b = tempdir().unwrap();
    touch(a.path(), "report_v1.log");
    touch(b.path(), "report_v2.log");

    let report = run_report(&[path_str(a.path()), path_str(b.path()), "--ignore_substr", "_v1"]);

    // report.log vs report_v2.log: still distinct after removing `_v1`
    assert_eq!(report.matches(NO_DUPLICATES).count(), 2);
    assert!(report.contains("Fuzzy duplicates (ignore `_v1` substr)"));
}

#[test]
fn test_fuzzy_match_across_directories() {
    let a = tempdir().unwrap();
    let b = tempdir().unwrap();
    touch(a.path(), "report_v1.log");
    touch(b.path(), "report.log");

    let groups = group_files_by_name(
        &[a.path().to_path_buf(), b.path().to_path_buf()],
        true,
        Some("_v1"),
    )
    .unwrap();

    assert!(groups.strict.duplicate_sets().is_empty());
    let sets = groups.fuzzy.duplicate_sets();
    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].name, "report.log");
    assert_eq!(sets[0].len(), 2);
}

#[test]
fn test_repeated_directory_counted_once() {
    let a = tempdir().unwrap();
    touch(a.path(), "x.txt");

    let report = run_report(&[path_str(a.path()), path_str(a.path())]);

    assert!(report.contains("Total files count: 1\n"));
    assert!(report.contains(NO_DUPLICATES));
}

#[test]
fn test_nested_roots_counted_once() {
    let a = tempdir().unwrap();
    touch(a.path(), "inner/x.txt");
    touch(a.path(), "y.txt");

    let inner = a.path().join("inner");
    let groups =
        group_files_by_name(&[a.path().to_path_buf(), inner], true, None).unwrap();

    assert_eq!(groups.total_files(), 2);
    assert!(groups.strict.duplicate_sets().is_empty());
}

#[test]
fn test_missing_directory_alongside_real_one() {
    let a = tempdir().unwrap();
    touch(a.path(), "x.txt");
    let missing = a.path().join("gone");

    let report = run_report(&[path_str(&missing), path_str(a.path())]);

    assert!(report.contains("Total files count: 1\n"));
}

#[test]
fn test_shallow_walk_across_directories() {
    let a = tempdir().unwrap();
    let b = tempdir().unwrap();
    touch(a.path(), "x.txt");
    touch(b.path(), "deep/x.txt");

    let report = run_report(&[path_str(a.path()), path_str(b.path()), "--full-depth", "no"]);

    assert!(report.contains("Total files count: 1\n"));
    assert!(report.contains(NO_DUPLICATES));
}

#[test]
fn test_aliased_root_counted_once() {
    let a = tempdir().unwrap();
    touch(a.path(), "a.txt");
    touch(a.path(), "sub/b.txt");
    let alias = a.path().join("sub").join("..");

    let report = run_report(&[path_str(a.path()), path_str(&alias)]);

    assert!(report.contains("Total files count: 2\n"));
    assert!(report.contains(NO_DUPLICATES));
    assert!(!report.contains(".."));
}

#[cfg(unix)]
#[test]
fn test_symlinked_root_counted_once() {
    let a = tempdir().unwrap();
    let links = tempdir().unwrap();
    touch(a.path(), "x.txt");
    let link = links.path().join("alias");
    std::os::unix::fs::symlink(a.path(), &link).unwrap();

    let report = run_report(&[path_str(a.path()), path_str(&link)]);

    assert!(report.contains("Total files count: 1\n"));
    assert!(report.contains(NO_DUPLICATES));
}
