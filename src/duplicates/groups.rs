//! Name-keyed file grouping.
//!
//! # Overview
//!
//! A [`NameGrouping`] maps a name key to every path seen under that key, in
//! first-seen order. Two keys exist per file:
//!
//! - the *strict* key: the base name, unmodified
//! - the *fuzzy* key: the base name with every occurrence of a configured
//!   substring removed (see [`fuzzy_name`])
//!
//! Duplicate sets are derived on demand by [`NameGrouping::duplicate_sets`],
//! which sorts both the keys and the paths inside each set.
//!
//! # Example
//!
//! ```
//! use namedupe::duplicates::NameGrouping;
//! use std::path::PathBuf;
//!
//! let mut grouping = NameGrouping::new();
//! grouping.insert("x.txt", PathBuf::from("/B/x.txt"));
//! grouping.insert("x.txt", PathBuf::from("/A/x.txt"));
//! grouping.insert("y.txt", PathBuf::from("/B/y.txt"));
//!
//! assert_eq!(grouping.total_files(), 3);
//!
//! let sets = grouping.duplicate_sets();
//! assert_eq!(sets.len(), 1);
//! assert_eq!(sets[0].name, "x.txt");
//! assert_eq!(sets[0].files, vec![PathBuf::from("/A/x.txt"), PathBuf::from("/B/x.txt")]);
//! ```

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Remove every occurrence of `ignore_substr` from `name`.
///
/// An empty result is a valid key: names made up entirely of the ignored
/// substring all group together under `""`. Names that are not valid
/// Unicode are matched on their raw encoding, so bytes outside the
/// substring are kept as they are.
///
/// ```
/// use namedupe::duplicates::fuzzy_name;
///
/// assert_eq!(fuzzy_name("report_v1.log", "_v1"), "report.log");
/// assert_eq!(fuzzy_name("a_v1_v1.txt", "_v1"), "a.txt");
/// assert_eq!(fuzzy_name("report_v2.log", "_v1"), "report_v2.log");
/// ```
#[must_use]
pub fn fuzzy_name(name: impl AsRef<OsStr>, ignore_substr: &str) -> OsString {
    let name = name.as_ref();
    if ignore_substr.is_empty() {
        return name.to_os_string();
    }
    match name.to_str() {
        Some(utf8) => OsString::from(utf8.replace(ignore_substr, "")),
        None => remove_encoded(name, ignore_substr),
    }
}

#[cfg(unix)]
fn remove_encoded(name: &OsStr, ignore_substr: &str) -> OsString {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    OsString::from_vec(remove_all(name.as_bytes(), ignore_substr.as_bytes()))
}

#[cfg(windows)]
fn remove_encoded(name: &OsStr, ignore_substr: &str) -> OsString {
    use std::os::windows::ffi::{OsStrExt, OsStringExt};

    let wide: Vec<u16> = name.encode_wide().collect();
    let needle: Vec<u16> = ignore_substr.encode_utf16().collect();
    OsString::from_wide(&remove_all(&wide, &needle))
}

#[cfg(not(any(unix, windows)))]
fn remove_encoded(name: &OsStr, ignore_substr: &str) -> OsString {
    OsString::from(name.to_string_lossy().replace(ignore_substr, ""))
}

/// Left-to-right removal of non-overlapping `needle` runs.
#[cfg(any(unix, windows))]
fn remove_all<T: PartialEq + Copy>(haystack: &[T], needle: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(haystack.len());
    let mut i = 0;
    while i < haystack.len() {
        if haystack[i..].starts_with(needle) {
            i += needle.len();
        } else {
            out.push(haystack[i]);
            i += 1;
        }
    }
    out
}

/// Strict grouping key for a path: its base name, unmodified.
///
/// Paths without a final component (such as `/`) have no key.
#[must_use]
pub fn strict_name(path: &Path) -> Option<OsString> {
    path.file_name().map(OsStr::to_os_string)
}

/// A mapping from name key to the paths sharing it.
///
/// Keys are kept in their native encoding and only converted for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameGrouping {
    groups: BTreeMap<OsString, Vec<PathBuf>>,
}

impl NameGrouping {
    /// Create an empty grouping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a path under `key`, after any paths already recorded for it.
    pub fn insert(&mut self, key: impl Into<OsString>, path: PathBuf) {
        self.groups.entry(key.into()).or_default().push(path);
    }

    /// Paths recorded under `key`, in insertion order.
    #[must_use]
    pub fn get<K: AsRef<OsStr> + ?Sized>(&self, key: &K) -> Option<&[PathBuf]> {
        self.groups.get(key.as_ref()).map(Vec::as_slice)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether no file has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Sum of all group sizes: every file recorded, duplicate or not.
    #[must_use]
    pub fn total_files(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Iterate over `(key, paths)` in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &[PathBuf])> {
        self.groups
            .iter()
            .map(|(key, paths)| (key.as_os_str(), paths.as_slice()))
    }

    /// Every group with more than one member, keys ascending, paths sorted.
    #[must_use]
    pub fn duplicate_sets(&self) -> Vec<DuplicateSet> {
        self.groups
            .iter()
            .filter(|(_, paths)| paths.len() > 1)
            .map(|(name, paths)| DuplicateSet::new(name.clone(), paths.clone()))
            .collect()
    }
}

/// Files sharing one name key. Only built at report time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateSet {
    /// The shared key
    pub name: OsString,
    /// Member paths in ascending order
    pub files: Vec<PathBuf>,
}

impl DuplicateSet {
    /// Create a set, sorting its paths.
    #[must_use]
    pub fn new(name: impl Into<OsString>, mut files: Vec<PathBuf>) -> Self {
        files.sort();
        Self {
            name: name.into(),
            files,
        }
    }

    /// The key for printing. Invalid sequences become U+FFFD.
    #[must_use]
    pub fn display_name(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    /// Number of files in this set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if this set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
