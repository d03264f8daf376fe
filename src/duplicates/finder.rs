//! Walk-and-group pipeline.
//!
//! [`NameFinder`] walks each input directory in order and buckets every file
//! it visits into a strict and, when a substring filter is configured, a
//! fuzzy [`NameGrouping`]. Both groupings come back together as
//! [`NameGroups`].
//!
//! The first traversal error aborts the whole run: there is no partial
//! result.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::groups::{fuzzy_name, strict_name, NameGrouping};
use crate::scanner::{ScanError, Walker, WalkerConfig};

/// Errors that can occur while grouping files.
#[derive(thiserror::Error, Debug)]
pub enum FinderError {
    /// Traversal of an input directory failed.
    #[error("Failed to scan {}", root.display())]
    Scan {
        /// The input directory being walked
        root: PathBuf,
        /// What went wrong
        #[source]
        source: ScanError,
    },
}

/// The two groupings produced by one traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameGroups {
    /// Keyed by the unmodified base name. Holds every file visited.
    pub strict: NameGrouping,
    /// Keyed by the base name with the ignored substring removed.
    /// Stays empty when no substring filter is configured.
    pub fuzzy: NameGrouping,
}

impl NameGroups {
    /// Create empty groupings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one file under its strict key and, if `ignore_substr` is a
    /// non-empty string, under its fuzzy key.
    ///
    /// Returns `false` if the path has no file name and was not recorded.
    pub fn add(&mut self, path: PathBuf, ignore_substr: Option<&str>) -> bool {
        let Some(name) = strict_name(&path) else {
            log::debug!("No file name, not grouped: {}", path.display());
            return false;
        };

        if let Some(substr) = ignore_substr.filter(|s| !s.is_empty()) {
            self.fuzzy.insert(fuzzy_name(&name, substr), path.clone());
        }
        self.strict.insert(name, path);
        true
    }

    /// Total files visited (the strict grouping's size).
    #[must_use]
    pub fn total_files(&self) -> usize {
        self.strict.total_files()
    }
}

/// Group an already enumerated sequence of file paths.
///
/// ```
/// use namedupe::duplicates::group_paths;
/// use std::path::PathBuf;
///
/// let groups = group_paths(
///     [PathBuf::from("/A/report_v1.log"), PathBuf::from("/B/report.log")],
///     Some("_v1"),
/// );
/// assert!(groups.strict.duplicate_sets().is_empty());
/// assert_eq!(groups.fuzzy.duplicate_sets()[0].name, "report.log");
/// ```
pub fn group_paths<I>(paths: I, ignore_substr: Option<&str>) -> NameGroups
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut groups = NameGroups::new();
    for path in paths {
        groups.add(path, ignore_substr);
    }
    groups
}

/// Walks input directories and groups the files found by name.
#[derive(Debug, Clone, Default)]
pub struct NameFinder {
    walker_config: WalkerConfig,
    ignore_substr: Option<String>,
}

impl NameFinder {
    /// Create a finder. An empty `ignore_substr` disables fuzzy grouping.
    #[must_use]
    pub fn new(walker_config: WalkerConfig, ignore_substr: Option<String>) -> Self {
        Self {
            walker_config,
            ignore_substr: ignore_substr.filter(|s| !s.is_empty()),
        }
    }

    /// The active substring filter, if any.
    #[must_use]
    pub fn ignore_substr(&self) -> Option<&str> {
        self.ignore_substr.as_deref()
    }

    /// Walk every directory in order and group the files found.
    ///
    /// A file reachable from more than one input directory (the same
    /// directory given twice, or one input nested in another) is recorded
    /// once, at its first visit. Paths are compared as given, so `dirs`
    /// should come from [`normalize_paths`](crate::scanner::normalize_paths).
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::Scan`] on the first traversal error.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use namedupe::duplicates::NameFinder;
    /// use namedupe::scanner::WalkerConfig;
    /// use std::path::PathBuf;
    ///
    /// let finder = NameFinder::new(WalkerConfig::default(), Some(" (copy)".to_string()));
    /// let groups = finder.find(&[PathBuf::from("/backups/a"), PathBuf::from("/backups/b")]).unwrap();
    /// println!("{} files", groups.total_files());
    /// ```
    pub fn find(&self, dirs: &[PathBuf]) -> Result<NameGroups, FinderError> {
        let mut groups = NameGroups::new();
        let mut seen: HashSet<PathBuf> = HashSet::new();

        for dir in dirs {
            log::info!("Scanning {}", dir.display());
            let before = groups.total_files();
            self.find_in(dir, &mut groups, &mut seen)?;
            log::debug!(
                "{}: {} files",
                dir.display(),
                groups.total_files() - before
            );
        }

        log::debug!(
            "Grouped {} files under {} names",
            groups.total_files(),
            groups.strict.len()
        );
        Ok(groups)
    }

    fn find_in(
        &self,
        dir: &Path,
        groups: &mut NameGroups,
        seen: &mut HashSet<PathBuf>,
    ) -> Result<(), FinderError> {
        let walker = Walker::new(dir, self.walker_config.clone());

        for entry in walker.walk() {
            let path = entry.map_err(|source| FinderError::Scan {
                root: walker.root().to_path_buf(),
                source,
            })?;

            if seen.contains(&path) {
                log::debug!("Already recorded, skipping: {}", path.display());
                continue;
            }
            if groups.add(path.clone(), self.ignore_substr()) {
                seen.insert(path);
            }
        }
        Ok(())
    }
}

/// Walk `dirs` and build both groupings in one pass.
///
/// Convenience over [`NameFinder`] for callers that only need the depth
/// switch and the substring filter.
///
/// # Errors
///
/// Returns [`FinderError::Scan`] on the first traversal error.
pub fn group_files_by_name(
    dirs: &[PathBuf],
    full_depth: bool,
    ignore_substr: Option<&str>,
) -> Result<NameGroups, FinderError> {
    let walker_config = WalkerConfig::default().with_full_depth(full_depth);
    NameFinder::new(walker_config, ignore_substr.map(str::to_string)).find(dirs)
}
