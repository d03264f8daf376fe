//! Directory walker built on `walkdir`.
//!
//! # Overview
//!
//! [`Walker`] enumerates the non-directory entries under one root, lazily and
//! in sorted order. Directories are never yielded; they are descended into
//! when [`WalkerConfig::full_depth`] is set and ignored otherwise.
//!
//! - A root that does not exist, or is not a directory, yields nothing.
//! - Symbolic links are not followed by default. A link that points at a
//!   directory is treated like a directory entry (skipped); any other link,
//!   including a dangling one, is yielded as a file.
//! - Traversal errors are yielded as [`ScanError`] values. Callers decide
//!   whether to stop; the finder stops at the first one.
//!
//! # Example
//!
//! ```no_run
//! use namedupe::scanner::{Walker, WalkerConfig};
//! use std::path::Path;
//!
//! let config = WalkerConfig::default().with_full_depth(false);
//! let walker = Walker::new(Path::new("/home/user/Downloads"), config);
//! for entry in walker.walk() {
//!     match entry {
//!         Ok(path) => println!("{}", path.display()),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::{ScanError, WalkerConfig};

/// Lazy file enumerator for a single root directory.
#[derive(Debug)]
pub struct Walker {
    /// Root path to walk
    root: PathBuf,
    /// Walker configuration
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root.
    #[must_use]
    pub fn new(path: &Path, config: WalkerConfig) -> Self {
        Self {
            root: path.to_path_buf(),
            config,
        }
    }

    /// The root this walker enumerates.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the tree, yielding the path of every non-directory entry.
    ///
    /// Entries are sorted by file name within each directory, so the
    /// sequence is stable for an unchanged tree.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use namedupe::scanner::{Walker, WalkerConfig};
    /// use std::path::Path;
    ///
    /// let walker = Walker::new(Path::new("."), WalkerConfig::default());
    /// let files: Vec<_> = walker.walk().filter_map(Result::ok).collect();
    /// println!("Found {} files", files.len());
    /// ```
    pub fn walk(&self) -> impl Iterator<Item = Result<PathBuf, ScanError>> + '_ {
        let entries = if self.root.is_dir() {
            log::debug!("Walking {}", self.root.display());
            Some(self.build_walkdir())
        } else {
            log::warn!(
                "Not an existing directory, nothing to scan: {}",
                self.root.display()
            );
            None
        };

        let skip_hidden = self.config.skip_hidden;
        entries
            .into_iter()
            .flat_map(move |walk| {
                // An input directory is never skipped as hidden.
                walk.into_iter().filter_entry(move |entry| {
                    entry.depth() == 0 || !(skip_hidden && is_hidden(entry))
                })
            })
            .filter_map(move |entry_result| match entry_result {
                Ok(entry) => self.process_entry(entry),
                Err(e) => Some(Err(self.convert_error(e))),
            })
    }

    fn build_walkdir(&self) -> WalkDir {
        let walk = WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(self.config.follow_symlinks)
            .sort_by_file_name();

        if self.config.full_depth {
            walk
        } else {
            walk.max_depth(1)
        }
    }

    /// Keep files, drop directories and links to directories.
    fn process_entry(&self, entry: DirEntry) -> Option<Result<PathBuf, ScanError>> {
        let file_type = entry.file_type();

        if file_type.is_dir() {
            log::trace!("Entering directory: {}", entry.path().display());
            return None;
        }

        if file_type.is_symlink() && points_to_dir(entry.path()) {
            log::trace!("Skipping link to directory: {}", entry.path().display());
            return None;
        }

        log::trace!("File: {}", entry.path().display());
        Some(Ok(entry.into_path()))
    }

    fn convert_error(&self, error: walkdir::Error) -> ScanError {
        let path = error
            .path()
            .map_or_else(|| self.root.clone(), Path::to_path_buf);
        log::warn!("Walker error for {}: {}", path.display(), error);

        if let Some(ancestor) = error.loop_ancestor() {
            return ScanError::Loop {
                ancestor: ancestor.to_path_buf(),
                path,
            };
        }

        match error.into_io_error() {
            Some(io) if io.kind() == ErrorKind::PermissionDenied => {
                ScanError::PermissionDenied(path)
            }
            Some(io) if io.kind() == ErrorKind::NotFound => ScanError::NotFound(path),
            Some(source) => ScanError::Io { path, source },
            None => ScanError::Io {
                path,
                source: std::io::Error::other("directory walk failed"),
            },
        }
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

/// Whether a symbolic link resolves to a directory. Dangling links do not.
fn points_to_dir(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|m| m.is_dir())
}
