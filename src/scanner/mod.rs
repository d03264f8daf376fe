//! Scanner module for path resolution and directory traversal.
//!
//! # Architecture
//!
//! - [`path_utils`]: turning user-supplied directory strings into absolute paths
//! - [`walker`]: lazy, sorted enumeration of the files under one directory
//!
//! # Example
//!
//! ```no_run
//! use namedupe::scanner::{normalize_paths, Walker, WalkerConfig};
//!
//! let dirs = normalize_paths(["backups/2023", "backups/2024"]).unwrap();
//! for dir in &dirs {
//!     let walker = Walker::new(dir, WalkerConfig::default());
//!     for entry in walker.walk() {
//!         match entry {
//!             Ok(path) => println!("{}", path.display()),
//!             Err(e) => eprintln!("Error: {}", e),
//!         }
//!     }
//! }
//! ```

pub mod path_utils;
pub mod walker;

use std::path::PathBuf;

pub use path_utils::{normalize_path, normalize_paths, PathError};
pub use walker::Walker;

/// Configuration for directory walking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkerConfig {
    /// Recurse into subdirectories. When `false`, only direct children of
    /// the root are visited.
    pub full_depth: bool,

    /// Follow symbolic links during traversal.
    /// Cycles are detected and reported as [`ScanError::Loop`].
    pub follow_symlinks: bool,

    /// Skip hidden files and directories (names starting with `.`).
    pub skip_hidden: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            full_depth: true,
            follow_symlinks: false,
            skip_hidden: false,
        }
    }
}

impl WalkerConfig {
    /// Set whether subdirectories are traversed.
    #[must_use]
    pub fn with_full_depth(mut self, full_depth: bool) -> Self {
        self.full_depth = full_depth;
        self
    }

    /// Set whether symbolic links are followed.
    #[must_use]
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Set whether hidden entries are skipped.
    #[must_use]
    pub fn with_skip_hidden(mut self, skip: bool) -> Self {
        self.skip_hidden = skip;
        self
    }
}

/// Errors that can occur during directory traversal.
///
/// Any of these aborts the run.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// Permission was denied when reading a directory or entry.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// An entry disappeared while it was being visited.
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    /// A followed symbolic link points back at one of its ancestors.
    #[error("Symbolic link loop: {path} points to ancestor {ancestor}")]
    Loop {
        /// The link that closes the cycle
        path: PathBuf,
        /// The directory it leads back to
        ancestor: PathBuf,
    },

    /// Any other I/O error.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
