//! Directory argument normalization.
//!
//! Directory arguments are turned into absolute paths once, before any
//! traversal starts:
//!
//! - Relative paths are resolved against the current working directory.
//! - When the target exists it is canonicalized (symlinks resolved), so
//!   two spellings of one directory normalize to the same path.
//! - Otherwise `.` and `..` are folded lexically.
//!
//! Existence is not checked here. A directory that does not exist simply
//! yields no files when walked.
//!
//! # Example
//!
//! ```
//! use namedupe::scanner::path_utils::normalize_path;
//! use std::path::Path;
//!
//! # #[cfg(unix)]
//! # {
//! let abs = normalize_path(Path::new("/no-such-root-4b1e/archive/../2024")).unwrap();
//! assert_eq!(abs, Path::new("/no-such-root-4b1e/2024"));
//! # }
//!
//! assert!(normalize_path(Path::new("")).is_err());
//! ```

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Errors raised while resolving a directory argument.
#[derive(thiserror::Error, Debug)]
pub enum PathError {
    /// The argument was an empty string.
    #[error("Empty path given as directory")]
    Empty,

    /// The argument contains a NUL byte, which no filesystem accepts.
    #[error("Path contains a NUL byte: {0:?}")]
    NulByte(PathBuf),

    /// The current working directory could not be determined.
    #[error("Cannot determine current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    /// Resolution failed for a reason other than the path not existing.
    #[error("Cannot resolve {path}: {source}")]
    Io {
        /// The path being resolved
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Resolve a single directory argument to an absolute path.
///
/// # Errors
///
/// Returns [`PathError`] for empty paths, paths with NUL bytes, an
/// unreadable working directory, or an I/O failure during canonicalization
/// other than the target not existing.
pub fn normalize_path(path: &Path) -> Result<PathBuf, PathError> {
    if path.as_os_str().is_empty() {
        return Err(PathError::Empty);
    }
    if path.as_os_str().as_encoded_bytes().contains(&0) {
        return Err(PathError::NulByte(path.to_path_buf()));
    }

    match fs::canonicalize(path) {
        Ok(canonical) => Ok(canonical),
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
            log::debug!(
                "{} does not resolve on disk, folding it lexically",
                path.display()
            );
            let absolute = if path.is_absolute() {
                path.to_path_buf()
            } else {
                env::current_dir()
                    .map_err(PathError::CurrentDir)?
                    .join(path)
            };
            Ok(lexical_clean(&absolute))
        }
        Err(source) => Err(PathError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Resolve every directory argument, preserving order.
///
/// Stops at the first argument that fails to resolve.
///
/// # Errors
///
/// Propagates the first [`PathError`].
///
/// # Example
///
/// ```
/// use namedupe::scanner::normalize_paths;
/// use std::path::PathBuf;
///
/// let dirs = normalize_paths(["/srv/a", "/srv/b"]).unwrap();
/// assert_eq!(dirs, vec![PathBuf::from("/srv/a"), PathBuf::from("/srv/b")]);
/// ```
pub fn normalize_paths<I, P>(paths: I) -> Result<Vec<PathBuf>, PathError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    paths
        .into_iter()
        .map(|p| normalize_path(p.as_ref()))
        .collect()
}

/// Drop `.` components and let `..` consume the preceding component.
///
/// Only called on absolute paths, so `..` at the root stays at the root.
fn lexical_clean(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                cleaned.pop();
            }
            other => cleaned.push(other.as_os_str()),
        }
    }
    cleaned
}
