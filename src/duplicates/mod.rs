//! Name-based duplicate detection.
//!
//! This module provides:
//! - Name groupings keyed by strict or substring-stripped file names
//! - The walk-and-group pipeline over a list of input directories

pub mod finder;
pub mod groups;

pub use finder::{group_files_by_name, group_paths, FinderError, NameFinder, NameGroups};
pub use groups::{fuzzy_name, strict_name, DuplicateSet, NameGrouping};
