//! JSON output for scripting.
//!
//! # Output Schema
//!
//! ```json
//! {
//!   "strict": {
//!     "caption": "Strict duplicates",
//!     "total_files": 3,
//!     "duplicate_sets": 1,
//!     "duplicates": [
//!       { "name": "x.txt", "files": ["/A/x.txt", "/B/x.txt"] }
//!     ]
//!   },
//!   "fuzzy": null
//! }
//! ```
//!
//! `fuzzy` is only present as an object when a substring filter is active.
//! Ordering matches the text report.

use std::io::Write;

use serde::Serialize;

use super::text::{fuzzy_caption, STRICT_CAPTION};
use crate::duplicates::{DuplicateSet, NameGroups, NameGrouping};

/// One duplicate set in JSON form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonDuplicateSet {
    /// The shared name key
    pub name: String,
    /// Member paths, sorted
    pub files: Vec<String>,
}

impl From<&DuplicateSet> for JsonDuplicateSet {
    fn from(set: &DuplicateSet) -> Self {
        Self {
            name: set.display_name().into_owned(),
            files: set
                .files
                .iter()
                .map(|p| p.to_string_lossy().into_owned())
                .collect(),
        }
    }
}

/// One report section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonSection {
    /// Section caption, same as the text report
    pub caption: String,
    /// Every file in the grouping
    pub total_files: usize,
    /// Number of keys with more than one file
    pub duplicate_sets: usize,
    /// The sets themselves
    pub duplicates: Vec<JsonDuplicateSet>,
}

impl JsonSection {
    /// Build a section from a grouping.
    #[must_use]
    pub fn new(grouping: &NameGrouping, caption: impl Into<String>) -> Self {
        let duplicates: Vec<JsonDuplicateSet> = grouping
            .duplicate_sets()
            .iter()
            .map(JsonDuplicateSet::from)
            .collect();
        Self {
            caption: caption.into(),
            total_files: grouping.total_files(),
            duplicate_sets: duplicates.len(),
            duplicates,
        }
    }
}

/// Complete JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonOutput {
    /// Exact-name section
    pub strict: JsonSection,
    /// Substring-stripped section, when a filter is configured
    pub fuzzy: Option<JsonSection>,
}

impl JsonOutput {
    /// Build the document. An empty `ignore_substr` counts as none.
    #[must_use]
    pub fn new(groups: &NameGroups, ignore_substr: Option<&str>) -> Self {
        Self {
            strict: JsonSection::new(&groups.strict, STRICT_CAPTION),
            fuzzy: ignore_substr
                .filter(|s| !s.is_empty())
                .map(|s| JsonSection::new(&groups.fuzzy, fuzzy_caption(s))),
        }
    }

    /// Serialize to a pretty-printed JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails (unlikely for valid data).
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write pretty JSON followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), super::OutputError> {
        let json = self.to_json_pretty()?;
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}
