//! Plain-text report for one name grouping.
//!
//! # Layout
//!
//! ```text
//!
//!
//! ==========
//! Strict duplicates
//! ==========
//! Total files count: 3
//!
//!
//! x.txt:
//! /A/x.txt
//! /B/x.txt
//! ```
//!
//! When no key has more than one file, the list is replaced by a single
//! `no duplicates found` line. Keys and paths are both sorted, so the text
//! is identical across runs over an unchanged tree.

use std::io::{self, Write};

use crate::duplicates::NameGrouping;

/// Line drawn above and below the caption.
pub const SECTION_RULE: &str = "==========";

/// Printed instead of a list when there are no duplicate sets.
pub const NO_DUPLICATES: &str = "no duplicates found";

/// Caption of the strict report.
pub const STRICT_CAPTION: &str = "Strict duplicates";

/// Caption of the fuzzy report, naming the ignored substring.
#[must_use]
pub fn fuzzy_caption(ignore_substr: &str) -> String {
    format!("Fuzzy duplicates (ignore `{ignore_substr}` substr)")
}

/// Text report over one grouping.
#[derive(Debug, Clone, Copy)]
pub struct TextReport<'a> {
    grouping: &'a NameGrouping,
    caption: &'a str,
}

impl<'a> TextReport<'a> {
    /// Create a report with the given section caption.
    #[must_use]
    pub fn new(grouping: &'a NameGrouping, caption: &'a str) -> Self {
        Self { grouping, caption }
    }

    /// Write the report.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "\n")?;
        writeln!(writer, "{SECTION_RULE}")?;
        writeln!(writer, "{}", self.caption)?;
        writeln!(writer, "{SECTION_RULE}")?;
        writeln!(writer, "Total files count: {}\n", self.grouping.total_files())?;

        let sets = self.grouping.duplicate_sets();
        if sets.is_empty() {
            writeln!(writer, "{NO_DUPLICATES}")?;
            return Ok(());
        }

        for set in &sets {
            writeln!(writer, "\n{}:", set.display_name())?;
            for path in &set.files {
                writeln!(writer, "{}", path.display())?;
            }
        }
        Ok(())
    }

    /// Render the report into a string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_to(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}
