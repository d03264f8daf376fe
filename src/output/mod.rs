//! Report formatters.
//!
//! - [`text`]: the human-readable sections, one per grouping
//! - [`json`]: a single document holding both sections
//!
//! # Example
//!
//! ```no_run
//! use namedupe::cli::OutputFormat;
//! use namedupe::duplicates::group_files_by_name;
//! use namedupe::output::write_reports;
//! use std::path::PathBuf;
//!
//! let groups = group_files_by_name(&[PathBuf::from("/backups")], true, Some("_v1")).unwrap();
//! write_reports(&mut std::io::stdout(), &groups, Some("_v1"), OutputFormat::Text).unwrap();
//! ```

pub mod json;
pub mod text;

use std::io::Write;

pub use json::JsonOutput;
pub use text::{fuzzy_caption, TextReport, NO_DUPLICATES, STRICT_CAPTION};

use crate::cli::OutputFormat;
use crate::duplicates::NameGroups;

/// Errors that can occur while writing reports.
#[derive(thiserror::Error, Debug)]
pub enum OutputError {
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error while writing
    #[error("I/O error while writing report: {0}")]
    Io(#[from] std::io::Error),
}

/// Write every report for one run.
///
/// Text output prints the strict section, then the fuzzy section only when
/// `ignore_substr` is a non-empty string.
///
/// # Errors
///
/// Returns [`OutputError`] if writing or serialization fails.
pub fn write_reports<W: Write>(
    writer: &mut W,
    groups: &NameGroups,
    ignore_substr: Option<&str>,
    format: OutputFormat,
) -> Result<(), OutputError> {
    let ignore_substr = ignore_substr.filter(|s| !s.is_empty());

    match format {
        OutputFormat::Text => {
            TextReport::new(&groups.strict, STRICT_CAPTION).write_to(writer)?;
            if let Some(substr) = ignore_substr {
                let caption = fuzzy_caption(substr);
                TextReport::new(&groups.fuzzy, &caption).write_to(writer)?;
            }
        }
        OutputFormat::Json => JsonOutput::new(groups, ignore_substr).write_to(writer)?,
    }

    writer.flush()?;
    Ok(())
}
