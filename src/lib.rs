//! NameDupe - Name-based Duplicate File Finder
//!
//! Scans one or more directory trees and reports files that share a base
//! name, either exactly or after removing a configured substring from each
//! name. Only paths are inspected; file contents are never read.
//!
//! The run is a single linear pipeline:
//!
//! 1. [`scanner::normalize_paths`] turns directory arguments into absolute paths
//! 2. [`duplicates::NameFinder`] walks each directory and builds the strict
//!    and fuzzy groupings
//! 3. [`output::write_reports`] prints every group with more than one member

pub mod cli;
pub mod config;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod output;
pub mod scanner;

use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::cli::Cli;
use crate::config::ScanConfig;
use crate::duplicates::NameFinder;
use crate::error::ExitCode;

/// Run the application with reports written to stdout.
///
/// # Errors
///
/// Returns an error if configuration, path resolution, traversal or
/// writing the report fails.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_app_with_writer(cli, &mut out)
}

/// Run the application, writing reports to `writer`.
///
/// Nothing is written until every directory has been walked, so a failed
/// traversal leaves `writer` untouched.
///
/// # Errors
///
/// Returns an error if configuration, path resolution, traversal or
/// writing the report fails.
pub fn run_app_with_writer<W: Write>(cli: Cli, writer: &mut W) -> Result<ExitCode> {
    let config = ScanConfig::from_cli(&cli).context("Failed to resolve configuration")?;
    log::debug!("Resolved configuration: {:?}", config);

    let finder = NameFinder::new(config.walker.clone(), config.ignore_substr.clone());
    let groups = finder.find(&config.dirs)?;

    log::info!(
        "Found {} files, {} strict duplicate sets",
        groups.total_files(),
        groups.strict.duplicate_sets().len()
    );

    output::write_reports(
        writer,
        &groups,
        config.ignore_substr.as_deref(),
        config.output,
    )
    .context("Failed to write report")?;

    Ok(ExitCode::Success)
}
