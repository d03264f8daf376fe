//! Command-line interface definitions for NameDupe.
//!
//! A single command: one or more directories, plus options controlling the
//! traversal depth and the substring ignored when comparing names.
//!
//! # Example
//!
//! ```bash
//! # Strict duplicates across two backup folders
//! namedupe ~/backup-2023 ~/backup-2024
//!
//! # Only direct children of each directory
//! namedupe ~/Downloads --full_depth false
//!
//! # Also report names that match once " (copy)" is removed
//! namedupe ~/Photos --ignore_substr " (copy)"
//! ```

use clap::builder::BoolishValueParser;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Find files that share a name across directory trees.
///
/// Files are grouped by their base name. With `--ignore_substr`, a second
/// report groups names after every occurrence of the substring is removed.
#[derive(Debug, Parser)]
#[command(name = "namedupe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directories to scan (relative paths resolve against the current directory)
    #[arg(value_name = "DIR", required = true, num_args = 1..)]
    pub dirs: Vec<PathBuf>,

    /// Recurse into subdirectories; `false` only looks at direct children [default: true]
    #[arg(
        long = "full_depth",
        visible_alias = "full-depth",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub full_depth: Option<bool>,

    /// Substring removed from file names before comparing them (fuzzy matching)
    #[arg(
        long = "ignore_substr",
        visible_alias = "ignore-substr",
        value_name = "SUBSTR",
        allow_hyphen_values = true
    )]
    pub ignore_substr: Option<String>,

    /// Follow symbolic links during traversal
    ///
    /// Symlink cycles are reported as errors and abort the run.
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Skip hidden files and directories (starting with .)
    #[arg(long)]
    pub skip_hidden: bool,

    /// Report format
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// TOML file with default option values
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print fatal errors as a JSON object on stderr
    #[arg(long)]
    pub json_errors: bool,
}

/// Output format for reports.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable sections on stdout
    #[default]
    Text,
    /// A single pretty-printed JSON document on stdout
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
