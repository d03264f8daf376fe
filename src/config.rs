//! Run configuration.
//!
//! Every option is resolved once, at startup, into an immutable
//! [`ScanConfig`] that is handed to the finder and the reporters. Values are
//! layered (lowest to highest priority):
//!
//! 1. Built-in defaults
//! 2. A TOML file named with `--config` (never discovered implicitly)
//! 3. Command-line flags
//!
//! ```toml
//! # namedupe.toml
//! full_depth = false
//! ignore_substr = " (copy)"
//! skip_hidden = true
//! output = "json"
//! ```

use std::path::{Path, PathBuf};

use figment::providers::{Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::cli::{Cli, OutputFormat};
use crate::scanner::{normalize_paths, PathError, WalkerConfig};

/// Errors that can occur while resolving configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The file named with `--config` does not exist.
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The config file could not be read or has invalid values.
    #[error("Invalid config file {}: {source}", path.display())]
    Invalid {
        /// The config file
        path: PathBuf,
        /// Extraction error with the offending key
        #[source]
        source: Box<figment::Error>,
    },

    /// A directory argument could not be resolved.
    #[error(transparent)]
    Path(#[from] PathError),
}

/// Option defaults that can be stored in a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Recurse into subdirectories
    pub full_depth: bool,
    /// Substring ignored when comparing names
    pub ignore_substr: Option<String>,
    /// Follow symbolic links
    pub follow_symlinks: bool,
    /// Skip hidden entries
    pub skip_hidden: bool,
    /// Report format
    pub output: OutputFormat,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            full_depth: true,
            ignore_substr: None,
            follow_symlinks: false,
            skip_hidden: false,
            output: OutputFormat::Text,
        }
    }
}

impl FileConfig {
    /// Load a config file layered over the defaults.
    ///
    /// Keys missing from the file keep their default value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if the file is missing and
    /// [`ConfigError::Invalid`] if it cannot be parsed.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(|e| ConfigError::Invalid {
                path: path.to_path_buf(),
                source: Box::new(e),
            })
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Absolute input directories, in argument order
    pub dirs: Vec<PathBuf>,
    /// Traversal settings
    pub walker: WalkerConfig,
    /// Substring ignored for fuzzy matching; never `Some("")`
    pub ignore_substr: Option<String>,
    /// Report format
    pub output: OutputFormat,
}

impl ScanConfig {
    /// Create a configuration with default options for the given
    /// directories, resolving them to absolute paths.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Path`] if a directory cannot be resolved.
    pub fn new<P: AsRef<Path>>(dirs: &[P]) -> Result<Self, ConfigError> {
        Ok(Self::from_layers(
            normalize_paths(dirs)?,
            FileConfig::default(),
        ))
    }

    /// Resolve the final configuration from parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the config file is missing or invalid, or
    /// a directory argument cannot be resolved.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut file = match &cli.config {
            Some(path) => {
                log::debug!("Loading config file {}", path.display());
                FileConfig::load_from_path(path)?
            }
            None => FileConfig::default(),
        };

        if let Some(full_depth) = cli.full_depth {
            file.full_depth = full_depth;
        }
        if let Some(substr) = &cli.ignore_substr {
            file.ignore_substr = Some(substr.clone());
        }
        file.follow_symlinks |= cli.follow_symlinks;
        file.skip_hidden |= cli.skip_hidden;
        if let Some(output) = cli.output {
            file.output = output;
        }

        Ok(Self::from_layers(normalize_paths(&cli.dirs)?, file))
    }

    fn from_layers(dirs: Vec<PathBuf>, file: FileConfig) -> Self {
        Self {
            dirs,
            walker: WalkerConfig {
                full_depth: file.full_depth,
                follow_symlinks: file.follow_symlinks,
                skip_hidden: file.skip_hidden,
            },
            ignore_substr: file.ignore_substr.filter(|s| !s.is_empty()),
            output: file.output,
        }
    }

    /// Set whether subdirectories are traversed.
    #[must_use]
    pub fn with_full_depth(mut self, full_depth: bool) -> Self {
        self.walker.full_depth = full_depth;
        self
    }

    /// Set the substring ignored for fuzzy matching. Empty disables it.
    #[must_use]
    pub fn with_ignore_substr(mut self, substr: Option<String>) -> Self {
        self.ignore_substr = substr.filter(|s| !s.is_empty());
        self
    }

    /// Set the report format.
    #[must_use]
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }
}
