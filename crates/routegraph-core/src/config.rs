//! Configuration for routegraph
//!
//! Configuration is read from a TOML file, either passed explicitly or found as
//! `routegraph.toml` next to the routes file. Every field has a default, so an
//! empty or missing file is valid.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteError};
use crate::format::OutputFormat;

/// Config file looked up next to the routes file
pub const CONFIG_FILE_NAME: &str = "routegraph.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Route loading behavior
    #[serde(default)]
    pub loader: LoaderConfig,

    /// Output defaults
    #[serde(default)]
    pub output: OutputConfig,

    /// Limits on walk enumeration
    #[serde(default)]
    pub query: QueryConfig,
}

/// How route text is tokenized and how bad tokens are handled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Fail on the first malformed token instead of skipping it
    #[serde(default)]
    pub strict: bool,

    /// Character separating route tokens
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        LoaderConfig {
            strict: false,
            delimiter: default_delimiter(),
        }
    }
}

fn default_delimiter() -> char {
    ','
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Default cap on the stop bound of a trip query
pub const DEFAULT_MAX_STOPS: usize = 30;

/// Limits applied to user-supplied trip bounds.
///
/// Walk enumeration grows exponentially with the stop bound, so queries whose
/// bound (given directly or derived from a distance cap) exceeds `max_stops`
/// are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryConfig {
    #[serde(default = "default_max_stops")]
    pub max_stops: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        QueryConfig {
            max_stops: default_max_stops(),
        }
    }
}

fn default_max_stops() -> usize {
    DEFAULT_MAX_STOPS
}

impl QueryConfig {
    /// Reject a stop bound above `max_stops`
    pub fn check_stops(&self, context: &str, stops: usize) -> Result<()> {
        if stops > self.max_stops {
            crate::bail_invalid!(
                context,
                format!("{} stops exceeds query.max_stops = {}", stops, self.max_stops)
            );
        }
        Ok(())
    }
}

impl RouteConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| RouteError::io(path, e))?;
        let config: RouteConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RouteError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content).map_err(|e| RouteError::io(path, e))?;
        Ok(())
    }

    /// Config file next to a routes file, if one exists
    pub fn discover(routes_path: &Path) -> Option<PathBuf> {
        let candidate = routes_path
            .parent()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
        candidate.is_file().then_some(candidate)
    }

    /// Reject settings the loader cannot work with
    pub fn validate(&self) -> Result<()> {
        let delimiter = self.loader.delimiter;
        if delimiter.is_ascii_alphanumeric() || delimiter.is_whitespace() {
            crate::bail_invalid!("loader.delimiter", format!("{:?}", delimiter));
        }
        if self.query.max_stops == 0 {
            crate::bail_invalid!("query.max_stops", self.query.max_stops);
        }
        Ok(())
    }
}
