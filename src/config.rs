//! # Configuration Module
//!
//! This module provides configuration file support for headertool, so a tree
//! can record which extensions it checks and how the header is matched.
//!
//! Configuration can be specified in a `.headertool.toml` file in the scan
//! root, via the `HEADERTOOL_CONFIG` environment variable or with the
//! `--config` flag:
//!
//! ```toml
//! extensions = ["java", "xml"]
//! first-line-only = true
//! line-ending = "lf"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::file_filter::{ExtensionFilter, WILDCARD_EXTENSION};
use crate::header::LineEnding;
use crate::verbose_log;

/// The default config file name.
pub const DEFAULT_CONFIG_FILENAME: &str = ".headertool.toml";

/// Environment variable for specifying config file path.
pub const CONFIG_ENV_VAR: &str = "HEADERTOOL_CONFIG";

/// Main configuration struct for headertool.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
  /// Extensions to check, without the leading dot. `"*"` selects every
  /// file. Absent means every file.
  #[serde(default)]
  pub extensions: Option<Vec<String>>,

  /// Match only the first line of the header.
  #[serde(default)]
  pub first_line_only: bool,

  /// Line terminator used when reading files.
  #[serde(default)]
  pub line_ending: Option<LineEnding>,

  /// File this configuration was loaded from.
  #[serde(skip)]
  pub source: Option<PathBuf>,
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{path}': {source}")]
  ParseError { path: PathBuf, source: toml::de::Error },

  /// An extension entry is invalid.
  #[error("Invalid extension '{extension}': {message}")]
  InvalidExtension { extension: String, message: String },
}

impl Config {
  /// Load configuration from a file.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    verbose_log!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    let mut config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
      path: path.to_path_buf(),
      source: e,
    })?;

    config.validate()?;
    config.source = Some(path.to_path_buf());

    Ok(config)
  }

  /// Validate the configuration.
  ///
  /// Extensions must be non-empty and must not include the leading dot.
  fn validate(&self) -> Result<(), ConfigError> {
    for ext in self.extensions.iter().flatten() {
      validate_extension(ext)?;
    }

    Ok(())
  }

  /// The extension filter described by this configuration.
  pub fn extension_filter(&self) -> ExtensionFilter {
    ExtensionFilter::from_extensions(self.extensions.clone())
  }
}

/// Checks a single extension argument.
pub fn validate_extension(ext: &str) -> Result<(), ConfigError> {
  if ext == WILDCARD_EXTENSION {
    return Ok(());
  }

  if ext.is_empty() {
    return Err(ConfigError::InvalidExtension {
      extension: ext.to_string(),
      message: "extension cannot be empty".to_string(),
    });
  }

  if ext.starts_with('.') {
    return Err(ConfigError::InvalidExtension {
      extension: ext.to_string(),
      message: "extension should not include leading dot".to_string(),
    });
  }

  Ok(())
}

/// Discover the configuration file path.
///
/// The configuration file is discovered in the following order:
/// 1. Path specified via `--config` flag (passed as `explicit_path`)
/// 2. Path specified via `HEADERTOOL_CONFIG` environment variable
/// 3. `.headertool.toml` in the scan root
///
/// An explicit path is returned even when it does not exist, so that loading
/// it reports the problem.
pub fn discover_config_path(explicit_path: Option<&Path>, root_dir: &Path) -> Option<PathBuf> {
  if let Some(path) = explicit_path {
    verbose_log!("Using explicit config path: {}", path.display());
    return Some(path.to_path_buf());
  }

  if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
    let path = PathBuf::from(&env_path);
    if path.exists() {
      verbose_log!("Using config from {}: {}", CONFIG_ENV_VAR, path.display());
      return Some(path);
    }
    verbose_log!("{} path does not exist: {}", CONFIG_ENV_VAR, env_path);
  }

  let root_config = root_dir.join(DEFAULT_CONFIG_FILENAME);
  if root_config.is_file() {
    verbose_log!("Using config in scan root: {}", root_config.display());
    return Some(root_config);
  }

  verbose_log!("No config file found");
  None
}

/// Load configuration from the discovered path.
///
/// Returns `None` when discovery is disabled or finds nothing.
pub fn load_config(explicit_path: Option<&Path>, root_dir: &Path, no_config: bool) -> Result<Option<Config>> {
  if no_config {
    verbose_log!("Config file discovery disabled (--no-config)");
    return Ok(None);
  }

  match discover_config_path(explicit_path, root_dir) {
    Some(path) => {
      let config = Config::load(&path).with_context(|| format!("Failed to load config from {}", path.display()))?;
      Ok(Some(config))
    }
    None => Ok(None),
  }
}
