//! # Configuration Module
//!
//! Optional per-repository configuration for both tools, loaded from a
//! `.repolint.toml` file at the top-level directory. The config supplies
//! defaults merged beneath CLI flags: extra suffix comment prefixes for the
//! license tool, and per-tool directory and glob defaults. CLI values always
//! win.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;
use tracing::debug;

/// The default config file name, looked up under `--top`.
pub const DEFAULT_CONFIG_FILENAME: &str = ".repolint.toml";

/// Per-tool listing and filtering defaults.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
pub struct ToolConfig {
  /// Subdirectories to scan.
  #[serde(default)]
  pub dirs: Option<Vec<String>>,

  /// Include glob patterns.
  #[serde(default)]
  pub includes: Option<Vec<String>>,

  /// Exclude glob patterns.
  #[serde(default)]
  pub excludes: Option<Vec<String>>,
}

/// Top-level configuration for repolint.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
  /// Extra suffix to comment-prefix entries, merged over the built-ins.
  /// Keys are file suffixes without the leading dot (e.g., "lua", "sh").
  #[serde(default)]
  pub comments: HashMap<String, String>,

  /// Defaults for the banwords tool.
  #[serde(default)]
  pub banwords: ToolConfig,

  /// Defaults for the licensing tool.
  #[serde(default)]
  pub licensing: ToolConfig,
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("failed to read config file '{path}': {source}")]
  Read { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("failed to parse config file '{path}': {source}")]
  Parse { path: PathBuf, source: toml::de::Error },

  /// A comment entry is invalid.
  #[error("invalid comment entry for '{suffix}': {message}")]
  InvalidComment { suffix: String, message: String },
}

impl Config {
  /// Load configuration from a file.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    debug!("loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
      path: path.to_path_buf(),
      source: e,
    })?;

    let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
      path: path.to_path_buf(),
      source: e,
    })?;

    config.validate()?;
    Ok(config)
  }

  /// Checks that comment entries are usable: non-empty prefixes, suffix keys
  /// without the leading dot.
  fn validate(&self) -> Result<(), ConfigError> {
    for (suffix, prefix) in &self.comments {
      if prefix.is_empty() {
        return Err(ConfigError::InvalidComment {
          suffix: suffix.clone(),
          message: "comment prefix cannot be empty".to_string(),
        });
      }
      if suffix.starts_with('.') {
        return Err(ConfigError::InvalidComment {
          suffix: suffix.clone(),
          message: "suffix should not include leading dot".to_string(),
        });
      }
    }
    Ok(())
  }
}

/// Load the effective configuration, if any.
///
/// An explicit `--config` path must exist and parse; the default file is
/// optional. `--no-config` suppresses lookup entirely.
pub fn load_config(explicit: Option<&Path>, top: &Path, no_config: bool) -> Result<Option<Config>> {
  if no_config {
    debug!("config file lookup disabled");
    return Ok(None);
  }

  if let Some(path) = explicit {
    return Ok(Some(Config::load(path)?));
  }

  let default_path = top.join(DEFAULT_CONFIG_FILENAME);
  if default_path.is_file() {
    return Ok(Some(Config::load(&default_path)?));
  }

  Ok(None)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_full_config() {
    let config: Config = toml::from_str(
      r##"
[comments]
lua = "-- "
sh = "# "

[banwords]
dirs = ["."]
excludes = ["*.b64"]

[licensing]
dirs = ["src", "include"]
includes = ["*.c", "*.h"]
"##,
    )
    .unwrap();

    assert_eq!(config.comments.get("lua").map(String::as_str), Some("-- "));
    assert_eq!(config.banwords.excludes, Some(vec!["*.b64".to_string()]));
    assert_eq!(
      config.licensing.dirs,
      Some(vec!["src".to_string(), "include".to_string()])
    );
    assert!(config.licensing.excludes.is_none());
  }

  #[test]
  fn test_validate_rejects_empty_prefix() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join(DEFAULT_CONFIG_FILENAME);
    std::fs::write(&path, "[comments]\nlua = \"\"\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(format!("{err}").contains("cannot be empty"));
  }

  #[test]
  fn test_validate_rejects_dotted_suffix() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join(DEFAULT_CONFIG_FILENAME);
    std::fs::write(&path, "[comments]\n\".lua\" = \"-- \"\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(format!("{err}").contains("leading dot"));
  }

  #[test]
  fn test_load_config_default_path_is_optional() {
    let temp = tempfile::tempdir().unwrap();
    let config = load_config(None, temp.path(), false).unwrap();
    assert!(config.is_none());
  }

  #[test]
  fn test_load_config_explicit_path_must_exist() {
    let temp = tempfile::tempdir().unwrap();
    let missing = temp.path().join("nope.toml");
    assert!(load_config(Some(&missing), temp.path(), false).is_err());
  }

  #[test]
  fn test_no_config_suppresses_lookup() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join(DEFAULT_CONFIG_FILENAME);
    std::fs::write(&path, "[comments]\nlua = \"\"\n").unwrap();

    // Invalid file on disk, but --no-config means it is never read.
    let config = load_config(None, temp.path(), true).unwrap();
    assert!(config.is_none());
  }
}
