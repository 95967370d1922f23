//! Configuration (config.json) parsing and validation
//!
//! The tool is configured by a `config.json` sitting beside the executable.
//! Loading and validation are separate steps: `load` only deserializes,
//! `validate` enforces the path invariants before any build starts.

use crate::core::error::{ConfigError, ReleaseError, ReleaseResult};
use crate::utils;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file, expected beside the executable
pub const CONFIG_FILE_NAME: &str = "config.json";

/// The JSON configuration file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
  /// Folder containing the UE_5.1, UE_5.2, ... engine installations
  pub engine_base_directory: PathBuf,

  /// Path of the build script (RunUAT) relative to each engine installation
  pub build_script_path: PathBuf,

  /// Folder under which every per-version release directory is created
  pub output_base_directory: PathBuf,

  /// Full path to the .uplugin file to build
  pub plugin_path: PathBuf,

  /// Optional full path to a documentation file to package with the plugin
  #[serde(default)]
  pub docs_path: Option<PathBuf>,
}

impl Config {
  /// Load the configuration from a JSON file.
  pub fn load(path: &Path) -> ReleaseResult<Self> {
    let raw = fs::read_to_string(path).map_err(|e| {
      if e.kind() == std::io::ErrorKind::NotFound {
        ReleaseError::Config(ConfigError::NotFound {
          path: path.to_path_buf(),
        })
      } else {
        ReleaseError::Io(e)
      }
    })?;

    let config: Config = serde_json::from_str(&raw)?;
    Ok(config)
  }

  /// Enforce the configuration invariants.
  pub fn validate(&self) -> ReleaseResult<()> {
    if !self.engine_base_directory.exists() {
      return Err(invalid(format!(
        "engineBaseDirectory does not exist: {}",
        self.engine_base_directory.display()
      )));
    }

    if !self.output_base_directory.exists() {
      return Err(invalid(format!(
        "outputBaseDirectory does not exist: {}",
        self.output_base_directory.display()
      )));
    }

    if utils::paths_equal(&self.engine_base_directory, &self.output_base_directory) {
      return Err(invalid(
        "engineBaseDirectory and outputBaseDirectory must not be the same path".to_string(),
      ));
    }

    if !self.plugin_path.is_file() {
      return Err(invalid(format!(
        "pluginPath is not an existing file: {}",
        self.plugin_path.display()
      )));
    }

    if self.build_script_path.as_os_str().is_empty() {
      return Err(invalid("buildScriptPath must not be empty".to_string()));
    }

    Ok(())
  }
}

fn invalid(reason: String) -> ReleaseError {
  ReleaseError::Config(ConfigError::Invalid { reason })
}
