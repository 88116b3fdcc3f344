//! TOML-based generator configuration.
//!
//! Stores:
//! - Output directory for generated files and the index
//! - Index file name, title and intro line
//! - Provenance line written into every generated file header
//!
//! Configuration is read from an explicit path, or from `dailycode.toml` in
//! the working directory when present. Every field has a default, so an
//! empty file (or no file at all) is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "dailycode.toml";

/// Generator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Root directory holding the index and year directories.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Index file name inside `output_dir`.
    #[serde(default = "default_index_file")]
    pub index_file: String,
    #[serde(default = "default_index_title")]
    pub index_title: String,
    #[serde(default = "default_index_intro")]
    pub index_intro: String,
    /// Last line of the header docstring in every generated file.
    #[serde(default = "default_provenance")]
    pub provenance: String,
}

// Default functions
fn default_output_dir() -> PathBuf {
    PathBuf::from("daily_code")
}
fn default_index_file() -> String {
    "README.md".into()
}
fn default_index_title() -> String {
    "Daily Python Code".into()
}
fn default_index_intro() -> String {
    "Auto-generated snippets, one per day.".into()
}
fn default_provenance() -> String {
    "This file was auto-generated by dailycode".into()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            index_file: default_index_file(),
            index_title: default_index_title(),
            index_intro: default_index_intro(),
            provenance: default_provenance(),
        }
    }
}

impl GeneratorConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let cfg: GeneratorConfig = toml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load from `path`. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Load from `path` if given, else `dailycode.toml` in the working
    /// directory if it exists, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let local = Path::new(DEFAULT_CONFIG_FILE);
                if local.is_file() {
                    Self::load_from(local)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Write this configuration as TOML to `path`.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))
    }

    /// Header written when the index file is first created.
    pub fn index_header(&self) -> String {
        format!("# {}\n\n{}\n\n", self.index_title, self.index_intro)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "output_dir".into(),
                message: "must not be empty".into(),
            });
        }
        let index = Path::new(&self.index_file);
        if self.index_file.is_empty() || index.components().count() != 1 {
            return Err(ConfigError::InvalidValue {
                key: "index_file".into(),
                message: format!("'{}' must be a plain file name", self.index_file),
            });
        }
        if self.provenance.contains("\"\"\"") {
            return Err(ConfigError::InvalidValue {
                key: "provenance".into(),
                message: "must not contain a triple quote".into(),
            });
        }
        Ok(())
    }
}
