//! Core error types for dailycode-core.
//!
//! Two families of failure exist: configuration defects (a template whose
//! body references a value its generator never produces, an empty registry,
//! an unreadable config file) and filesystem failures while writing output.
//! Neither is retried; both surface to the caller.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for dailycode-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Rendering failed because a template and its parameters disagree
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The registry has no templates to choose from
    #[error("Template registry is empty")]
    EmptyRegistry,

    /// A template was requested by a name the registry does not know
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    /// Writing a generated file or the index failed
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Template rendering errors.
///
/// Offsets are byte offsets into the de-indented code body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The code body references a placeholder with no value
    #[error("No value for placeholder '{{{placeholder}}}'")]
    MissingParameter { placeholder: String },

    /// A `{` was opened but never closed
    #[error("Unclosed placeholder starting at offset {offset}")]
    UnclosedPlaceholder { offset: usize },

    /// A lone `}` outside of a placeholder
    #[error("Unmatched '}}' at offset {offset}")]
    UnmatchedBrace { offset: usize },

    /// The text between braces is not an identifier
    #[error("Invalid placeholder name '{name}' at offset {offset}")]
    InvalidPlaceholder { offset: usize, name: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameter_message_names_placeholder() {
        let err = RenderError::MissingParameter {
            placeholder: "N".to_string(),
        };
        assert_eq!(err.to_string(), "No value for placeholder '{N}'");
    }

    #[test]
    fn render_error_converts_into_core_error() {
        let err: CoreError = RenderError::UnmatchedBrace { offset: 3 }.into();
        assert!(matches!(err, CoreError::Render(_)));
        assert_eq!(err.to_string(), "Render error: Unmatched '}' at offset 3");
    }
}
