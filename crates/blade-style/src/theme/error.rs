//! Theme loading and validation errors.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a theme cannot be loaded or fails validation.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read theme file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON theme: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML theme: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The file extension is not one of `json`, `yaml` or `yml`.
    #[error("unsupported theme file extension for '{0}' (expected .json, .yaml or .yml)")]
    UnsupportedFormat(PathBuf),

    /// The theme document is not a mapping at its root.
    #[error("theme root must be an object")]
    NotAnObject,

    /// A required token namespace is absent.
    #[error("theme is missing token namespace '{0}'")]
    MissingNamespace(String),

    /// A required token namespace exists but is not a mapping.
    #[error("theme token namespace '{0}' must be an object")]
    InvalidNamespace(String),
}
