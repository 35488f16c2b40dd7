//! Error types for loading, customizing and rendering OpenAPI documents.

use std::fmt;
use std::path::PathBuf;

/// Failure while turning a source identifier into an [`oas3::OpenApiV3Spec`].
///
/// A source that simply does not exist is *not* a `LoadError`; loaders report
/// that as `Ok(None)` so callers can distinguish "missing" from "broken".
#[derive(Debug)]
pub enum LoadError {
    /// The source exists but could not be read
    Io {
        /// Path that failed to read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// The source is not a valid YAML OpenAPI document
    Yaml(serde_yaml::Error),
    /// The source is not a valid JSON OpenAPI document
    Json(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "failed to read OpenAPI spec '{}': {}", path.display(), source)
            }
            LoadError::Yaml(err) => write!(f, "failed to parse YAML OpenAPI spec: {err}"),
            LoadError::Json(err) => write!(f, "failed to parse JSON OpenAPI spec: {err}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Yaml(err) => Some(err),
            LoadError::Json(err) => Some(err),
        }
    }
}

/// Failure raised by [`crate::DocumentCustomizer`].
#[derive(Debug)]
pub enum CustomizeError {
    /// The loader resolved nothing for the given identifier
    NotFound {
        /// Identifier handed to the loader
        identifier: String,
    },
    /// The document has no `components` container
    ///
    /// Loaders and generators are expected to always populate it; a document
    /// without one is malformed upstream.
    MissingComponents,
    /// A standard parameter definition could not be materialized
    Definition(serde_json::Error),
    /// The loader found the source but failed to read or parse it
    Load(LoadError),
}

impl fmt::Display for CustomizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomizeError::NotFound { identifier } => {
                write!(f, "OpenAPI spec not found: '{identifier}'")
            }
            CustomizeError::MissingComponents => write!(
                f,
                "OpenAPI document has no components container; \
                the loader must always populate it"
            ),
            CustomizeError::Definition(err) => {
                write!(f, "invalid standard parameter definition: {err}")
            }
            CustomizeError::Load(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CustomizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CustomizeError::Definition(err) => Some(err),
            CustomizeError::Load(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LoadError> for CustomizeError {
    fn from(err: LoadError) -> Self {
        CustomizeError::Load(err)
    }
}

/// Failure while serializing a document back to YAML or JSON.
#[derive(Debug)]
pub enum RenderError {
    /// YAML serialization failed
    Yaml(serde_yaml::Error),
    /// JSON serialization failed
    Json(serde_json::Error),
    /// Writing the rendered document failed
    Io {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Yaml(err) => write!(f, "failed to render YAML: {err}"),
            RenderError::Json(err) => write!(f, "failed to render JSON: {err}"),
            RenderError::Io { path, source } => {
                write!(f, "failed to write '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Yaml(err) => Some(err),
            RenderError::Json(err) => Some(err),
            RenderError::Io { source, .. } => Some(source),
        }
    }
}

/// Failure while reading a [`crate::config::CustomizerConfig`] file.
#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// The config file is not valid TOML
    Toml(toml::de::Error),
    /// The config file is not valid YAML
    Yaml(serde_yaml::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "failed to read config '{}': {}", path.display(), source)
            }
            ConfigError::Toml(err) => write!(f, "invalid TOML config: {err}"),
            ConfigError::Yaml(err) => write!(f, "invalid YAML config: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Toml(err) => Some(err),
            ConfigError::Yaml(err) => Some(err),
        }
    }
}
