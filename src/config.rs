//! # Customizer Configuration
//!
//! The two switches that control [`crate::DocumentCustomizer`]. Both default to
//! enabled.
//!
//! ## Sources
//!
//! - [`CustomizerConfig::default()`] - both steps on
//! - [`CustomizerConfig::from_env()`] - environment overrides
//! - [`CustomizerConfig::from_file()`] - TOML (`.toml`) or YAML (`.yaml`/`.yml`)
//!
//! ## Environment Variables
//!
//! | Variable | Default | Effect |
//! |---|---|---|
//! | `SPK_OPENAPI_SECURITY_SCHEMES` | `true` | Register `SpkToken`/`BasicAuth` and the global requirement |
//! | `SPK_OPENAPI_STANDARD_HEADERS` | `true` | Register the three standard headers on every operation |
//!
//! Values that do not parse as `true`/`false` fall back to the default.
//!
//! ## Example Configuration
//!
//! ```toml
//! with_security_schemes = true
//! with_standard_headers = false
//! ```

use crate::error::ConfigError;
use serde::Deserialize;
use std::env;
use std::path::Path;

/// Which customization steps to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CustomizerConfig {
    /// Add the standard security schemes and the global security requirement
    pub with_security_schemes: bool,
    /// Add the standard header parameters and attach them to every operation
    pub with_standard_headers: bool,
}

impl Default for CustomizerConfig {
    fn default() -> Self {
        Self {
            with_security_schemes: true,
            with_standard_headers: true,
        }
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|s| s.trim().to_lowercase().parse().ok())
        .unwrap_or(default)
}

impl CustomizerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            with_security_schemes: env_flag(
                "SPK_OPENAPI_SECURITY_SCHEMES",
                defaults.with_security_schemes,
            ),
            with_standard_headers: env_flag(
                "SPK_OPENAPI_STANDARD_HEADERS",
                defaults.with_standard_headers,
            ),
        }
    }

    /// Load configuration from a TOML or YAML file. Missing keys keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => {
                serde_yaml::from_str(&content).map_err(ConfigError::Yaml)
            }
            _ => toml::from_str(&content).map_err(ConfigError::Toml),
        }
    }
}
