use crate::error::LoadError;
use oas3::OpenApiV3Spec;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

/// Source of OpenAPI documents.
///
/// `Ok(None)` means nothing exists under `identifier`. Anything that exists but
/// cannot be read or parsed is a [`LoadError`].
pub trait SpecLoader {
    fn load(&self, identifier: &str) -> Result<Option<OpenApiV3Spec>, LoadError>;
}

impl<L: SpecLoader + ?Sized> SpecLoader for &L {
    fn load(&self, identifier: &str) -> Result<Option<OpenApiV3Spec>, LoadError> {
        (**self).load(identifier)
    }
}

fn is_yaml(name: &str) -> bool {
    name.ends_with(".yaml") || name.ends_with(".yml")
}

/// Parse a document, choosing YAML or JSON by the extension of `name`.
pub fn parse_spec(name: &str, content: &str) -> Result<OpenApiV3Spec, LoadError> {
    if is_yaml(name) {
        serde_yaml::from_str(content).map_err(LoadError::Yaml)
    } else {
        serde_json::from_str(content).map_err(LoadError::Json)
    }
}

/// Loads specs from the filesystem.
///
/// Relative identifiers are resolved against the optional base directory.
#[derive(Debug, Clone, Default)]
pub struct FileSpecLoader {
    base_dir: Option<PathBuf>,
}

impl FileSpecLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative identifiers against `base_dir`.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    fn resolve(&self, identifier: &str) -> PathBuf {
        match &self.base_dir {
            Some(base) => base.join(identifier),
            None => PathBuf::from(identifier),
        }
    }
}

impl SpecLoader for FileSpecLoader {
    fn load(&self, identifier: &str) -> Result<Option<OpenApiV3Spec>, LoadError> {
        let path = self.resolve(identifier);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "spec file not found");
                return Ok(None);
            }
            Err(source) => return Err(LoadError::Io { path, source }),
        };
        debug!(path = %path.display(), bytes = content.len(), "parsing spec file");
        parse_spec(identifier, &content).map(Some)
    }
}

/// In-memory table of named spec sources, e.g. documents bundled with
/// `include_str!`.
#[derive(Debug, Clone, Default)]
pub struct ResourceSpecLoader {
    resources: HashMap<String, String>,
}

impl ResourceSpecLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `content` under `name`. The extension of `name` picks the parser.
    pub fn with_resource(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(name, content);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.resources.insert(name.into(), content.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resources.contains_key(name)
    }
}

impl SpecLoader for ResourceSpecLoader {
    fn load(&self, identifier: &str) -> Result<Option<OpenApiV3Spec>, LoadError> {
        match self.resources.get(identifier) {
            Some(content) => parse_spec(identifier, content).map(Some),
            None => Ok(None),
        }
    }
}
