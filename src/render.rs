//! Serialize customized documents for documentation UIs and publishing.

use crate::error::RenderError;
use crate::standard::SECURITY_SCHEMES;
use clap::ValueEnum;
use oas3::OpenApiV3Spec;
use serde_json::{Map, Value};
use std::path::Path;

/// Output encoding of a rendered document
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

impl OutputFormat {
    /// Guess the format from a file extension; anything but `.json` is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Yaml,
        }
    }
}

/// The document as it gets published.
///
/// `oas3` keeps security requirements in sorted maps and writes
/// `bearerFormat: null` for `http` schemes without one. Published output lists
/// the standard schemes first, in table order, and drops null `bearerFormat`.
pub fn published_value(spec: &OpenApiV3Spec) -> Result<Value, RenderError> {
    let mut value = serde_json::to_value(spec).map_err(RenderError::Json)?;

    if let Some(requirements) = value.get_mut("security").and_then(Value::as_array_mut) {
        for requirement in requirements.iter_mut() {
            if let Some(names) = requirement.as_object_mut() {
                standard_schemes_first(names);
            }
        }
    }

    if let Some(schemes) = value
        .pointer_mut("/components/securitySchemes")
        .and_then(Value::as_object_mut)
    {
        for scheme in schemes.values_mut() {
            if let Some(fields) = scheme.as_object_mut() {
                if fields.get("bearerFormat").is_some_and(Value::is_null) {
                    fields.remove("bearerFormat");
                }
            }
        }
    }

    Ok(value)
}

/// Reorder one requirement: standard schemes in table order, then the rest as they were.
fn standard_schemes_first(names: &mut Map<String, Value>) {
    let original = std::mem::take(names);
    for scheme in &SECURITY_SCHEMES {
        if let Some(scopes) = original.get(scheme.key) {
            names.insert(scheme.key.to_string(), scopes.clone());
        }
    }
    for (name, scopes) in original {
        if !names.contains_key(&name) {
            names.insert(name, scopes);
        }
    }
}

pub fn to_yaml(spec: &OpenApiV3Spec) -> Result<String, RenderError> {
    serde_yaml::to_string(&published_value(spec)?).map_err(RenderError::Yaml)
}

pub fn to_json(spec: &OpenApiV3Spec) -> Result<String, RenderError> {
    serde_json::to_string_pretty(&published_value(spec)?).map_err(RenderError::Json)
}

pub fn render(spec: &OpenApiV3Spec, format: OutputFormat) -> Result<String, RenderError> {
    match format {
        OutputFormat::Yaml => to_yaml(spec),
        OutputFormat::Json => to_json(spec),
    }
}

/// Write `spec` to `path`, using `format` or the extension of `path` when `None`.
pub fn write_spec(
    spec: &OpenApiV3Spec,
    path: &Path,
    format: Option<OutputFormat>,
) -> Result<(), RenderError> {
    let format = format.unwrap_or_else(|| OutputFormat::from_path(path));
    let rendered = render(spec, format)?;
    std::fs::write(path, rendered).map_err(|source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    })
}
