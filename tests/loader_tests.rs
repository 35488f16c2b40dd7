#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::specs::{operations, ref_paths, EMPTY_YAML, PING_YAML, STANDARD_REFS};
use common::spec_files::write_spec;
use oas3::OpenApiV3Spec;
use spk_openapi::{
    CustomizeError, DocumentCustomizer, FileSpecLoader, LoadError, ResourceSpecLoader, SpecLoader,
};
use std::cell::Cell;

/// Wraps a loader and counts how often it is asked.
struct CountingLoader<L> {
    inner: L,
    calls: Cell<usize>,
}

impl<L: SpecLoader> SpecLoader for CountingLoader<L> {
    fn load(&self, identifier: &str) -> Result<Option<OpenApiV3Spec>, LoadError> {
        self.calls.set(self.calls.get() + 1);
        self.inner.load(identifier)
    }
}

#[test]
fn test_load_and_customize_from_yaml_file() {
    let (_dir, path) = write_spec("openapi.yaml", PING_YAML);
    let spec = DocumentCustomizer::default()
        .load_and_customize(&FileSpecLoader::new(), path.to_str().unwrap())
        .unwrap();

    assert_eq!(spec.security.len(), 1);
    let get = spec.paths.as_ref().unwrap()["/ping"].get.as_ref().unwrap();
    assert_eq!(ref_paths(&get.parameters), STANDARD_REFS);
}

#[test]
fn test_load_and_customize_from_json_file() {
    let json = serde_json::to_string(&common::specs::parse(PING_YAML)).unwrap();
    let (_dir, path) = write_spec("openapi.json", &json);
    let spec = DocumentCustomizer::new(true, false)
        .load_and_customize(&FileSpecLoader::new(), path.to_str().unwrap())
        .unwrap();

    assert_eq!(spec.security.len(), 1);
    for (_, op) in operations(&spec) {
        assert!(op.parameters.is_empty());
    }
}

#[test]
fn test_file_loader_resolves_against_base_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("openapi.yaml"), PING_YAML).unwrap();

    let loader = FileSpecLoader::with_base_dir(dir.path());
    let spec = DocumentCustomizer::default()
        .load_and_customize(&loader, "openapi.yaml")
        .unwrap();
    assert_eq!(spec.info.title, "Ping API");
}

#[test]
fn test_missing_source_is_not_found_and_never_customized() {
    let loader = CountingLoader {
        inner: ResourceSpecLoader::new().with_resource("openapi.yaml", PING_YAML),
        calls: Cell::new(0),
    };

    let err = DocumentCustomizer::default()
        .load_and_customize(&loader, "classpath:missing.yaml")
        .unwrap_err();

    assert_eq!(loader.calls.get(), 1);
    match err {
        CustomizeError::NotFound { identifier } => {
            assert_eq!(identifier, "classpath:missing.yaml");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = DocumentCustomizer::default()
        .load_and_customize(&FileSpecLoader::with_base_dir(dir.path()), "absent.yaml")
        .unwrap_err();
    assert!(matches!(err, CustomizeError::NotFound { ref identifier } if identifier == "absent.yaml"));
}

#[test]
fn test_empty_document_is_not_an_error() {
    let loader = ResourceSpecLoader::new().with_resource("empty.yaml", EMPTY_YAML);
    let spec = DocumentCustomizer::default()
        .load_and_customize(&loader, "empty.yaml")
        .unwrap();

    assert!(operations(&spec).is_empty());
    assert_eq!(spec.security.len(), 1);
    assert_eq!(spec.components.as_ref().unwrap().parameters.len(), 3);
}

#[test]
fn test_invalid_source_surfaces_load_error() {
    let (_dir, path) = write_spec("broken.json", "{ not json");
    let err = DocumentCustomizer::default()
        .load_and_customize(&FileSpecLoader::new(), path.to_str().unwrap())
        .unwrap_err();

    assert!(matches!(err, CustomizeError::Load(LoadError::Json(_))));
}

#[test]
fn test_document_without_components_is_rejected() {
    let yaml = r#"openapi: 3.1.0
info:
  title: No Components
  version: "1.0.0"
paths: {}
"#;
    let loader = ResourceSpecLoader::new().with_resource("bare.yaml", yaml);
    let err = DocumentCustomizer::default()
        .load_and_customize(&loader, "bare.yaml")
        .unwrap_err();
    assert!(matches!(err, CustomizeError::MissingComponents));
}
