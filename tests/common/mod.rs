#![allow(dead_code)]

pub mod spec_files {
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Write `content` as `name` in a fresh scratch dir; the file lives as long as the dir.
    pub fn write_spec(name: &str, content: &str) -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }
}

pub mod specs {
    use oas3::spec::{ObjectOrReference, Operation, Parameter};
    use oas3::OpenApiV3Spec;

    /// One path, one GET, no security.
    pub const PING_YAML: &str = r#"openapi: 3.1.0
info:
  title: Ping API
  version: "1.0.0"
components: {}
paths:
  /ping:
    get:
      operationId: ping
      responses:
        "200":
          description: pong
"#;

    /// Several paths and verbs, plus a pre-existing requirement, scheme and parameter.
    pub const PETS_YAML: &str = r#"openapi: 3.1.0
info:
  title: Pet Store
  version: "1.0.0"
security:
  - legacyKey: []
components:
  securitySchemes:
    legacyKey:
      type: apiKey
      in: header
      name: X-Legacy-Key
  parameters:
    PetId:
      name: id
      in: path
      required: true
      schema:
        type: string
paths:
  /pets:
    get:
      operationId: list_pets
      parameters:
        - name: limit
          in: query
          schema:
            type: integer
      responses:
        "200":
          description: OK
    post:
      operationId: add_pet
      responses:
        "201":
          description: Created
  /pets/{id}:
    get:
      operationId: get_pet
      parameters:
        - $ref: '#/components/parameters/PetId'
      responses:
        "200":
          description: OK
    put:
      operationId: update_pet
      parameters:
        - $ref: '#/components/parameters/PetId'
      responses:
        "200":
          description: OK
    delete:
      operationId: delete_pet
      parameters:
        - $ref: '#/components/parameters/PetId'
      responses:
        "204":
          description: Deleted
"#;

    /// Parsed but empty: no paths at all.
    pub const EMPTY_YAML: &str = r#"openapi: 3.1.0
info:
  title: Empty
  version: "0.0.1"
components: {}
"#;

    pub fn parse(yaml: &str) -> OpenApiV3Spec {
        spk_openapi::parse_spec("fixture.yaml", yaml).unwrap()
    }

    /// Every operation in the document, labelled `METHOD path`.
    pub fn operations(spec: &OpenApiV3Spec) -> Vec<(String, &Operation)> {
        let mut out = Vec::new();
        if let Some(paths) = spec.paths.as_ref() {
            for (path, item) in paths {
                for (method, op) in item.methods() {
                    out.push((format!("{method} {path}"), op));
                }
            }
        }
        out
    }

    /// `$ref` targets of a parameter list, in order; inline params are skipped.
    pub fn ref_paths(params: &[ObjectOrReference<Parameter>]) -> Vec<String> {
        params
            .iter()
            .filter_map(|p| match p {
                ObjectOrReference::Ref { ref_path, .. } => Some(ref_path.clone()),
                ObjectOrReference::Object(_) => None,
            })
            .collect()
    }

    pub const STANDARD_REFS: [&str; 3] = [
        "#/components/parameters/xApplicationId",
        "#/components/parameters/xCorrelationId",
        "#/components/parameters/xRequestOrigin",
    ];
}
