//! SPK standard security schemes and infrastructure headers.
//!
//! These are injected at runtime by the platform in front of every service, so
//! hand-written and generated specs usually leave them out. The tables below are
//! the single source of truth for what gets published; iteration order is the
//! order in which entries land in the document.

use crate::error::CustomizeError;
use oas3::spec::{ObjectOrReference, Parameter, SecurityRequirement, SecurityScheme};
use serde_json::json;

/// Component key of the token security scheme
pub const SPK_TOKEN: &str = "SpkToken";
/// Component key of the basic-auth security scheme
pub const BASIC_AUTH: &str = "BasicAuth";

const COMPONENT_PARAMETERS_PREFIX: &str = "#/components/parameters/";

/// Kind of a standard security scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeKind {
    /// API key carried in the named request header
    ApiKeyHeader {
        /// Header that carries the key
        header: &'static str,
    },
    /// HTTP basic authentication
    HttpBasic,
}

/// One row of the security scheme table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardScheme {
    /// Key under `components.securitySchemes`
    pub key: &'static str,
    pub kind: SchemeKind,
    pub description: &'static str,
}

impl StandardScheme {
    /// Build a fresh `oas3` security scheme for this row.
    pub fn to_scheme(&self) -> SecurityScheme {
        match self.kind {
            SchemeKind::ApiKeyHeader { header } => SecurityScheme::ApiKey {
                description: Some(self.description.to_string()),
                name: header.to_string(),
                location: "header".to_string(),
            },
            SchemeKind::HttpBasic => SecurityScheme::Http {
                description: Some(self.description.to_string()),
                scheme: "basic".to_string(),
                bearer_format: None,
            },
        }
    }
}

/// Security schemes, in the order they appear in the global requirement.
pub const SECURITY_SCHEMES: [StandardScheme; 2] = [
    StandardScheme {
        key: SPK_TOKEN,
        kind: SchemeKind::ApiKeyHeader {
            header: "Authorization",
        },
        description: "De fleste kall mellom tjenester i SPK autentiseres med token. \
            Dette gjelder både i test og i produksjon.",
    },
    StandardScheme {
        key: BASIC_AUTH,
        kind: SchemeKind::HttpBasic,
        description: "Brukernavn og passord kan benyttes for autentisering i test. \
            Dette er ikke tillatt i produksjon.",
    },
];

/// One row of the standard header table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardHeader {
    /// Key under `components.parameters`
    pub key: &'static str,
    /// HTTP header name
    pub name: &'static str,
    /// Example rendered by documentation UIs
    pub example: &'static str,
}

impl StandardHeader {
    /// Build the reusable header parameter definition for this row.
    ///
    /// The header is always required and typed as a plain string.
    pub fn to_parameter(&self) -> Result<Parameter, CustomizeError> {
        serde_json::from_value(json!({
            "name": self.name,
            "in": "header",
            "required": true,
            "schema": { "type": "string" },
            "example": self.example,
        }))
        .map_err(CustomizeError::Definition)
    }

    /// `$ref` path pointing at this header's component definition.
    pub fn ref_path(&self) -> String {
        format!("{COMPONENT_PARAMETERS_PREFIX}{}", self.key)
    }

    /// Build a `$ref` entry suitable for an operation's parameter list.
    pub fn to_reference(&self) -> Result<ObjectOrReference<Parameter>, CustomizeError> {
        serde_json::from_value(json!({ "$ref": self.ref_path() }))
            .map_err(CustomizeError::Definition)
    }
}

/// Standard headers, in the order they are appended to every operation.
pub const STANDARD_HEADERS: [StandardHeader; 3] = [
    StandardHeader {
        key: "xApplicationId",
        name: "X-Application-Id",
        example: "SwaggerUI",
    },
    StandardHeader {
        key: "xCorrelationId",
        name: "X-Correlation-Id",
        example: "2b0e4ef2-3c6b-4b8e-9a4a-6f1a3d0c7e55",
    },
    StandardHeader {
        key: "xRequestOrigin",
        name: "X-Request-Origin",
        example: "SwaggerUI",
    },
];

/// The global requirement: every standard scheme at once, no scopes.
pub fn security_requirement() -> Result<SecurityRequirement, CustomizeError> {
    let schemes: serde_json::Map<String, serde_json::Value> = SECURITY_SCHEMES
        .iter()
        .map(|scheme| (scheme.key.to_string(), json!([])))
        .collect();
    serde_json::from_value(serde_json::Value::Object(schemes)).map_err(CustomizeError::Definition)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spk_token_is_authorization_api_key() {
        match SECURITY_SCHEMES[0].to_scheme() {
            SecurityScheme::ApiKey {
                name,
                location,
                description,
                ..
            } => {
                assert_eq!(name, "Authorization");
                assert_eq!(location, "header");
                assert!(description.is_some());
            }
            other => panic!("unexpected scheme: {other:?}"),
        }
    }

    #[test]
    fn test_basic_auth_is_http_basic() {
        assert!(matches!(
            SECURITY_SCHEMES[1].to_scheme(),
            SecurityScheme::Http { ref scheme, .. } if scheme == "basic"
        ));
    }

    #[test]
    fn test_header_parameter_definition() {
        let param = STANDARD_HEADERS[1].to_parameter().unwrap();
        assert_eq!(param.name, "X-Correlation-Id");
        assert_eq!(param.required, Some(true));

        let rendered = serde_json::to_value(&param).unwrap();
        assert_eq!(rendered["in"], "header");
        assert_eq!(rendered["schema"]["type"], "string");
        assert_eq!(rendered["example"], "2b0e4ef2-3c6b-4b8e-9a4a-6f1a3d0c7e55");
    }

    #[test]
    fn test_header_reference_points_at_component() {
        match STANDARD_HEADERS[2].to_reference().unwrap() {
            ObjectOrReference::Ref { ref_path, .. } => {
                assert_eq!(ref_path, "#/components/parameters/xRequestOrigin");
            }
            ObjectOrReference::Object(_) => panic!("expected a $ref, got an inline parameter"),
        }
    }

    #[test]
    fn test_requirement_names_both_schemes() {
        let req = serde_json::to_value(security_requirement().unwrap()).unwrap();
        assert_eq!(req, json!({ "SpkToken": [], "BasicAuth": [] }));
    }
}
