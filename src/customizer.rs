//! # Document Customizer
//!
//! Applies the SPK standard security schemes and infrastructure headers to an
//! [`OpenApiV3Spec`].
//!
//! Two independent steps run, in this order, when enabled:
//!
//! 1. **Security schemes** - appends one global requirement naming `SpkToken` and
//!    `BasicAuth` together, and registers both schemes under
//!    `components.securitySchemes`.
//! 2. **Standard headers** - registers `xApplicationId`, `xCorrelationId` and
//!    `xRequestOrigin` under `components.parameters`, then appends a `$ref` to each
//!    of them on every operation of every path.
//!
//! Map entries are insert-or-overwrite, so they converge on repeat calls. List
//! entries are appended: calling [`DocumentCustomizer::customize`] twice on the
//! same document yields two requirements and six header refs per operation.
//! Call it once per document.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use spk_openapi::{DocumentCustomizer, FileSpecLoader};
//!
//! let customizer = DocumentCustomizer::default();
//! let spec = customizer.load_and_customize(&FileSpecLoader::new(), "doc/openapi.yaml")?;
//! println!("{}", spk_openapi::render::to_yaml(&spec)?);
//! ```

use crate::config::CustomizerConfig;
use crate::error::CustomizeError;
use crate::spec::{Components, ObjectOrReference, Operation, Parameter, PathItem, SpecLoader};
use crate::standard::{security_requirement, SECURITY_SCHEMES, STANDARD_HEADERS};
use oas3::OpenApiV3Spec;
use tracing::debug;

/// Injects the SPK standard security schemes and headers into OpenAPI documents.
///
/// Holds nothing but its two switches, so it is cheap to copy and safe to share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentCustomizer {
    with_security_schemes: bool,
    with_standard_headers: bool,
}

impl Default for DocumentCustomizer {
    fn default() -> Self {
        Self::new(true, true)
    }
}

impl DocumentCustomizer {
    pub fn new(with_security_schemes: bool, with_standard_headers: bool) -> Self {
        Self {
            with_security_schemes,
            with_standard_headers,
        }
    }

    pub fn from_config(config: CustomizerConfig) -> Self {
        Self::new(config.with_security_schemes, config.with_standard_headers)
    }

    pub fn with_security_schemes(&self) -> bool {
        self.with_security_schemes
    }

    pub fn with_standard_headers(&self) -> bool {
        self.with_standard_headers
    }

    /// Customize `spec` and hand it back.
    ///
    /// # Errors
    ///
    /// Returns [`CustomizeError::MissingComponents`] if the document has no
    /// `components` container. The document is not modified in that case.
    pub fn customize(&self, mut spec: OpenApiV3Spec) -> Result<OpenApiV3Spec, CustomizeError> {
        self.customize_in_place(&mut spec)?;
        Ok(spec)
    }

    /// Customize `spec` through a mutable borrow.
    ///
    /// # Errors
    ///
    /// Same as [`DocumentCustomizer::customize`].
    pub fn customize_in_place(&self, spec: &mut OpenApiV3Spec) -> Result<(), CustomizeError> {
        if spec.components.is_none() {
            return Err(CustomizeError::MissingComponents);
        }

        if self.with_security_schemes {
            add_security_schemes(spec)?;
        }
        if self.with_standard_headers {
            add_standard_headers(spec)?;
        }
        Ok(())
    }

    /// Load `identifier` through `loader` and customize the result.
    ///
    /// # Errors
    ///
    /// - [`CustomizeError::NotFound`] if the loader has nothing under `identifier`
    /// - [`CustomizeError::Load`] if the source exists but is unreadable or invalid
    /// - anything [`DocumentCustomizer::customize`] returns
    pub fn load_and_customize<L: SpecLoader>(
        &self,
        loader: &L,
        identifier: &str,
    ) -> Result<OpenApiV3Spec, CustomizeError> {
        let spec = loader
            .load(identifier)?
            .ok_or_else(|| CustomizeError::NotFound {
                identifier: identifier.to_string(),
            })?;
        debug!(identifier, title = %spec.info.title, "loaded spec");
        self.customize(spec)
    }
}

fn components_mut(spec: &mut OpenApiV3Spec) -> Result<&mut Components, CustomizeError> {
    spec.components
        .as_mut()
        .ok_or(CustomizeError::MissingComponents)
}

fn add_security_schemes(spec: &mut OpenApiV3Spec) -> Result<(), CustomizeError> {
    spec.security.push(security_requirement()?);

    let components = components_mut(spec)?;
    for scheme in &SECURITY_SCHEMES {
        components
            .security_schemes
            .insert(scheme.key.to_string(), ObjectOrReference::Object(scheme.to_scheme()));
    }
    debug!(
        requirements = spec.security.len(),
        "registered standard security schemes"
    );
    Ok(())
}

fn add_standard_headers(spec: &mut OpenApiV3Spec) -> Result<(), CustomizeError> {
    let components = components_mut(spec)?;
    for header in &STANDARD_HEADERS {
        components
            .parameters
            .insert(header.key.to_string(), ObjectOrReference::Object(header.to_parameter()?));
    }

    let refs = STANDARD_HEADERS
        .iter()
        .map(|header| header.to_reference())
        .collect::<Result<Vec<ObjectOrReference<Parameter>>, _>>()?;

    let mut operations = 0usize;
    if let Some(paths) = spec.paths.as_mut() {
        for item in paths.values_mut() {
            for operation in operations_mut(item) {
                operation.parameters.extend(refs.iter().cloned());
                operations += 1;
            }
        }
    }
    debug!(operations, "attached standard header refs");
    Ok(())
}

/// Every operation defined on a path item, one per HTTP method.
fn operations_mut(item: &mut PathItem) -> impl Iterator<Item = &mut Operation> + '_ {
    [
        &mut item.get,
        &mut item.put,
        &mut item.post,
        &mut item.delete,
        &mut item.options,
        &mut item.head,
        &mut item.patch,
        &mut item.trace,
    ]
    .into_iter()
    .filter_map(Option::as_mut)
}
