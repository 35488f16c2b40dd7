//! # spk-openapi
//!
//! **spk-openapi** makes a published OpenAPI document match the wire contract that
//! SPK services actually enforce. The platform in front of every service injects
//! authentication and a set of tracing headers transparently, so hand-written and
//! generated specs leave them out; this crate adds them back before the spec is
//! rendered by a documentation UI.
//!
//! ## Overview
//!
//! Given an [`oas3::OpenApiV3Spec`], the [`DocumentCustomizer`] adds:
//!
//! - the `SpkToken` (API key in `Authorization`) and `BasicAuth` (HTTP basic)
//!   security schemes, plus one global requirement naming both together
//! - the `X-Application-Id`, `X-Correlation-Id` and `X-Request-Origin` header
//!   parameters under `components.parameters`, referenced by `$ref` from every
//!   operation
//!
//! Either step can be switched off with [`config::CustomizerConfig`].
//!
//! ## Architecture
//!
//! - **[`customizer`]** - the two customization steps and `load_and_customize`
//! - **[`standard`]** - static tables of the standard schemes and headers
//! - **[`spec`]** - the [`SpecLoader`] seam with file and in-memory loaders
//! - **[`config`]** - customizer switches from defaults, env or file
//! - **[`render`]** - YAML/JSON output
//! - **[`logging`]** - `tracing` subscriber setup for binaries
//! - **[`cli`]** - the `spk-openapi` command
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Host as Hosting app / CLI
//!     participant Cust as DocumentCustomizer
//!     participant Loader as SpecLoader
//!     participant Doc as OpenApiV3Spec
//!
//!     Host->>Cust: load_and_customize(loader, "openapi.yaml")
//!     Cust->>Loader: load("openapi.yaml")
//!     alt nothing found
//!         Loader-->>Cust: Ok(None)
//!         Cust-->>Host: Err(NotFound)
//!     else parsed
//!         Loader-->>Cust: Ok(Some(spec))
//!         Cust->>Doc: push security requirement, insert schemes
//!         Cust->>Doc: insert header parameters
//!         Cust->>Doc: append $refs to every operation
//!         Cust-->>Host: Ok(spec)
//!     end
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use spk_openapi::{DocumentCustomizer, ResourceSpecLoader};
//!
//! let loader = ResourceSpecLoader::new()
//!     .with_resource("openapi.yaml", include_str!("../doc/openapi.yaml"));
//! let spec = DocumentCustomizer::default().load_and_customize(&loader, "openapi.yaml")?;
//! assert_eq!(spec.security.len(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod customizer;
pub mod error;
pub mod logging;
pub mod render;
pub mod spec;
pub mod standard;

pub use config::CustomizerConfig;
pub use customizer::DocumentCustomizer;
pub use error::{ConfigError, CustomizeError, LoadError, RenderError};
pub use spec::{parse_spec, FileSpecLoader, ResourceSpecLoader, SpecLoader};
