//! # CLI Module
//!
//! Command-line front end for publishing customized OpenAPI specs.
//!
//! ## Commands
//!
//! ### `customize`
//!
//! Add the SPK standard security schemes and headers to a spec:
//!
//! ```bash
//! spk-openapi customize --spec openapi.yaml --output doc/openapi.yaml
//! ```
//!
//! Options:
//! - `--spec <FILE>` - Path to OpenAPI specification (required)
//! - `--output <FILE>` - Write here instead of stdout
//! - `--format <yaml|json>` - Output format (default: from `--output` extension)
//! - `--config <FILE>` - Customizer config (TOML or YAML)
//! - `--no-security-schemes` - Skip `SpkToken`/`BasicAuth`
//! - `--no-standard-headers` - Skip the `X-*` headers
//!
//! Without `--config`, the `SPK_OPENAPI_SECURITY_SCHEMES` and
//! `SPK_OPENAPI_STANDARD_HEADERS` environment variables are honoured.
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use spk_openapi::cli::{run_cli, Cli};
//! use clap::Parser;
//!
//! run_cli(Cli::parse())?;
//! ```

mod commands;


pub use commands::{run_cli, Cli, Commands};
