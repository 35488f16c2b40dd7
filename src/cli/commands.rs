use crate::config::CustomizerConfig;
use crate::customizer::DocumentCustomizer;
use crate::render::{self, OutputFormat};
use crate::spec::FileSpecLoader;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Command-line interface for spk-openapi
#[derive(Parser)]
#[command(name = "spk-openapi")]
#[command(about = "Publish OpenAPI specs with the SPK standard security schemes and headers", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Add the standard security schemes and headers to an OpenAPI spec
    Customize {
        /// Path to the OpenAPI specification file (YAML or JSON)
        #[arg(short, long)]
        spec: PathBuf,

        /// Where to write the customized spec (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (default: from --output extension, YAML on stdout)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Customizer config file (TOML or YAML); flags below override it
        #[arg(long)]
        config: Option<PathBuf>,

        /// Skip the SpkToken/BasicAuth security schemes
        #[arg(long, default_value_t = false)]
        no_security_schemes: bool,

        /// Skip the X-Application-Id/X-Correlation-Id/X-Request-Origin headers
        #[arg(long, default_value_t = false)]
        no_standard_headers: bool,
    },
}

/// Execute the CLI command provided by the user
///
/// # Errors
///
/// Returns an error if:
/// - The config file cannot be read or parsed
/// - The OpenAPI spec is missing, unreadable or invalid
/// - The output cannot be rendered or written
pub fn run_cli(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Customize {
            spec,
            output,
            format,
            config,
            no_security_schemes,
            no_standard_headers,
        } => {
            let mut settings = match &config {
                Some(path) => CustomizerConfig::from_file(path)?,
                None => CustomizerConfig::from_env(),
            };
            if no_security_schemes {
                settings.with_security_schemes = false;
            }
            if no_standard_headers {
                settings.with_standard_headers = false;
            }

            let identifier = spec
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Invalid UTF-8 in spec path"))?;
            let customizer = DocumentCustomizer::from_config(settings);
            let document = customizer.load_and_customize(&FileSpecLoader::new(), identifier)?;
            info!(
                spec = identifier,
                security_schemes = settings.with_security_schemes,
                standard_headers = settings.with_standard_headers,
                "customized spec"
            );

            match output {
                Some(path) => {
                    render::write_spec(&document, &path, format)?;
                    info!(output = %path.display(), "wrote customized spec");
                }
                None => {
                    let rendered = render::render(&document, format.unwrap_or(OutputFormat::Yaml))?;
                    std::io::stdout().lock().write_all(rendered.as_bytes())?;
                }
            }
            Ok(())
        }
    }
}
