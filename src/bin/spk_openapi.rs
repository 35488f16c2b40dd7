use clap::Parser;
use spk_openapi::cli::{run_cli, Cli};
use spk_openapi::logging::{init_logging, LogConfig};

fn main() -> anyhow::Result<()> {
    init_logging(&LogConfig::from_env())?;
    run_cli(Cli::parse())
}
