use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use quakereport::cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.default_log_level())),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    cli::run(cli)
}
