mod cli;
mod application;
mod domain;
mod transform;
mod infra;

use anyhow::Result;
use cli::Cli;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise info, or debug with --verbose
    let default_level = if cli.common.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(format!("linalgd_gen={default_level}"))
                }),
        )
        .with_writer(std::io::stderr)
        .init();

    cli.run()
}
