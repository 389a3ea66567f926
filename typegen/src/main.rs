mod commands;
mod config;
mod ops;
mod reports;

use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.run()
}

/// Logs go to stderr; stdout may carry the declarations.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
