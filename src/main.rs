use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use separator_search::cli::{Cli, Commands};
use separator_search::commands::{cdf, optimize, separate};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match &cli.command {
        Commands::Separate(args) => separate::run(args),
        Commands::Optimize(args) => optimize::run(args),
        Commands::Cdf(args) => cdf::run(args),
    }
}

/// Log to stderr at a level picked by `-v`, unless `RUST_LOG` is set.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
