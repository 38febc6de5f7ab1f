// src/main.rs
use anyhow::{Context, Result};
use clap::Parser;
use hrview::cli::args::Args;
use tracing::Level;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging based on verbosity
    let filter = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                format!("hrview={}", filter)
                    .parse::<Directive>()
                    .context("Invalid log directive")?,
            ),
        )
        .init();

    hrview::run(args)
}
