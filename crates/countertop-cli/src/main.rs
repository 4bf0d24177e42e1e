//! Countertop Pricing - estimates, material matching and project quotes
//!
//! A CLI over the pricing core: prices countertops from supplier CSV sheets
//! and matches vision provider observations against the material catalog.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;
use countertop_app::Config;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    init_tracing(&config.log_level, cli.verbose);

    if let Err(e) = commands::execute(cli, config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so JSON on stdout stays parseable
fn init_tracing(log_level: &str, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(log_level))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
