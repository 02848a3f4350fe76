//! `typhon` assembles machine-learning datasets for monthly tropical
//! cyclone genesis: feature tables of cluster averages and climate
//! indices, basin-wide genesis-count targets, and seasonal-trend
//! adjustments, all driven by a TOML configuration file.

mod build_cmd;
mod cli;
mod config;
mod logging;

use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Build(args) => build_cmd::run(&args),
    }
}
