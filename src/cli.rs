//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Tropical cyclone genesis dataset assembly.
#[derive(Parser, Debug)]
#[command(name = "typhon", version, about)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Assemble the dataset described by a TOML configuration file.
    Build(BuildArgs),
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "typhon.toml")]
    pub config: PathBuf,

    /// Directory the output CSV files are written into.
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
}
