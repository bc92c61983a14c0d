use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "contracts")]
#[command(about = "Console ledger for construction contracts, clients and objects")]
pub struct Cli {
    /// Directory holding the .dat files (overrides the config file)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the interactive menu (default)
    Run,
    /// Print the contracts report and exit
    Report,
    /// Print config path and create default file if missing
    ConfigPath,
}
