mod cli;
mod config;
mod console;
mod context;
mod menu;
mod seed;
mod validation;

use std::io;

use anyhow::Result;
use clap::Parser;
use contracts_core::ContractsReport;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use config::AppConfig;
use console::{Console, InputClosed};
use context::AppContext;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    init_tracing(&config.log_level);
    debug!(data_dir = %config.data_dir.display(), "configuration loaded");

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run(&config),
        Commands::Report => {
            let ctx = AppContext::open(&config)?;
            println!(
                "{}",
                ContractsReport::generate(&ctx.contracts, &ctx.clients, &ctx.objects)
            );
            Ok(())
        }
        Commands::ConfigPath => {
            let path = AppConfig::config_path()?;
            if !path.exists() {
                AppConfig::default().save_to(&path)?;
            }
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn run(config: &AppConfig) -> Result<()> {
    let mut ctx = AppContext::open(config)?;
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());

    match menu::run(&mut ctx, &mut console) {
        // End of input (Ctrl-D or a drained pipe) ends the session like "Exit" does.
        Err(e) if e.downcast_ref::<InputClosed>().is_some() => {
            debug!("input closed, leaving");
            Ok(())
        }
        other => other,
    }
}

/// Logs go to stderr so they never interleave with menu output. `RUST_LOG` wins over the
/// configured level.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}
