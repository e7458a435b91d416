//! rPeaklog library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
        Commands::Bag { .. } | Commands::Unbag { .. } | Commands::Edit { .. } => {
            cli::commands::bag::handle(&cli.command, cfg)
        }
        Commands::Photo { .. } => cli::commands::photo::handle(&cli.command, cfg),
        Commands::Stats => cli::commands::stats::handle(&cli.command, cfg),
        Commands::Check { .. } => cli::commands::check::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Reset { .. } => cli::commands::reset::handle(&cli.command, cfg),
    }
}

/// Diagnostic logging goes to stderr so it never mixes with command output.
fn init_tracing(verbose: bool) {
    let default = if verbose { "rpeaklog=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Apply the per-invocation path overrides from the command line.
pub fn apply_overrides(cli: &Cli, cfg: &mut Config) {
    if let Some(p) = &cli.catalog {
        cfg.catalog = p.clone();
    }
    if let Some(p) = &cli.progress {
        cfg.progress = p.clone();
    }
    if let Some(p) = &cli.photos {
        cfg.photos_dir = p.clone();
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line overrides
    apply_overrides(&cli, &mut cfg);

    // 4️⃣ dispatch
    dispatch(&cli, &cfg)
}
