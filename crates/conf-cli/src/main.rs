//! Folder configuration resolver CLI
//!
//! Loads a workspace folder's settings and standalone domain files and
//! prints the consolidated configuration layer.

mod cli;
mod commands;
mod error;
mod loader;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;
use loader::FolderLoader;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    if let Err(e) = logging::init(default_level) {
        eprintln!("{} could not initialize logging: {}", "warning:".yellow().bold(), e);
    }
    tracing::debug!(?cli, "Parsed arguments");

    let schema = loader::load_schema(cli.schema.as_deref())?;
    let loader = |folder| FolderLoader::new(folder, &cli.config_dir, cli.scope.into(), schema.clone());

    match cli.command {
        Commands::Resolve { folder, json } => commands::run_resolve(&loader(folder), json),
        Commands::Keys { folder } => commands::run_keys(&loader(folder)),
        Commands::Unsupported { folder } => commands::run_unsupported(&loader(folder)),
        Commands::Get {
            folder,
            section,
            override_selector,
        } => commands::run_get(&loader(folder), &section, override_selector.as_deref()),
    }
}
