//! portalkit - game portal configuration tool
//!
//! Resolves the URLs embedded games are loaded from (environment override
//! first, bundled fallback second) and validates the site's content manifest.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod env;
mod error;
mod logging;
mod manifest;
mod resolver;
mod ui;

use cli::{Cli, Commands};
use commands::helpers::GlobalOptions;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let options = GlobalOptions::from(&cli);

    let result = match cli.command {
        Commands::Resolve(args) => commands::resolve::run(&options, args),
        Commands::Validate(args) => commands::validate::run(&options, args),
        Commands::Check(args) => commands::check::run(&options, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(&args),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
