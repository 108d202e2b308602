//! appcenter - application manager for the home server
//!
//! Command line front end for the package orchestrator.

use std::path::PathBuf;

use clap::Parser;
use miette::Diagnostic;

use appcenter::cli::{Cli, Commands};
use appcenter::commands;
use appcenter::config::AppCenterConfig;
use appcenter::error::Result;
use appcenter::logging;
use appcenter::orchestrator::AppCenter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(&args),
        command => run_with_daemon(cli.config, cli.socket, command).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        if let Some(help) = e.help() {
            eprintln!("  help: {help}");
        }
        std::process::exit(1);
    }
}

async fn run_with_daemon(
    config: Option<PathBuf>,
    socket: Option<PathBuf>,
    command: Commands,
) -> Result<()> {
    let config = AppCenterConfig::load(config.as_deref())?.with_socket(socket);
    config.validate()?;
    let center = AppCenter::from_config(&config);

    match command {
        Commands::List(args) => commands::list::run(&center, args).await,
        Commands::Show(args) => commands::show::run(&center, args).await,
        Commands::Install(args) => commands::install::run(&center, args).await,
        Commands::Upgrade(args) => commands::upgrade::run(&center, args).await,
        Commands::Remove(args) => commands::remove::run(&center, args).await,
        Commands::Version | Commands::Completions(_) => Ok(()),
    }
}
