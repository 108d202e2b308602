//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install / upgrade / remove: app change arguments
//! - list: List command arguments
//! - show: Show command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod install;
pub mod list;
pub mod remove;
pub mod show;
pub mod upgrade;

pub use completions::CompletionsArgs;
pub use install::InstallArgs;
pub use list::ListArgs;
pub use remove::RemoveArgs;
pub use show::ShowArgs;
pub use upgrade::UpgradeArgs;

/// appcenter - application manager for the home server
#[derive(Parser, Debug)]
#[command(
    name = "appcenter",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install, upgrade and remove apps on the home server",
    long_about = "appcenter talks to the local package daemon (snapd) to show which apps are \
                  installed, which are available in the store, and to request installs, \
                  upgrades and removals.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  appcenter list                 \x1b[90m# Installed and store apps\x1b[0m\n   \
                  appcenter list --upgradable    \x1b[90m# Apps with a newer store version\x1b[0m\n   \
                  appcenter show mail            \x1b[90m# One app with both versions\x1b[0m\n   \
                  appcenter install mail         \x1b[90m# Request installation\x1b[0m\n   \
                  appcenter upgrade mail         \x1b[90m# Request an upgrade\x1b[0m\n   \
                  appcenter remove mail -y       \x1b[90m# Remove without prompting\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Configuration file (defaults to /etc/appcenter/appcenter.yaml when present)
    #[arg(long, short = 'c', global = true, env = "APPCENTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Package daemon socket, overriding the configuration
    #[arg(long, global = true, env = "APPCENTER_SOCKET")]
    pub socket: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List installed and store apps
    List(ListArgs),

    /// Show one app
    Show(ShowArgs),

    /// Install an app from the store
    Install(InstallArgs),

    /// Upgrade an installed app
    Upgrade(UpgradeArgs),

    /// Remove an installed app
    Remove(RemoveArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
