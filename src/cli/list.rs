use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List installed and store apps:\n    appcenter list\n\n\
                  Only apps on this device:\n    appcenter list --installed\n\n\
                  Only apps with an upgrade:\n    appcenter list --upgradable\n\n\
                  Machine-readable output:\n    appcenter list --json")]
pub struct ListArgs {
    /// Only apps installed on this device
    #[arg(long, conflicts_with_all = ["available", "upgradable"])]
    pub installed: bool,

    /// Only apps listed in the store
    #[arg(long, conflicts_with = "upgradable")]
    pub available: bool,

    /// Only installed apps with a different store version
    #[arg(long)]
    pub upgradable: bool,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}
