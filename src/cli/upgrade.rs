use clap::Parser;

/// Arguments for the upgrade command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Upgrade an installed app:\n    appcenter upgrade mail\n\n\
                   See which apps have upgrades:\n    appcenter list --upgradable")]
pub struct UpgradeArgs {
    /// App id of an installed app
    pub app: String,
}
