use clap::Parser;

/// Arguments for the remove command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Remove an app:\n    appcenter remove mail\n\n\
                  Remove without confirmation:\n    appcenter remove mail -y")]
pub struct RemoveArgs {
    /// App id of an installed app
    pub app: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}
