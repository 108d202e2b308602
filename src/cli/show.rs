use clap::Parser;

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show an app:\n    appcenter show mail\n\n\
                  Machine-readable output:\n    appcenter show mail --json")]
pub struct ShowArgs {
    /// App id
    pub app: String,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}
