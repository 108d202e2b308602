use clap::Parser;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install an app from the store:\n    appcenter install mail\n\n\
                   The daemon installs in the background; check progress with:\n    appcenter show mail")]
pub struct InstallArgs {
    /// App id as listed in the store
    pub app: String,
}
