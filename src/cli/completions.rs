use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    appcenter completions bash > /etc/bash_completion.d/appcenter\n\n\
                  Generate zsh completions:\n    appcenter completions zsh > ~/.zfunc/_appcenter\n\n\
                  Generate fish completions:\n    appcenter completions fish > ~/.config/fish/completions/appcenter.fish")]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
