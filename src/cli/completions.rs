use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    modman completions bash > ~/.bash_completion.d/modman\n\n\
                  Generate zsh completions:\n    modman completions zsh > ~/.zfunc/_modman\n\n\
                  Generate fish completions:\n    modman completions fish > ~/.config/fish/completions/modman.fish\n\n\
                  Generate PowerShell completions:\n    modman completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
