use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    dircat completions bash > ~/.bash_completion.d/dircat\n\n\
                  Generate zsh completions:\n    dircat completions zsh > ~/.zfunc/_dircat\n\n\
                  Generate fish completions:\n    dircat completions fish > ~/.config/fish/completions/dircat.fish\n\n\
                  Generate PowerShell completions:\n    dircat completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
