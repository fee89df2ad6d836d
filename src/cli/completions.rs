use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    fmconv completions bash > ~/.bash_completion.d/fmconv\n\n\
                  Generate zsh completions:\n    fmconv completions zsh > ~/.zfunc/_fmconv\n\n\
                  Generate fish completions:\n    fmconv completions fish > ~/.config/fish/completions/fmconv.fish\n\n\
                  Generate PowerShell completions:\n    fmconv completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
