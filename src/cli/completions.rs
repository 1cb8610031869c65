use std::path::PathBuf;

use clap::Args;

/// Arguments for completions command
#[derive(Args, Debug, Clone)]
#[command(after_help = "Examples:\n  \
                  portalkit completions zsh > ~/.zfunc/_portalkit\n  \
                  portalkit completions bash -o /etc/bash_completion.d/portalkit\n  \
                  portalkit completions pwsh -o portalkit.ps1")]
pub struct CompletionsArgs {
    /// Target shell: bash, elvish, fish, powershell (or pwsh), zsh
    pub shell: String,

    /// Write the script to this file instead of stdout
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}
