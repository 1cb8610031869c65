//! Shell completions command

use std::fs::File;
use std::io::{BufWriter, Write};

use clap::CommandFactory;

use crate::cli::CompletionsArgs;
use crate::error::{PortalError, Result, fs::io_error};

fn parse_shell(name: &str) -> Result<clap_complete::Shell> {
    match name.to_lowercase().as_str() {
        "bash" => Ok(clap_complete::Shell::Bash),
        "elvish" => Ok(clap_complete::Shell::Elvish),
        "fish" => Ok(clap_complete::Shell::Fish),
        "powershell" | "pwsh" => Ok(clap_complete::Shell::PowerShell),
        "zsh" => Ok(clap_complete::Shell::Zsh),
        _ => Err(PortalError::UnsupportedShell {
            shell: name.to_string(),
        }),
    }
}

/// Generate shell completions to stdout or to `--output`
pub fn run(args: &CompletionsArgs) -> Result<()> {
    let shell = parse_shell(&args.shell)?;

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| io_error(format!("Failed to create {}: {e}", path.display())))?;
            let mut writer = BufWriter::new(file);
            write_script(shell, &mut writer);
            writer.flush()?;
            tracing::debug!("Wrote {shell} completions to {}", path.display());
        }
        None => write_script(shell, &mut std::io::stdout().lock()),
    }

    Ok(())
}

fn write_script(shell: clap_complete::Shell, out: &mut dyn Write) {
    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "portalkit", out);
}
