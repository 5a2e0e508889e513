//! Shell completion generation command.
//!
//! Generates completion scripts for bash, zsh, fish, elvish and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary, which differs from the package name.
const BIN_NAME: &str = "amipath";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    fn install_hint(shell: Shell) -> Option<String> {
        let hint = match shell {
            Shell::Bash => format!(
                "{BIN_NAME} completions bash > ~/.local/share/bash-completion/completions/{BIN_NAME}"
            ),
            Shell::Zsh => format!("{BIN_NAME} completions zsh > ~/.zsh/completions/_{BIN_NAME}"),
            Shell::Fish => format!(
                "{BIN_NAME} completions fish > ~/.config/fish/completions/{BIN_NAME}.fish"
            ),
            Shell::PowerShell => format!("{BIN_NAME} completions powershell >> $PROFILE"),
            _ => return None,
        };
        Some(hint)
    }

    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        if !global.quiet {
            if let Some(hint) = Self::install_hint(self.shell) {
                eprintln!("# Install with:");
                eprintln!("#   {hint}");
            }
        }

        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}
