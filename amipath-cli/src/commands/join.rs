//! Command to join paths.

use crate::error::CliError;
use crate::utils::{parse_path, print_paths, GlobalOptions};
use clap::Args;

/// Join paths left to right.
#[derive(Args)]
pub struct JoinCommand {
    /// Path to start from
    #[arg(value_name = "BASE")]
    pub base: String,

    /// Paths to join onto the base, in order
    #[arg(value_name = "PATH", required = true)]
    pub others: Vec<String>,
}

impl JoinCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut result = parse_path(&self.base)?;
        for text in &self.others {
            let other = parse_path(text)?;
            result = result.join(&other)?;
        }
        log::debug!("joined {} path(s) into {result}", self.others.len() + 1);
        print_paths(global, &[result])
    }
}
