//! Command to make paths absolute.

use crate::error::CliError;
use crate::utils::{load_env, parse_env_path, print_paths, GlobalOptions};
use clap::Args;

/// Make paths absolute against the current directory.
#[derive(Args)]
pub struct AbspathCommand {
    /// Paths to make absolute
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,
}

impl AbspathCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let env = load_env(global)?;
        let mut results = Vec::with_capacity(self.paths.len());
        for text in &self.paths {
            results.push(parse_env_path(&env, text)?.abspath()?);
        }
        print_paths(global, &results)
    }
}
