//! Command to resolve paths to volume paths.

use crate::error::CliError;
use crate::utils::{load_env, parse_env_path, print_paths, GlobalOptions};
use clap::Args;

/// Resolve paths to volume paths.
#[derive(Args)]
pub struct VolpathCommand {
    /// Paths to resolve
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Print every candidate of a multi-assign instead of failing
    #[arg(long)]
    pub all: bool,
}

impl VolpathCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let env = load_env(global)?;
        let mut results = Vec::new();
        for text in &self.paths {
            let path = parse_env_path(&env, text)?;
            if self.all {
                results.extend(path.volpaths()?);
            } else {
                results.push(path.volpath()?);
            }
        }
        print_paths(global, &results)
    }
}
