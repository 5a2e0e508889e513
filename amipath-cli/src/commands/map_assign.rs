//! Command to expand the assign prefix of a path.

use crate::error::CliError;
use crate::utils::{load_env, parse_env_path, print_paths, GlobalOptions};
use clap::Args;

/// Replace an assign prefix by its targets.
#[derive(Args)]
pub struct MapAssignCommand {
    /// Path whose prefix is an assign
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Expand nested assigns down to volumes
    #[arg(long, short)]
    pub recursive: bool,
}

impl MapAssignCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let env = load_env(global)?;
        let path = parse_env_path(&env, &self.path)?;
        let results = path.map_assign(self.recursive)?;
        print_paths(global, &results)
    }
}
