//! Command to list command search candidates.

use crate::error::CliError;
use crate::utils::{load_env, parse_env_path, print_paths, GlobalOptions};
use clap::Args;

/// List the candidate locations of a command.
#[derive(Args)]
pub struct CmdpathsCommand {
    /// Command name or path
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Do not try the current directory last
    #[arg(long)]
    pub no_cur_dir: bool,

    /// Keep assign prefixes instead of resolving to volume paths
    #[arg(long)]
    pub no_volpaths: bool,
}

impl CmdpathsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let env = load_env(global)?;
        let path = parse_env_path(&env, &self.name)?;
        let results = path.cmdpaths(!self.no_cur_dir, !self.no_volpaths)?;
        print_paths(global, &results)
    }
}
