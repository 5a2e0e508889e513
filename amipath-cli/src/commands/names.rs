//! Command to list the component names of a path.

use crate::error::CliError;
use crate::utils::{parse_path, print_values, GlobalOptions};
use clap::Args;

/// Print the names of a path's components.
#[derive(Args)]
pub struct NamesCommand {
    /// Path to split
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Include the leading `/` or `:` of a local path as a name
    #[arg(long)]
    pub special: bool,
}

impl NamesCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = parse_path(&self.path)?;
        let names: Vec<String> = path
            .get_names(self.special)
            .into_iter()
            .map(String::from)
            .collect();
        print_values(global, &names)
    }
}
