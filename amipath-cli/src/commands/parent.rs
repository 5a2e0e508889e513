//! Command to print the parent of a path.

use crate::error::CliError;
use crate::utils::{parse_path, print_paths, GlobalOptions};
use amipath::{PathError, PathErrorReason};
use clap::Args;

/// Print the parent of a path.
#[derive(Args)]
pub struct ParentCommand {
    /// Path to take the parent of
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl ParentCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = parse_path(&self.path)?;
        let parent = path
            .parent()
            .ok_or_else(|| PathError::new(path.as_str(), PathErrorReason::NoParent))?;
        print_paths(global, &[parent])
    }
}
