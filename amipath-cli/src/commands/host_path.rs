//! Command to map paths onto the host file system.

use crate::error::CliError;
use crate::utils::{load_env, parse_env_path, print_values, GlobalOptions};
use clap::Args;

/// Map paths to host file system paths.
///
/// Local paths are made absolute and assigns are expanded first, so a
/// multi-assign prints one host path per candidate.
#[derive(Args)]
pub struct HostPathCommand {
    /// Paths to map
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,
}

impl HostPathCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let env = load_env(global)?;
        let mut hosts = Vec::new();
        for text in &self.paths {
            let path = parse_env_path(&env, text)?;
            for volpath in path.volpaths()? {
                let host = env.names().host_path(&volpath)?;
                hosts.push(host.display().to_string());
            }
        }
        print_values(global, &hosts)
    }
}
