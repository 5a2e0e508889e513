//! Command to validate configuration.

use crate::error::CliError;
use crate::utils::{load_env, GlobalOptions};
use amipath::config::{ConfigLoader, ConfigValidator};
use amipath::PathEnv;
use clap::Args;
use std::path::PathBuf;

/// Validate a configuration file, or the effective configuration.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate on its own
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: Option<PathBuf>,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        match self.config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::InvalidArguments(format!(
                        "File not found: {}",
                        path.display()
                    )));
                }
                let config_err = |e: amipath::Error| CliError::Config(e.to_string());
                let config = ConfigLoader::load_file(&path).map_err(config_err)?;
                ConfigValidator::validate(&config).map_err(config_err)?;
                PathEnv::from_config(&config).map_err(config_err)?;
            }
            None => {
                load_env(global)?;
            }
        }
        if !global.quiet {
            println!("Configuration is valid");
        }
        Ok(())
    }
}
