//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, environment construction and output
//! formatting.

use crate::error::CliError;
use amipath::config::{parse_assign_entry, parse_volume_entry, split_list, ConfigValidator};
use amipath::output::OutputFormat;
use amipath::{AmiPath, Config, ConfigBuilder, PathEnv};
use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Print results as JSON.
    pub json: bool,

    /// Additional configuration file.
    pub config: Option<PathBuf>,

    /// Directory holding the user configuration.
    pub config_dir: Option<PathBuf>,

    /// Skip user and project configuration files.
    pub no_config_files: bool,

    /// `NAME:DIR` volume definitions.
    pub volumes: Vec<String>,

    /// `NAME:TARGET[,TARGET...]` assign definitions.
    pub assigns: Vec<String>,

    /// Comma-separated command search path.
    pub cmd_path: Option<String>,

    /// Current directory.
    pub cur_dir: Option<String>,
}

impl GlobalOptions {
    /// The output format selected by `--json`.
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Plain
        }
    }
}

/// Build the configuration given by command-line flags alone.
///
/// # Errors
///
/// Returns `InvalidArguments` for malformed definitions.
pub fn flag_overrides(global: &GlobalOptions) -> Result<Config, CliError> {
    let invalid = |e: amipath::Error| CliError::InvalidArguments(e.to_string());
    let mut config = Config::default();

    if !global.volumes.is_empty() {
        let mut volumes = BTreeMap::new();
        for entry in &global.volumes {
            let (name, dir) = parse_volume_entry("--volume", entry).map_err(invalid)?;
            volumes.insert(name, dir);
        }
        config.volumes = Some(volumes);
    }

    if !global.assigns.is_empty() {
        let mut assigns = BTreeMap::new();
        for entry in &global.assigns {
            let (name, targets) = parse_assign_entry("--assign", entry).map_err(invalid)?;
            assigns.insert(name, targets);
        }
        config.assigns = Some(assigns);
    }

    if global.cur_dir.is_some() || global.cmd_path.is_some() {
        let paths = config.paths.get_or_insert_with(Default::default);
        paths.cur_dir.clone_from(&global.cur_dir);
        paths.cmd_path = global.cmd_path.as_deref().map(split_list);
    }

    ConfigValidator::validate(&config).map_err(invalid)?;
    Ok(config)
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. `--config` file
/// 4. Configuration files
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new().with_working_dir(env::current_dir()?);

    if global.no_config_files {
        builder = builder.skip_files();
    }
    if let Some(ref dir) = global.config_dir {
        builder = builder.with_config_dir(dir);
    }
    if let Some(ref file) = global.config {
        builder = builder.with_file(file);
    }

    builder
        .with_config(flag_overrides(global)?)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Build the path environment from all configuration sources.
pub fn load_env(global: &GlobalOptions) -> Result<Arc<PathEnv>, CliError> {
    let config = load_configuration(global)?;
    let env = PathEnv::from_config(&config).map_err(|e| CliError::Config(e.to_string()))?;
    log::debug!(
        "environment: cur dir {}, {} volume(s), {} assign(s)",
        amipath::PathContext::current_dir(&env),
        env.names().volume_names().count(),
        env.names().assign_names().count()
    );
    Ok(Arc::new(env))
}

/// Parse a path argument, rejecting invalid syntax.
pub fn parse_path(text: &str) -> Result<AmiPath, CliError> {
    AmiPath::parse(text).map_err(|e| CliError::InvalidArguments(e.to_string()))
}

/// Parse a path argument bound to an environment.
pub fn parse_env_path(env: &Arc<PathEnv>, text: &str) -> Result<AmiPath, CliError> {
    parse_path(text)?;
    Ok(env.path(text))
}

/// Print a list of paths in the selected format, without trailing slashes.
pub fn print_paths(global: &GlobalOptions, paths: &[AmiPath]) -> Result<(), CliError> {
    let normalized: Vec<AmiPath> = paths.iter().map(AmiPath::normalized).collect();
    let output = global
        .output_format()
        .create_formatter()
        .format(&normalized)?;
    println!("{output}");
    Ok(())
}

/// Print a list of plain strings, one per line or as a JSON array.
pub fn print_values(global: &GlobalOptions, values: &[String]) -> Result<(), CliError> {
    if global.json {
        let output = serde_json::to_string_pretty(values)
            .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
        println!("{output}");
    } else {
        for value in values {
            println!("{value}");
        }
    }
    Ok(())
}
