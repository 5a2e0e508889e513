//! Assembling a configuration from all of its sources.

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{anchor_volume_dirs, ConfigLoader};
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Builds a merged, validated [`Config`].
///
/// # Examples
///
/// ```
/// use amipath::config::{Config, ConfigBuilder, PathsConfig};
///
/// let custom = Config {
///     paths: Some(PathsConfig { cur_dir: Some("ram:".into()), cmd_path: None }),
///     ..Default::default()
/// };
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(custom)
///     .build()
///     .unwrap();
/// assert_eq!(config.paths.unwrap().cur_dir.as_deref(), Some("ram:"));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
    files: Vec<PathBuf>,
    overrides: Vec<Config>,
    skip_files: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// Creates a builder that reads files and the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory to start project config discovery from (default: the
    /// process working directory).
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Directory holding the user `config.yaml` (default: `~/.amipath`).
    #[must_use]
    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = Some(dir.into());
        self
    }

    /// An explicit configuration file, merged above discovered files.
    ///
    /// Explicit files are read even when discovery is skipped.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(path.into());
        self
    }

    /// Programmatic overrides with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Skips user and project file discovery.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skips `AMIPATH_*` environment overrides.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Loads, merges and validates every source.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// entry is malformed, or the merged configuration is invalid.
    pub fn build(self) -> Result<Config> {
        let working_dir = match self.working_dir {
            Some(dir) => dir,
            None => std::env::current_dir().map_err(|e| Error::InvalidConfigPath {
                path: PathBuf::from("."),
                reason: format!("Cannot determine working directory: {e}"),
            })?,
        };

        let mut config = if self.skip_files {
            Config::default()
        } else {
            let sources = ConfigLoader::load_all(&working_dir, self.config_dir.as_deref())?;
            log::debug!("merging {} configuration file(s)", sources.len());
            ConfigMerger::merge(sources)
        };

        for file in &self.files {
            let source = ConfigLoader::load_explicit(Path::new(file))?;
            log::debug!("loaded config {}", source.path.display());
            ConfigMerger::merge_into(&mut config, &source.config);
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for overrides in &self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        // File volumes are already anchored at their file.
        anchor_volume_dirs(&mut config, &working_dir);

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}
