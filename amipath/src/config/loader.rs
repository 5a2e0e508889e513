//! Configuration file discovery and loading.
//!
//! This module handles discovering and loading amipath configuration files
//! from various locations with proper precedence.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the shared project configuration.
pub const PROJECT_CONFIG_FILE: &str = "amipath.yaml";

/// File name of the private project configuration.
pub const LOCAL_CONFIG_FILE: &str = "amipath.local.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
///
/// # Examples
///
/// ```
/// use amipath::config::ConfigSource;
/// use std::path::PathBuf;
///
/// // User config has lowest precedence
/// let user_config = ConfigSource {
///     path: PathBuf::from("~/.amipath/config.yaml"),
///     precedence: 1,
///     config: Default::default(),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from various sources.
///
/// # Examples
///
/// ```no_run
/// use amipath::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Searches for:
    /// 1. User config at `~/.amipath/config.yaml` (precedence 1)
    /// 2. Project `amipath.yaml` walking up from `working_dir` (precedence 2)
    /// 3. Project `amipath.local.yaml` next to it (precedence 3)
    ///
    /// `config_dir` overrides the directory the user config is read from.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(working_dir: &Path, config_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config(config_dir)? {
            sources.push(user_config);
        }

        sources.extend(Self::discover_project_configs(working_dir)?);
        sources.sort_by_key(|s| s.precedence);

        Ok(sources)
    }

    /// Load the user configuration file, if there is one.
    fn load_user_config(config_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match config_dir {
            Some(dir) => dir.join("config.yaml"),
            None => default_config_dir()?.join("config.yaml"),
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        log::debug!("loaded user config {}", config_path.display());
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Discover project configurations by walking up directories.
    ///
    /// Stops at the first directory containing either `amipath.yaml` or
    /// `amipath.local.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if any discovered file cannot be read or parsed.
    pub fn discover_project_configs(start_dir: &Path) -> Result<Vec<ConfigSource>> {
        let mut configs = Vec::new();
        let mut current = start_dir.to_path_buf();

        loop {
            for (file, precedence) in [(PROJECT_CONFIG_FILE, 2), (LOCAL_CONFIG_FILE, 3)] {
                let path = current.join(file);
                if path.exists() {
                    let config = Self::load_file(&path)?;
                    log::debug!("loaded project config {}", path.display());
                    configs.push(ConfigSource {
                        path,
                        precedence,
                        config,
                    });
                }
            }

            if !configs.is_empty() || !current.pop() {
                break;
            }
        }

        Ok(configs)
    }

    /// Load an explicitly named configuration file with the highest file
    /// precedence.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_explicit(path: &Path) -> Result<ConfigSource> {
        let path = expand_tilde(path)?;
        let config = Self::load_file(&path)?;
        Ok(ConfigSource {
            path,
            precedence: 4,
            config,
        })
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidConfigPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        let mut config: Config = serde_yaml::from_str(&contents).map_err(|e| {
            let mut message = format!("Invalid YAML: {e}");
            if let Some(line) = unquoted_prefix_path(&contents) {
                message.push_str(&format!(
                    " (line {line}: paths ending in ':' must be quoted, e.g. 'sys:')"
                ));
            }
            Error::Validation {
                field: format!("{}", path.display()),
                message,
            }
        })?;

        if let Some(dir) = path.parent() {
            anchor_volume_dirs(&mut config, dir);
        }
        Ok(config)
    }
}

/// Makes relative volume directories absolute against `base`.
///
/// Directories starting with `~` are left for [`expand_tilde`].
pub(crate) fn anchor_volume_dirs(config: &mut Config, base: &Path) {
    for dir in config.volumes.iter_mut().flat_map(|volumes| volumes.values_mut()) {
        let tilde = dir.to_str().is_some_and(|text| text.starts_with('~'));
        if dir.is_relative() && !tilde && !dir.as_os_str().is_empty() {
            *dir = base.join(&*dir);
        }
    }
}

/// The 1-based line of the first unquoted value ending in `:`, such as
/// `cur_dir: sys:` or `cmd_path: [c:]`. YAML reads the colon as a mapping
/// indicator there.
fn unquoted_prefix_path(contents: &str) -> Option<usize> {
    contents
        .lines()
        .position(|line| {
            let line = line.trim();
            let value = match line.strip_prefix("- ") {
                Some(item) => item,
                None => match line.split_once(": ") {
                    Some((_, value)) => value.trim(),
                    None => return false,
                },
            };
            let flow = value.strip_prefix('[').and_then(|v| v.strip_suffix(']'));
            let items: Vec<&str> = match flow {
                Some(inner) => inner.split(',').map(str::trim).collect(),
                None => vec![value],
            };
            items.iter().any(|item| {
                item.len() > 1 && item.ends_with(':') && !item.starts_with(['\'', '"'])
            })
        })
        .map(|index| index + 1)
}

/// The default user configuration directory, `~/.amipath`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_config_dir() -> Result<PathBuf> {
    let home = home::home_dir().ok_or_else(|| Error::InvalidConfigPath {
        path: PathBuf::from("~"),
        reason: "Cannot determine home directory".to_string(),
    })?;
    Ok(home.join(".amipath"))
}

/// Expand a leading `~` to the user's home directory.
///
/// # Errors
///
/// Returns an error if the path is not UTF-8, the home directory cannot be
/// determined, or the path uses the unsupported `~user` form.
///
/// # Examples
///
/// ```
/// use amipath::config::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/amiga")).unwrap();
/// assert!(expanded.ends_with("amiga"));
///
/// let expanded = expand_tilde(Path::new("/absolute")).unwrap();
/// assert_eq!(expanded, Path::new("/absolute"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_str().ok_or_else(|| Error::InvalidConfigPath {
        path: path.to_path_buf(),
        reason: "Path contains invalid UTF-8".to_string(),
    })?;

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidConfigPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;

    if path_str == "~" {
        Ok(home)
    } else if let Some(rest) = path_str
        .strip_prefix("~/")
        .or_else(|| path_str.strip_prefix("~\\"))
    {
        Ok(home.join(rest))
    } else {
        Err(Error::InvalidConfigPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}
