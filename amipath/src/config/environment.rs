//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `AMIPATH_*` environment variables that
//! override configuration file values.

use crate::config::schema::{AssignTargets, Config};
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;

/// Current directory override.
pub const CUR_DIR_ENV: &str = "AMIPATH_CUR_DIR";
/// Command path override, comma-separated.
pub const CMD_PATH_ENV: &str = "AMIPATH_CMD_PATH";
/// Extra volumes, `name:dir` entries separated by `;`.
pub const VOLUMES_ENV: &str = "AMIPATH_VOLUMES";
/// Extra assigns, `name:target[,target]` entries separated by `;`.
pub const ASSIGNS_ENV: &str = "AMIPATH_ASSIGNS";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use amipath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Volumes and assigns from the environment are added to (or replace
    /// single names of) the configured tables. `AMIPATH_CUR_DIR` and
    /// `AMIPATH_CMD_PATH` replace the configured values.
    ///
    /// # Errors
    ///
    /// Returns an error if any entry is malformed (e.g. missing the
    /// `name:` part).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(volumes) = env::var(VOLUMES_ENV) {
            let map = config.volumes.get_or_insert_with(BTreeMap::new);
            for entry in Self::entries(&volumes) {
                let (name, dir) = parse_volume_entry(VOLUMES_ENV, entry)?;
                map.insert(name, dir);
            }
        }

        if let Ok(assigns) = env::var(ASSIGNS_ENV) {
            let map = config.assigns.get_or_insert_with(BTreeMap::new);
            for entry in Self::entries(&assigns) {
                let (name, targets) = parse_assign_entry(ASSIGNS_ENV, entry)?;
                map.insert(name, targets);
            }
        }

        if let Ok(cur_dir) = env::var(CUR_DIR_ENV) {
            let paths = config.paths.get_or_insert_with(Default::default);
            paths.cur_dir = Some(cur_dir.trim().to_string());
        }

        if let Ok(cmd_path) = env::var(CMD_PATH_ENV) {
            let paths = config.paths.get_or_insert_with(Default::default);
            paths.cmd_path = Some(split_list(&cmd_path));
        }

        Ok(())
    }

    fn entries(value: &str) -> impl Iterator<Item = &str> {
        value.split(';').map(str::trim).filter(|e| !e.is_empty())
    }
}

/// Split a comma-separated list, dropping empty items.
///
/// # Examples
///
/// ```
/// use amipath::config::split_list;
///
/// assert_eq!(split_list("c:, work:bin,"), ["c:", "work:bin"]);
/// ```
#[must_use]
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

fn split_entry<'a>(field: &str, entry: &'a str) -> Result<(&'a str, &'a str)> {
    entry
        .split_once(':')
        .map(|(name, rest)| (name.trim(), rest.trim()))
        .filter(|(name, rest)| !name.is_empty() && !rest.is_empty())
        .ok_or_else(|| Error::Validation {
            field: field.into(),
            message: format!("Invalid entry '{entry}' (expected NAME:VALUE)"),
        })
}

/// Parse a `name:dir` volume definition.
///
/// The name ends at the first colon, so the host directory may contain
/// colons of its own.
///
/// # Errors
///
/// Returns a validation error attributed to `field` if the entry has no
/// name or no directory.
///
/// # Examples
///
/// ```
/// use amipath::config::parse_volume_entry;
/// use std::path::PathBuf;
///
/// let (name, dir) = parse_volume_entry("--volume", "sys:/amiga/sys").unwrap();
/// assert_eq!(name, "sys");
/// assert_eq!(dir, PathBuf::from("/amiga/sys"));
/// ```
pub fn parse_volume_entry(field: &str, entry: &str) -> Result<(String, PathBuf)> {
    let (name, dir) = split_entry(field, entry)?;
    Ok((name.to_string(), PathBuf::from(dir)))
}

/// Parse a `name:target[,target...]` assign definition.
///
/// # Errors
///
/// Returns a validation error attributed to `field` if the entry has no
/// name or no targets.
///
/// # Examples
///
/// ```
/// use amipath::config::parse_assign_entry;
///
/// let (name, targets) = parse_assign_entry("--assign", "libs:sys:libs,work:libs").unwrap();
/// assert_eq!(name, "libs");
/// assert_eq!(targets.as_slice(), ["sys:libs", "work:libs"]);
/// ```
pub fn parse_assign_entry(field: &str, entry: &str) -> Result<(String, AssignTargets)> {
    let (name, rest) = split_entry(field, entry)?;
    let targets = split_list(rest);
    if targets.is_empty() {
        return Err(Error::Validation {
            field: field.into(),
            message: format!("Assign '{name}' has no targets"),
        });
    }
    Ok((name.to_string(), AssignTargets::from(targets)))
}
