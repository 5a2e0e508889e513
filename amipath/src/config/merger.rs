//! Configuration merging and precedence handling.
//!
//! Volume and assign tables are merged name by name, so a project file can
//! add or redefine single names without repeating the user's whole table.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, PathsConfig};
use std::collections::BTreeMap;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use amipath::config::{Config, ConfigMerger, PathsConfig};
///
/// let low = Config {
///     paths: Some(PathsConfig { cur_dir: Some("sys:".into()), cmd_path: None }),
///     ..Default::default()
/// };
/// let high = Config {
///     paths: Some(PathsConfig { cur_dir: Some("work:".into()), cmd_path: None }),
///     ..Default::default()
/// };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.paths.unwrap().cur_dir.as_deref(), Some("work:"));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Volumes and assigns: merged per name, source entries win
    /// - `paths.cur_dir`: source overwrites if set
    /// - `paths.cmd_path`: replaced as a whole if set, never concatenated
    pub fn merge_into(target: &mut Config, source: &Config) {
        if let Some(ref volumes) = source.volumes {
            Self::merge_map(&mut target.volumes, volumes);
        }

        if let Some(ref assigns) = source.assigns {
            Self::merge_map(&mut target.assigns, assigns);
        }

        if let Some(ref source_paths) = source.paths {
            target.paths = Some(match &target.paths {
                Some(target_paths) => Self::merge_paths(target_paths, source_paths),
                None => source_paths.clone(),
            });
        }
    }

    fn merge_map<V: Clone>(
        target: &mut Option<BTreeMap<String, V>>,
        source: &BTreeMap<String, V>,
    ) {
        let map = target.get_or_insert_with(BTreeMap::new);
        for (name, value) in source {
            map.insert(name.clone(), value.clone());
        }
    }

    fn merge_paths(target: &PathsConfig, source: &PathsConfig) -> PathsConfig {
        PathsConfig {
            cur_dir: source.cur_dir.clone().or_else(|| target.cur_dir.clone()),
            cmd_path: source.cmd_path.clone().or_else(|| target.cmd_path.clone()),
        }
    }
}
