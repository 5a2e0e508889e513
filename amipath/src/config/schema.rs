//! Configuration schema definitions.
//!
//! This module defines the configuration structure for amipath: volumes,
//! assigns and the shell paths (current directory and command path).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Complete configuration structure.
///
/// Every section is optional so that partial configurations from several
/// sources can be merged.
///
/// # Examples
///
/// ```
/// use amipath::config::{AssignTargets, Config};
///
/// let yaml = "
/// volumes:
///   root: /amiga/root
/// assigns:
///   c: root:c
///   libs: [root:libs, root:more]
/// paths:
///   cmd_path: ['c:']
/// ";
/// let config: Config = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(config.assigns.unwrap()["libs"].as_slice().len(), 2);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Volume names mapped to host directories.
    pub volumes: Option<BTreeMap<String, PathBuf>>,

    /// Assign names mapped to one or more target paths.
    pub assigns: Option<BTreeMap<String, AssignTargets>>,

    /// Shell path settings.
    pub paths: Option<PathsConfig>,
}

/// The targets of an assign: a single path or a list of paths.
///
/// # Examples
///
/// ```
/// use amipath::config::AssignTargets;
///
/// let single = AssignTargets::Single("sys:c".to_string());
/// let multi = AssignTargets::Multiple(vec!["sys:libs".into(), "work:libs".into()]);
/// assert_eq!(single.as_slice(), ["sys:c"]);
/// assert_eq!(multi.as_slice().len(), 2);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum AssignTargets {
    /// A single target path.
    Single(String),
    /// Several target paths, searched in order.
    Multiple(Vec<String>),
}

impl AssignTargets {
    /// The targets as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::Single(target) => std::slice::from_ref(target),
            Self::Multiple(targets) => targets,
        }
    }
}

impl From<Vec<String>> for AssignTargets {
    fn from(mut targets: Vec<String>) -> Self {
        if targets.len() == 1 {
            Self::Single(targets.remove(0))
        } else {
            Self::Multiple(targets)
        }
    }
}

/// Current directory and command search path.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    /// The initial current directory; must be absolute.
    pub cur_dir: Option<String>,

    /// Command search path entries; each must be absolute.
    pub cmd_path: Option<Vec<String>>,
}
