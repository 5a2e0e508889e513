//! Configuration system for amipath.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project files)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of names, assign targets and shell paths
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`AMIPATH_*`)
//! 3. Explicit files (via `ConfigBuilder::with_file`)
//! 4. Private project config (`amipath.local.yaml`)
//! 5. Project config (`amipath.yaml`)
//! 6. User config (`~/.amipath/config.yaml`)
//!
//! Volume and assign tables merge name by name; `paths.cur_dir` and
//! `paths.cmd_path` are replaced by the highest source that sets them.
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use amipath::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use amipath::config::{AssignTargets, Config, ConfigBuilder};
//! use std::collections::BTreeMap;
//!
//! let custom = Config {
//!     volumes: Some(BTreeMap::from([("sys".to_string(), "/amiga/sys".into())])),
//!     assigns: Some(BTreeMap::from([(
//!         "c".to_string(),
//!         AssignTargets::Single("sys:c".to_string()),
//!     )])),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert!(config.assigns.unwrap().contains_key("c"));
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::{parse_assign_entry, parse_volume_entry, split_list, EnvironmentConfig};
pub use loader::{default_config_dir, expand_tilde, ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{AssignTargets, Config, PathsConfig};
pub use validator::ConfigValidator;
