//! Configuration validation.
//!
//! Checks every field on its own. Cross-references between names (unknown
//! prefixes, assign loops) are checked when the name table is built.

use crate::config::schema::{Config, PathsConfig};
use crate::error::{Error, Result};
use crate::names::{validate_assign_target, validate_name};
use crate::path::AmiPath;
use std::path::Path;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use amipath::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref volumes) = config.volumes {
            for (name, dir) in volumes {
                let field = format!("volumes.{name}");
                validate_name(&field, name)?;
                Self::validate_host_dir(&field, dir)?;
            }
        }

        if let Some(ref assigns) = config.assigns {
            for (name, targets) in assigns {
                let field = format!("assigns.{name}");
                validate_name(&field, name)?;
                if config
                    .volumes
                    .as_ref()
                    .is_some_and(|volumes| volumes.contains_key(name))
                {
                    return Err(Error::Validation {
                        field,
                        message: format!("'{name}' is already defined as a volume"),
                    });
                }
                if targets.as_slice().is_empty() {
                    return Err(Error::Validation {
                        field,
                        message: "assign needs at least one target".into(),
                    });
                }
                for target in targets.as_slice() {
                    validate_assign_target(&field, target)?;
                }
            }
        }

        if let Some(ref paths) = config.paths {
            Self::validate_paths(paths)?;
        }

        Ok(())
    }

    fn validate_host_dir(field: &str, dir: &Path) -> Result<()> {
        if dir.as_os_str().is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "host directory cannot be empty".into(),
            });
        }
        Ok(())
    }

    fn validate_paths(paths: &PathsConfig) -> Result<()> {
        if let Some(ref cur_dir) = paths.cur_dir {
            Self::validate_absolute("paths.cur_dir", cur_dir)?;
        }
        for entry in paths.cmd_path.iter().flatten() {
            Self::validate_absolute("paths.cmd_path", entry)?;
        }
        Ok(())
    }

    fn validate_absolute(field: &str, text: &str) -> Result<()> {
        let path = AmiPath::parse(text).map_err(|e| Error::Validation {
            field: field.into(),
            message: e.to_string(),
        })?;
        if !path.is_absolute() {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("'{text}' must be an absolute path"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::AssignTargets;
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    fn field_of(result: Result<()>) -> String {
        match result {
            Err(Error::Validation { field, .. }) => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    fn with_assign(name: &str, targets: AssignTargets) -> Config {
        Config {
            assigns: Some(BTreeMap::from([(name.to_string(), targets)])),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_config() {
        let config = Config {
            volumes: Some(BTreeMap::from([(
                "sys".to_string(),
                PathBuf::from("/amiga/sys"),
            )])),
            assigns: Some(BTreeMap::from([(
                "c".to_string(),
                AssignTargets::Single("sys:c".into()),
            )])),
            paths: Some(PathsConfig {
                cur_dir: Some("sys:".into()),
                cmd_path: Some(vec!["c:".into(), "sys:tools/".into()]),
            }),
        };
        ConfigValidator::validate(&config).unwrap();
    }

    #[test]
    fn test_invalid_volume_name() {
        let config = Config {
            volumes: Some(BTreeMap::from([(
                "bad/name".to_string(),
                PathBuf::from("/x"),
            )])),
            ..Default::default()
        };
        assert_eq!(field_of(ConfigValidator::validate(&config)), "volumes.bad/name");
    }

    #[test]
    fn test_empty_host_dir() {
        let config = Config {
            volumes: Some(BTreeMap::from([("sys".to_string(), PathBuf::new())])),
            ..Default::default()
        };
        assert_eq!(field_of(ConfigValidator::validate(&config)), "volumes.sys");
    }

    #[test]
    fn test_relative_assign_target() {
        let config = with_assign("c", AssignTargets::Single("c".into()));
        assert_eq!(field_of(ConfigValidator::validate(&config)), "assigns.c");
    }

    #[test]
    fn test_invalid_assign_target_syntax() {
        let config = with_assign("c", AssignTargets::Single("sys:/c".into()));
        assert_eq!(field_of(ConfigValidator::validate(&config)), "assigns.c");
    }

    #[test]
    fn test_empty_assign_targets() {
        let config = with_assign("c", AssignTargets::Multiple(Vec::new()));
        assert_eq!(field_of(ConfigValidator::validate(&config)), "assigns.c");
    }

    #[test]
    fn test_name_clash() {
        let mut config = with_assign("sys", AssignTargets::Single("sys:c".into()));
        config.volumes = Some(BTreeMap::from([(
            "sys".to_string(),
            PathBuf::from("/amiga/sys"),
        )]));
        assert_eq!(field_of(ConfigValidator::validate(&config)), "assigns.sys");
    }

    #[test]
    fn test_relative_cur_dir() {
        let config = Config {
            paths: Some(PathsConfig {
                cur_dir: Some(":work".into()),
                cmd_path: None,
            }),
            ..Default::default()
        };
        assert_eq!(field_of(ConfigValidator::validate(&config)), "paths.cur_dir");
    }

    #[test]
    fn test_relative_cmd_path_entry() {
        let config = Config {
            paths: Some(PathsConfig {
                cur_dir: None,
                cmd_path: Some(vec!["c:".into(), "bin".into()]),
            }),
            ..Default::default()
        };
        assert_eq!(field_of(ConfigValidator::validate(&config)), "paths.cmd_path");
    }

    #[test]
    fn test_unknown_references_left_to_table() {
        let config = with_assign("c", AssignTargets::Single("nowhere:c".into()));
        assert!(ConfigValidator::validate(&config).is_ok());
    }
}
