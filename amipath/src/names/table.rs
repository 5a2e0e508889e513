//! Volume and assign definitions.

use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;

use crate::error::{Error, PathError, PathErrorReason, Result};
use crate::path::{AmiPath, NameResolver};

/// Checks that `name` can be used as a volume or assign name.
///
/// Names must be non-empty and contain neither `/` nor `:`.
///
/// # Errors
///
/// Returns a validation error naming `field` otherwise.
///
/// # Examples
///
/// ```
/// use amipath::names::validate_name;
///
/// assert!(validate_name("volumes", "work").is_ok());
/// assert!(validate_name("volumes", "wo:rk").is_err());
/// assert!(validate_name("volumes", "").is_err());
/// ```
pub fn validate_name(field: &str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::Validation {
            field: field.into(),
            message: "name cannot be empty".into(),
        });
    }
    if name.contains(['/', ':']) {
        return Err(Error::Validation {
            field: field.into(),
            message: format!("name '{name}' must not contain '/' or ':'"),
        });
    }
    Ok(())
}

/// Checks that `target` can be the target of an assign.
///
/// Targets are absolute paths whose postfix does not start with `/`.
///
/// # Errors
///
/// Returns a validation error naming `field` otherwise.
pub fn validate_assign_target(field: &str, target: &str) -> Result<AmiPath> {
    let path = AmiPath::parse(target).map_err(|e| Error::Validation {
        field: field.into(),
        message: e.to_string(),
    })?;
    if !path.is_absolute() {
        return Err(Error::Validation {
            field: field.into(),
            message: format!("assign target '{target}' must be an absolute path"),
        });
    }
    Ok(path)
}

/// Volume and assign definitions, usable as a [`NameResolver`].
///
/// A `NameTable` is immutable once built. Every assign target refers to a
/// defined volume or assign and assigns never form a loop, so recursive
/// expansion always terminates.
///
/// # Examples
///
/// ```
/// use amipath::names::NameTable;
/// use amipath::path::NameResolver;
///
/// let table = NameTable::builder()
///     .volume("root", "/amiga/root")
///     .volume("system", "/amiga/system")
///     .assign("c", ["system:c"])
///     .assign("a", ["b:", "c:foo"])
///     .assign("b", ["root:bla"])
///     .build()
///     .unwrap();
///
/// assert_eq!(table.resolve_assign("a", false), ["b:", "c:foo"]);
/// assert_eq!(table.resolve_assign("a", true), ["root:bla", "system:c/foo"]);
/// assert_eq!(table.contains_multi_assigns("a"), Some(true));
/// ```
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    volumes: BTreeMap<String, PathBuf>,
    assigns: BTreeMap<String, Vec<AmiPath>>,
}

impl NameTable {
    /// Starts building a table.
    #[must_use]
    pub fn builder() -> NameTableBuilder {
        NameTableBuilder::default()
    }

    /// Volume names in sorted order.
    pub fn volume_names(&self) -> impl Iterator<Item = &str> {
        self.volumes.keys().map(String::as_str)
    }

    /// Assign names in sorted order.
    pub fn assign_names(&self) -> impl Iterator<Item = &str> {
        self.assigns.keys().map(String::as_str)
    }

    /// The host directory of a volume.
    #[must_use]
    pub fn volume_dir(&self, name: &str) -> Option<&PathBuf> {
        self.volumes.get(name)
    }

    /// The targets of an assign, as defined.
    #[must_use]
    pub fn assign_targets(&self, name: &str) -> Option<&[AmiPath]> {
        self.assigns.get(name).map(Vec::as_slice)
    }

    /// Maps a volume path to a path on the host file system.
    ///
    /// The mapping is purely textual; nothing is checked on disk.
    ///
    /// # Errors
    ///
    /// Returns `NotAVolume` unless the path is absolute and its prefix is a
    /// volume.
    ///
    /// # Examples
    ///
    /// ```
    /// use amipath::names::NameTable;
    /// use amipath::AmiPath;
    /// use std::path::PathBuf;
    ///
    /// let table = NameTable::builder().volume("work", "/data/work").build().unwrap();
    /// let host = table.host_path(&AmiPath::new("work:src/main.c")).unwrap();
    /// assert_eq!(host, PathBuf::from("/data/work/src/main.c"));
    /// ```
    pub fn host_path(&self, path: &AmiPath) -> std::result::Result<PathBuf, PathError> {
        let dir = path
            .prefix()
            .and_then(|prefix| self.volumes.get(prefix))
            .ok_or_else(|| PathError::new(path.as_str(), PathErrorReason::NotAVolume))?;
        let mut host = dir.clone();
        for name in path.get_names(false) {
            host.push(name);
        }
        Ok(host)
    }

    fn expand(&self, name: &str) -> Vec<String> {
        let Some(targets) = self.assigns.get(name) else {
            return Vec::new();
        };
        let mut roots = Vec::new();
        for target in targets {
            match target.prefix() {
                Some(prefix) if self.assigns.contains_key(prefix) => {
                    let postfix = target.postfix(false);
                    for root in self.expand(prefix) {
                        if postfix.is_empty() {
                            roots.push(root);
                        } else {
                            roots.push(AmiPath::new(root).append(postfix).into_string());
                        }
                    }
                }
                _ => roots.push(target.to_string()),
            }
        }
        roots
    }
}

impl NameResolver for NameTable {
    fn is_prefix_name(&self, name: &str) -> bool {
        self.is_volume_name(name) || self.is_assign_name(name)
    }

    fn is_volume_name(&self, name: &str) -> bool {
        self.volumes.contains_key(name)
    }

    fn is_assign_name(&self, name: &str) -> bool {
        self.assigns.contains_key(name)
    }

    fn contains_multi_assigns(&self, name: &str) -> Option<bool> {
        self.assigns
            .contains_key(name)
            .then(|| self.expand(name).len() > 1)
    }

    fn resolve_assign(&self, name: &str, recursive: bool) -> Vec<String> {
        if recursive {
            self.expand(name)
        } else {
            self.assigns
                .get(name)
                .map(|targets| targets.iter().map(ToString::to_string).collect())
                .unwrap_or_default()
        }
    }
}

/// Builder for [`NameTable`].
///
/// Definitions are collected as given and checked in [`NameTableBuilder::build`].
/// Defining a name twice replaces the earlier definition.
#[derive(Debug, Clone, Default)]
pub struct NameTableBuilder {
    volumes: BTreeMap<String, PathBuf>,
    assigns: BTreeMap<String, Vec<String>>,
}

impl NameTableBuilder {
    /// Defines a volume backed by a host directory.
    #[must_use]
    pub fn volume(mut self, name: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        self.volumes.insert(name.into(), dir.into());
        self
    }

    /// Defines an assign with one or more targets.
    #[must_use]
    pub fn assign<I, S>(mut self, name: impl Into<String>, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assigns
            .insert(name.into(), targets.into_iter().map(Into::into).collect());
        self
    }

    /// Validates the definitions and builds the table.
    ///
    /// # Errors
    ///
    /// - `Validation` for malformed names or targets, empty target lists,
    ///   and names defined as both volume and assign
    /// - `UnknownName` for targets whose prefix is not defined
    /// - `AssignLoop` if an assign expands to itself
    pub fn build(self) -> Result<NameTable> {
        for name in self.volumes.keys() {
            validate_name("volumes", name)?;
        }

        let mut assigns = BTreeMap::new();
        for (name, targets) in self.assigns {
            let field = format!("assigns.{name}");
            validate_name(&field, &name)?;
            if self.volumes.contains_key(&name) {
                return Err(Error::Validation {
                    field,
                    message: format!("'{name}' is already defined as a volume"),
                });
            }
            if targets.is_empty() {
                return Err(Error::Validation {
                    field,
                    message: "assign needs at least one target".into(),
                });
            }
            let targets = targets
                .iter()
                .map(|target| validate_assign_target(&field, target))
                .collect::<Result<Vec<_>>>()?;
            assigns.insert(name, targets);
        }

        let table = NameTable {
            volumes: self.volumes,
            assigns,
        };
        table.check_references()?;
        table.check_loops()?;
        log::debug!(
            "name table: {} volume(s), {} assign(s)",
            table.volumes.len(),
            table.assigns.len()
        );
        Ok(table)
    }
}

impl NameTable {
    fn check_references(&self) -> Result<()> {
        for targets in self.assigns.values() {
            for target in targets {
                let prefix = target.prefix().unwrap_or_default();
                if !self.is_prefix_name(prefix) {
                    return Err(Error::UnknownName {
                        name: prefix.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    fn check_loops(&self) -> Result<()> {
        let mut done = HashSet::new();
        for name in self.assigns.keys() {
            self.visit(name, &mut Vec::new(), &mut done)?;
        }
        Ok(())
    }

    fn visit<'a>(
        &'a self,
        name: &'a str,
        stack: &mut Vec<&'a str>,
        done: &mut HashSet<&'a str>,
    ) -> Result<()> {
        if done.contains(name) {
            return Ok(());
        }
        if stack.contains(&name) {
            return Err(Error::AssignLoop { name: name.into() });
        }
        stack.push(name);
        for target in self.assigns.get(name).into_iter().flatten() {
            if let Some(prefix) = target.prefix().filter(|p| self.assigns.contains_key(*p)) {
                self.visit(prefix, stack, done)?;
            }
        }
        stack.pop();
        done.insert(name);
        Ok(())
    }
}
