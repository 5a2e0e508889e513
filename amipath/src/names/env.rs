//! A ready-made [`PathContext`] backed by a [`NameTable`].

use std::sync::Arc;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::names::table::NameTable;
use crate::path::{AmiPath, NameResolver, PathContext};

/// Current directory used when neither configuration nor volumes name one.
pub const FALLBACK_CUR_DIR: &str = "ram:";

/// A shell-like environment: current directory, command path and names.
///
/// # Examples
///
/// ```
/// use amipath::names::{NameTable, PathEnv};
/// use amipath::AmiPath;
/// use std::sync::Arc;
///
/// let table = NameTable::builder()
///     .volume("sys", "/amiga/sys")
///     .assign("c", ["sys:c"])
///     .build()
///     .unwrap();
/// let env = Arc::new(
///     PathEnv::new(Arc::new(table))
///         .with_cur_dir(AmiPath::new("sys:work"))
///         .unwrap()
///         .with_cmd_paths(vec![AmiPath::new("c:")])
///         .unwrap(),
/// );
///
/// let dir = env.path("dir");
/// assert_eq!(dir.abspath().unwrap(), AmiPath::new("sys:work/dir"));
/// assert_eq!(
///     dir.cmdpaths(true, true).unwrap(),
///     [AmiPath::new("sys:c/dir"), AmiPath::new("sys:work/dir")]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct PathEnv {
    names: Arc<NameTable>,
    cur_dir: AmiPath,
    cmd_paths: Vec<AmiPath>,
}

impl PathEnv {
    /// Creates an environment with an empty command path.
    ///
    /// The current directory is the root of the first volume in name
    /// order, or [`FALLBACK_CUR_DIR`] if there are no volumes.
    #[must_use]
    pub fn new(names: Arc<NameTable>) -> Self {
        let cur_dir = names
            .volume_names()
            .next()
            .map_or_else(
                || AmiPath::new(FALLBACK_CUR_DIR),
                |volume| AmiPath::build(Some(volume), ""),
            );
        Self {
            names,
            cur_dir,
            cmd_paths: Vec::new(),
        }
    }

    /// Builds the name table and environment described by a configuration.
    ///
    /// Volume directories starting with `~` are expanded to the home
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns any error of [`NameTableBuilder::build`](crate::names::NameTableBuilder::build),
    /// and validation errors for a relative current directory or command
    /// path entry.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = NameTable::builder();
        for (name, dir) in config.volumes.iter().flatten() {
            builder = builder.volume(name.as_str(), crate::config::expand_tilde(dir)?);
        }
        for (name, targets) in config.assigns.iter().flatten() {
            builder = builder.assign(name.as_str(), targets.as_slice().iter().cloned());
        }
        let mut env = Self::new(Arc::new(builder.build()?));

        if let Some(paths) = &config.paths {
            if let Some(cur_dir) = &paths.cur_dir {
                env = env.with_cur_dir(AmiPath::new(cur_dir.as_str()))?;
            }
            if let Some(cmd_path) = &paths.cmd_path {
                let cmd_paths = cmd_path.iter().map(|p| AmiPath::new(p.as_str())).collect();
                env = env.with_cmd_paths(cmd_paths)?;
            }
        }
        Ok(env)
    }

    /// Replaces the current directory.
    ///
    /// # Errors
    ///
    /// Returns a validation error unless `cur_dir` is a valid absolute path.
    pub fn with_cur_dir(mut self, cur_dir: AmiPath) -> Result<Self> {
        Self::check_absolute("paths.cur_dir", &cur_dir)?;
        self.cur_dir = cur_dir;
        Ok(self)
    }

    /// Replaces the command search path.
    ///
    /// # Errors
    ///
    /// Returns a validation error unless every entry is a valid absolute path.
    pub fn with_cmd_paths(mut self, cmd_paths: Vec<AmiPath>) -> Result<Self> {
        for path in &cmd_paths {
            Self::check_absolute("paths.cmd_path", path)?;
        }
        self.cmd_paths = cmd_paths;
        Ok(self)
    }

    fn check_absolute(field: &str, path: &AmiPath) -> Result<()> {
        if path.is_syntax_valid() && path.is_absolute() {
            Ok(())
        } else {
            Err(Error::Validation {
                field: field.into(),
                message: format!("'{path}' is not a valid absolute path"),
            })
        }
    }

    /// The name table.
    #[must_use]
    pub fn names(&self) -> &Arc<NameTable> {
        &self.names
    }

    /// A path that resolves against this environment.
    #[must_use]
    pub fn path(self: &Arc<Self>, text: &str) -> AmiPath {
        AmiPath::new(text).with_context(Arc::clone(self) as Arc<dyn PathContext>)
    }
}

impl PathContext for PathEnv {
    fn current_dir(&self) -> AmiPath {
        self.cur_dir.clone().with_resolver(self.resolver())
    }

    fn cmd_paths(&self) -> Vec<AmiPath> {
        self.cmd_paths.clone()
    }

    fn resolver(&self) -> Arc<dyn NameResolver> {
        Arc::clone(&self.names) as Arc<dyn NameResolver>
    }
}
