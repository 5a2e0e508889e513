//! Error types for the amipath library.
//!
//! Path algebra failures are reported as [`PathError`], which names the
//! offending path and a [`PathErrorReason`]. Everything else (configuration,
//! name tables) is covered by the crate-level [`Error`] enum, built with
//! `thiserror`.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an amipath error.
///
/// # Examples
///
/// ```
/// use amipath::{Error, Result};
///
/// fn example_operation() -> Result<&'static str> {
///     Ok("sys:c")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Why a path operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathErrorReason {
    /// The operation needs a name resolver and none was supplied.
    NoResolver,
    /// The operation needs a path context and none was supplied.
    NoContext,
    /// A prefix query was made on a local path.
    NoPrefix,
    /// A multi-assign query was made on a prefix that is not an assign.
    NoAssignInPrefix,
    /// Two parent-local paths cannot be joined.
    DoubleParentLocal,
    /// A parent-local join needs a parent that does not exist.
    NoParent,
    /// A single volume path was requested but the assign expands to several.
    MultiAssign,
    /// The path neither is a plain name nor ends with one.
    InvalidCmdPath,
    /// The path violates the path grammar.
    InvalidSyntax,
    /// The prefix is neither a known volume nor a known assign.
    UnknownPrefix,
    /// A host path was requested for a path that is not on a volume.
    NotAVolume,
}

impl fmt::Display for PathErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NoResolver => "no name resolver available",
            Self::NoContext => "no path context available",
            Self::NoPrefix => "path has no prefix",
            Self::NoAssignInPrefix => "prefix is not an assign",
            Self::DoubleParentLocal => "cannot join two parent-local paths",
            Self::NoParent => "path has no parent",
            Self::MultiAssign => "assign expands to multiple paths",
            Self::InvalidCmdPath => "path does not name a command",
            Self::InvalidSyntax => "invalid path syntax",
            Self::UnknownPrefix => "prefix is neither a volume nor an assign",
            Self::NotAVolume => "path is not a volume path",
        };
        f.write_str(text)
    }
}

/// A failed operation on an Amiga path.
///
/// # Examples
///
/// ```
/// use amipath::{AmiPath, PathErrorReason};
///
/// let err = AmiPath::new("foo:").join(&AmiPath::new("/baz")).unwrap_err();
/// assert_eq!(err.reason, PathErrorReason::NoParent);
/// assert_eq!(err.path, "foo:");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path}: {reason}")]
pub struct PathError {
    /// The path text the operation was invoked on.
    pub path: String,
    /// What went wrong.
    pub reason: PathErrorReason,
}

impl PathError {
    /// Creates a new path error.
    #[must_use]
    pub fn new(path: impl Into<String>, reason: PathErrorReason) -> Self {
        Self {
            path: path.into(),
            reason,
        }
    }
}

/// The main error type for the amipath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path operation failed.
    #[error("path error: {0}")]
    Path(#[from] PathError),

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file could not be read.
    #[error("invalid config path {}: {reason}", path.display())]
    InvalidConfigPath {
        /// The offending file path.
        path: PathBuf,
        /// Why the file could not be used.
        reason: String,
    },

    /// A name was referenced but never defined.
    #[error("unknown volume or assign name: {name}")]
    UnknownName {
        /// The undefined name.
        name: String,
    },

    /// An assign refers back to itself, directly or indirectly.
    #[error("assign loop detected at: {name}")]
    AssignLoop {
        /// The assign where the loop was detected.
        name: String,
    },
}

impl Error {
    /// Returns the path error reason if this is a path error.
    ///
    /// # Examples
    ///
    /// ```
    /// use amipath::{Error, PathError, PathErrorReason};
    ///
    /// let err = Error::from(PathError::new("a:", PathErrorReason::MultiAssign));
    /// assert_eq!(err.path_reason(), Some(PathErrorReason::MultiAssign));
    /// ```
    #[must_use]
    pub fn path_reason(&self) -> Option<PathErrorReason> {
        match self {
            Self::Path(err) => Some(err.reason),
            _ => None,
        }
    }

    /// Check if error comes from configuration loading or validation.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. } | Self::InvalidConfigPath { .. }
        )
    }
}
