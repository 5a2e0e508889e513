//! Output formatting for path lists.
//!
//! Resolution results are lists of paths (one for `abspath`, several for
//! `volpaths` or `cmdpaths`). This module renders them as plain text or JSON.

mod formatters;

use crate::path::AmiPath;
use crate::Result;

pub use formatters::{JsonFormatter, PlainFormatter};

/// Trait for formatting a list of paths.
pub trait OutputFormatter {
    /// Format the given paths into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, paths: &[AmiPath]) -> Result<String>;
}

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One path per line.
    #[default]
    Plain,
    /// A JSON array of path strings.
    Json,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Plain => Box::new(PlainFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}
