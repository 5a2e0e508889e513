//! Path grammar checks and classification.
//!
//! All functions here work on raw path text. The grammar is
//! `(prefix:)?(name)?(/name)*/?`, where neither `prefix` nor `name` may
//! contain `/` or `:`. The strings `""`, `":"` and `"/"` are always valid.

use std::fmt;

/// The four mutually exclusive shapes an Amiga path can take.
///
/// # Examples
///
/// ```
/// use amipath::PathKind;
///
/// assert_eq!(PathKind::of("sys:c"), PathKind::Absolute);
/// assert_eq!(PathKind::of("/c"), PathKind::ParentLocal);
/// assert_eq!(PathKind::of(":c"), PathKind::PrefixLocal);
/// assert_eq!(PathKind::of("c"), PathKind::PlainLocal);
/// assert_eq!(PathKind::of(""), PathKind::PlainLocal);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathKind {
    /// Has a non-empty prefix, e.g. `sys:c`.
    Absolute,
    /// Relative to the parent directory, e.g. `/c`.
    ParentLocal,
    /// Relative to the prefix of the current directory, e.g. `:c`.
    PrefixLocal,
    /// Relative to the current directory, e.g. `c` or `""`.
    PlainLocal,
}

impl PathKind {
    /// Classifies path text.
    #[must_use]
    pub fn of(text: &str) -> Self {
        match text.find(':') {
            Some(pos) if pos > 0 => Self::Absolute,
            _ if text.starts_with('/') => Self::ParentLocal,
            _ if text.starts_with(':') => Self::PrefixLocal,
            _ => Self::PlainLocal,
        }
    }

    /// Whether this is one of the three local kinds.
    #[must_use]
    pub const fn is_local(self) -> bool {
        !matches!(self, Self::Absolute)
    }

    /// Short lowercase name, e.g. `parent-local`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Absolute => "absolute",
            Self::ParentLocal => "parent-local",
            Self::PrefixLocal => "prefix-local",
            Self::PlainLocal => "plain-local",
        }
    }
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checks path text against the path grammar.
///
/// # Examples
///
/// ```
/// use amipath::path::is_syntax_valid;
///
/// assert!(is_syntax_valid("foo:bar/"));
/// assert!(is_syntax_valid("/"));
/// assert!(!is_syntax_valid("foo//bar"));
/// assert!(!is_syntax_valid("bla/foo:"));
/// assert!(!is_syntax_valid(":/"));
/// assert!(!is_syntax_valid("bla:foo:"));
/// ```
#[must_use]
pub fn is_syntax_valid(text: &str) -> bool {
    if matches!(text, "" | ":" | "/") {
        return true;
    }
    if text.contains("//") {
        return false;
    }
    let Some(colon_pos) = text.find(':') else {
        return true;
    };
    if text[..colon_pos].contains('/') {
        return false;
    }
    let rest = &text[colon_pos + 1..];
    !rest.starts_with('/') && !rest.contains(':')
}

/// Index of the prefix colon, if the path is absolute.
pub(crate) fn prefix_colon(text: &str) -> Option<usize> {
    text.find(':').filter(|&pos| pos > 0)
}
