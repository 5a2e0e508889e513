//! The `AmiPath` value type: construction, classification and
//! prefix/postfix extraction.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::error::{PathError, PathErrorReason};
use crate::path::env::{NameResolver, PathContext};
use crate::path::kind::{is_syntax_valid, prefix_colon, PathKind};

/// An AmigaDOS-style path such as `sys:c/dir`, `/up`, `:top` or `name`.
///
/// The text is kept exactly as given. Optional [`PathContext`] and
/// [`NameResolver`] references are carried along so that resolving
/// operations can query the current directory and the name table; every
/// path derived from this one shares the same references.
///
/// Equality compares the prefix and the normalized postfix, so trailing
/// slashes do not matter:
///
/// ```
/// use amipath::AmiPath;
///
/// assert_eq!(AmiPath::new("foo:bar/"), AmiPath::new("foo:bar"));
/// assert_ne!(AmiPath::new("foo:bar"), AmiPath::new("bar"));
/// ```
#[derive(Clone, Default)]
pub struct AmiPath {
    text: String,
    context: Option<Arc<dyn PathContext>>,
    resolver: Option<Arc<dyn NameResolver>>,
}

impl AmiPath {
    /// Creates a path from text without checking the grammar.
    ///
    /// Use [`AmiPath::parse`] to reject malformed input.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            context: None,
            resolver: None,
        }
    }

    /// Creates a path from text, rejecting anything that violates the grammar.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSyntax` if the text is not a valid path.
    ///
    /// # Examples
    ///
    /// ```
    /// use amipath::{AmiPath, PathErrorReason};
    ///
    /// assert!(AmiPath::parse("sys:c/dir").is_ok());
    /// let err = AmiPath::parse("sys:c//dir").unwrap_err();
    /// assert_eq!(err.reason, PathErrorReason::InvalidSyntax);
    /// ```
    pub fn parse(text: &str) -> Result<Self, PathError> {
        if is_syntax_valid(text) {
            Ok(Self::new(text))
        } else {
            Err(PathError::new(text, PathErrorReason::InvalidSyntax))
        }
    }

    /// Builds a path from an optional prefix and a postfix.
    ///
    /// `build(p.prefix(), p.postfix(false))` always equals `p`.
    ///
    /// # Examples
    ///
    /// ```
    /// use amipath::AmiPath;
    ///
    /// assert_eq!(AmiPath::build(Some("work"), "src").as_str(), "work:src");
    /// assert_eq!(AmiPath::build(None, ":src").as_str(), ":src");
    /// ```
    #[must_use]
    pub fn build(prefix: Option<&str>, postfix: &str) -> Self {
        Self::new(Self::build_text(prefix, postfix))
    }

    fn build_text(prefix: Option<&str>, postfix: &str) -> String {
        match prefix {
            Some(prefix) => format!("{prefix}:{postfix}"),
            None => postfix.to_string(),
        }
    }

    /// Attaches a path context.
    #[must_use]
    pub fn with_context(mut self, context: Arc<dyn PathContext>) -> Self {
        self.context = Some(context);
        self
    }

    /// Attaches a name resolver.
    #[must_use]
    pub fn with_resolver(mut self, resolver: Arc<dyn NameResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// A new path with the given text and this path's references.
    pub(crate) fn derive(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            context: self.context.clone(),
            resolver: self.resolver.clone(),
        }
    }

    /// This path with any missing reference taken from `fallback`.
    pub(crate) fn or_refs_of(&self, fallback: &Self) -> Self {
        Self {
            text: self.text.clone(),
            context: self.context.clone().or_else(|| fallback.context.clone()),
            resolver: self.resolver.clone().or_else(|| fallback.resolver.clone()),
        }
    }

    pub(crate) fn derive_build(&self, prefix: Option<&str>, postfix: &str) -> Self {
        self.derive(Self::build_text(prefix, postfix))
    }

    pub(crate) fn error(&self, reason: PathErrorReason) -> PathError {
        PathError::new(self.text.as_str(), reason)
    }

    /// The raw path text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consumes the path and returns its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }

    /// The same path rebuilt from prefix and normalized postfix.
    ///
    /// ```
    /// use amipath::AmiPath;
    ///
    /// assert_eq!(AmiPath::new("foo:bar/").normalized().as_str(), "foo:bar");
    /// assert_eq!(AmiPath::new("/").normalized().as_str(), "/");
    /// ```
    #[must_use]
    pub fn normalized(&self) -> Self {
        self.derive_build(self.prefix(), self.postfix(false))
    }

    /// The attached context, if any.
    #[must_use]
    pub fn context(&self) -> Option<&Arc<dyn PathContext>> {
        self.context.as_ref()
    }

    pub(crate) fn require_context(&self) -> Result<&Arc<dyn PathContext>, PathError> {
        self.context
            .as_ref()
            .ok_or_else(|| self.error(PathErrorReason::NoContext))
    }

    /// The resolver to use: the attached one, else the context's.
    ///
    /// # Errors
    ///
    /// Returns `NoResolver` if neither is available.
    pub fn resolver(&self) -> Result<Arc<dyn NameResolver>, PathError> {
        if let Some(resolver) = &self.resolver {
            return Ok(Arc::clone(resolver));
        }
        self.context
            .as_ref()
            .map(|context| context.resolver())
            .ok_or_else(|| self.error(PathErrorReason::NoResolver))
    }

    /// The classification of this path.
    #[must_use]
    pub fn kind(&self) -> PathKind {
        PathKind::of(&self.text)
    }

    /// Whether the text follows the path grammar.
    #[must_use]
    pub fn is_syntax_valid(&self) -> bool {
        is_syntax_valid(&self.text)
    }

    /// True if there is no prefix (including `:name` paths).
    #[must_use]
    pub fn is_local(&self) -> bool {
        self.kind().is_local()
    }

    /// True if the path starts with a non-empty prefix.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.kind() == PathKind::Absolute
    }

    /// True if the path starts with `/`.
    #[must_use]
    pub fn is_parent_local(&self) -> bool {
        self.kind() == PathKind::ParentLocal
    }

    /// True if the path starts with `:`.
    #[must_use]
    pub fn is_prefix_local(&self) -> bool {
        self.kind() == PathKind::PrefixLocal
    }

    /// True for a single non-empty name without `/` or `:`.
    #[must_use]
    pub fn is_name_only(&self) -> bool {
        !self.text.is_empty() && !self.text.contains(['/', ':'])
    }

    /// True if the last character is neither `/` nor `:`.
    #[must_use]
    pub fn ends_with_name(&self) -> bool {
        self.text.chars().last().is_some_and(|c| c != '/' && c != ':')
    }

    /// The prefix of an absolute path.
    ///
    /// ```
    /// use amipath::AmiPath;
    ///
    /// assert_eq!(AmiPath::new("foo:bar").prefix(), Some("foo"));
    /// assert_eq!(AmiPath::new(":bar").prefix(), None);
    /// ```
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        prefix_colon(&self.text).map(|pos| &self.text[..pos])
    }

    /// Everything after the prefix colon, without a trailing slash.
    ///
    /// A lone `/` or `:` is kept. With `skip_leading`, one leading `/` or
    /// `:` is removed as well.
    ///
    /// ```
    /// use amipath::AmiPath;
    ///
    /// assert_eq!(AmiPath::new("foo:bar/").postfix(false), "bar");
    /// assert_eq!(AmiPath::new(":bla").postfix(false), ":bla");
    /// assert_eq!(AmiPath::new(":bla").postfix(true), "bla");
    /// assert_eq!(AmiPath::new("/").postfix(false), "/");
    /// assert_eq!(AmiPath::new("/").postfix(true), "");
    /// ```
    #[must_use]
    pub fn postfix(&self, skip_leading: bool) -> &str {
        let mut post = match prefix_colon(&self.text) {
            Some(pos) => &self.text[pos + 1..],
            None => self.text.as_str(),
        };
        if post.len() > 1 {
            post = post.strip_suffix('/').unwrap_or(post);
        }
        if skip_leading {
            post = post
                .strip_prefix(|c: char| c == '/' || c == ':')
                .unwrap_or(post);
        }
        post
    }

    /// The path with its last component removed, if it has one.
    ///
    /// ```
    /// use amipath::AmiPath;
    ///
    /// assert_eq!(AmiPath::new("baz:foo/bar").parent(), Some(AmiPath::new("baz:foo")));
    /// assert_eq!(AmiPath::new("baz:foo").parent(), Some(AmiPath::new("baz:")));
    /// assert_eq!(AmiPath::new("baz:").parent(), None);
    /// assert_eq!(AmiPath::new("/bar").parent(), Some(AmiPath::new("/")));
    /// assert_eq!(AmiPath::new("bar").parent(), Some(AmiPath::new("")));
    /// ```
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let postfix = self.postfix(false);
        let parent = if matches!(postfix, "/" | ":") {
            return None;
        } else if let Some(pos) = postfix.rfind('/') {
            if pos == 0 {
                "/"
            } else {
                &postfix[..pos]
            }
        } else if postfix.starts_with(':') {
            ":"
        } else if postfix.is_empty() {
            return None;
        } else {
            ""
        };
        Some(self.derive_build(self.prefix(), parent))
    }

    /// The components of the postfix.
    ///
    /// With `with_special_name`, a leading `/` or `:` is reported as its own
    /// first component.
    ///
    /// ```
    /// use amipath::AmiPath;
    ///
    /// assert_eq!(AmiPath::new("foo:bar/baz").get_names(false), ["bar", "baz"]);
    /// assert_eq!(AmiPath::new("/bar").get_names(true), ["/", "bar"]);
    /// assert!(AmiPath::new("foo:").get_names(true).is_empty());
    /// ```
    #[must_use]
    pub fn get_names(&self, with_special_name: bool) -> Vec<&str> {
        let mut rest = self.postfix(!with_special_name);
        let mut names = Vec::new();
        if with_special_name && (rest.starts_with('/') || rest.starts_with(':')) {
            names.push(&rest[..1]);
            rest = &rest[1..];
        }
        if !rest.is_empty() {
            names.extend(rest.split('/'));
        }
        names
    }

    fn require_prefix(&self) -> Result<&str, PathError> {
        self.prefix()
            .ok_or_else(|| self.error(PathErrorReason::NoPrefix))
    }

    /// Whether the prefix names a known volume or assign.
    ///
    /// # Errors
    ///
    /// Returns `NoPrefix` for local paths and `NoResolver` if no resolver
    /// is available.
    pub fn is_prefix_valid(&self) -> Result<bool, PathError> {
        let prefix = self.require_prefix()?;
        Ok(self.resolver()?.is_prefix_name(prefix))
    }

    /// Whether the prefix names a volume.
    ///
    /// # Errors
    ///
    /// Same as [`AmiPath::is_prefix_valid`].
    pub fn is_volume_path(&self) -> Result<bool, PathError> {
        let prefix = self.require_prefix()?;
        Ok(self.resolver()?.is_volume_name(prefix))
    }

    /// Whether the prefix names an assign.
    ///
    /// # Errors
    ///
    /// Same as [`AmiPath::is_prefix_valid`].
    pub fn is_assign_path(&self) -> Result<bool, PathError> {
        let prefix = self.require_prefix()?;
        Ok(self.resolver()?.is_assign_name(prefix))
    }

    /// Whether the prefix names an assign with more than one target.
    ///
    /// # Errors
    ///
    /// Returns `NoPrefix` for local paths, `NoResolver` without a resolver
    /// and `NoAssignInPrefix` if the prefix is not an assign.
    pub fn is_multi_assign_path(&self) -> Result<bool, PathError> {
        let prefix = self.require_prefix()?;
        self.resolver()?
            .contains_multi_assigns(prefix)
            .ok_or_else(|| self.error(PathErrorReason::NoAssignInPrefix))
    }

    /// Syntax check plus, for absolute paths, a prefix check.
    ///
    /// Local paths are valid as soon as their syntax is.
    ///
    /// # Errors
    ///
    /// Returns `NoResolver` for an absolute path without a resolver.
    pub fn is_valid(&self) -> Result<bool, PathError> {
        if !self.is_syntax_valid() {
            return Ok(false);
        }
        if self.is_local() {
            return Ok(true);
        }
        self.is_prefix_valid()
    }
}

impl PartialEq for AmiPath {
    fn eq(&self, other: &Self) -> bool {
        self.prefix() == other.prefix() && self.postfix(false) == other.postfix(false)
    }
}

impl Eq for AmiPath {}

impl Hash for AmiPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.prefix().hash(state);
        self.postfix(false).hash(state);
    }
}

impl fmt::Debug for AmiPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AmiPath").field(&self.text).finish()
    }
}

impl fmt::Display for AmiPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for AmiPath {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<&str> for AmiPath {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for AmiPath {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl FromStr for AmiPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for AmiPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}
