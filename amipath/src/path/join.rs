//! Joining paths.
//!
//! The result depends on the kind of the right-hand path:
//!
//! | other          | result                                             |
//! |----------------|----------------------------------------------------|
//! | `Absolute`     | `other`                                            |
//! | `ParentLocal`  | `other` appended to the parent of `self`           |
//! | `PrefixLocal`  | `other`'s postfix under the prefix of `self`       |
//! | `PlainLocal`   | `other` appended to `self`                         |

use crate::error::{PathError, PathErrorReason};
use crate::path::{AmiPath, PathKind};

impl AmiPath {
    /// Joins `other` onto this path.
    ///
    /// An absolute `other` is returned as is, keeping its own context and
    /// resolver; only references it lacks are taken from this path. Every
    /// other result carries this path's context and resolver.
    ///
    /// # Errors
    ///
    /// Joining a parent-local path fails with `DoubleParentLocal` if this
    /// path is parent-local too, and with `NoParent` if this path has no
    /// parent to strip.
    ///
    /// # Examples
    ///
    /// ```
    /// use amipath::AmiPath;
    ///
    /// let base = AmiPath::new("foo:bar/boo");
    /// assert_eq!(base.join(&"/baz".into()).unwrap(), AmiPath::new("foo:bar/baz"));
    /// assert_eq!(base.join(&":baz".into()).unwrap(), AmiPath::new("foo:baz"));
    /// assert_eq!(base.join(&"baz".into()).unwrap(), AmiPath::new("foo:bar/boo/baz"));
    /// assert_eq!(base.join(&"sys:c".into()).unwrap(), AmiPath::new("sys:c"));
    /// ```
    pub fn join(&self, other: &Self) -> Result<Self, PathError> {
        let prefix = self.prefix();
        let postfix = match other.kind() {
            PathKind::Absolute => return Ok(other.or_refs_of(self)),
            PathKind::ParentLocal => {
                if self.is_parent_local() {
                    return Err(self.error(PathErrorReason::DoubleParentLocal));
                }
                let parent = self
                    .parent()
                    .ok_or_else(|| self.error(PathErrorReason::NoParent))?;
                match parent.postfix(false) {
                    "" => other.postfix(true).to_string(),
                    ":" => format!(":{}", other.postfix(true)),
                    my_post => format!("{my_post}{}", other.postfix(false)),
                }
            }
            PathKind::PrefixLocal => other.postfix(prefix.is_some()).to_string(),
            PathKind::PlainLocal => return Ok(self.append(other.postfix(false))),
        };
        Ok(self.derive_build(prefix, &postfix))
    }

    /// Appends a plain-local postfix. This is the infallible branch of
    /// [`AmiPath::join`].
    pub(crate) fn append(&self, other_postfix: &str) -> Self {
        let postfix = match self.postfix(false) {
            "" => other_postfix.to_string(),
            my_post @ ("/" | ":") => format!("{my_post}{other_postfix}"),
            my_post => format!("{my_post}/{other_postfix}"),
        };
        self.derive_build(self.prefix(), &postfix)
    }
}
