//! AmigaDOS path algebra.
//!
//! # Key Concepts
//!
//! ## Path shapes
//!
//! A path is `prefix:postfix`, where the prefix names a volume or an
//! assign. Paths without a prefix are local and come in three kinds:
//!
//! - `/name` is relative to the parent of the current directory,
//! - `:name` is relative to the prefix of the current directory,
//! - `name` (or `""`) is relative to the current directory itself.
//!
//! ## Resolution
//!
//! [`AmiPath::abspath`] joins a local path onto the current directory
//! supplied by a [`PathContext`]. [`AmiPath::volpath`] and
//! [`AmiPath::volpaths`] additionally replace assign prefixes by the
//! volume paths a [`NameResolver`] expands them to. A multi-assign yields
//! several candidate paths.
//!
//! # Examples
//!
//! ```
//! use amipath::path::{AmiPath, PathKind};
//!
//! let cur = AmiPath::new("work:src/lib");
//! assert_eq!(cur.join(&"/doc".into()).unwrap(), AmiPath::new("work:src/doc"));
//! assert_eq!(cur.join(&":".into()).unwrap(), AmiPath::new("work:"));
//! assert_eq!(AmiPath::new(":doc").kind(), PathKind::PrefixLocal);
//! ```

mod env;
mod join;
mod kind;
mod resolve;
mod value;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use env::{NameResolver, PathContext};
pub use kind::{is_syntax_valid, PathKind};
pub use value::AmiPath;
