//! Collaborator interfaces consumed by the path engine.

use std::sync::Arc;

use crate::path::AmiPath;

/// Knows which prefix names exist and how assigns expand.
///
/// Implementations must answer consistently for the duration of a single
/// path operation. [`NameTable`](crate::names::NameTable) is the
/// configuration-backed implementation shipped with this crate.
#[cfg_attr(test, mockall::automock)]
pub trait NameResolver: Send + Sync {
    /// Whether `name` is a known volume or assign.
    fn is_prefix_name(&self, name: &str) -> bool;

    /// Whether `name` is a known volume.
    fn is_volume_name(&self, name: &str) -> bool;

    /// Whether `name` is a known assign.
    fn is_assign_name(&self, name: &str) -> bool;

    /// Whether the assign `name` expands to more than one path.
    ///
    /// Returns `None` if `name` is not an assign.
    fn contains_multi_assigns(&self, name: &str) -> Option<bool>;

    /// Expands the assign `name` into `prefix:postfix` strings.
    ///
    /// With `recursive` set, targets that are themselves assigns are
    /// expanded until only volume paths remain. Otherwise exactly one level
    /// is expanded.
    fn resolve_assign(&self, name: &str, recursive: bool) -> Vec<String>;
}

/// Supplies the current directory and command search path.
pub trait PathContext: Send + Sync {
    /// The current directory. Must be absolute.
    fn current_dir(&self) -> AmiPath;

    /// The ordered command search path.
    fn cmd_paths(&self) -> Vec<AmiPath>;

    /// The resolver for prefix names.
    fn resolver(&self) -> Arc<dyn NameResolver>;
}
