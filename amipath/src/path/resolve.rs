//! Resolving paths against a context and a name resolver.
//!
//! None of these operations cache anything: every call queries the
//! collaborators afresh.

use crate::error::{PathError, PathErrorReason};
use crate::path::env::NameResolver;
use crate::path::AmiPath;

impl AmiPath {
    /// Makes a local path absolute by joining it onto the current directory.
    ///
    /// Absolute paths are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns `NoContext` for a local path without a context, or any error
    /// of the underlying [`AmiPath::join`].
    pub fn abspath(&self) -> Result<Self, PathError> {
        if self.is_absolute() {
            return Ok(self.clone());
        }
        let context = self.require_context()?;
        let joined = context.current_dir().join(self)?;
        Ok(self.derive(joined.into_string()))
    }

    /// Resolves this path to exactly one volume path.
    ///
    /// # Errors
    ///
    /// Returns `MultiAssign` if the prefix is an assign with several
    /// targets, `UnknownPrefix` if the prefix is neither a volume nor an
    /// assign, and the errors of [`AmiPath::abspath`] for local paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use amipath::names::NameTable;
    /// use amipath::AmiPath;
    /// use std::sync::Arc;
    ///
    /// let table = NameTable::builder()
    ///     .volume("root", "/amiga/root")
    ///     .assign("b", ["root:bla"])
    ///     .build()
    ///     .unwrap();
    /// let path = AmiPath::new("b:foo").with_resolver(Arc::new(table));
    /// assert_eq!(path.volpath().unwrap(), AmiPath::new("root:bla/foo"));
    /// ```
    pub fn volpath(&self) -> Result<Self, PathError> {
        if self.is_local() {
            return self.abspath();
        }
        let resolver = self.resolver()?;
        let roots = match self.assign_roots(resolver.as_ref(), true)? {
            Some(roots) => roots,
            None => return Ok(self.clone()),
        };
        match roots.as_slice() {
            [root] => Ok(self.rebase(root)),
            _ => Err(self.error(PathErrorReason::MultiAssign)),
        }
    }

    /// Resolves this path to every volume path it may refer to.
    ///
    /// # Errors
    ///
    /// Same as [`AmiPath::volpath`], except that multi-assigns are expanded
    /// instead of rejected.
    pub fn volpaths(&self) -> Result<Vec<Self>, PathError> {
        if self.is_local() {
            return Ok(vec![self.abspath()?]);
        }
        let resolver = self.resolver()?;
        let Some(roots) = self.assign_roots(resolver.as_ref(), true)? else {
            return Ok(vec![self.clone()]);
        };
        if roots.len() > 1 {
            log::debug!("{self} expands to {} volume paths", roots.len());
        }
        Ok(roots.iter().map(|root| self.rebase(root)).collect())
    }

    /// Replaces the assign prefix by its targets.
    ///
    /// Paths that are not absolute assign paths are returned as the only
    /// element. With `recursive`, nested assigns are expanded down to
    /// volumes; otherwise only one level is.
    ///
    /// # Errors
    ///
    /// Returns `NoResolver` for an absolute path without a resolver.
    pub fn map_assign(&self, recursive: bool) -> Result<Vec<Self>, PathError> {
        if !self.is_absolute() || !self.is_assign_path()? {
            return Ok(vec![self.clone()]);
        }
        let resolver = self.resolver()?;
        let prefix = self.prefix().unwrap_or_default();
        Ok(resolver
            .resolve_assign(prefix, recursive)
            .iter()
            .map(|root| self.rebase(root))
            .collect())
    }

    /// Candidate locations of the command named by this path.
    ///
    /// A bare name is looked up along the context's command path (and,
    /// with `with_cur_dir`, in the current directory last). Any other path
    /// ending in a name stands for itself. With `make_volpaths`, search
    /// path entries and the path itself are resolved to volume paths.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCmdPath` if the path ends in `/` or `:` (or is
    /// empty), `NoContext` if a bare name has no context, and any error of
    /// [`AmiPath::volpaths`] or [`AmiPath::join`].
    pub fn cmdpaths(
        &self,
        with_cur_dir: bool,
        make_volpaths: bool,
    ) -> Result<Vec<Self>, PathError> {
        if self.is_name_only() {
            let context = self.require_context()?;
            let mut bases = Vec::new();
            for cmd_path in context.cmd_paths() {
                let cmd_path = self.derive(cmd_path.into_string());
                if make_volpaths {
                    bases.extend(cmd_path.volpaths()?);
                } else {
                    bases.push(cmd_path);
                }
            }
            let mut result = bases
                .iter()
                .map(|base| base.join(self))
                .collect::<Result<Vec<_>, _>>()?;
            if with_cur_dir {
                let joined = context.current_dir().join(self)?;
                result.push(self.derive(joined.into_string()));
            }
            log::trace!("command {self} has {} candidate paths", result.len());
            Ok(result)
        } else if self.ends_with_name() {
            if make_volpaths {
                self.volpaths()
            } else {
                Ok(vec![self.clone()])
            }
        } else {
            Err(self.error(PathErrorReason::InvalidCmdPath))
        }
    }

    /// The recursive targets of this path's assign prefix, or `None` if the
    /// prefix is a volume.
    fn assign_roots(
        &self,
        resolver: &dyn NameResolver,
        recursive: bool,
    ) -> Result<Option<Vec<String>>, PathError> {
        let prefix = self.prefix().unwrap_or_default();
        if resolver.is_volume_name(prefix) {
            return Ok(None);
        }
        if !resolver.is_assign_name(prefix) {
            return Err(self.error(PathErrorReason::UnknownPrefix));
        }
        let roots = resolver.resolve_assign(prefix, recursive);
        if roots.is_empty() {
            return Err(self.error(PathErrorReason::UnknownPrefix));
        }
        log::trace!("assign {prefix}: resolved to {roots:?}");
        Ok(Some(roots))
    }

    /// `root` with this path's postfix appended.
    fn rebase(&self, root: &str) -> Self {
        self.derive(root).append(self.postfix(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::env::{MockNameResolver, PathContext};
    use std::sync::Arc;

    struct TestResolver;

    impl NameResolver for TestResolver {
        fn is_prefix_name(&self, name: &str) -> bool {
            self.is_assign_name(name) || self.is_volume_name(name)
        }

        fn is_volume_name(&self, name: &str) -> bool {
            matches!(name, "root" | "work" | "system")
        }

        fn is_assign_name(&self, name: &str) -> bool {
            matches!(name, "a" | "b" | "c")
        }

        fn contains_multi_assigns(&self, name: &str) -> Option<bool> {
            match name {
                "a" => Some(true),
                "b" | "c" => Some(false),
                _ => None,
            }
        }

        fn resolve_assign(&self, name: &str, recursive: bool) -> Vec<String> {
            let targets: &[&str] = match (name, recursive) {
                ("a", true) => &["root:bla", "system:c/foo"],
                ("a", false) => &["b:", "c:foo"],
                ("b", _) => &["root:bla"],
                ("c", _) => &["system:c"],
                _ => &[],
            };
            targets.iter().map(ToString::to_string).collect()
        }
    }

    struct TestContext {
        cmd_paths: Vec<&'static str>,
    }

    impl PathContext for TestContext {
        fn current_dir(&self) -> AmiPath {
            AmiPath::new("foo:bar")
        }

        fn cmd_paths(&self) -> Vec<AmiPath> {
            self.cmd_paths.iter().map(|p| AmiPath::new(*p)).collect()
        }

        fn resolver(&self) -> Arc<dyn NameResolver> {
            Arc::new(TestResolver)
        }
    }

    fn env_path(text: &str) -> AmiPath {
        let context = TestContext {
            cmd_paths: vec!["c:", "work:bin"],
        };
        AmiPath::new(text).with_context(Arc::new(context))
    }

    fn mgr_path(text: &str) -> AmiPath {
        AmiPath::new(text).with_resolver(Arc::new(TestResolver))
    }

    fn paths(texts: &[&str]) -> Vec<AmiPath> {
        texts.iter().map(|t| AmiPath::new(*t)).collect()
    }

    #[test]
    fn test_prefix_volume_assign_queries() {
        assert!(mgr_path("a:").is_prefix_valid().unwrap());
        assert!(mgr_path("root:").is_prefix_valid().unwrap());
        assert!(!mgr_path("foo:").is_prefix_valid().unwrap());

        assert!(!mgr_path("a:").is_volume_path().unwrap());
        assert!(mgr_path("root:").is_volume_path().unwrap());
        assert!(!mgr_path("foo:").is_volume_path().unwrap());

        assert!(mgr_path("a:").is_assign_path().unwrap());
        assert!(!mgr_path("root:").is_assign_path().unwrap());
        assert!(!mgr_path("foo:").is_assign_path().unwrap());

        let queries: [fn(&AmiPath) -> Result<bool, PathError>; 3] = [
            AmiPath::is_prefix_valid,
            AmiPath::is_volume_path,
            AmiPath::is_assign_path,
        ];
        for query in queries {
            let err = query(&mgr_path("rel")).unwrap_err();
            assert_eq!(err.reason, PathErrorReason::NoPrefix);
        }
    }

    #[test]
    fn test_is_valid() {
        assert!(mgr_path("a:").is_valid().unwrap());
        assert!(mgr_path("root:").is_valid().unwrap());
        assert!(!mgr_path("foo:").is_valid().unwrap());
        assert!(AmiPath::new("rel").is_valid().unwrap());
    }

    #[test]
    fn test_multi_assigns() {
        assert!(mgr_path("a:").is_multi_assign_path().unwrap());
        assert!(!mgr_path("b:").is_multi_assign_path().unwrap());
        assert_eq!(
            mgr_path("rel").is_multi_assign_path().unwrap_err().reason,
            PathErrorReason::NoPrefix
        );
        assert_eq!(
            mgr_path("root:").is_multi_assign_path().unwrap_err().reason,
            PathErrorReason::NoAssignInPrefix
        );
    }

    #[test]
    fn test_abspath() {
        let abs = AmiPath::new("foo:bar");
        assert_eq!(abs.abspath().unwrap().as_str(), "foo:bar");

        let cur_dir = AmiPath::new("foo:bar");
        assert_eq!(env_path("").abspath().unwrap(), cur_dir);
        assert_eq!(
            env_path("baz").abspath().unwrap(),
            cur_dir.join(&"baz".into()).unwrap()
        );
        assert_eq!(
            env_path("/baz").abspath().unwrap(),
            cur_dir.join(&"/baz".into()).unwrap()
        );
        assert_eq!(
            AmiPath::new("baz").abspath().unwrap_err().reason,
            PathErrorReason::NoContext
        );
    }

    #[test]
    fn test_abspath_keeps_context() {
        let abs = env_path("baz").abspath().unwrap();
        assert!(abs.context().is_some());
        assert!(abs.is_volume_path().is_ok());
    }

    #[test]
    fn test_volpath() {
        assert_eq!(env_path("").volpath().unwrap(), AmiPath::new("foo:bar"));
        assert_eq!(env_path("foo").volpath().unwrap(), AmiPath::new("foo:bar/foo"));
        assert_eq!(env_path("work:bla").volpath().unwrap(), AmiPath::new("work:bla"));
        assert_eq!(
            env_path("a:bla").volpath().unwrap_err().reason,
            PathErrorReason::MultiAssign
        );
        assert_eq!(env_path("b:foo").volpath().unwrap(), AmiPath::new("root:bla/foo"));
        assert_eq!(
            env_path("nope:foo").volpath().unwrap_err().reason,
            PathErrorReason::UnknownPrefix
        );
        assert_eq!(
            AmiPath::new("b:foo").volpath().unwrap_err().reason,
            PathErrorReason::NoResolver
        );
    }

    #[test]
    fn test_volpaths() {
        assert_eq!(env_path("").volpaths().unwrap(), paths(&["foo:bar"]));
        assert_eq!(env_path("foo").volpaths().unwrap(), paths(&["foo:bar/foo"]));
        assert_eq!(env_path("work:bla").volpaths().unwrap(), paths(&["work:bla"]));
        assert_eq!(
            env_path("a:bla").volpaths().unwrap(),
            paths(&["root:bla/bla", "system:c/foo/bla"])
        );
        assert_eq!(env_path("b:foo").volpaths().unwrap(), paths(&["root:bla/foo"]));
    }

    #[test]
    fn test_map_assign() {
        assert_eq!(env_path("").map_assign(false).unwrap(), paths(&[""]));
        assert_eq!(env_path("foo").map_assign(false).unwrap(), paths(&["foo"]));
        assert_eq!(env_path("work:bla").map_assign(false).unwrap(), paths(&["work:bla"]));
        assert_eq!(
            env_path("a:bla").map_assign(false).unwrap(),
            paths(&["b:bla", "c:foo/bla"])
        );
        assert_eq!(
            env_path("a:bla").map_assign(true).unwrap(),
            paths(&["root:bla/bla", "system:c/foo/bla"])
        );
        assert_eq!(env_path("b:foo").map_assign(false).unwrap(), paths(&["root:bla/foo"]));
    }

    #[test]
    fn test_cmdpaths_name_only() {
        assert_eq!(
            env_path("dir").cmdpaths(true, true).unwrap(),
            paths(&["system:c/dir", "work:bin/dir", "foo:bar/dir"])
        );
        assert_eq!(
            env_path("dir").cmdpaths(false, false).unwrap(),
            paths(&["c:dir", "work:bin/dir"])
        );
        assert_eq!(
            AmiPath::new("dir").cmdpaths(true, true).unwrap_err().reason,
            PathErrorReason::NoContext
        );
    }

    #[test]
    fn test_cmdpaths_fans_out_multi_assigns() {
        let context = TestContext {
            cmd_paths: vec!["a:"],
        };
        let path = AmiPath::new("list").with_context(Arc::new(context));
        assert_eq!(
            path.cmdpaths(false, true).unwrap(),
            paths(&["root:bla/list", "system:c/foo/list"])
        );
    }

    #[test]
    fn test_cmdpaths_path_with_name() {
        assert_eq!(
            env_path("b:tools/dir").cmdpaths(true, true).unwrap(),
            paths(&["root:bla/tools/dir"])
        );
        assert_eq!(
            env_path("b:tools/dir").cmdpaths(true, false).unwrap(),
            paths(&["b:tools/dir"])
        );
    }

    #[test]
    fn test_cmdpaths_rejects_directories() {
        for text in ["b:", "tools/", "", ":"] {
            assert_eq!(
                env_path(text).cmdpaths(true, true).unwrap_err().reason,
                PathErrorReason::InvalidCmdPath,
                "{text:?}"
            );
        }
    }

    #[test]
    fn test_volpaths_queries_resolver_once() {
        let mut mock = MockNameResolver::new();
        mock.expect_is_volume_name()
            .withf(|name: &str| name == "x")
            .times(1)
            .return_const(false);
        mock.expect_is_assign_name()
            .withf(|name: &str| name == "x")
            .times(1)
            .return_const(true);
        mock.expect_resolve_assign()
            .withf(|name: &str, recursive: &bool| name == "x" && *recursive)
            .times(1)
            .returning(|_, _| vec!["dh0:".to_string(), "dh1:tools".to_string()]);

        let path = AmiPath::new("x:run").with_resolver(Arc::new(mock));
        assert_eq!(path.volpaths().unwrap(), paths(&["dh0:run", "dh1:tools/run"]));
    }

    #[test]
    fn test_volpath_rejects_empty_expansion() {
        let mut mock = MockNameResolver::new();
        mock.expect_is_volume_name().return_const(false);
        mock.expect_is_assign_name().return_const(true);
        mock.expect_resolve_assign().returning(|_, _| Vec::new());

        let path = AmiPath::new("x:run").with_resolver(Arc::new(mock));
        assert_eq!(
            path.volpath().unwrap_err().reason,
            PathErrorReason::UnknownPrefix
        );
    }
}
