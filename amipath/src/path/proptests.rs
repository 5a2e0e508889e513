//! Property-based tests for the path algebra.

use super::{is_syntax_valid, AmiPath, PathKind};
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.-]{1,12}"
}

fn postfix_strategy() -> impl Strategy<Value = String> {
    (prop::collection::vec(name_strategy(), 0..5), any::<bool>()).prop_map(|(names, slash)| {
        let mut postfix = names.join("/");
        if slash && !postfix.is_empty() {
            postfix.push('/');
        }
        postfix
    })
}

/// Valid paths of all four kinds.
fn path_strategy() -> impl Strategy<Value = String> {
    (0..4u8, name_strategy(), postfix_strategy()).prop_map(|(kind, prefix, postfix)| match kind {
        0 => format!("{prefix}:{postfix}"),
        1 => format!("/{postfix}"),
        2 => format!(":{postfix}"),
        _ => postfix,
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn generated_paths_are_valid(text in path_strategy()) {
        prop_assert!(is_syntax_valid(&text));
    }

    #[test]
    fn build_round_trips(text in path_strategy()) {
        let path = AmiPath::new(text);
        prop_assert_eq!(AmiPath::build(path.prefix(), path.postfix(false)), path);
    }

    #[test]
    fn trailing_slash_is_insignificant(prefix in name_strategy(), postfix in postfix_strategy()) {
        let trimmed = postfix.trim_end_matches('/').to_string();
        prop_assume!(!trimmed.is_empty());
        let with_slash = AmiPath::new(format!("{prefix}:{trimmed}/"));
        let without = AmiPath::new(format!("{prefix}:{trimmed}"));
        prop_assert_eq!(with_slash, without);
    }

    #[test]
    fn exactly_one_kind(text in path_strategy()) {
        let path = AmiPath::new(text);
        let flags = [
            path.is_absolute(),
            path.is_parent_local(),
            path.is_prefix_local(),
            path.kind() == PathKind::PlainLocal,
        ];
        prop_assert_eq!(flags.iter().filter(|&&f| f).count(), 1);
        prop_assert_eq!(path.is_local(), !path.is_absolute());
    }

    #[test]
    fn join_fails_only_on_parent_local_other(a in path_strategy(), b in path_strategy()) {
        let left = AmiPath::new(a);
        let right = AmiPath::new(b);
        let result = left.join(&right);
        if result.is_err() {
            prop_assert!(right.is_parent_local());
            prop_assert!(left.is_parent_local() || left.parent().is_none());
        }
    }

    #[test]
    fn join_with_absolute_replaces(a in path_strategy(), prefix in name_strategy(), postfix in postfix_strategy()) {
        let other = AmiPath::new(format!("{prefix}:{postfix}"));
        prop_assert_eq!(AmiPath::new(a).join(&other).unwrap(), other);
    }

    #[test]
    fn joined_paths_stay_valid(a in path_strategy(), b in path_strategy()) {
        if let Ok(joined) = AmiPath::new(a).join(&AmiPath::new(b)) {
            prop_assert!(joined.is_syntax_valid(), "{} is invalid", joined);
        }
    }

    #[test]
    fn parent_drops_one_name(text in path_strategy()) {
        let path = AmiPath::new(text);
        if let Some(parent) = path.parent() {
            prop_assert_eq!(parent.prefix(), path.prefix());
            prop_assert_eq!(parent.get_names(false).len() + 1, path.get_names(false).len());
        }
    }
}
