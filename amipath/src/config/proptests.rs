//! Property-based tests for configuration merging.

use super::loader::ConfigSource;
use super::merger::ConfigMerger;
use super::schema::{AssignTargets, Config, PathsConfig};
use proptest::prelude::*;
use std::collections::BTreeMap;
use std::path::PathBuf;

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,6}"
}

fn volumes_strategy() -> impl Strategy<Value = Option<BTreeMap<String, PathBuf>>> {
    prop::option::of(prop::collection::btree_map(
        name_strategy(),
        "/[a-z]{1,10}".prop_map(PathBuf::from),
        0..5,
    ))
}

fn assigns_strategy() -> impl Strategy<Value = Option<BTreeMap<String, AssignTargets>>> {
    prop::option::of(prop::collection::btree_map(
        name_strategy(),
        prop::collection::vec("[a-z]{1,6}:[a-z]{0,6}", 1..3).prop_map(AssignTargets::from),
        0..5,
    ))
}

fn paths_strategy() -> impl Strategy<Value = Option<PathsConfig>> {
    prop::option::of(
        (
            prop::option::of("[a-z]{1,6}:"),
            prop::option::of(prop::collection::vec("[a-z]{1,6}:", 0..3)),
        )
            .prop_map(|(cur_dir, cmd_path)| PathsConfig { cur_dir, cmd_path }),
    )
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (volumes_strategy(), assigns_strategy(), paths_strategy()).prop_map(
        |(volumes, assigns, paths)| Config {
            volumes,
            assigns,
            paths,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Every name of either source survives, and the higher source wins on
    // names both define.
    #[test]
    fn merge_keeps_union_of_names(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        let merged_volumes = merged.volumes.clone().unwrap_or_default();
        for (name, dir) in low.volumes.iter().flatten() {
            let expected = high
                .volumes
                .as_ref()
                .and_then(|v| v.get(name))
                .unwrap_or(dir);
            prop_assert_eq!(&merged_volumes[name], expected);
        }
        for (name, dir) in high.volumes.iter().flatten() {
            prop_assert_eq!(&merged_volumes[name], dir);
        }

        let merged_assigns = merged.assigns.unwrap_or_default();
        for (name, targets) in high.assigns.iter().flatten() {
            prop_assert_eq!(&merged_assigns[name], targets);
        }
    }

    #[test]
    fn merge_with_empty_is_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(&merged, &config);

        let mut from_empty = Config::default();
        ConfigMerger::merge_into(&mut from_empty, &config);
        prop_assert_eq!(from_empty, config);
    }

    #[test]
    fn merge_paths_higher_wins(low in paths_strategy(), high in paths_strategy()) {
        let mut merged = Config { paths: low.clone(), ..Default::default() };
        ConfigMerger::merge_into(&mut merged, &Config { paths: high.clone(), ..Default::default() });

        let low = low.unwrap_or_default();
        let high = high.unwrap_or_default();
        let merged = merged.paths.unwrap_or_default();
        prop_assert_eq!(merged.cur_dir, high.cur_dir.or(low.cur_dir));
        prop_assert_eq!(merged.cmd_path, high.cmd_path.or(low.cmd_path));
    }

    #[test]
    fn merge_is_sequential(a in config_strategy(), b in config_strategy(), c in config_strategy()) {
        let sources = [&a, &b, &c]
            .iter()
            .enumerate()
            .map(|(i, config)| ConfigSource {
                path: PathBuf::from(format!("{i}.yaml")),
                precedence: u8::try_from(i).unwrap_or(u8::MAX),
                config: (*config).clone(),
            })
            .collect();
        let merged = ConfigMerger::merge(sources);

        let mut expected = Config::default();
        for config in [&a, &b, &c] {
            ConfigMerger::merge_into(&mut expected, config);
        }
        prop_assert_eq!(merged, expected);
    }
}
