//! Configuration merging and precedence handling.
//!
//! This module implements hierarchical merging of configuration sources,
//! with special handling for alias entries defined in more than one source.

use crate::config::loader::ConfigSource;
use crate::config::schema::{AliasEntry, AliasSpec, Config};
use crate::registry::InsertMode;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use pathalias::config::{Config, ConfigMerger};
///
/// let low = Config { root: Some("/srv/low".to_string()), ..Default::default() };
/// let high = Config { root: Some("/srv/high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.root.as_deref(), Some("/srv/high"));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            log::debug!(
                "merging {} (precedence {})",
                source.path.display(),
                source.precedence
            );
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - `root`, `base_url`: source overwrites if Some
    /// - Aliases only in one config: kept
    /// - Same alias, same non-reset mode: path lists concatenated, target first
    /// - Same alias otherwise: source entry replaces target entry
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.root.is_some() {
            target.root.clone_from(&source.root);
        }

        if source.base_url.is_some() {
            target.base_url.clone_from(&source.base_url);
        }

        for (alias, entry) in &source.aliases {
            match target.aliases.get_mut(alias) {
                Some(existing) => *existing = Self::merge_alias(existing, entry),
                None => {
                    target.aliases.insert(alias.clone(), entry.clone());
                }
            }
        }
    }

    /// Combine two entries for the same alias.
    ///
    /// Concatenating lists with a shared prepend or append mode registers the
    /// same directories in the same order as applying both entries in turn.
    fn merge_alias(target: &AliasEntry, source: &AliasEntry) -> AliasEntry {
        let mode = source.mode();
        if mode == InsertMode::Reset || mode != target.mode() {
            return source.clone();
        }

        let mut paths = target.paths().to_vec();
        paths.extend(source.paths().iter().cloned());
        match source {
            AliasEntry::Paths(_) => AliasEntry::Paths(paths),
            AliasEntry::Detailed(_) => AliasEntry::Detailed(AliasSpec { paths, mode }),
        }
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn entry_strategy() -> impl Strategy<Value = AliasEntry> {
        (
            prop::collection::vec("/[a-z]{1,8}", 0..4),
            prop_oneof![
                Just(None),
                Just(Some(InsertMode::Prepend)),
                Just(Some(InsertMode::Append)),
                Just(Some(InsertMode::Reset)),
            ],
        )
            .prop_map(|(paths, mode)| match mode {
                None => AliasEntry::Paths(paths),
                Some(mode) => AliasEntry::Detailed(AliasSpec { paths, mode }),
            })
    }

    fn config_strategy() -> impl Strategy<Value = Config> {
        (
            proptest::option::of("/[a-z]{1,10}"),
            proptest::option::of("https://[a-z]{1,10}"),
            prop::collection::vec(("[a-z]{3,6}", entry_strategy()), 0..4),
        )
            .prop_map(|(root, base_url, aliases)| Config {
                root,
                base_url,
                aliases: aliases.into_iter().collect(),
            })
    }

    proptest! {
        #[test]
        fn prop_merge_empty_is_right_identity(config in config_strategy()) {
            let mut merged = config.clone();
            ConfigMerger::merge_into(&mut merged, &Config::default());
            prop_assert_eq!(merged, config);
        }

        #[test]
        fn prop_merge_into_empty_copies_source(config in config_strategy()) {
            let mut merged = Config::default();
            ConfigMerger::merge_into(&mut merged, &config);
            prop_assert_eq!(merged, config);
        }

        #[test]
        fn prop_merge_keeps_every_alias(a in config_strategy(), b in config_strategy()) {
            let mut merged = a.clone();
            ConfigMerger::merge_into(&mut merged, &b);
            for alias in a.aliases.keys().chain(b.aliases.keys()) {
                prop_assert!(merged.aliases.contains_key(alias));
            }
            // The source's mode always survives a merge.
            for (alias, entry) in &b.aliases {
                prop_assert_eq!(merged.aliases[alias].mode(), entry.mode());
            }
        }
    }
}
