//! Property-based tests for registration and lookup.
//!
//! Note: The normalize module already has property tests for cleaning.
//! This module focuses on how cleaned paths flow through a registry.

use std::sync::Arc;

use proptest::prelude::*;

use super::probe::MockFilesystemProbe;
use crate::registry::{InsertMode, Locator};

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,10}"
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 1..5).prop_map(|parts| format!("/{}", parts.join("/")))
}

/// Rewrite `path` with a random mix of `/`, `\` and doubled separators.
fn separator_variant(path: &str, picks: &[u8]) -> String {
    let mut picks = picks.iter().cycle();
    path.chars()
        .map(|c| {
            if c != '/' {
                return c.to_string();
            }
            match picks.next().copied().unwrap_or(0) % 4 {
                0 => "/".to_string(),
                1 => "\\".to_string(),
                2 => "//".to_string(),
                _ => "\\/".to_string(),
            }
        })
        .collect()
}

/// A locator whose probe reports every cleaned path as existing.
fn permissive() -> Locator {
    let mut probe = MockFilesystemProbe::new();
    probe
        .expect_exists()
        .returning(|path| !path.to_string_lossy().contains(['\\', '.']));
    probe.expect_canonicalize().return_const(None);
    probe.expect_is_dir().return_const(true);
    Locator::with_probe("proptest", Arc::new(probe)).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    // Prepending distinct paths lists them in reverse call order
    #[test]
    fn prepend_reverses_order(paths in prop::collection::btree_set(absolute_path_strategy(), 1..8)) {
        let paths: Vec<String> = paths.into_iter().collect();
        let mut locator = permissive();
        locator.add(&paths, "default", InsertMode::Prepend).unwrap();

        let mut expected = paths.clone();
        expected.reverse();
        prop_assert_eq!(locator.get_paths("default:"), expected);
    }

    // Appending distinct paths keeps call order
    #[test]
    fn append_keeps_order(paths in prop::collection::btree_set(absolute_path_strategy(), 1..8)) {
        let paths: Vec<String> = paths.into_iter().collect();
        let mut locator = permissive();
        locator.add(&paths, "default", InsertMode::Append).unwrap();
        prop_assert_eq!(locator.get_paths("default:"), paths);
    }

    // Separator variants of registered paths never create duplicates
    #[test]
    fn no_duplicates_across_separator_styles(
        paths in prop::collection::vec(absolute_path_strategy(), 1..6),
        picks in prop::collection::vec(any::<u8>(), 1..16),
        append in any::<bool>(),
    ) {
        let mode = if append { InsertMode::Append } else { InsertMode::Prepend };
        let mut locator = permissive();
        locator.add(&paths, "default", mode).unwrap();
        let variants: Vec<String> = paths.iter().map(|p| separator_variant(p, &picks)).collect();
        locator.add(&variants, "default", mode).unwrap();

        let listed = locator.get_paths("default:");
        let mut unique = listed.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(listed.len(), unique.len());
    }

    // Lookups agree regardless of the separators used in the subpath
    #[test]
    fn get_ignores_separator_style(
        base in absolute_path_strategy(),
        subpath in prop::collection::vec(segment_strategy(), 1..4),
        picks in prop::collection::vec(any::<u8>(), 1..16),
    ) {
        let mut locator = permissive();
        locator.add([&base], "assets", InsertMode::Prepend).unwrap();

        let plain = subpath.join("/");
        let expected = locator.get(&format!("assets:{plain}"));
        prop_assert_eq!(expected.clone(), Some(format!("{base}/{plain}")));

        let variant = separator_variant(&format!("/{plain}"), &picks);
        prop_assert_eq!(locator.get(&format!("assets:{variant}")), expected);
    }

    // Removing one slot leaves every other entry at its index
    #[test]
    fn remove_keeps_other_indices(
        paths in prop::collection::btree_set(absolute_path_strategy(), 2..8),
        victim in any::<prop::sample::Index>(),
    ) {
        let paths: Vec<String> = paths.into_iter().collect();
        let mut locator = permissive();
        locator.add(&paths, "default", InsertMode::Append).unwrap();

        let before = locator.entries("default:");
        let removed = victim.index(before.len());
        prop_assert!(locator.remove("default:", [removed]));

        let after = locator.entries("default:");
        let expected: Vec<_> = before.into_iter().filter(|(i, _)| *i != removed).collect();
        prop_assert_eq!(after, expected);
    }
}
