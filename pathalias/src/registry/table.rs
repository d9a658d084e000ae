//! Ordered directory list of a single alias.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Where newly added directories go in an alias's list.
///
/// # Examples
///
/// ```
/// use pathalias::InsertMode;
///
/// assert_eq!(InsertMode::default(), InsertMode::Prepend);
/// assert_eq!("append".parse::<InsertMode>().unwrap(), InsertMode::Append);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertMode {
    /// Insert at the front; the newest directory is searched first.
    #[default]
    Prepend,
    /// Insert at the back; the newest directory is searched last.
    Append,
    /// Replace the whole list.
    Reset,
}

impl fmt::Display for InsertMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prepend => write!(f, "prepend"),
            Self::Append => write!(f, "append"),
            Self::Reset => write!(f, "reset"),
        }
    }
}

impl FromStr for InsertMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "prepend" => Ok(Self::Prepend),
            "append" => Ok(Self::Append),
            "reset" => Ok(Self::Reset),
            _ => Err(format!("invalid insert mode: {s}")),
        }
    }
}

/// The candidate directories of one alias, in search order.
///
/// Entries live in numbered slots. Removing an entry empties its slot
/// without renumbering the others, so an index obtained from
/// [`entries`](Self::entries) stays valid across removals:
///
/// - [`append`](Self::append) opens a new slot after the last one ever
///   allocated;
/// - [`prepend`](Self::prepend) first closes the gaps (renumbering the
///   remaining entries from 0), then inserts at slot 0;
/// - [`reset`](Self::reset) renumbers from 0.
///
/// # Examples
///
/// ```
/// use pathalias::AliasTable;
///
/// let mut table = AliasTable::new();
/// table.append("/a".to_string());
/// table.append("/b".to_string());
/// table.append("/c".to_string());
///
/// assert!(table.remove(0));
/// assert_eq!(table.entries().collect::<Vec<_>>(), vec![(1, "/b"), (2, "/c")]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    slots: Vec<Option<String>>,
}

impl AliasTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether `path` is one of the entries (exact string match).
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.iter().any(|entry| entry == path)
    }

    /// Insert `path` ahead of all other entries.
    pub fn prepend(&mut self, path: String) {
        self.slots.retain(Option::is_some);
        self.slots.insert(0, Some(path));
    }

    /// Insert `path` after all other entries.
    pub fn append(&mut self, path: String) {
        self.slots.push(Some(path));
    }

    /// Replace every entry with `paths`, keeping the first of any repeats.
    pub fn reset<I>(&mut self, paths: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.slots.clear();
        for path in paths {
            if !self.contains(&path) {
                self.slots.push(Some(path));
            }
        }
    }

    /// Empty the slot at `index`.
    ///
    /// Returns `true` if the slot held an entry.
    pub fn remove(&mut self, index: usize) -> bool {
        self.slots
            .get_mut(index)
            .is_some_and(|slot| slot.take().is_some())
    }

    /// The entry in slot `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).and_then(Option::as_deref)
    }

    /// Iterate over entries in search order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().filter_map(Option::as_deref)
    }

    /// Iterate over `(slot index, entry)` pairs in search order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &str)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_deref().map(|path| (index, path)))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Check whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_of(paths: &[&str]) -> AliasTable {
        let mut table = AliasTable::new();
        for path in paths {
            table.append((*path).to_string());
        }
        table
    }

    #[test]
    fn test_prepend_order() {
        let mut table = AliasTable::new();
        for path in ["/a", "/b", "/c"] {
            table.prepend(path.to_string());
        }
        assert_eq!(table.iter().collect::<Vec<_>>(), vec!["/c", "/b", "/a"]);
    }

    #[test]
    fn test_append_order() {
        let table = table_of(&["/a", "/b", "/c"]);
        assert_eq!(table.iter().collect::<Vec<_>>(), vec!["/a", "/b", "/c"]);
    }

    #[test]
    fn test_remove_keeps_indices() {
        let mut table = table_of(&["/0", "/1", "/2", "/3", "/4", "/5", "/6"]);

        assert!(table.remove(1));
        assert!(table.remove(3));
        assert!(table.remove(5));
        assert_eq!(
            table.entries().collect::<Vec<_>>(),
            vec![(0, "/0"), (2, "/2"), (4, "/4"), (6, "/6")]
        );

        assert!(table.remove(0));
        assert_eq!(table.get(2), Some("/2"));
        assert_eq!(table.get(0), None);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_remove_missing_slot() {
        let mut table = table_of(&["/a"]);
        assert!(!table.remove(7));
        assert!(table.remove(0));
        assert!(!table.remove(0));
        assert!(table.is_empty());
    }

    #[test]
    fn test_append_after_removal_opens_new_slot() {
        let mut table = table_of(&["/a", "/b", "/c"]);
        table.remove(2);
        table.append("/d".to_string());
        assert_eq!(
            table.entries().collect::<Vec<_>>(),
            vec![(0, "/a"), (1, "/b"), (3, "/d")]
        );
    }

    #[test]
    fn test_prepend_after_removal_renumbers() {
        let mut table = table_of(&["/a", "/b", "/c"]);
        table.remove(0);
        table.prepend("/z".to_string());
        assert_eq!(
            table.entries().collect::<Vec<_>>(),
            vec![(0, "/z"), (1, "/b"), (2, "/c")]
        );
    }

    #[test]
    fn test_reset_replaces_and_dedupes() {
        let mut table = table_of(&["/a", "/b"]);
        table.remove(0);
        table.reset(vec!["/x".to_string(), "/y".to_string(), "/x".to_string()]);
        assert_eq!(
            table.entries().collect::<Vec<_>>(),
            vec![(0, "/x"), (1, "/y")]
        );
    }

    #[test]
    fn test_contains() {
        let table = table_of(&["/srv/www"]);
        assert!(table.contains("/srv/www"));
        assert!(!table.contains("/srv/www/"));
    }

    #[test]
    fn test_insert_mode_parse_and_display() {
        for mode in [InsertMode::Prepend, InsertMode::Append, InsertMode::Reset] {
            assert_eq!(mode.to_string().parse::<InsertMode>().unwrap(), mode);
        }
        assert_eq!("RESET".parse::<InsertMode>().unwrap(), InsertMode::Reset);
        assert!("sideways".parse::<InsertMode>().is_err());
    }
}
