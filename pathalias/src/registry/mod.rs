//! Alias registry.
//!
//! A [`Locator`] is one named registry: a set of aliases, each mapping to an
//! ordered list of candidate directories, plus an optional root directory
//! used for URN computation. [`Instances`] hands out one `Locator` per key.
//!
//! # Examples
//!
//! ```
//! use pathalias::{InsertMode, Locator};
//!
//! let mut locator = Locator::new("default").unwrap();
//! locator
//!     .add(["/srv/www", "/srv/shared"], "assets", InsertMode::Append)
//!     .unwrap();
//!
//! assert_eq!(locator.get_paths("assets:"), vec!["/srv/www", "/srv/shared"]);
//! assert!(locator.get_paths("unknown:").is_empty());
//! ```

mod table;

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::path::normalize::{clean, unify_separators, SEPARATOR};
use crate::path::reference::{parse, DEFAULT_ALIAS};
use crate::path::{FilesystemProbe, OsProbe};

pub use table::{AliasTable, InsertMode};

/// Minimum length of an alias name, in bytes.
pub const MIN_ALIAS_LENGTH: usize = 3;

/// Key of the instance used when none is named.
pub const DEFAULT_INSTANCE: &str = "default";

/// A named alias registry.
pub struct Locator {
    key: String,
    aliases: BTreeMap<String, AliasTable>,
    root: Option<String>,
    probe: Arc<dyn FilesystemProbe>,
}

impl Locator {
    /// Create an empty registry that checks the real filesystem.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInstanceKey` if `key` is empty.
    pub fn new(key: &str) -> Result<Self> {
        Self::with_probe(key, Arc::new(OsProbe))
    }

    /// Create an empty registry using `probe` for filesystem checks.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInstanceKey` if `key` is empty.
    pub fn with_probe(key: &str, probe: Arc<dyn FilesystemProbe>) -> Result<Self> {
        if key.is_empty() {
            return Err(Error::InvalidInstanceKey);
        }
        Ok(Self {
            key: key.to_string(),
            aliases: BTreeMap::new(),
            root: None,
            probe,
        })
    }

    /// The key this registry was created under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Register directories for `alias`.
    ///
    /// With [`InsertMode::Reset`] the alias's list becomes exactly `paths`,
    /// cleaned. Otherwise each path is resolved in turn (virtual references
    /// through the registry, paths ending in `..` through the filesystem,
    /// anything else by cleaning) and inserted unless it is already listed or
    /// does not resolve.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAlias` if `alias` is shorter than
    /// [`MIN_ALIAS_LENGTH`] bytes.
    pub fn add<I>(&mut self, paths: I, alias: &str, mode: InsertMode) -> Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        validate_alias(alias)?;

        if mode == InsertMode::Reset {
            let cleaned: Vec<String> = paths
                .into_iter()
                .map(|path| clean(path.as_ref(), SEPARATOR))
                .collect();
            log::debug!("[{}] reset '{alias}' to {cleaned:?}", self.key);
            self.aliases.entry(alias.to_string()).or_default().reset(cleaned);
            return Ok(());
        }

        for path in paths {
            let path = path.as_ref();
            self.aliases.entry(alias.to_string()).or_default();

            let unified = unify_separators(path, SEPARATOR);
            if self.is_listed(alias, &unified) {
                log::debug!("[{}] '{alias}' already lists {unified}", self.key);
                continue;
            }

            let Some(resolved) = self.resolve(path) else {
                log::debug!("[{}] skipping unresolvable path {path} for '{alias}'", self.key);
                continue;
            };
            if self.is_listed(alias, &resolved) {
                continue;
            }

            let table = self.aliases.entry(alias.to_string()).or_default();
            match mode {
                InsertMode::Append => table.append(resolved),
                _ => table.prepend(resolved),
            }
        }

        Ok(())
    }

    /// The directories registered for the alias named in `source`.
    ///
    /// `source` is parsed like any reference, so `"assets:"`,
    /// `"assets:file.txt"` and the bare `"file.txt"` (default alias) all
    /// work. Unknown aliases yield an empty list.
    #[must_use]
    pub fn get_paths(&self, source: &str) -> Vec<String> {
        self.table_for(source)
            .map(|table| table.iter().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Like [`get_paths`](Self::get_paths), paired with each entry's slot
    /// index for use with [`remove`](Self::remove).
    #[must_use]
    pub fn entries(&self, source: &str) -> Vec<(usize, String)> {
        self.table_for(source)
            .map(|table| {
                table
                    .entries()
                    .map(|(index, path)| (index, path.to_string()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Remove entries by slot index from the alias named in `source`.
    ///
    /// Returns `false` if the alias is unknown or has no entries. Otherwise
    /// every listed index that holds an entry is emptied and `true` is
    /// returned, whether or not any index matched. The indices of the
    /// remaining entries do not change.
    pub fn remove<I>(&mut self, source: &str, indices: I) -> bool
    where
        I: IntoIterator<Item = usize>,
    {
        let (alias, _) = parse(source, DEFAULT_ALIAS);
        let Some(table) = self.aliases.get_mut(alias) else {
            return false;
        };
        if table.is_empty() {
            return false;
        }

        for index in indices {
            if table.remove(index) {
                log::debug!("[{}] removed slot {index} from '{alias}'", self.key);
            }
        }
        true
    }

    /// Set the root directory used for URNs.
    ///
    /// Only the first successful call has an effect; later calls are
    /// silently ignored.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryNotFound` if `dir` is not an existing directory.
    pub fn set_root(&mut self, dir: &str) -> Result<()> {
        if !self.probe.is_dir(Path::new(dir)) {
            return Err(Error::DirectoryNotFound {
                path: PathBuf::from(dir),
            });
        }

        if self.root.is_none() {
            self.root = Some(clean(dir, SEPARATOR));
        } else {
            log::debug!("[{}] root already set, ignoring {dir}", self.key);
        }
        Ok(())
    }

    /// The root directory.
    ///
    /// # Errors
    ///
    /// Returns `RootNotSet` if [`set_root`](Self::set_root) has not succeeded yet.
    pub fn root(&self) -> Result<&str> {
        self.root.as_deref().ok_or(Error::RootNotSet)
    }

    /// Names of all aliases that have been registered, sorted.
    #[must_use]
    pub fn aliases(&self) -> Vec<&str> {
        self.aliases.keys().map(String::as_str).collect()
    }

    /// Check whether `alias` has been registered (even if its list is empty).
    #[must_use]
    pub fn has_alias(&self, alias: &str) -> bool {
        self.aliases.contains_key(alias)
    }

    pub(crate) fn table(&self, alias: &str) -> Option<&AliasTable> {
        self.aliases.get(alias)
    }

    pub(crate) fn probe(&self) -> &dyn FilesystemProbe {
        self.probe.as_ref()
    }

    fn table_for(&self, source: &str) -> Option<&AliasTable> {
        let (alias, _) = parse(source, DEFAULT_ALIAS);
        self.table(alias)
    }

    fn is_listed(&self, alias: &str, path: &str) -> bool {
        self.table(alias).is_some_and(|table| table.contains(path))
    }
}

impl fmt::Debug for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Locator")
            .field("key", &self.key)
            .field("aliases", &self.aliases)
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

/// Registries keyed by name.
///
/// Asking for the same key twice yields the same [`Locator`]. All locators
/// created by one table share its filesystem probe.
///
/// # Examples
///
/// ```
/// use pathalias::{InsertMode, Instances};
///
/// let mut instances = Instances::new();
/// instances
///     .get_or_create("import")
///     .unwrap()
///     .add(["/srv/import"], "default", InsertMode::Prepend)
///     .unwrap();
///
/// let again = instances.get_or_create("import").unwrap();
/// assert_eq!(again.get_paths("default:"), vec!["/srv/import"]);
/// assert!(instances.get_or_create("").is_err());
/// ```
pub struct Instances {
    instances: IndexMap<String, Locator>,
    probe: Arc<dyn FilesystemProbe>,
}

impl Instances {
    /// Create an empty table whose locators check the real filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::with_probe(Arc::new(OsProbe))
    }

    /// Create an empty table whose locators use `probe`.
    #[must_use]
    pub fn with_probe(probe: Arc<dyn FilesystemProbe>) -> Self {
        Self {
            instances: IndexMap::new(),
            probe,
        }
    }

    /// The locator for `key`, created empty on first request.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInstanceKey` if `key` is empty.
    pub fn get_or_create(&mut self, key: &str) -> Result<&mut Locator> {
        match self.instances.entry(key.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let locator = Locator::with_probe(key, Arc::clone(&self.probe))?;
                log::debug!("created instance '{key}'");
                Ok(entry.insert(locator))
            }
        }
    }

    /// The locator for `key`, if it has been created.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Locator> {
        self.instances.get(key)
    }

    /// Keys of all created locators, in creation order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.instances.keys().map(String::as_str)
    }
}

impl Default for Instances {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Instances {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.instances.iter()).finish()
    }
}

fn validate_alias(alias: &str) -> Result<()> {
    if alias.len() < MIN_ALIAS_LENGTH {
        return Err(Error::InvalidAlias {
            alias: alias.to_string(),
            reason: format!("the minimum length is {MIN_ALIAS_LENGTH} bytes"),
        });
    }
    Ok(())
}
