//! Reference resolution.
//!
//! Turns references into existing filesystem paths by searching an alias's
//! candidate directories in order.

use std::path::Path;

use crate::path::normalize::{clean, has_parent_suffix, unify_separators, SEPARATOR};
use crate::path::reference::{parse, Reference, DEFAULT_ALIAS};
use crate::registry::Locator;

impl Locator {
    /// Find the first existing path for `source`.
    ///
    /// `source` is split into alias and subpath (the default alias when
    /// there is no `:`). Each candidate directory of the alias is joined with
    /// the subpath and cleaned; the first one the filesystem reports as
    /// existing is returned. Unknown aliases and misses yield `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathalias::{InsertMode, Locator};
    ///
    /// let dir = tempfile::tempdir().unwrap();
    /// std::fs::write(dir.path().join("app.css"), "").unwrap();
    /// let base = dir.path().to_str().unwrap();
    ///
    /// let mut locator = Locator::new("default").unwrap();
    /// locator.add([base], "default", InsertMode::Prepend).unwrap();
    ///
    /// assert!(locator.get("default:app.css").unwrap().ends_with("/app.css"));
    /// assert_eq!(locator.get("default:missing.css"), None);
    /// assert_eq!(locator.get("unknown:app.css"), None);
    /// ```
    #[must_use]
    pub fn get(&self, source: &str) -> Option<String> {
        let (alias, subpath) = parse(source, DEFAULT_ALIAS);
        self.lookup(alias, subpath)
    }

    /// Classify `source` against this registry's aliases.
    #[must_use]
    pub fn reference(&self, source: &str) -> Reference {
        Reference::classify(source, |alias| self.has_alias(alias))
    }

    /// Check whether `path` is an alias-qualified reference for this registry.
    ///
    /// See [`reference::is_virtual`](crate::path::reference::is_virtual).
    #[must_use]
    pub fn is_virtual(&self, path: &str) -> bool {
        self.reference(path).is_virtual()
    }

    /// Resolve a virtual or literal path to an absolute path string.
    ///
    /// - Virtual references are looked up like [`get`](Self::get).
    /// - Literal paths ending in `..` must be canonicalized by the
    ///   filesystem; `None` if that fails.
    /// - Other literal paths are cleaned and returned without any existence
    ///   check.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<String> {
        self.resolve_reference(&self.reference(path))
    }

    pub(crate) fn resolve_reference(&self, reference: &Reference) -> Option<String> {
        match reference {
            Reference::Virtual { alias, subpath } => self.lookup(alias, subpath),
            Reference::Literal { path } if has_parent_suffix(path) => {
                let unified = unify_separators(path, SEPARATOR);
                let canonical = self.probe().canonicalize(Path::new(&unified))?;
                Some(clean(&canonical.to_string_lossy(), SEPARATOR))
            }
            Reference::Literal { path } => Some(clean(path, SEPARATOR)),
        }
    }

    fn lookup(&self, alias: &str, subpath: &str) -> Option<String> {
        let table = self.table(alias)?;
        let found = table
            .iter()
            .map(|candidate| clean(&format!("{candidate}/{subpath}"), SEPARATOR))
            .find(|candidate| self.probe().exists(Path::new(candidate)));

        if found.is_none() {
            log::debug!("[{}] no candidate of '{alias}' holds '{subpath}'", self.key());
        }
        found
    }
}
