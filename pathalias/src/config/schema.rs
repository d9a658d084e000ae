//! Configuration schema definitions.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::registry::{InsertMode, Locator};

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use pathalias::config::Config;
///
/// let config: Config = serde_yaml::from_str(
///     "root: /srv/www\naliases:\n  assets: [/srv/www/assets]\n",
/// )
/// .unwrap();
/// assert_eq!(config.root.as_deref(), Some("/srv/www"));
/// assert_eq!(config.aliases["assets"].paths(), ["/srv/www/assets"]);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Root directory for URN computation.
    pub root: Option<String>,

    /// Scheme and host prepended to URNs to build URIs.
    pub base_url: Option<String>,

    /// Alias definitions, registered in file order.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub aliases: IndexMap<String, AliasEntry>,
}

/// Directories registered for one alias.
///
/// Written either as a bare list (registered with the default prepend mode)
/// or as a map with `paths` and `mode`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum AliasEntry {
    /// A bare list of directories.
    Paths(Vec<String>),
    /// Directories with an explicit insert mode.
    Detailed(AliasSpec),
}

/// Long form of an [`AliasEntry`].
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AliasSpec {
    /// Directories or references to register.
    pub paths: Vec<String>,
    /// How to insert them.
    #[serde(default)]
    pub mode: InsertMode,
}

impl AliasEntry {
    /// The directories of this entry.
    #[must_use]
    pub fn paths(&self) -> &[String] {
        match self {
            Self::Paths(paths) => paths,
            Self::Detailed(detailed) => &detailed.paths,
        }
    }

    /// The insert mode of this entry.
    #[must_use]
    pub fn mode(&self) -> InsertMode {
        match self {
            Self::Paths(_) => InsertMode::default(),
            Self::Detailed(detailed) => detailed.mode,
        }
    }
}

impl Config {
    /// Register the configured aliases and root on `locator`.
    ///
    /// Aliases go first, in file order, so that later aliases may refer to
    /// earlier ones (`styles: ["assets:css"]`).
    ///
    /// # Errors
    ///
    /// Returns an error if an alias name is too short or the root directory
    /// does not exist.
    pub fn apply(&self, locator: &mut Locator) -> Result<()> {
        for (alias, entry) in &self.aliases {
            locator.add(entry.paths(), alias, entry.mode())?;
        }

        if let Some(root) = &self.root {
            locator.set_root(root)?;
        }

        Ok(())
    }
}
