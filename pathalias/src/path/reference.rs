//! Symbolic path references.
//!
//! A reference is either *virtual* (`alias:subpath`, looked up through the
//! alias registry) or *literal* (a plain filesystem path). The distinction is
//! made once, when the string enters the library, and carried as a
//! [`Reference`] value from then on.

use std::fmt;

use crate::path::normalize::{prefix, trim_leading_separators};

/// Name of the alias used when a reference carries no alias.
pub const DEFAULT_ALIAS: &str = "default";

/// A parsed path reference.
///
/// # Examples
///
/// ```
/// use pathalias::path::Reference;
///
/// let reference = Reference::classify("assets:css/app.css", |_| false);
/// assert_eq!(
///     reference,
///     Reference::Virtual {
///         alias: "assets".to_string(),
///         subpath: "css/app.css".to_string(),
///     }
/// );
///
/// let literal = Reference::classify("/srv/www/app.css", |_| false);
/// assert!(!literal.is_virtual());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Reference {
    /// An alias-qualified reference.
    Virtual {
        /// The alias name.
        alias: String,
        /// The path below the alias's directories, without leading separators.
        subpath: String,
    },
    /// A plain filesystem path, kept as given.
    Literal {
        /// The path string.
        path: String,
    },
}

impl Reference {
    /// Classify `source` as virtual or literal.
    ///
    /// `is_registered` answers whether an alias name is known to the current
    /// registry; see [`is_virtual`] for how it is used.
    pub fn classify<F>(source: &str, is_registered: F) -> Self
    where
        F: Fn(&str) -> bool,
    {
        if is_virtual(source, is_registered) {
            let (alias, subpath) = parse(source, DEFAULT_ALIAS);
            Self::Virtual {
                alias: alias.to_string(),
                subpath: subpath.to_string(),
            }
        } else {
            Self::Literal {
                path: source.to_string(),
            }
        }
    }

    /// Check whether this is an alias-qualified reference.
    #[must_use]
    pub fn is_virtual(&self) -> bool {
        matches!(self, Self::Virtual { .. })
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Virtual { alias, subpath } => write!(f, "{alias}:{subpath}"),
            Self::Literal { path } => write!(f, "{path}"),
        }
    }
}

/// Check whether `path` is an alias-qualified reference.
///
/// A path is virtual when it has a `:` with a non-empty alias before it. A
/// single letter before the colon is a drive letter, never an alias. When the
/// path also looks absolute (see [`prefix`]), as `alias:/file` does, it only
/// counts as virtual if `is_registered` knows the alias.
///
/// # Examples
///
/// ```
/// use pathalias::path::reference::is_virtual;
///
/// assert!(is_virtual("alias:", |_| false));
/// assert!(is_virtual("alias:folder/styles.css", |_| false));
/// assert!(!is_virtual("alias:/styles.css", |_| false));
/// assert!(is_virtual("alias:/styles.css", |alias| alias == "alias"));
/// assert!(!is_virtual("C:/server/file.txt", |_| true));
/// assert!(!is_virtual("/folder/file.txt", |_| false));
/// ```
pub fn is_virtual<F>(path: &str, is_registered: F) -> bool
where
    F: Fn(&str) -> bool,
{
    let Some((alias, _)) = path.split_once(':') else {
        return false;
    };

    if alias.is_empty() || is_drive_letter(alias) {
        return false;
    }

    if prefix(path).is_some() && !is_registered(alias) {
        return false;
    }

    true
}

/// Split a source string into alias and subpath.
///
/// Without a `:` the whole string is the subpath of `default_alias`.
/// Leading separators are stripped from the subpath.
///
/// # Examples
///
/// ```
/// use pathalias::path::reference::parse;
///
/// assert_eq!(parse("assets:/css/app.css", "default"), ("assets", "css/app.css"));
/// assert_eq!(parse(r"\app.css", "default"), ("default", "app.css"));
/// assert_eq!(parse("assets:", "default"), ("assets", ""));
/// ```
#[must_use]
pub fn parse<'a>(source: &'a str, default_alias: &'a str) -> (&'a str, &'a str) {
    match source.split_once(':') {
        Some((alias, rest)) => (alias, trim_leading_separators(rest)),
        None => (default_alias, trim_leading_separators(source)),
    }
}

fn is_drive_letter(alias: &str) -> bool {
    alias.len() == 1 && alias.as_bytes()[0].is_ascii_alphabetic()
}
