//! Root-relative URNs and absolute URLs.
//!
//! A URN is a resolved path with the registry's root directory stripped
//! (`/srv/www/css/app.css` under root `/srv/www` is `css/app.css`). A URI
//! prefixes the URN with the base URL of the current request.

use std::path::Path;

use crate::error::Result;
use crate::path::BaseUrlProvider;
use crate::registry::Locator;

impl Locator {
    /// Compute the root-relative URN of `path`.
    ///
    /// `path` may be virtual or literal; it is resolved the same way
    /// [`resolve`](Self::resolve) does. The root prefix is matched
    /// case-insensitively. An empty string is returned when the path does not
    /// resolve, or when `require_exists` is set and a literal path does not
    /// exist.
    ///
    /// # Errors
    ///
    /// Returns `RootNotSet` if no root directory has been set.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathalias::Locator;
    ///
    /// let dir = tempfile::tempdir().unwrap();
    /// let root = dir.path().to_str().unwrap();
    ///
    /// let mut locator = Locator::new("default").unwrap();
    /// locator.set_root(root).unwrap();
    ///
    /// let file = format!("{root}/folder\\\\file.txt");
    /// assert_eq!(locator.urn(&file, false).unwrap(), "folder/file.txt");
    /// assert_eq!(locator.urn(&file, true).unwrap(), "");
    /// ```
    pub fn urn(&self, path: &str, require_exists: bool) -> Result<String> {
        let root = self.root()?;
        let reference = self.reference(path);

        let Some(subject) = self.resolve_reference(&reference) else {
            return Ok(String::new());
        };
        if require_exists && !reference.is_virtual() && !self.probe().exists(Path::new(&subject)) {
            return Ok(String::new());
        }

        let relative = strip_root(&subject, root).unwrap_or(&subject);
        Ok(relative.trim_start_matches('/').to_string())
    }
}

/// Builds absolute URLs for references.
///
/// # Examples
///
/// ```
/// use pathalias::path::StaticBaseUrl;
/// use pathalias::{InsertMode, Locator, UriBuilder};
///
/// let dir = tempfile::tempdir().unwrap();
/// std::fs::create_dir(dir.path().join("css")).unwrap();
/// std::fs::write(dir.path().join("css/app.css"), "").unwrap();
/// let root = dir.path().to_str().unwrap();
///
/// let mut locator = Locator::new("default").unwrap();
/// locator.set_root(root).unwrap();
/// locator
///     .add([format!("{root}/css")], "styles", InsertMode::Prepend)
///     .unwrap();
///
/// let base = StaticBaseUrl::new("https://example.test");
/// let uris = UriBuilder::new(&locator, &base);
/// assert_eq!(
///     uris.uri("styles:app.css?v=2").unwrap().as_deref(),
///     Some("https://example.test/css/app.css?v=2")
/// );
/// assert_eq!(uris.uri("styles:missing.css").unwrap(), None);
/// ```
pub struct UriBuilder<'a, B: BaseUrlProvider + ?Sized> {
    locator: &'a Locator,
    base_url: &'a B,
}

impl<'a, B: BaseUrlProvider + ?Sized> UriBuilder<'a, B> {
    /// Create a builder over `locator` using `base_url` for scheme and host.
    pub fn new(locator: &'a Locator, base_url: &'a B) -> Self {
        Self { locator, base_url }
    }

    /// Build the absolute URL of `source`.
    ///
    /// An optional `?query` suffix is carried over unchanged. Returns `None`
    /// when the path does not resolve to an existing file under the root.
    ///
    /// # Errors
    ///
    /// Returns `RootNotSet` if the locator has no root directory.
    pub fn uri(&self, source: &str) -> Result<Option<String>> {
        let (path, query) = match source.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (source, None),
        };

        let root = self.locator.root()?;
        let Some(resolved) = self.locator.resolve(path) else {
            return Ok(None);
        };
        if strip_root(&resolved, root).is_none() {
            log::debug!("{resolved} is outside root {root}");
            return Ok(None);
        }

        let urn = self.locator.urn(&resolved, true)?;
        if urn.is_empty() {
            return Ok(None);
        }

        let base = self.base_url.current();
        let mut uri = format!("{}/{urn}", base.trim_end_matches('/'));
        if let Some(query) = query {
            uri.push('?');
            uri.push_str(query);
        }
        Ok(Some(uri))
    }

    /// The root-relative URN of `path`; see [`Locator::urn`].
    ///
    /// # Errors
    ///
    /// Returns `RootNotSet` if the locator has no root directory.
    pub fn urn(&self, path: &str, require_exists: bool) -> Result<String> {
        self.locator.urn(path, require_exists)
    }
}

/// The part of `path` below `root`, or `None` if `path` is not under it.
///
/// The comparison ignores ASCII case and respects segment boundaries, so
/// `/srv/www2` is not under `/srv/www`.
fn strip_root<'p>(path: &'p str, root: &str) -> Option<&'p str> {
    let head = path.get(..root.len())?;
    if !head.eq_ignore_ascii_case(root) {
        return None;
    }

    let rest = &path[root.len()..];
    if rest.is_empty() || rest.starts_with('/') || root.ends_with('/') {
        Some(rest)
    } else {
        None
    }
}
