//! Collaborators that reach outside the process.
//!
//! The resolver never touches the filesystem or the request context
//! directly. It asks a [`FilesystemProbe`] whether candidate paths exist and
//! a [`BaseUrlProvider`] for the scheme and host of absolute URLs.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Filesystem queries used during resolution.
#[cfg_attr(test, mockall::automock)]
pub trait FilesystemProbe: Send + Sync {
    /// Check whether a file or directory exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Resolve `path` to its real absolute form, following symlinks.
    ///
    /// Returns `None` when the path cannot be resolved, typically because it
    /// does not exist.
    fn canonicalize(&self, path: &Path) -> Option<PathBuf>;

    /// Check whether `path` is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// [`FilesystemProbe`] backed by `std::fs`.
///
/// # Examples
///
/// ```
/// use pathalias::path::{FilesystemProbe, OsProbe};
/// use std::path::Path;
///
/// let probe = OsProbe;
/// assert!(probe.is_dir(&std::env::temp_dir()));
/// assert!(!probe.exists(Path::new("/nonexistent/pathalias/probe")));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OsProbe;

impl FilesystemProbe for OsProbe {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn canonicalize(&self, path: &Path) -> Option<PathBuf> {
        match fs::canonicalize(path) {
            Ok(canonical) => Some(strip_verbatim(canonical)),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                log::warn!("cannot canonicalize {}: {e}", path.display());
                None
            }
        }
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

/// Drop the `\\?\` prefix Windows puts on canonical paths; cleaning would
/// otherwise turn it into a `/?/` segment.
fn strip_verbatim(path: PathBuf) -> PathBuf {
    if let Some(s) = path.to_str() {
        if let Some(rest) = s.strip_prefix(r"\\?\UNC\") {
            return PathBuf::from(format!(r"\\{rest}"));
        }
        if let Some(rest) = s.strip_prefix(r"\\?\") {
            return PathBuf::from(rest);
        }
    }
    path
}

/// Source of the scheme and host that absolute URLs start with.
#[cfg_attr(test, mockall::automock)]
pub trait BaseUrlProvider {
    /// The current base URL, e.g. `https://example.test`.
    fn current(&self) -> String;
}

/// [`BaseUrlProvider`] returning a fixed value.
///
/// A trailing `/` is removed on construction.
///
/// # Examples
///
/// ```
/// use pathalias::path::{BaseUrlProvider, StaticBaseUrl};
///
/// let base = StaticBaseUrl::new("http://test.dev/");
/// assert_eq!(base.current(), "http://test.dev");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticBaseUrl(String);

impl StaticBaseUrl {
    /// Create a provider for `url`.
    pub fn new(url: impl Into<String>) -> Self {
        let mut url = url.into();
        while url.ends_with('/') {
            url.pop();
        }
        Self(url)
    }
}

impl BaseUrlProvider for StaticBaseUrl {
    fn current(&self) -> String {
        self.0.clone()
    }
}

impl fmt::Display for StaticBaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_os_probe_exists() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("file.txt");
        fs::write(&file, "").unwrap();

        assert!(OsProbe.exists(&file));
        assert!(OsProbe.exists(dir.path()));
        assert!(!OsProbe.exists(&dir.path().join("missing.txt")));
    }

    #[test]
    fn test_os_probe_is_dir() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("file.txt");
        fs::write(&file, "").unwrap();

        assert!(OsProbe.is_dir(dir.path()));
        assert!(!OsProbe.is_dir(&file));
    }

    #[test]
    fn test_os_probe_canonicalize_parent_reference() {
        let dir = tempdir().unwrap();
        let child = dir.path().join("child");
        fs::create_dir(&child).unwrap();

        let canonical = OsProbe.canonicalize(&child.join("..")).unwrap();
        assert_eq!(canonical, fs::canonicalize(dir.path()).unwrap());
    }

    #[test]
    fn test_strip_verbatim_prefix() {
        assert_eq!(
            strip_verbatim(PathBuf::from(r"\\?\C:\srv\www")),
            PathBuf::from(r"C:\srv\www")
        );
        assert_eq!(
            strip_verbatim(PathBuf::from(r"\\?\UNC\server\share\www")),
            PathBuf::from(r"\\server\share\www")
        );
        assert_eq!(
            strip_verbatim(PathBuf::from("/srv/www")),
            PathBuf::from("/srv/www")
        );
    }

    #[test]
    fn test_os_probe_canonicalize_nonexistent() {
        assert!(OsProbe
            .canonicalize(Path::new("/nonexistent/pathalias/.."))
            .is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_os_probe_canonicalize_symlink() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let target = dir.path().join("target");
        let link = dir.path().join("link");
        fs::create_dir(&target).unwrap();
        symlink(&target, &link).unwrap();

        assert_eq!(
            OsProbe.canonicalize(&link).unwrap(),
            fs::canonicalize(&target).unwrap()
        );
    }

    #[test]
    fn test_static_base_url_trims_trailing_slashes() {
        assert_eq!(StaticBaseUrl::new("https://example.test//").current(), "https://example.test");
        assert_eq!(StaticBaseUrl::new("https://example.test").to_string(), "https://example.test");
    }
}
