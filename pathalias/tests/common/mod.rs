//! Common test utilities for integration tests.
//!
//! This module provides a small on-disk tree builder so tests can register
//! real directories and look up real files.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory tree that is removed on drop.
///
/// Paths handed out are canonical and use `/` separators, matching what the
/// registry stores after cleaning.
pub struct Tree {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)]
impl Tree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        let temp = tempfile::tempdir().unwrap();
        let root = fs::canonicalize(temp.path()).unwrap();
        Self { _temp: temp, root }
    }

    /// The tree root as a `/`-separated string.
    pub fn root(&self) -> String {
        slashed(&self.root)
    }

    /// The root as a filesystem path.
    pub fn root_path(&self) -> &Path {
        &self.root
    }

    /// Absolute path of `relative` inside the tree, created or not.
    pub fn path(&self, relative: &str) -> String {
        format!("{}/{}", self.root(), relative.trim_start_matches('/'))
    }

    /// Creates a directory (and its parents) and returns its path.
    pub fn dir(&self, relative: &str) -> String {
        let path = self.path(relative);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Creates a file with some content and returns its path.
    pub fn file(&self, relative: &str) -> String {
        let path = self.path(relative);
        if let Some(parent) = Path::new(&path).parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, relative).unwrap();
        path
    }
}

/// Render a path with `/` separators.
pub fn slashed(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
