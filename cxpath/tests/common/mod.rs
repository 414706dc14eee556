//! Common test utilities for integration tests.
//!
//! [`TempTree`] builds a throwaway directory tree on the real filesystem and
//! hands out [`cxpath::Path`] values rooted inside it.

use std::fs;

use cxpath::{Path, Platform};
use tempfile::TempDir;

/// Parses `text` with the POSIX grammar.
#[allow(dead_code)]
pub fn posix(text: &str) -> Path {
    Path::with_platform(text, Platform::Posix)
}

/// A temporary directory tree, removed on drop.
///
/// The root is resolved through any symlinks in the system temp path (such
/// as `/tmp -> /private/tmp`) so canonical results compare equal to paths
/// built from [`TempTree::path`].
#[allow(dead_code)]
pub struct TempTree {
    _dir: TempDir,
    root: String,
}

#[allow(dead_code)]
impl TempTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = fs::canonicalize(dir.path())
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        Self { _dir: dir, root }
    }

    /// The tree's root directory.
    pub fn root(&self) -> Path {
        posix(&self.root)
    }

    /// `relative` anchored at the root.
    pub fn path(&self, relative: &str) -> Path {
        if relative.is_empty() {
            return self.root();
        }
        posix(&format!("{}/{relative}", self.root))
    }

    /// Creates a directory and its parents.
    pub fn dir(&self, relative: &str) -> &Self {
        fs::create_dir_all(self.path(relative).to_string()).unwrap();
        self
    }

    /// Creates an empty file, along with its parent directories.
    pub fn file(&self, relative: &str) -> &Self {
        let path = self.path(relative);
        let parent = path.parent_path();
        fs::create_dir_all(parent.to_string()).unwrap();
        fs::write(path.to_string(), "").unwrap();
        self
    }

    /// Creates a symlink at `link` storing `target` verbatim.
    #[cfg(unix)]
    pub fn symlink(&self, link: &str, target: &str) -> &Self {
        std::os::unix::fs::symlink(target, self.path(link).to_string()).unwrap();
        self
    }
}
