//! Deterministic in-memory [`FileSystem`], for tests and dry runs.
//!
//! Models directories, regular files and symlinks under a single POSIX root.
//! Intermediate symlinks are followed the way the kernel follows them during
//! lookup; the final component never is.

use std::collections::{BTreeMap, VecDeque};
use std::sync::{Mutex, MutexGuard};

use super::FileSystem;
use crate::error::{Error, Result};
use crate::path::{Path, DOT, DOT_DOT};
use crate::policy::Platform;

/// Symlinks followed during one lookup before giving up with `ELOOP`.
const MAX_LOOKUP_HOPS: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Kind {
    Directory,
    File,
    Symlink(String),
}

#[derive(Debug, Clone)]
struct Node {
    kind: Kind,
    mode: u32,
}

#[derive(Debug)]
struct State {
    nodes: BTreeMap<String, Node>,
    cwd: String,
}

/// An in-memory filesystem owned entirely by the current user.
///
/// # Examples
///
/// ```
/// use cxpath::fs::{FileSystem, MemoryFileSystem};
/// use cxpath::{Path, Platform};
///
/// let fs = MemoryFileSystem::new();
/// fs.add_dir("/srv/www").add_symlink("/www", "srv/www");
///
/// let www = Path::with_platform("/www", Platform::Posix);
/// assert!(fs.is_symlink(&www).unwrap());
/// assert_eq!(fs.read_link(&www).unwrap().to_string(), "srv/www");
/// ```
#[derive(Debug)]
pub struct MemoryFileSystem {
    state: Mutex<State>,
    home: String,
}

impl Default for MemoryFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

fn key_of(names: &[String]) -> String {
    format!("/{}", names.join("/"))
}

fn posix(text: &str) -> Path {
    Path::with_platform(text, Platform::Posix)
}

impl MemoryFileSystem {
    /// A filesystem holding only `/`, with `/` as working directory.
    #[must_use]
    pub fn new() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(
            "/".to_string(),
            Node {
                kind: Kind::Directory,
                mode: 0o755,
            },
        );
        Self {
            state: Mutex::new(State {
                nodes,
                cwd: "/".to_string(),
            }),
            home: "/home/user".to_string(),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>> {
        self.state.lock().map_err(|_| Error::Filesystem {
            path: "/".to_string(),
            reason: "memory filesystem lock poisoned".to_string(),
        })
    }

    /// Splits `path` into names below the root, resolving it against the
    /// working directory if relative.
    fn names(cwd: &str, path: &Path) -> VecDeque<String> {
        let mut names = VecDeque::new();
        if !path.is_absolute() {
            names.extend(posix(cwd).relative_path().iter().map(str::to_string));
        }
        names.extend(path.relative_path().iter().map(str::to_string));
        names
    }

    /// Resolves `path` to its node key, following symlinks in every
    /// position but the last. Returns the key even when nothing is there,
    /// as long as the parent exists.
    fn resolve(state: &State, path: &Path) -> Result<Option<String>> {
        let mut pending = Self::names(&state.cwd, path);
        let mut resolved: Vec<String> = Vec::new();
        let mut hops = 0;

        while let Some(name) = pending.pop_front() {
            if name == DOT {
                continue;
            }
            if name == DOT_DOT {
                resolved.pop();
                continue;
            }
            resolved.push(name);
            let is_last = pending.is_empty();
            let key = key_of(&resolved);
            match state.nodes.get(&key).map(|n| &n.kind) {
                None if is_last => return Ok(Some(key)),
                None => return Ok(None),
                Some(Kind::Symlink(target)) if !is_last => {
                    hops += 1;
                    if hops > MAX_LOOKUP_HOPS {
                        return Err(Error::Filesystem {
                            path: path.to_string(),
                            reason: "too many levels of symbolic links".to_string(),
                        });
                    }
                    resolved.pop();
                    let target = posix(target);
                    if target.is_absolute() {
                        resolved.clear();
                    }
                    for name in target.relative_path().iter().rev() {
                        pending.push_front(name.to_string());
                    }
                }
                Some(Kind::File) if !is_last => {
                    return Err(Error::NotADirectory { path: key });
                }
                Some(_) => {}
            }
        }
        Ok(Some(key_of(&resolved)))
    }

    fn node(&self, path: &Path) -> Result<Node> {
        let state = self.lock()?;
        Self::resolve(&state, path)?
            .and_then(|key| state.nodes.get(&key).cloned())
            .ok_or_else(|| Error::NotFound {
                path: path.to_string(),
            })
    }

    fn insert(&self, text: &str, kind: Kind, mode: u32) {
        let path = posix(text);
        let parent = path.parent_path();
        if !parent.is_empty() {
            self.add_dir(&parent.to_string());
        }
        if let Ok(mut state) = self.lock() {
            if let Ok(Some(key)) = Self::resolve(&state, &path) {
                state.nodes.insert(key, Node { kind, mode });
            }
        }
    }

    /// Creates a directory and any missing parents.
    pub fn add_dir(&self, text: &str) -> &Self {
        let path = posix(text);
        let mut current = Path::empty(Platform::Posix);
        for name in path.iter() {
            current.append_unchecked(&posix(name));
            if let Ok(mut state) = self.lock() {
                if let Ok(Some(key)) = Self::resolve(&state, &current) {
                    state.nodes.entry(key).or_insert(Node {
                        kind: Kind::Directory,
                        mode: 0o755,
                    });
                }
            }
        }
        self
    }

    /// Creates a regular file, along with its parent directories.
    pub fn add_file(&self, text: &str) -> &Self {
        self.insert(text, Kind::File, 0o644);
        self
    }

    /// Creates a symlink at `link` storing `target`.
    pub fn add_symlink(&self, link: &str, target: &str) -> &Self {
        self.insert(link, Kind::Symlink(target.to_string()), 0o777);
        self
    }

    /// Replaces the permission bits of the object at `text`.
    pub fn set_mode(&self, text: &str, mode: u32) -> &Self {
        if let Ok(mut state) = self.lock() {
            if let Ok(Some(key)) = Self::resolve(&state, &posix(text)) {
                if let Some(node) = state.nodes.get_mut(&key) {
                    node.mode = mode;
                }
            }
        }
        self
    }

    fn kind_is(&self, path: &Path, wanted: fn(&Kind) -> bool) -> Result<bool> {
        self.node(path).map(|n| wanted(&n.kind))
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> Result<bool> {
        match self.node(path) {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn is_file(&self, path: &Path) -> Result<bool> {
        self.kind_is(path, |k| *k == Kind::File)
    }

    fn is_directory(&self, path: &Path) -> Result<bool> {
        self.kind_is(path, |k| *k == Kind::Directory)
    }

    fn is_symlink(&self, path: &Path) -> Result<bool> {
        self.kind_is(path, |k| matches!(k, Kind::Symlink(_)))
    }

    fn is_other(&self, path: &Path) -> Result<bool> {
        self.kind_is(path, |_| false)
    }

    fn read_link(&self, path: &Path) -> Result<Path> {
        match self.node(path)?.kind {
            Kind::Symlink(target) => Ok(posix(&target)),
            _ => Err(Error::Filesystem {
                path: path.to_string(),
                reason: "not a symbolic link".to_string(),
            }),
        }
    }

    fn user_can_read(&self, path: &Path) -> Result<bool> {
        Ok(self.node(path)?.mode & 0o400 != 0)
    }

    fn user_can_write(&self, path: &Path) -> Result<bool> {
        Ok(self.node(path)?.mode & 0o200 != 0)
    }

    fn user_can_execute(&self, path: &Path) -> Result<bool> {
        Ok(self.node(path)?.mode & 0o100 != 0)
    }

    fn user_can_traverse(&self, path: &Path) -> Result<bool> {
        self.user_can_execute(path)
    }

    fn create_directory(&self, path: &Path) -> Result<()> {
        let mut state = self.lock()?;
        let key = Self::resolve(&state, path)?.ok_or_else(|| Error::NotFound {
            path: path.parent_path().to_string(),
        })?;
        if state.nodes.contains_key(&key) {
            return Err(Error::AlreadyExists {
                path: path.to_string(),
            });
        }
        state.nodes.insert(
            key,
            Node {
                kind: Kind::Directory,
                mode: 0o755,
            },
        );
        Ok(())
    }

    fn create_symlink(&self, target: &Path, link: &Path) -> Result<()> {
        let mut state = self.lock()?;
        let key = Self::resolve(&state, link)?.ok_or_else(|| Error::NotFound {
            path: link.parent_path().to_string(),
        })?;
        if state.nodes.contains_key(&key) {
            return Err(Error::AlreadyExists {
                path: link.to_string(),
            });
        }
        state.nodes.insert(
            key,
            Node {
                kind: Kind::Symlink(target.to_string()),
                mode: 0o777,
            },
        );
        Ok(())
    }

    fn current_dir(&self) -> Result<Path> {
        Ok(posix(&self.lock()?.cwd))
    }

    fn set_current_dir(&self, path: &Path) -> Result<()> {
        if !self.is_directory(path)? {
            return Err(Error::NotADirectory {
                path: path.to_string(),
            });
        }
        let mut state = self.lock()?;
        let names = Self::names(&state.cwd, path);
        let mut target = posix("/");
        for name in names {
            target.append_unchecked(&posix(&name));
        }
        state.cwd = target.lexically_normal().to_string();
        Ok(())
    }

    fn home_dir(&self) -> Result<Path> {
        Ok(posix(&self.home))
    }

    fn temp_dir(&self) -> Result<Path> {
        let temp = posix("/tmp");
        if !self.exists(&temp)? || !self.is_directory(&temp)? {
            return Err(Error::Filesystem {
                path: temp.to_string(),
                reason: "temp directory does not exist".to_string(),
            });
        }
        Ok(temp)
    }
}
