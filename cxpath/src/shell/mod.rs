//! Filesystem-aware path services.
//!
//! A [`Shell`] bundles a [`FileSystem`] with the settings that filesystem
//! operations need: the platform grammar, the symlink substitution bound,
//! and the working directory observed when the shell was first consulted.
//! Pass a shell to whatever needs filesystem truth; tests construct one over
//! [`MemoryFileSystem`](crate::fs::MemoryFileSystem) or a mock instead of the
//! real OS.
//!
//! # Examples
//!
//! ```no_run
//! use cxpath::{Path, Shell};
//!
//! let shell = Shell::new();
//! let real = shell.canonical_from_cwd(&Path::new("../project/./src"))?;
//! println!("{real}");
//! # Ok::<(), cxpath::Error>(())
//! ```

mod canonical;

use std::sync::OnceLock;

use rand::Rng;

use crate::config::Config;
use crate::error::{Error, ErrorKind, Result};
use crate::fs::{FileSystem, OsFileSystem};
use crate::path::{Path, DOT, DOT_DOT};
use crate::policy::Platform;

/// Symlink substitutions allowed during one canonicalization.
pub const DEFAULT_MAX_SYMLINK_DEPTH: usize = 40;

/// Model used by [`Shell::unique_path`] when none is given.
pub const DEFAULT_UNIQUE_MODEL: &str = "%%%%-%%%%-%%%%-%%%%";

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Path services over a [`FileSystem`].
#[derive(Debug)]
pub struct Shell<F: FileSystem = OsFileSystem> {
    fs: F,
    platform: Platform,
    max_symlink_depth: usize,
    initial: OnceLock<Path>,
}

impl Shell<OsFileSystem> {
    /// A shell over the real filesystem with native settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_fs(OsFileSystem, Platform::native())
    }

    /// A shell over the real filesystem configured from `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::with_fs(OsFileSystem, config.platform_or_native())
            .with_max_symlink_depth(config.symlink_depth_or_default())
    }
}

impl Default for Shell<OsFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> Shell<F> {
    /// A shell over an arbitrary filesystem.
    pub fn with_fs(fs: F, platform: Platform) -> Self {
        Self {
            fs,
            platform,
            max_symlink_depth: DEFAULT_MAX_SYMLINK_DEPTH,
            initial: OnceLock::new(),
        }
    }

    /// Replaces the symlink substitution bound.
    #[must_use]
    pub fn with_max_symlink_depth(mut self, depth: usize) -> Self {
        self.max_symlink_depth = depth;
        self
    }

    /// The underlying filesystem.
    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// The grammar used for paths this shell creates.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// The symlink substitution bound.
    pub fn max_symlink_depth(&self) -> usize {
        self.max_symlink_depth
    }

    /// The user's home directory.
    ///
    /// # Errors
    ///
    /// Fails if no home directory is known.
    pub fn home(&self) -> Result<Path> {
        self.fs.home_dir()
    }

    /// The current working directory.
    ///
    /// # Errors
    ///
    /// Fails if the working directory cannot be determined.
    pub fn current_dir(&self) -> Result<Path> {
        self.fs.current_dir()
    }

    /// Changes the working directory. The initial directory is captured
    /// first if it has not been already.
    ///
    /// # Errors
    ///
    /// Fails if `path` cannot be entered.
    pub fn set_current_dir(&self, path: &Path) -> Result<()> {
        self.initial_path()?;
        self.fs.set_current_dir(path)
    }

    /// The working directory as of the first time this shell needed it.
    /// It never changes afterwards.
    ///
    /// # Errors
    ///
    /// Fails if the working directory cannot be determined on first use.
    pub fn initial_path(&self) -> Result<Path> {
        if let Some(initial) = self.initial.get() {
            return Ok(initial.clone());
        }
        let cwd = self.fs.current_dir()?;
        Ok(self.initial.get_or_init(|| cwd).clone())
    }

    /// The directory for temporary files.
    ///
    /// # Errors
    ///
    /// Fails if the chosen directory is missing or not a directory.
    pub fn temp_directory(&self) -> Result<Path> {
        self.fs.temp_dir()
    }

    /// `model` with every `%` replaced by a random hexadecimal digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use cxpath::{Path, Platform, Shell};
    ///
    /// let shell = Shell::new();
    /// let unique = shell.unique_path(&Path::with_platform("scratch-%%%%", Platform::Posix));
    /// let text = unique.to_string();
    /// assert!(text.starts_with("scratch-"));
    /// assert!(text[8..].chars().all(|c| c.is_ascii_hexdigit()));
    /// ```
    #[must_use]
    pub fn unique_path(&self, model: &Path) -> Path {
        let mut rng = rand::rng();
        let text: String = model
            .to_string()
            .chars()
            .map(|c| {
                if c == '%' {
                    char::from(HEX_DIGITS[rng.random_range(0..HEX_DIGITS.len())])
                } else {
                    c
                }
            })
            .collect();
        Path::with_platform(&text, model.platform())
    }

    /// [`Shell::unique_path`] with [`DEFAULT_UNIQUE_MODEL`].
    #[must_use]
    pub fn default_unique_path(&self) -> Path {
        self.unique_path(&Path::with_platform(DEFAULT_UNIQUE_MODEL, self.platform))
    }

    /// Whether anything exists at `path`.
    ///
    /// # Errors
    ///
    /// Fails for any reason other than the object being absent.
    pub fn path_exists(&self, path: &Path) -> Result<bool> {
        self.fs.exists(path)
    }

    /// Whether `path` is a regular file.
    ///
    /// # Errors
    ///
    /// Fails if the object cannot be examined.
    pub fn is_file(&self, path: &Path) -> Result<bool> {
        self.fs.is_file(path)
    }

    /// Whether `path` is a directory.
    ///
    /// # Errors
    ///
    /// Fails if the object cannot be examined.
    pub fn is_directory(&self, path: &Path) -> Result<bool> {
        self.fs.is_directory(path)
    }

    /// Whether `path` is a symlink.
    ///
    /// # Errors
    ///
    /// Fails if the object cannot be examined.
    pub fn is_symlink(&self, path: &Path) -> Result<bool> {
        self.fs.is_symlink(path)
    }

    /// Whether `path` is a device, socket, fifo or similar.
    ///
    /// # Errors
    ///
    /// Fails if the object cannot be examined.
    pub fn is_other(&self, path: &Path) -> Result<bool> {
        self.fs.is_other(path)
    }

    /// Whether `path` is a file or a chain of symlinks ending at one.
    /// Dangling chains answer `false`.
    ///
    /// # Errors
    ///
    /// Fails if an object cannot be examined, or with
    /// [`Error::SymlinkLoop`] if the chain is longer than the shell's bound.
    pub fn is_file_or_symlink_to_file(&self, path: &Path) -> Result<bool> {
        if self.fs.is_file(path)? {
            return Ok(true);
        }
        let mut current = path.clone();
        let mut hops = 0;
        while self.fs.is_symlink(&current)? {
            hops += 1;
            if hops > self.max_symlink_depth {
                return Err(Error::SymlinkLoop {
                    path: path.to_string(),
                    limit: self.max_symlink_depth,
                });
            }
            let target = self.fs.read_link(&current)?;
            current = if target.is_absolute() {
                target
            } else {
                current.parent_path().join(&target)?
            };
            if !self.fs.exists(&current)? {
                return Ok(false);
            }
        }
        self.fs.is_file(&current)
    }

    /// Whether the effective user may read `path`.
    ///
    /// # Errors
    ///
    /// Fails if the object cannot be examined.
    pub fn user_can_read(&self, path: &Path) -> Result<bool> {
        self.fs.user_can_read(path)
    }

    /// Whether the effective user may write `path`.
    ///
    /// # Errors
    ///
    /// Fails if the object cannot be examined.
    pub fn user_can_write(&self, path: &Path) -> Result<bool> {
        self.fs.user_can_write(path)
    }

    /// Whether the effective user may execute `path`. Directories are never
    /// executable; see [`Shell::user_can_traverse`].
    ///
    /// # Errors
    ///
    /// Fails if the object cannot be examined.
    pub fn user_can_execute(&self, path: &Path) -> Result<bool> {
        Ok(!self.fs.is_directory(path)? && self.fs.user_can_execute(path)?)
    }

    /// Whether the effective user may search the directory `path`. Only
    /// directories are traversable.
    ///
    /// # Errors
    ///
    /// Fails if the object cannot be examined.
    pub fn user_can_traverse(&self, path: &Path) -> Result<bool> {
        Ok(self.fs.is_directory(path)? && self.fs.user_can_traverse(path)?)
    }

    /// The target stored in the symlink at `path`.
    ///
    /// # Errors
    ///
    /// Fails if `path` is not a symlink.
    pub fn resolve_symlink(&self, path: &Path) -> Result<Path> {
        self.fs.read_link(path)
    }

    /// Creates a symlink at `link` pointing at `target`.
    ///
    /// # Errors
    ///
    /// Fails if the link cannot be created.
    pub fn create_symlink(&self, target: &Path, link: &Path) -> Result<()> {
        self.fs.create_symlink(target, link)
    }

    /// Creates one directory. An existing directory is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadPath`] for an invalid path and
    /// [`Error::NotADirectory`] if something other than a directory is
    /// already there. Other filesystem errors pass through.
    pub fn create_directory(&self, path: &Path) -> Result<()> {
        if !path.is_valid() {
            return Err(Error::bad_path(path, "cannot create a directory with this name"));
        }
        match self.fs.create_directory(path) {
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                if self.fs.is_directory(path)? {
                    Ok(())
                } else {
                    Err(Error::NotADirectory {
                        path: path.to_string(),
                    })
                }
            }
            other => other,
        }
    }

    /// Creates `path` and every missing ancestor.
    ///
    /// Existing leading directories are skipped up to the first missing
    /// component; everything from there on is created. Not transactional:
    /// a failure part-way leaves the directories made so far.
    ///
    /// # Errors
    ///
    /// Fails like [`Shell::create_directory`] on the first component that
    /// cannot be created.
    pub fn create_directories(&self, path: &Path) -> Result<()> {
        let normal = path.lexically_normal();
        let mut current = Path::empty(normal.platform());
        let mut frontier = false;

        for component in normal.iter() {
            current.append_unchecked(&Path::with_platform(component, normal.platform()));
            if component == DOT || component == DOT_DOT {
                continue;
            }
            if !frontier && self.fs.exists(&current)? && self.fs.is_directory(&current)? {
                continue;
            }
            log::debug!("creating directory {current}");
            self.create_directory(&current)?;
            frontier = true;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::{MemoryFileSystem, MockFileSystem};

    fn p(text: &str) -> Path {
        Path::with_platform(text, Platform::Posix)
    }

    fn memory_shell() -> Shell<MemoryFileSystem> {
        Shell::with_fs(MemoryFileSystem::new(), Platform::Posix)
    }

    #[test]
    fn test_unique_path_replaces_every_percent() {
        let shell = memory_shell();
        let unique = shell.default_unique_path();
        let text = unique.to_string();
        assert_eq!(text.len(), DEFAULT_UNIQUE_MODEL.len());
        assert!(!text.contains('%'));
        for (got, model) in text.chars().zip(DEFAULT_UNIQUE_MODEL.chars()) {
            if model == '-' {
                assert_eq!(got, '-');
            } else {
                assert!(got.is_ascii_hexdigit());
            }
        }
    }

    #[test]
    fn test_initial_path_is_fixed() {
        let shell = memory_shell();
        shell.fs().add_dir("/elsewhere");
        assert_eq!(shell.initial_path().unwrap().to_string(), "/");
        shell.set_current_dir(&p("/elsewhere")).unwrap();
        assert_eq!(shell.current_dir().unwrap().to_string(), "/elsewhere");
        assert_eq!(shell.initial_path().unwrap().to_string(), "/");
    }

    #[test]
    fn test_set_current_dir_captures_initial_first() {
        let shell = memory_shell();
        shell.fs().add_dir("/next");
        shell.set_current_dir(&p("/next")).unwrap();
        assert_eq!(shell.initial_path().unwrap().to_string(), "/");
    }

    #[test]
    fn test_execute_and_traverse_split_on_type() {
        let shell = memory_shell();
        shell.fs().add_dir("/bin").add_file("/bin/tool");
        shell.fs().set_mode("/bin/tool", 0o755);

        assert!(shell.user_can_execute(&p("/bin/tool")).unwrap());
        assert!(!shell.user_can_traverse(&p("/bin/tool")).unwrap());
        assert!(!shell.user_can_execute(&p("/bin")).unwrap());
        assert!(shell.user_can_traverse(&p("/bin")).unwrap());
    }

    #[test]
    fn test_file_or_symlink_to_file() {
        let shell = memory_shell();
        shell
            .fs()
            .add_file("/data/real.txt")
            .add_symlink("/data/one", "real.txt")
            .add_symlink("/data/two", "/data/one")
            .add_symlink("/data/dangling", "gone")
            .add_symlink("/data/dir", "/data");

        assert!(shell.is_file_or_symlink_to_file(&p("/data/real.txt")).unwrap());
        assert!(shell.is_file_or_symlink_to_file(&p("/data/two")).unwrap());
        assert!(!shell.is_file_or_symlink_to_file(&p("/data/dangling")).unwrap());
        assert!(!shell.is_file_or_symlink_to_file(&p("/data/dir")).unwrap());
        assert!(!shell.is_file_or_symlink_to_file(&p("/data")).unwrap());
    }

    #[test]
    fn test_file_or_symlink_cycle_is_bounded() {
        let shell = memory_shell().with_max_symlink_depth(5);
        shell.fs().add_symlink("/a", "b").add_symlink("/b", "a");
        let err = shell.is_file_or_symlink_to_file(&p("/a")).unwrap_err();
        assert!(matches!(err, Error::SymlinkLoop { limit: 5, .. }));
    }

    #[test]
    fn test_create_directory_is_idempotent() {
        let shell = memory_shell();
        shell.create_directory(&p("/new")).unwrap();
        shell.create_directory(&p("/new")).unwrap();
        assert!(shell.is_directory(&p("/new")).unwrap());
    }

    #[test]
    fn test_create_directory_over_file_is_not_a_directory() {
        let shell = memory_shell();
        shell.fs().add_file("/taken");
        let err = shell.create_directory(&p("/taken")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotADirectory);
    }

    #[test]
    fn test_create_directory_rejects_invalid_name() {
        let shell = memory_shell();
        let err = shell.create_directory(&p("/bad name")).unwrap_err();
        assert!(err.is_bad_path());
        assert!(!shell.path_exists(&p("/bad name")).unwrap());
    }

    #[test]
    fn test_create_directories() {
        let shell = memory_shell();
        shell.fs().add_dir("/srv");
        shell.create_directories(&p("/srv/a/./b/../c/")).unwrap();
        assert!(shell.is_directory(&p("/srv/a")).unwrap());
        assert!(shell.is_directory(&p("/srv/a/c")).unwrap());
        assert!(!shell.path_exists(&p("/srv/a/b")).unwrap());
    }

    #[test]
    fn test_create_directories_relative_with_leading_dots() {
        let shell = memory_shell();
        shell.fs().add_dir("/work/sub");
        shell.set_current_dir(&p("/work/sub")).unwrap();
        shell.create_directories(&p("../made/deep")).unwrap();
        assert!(shell.is_directory(&p("/work/made/deep")).unwrap());
    }

    #[test]
    fn test_create_directories_through_a_file_fails() {
        let shell = memory_shell();
        shell.fs().add_file("/f");
        let err = shell.create_directories(&p("/f/x")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotADirectory);
    }

    #[test]
    fn test_create_directory_passes_other_errors_through() {
        let mut fs = MockFileSystem::new();
        fs.expect_create_directory().returning(|path| {
            Err(Error::PermissionDenied {
                path: path.to_string(),
            })
        });
        let shell = Shell::with_fs(fs, Platform::Posix);
        let err = shell.create_directory(&p("/root/x")).unwrap_err();
        assert!(err.is_permission_denied());
    }

    #[test]
    fn test_create_directory_swallows_existing_directory() {
        let mut fs = MockFileSystem::new();
        fs.expect_create_directory().returning(|path| {
            Err(Error::AlreadyExists {
                path: path.to_string(),
            })
        });
        fs.expect_is_directory().returning(|_| Ok(true));
        let shell = Shell::with_fs(fs, Platform::Posix);
        shell.create_directory(&p("/exists")).unwrap();
    }

    #[test]
    fn test_probe_errors_propagate() {
        let mut fs = MockFileSystem::new();
        fs.expect_exists().returning(|path| {
            Err(Error::PermissionDenied {
                path: path.to_string(),
            })
        });
        let shell = Shell::with_fs(fs, Platform::Posix);
        assert!(shell.path_exists(&p("/secret")).unwrap_err().is_permission_denied());
    }
}
