//! The filesystem primitive boundary.
//!
//! [`FileSystem`] is the only place cxpath touches the operating system.
//! Everything above it, including canonicalization, is written against the
//! trait so that tests can swap in [`MemoryFileSystem`] or a mock.
//!
//! Type probes describe the object itself and never follow a final symlink.
//! Only [`FileSystem::exists`] treats a missing object as an answer rather
//! than an error.

mod memory;
mod os;

pub use memory::MemoryFileSystem;
pub use os::OsFileSystem;

use crate::error::Result;
use crate::path::Path;

/// Primitive filesystem operations.
#[cfg_attr(test, mockall::automock)]
pub trait FileSystem {
    /// Whether anything exists at `path`. A missing object is `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Fails if the object cannot be examined for any other reason.
    fn exists(&self, path: &Path) -> Result<bool>;

    /// Whether `path` is a regular file.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::NotFound`](crate::Error::NotFound) if nothing is
    /// there.
    fn is_file(&self, path: &Path) -> Result<bool>;

    /// Whether `path` is a directory.
    ///
    /// # Errors
    ///
    /// Fails if the object cannot be examined.
    fn is_directory(&self, path: &Path) -> Result<bool>;

    /// Whether `path` is itself a symbolic link.
    ///
    /// # Errors
    ///
    /// Fails if the object cannot be examined.
    fn is_symlink(&self, path: &Path) -> Result<bool>;

    /// Whether `path` is neither file, directory nor symlink.
    ///
    /// # Errors
    ///
    /// Fails if the object cannot be examined.
    fn is_other(&self, path: &Path) -> Result<bool>;

    /// The target text stored in the symlink at `path`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Filesystem`](crate::Error::Filesystem) if `path`
    /// is not a symlink.
    fn read_link(&self, path: &Path) -> Result<Path>;

    /// Whether the effective user may read `path`.
    ///
    /// # Errors
    ///
    /// Fails if the object cannot be examined.
    fn user_can_read(&self, path: &Path) -> Result<bool>;

    /// Whether the effective user may write `path`.
    ///
    /// # Errors
    ///
    /// Fails if the object cannot be examined.
    fn user_can_write(&self, path: &Path) -> Result<bool>;

    /// Whether the effective user holds execute permission on `path`.
    ///
    /// # Errors
    ///
    /// Fails if the object cannot be examined.
    fn user_can_execute(&self, path: &Path) -> Result<bool>;

    /// Whether the effective user may search the directory `path`.
    ///
    /// # Errors
    ///
    /// Fails if the object cannot be examined.
    fn user_can_traverse(&self, path: &Path) -> Result<bool>;

    /// Creates one directory.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::AlreadyExists`](crate::Error::AlreadyExists) if
    /// anything is already at `path`.
    fn create_directory(&self, path: &Path) -> Result<()>;

    /// Creates a symlink at `link` whose stored target is `target`.
    ///
    /// # Errors
    ///
    /// Fails if the link cannot be created.
    fn create_symlink(&self, target: &Path, link: &Path) -> Result<()>;

    /// The process working directory.
    ///
    /// # Errors
    ///
    /// Fails if the working directory cannot be determined.
    fn current_dir(&self) -> Result<Path>;

    /// Changes the process working directory.
    ///
    /// # Errors
    ///
    /// Fails if `path` cannot be entered.
    fn set_current_dir(&self, path: &Path) -> Result<()>;

    /// The user's home directory.
    ///
    /// # Errors
    ///
    /// Fails if no home directory is known.
    fn home_dir(&self) -> Result<Path>;

    /// The directory for temporary files.
    ///
    /// # Errors
    ///
    /// Fails if the chosen directory is missing or not a directory.
    fn temp_dir(&self) -> Result<Path>;
}
