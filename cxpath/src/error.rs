//! Error types for the cxpath library.
//!
//! Every failure maps onto a small taxonomy ([`ErrorKind`]): malformed path
//! composition, generic filesystem failure, and the handful of filesystem
//! conditions callers routinely branch on. Lexical operations only ever
//! produce [`ErrorKind::BadPath`]; everything else comes from the filesystem
//! boundary.

use std::fmt;
use std::io;

use thiserror::Error;

/// Result type alias for operations that may fail with a cxpath error.
///
/// # Examples
///
/// ```
/// use cxpath::{Path, Result};
///
/// fn absolutize(p: &str) -> Result<Path> {
///     Path::new(p).lexically_absolute(&Path::new("/srv"))
/// }
/// # assert!(absolutize("www").is_ok());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the cxpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path was structurally unusable for the requested composition.
    #[error("bad path '{path}': {reason}")]
    BadPath {
        /// Textual form of the offending path.
        path: String,
        /// Why the path was rejected.
        reason: String,
    },

    /// A filesystem operation failed for a reason outside the specific kinds.
    #[error("filesystem error on '{path}': {reason}")]
    Filesystem {
        /// The path the operation was applied to.
        path: String,
        /// The reason reported by the operating system.
        reason: String,
    },

    /// The filesystem object does not exist.
    #[error("path not found: {path}")]
    NotFound {
        /// The path that was not found.
        path: String,
    },

    /// The filesystem object already exists.
    #[error("path already exists: {path}")]
    AlreadyExists {
        /// The path that already exists.
        path: String,
    },

    /// The filesystem object exists but is not a directory.
    #[error("not a directory: {path}")]
    NotADirectory {
        /// The path that was expected to be a directory.
        path: String,
    },

    /// Access to the filesystem object was denied.
    #[error("permission denied: {path}")]
    PermissionDenied {
        /// The path that could not be accessed.
        path: String,
    },

    /// Symlink substitution did not settle within the configured bound.
    #[error("too many symlink substitutions (limit {limit}) while resolving {path}")]
    SymlinkLoop {
        /// The path being resolved when the limit was hit.
        path: String,
        /// The substitution limit that was exceeded.
        limit: usize,
    },

    /// An I/O error that was not translated at the filesystem boundary.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

/// The error taxonomy shared by all cxpath operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed composition (conflicting root-names, relative base, ...).
    BadPath,
    /// Generic filesystem failure.
    Filesystem,
    /// Object does not exist.
    NotFound,
    /// Object already exists.
    AlreadyExists,
    /// Object is not a directory.
    NotADirectory,
    /// Access denied.
    Permission,
    /// Configuration rejected.
    Validation,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BadPath => "BADPATH",
            Self::Filesystem => "FILESYSTEM",
            Self::NotFound => "E_NOENT",
            Self::AlreadyExists => "E_EXIST",
            Self::NotADirectory => "E_NOTDIR",
            Self::Permission => "PERMISSION",
            Self::Validation => "VALIDATION",
        };
        f.write_str(name)
    }
}

impl Error {
    /// Builds a [`Error::BadPath`] from anything printable.
    pub(crate) fn bad_path(path: impl fmt::Display, reason: impl Into<String>) -> Self {
        Self::BadPath {
            path: path.to_string(),
            reason: reason.into(),
        }
    }

    /// Translates an OS error for `path` into the taxonomy.
    ///
    /// # Examples
    ///
    /// ```
    /// use cxpath::{Error, ErrorKind};
    /// use std::io;
    ///
    /// let err = Error::from_io("/missing", &io::Error::from(io::ErrorKind::NotFound));
    /// assert_eq!(err.kind(), ErrorKind::NotFound);
    /// ```
    #[must_use]
    pub fn from_io(path: impl fmt::Display, err: &io::Error) -> Self {
        let path = path.to_string();
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            io::ErrorKind::AlreadyExists => Self::AlreadyExists { path },
            _ => Self::Filesystem {
                path,
                reason: err.to_string(),
            },
        }
    }

    /// Classifies this error within the taxonomy.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::BadPath { .. } => ErrorKind::BadPath,
            Self::Filesystem { .. } | Self::SymlinkLoop { .. } => ErrorKind::Filesystem,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            Self::NotADirectory { .. } => ErrorKind::NotADirectory,
            Self::PermissionDenied { .. } => ErrorKind::Permission,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Io(e) => match e.kind() {
                io::ErrorKind::NotFound => ErrorKind::NotFound,
                io::ErrorKind::PermissionDenied => ErrorKind::Permission,
                io::ErrorKind::AlreadyExists => ErrorKind::AlreadyExists,
                _ => ErrorKind::Filesystem,
            },
        }
    }

    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use cxpath::Error;
    ///
    /// let err = Error::NotFound { path: "/nonexistent".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// Check if error is permission-related.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        self.kind() == ErrorKind::Permission
    }

    /// Check if error came from malformed path composition.
    #[must_use]
    pub fn is_bad_path(&self) -> bool {
        self.kind() == ErrorKind::BadPath
    }
}
