#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # cxpath
//!
//! A portable filesystem path model.
//!
//! Paths are parsed into a component sequence under a per-platform grammar
//! and manipulated with a purely lexical algebra: composition, normal form,
//! relative and absolute forms. Filesystem-aware services such as symlink
//! canonicalization live on a [`Shell`], which reaches the operating system
//! only through the [`FileSystem`] trait.
//!
//! ## Core Types
//!
//! - [`Path`]: component-model path with lexical operations
//! - [`PathList`]: delimiter-separated lists such as `PATH`
//! - [`Platform`] and [`PathPolicy`]: separator, root-name and validity rules
//! - [`Shell`]: canonicalization, predicates and directory creation
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use cxpath::{Path, Platform};
//!
//! let p = |s| Path::with_platform(s, Platform::Posix);
//!
//! assert_eq!(p("foo/./bar/..").lexically_normal().to_string(), "foo");
//! assert_eq!(p("/a/b/c").lexically_relative(&p("/a")).to_string(), "b/c");
//! assert_eq!(p("bar").lexically_absolute(&p("/foo")).unwrap().to_string(), "/foo/bar");
//! ```

pub mod config;
pub mod error;
pub mod fs;
pub mod logging;
pub mod output;
pub mod path;
pub mod path_list;
pub mod policy;
pub mod shell;

pub use config::{Config, ConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use fs::{FileSystem, OsFileSystem};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{Decomposition, OutputFormat};
pub use path::Path;
pub use path_list::PathList;
pub use policy::{PathPolicy, Platform, PosixPolicy, WindowsPolicy};
pub use shell::Shell;
