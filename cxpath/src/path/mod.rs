//! Portable path model with a purely lexical algebra.
//!
//! A [`Path`] is parsed once into components according to its
//! [`Platform`](crate::Platform) grammar and then manipulated without ever
//! touching the filesystem. Filesystem-aware operations such as
//! canonicalization live on [`Shell`](crate::Shell).
//!
//! # Key Concepts
//!
//! ## Components
//!
//! Parsing splits text into an optional root-name (`//net`, `C:`), an
//! optional root-directory (the single preferred separator), and the
//! relative components that follow. Runs of separators collapse to one, and
//! a trailing separator yields an implied `"."` filename.
//!
//! ## Re-parsing
//!
//! Every mutation (`push`, `concat`, `remove_filename`, ...) renders the
//! path to text and parses it again. Composition therefore always agrees
//! with what parsing the composed text from scratch would give.
//!
//! ## Lexical algebra
//!
//! [`Path::lexically_normal`], [`Path::lexically_relative`] and
//! [`Path::lexically_absolute`] compute normalized and re-anchored paths
//! from components alone.
//!
//! # Examples
//!
//! ```
//! use cxpath::{Path, Platform};
//!
//! let p = |s| Path::with_platform(s, Platform::Posix);
//!
//! let file = p("/srv/www/../data/./report.csv");
//! assert_eq!(file.lexically_normal().to_string(), "/srv/data/report.csv");
//! assert_eq!(file.extension(), ".csv");
//!
//! let rel = p("/srv/data/report.csv").lexically_relative(&p("/srv"));
//! assert_eq!(rel.to_string(), "data/report.csv");
//! ```

mod lexical;
mod parse;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use types::Path;
pub(crate) use types::{DOT, DOT_DOT};
