//! Reports describing the lexical anatomy of paths.
//!
//! A [`Decomposition`] snapshots every query a [`Path`] answers without
//! touching the filesystem. Formatters turn a batch of them into text.

mod formatters;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{Path, Platform, Result};

pub use formatters::{HumanFormatter, JsonFormatter};

/// Every lexical query on one path.
///
/// # Examples
///
/// ```
/// use cxpath::output::Decomposition;
/// use cxpath::{Path, Platform};
///
/// let d = Decomposition::from_path("/srv/app/./log.tar.gz", Platform::Posix);
/// assert_eq!(d.rendered, "/srv/app/./log.tar.gz");
/// assert_eq!(d.filename, "log.tar.gz");
/// assert_eq!(d.stem, "log.tar");
/// assert_eq!(d.extension, ".gz");
/// assert_eq!(d.normal, "/srv/app/log.tar.gz");
/// assert!(d.is_absolute);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decomposition {
    /// Text as given.
    pub input: String,
    /// Grammar the text was parsed with.
    pub platform: Platform,
    /// The parsed path rendered back to text.
    pub rendered: String,
    /// Component sequence.
    pub components: Vec<String>,
    /// Root-name plus root-directory.
    pub root_path: String,
    /// Root-name, such as `//host` or `C:`.
    pub root_name: String,
    /// Root-directory separator.
    pub root_directory: String,
    /// Everything after the root path.
    pub relative_path: String,
    /// Everything but the filename.
    pub parent_path: String,
    /// Last component.
    pub filename: String,
    /// Filename without its extension.
    pub stem: String,
    /// Extension including the dot.
    pub extension: String,
    /// Lexical normal form.
    pub normal: String,
    /// Whether the path is absolute.
    pub is_absolute: bool,
    /// Whether the path is relative.
    pub is_relative: bool,
    /// Whether every component is legal for the platform.
    pub is_valid: bool,
}

impl Decomposition {
    /// Parses `input` under `platform` and records every lexical query.
    #[must_use]
    pub fn from_path(input: &str, platform: Platform) -> Self {
        let path = Path::with_platform(input, platform);
        Self {
            input: input.to_string(),
            platform,
            rendered: path.to_string(),
            components: path.components().to_vec(),
            root_path: path.root_path().to_string(),
            root_name: path.root_name().to_string(),
            root_directory: path.root_directory().to_string(),
            relative_path: path.relative_path().to_string(),
            parent_path: path.parent_path().to_string(),
            filename: path.filename().to_string(),
            stem: path.stem(),
            extension: path.extension(),
            normal: path.lexically_normal().to_string(),
            is_absolute: path.is_absolute(),
            is_relative: path.is_relative(),
            is_valid: path.is_valid(),
        }
    }
}

/// Formats a batch of decompositions.
pub trait OutputFormatter {
    /// Format `items` into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, items: &[Decomposition]) -> Result<String>;
}

/// Available report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned `field: value` lines.
    #[default]
    Human,
    /// A JSON array of objects.
    Json,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }

    /// Formats `items` with this format's formatter.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render(self, items: &[Decomposition]) -> Result<String> {
        self.create_formatter().format(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_network_root() {
        let d = Decomposition::from_path("//host/share/file", Platform::Posix);
        assert_eq!(d.components, vec!["//host", "/", "share", "file"]);
        assert_eq!(d.root_name, "//host");
        assert_eq!(d.root_directory, "/");
        assert_eq!(d.root_path, "//host/");
        assert_eq!(d.relative_path, "share/file");
        assert_eq!(d.parent_path, "//host/share");
        assert!(d.is_absolute);
    }

    #[test]
    fn test_decompose_empty() {
        let d = Decomposition::from_path("", Platform::Posix);
        assert!(d.components.is_empty());
        assert_eq!(d.rendered, "");
        assert_eq!(d.normal, "");
        assert!(!d.is_absolute);
        assert!(!d.is_relative);
        assert!(!d.is_valid);
    }

    #[test]
    fn test_decompose_invalid_component() {
        let d = Decomposition::from_path("a/b?c", Platform::Posix);
        assert!(!d.is_valid);
        assert_eq!(d.filename, "b?c");
    }

    #[test]
    fn test_decompose_windows_drive() {
        let d = Decomposition::from_path("C:\\dir\\file.txt", Platform::Windows);
        assert_eq!(d.root_name, "C:");
        assert_eq!(d.root_directory, "\\");
        assert_eq!(d.stem, "file");
        assert_eq!(d.extension, ".txt");
        assert!(d.is_absolute);
    }

    #[test]
    fn test_default_format_is_human() {
        assert_eq!(OutputFormat::default(), OutputFormat::Human);
    }
}
