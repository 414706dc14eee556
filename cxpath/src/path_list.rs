//! Delimiter-separated lists of paths, such as `PATH` or `LD_LIBRARY_PATH`.
//!
//! Splitting does no unescaping: a path is assumed never to contain the
//! list delimiter itself.
//!
//! # Examples
//!
//! ```
//! use cxpath::{PathList, Platform};
//!
//! let list = PathList::with_platform("/usr/bin:/bin:", Platform::Posix);
//! assert_eq!(list.len(), 3);
//! assert!(list.get(2).is_some_and(|p| p.is_empty()));
//! assert_eq!(list.to_string(), "/usr/bin:/bin:");
//! ```

use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::path::Path;
use crate::policy::Platform;

/// An ordered list of paths joined by the platform's list delimiter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathList {
    paths: Vec<Path>,
    platform: Platform,
}

impl PathList {
    /// Splits `text` with the native platform's delimiter.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::with_platform(text, Platform::native())
    }

    /// Splits `text` with `platform`'s delimiter. Every delimiter starts a
    /// new entry, so empty text yields one empty path.
    #[must_use]
    pub fn with_platform(text: &str, platform: Platform) -> Self {
        let paths = text
            .split(platform.list_delimiter())
            .map(|entry| Path::with_platform(entry, platform))
            .collect();
        Self { paths, platform }
    }

    /// An empty list for `platform`.
    #[must_use]
    pub fn new(platform: Platform) -> Self {
        Self {
            paths: Vec::new(),
            platform,
        }
    }

    /// The grammar entries are parsed with.
    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// The character between entries.
    #[must_use]
    pub fn delimiter(&self) -> char {
        self.platform.list_delimiter()
    }

    /// Whether `c` is the list delimiter.
    #[must_use]
    pub fn is_delimiter(&self, c: char) -> bool {
        c == self.delimiter()
    }

    /// Appends an entry.
    pub fn push(&mut self, path: Path) {
        self.paths.push(path);
    }

    /// Iterates over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, Path> {
        self.paths.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// The entry at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Path> {
        self.paths.get(index)
    }

    /// The final entry.
    #[must_use]
    pub fn last(&self) -> Option<&Path> {
        self.paths.last()
    }
}

impl fmt::Display for PathList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let delimiter = self.delimiter();
        for (i, path) in self.paths.iter().enumerate() {
            if i > 0 {
                write!(f, "{delimiter}")?;
            }
            write!(f, "{path}")?;
        }
        Ok(())
    }
}

impl FromStr for PathList {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl AddAssign<Path> for PathList {
    fn add_assign(&mut self, rhs: Path) {
        self.push(rhs);
    }
}

impl Add<Path> for PathList {
    type Output = Self;

    fn add(mut self, rhs: Path) -> Self {
        self.push(rhs);
        self
    }
}

impl Extend<Path> for PathList {
    fn extend<I: IntoIterator<Item = Path>>(&mut self, iter: I) {
        self.paths.extend(iter);
    }
}

impl FromIterator<Path> for PathList {
    fn from_iter<I: IntoIterator<Item = Path>>(iter: I) -> Self {
        let mut list = Self::new(Platform::native());
        list.extend(iter);
        list
    }
}

impl IntoIterator for PathList {
    type Item = Path;
    type IntoIter = std::vec::IntoIter<Path>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}

impl<'a> IntoIterator for &'a PathList {
    type Item = &'a Path;
    type IntoIter = std::slice::Iter<'a, Path>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

impl Serialize for PathList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PathList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(Self::parse(&text))
    }
}
