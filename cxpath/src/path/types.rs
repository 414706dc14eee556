//! The [`Path`] value type: construction, rendering, decomposition and
//! composition.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::parse::{parse, Parsed};
use crate::error::{Error, Result};
use crate::policy::{PathPolicy, Platform};

pub(crate) const DOT: &str = ".";
pub(crate) const DOT_DOT: &str = "..";

/// A parsed filesystem path.
///
/// A `Path` is an ordered list of string components plus the positions of
/// its root-name, root-directory, first relative component and filename.
/// Every mutation rebuilds the text form and parses it again, so the indices
/// always agree with what the grammar would produce from scratch.
///
/// Equality, ordering and hashing look only at the components.
///
/// # Examples
///
/// ```
/// use cxpath::{Path, Platform};
///
/// let p = Path::with_platform("/foo/bar/quux", Platform::Posix);
/// assert_eq!(p.root_directory().to_string(), "/");
/// assert_eq!(p.relative_path().to_string(), "foo/bar/quux");
/// assert_eq!(p.filename().to_string(), "quux");
/// assert!(p.is_absolute());
/// ```
#[derive(Debug, Clone)]
pub struct Path {
    pub(super) components: Vec<String>,
    pub(super) root_name: Option<usize>,
    pub(super) root_dir: Option<usize>,
    pub(super) relative_start: Option<usize>,
    pub(super) filename: Option<usize>,
    pub(super) platform: Platform,
}

impl Path {
    /// Parses `text` with the native platform grammar.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self::with_platform(text, Platform::native())
    }

    /// Parses `text` with an explicit platform grammar.
    #[must_use]
    pub fn with_platform(text: &str, platform: Platform) -> Self {
        let Parsed {
            components,
            root_name,
            root_dir,
            relative_start,
            filename,
        } = parse(text, platform.policy());
        Self {
            components,
            root_name,
            root_dir,
            relative_start,
            filename,
            platform,
        }
    }

    /// An empty path for `platform`.
    #[must_use]
    pub fn empty(platform: Platform) -> Self {
        Self::with_platform("", platform)
    }

    /// The grammar this path was parsed with.
    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub(super) fn policy(&self) -> &'static dyn PathPolicy {
        self.platform.policy()
    }

    /// Builds a sibling path from `text` using this path's platform.
    pub(super) fn sibling(&self, text: &str) -> Self {
        Self::with_platform(text, self.platform)
    }

    /// All components in order.
    #[must_use]
    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// Iterates over the components as string slices.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + '_ {
        self.components.iter().map(String::as_str)
    }

    /// Number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the path has no components at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// The component at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.components.get(index).map(String::as_str)
    }

    /// Whether `c` is a separator in this path's grammar.
    #[must_use]
    pub fn is_separator(&self, c: char) -> bool {
        self.policy().is_separator(c)
    }

    /// The separator used when this path is rendered.
    #[must_use]
    pub fn preferred_separator(&self) -> char {
        self.policy().preferred_separator()
    }

    /// Whether the path is non-empty and every component passes the
    /// platform's character policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use cxpath::{Path, Platform};
    ///
    /// assert!(!Path::with_platform("", Platform::Posix).is_valid());
    /// assert!(Path::with_platform("/usr/bin", Platform::Posix).is_valid());
    /// assert!(!Path::with_platform("/tmp/a b", Platform::Posix).is_valid());
    /// ```
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.is_empty() && self.policy().is_valid(&self.components, self.root_name)
    }

    /// Whether the path carries a root-directory. Empty paths are neither
    /// absolute nor relative.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        !self.is_empty() && self.root_dir.is_some()
    }

    /// Whether the path is non-empty and not absolute.
    #[must_use]
    pub fn is_relative(&self) -> bool {
        !self.is_empty() && !self.is_absolute()
    }

    fn component(&self, index: Option<usize>) -> Self {
        match index.and_then(|i| self.components.get(i)) {
            Some(text) => self.sibling(text),
            None => Self::empty(self.platform),
        }
    }

    /// The last component, or the root component when the path names only a
    /// root.
    #[must_use]
    pub fn filename(&self) -> Self {
        self.component(self.filename)
    }

    /// The root-name, such as `//net` or `C:`.
    #[must_use]
    pub fn root_name(&self) -> Self {
        self.component(self.root_name)
    }

    /// The root-directory separator.
    #[must_use]
    pub fn root_directory(&self) -> Self {
        self.component(self.root_dir)
    }

    /// Root-name followed by root-directory.
    #[must_use]
    pub fn root_path(&self) -> Self {
        let mut root = self.root_name();
        root.append_unchecked(&self.root_directory());
        root
    }

    /// Everything but the last component.
    ///
    /// # Examples
    ///
    /// ```
    /// use cxpath::{Path, Platform};
    ///
    /// let p = Path::with_platform("/foo/bar", Platform::Posix);
    /// assert_eq!(p.parent_path().to_string(), "/foo");
    /// assert!(Path::with_platform("foo", Platform::Posix).parent_path().is_empty());
    /// ```
    #[must_use]
    pub fn parent_path(&self) -> Self {
        let mut parent = Self::empty(self.platform);
        if self.len() <= 1 {
            return parent;
        }
        for text in &self.components[..self.len() - 1] {
            parent.append_unchecked(&self.sibling(text));
        }
        parent
    }

    /// Every component after the root, including the filename.
    #[must_use]
    pub fn relative_path(&self) -> Self {
        let mut relative = Self::empty(self.platform);
        let Some(filename) = self.filename else {
            return relative;
        };
        if Some(filename) == self.root_name || Some(filename) == self.root_dir {
            return relative;
        }
        let first = self.relative_start.unwrap_or(filename);
        for text in &self.components[first..] {
            relative.append_unchecked(&self.sibling(text));
        }
        relative
    }

    /// Whether the path has a root-name or a root-directory.
    #[must_use]
    pub fn has_root_path(&self) -> bool {
        self.has_root_name() || self.has_root_directory()
    }

    /// Whether the path has a root-name.
    #[must_use]
    pub fn has_root_name(&self) -> bool {
        self.root_name.is_some()
    }

    /// Whether the path has a root-directory.
    #[must_use]
    pub fn has_root_directory(&self) -> bool {
        self.root_dir.is_some()
    }

    /// Byte offset of the extension's dot within `name`, if any.
    fn extension_pos(name: &str) -> Option<usize> {
        if name == DOT || name == DOT_DOT {
            return None;
        }
        name.rfind('.').filter(|&pos| pos > 0)
    }

    /// The filename without its extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use cxpath::{Path, Platform};
    ///
    /// let p = |s| Path::with_platform(s, Platform::Posix);
    /// assert_eq!(p("dir/stem.txt").stem(), "stem");
    /// assert_eq!(p(".foorc").stem(), ".foorc");
    /// assert_eq!(p("..").stem(), "..");
    /// ```
    #[must_use]
    pub fn stem(&self) -> String {
        let name = self.filename().to_string();
        match Self::extension_pos(&name) {
            Some(pos) => name[..pos].to_string(),
            None => name,
        }
    }

    /// The filename's extension including its leading dot, or an empty
    /// string. A trailing dot yields `"."`.
    #[must_use]
    pub fn extension(&self) -> String {
        let name = self.filename().to_string();
        Self::extension_pos(&name).map_or_else(String::new, |pos| name[pos..].to_string())
    }

    /// Replaces this path with the result of parsing `text`.
    fn reparse(&mut self, text: &str) {
        *self = self.sibling(text);
    }

    /// Text-level append that skips the root-name conflict check.
    pub(crate) fn append_unchecked(&mut self, rhs: &Self) {
        let mut lhs = self.to_string();
        let rhs = rhs.to_string();
        let needs_separator = match (lhs.chars().last(), rhs.chars().next()) {
            (Some(last), Some(first)) => {
                !self.is_separator(last) && !self.is_separator(first) && !self.ends_in_drive()
            }
            _ => false,
        };
        if needs_separator {
            lhs.push(self.preferred_separator());
        }
        lhs.push_str(&rhs);
        self.reparse(&lhs);
    }

    /// Whether the path is exactly a root-name that does not take a
    /// separator before relative components.
    fn ends_in_drive(&self) -> bool {
        self.len() == 1
            && self.root_name == Some(0)
            && !self.policy().separates_root_name(&self.components[0])
    }

    /// Appends `rhs` as a child, inserting a separator if neither side
    /// supplies one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadPath`] if both paths carry a root-name.
    ///
    /// # Examples
    ///
    /// ```
    /// use cxpath::{Path, Platform};
    ///
    /// let mut p = Path::with_platform("/foo", Platform::Posix);
    /// p.push(&Path::with_platform("bar", Platform::Posix)).unwrap();
    /// assert_eq!(p.to_string(), "/foo/bar");
    ///
    /// let mut net = Path::with_platform("//quux", Platform::Posix);
    /// assert!(net.push(&Path::with_platform("//net/foo", Platform::Posix)).is_err());
    /// ```
    pub fn push(&mut self, rhs: &Self) -> Result<()> {
        if self.has_root_name() && rhs.has_root_name() {
            return Err(Error::bad_path(
                rhs,
                format!("cannot append a root-name onto '{self}', which already has one"),
            ));
        }
        self.append_unchecked(rhs);
        Ok(())
    }

    /// Returns `self` with `rhs` appended.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadPath`] if both paths carry a root-name.
    pub fn join(&self, rhs: &Self) -> Result<Self> {
        let mut joined = self.clone();
        joined.push(rhs)?;
        Ok(joined)
    }

    /// Appends `rhs` as raw text with no separator insertion.
    ///
    /// # Examples
    ///
    /// ```
    /// use cxpath::{Path, Platform};
    ///
    /// let mut p = Path::with_platform("/tmp/file", Platform::Posix);
    /// p.concat(&Path::with_platform(".bak", Platform::Posix));
    /// assert_eq!(p.to_string(), "/tmp/file.bak");
    /// ```
    pub fn concat(&mut self, rhs: &Self) {
        let text = format!("{self}{rhs}");
        self.reparse(&text);
    }

    /// Drops the last component without normalizing what remains.
    pub(super) fn pop_component(&mut self) {
        if self.components.pop().is_none() {
            return;
        }
        let len = self.components.len();
        for index in [
            &mut self.root_name,
            &mut self.root_dir,
            &mut self.relative_start,
            &mut self.filename,
        ] {
            if index.is_some_and(|i| i >= len) {
                *index = None;
            }
        }
        let text = self.to_string();
        self.reparse(&text);
    }

    /// Drops the last component and normalizes the remainder.
    ///
    /// # Examples
    ///
    /// ```
    /// use cxpath::{Path, Platform};
    ///
    /// let mut p = Path::with_platform("/foo/bar/baz", Platform::Posix);
    /// p.remove_filename();
    /// assert_eq!(p.to_string(), "/foo/bar");
    ///
    /// // a `.` left last survives normalization
    /// let mut p = Path::with_platform("/foo/./bar", Platform::Posix);
    /// p.remove_filename();
    /// assert_eq!(p.to_string(), "/foo/");
    /// ```
    pub fn remove_filename(&mut self) {
        if self.is_empty() {
            return;
        }
        self.pop_component();
        self.normalize();
    }

    /// Strips the filename's extension, if it has one.
    pub fn remove_extension(&mut self) {
        let name = self.filename().to_string();
        let Some(pos) = Self::extension_pos(&name) else {
            return;
        };
        let stem = self.sibling(&name[..pos]);
        self.remove_filename();
        self.append_unchecked(&stem);
    }

    /// Replaces this path with its lexically normal form.
    pub fn normalize(&mut self) {
        *self = self.lexically_normal();
    }

    /// Resets to the empty path.
    pub fn clear(&mut self) {
        self.reparse("");
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let policy = self.policy();
        let mut text = String::new();
        for (i, component) in self.components.iter().enumerate() {
            if let Some(last) = text.chars().last() {
                let after_drive = i > 0
                    && self.root_name == Some(i - 1)
                    && !policy.separates_root_name(&self.components[i - 1]);
                if !policy.is_separator(last) && self.root_dir != Some(i) && !after_drive {
                    text.push(policy.preferred_separator());
                }
            }
            if text.is_empty() || self.filename != Some(i) || component != DOT {
                text.push_str(component);
            }
        }
        f.write_str(&text)
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components
    }
}

impl Eq for Path {}

impl PartialOrd for Path {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Path {
    fn cmp(&self, other: &Self) -> Ordering {
        self.components.cmp(&other.components)
    }
}

impl Hash for Path {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.components.hash(state);
    }
}

impl Default for Path {
    fn default() -> Self {
        Self::empty(Platform::native())
    }
}

impl From<&str> for Path {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Path {
    fn from(text: String) -> Self {
        Self::new(&text)
    }
}

impl FromStr for Path {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl AddAssign<&Path> for Path {
    fn add_assign(&mut self, rhs: &Path) {
        self.concat(rhs);
    }
}

impl Add<&Path> for &Path {
    type Output = Path;

    fn add(self, rhs: &Path) -> Path {
        let mut out = self.clone();
        out.concat(rhs);
        out
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(Self::new(&text))
    }
}
