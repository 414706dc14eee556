//! Lexical algebra over [`Path`]: normalization and relative/absolute
//! composition. Nothing here touches the filesystem.

use super::types::{Path, DOT, DOT_DOT};
use crate::error::{Error, Result};

impl Path {
    /// Removes redundant `.` and `..` components.
    ///
    /// A leading `..` survives only when the path has no root-directory. Any
    /// later `..` removes the most recently kept component. A `.` survives
    /// only as the final component. An empty result becomes `"."`, except
    /// that the empty path normalizes to itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use cxpath::{Path, Platform};
    ///
    /// let p = |s| Path::with_platform(s, Platform::Posix);
    /// assert_eq!(p("foo/..").lexically_normal().to_string(), ".");
    /// assert_eq!(p("/../a/./b/../c").lexically_normal().to_string(), "/a/c");
    /// assert_eq!(p("../x/").lexically_normal().to_string(), "../x/");
    /// ```
    #[must_use]
    pub fn lexically_normal(&self) -> Self {
        let mut normal = Self::empty(self.platform);
        if self.is_empty() {
            return normal;
        }

        let relative = self.relative_path();
        let last = relative.len().saturating_sub(1);
        let mut first = true;
        for (i, component) in relative.iter().enumerate() {
            if component == DOT_DOT {
                if !first {
                    normal.pop_component();
                } else if !self.has_root_directory() {
                    normal.append_unchecked(&self.sibling(component));
                }
            } else if component == DOT {
                if i == last {
                    normal.append_unchecked(&self.sibling(component));
                }
            } else {
                first = false;
                normal.append_unchecked(&self.sibling(component));
            }
        }

        let mut rooted = self.root_path();
        rooted.append_unchecked(&normal);
        if rooted.is_empty() {
            return self.sibling(DOT);
        }
        rooted
    }

    /// Expresses `self` relative to `base` by stripping their common prefix.
    ///
    /// Returns an empty path when the two share no leading component, `"."`
    /// when they are equal, and otherwise whatever of `self` follows the
    /// first point of divergence.
    ///
    /// # Examples
    ///
    /// ```
    /// use cxpath::{Path, Platform};
    ///
    /// let p = |s| Path::with_platform(s, Platform::Posix);
    /// assert_eq!(p("/foo/bar/quux").lexically_relative(&p("/foo/bar")).to_string(), "quux");
    /// assert_eq!(p("/foo/bar/quux").lexically_relative(&p("/foo/bar/quux")).to_string(), ".");
    /// assert!(p("foo").lexically_relative(&p("/foo")).is_empty());
    /// ```
    #[must_use]
    pub fn lexically_relative(&self, base: &Self) -> Self {
        let common = self
            .components
            .iter()
            .zip(&base.components)
            .take_while(|(a, b)| a == b)
            .count();

        if common == 0 {
            return Self::empty(self.platform);
        }
        if common == self.len() && common == base.len() {
            return self.sibling(DOT);
        }

        let mut relative = Self::empty(self.platform);
        for component in &self.components[common..] {
            relative.append_unchecked(&self.sibling(component));
        }
        relative
    }

    /// Anchors `self` onto the absolute path `base`.
    ///
    /// A path with both root-name and root-directory is returned unchanged.
    /// A root-name alone must match `base`'s root-name and is spliced onto
    /// `base`'s root-directory and relative path. A root-directory alone
    /// borrows `base`'s root-name. Anything else is appended to `base`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadPath`] if `base` is not absolute, or if `self`
    /// names a different root than `base`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cxpath::{Path, Platform};
    ///
    /// let p = |s| Path::with_platform(s, Platform::Posix);
    /// let abs = p("quux").lexically_absolute(&p("/foo/bar")).unwrap();
    /// assert_eq!(abs.to_string(), "/foo/bar/quux");
    /// assert!(p("bar/quux").lexically_absolute(&p("foo")).is_err());
    /// ```
    pub fn lexically_absolute(&self, base: &Self) -> Result<Self> {
        if !base.is_absolute() {
            return Err(Error::bad_path(
                base,
                format!("cannot use a non-absolute base to absolutize '{self}'"),
            ));
        }

        match (self.has_root_name(), self.has_root_directory()) {
            (true, true) => Ok(self.clone()),
            (true, false) => {
                let root_name = self.root_name();
                if root_name != base.root_name() {
                    return Err(Error::bad_path(
                        self,
                        format!(
                            "root-name '{root_name}' does not match base root-name '{}'",
                            base.root_name()
                        ),
                    ));
                }
                let mut absolute = root_name;
                absolute.append_unchecked(&base.root_directory());
                absolute.append_unchecked(&base.relative_path());
                absolute.append_unchecked(&self.relative_path());
                Ok(absolute)
            }
            (false, true) => base.root_name().join(self),
            (false, false) => base.join(self),
        }
    }
}
