//! Per-platform path grammar.
//!
//! A [`PathPolicy`] supplies everything the parser needs to know about a
//! platform: which characters separate components, which one is written back
//! out, how a root-name is recognized, which components are acceptable, and
//! which character delimits entries of a path list. Policies are pure and
//! stateless; [`Platform`] is the small `Copy` handle that paths carry around
//! to find their policy.
//!
//! # Examples
//!
//! ```
//! use cxpath::Platform;
//!
//! let posix = Platform::Posix.policy();
//! assert_eq!(posix.preferred_separator(), '/');
//! assert_eq!(posix.root_name_len("//net/share"), Some(5));
//! assert_eq!(posix.root_name_len("///net"), None);
//!
//! let windows = Platform::Windows.policy();
//! assert_eq!(windows.root_name_len("C:\\Users"), Some(2));
//! assert_eq!(windows.list_delimiter(), ';');
//! ```

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Platform-specific rules for parsing and validating paths.
pub trait PathPolicy: fmt::Debug + Send + Sync {
    /// All characters treated as separators, preferred separator first.
    fn separators(&self) -> &'static [char];

    /// The separator written when a path is re-serialized.
    fn preferred_separator(&self) -> char {
        self.separators()[0]
    }

    /// Whether `c` separates components.
    fn is_separator(&self, c: char) -> bool {
        self.separators().contains(&c)
    }

    /// Length in bytes of the root-name at the front of `text`, if the
    /// grammar recognizes one.
    fn root_name_len(&self, text: &str) -> Option<usize>;

    /// Whether a separator belongs between `root_name` and a following
    /// relative component when composing text.
    fn separates_root_name(&self, _root_name: &str) -> bool {
        true
    }

    /// Whether a single component is acceptable on this platform.
    fn is_valid_component(&self, component: &str) -> bool;

    /// Whether a fully parsed path is acceptable. `root_name` indexes the
    /// root-name component, if any.
    fn is_valid(&self, components: &[String], root_name: Option<usize>) -> bool {
        components
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != root_name)
            .all(|(_, c)| self.is_valid_component(c))
    }

    /// Delimiter between entries of a path list.
    fn list_delimiter(&self) -> char;
}

/// Length of a `//name` style root-name: exactly two separators followed by
/// a non-separator run up to the next separator.
fn network_root_name_len(policy: &dyn PathPolicy, text: &str) -> Option<usize> {
    let mut chars = text.chars();
    let (Some(a), Some(b), Some(c)) = (chars.next(), chars.next(), chars.next()) else {
        return None;
    };
    if !policy.is_separator(a) || !policy.is_separator(b) || policy.is_separator(c) {
        return None;
    }

    // both leading separators are single-byte
    let rest = &text[2..];
    let end = rest
        .find(|ch| policy.is_separator(ch))
        .map_or(text.len(), |i| i + 2);
    Some(end)
}

/// POSIX grammar with the conservative character policy used on Linux.
#[derive(Debug, Clone, Copy, Default)]
pub struct PosixPolicy;

impl PosixPolicy {
    /// Characters rejected in any component until the string form learns to
    /// escape them.
    pub const ILLEGAL: &'static str = ":()&;%< >|\\?*\"'";
}

impl PathPolicy for PosixPolicy {
    fn separators(&self) -> &'static [char] {
        &['/', '\\']
    }

    fn root_name_len(&self, text: &str) -> Option<usize> {
        network_root_name_len(self, text)
    }

    fn is_valid_component(&self, component: &str) -> bool {
        !component.contains(|c| Self::ILLEGAL.contains(c) || c == '\0')
    }

    fn is_valid(&self, components: &[String], _root_name: Option<usize>) -> bool {
        components.iter().all(|c| self.is_valid_component(c))
    }

    fn list_delimiter(&self) -> char {
        ':'
    }
}

/// Drive-letter and UNC grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsPolicy;

impl WindowsPolicy {
    /// Characters the Win32 namespace reserves inside a component.
    pub const ILLEGAL: &'static str = "<>:\"|?*";

    fn is_drive(root_name: &str) -> bool {
        let bytes = root_name.as_bytes();
        bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
    }
}

impl PathPolicy for WindowsPolicy {
    fn separators(&self) -> &'static [char] {
        &['\\', '/']
    }

    fn root_name_len(&self, text: &str) -> Option<usize> {
        if text.get(..2).is_some_and(Self::is_drive) {
            return Some(2);
        }
        network_root_name_len(self, text)
    }

    fn separates_root_name(&self, root_name: &str) -> bool {
        !Self::is_drive(root_name)
    }

    fn is_valid_component(&self, component: &str) -> bool {
        !component.contains(|c: char| Self::ILLEGAL.contains(c) || c.is_ascii_control())
    }

    fn list_delimiter(&self) -> char {
        ';'
    }
}

static POSIX: PosixPolicy = PosixPolicy;
static WINDOWS: WindowsPolicy = WindowsPolicy;

/// Selects which [`PathPolicy`] a path is parsed with.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// `/`-separated paths with `//name` network root-names.
    #[cfg_attr(not(windows), default)]
    Posix,
    /// `\`-separated paths with drive and UNC root-names.
    #[cfg_attr(windows, default)]
    Windows,
}

impl Platform {
    /// The platform this binary was compiled for.
    #[must_use]
    pub fn native() -> Self {
        Self::default()
    }

    /// The grammar for this platform.
    #[must_use]
    pub fn policy(self) -> &'static dyn PathPolicy {
        match self {
            Self::Posix => &POSIX,
            Self::Windows => &WINDOWS,
        }
    }

    /// Delimiter between entries of a path list.
    #[must_use]
    pub fn list_delimiter(self) -> char {
        self.policy().list_delimiter()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Posix => write!(f, "posix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "posix" | "unix" | "linux" => Ok(Self::Posix),
            "windows" | "win" => Ok(Self::Windows),
            _ => Err(Error::Validation {
                field: "platform".into(),
                message: format!("unknown platform '{s}' (expected posix or windows)"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posix_separators() {
        let p = Platform::Posix.policy();
        assert_eq!(p.preferred_separator(), '/');
        assert!(p.is_separator('/'));
        assert!(p.is_separator('\\'));
        assert!(!p.is_separator(':'));
    }

    #[test]
    fn test_posix_root_name() {
        let p = Platform::Posix.policy();
        assert_eq!(p.root_name_len("//net"), Some(5));
        assert_eq!(p.root_name_len("//net/foo"), Some(5));
        assert_eq!(p.root_name_len("\\\\net/foo"), Some(5));
        assert_eq!(p.root_name_len("///foo"), None);
        assert_eq!(p.root_name_len("//"), None);
        assert_eq!(p.root_name_len("/foo"), None);
        assert_eq!(p.root_name_len("foo"), None);
        assert_eq!(p.root_name_len(""), None);
    }

    #[test]
    fn test_posix_validity() {
        let p = Platform::Posix.policy();
        assert!(p.is_valid_component("foo.txt"));
        assert!(p.is_valid_component(".."));
        for bad in ["C:", "a b", "x*", "q?", "semi;", "pipe|", "quote'", "pct%"] {
            assert!(!p.is_valid_component(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_windows_root_name() {
        let p = Platform::Windows.policy();
        assert_eq!(p.root_name_len("C:"), Some(2));
        assert_eq!(p.root_name_len("c:\\foo"), Some(2));
        assert_eq!(p.root_name_len("C:foo"), Some(2));
        assert_eq!(p.root_name_len("\\\\server\\share"), Some(8));
        assert_eq!(p.root_name_len("1:foo"), None);
        assert_eq!(p.root_name_len("\\foo"), None);
    }

    #[test]
    fn test_windows_root_name_non_ascii() {
        let p = Platform::Windows.policy();
        assert_eq!(p.root_name_len("a\u{20ac}x"), None);
        assert_eq!(p.root_name_len("\u{20ac}"), None);
        assert_eq!(p.root_name_len("\u{e9}:"), None);

        let path = crate::Path::with_platform("a\u{20ac}x\\y", Platform::Windows);
        assert!(!path.has_root_name());
        assert_eq!(path.to_string(), "a\u{20ac}x\\y");
    }

    #[test]
    fn test_windows_drive_is_not_separated() {
        let p = Platform::Windows.policy();
        assert!(!p.separates_root_name("C:"));
        assert!(p.separates_root_name("\\\\server"));
    }

    #[test]
    fn test_windows_validity_skips_root_name() {
        let p = Platform::Windows.policy();
        let components = vec!["C:".to_string(), "\\".to_string(), "a.txt".to_string()];
        assert!(p.is_valid(&components, Some(0)));
        let bad = vec!["dir".to_string(), "a:b".to_string()];
        assert!(!p.is_valid(&bad, None));
    }

    #[test]
    fn test_list_delimiters() {
        assert_eq!(Platform::Posix.list_delimiter(), ':');
        assert_eq!(Platform::Windows.list_delimiter(), ';');
    }

    #[test]
    fn test_platform_parse_and_display() {
        assert_eq!("posix".parse::<Platform>().unwrap(), Platform::Posix);
        assert_eq!("WINDOWS".parse::<Platform>().unwrap(), Platform::Windows);
        assert!("amiga".parse::<Platform>().is_err());
        assert_eq!(Platform::Posix.to_string(), "posix");
        assert_eq!(Platform::Windows.to_string(), "windows");
    }

    #[test]
    #[cfg(unix)]
    fn test_native_is_posix_on_unix() {
        assert_eq!(Platform::native(), Platform::Posix);
    }
}
