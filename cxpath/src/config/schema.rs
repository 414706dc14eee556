//! Configuration schema.

use serde::{Deserialize, Serialize};

use crate::policy::Platform;
use crate::shell::DEFAULT_MAX_SYMLINK_DEPTH;

/// Complete configuration structure.
///
/// Every field is optional so that sources can be layered; unset fields fall
/// back to built-in defaults when read through the accessor methods.
///
/// # Examples
///
/// ```
/// use cxpath::config::Config;
/// use cxpath::Platform;
///
/// let config: Config = serde_yaml::from_str("platform: windows\nmax_symlink_depth: 8\n").unwrap();
/// assert_eq!(config.platform, Some(Platform::Windows));
/// assert_eq!(config.symlink_depth_or_default(), 8);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path grammar used for parsing and rendering.
    pub platform: Option<Platform>,

    /// Symlink substitutions allowed during one canonicalization.
    pub max_symlink_depth: Option<usize>,

    /// Log verbosity: `quiet`, `normal` or `verbose`.
    pub log_mode: Option<String>,
}

impl Config {
    /// The configured platform, or the one cxpath was built for.
    #[must_use]
    pub fn platform_or_native(&self) -> Platform {
        self.platform.unwrap_or_else(Platform::native)
    }

    /// The configured symlink bound, or [`DEFAULT_MAX_SYMLINK_DEPTH`].
    #[must_use]
    pub fn symlink_depth_or_default(&self) -> usize {
        self.max_symlink_depth.unwrap_or(DEFAULT_MAX_SYMLINK_DEPTH)
    }
}
