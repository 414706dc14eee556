//! Configuration for cxpath.
//!
//! Settings are merged from several sources. Later sources win field by
//! field:
//!
//! 1. Built-in defaults
//! 2. User config (`~/.cxpath/config.yaml`, or `config.yaml` in a chosen
//!    directory)
//! 3. Environment variables (`CXPATH_*`)
//! 4. Programmatic overrides (via `ConfigBuilder::with_config`)
//!
//! # Examples
//!
//! ```
//! use cxpath::config::{Config, ConfigBuilder};
//! use cxpath::Platform;
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         platform: Some(Platform::Windows),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.platform_or_native(), Platform::Windows);
//! assert_eq!(config.symlink_depth_or_default(), 40);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;
