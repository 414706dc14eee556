//! Logging for the cxpath library and CLI.
//!
//! Library code only talks to the [`log`] facade. [`Logger`] is the stderr
//! backend the CLI installs behind it, filtered by a three-step [`LogLevel`].

use std::env;
use std::fmt;

use log::{LevelFilter, Metadata, Record};

use crate::config::environment::LOG_MODE_VAR;

/// Logging level for controlling output verbosity.
///
/// # Examples
///
/// ```
/// use cxpath::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all output.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Everything down to debug messages.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not `quiet`, `normal` or `verbose`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cxpath::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("loud").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The `log` crate filter this level admits.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Debug,
        }
    }
}

/// A stderr logger.
///
/// # Examples
///
/// ```
/// use cxpath::{Logger, LogLevel};
/// use log::{Level, Log, Metadata};
///
/// let logger = Logger::new(LogLevel::Normal);
/// assert!(logger.enabled(&Metadata::builder().level(Level::Warn).build()));
/// assert!(!logger.enabled(&Metadata::builder().level(Level::Debug).build()));
/// ```
#[derive(Debug)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Registers this logger as the global `log` backend.
    ///
    /// # Errors
    ///
    /// Fails if a global logger was already installed.
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        let filter = self.level.filter();
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(filter);
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level.filter()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Picks a logger from CLI flags, then `CXPATH_LOG_MODE`, then `Normal`.
///
/// `verbose` beats `quiet`. An unparseable `CXPATH_LOG_MODE` is ignored.
///
/// # Examples
///
/// ```
/// use cxpath::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
/// assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    if let Ok(env_value) = env::var(LOG_MODE_VAR) {
        if let Ok(level) = LogLevel::parse(&env_value) {
            return Logger::new(level);
        }
    }

    Logger::new(LogLevel::Normal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log};
    use serial_test::serial;

    #[test]
    fn test_log_level_display_and_parse() {
        for level in [LogLevel::Quiet, LogLevel::Normal, LogLevel::Verbose] {
            assert_eq!(LogLevel::parse(&level.to_string()).unwrap(), level);
        }
        assert_eq!(LogLevel::parse("Normal").unwrap(), LogLevel::Normal);
        assert!(LogLevel::parse("").is_err());
    }

    #[test]
    fn test_filters() {
        assert_eq!(LogLevel::Quiet.filter(), LevelFilter::Off);
        assert_eq!(LogLevel::Normal.filter(), LevelFilter::Warn);
        assert_eq!(LogLevel::Verbose.filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_enabled_follows_level() {
        let meta = |level| Metadata::builder().level(level).build();

        let normal = Logger::new(LogLevel::Normal);
        assert!(normal.enabled(&meta(Level::Error)));
        assert!(normal.enabled(&meta(Level::Warn)));
        assert!(!normal.enabled(&meta(Level::Debug)));

        let verbose = Logger::new(LogLevel::Verbose);
        assert!(verbose.enabled(&meta(Level::Debug)));
        assert!(!verbose.enabled(&meta(Level::Trace)));

        let quiet = Logger::new(LogLevel::Quiet);
        assert!(!quiet.enabled(&meta(Level::Error)));
    }

    #[test]
    fn test_logger_default() {
        assert_eq!(Logger::default().level(), LogLevel::Normal);
    }

    #[test]
    #[serial]
    fn test_init_logger_env() {
        let saved = env::var(LOG_MODE_VAR).ok();

        env::remove_var(LOG_MODE_VAR);
        assert_eq!(init_logger(false, false).level(), LogLevel::Normal);

        env::set_var(LOG_MODE_VAR, "verbose");
        assert_eq!(init_logger(false, false).level(), LogLevel::Verbose);
        assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);

        env::set_var(LOG_MODE_VAR, "invalid");
        assert_eq!(init_logger(false, false).level(), LogLevel::Normal);

        match saved {
            Some(val) => env::set_var(LOG_MODE_VAR, val),
            None => env::remove_var(LOG_MODE_VAR),
        }
    }
}
