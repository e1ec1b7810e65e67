//! Launch configuration for gwtrun
//!
//! [`LaunchOptions`] is the explicit configuration struct passed into the
//! launch orchestrator; the CLI binds its flags onto it one-to-one. All
//! fields have documented defaults:
//!
//! - `log_level`: GWT tree-logger level; defaults to a level derived from
//!   the tool's own logging verbosity
//! - `modules`: comma-delimited module list; defaults to discovery from
//!   the selected projects' plugin configuration
//! - `projects`: comma-delimited reactor project identifiers; defaults to
//!   the `gwt-app` projects (or the sole project of a single-project
//!   reactor)
//! - `classpath_scope`: dependency scope filter; defaults to `runtime`
//! - `source_level`: Java source level forwarded as `-sourceLevel`; no
//!   default (flag omitted)
//! - `jvm_args` / `system_properties`: forwarded to the forked JVM; empty
//!   by default, system properties keep configuration order

use std::fmt;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

use crate::graph::ScopeFilter;

/// GWT tree-logger level passed as `-logLevel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Trace,
    Debug,
    Spam,
    All,
}

impl LogLevel {
    /// Derives a level from the ambient tracing verbosity, mirroring how
    /// the forked process should match the tool's own log output.
    pub fn from_ambient() -> Self {
        let current = LevelFilter::current();
        if current >= LevelFilter::DEBUG {
            LogLevel::Debug
        } else if current >= LevelFilter::INFO {
            LogLevel::Info
        } else if current >= LevelFilter::WARN {
            LogLevel::Warn
        } else {
            LogLevel::Error
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Spam => "SPAM",
            LogLevel::All => "ALL",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ERROR" => Ok(LogLevel::Error),
            "WARN" => Ok(LogLevel::Warn),
            "INFO" => Ok(LogLevel::Info),
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "SPAM" => Ok(LogLevel::Spam),
            "ALL" => Ok(LogLevel::All),
            _ => Err(format!(
                "Invalid GWT log level: {}. Valid options: ERROR, WARN, INFO, TRACE, DEBUG, SPAM, ALL",
                s
            )),
        }
    }
}

/// Options controlling project selection, module discovery, classpath
/// assembly, and the forked JVM's arguments.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// GWT tree-logger level; `None` derives from ambient verbosity.
    pub log_level: Option<LogLevel>,

    /// Comma-delimited list of the modules to run.
    pub modules: Option<String>,

    /// Comma-delimited list of the reactor projects to run.
    pub projects: Option<String>,

    /// Dependency scope to use for the classpath.
    pub classpath_scope: ScopeFilter,

    /// Java source level, forwarded as `-sourceLevel`.
    pub source_level: Option<String>,

    /// Arguments for the forked JVM (e.g. `-Xmx1g`).
    pub jvm_args: Vec<String>,

    /// System properties for the forked JVM, in configuration order.
    pub system_properties: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_round_trip() {
        for name in ["ERROR", "WARN", "INFO", "TRACE", "DEBUG", "SPAM", "ALL"] {
            let level: LogLevel = name.parse().unwrap();
            assert_eq!(level.to_string(), name);
        }
    }

    #[test]
    fn test_log_level_parse_case_insensitive() {
        assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("Info".parse::<LogLevel>().unwrap(), LogLevel::Info);
    }

    #[test]
    fn test_log_level_parse_invalid() {
        let result = "verbose".parse::<LogLevel>();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("verbose"));
    }

    #[test]
    fn test_default_options() {
        let options = LaunchOptions::default();
        assert!(options.log_level.is_none());
        assert!(options.modules.is_none());
        assert!(options.projects.is_none());
        assert_eq!(options.classpath_scope, ScopeFilter::Runtime);
        assert!(options.source_level.is_none());
        assert!(options.jvm_args.is_empty());
        assert!(options.system_properties.is_empty());
    }
}
