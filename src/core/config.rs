//! Logger configuration

use super::destination::LogDestination;
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a [`Logger`](crate::core::Logger).
///
/// All fields have defaults; use the `with_*` builder methods to override
/// individual settings.
///
/// # Examples
///
/// ```
/// use embedded_logger::core::{LoggerConfig, LogLevel};
///
/// let config = LoggerConfig::new()
///     .with_log_directory("/tmp/app-logs")
///     .with_file_level(LogLevel::Warning)
///     .with_max_file_size(256 * 1024);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Minimum level emitted to the console
    pub console_level: LogLevel,
    /// Minimum level emitted to the log file
    pub file_level: LogLevel,
    /// Destination used when the caller does not specify one
    pub default_destination: LogDestination,

    /// Directory holding the current file and its numbered backups
    pub log_directory: PathBuf,
    /// Rotation threshold in bytes
    pub max_file_size: u64,
    /// Number of numbered backup files kept after rotation
    pub max_backup_files: usize,

    /// Dispatch entries through the background worker
    pub async_logging: bool,
    /// Colorize console output by level
    pub enable_colors: bool,
    /// Include the timestamp segment in formatted lines
    pub include_timestamp: bool,
    /// Include a ` (file:line)` suffix when the entry carries a location
    pub include_source_location: bool,

    /// strftime-style pattern for formatted timestamps
    pub timestamp_format: String,
    /// Log file name prefix
    pub file_prefix: String,
    /// Log file name extension, including the dot
    pub file_extension: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console_level: LogLevel::Debug,
            file_level: LogLevel::Info,
            default_destination: LogDestination::BOTH,
            log_directory: PathBuf::from("logs"),
            max_file_size: 1024 * 1024,
            max_backup_files: 5,
            async_logging: true,
            enable_colors: true,
            include_timestamp: true,
            include_source_location: false,
            timestamp_format: "%Y-%m-%d %H:%M:%S".to_string(),
            file_prefix: "embedded_log".to_string(),
            file_extension: ".txt".to_string(),
        }
    }
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_console_level(mut self, level: LogLevel) -> Self {
        self.console_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_file_level(mut self, level: LogLevel) -> Self {
        self.file_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_default_destination(mut self, destination: LogDestination) -> Self {
        self.default_destination = destination;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_log_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.log_directory = directory.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_max_backup_files(mut self, count: usize) -> Self {
        self.max_backup_files = count;
        self
    }

    /// Enable or disable the background worker.
    ///
    /// Takes effect on the next `initialize()`; an already-running logger
    /// keeps its current mode until restarted.
    #[must_use = "builder methods return a new value"]
    pub fn with_async_logging(mut self, enabled: bool) -> Self {
        self.async_logging = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_colors(mut self, enabled: bool) -> Self {
        self.enable_colors = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_timestamp(mut self, enabled: bool) -> Self {
        self.include_timestamp = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_source_location(mut self, enabled: bool) -> Self {
        self.include_source_location = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_timestamp_format(mut self, pattern: impl Into<String>) -> Self {
        self.timestamp_format = pattern.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_file_extension(mut self, extension: impl Into<String>) -> Self {
        self.file_extension = extension.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.console_level, LogLevel::Debug);
        assert_eq!(config.file_level, LogLevel::Info);
        assert_eq!(config.default_destination, LogDestination::BOTH);
        assert_eq!(config.max_file_size, 1024 * 1024);
        assert_eq!(config.max_backup_files, 5);
        assert!(config.async_logging);
        assert!(config.enable_colors);
        assert!(config.include_timestamp);
        assert!(!config.include_source_location);
        assert_eq!(config.file_prefix, "embedded_log");
        assert_eq!(config.file_extension, ".txt");
    }

    #[test]
    fn test_builder_methods() {
        let config = LoggerConfig::new()
            .with_console_level(LogLevel::Error)
            .with_file_level(LogLevel::Debug)
            .with_log_directory("/var/log/app")
            .with_max_file_size(4096)
            .with_max_backup_files(2)
            .with_async_logging(false)
            .with_colors(false)
            .with_file_prefix("app")
            .with_file_extension(".log");

        assert_eq!(config.console_level, LogLevel::Error);
        assert_eq!(config.file_level, LogLevel::Debug);
        assert_eq!(config.log_directory, PathBuf::from("/var/log/app"));
        assert_eq!(config.max_file_size, 4096);
        assert_eq!(config.max_backup_files, 2);
        assert!(!config.async_logging);
        assert!(!config.enable_colors);
        assert_eq!(config.file_prefix, "app");
        assert_eq!(config.file_extension, ".log");
    }
}
