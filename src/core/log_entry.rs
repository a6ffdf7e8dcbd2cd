//! Log entry structure

use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};

/// One discrete log message.
///
/// Entries are created at the call site without timestamps; the logger
/// stamps `timestamp` and `timestamp_ms` at submission time. Once queued an
/// entry is never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    /// Component/module tag, e.g. "WIFI" or "SENSOR"
    pub component: String,
    pub message: String,
    /// Source file name, rendered as a ` (file:line)` suffix when enabled
    pub file: Option<String>,
    pub line: Option<u32>,
    /// Formatted wall-clock timestamp, stamped at submission
    pub timestamp: String,
    /// Milliseconds since the Unix epoch, stamped at submission
    pub timestamp_ms: u64,
}

impl LogEntry {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so an entry always renders as a single output line.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: LogLevel, component: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            component: component.into(),
            message: Self::sanitize_message(&message.into()),
            file: None,
            line: None,
            timestamp: String::new(),
            timestamp_ms: 0,
        }
    }

    pub fn with_location(mut self, file: &str, line: u32) -> Self {
        self.file = Some(file.to_string());
        self.line = Some(line);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_is_unstamped() {
        let entry = LogEntry::new(LogLevel::Info, "APP", "started");
        assert!(entry.timestamp.is_empty());
        assert_eq!(entry.timestamp_ms, 0);
        assert!(entry.file.is_none());
        assert!(entry.line.is_none());
    }

    #[test]
    fn test_message_sanitization() {
        let entry = LogEntry::new(LogLevel::Info, "APP", "line one\nline two\r\tend");
        assert_eq!(entry.message, "line one\\nline two\\r\\tend");
    }

    #[test]
    fn test_with_location() {
        let entry = LogEntry::new(LogLevel::Error, "SENSOR", "timeout").with_location("sensor.rs", 42);
        assert_eq!(entry.file.as_deref(), Some("sensor.rs"));
        assert_eq!(entry.line, Some(42));
    }
}
