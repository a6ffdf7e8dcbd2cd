//! Entry formatting
//!
//! Renders a [`LogEntry`] to a single line of text. Formatting is a pure
//! function of the entry and a [`FormatOptions`]; no shared state.

use super::config::LoggerConfig;
use super::log_entry::LogEntry;
use colored::Colorize;
use std::fmt::Write;

/// Width the level token is right-justified to
const LEVEL_WIDTH: usize = 8;
/// Width the component token is right-justified to
const COMPONENT_WIDTH: usize = 12;

/// Rendering options, derived from the configuration per destination.
///
/// Colors are only ever requested for console output; file output always
/// uses [`FormatOptions::file`].
#[derive(Debug, Clone, Copy)]
pub struct FormatOptions {
    pub colors: bool,
    pub include_timestamp: bool,
    pub include_source_location: bool,
}

impl FormatOptions {
    /// Options for the console destination
    #[must_use]
    pub fn console(config: &LoggerConfig) -> Self {
        Self {
            colors: config.enable_colors,
            include_timestamp: config.include_timestamp,
            include_source_location: config.include_source_location,
        }
    }

    /// Options for the file destination (never colorized)
    #[must_use]
    pub fn file(config: &LoggerConfig) -> Self {
        Self {
            colors: false,
            include_timestamp: config.include_timestamp,
            include_source_location: config.include_source_location,
        }
    }
}

/// Render one entry as a single line.
///
/// Layout: `[timestamp] [LEVEL] [COMPONENT] message`, level right-justified
/// to 8 columns and component to 12. Padding is alignment only; longer
/// tokens are not clipped. A ` (file:line)` suffix is appended when source
/// locations are enabled and the entry carries both fields.
#[must_use]
pub fn format_entry(entry: &LogEntry, options: &FormatOptions) -> String {
    let mut line = String::new();

    if options.include_timestamp {
        let _ = write!(line, "[{}] ", entry.timestamp);
    }

    let _ = write!(
        line,
        "[{:>level_width$}] [{:>component_width$}] {}",
        entry.level.to_str(),
        entry.component,
        entry.message,
        level_width = LEVEL_WIDTH,
        component_width = COMPONENT_WIDTH,
    );

    if options.include_source_location {
        if let (Some(file), Some(line_number)) = (&entry.file, entry.line) {
            let _ = write!(line, " ({}:{})", file, line_number);
        }
    }

    if options.colors {
        line.color(entry.level.color_code()).to_string()
    } else {
        line
    }
}
