//! Convenience macros dispatching through the process-wide logger.
//!
//! Each macro looks up the global handle installed with
//! [`set_global_logger`](crate::core::set_global_logger) and is a silent
//! no-op when none is installed, so library code can log unconditionally.
//!
//! # Examples
//!
//! ```
//! use embedded_logger::core::{set_global_logger, Logger, LoggerConfig};
//! use embedded_logger::{el_info, elf_error};
//! use std::sync::Arc;
//!
//! let logger = Arc::new(Logger::new(LoggerConfig::default()));
//! set_global_logger(Arc::clone(&logger));
//!
//! el_info!("APP", "application started");
//! elf_error!("SENSOR", "read failed after {} retries", 3);
//! ```

/// Log a debug message through the global logger.
#[macro_export]
macro_rules! el_debug {
    ($component:expr, $message:expr) => {
        if let Some(logger) = $crate::core::global_logger() {
            logger.debug($component, $message);
        }
    };
}

/// Log an info message through the global logger.
#[macro_export]
macro_rules! el_info {
    ($component:expr, $message:expr) => {
        if let Some(logger) = $crate::core::global_logger() {
            logger.info($component, $message);
        }
    };
}

/// Log a warning message through the global logger.
#[macro_export]
macro_rules! el_warning {
    ($component:expr, $message:expr) => {
        if let Some(logger) = $crate::core::global_logger() {
            logger.warning($component, $message);
        }
    };
}

/// Log an error message through the global logger.
#[macro_export]
macro_rules! el_error {
    ($component:expr, $message:expr) => {
        if let Some(logger) = $crate::core::global_logger() {
            logger.error($component, $message);
        }
    };
}

/// Log a critical message through the global logger.
#[macro_export]
macro_rules! el_critical {
    ($component:expr, $message:expr) => {
        if let Some(logger) = $crate::core::global_logger() {
            logger.critical($component, $message);
        }
    };
}

/// Log a formatted message at an explicit level through the global logger.
///
/// The rendered message is subject to the same truncation as
/// [`Logger::logf`](crate::core::Logger::logf).
#[macro_export]
macro_rules! el_logf {
    ($level:expr, $component:expr, $($arg:tt)+) => {
        if let Some(logger) = $crate::core::global_logger() {
            logger.logf($level, $component, format_args!($($arg)+));
        }
    };
}

/// Log a formatted debug message through the global logger.
#[macro_export]
macro_rules! elf_debug {
    ($component:expr, $($arg:tt)+) => {
        $crate::el_logf!($crate::core::LogLevel::Debug, $component, $($arg)+)
    };
}

/// Log a formatted info message through the global logger.
#[macro_export]
macro_rules! elf_info {
    ($component:expr, $($arg:tt)+) => {
        $crate::el_logf!($crate::core::LogLevel::Info, $component, $($arg)+)
    };
}

/// Log a formatted warning message through the global logger.
#[macro_export]
macro_rules! elf_warning {
    ($component:expr, $($arg:tt)+) => {
        $crate::el_logf!($crate::core::LogLevel::Warning, $component, $($arg)+)
    };
}

/// Log a formatted error message through the global logger.
#[macro_export]
macro_rules! elf_error {
    ($component:expr, $($arg:tt)+) => {
        $crate::el_logf!($crate::core::LogLevel::Error, $component, $($arg)+)
    };
}

/// Log a formatted critical message through the global logger.
#[macro_export]
macro_rules! elf_critical {
    ($component:expr, $($arg:tt)+) => {
        $crate::el_logf!($crate::core::LogLevel::Critical, $component, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    // The global slot is process-wide; these tests only verify the macros
    // expand and tolerate an uninitialized or absent global logger.

    #[test]
    fn test_leveled_macros_expand() {
        el_debug!("APP", "debug message");
        el_info!("APP", "info message");
        el_warning!("APP", "warning message");
        el_error!("APP", "error message");
        el_critical!("APP", "critical message");
    }

    #[test]
    fn test_formatted_macros_expand() {
        elf_debug!("APP", "value: {}", 1);
        elf_info!("APP", "items: {}", 100);
        elf_warning!("APP", "retry {} of {}", 1, 3);
        elf_error!("NET", "code: {}", 500);
        elf_critical!("SYS", "failure: {}", "disk full");
    }
}
