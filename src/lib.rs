//! # Embedded Logger
//!
//! Cross-platform logging library with asynchronous dispatch, dual
//! console/file output, and size-based file rotation with a bounded backup
//! chain.
//!
//! ## Features
//!
//! - **Asynchronous**: a dedicated worker thread decouples call sites from
//!   file and console I/O
//! - **Dual Output**: per-entry destination masks with independent level
//!   thresholds for console and file
//! - **File Rotation**: size-triggered rotation keeping a bounded chain of
//!   numbered backups
//! - **Platform Seams**: clock and filesystem capabilities injected at
//!   construction, so the same core runs on desktop and embedded targets

pub mod core;
pub mod macros;
pub mod platform;

pub mod prelude {
    pub use crate::core::{
        global_logger, set_global_logger, LogDestination, LogEntry, Logger, LoggerConfig,
        LoggerError, LogLevel, Result, MAX_FORMATTED_MESSAGE_BYTES,
    };
    pub use crate::platform::{Clock, StdStorage, Storage, SystemClock};
}

pub use crate::core::{
    global_logger, set_global_logger, LogDestination, LogEntry, Logger, LoggerConfig, LoggerError,
    LogLevel, Result, MAX_FORMATTED_MESSAGE_BYTES,
};
pub use crate::platform::{Clock, StdStorage, Storage, SystemClock};
