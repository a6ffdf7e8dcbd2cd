//! Main logger implementation
//!
//! The [`Logger`] facade owns the configuration, the two platform
//! capabilities, the dispatch queue, the background worker, and the file
//! rotation state. Call sites submit entries through the leveled methods;
//! in async mode a dedicated worker thread drains the queue and performs
//! the actual console/file writes, so producers never block on I/O.

use super::config::LoggerConfig;
use super::destination::LogDestination;
use super::error::{LoggerError, Result};
use super::formatter::{format_entry, FormatOptions};
use super::log_entry::LogEntry;
use super::log_level::LogLevel;
use super::rotation::FileSink;
use crate::platform::{Clock, StdStorage, Storage, SystemClock};
use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::{Mutex, RwLock};
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Messages rendered by [`Logger::logf`] are truncated to this many bytes.
pub const MAX_FORMATTED_MESSAGE_BYTES: usize = 1024;

/// Sleep between queue-emptiness polls in [`Logger::flush`]
const FLUSH_POLL_INTERVAL: Duration = Duration::from_millis(10);

const BANNER_SEPARATOR_WIDTH: usize = 80;
const SYSTEM_COMPONENT: &str = "SYSTEM";

/// An entry travelling through the dispatch queue together with its
/// resolved destination mask, so per-call overrides survive async dispatch.
struct QueuedEntry {
    entry: LogEntry,
    destination: LogDestination,
}

pub struct Logger {
    config: Arc<RwLock<LoggerConfig>>,
    clock: Arc<dyn Clock>,
    storage: Arc<dyn Storage>,
    /// Rotation state and the open write handle; this lock is the file lock
    /// and guards the sink in both async and synchronous modes.
    sink: Arc<Mutex<FileSink>>,
    /// Producer side of the dispatch queue; `None` in synchronous mode and
    /// after shutdown. Dropping the sender is the shutdown signal.
    sender: RwLock<Option<Sender<QueuedEntry>>>,
    worker: Mutex<Option<thread::JoinHandle<()>>>,
    /// Serializes initialize/shutdown so concurrent lifecycle calls stay
    /// idempotent.
    lifecycle: Mutex<()>,
    initialized: AtomicBool,
    shutting_down: AtomicBool,
    /// Counts submissions, not emissions: incremented once per submitted
    /// entry regardless of destination routing or level filtering.
    total_entries: AtomicU64,
}

impl Logger {
    /// Create a logger with the default desktop capabilities.
    #[must_use]
    pub fn new(config: LoggerConfig) -> Self {
        Self::with_providers(config, Arc::new(SystemClock), Arc::new(StdStorage))
    }

    /// Create a logger with explicit platform capabilities.
    ///
    /// The capabilities are selected exactly once, here; the core never
    /// consults the platform behind the host's back.
    #[must_use]
    pub fn with_providers(
        config: LoggerConfig,
        clock: Arc<dyn Clock>,
        storage: Arc<dyn Storage>,
    ) -> Self {
        let sink = Arc::new(Mutex::new(FileSink::new(
            Arc::clone(&clock),
            Arc::clone(&storage),
        )));

        Self {
            config: Arc::new(RwLock::new(config)),
            clock,
            storage,
            sink,
            sender: RwLock::new(None),
            worker: Mutex::new(None),
            lifecycle: Mutex::new(()),
            initialized: AtomicBool::new(false),
            shutting_down: AtomicBool::new(false),
            total_entries: AtomicU64::new(0),
        }
    }

    /// Default configuration with a custom log directory.
    #[must_use]
    pub fn with_directory(directory: impl Into<PathBuf>) -> Self {
        Self::new(LoggerConfig::new().with_log_directory(directory))
    }

    /// Logger whose default destination is the console only.
    #[must_use]
    pub fn console_only() -> Self {
        Self::new(LoggerConfig::new().with_default_destination(LogDestination::CONSOLE_ONLY))
    }

    /// Logger whose default destination is the file only.
    #[must_use]
    pub fn file_only(directory: impl Into<PathBuf>) -> Self {
        Self::new(
            LoggerConfig::new()
                .with_log_directory(directory)
                .with_default_destination(LogDestination::FILE_ONLY),
        )
    }

    /// Initialize the logging system.
    ///
    /// Idempotent: returns `Ok(())` immediately when already initialized.
    /// Ensures the log directory exists (created recursively through the
    /// storage capability), opens the first output file, and starts the
    /// background worker when async mode is enabled. On success the startup
    /// banner is emitted through the normal logging path.
    ///
    /// # Errors
    ///
    /// [`LoggerError::DirectoryCreation`] when the directory cannot be
    /// created, [`LoggerError::FileOpen`] when the first file cannot be
    /// opened. Failures never panic past this boundary.
    pub fn initialize(&self) -> Result<()> {
        let _lifecycle = self.lifecycle.lock();

        if self.initialized.load(Ordering::Acquire) {
            return Ok(());
        }

        let config = self.config.read().clone();

        if !self.storage.exists(&config.log_directory)
            && !self.storage.create_dir_all(&config.log_directory)
        {
            return Err(LoggerError::directory_creation(
                config.log_directory.display().to_string(),
            ));
        }

        self.sink.lock().open_new(&config)?;
        self.shutting_down.store(false, Ordering::Release);

        if config.async_logging {
            let (sender, receiver) = unbounded();
            let worker_config = Arc::clone(&self.config);
            let worker_sink = Arc::clone(&self.sink);

            let handle = thread::Builder::new()
                .name("embedded-logger-worker".to_string())
                .spawn(move || {
                    Self::worker_loop(&worker_config, &worker_sink, &receiver);
                })
                .map_err(|e| {
                    self.sink.lock().close();
                    LoggerError::io_operation("spawning logger worker thread", e)
                })?;

            *self.sender.write() = Some(sender);
            *self.worker.lock() = Some(handle);
        }

        self.initialized.store(true, Ordering::Release);
        self.log_system_startup("embedded logger initialized");
        Ok(())
    }

    /// Shut the logging system down gracefully.
    ///
    /// Idempotent: a no-op when not initialized or already shutting down.
    /// Emits the shutdown banner, signals the worker by dropping the queue
    /// sender, joins the worker (which drains every remaining queued entry
    /// first), then flushes and closes the output file. Afterwards the
    /// logger can be initialized again.
    pub fn shutdown(&self) {
        let _lifecycle = self.lifecycle.lock();

        if !self.initialized.load(Ordering::Acquire) || self.shutting_down.load(Ordering::Acquire)
        {
            return;
        }

        self.log_system_shutdown();
        self.shutting_down.store(true, Ordering::Release);

        // Disconnects the channel; the worker drains all buffered entries
        // before its recv() reports the disconnect.
        drop(self.sender.write().take());

        if let Some(handle) = self.worker.lock().take() {
            if handle.join().is_err() {
                eprintln!("[LOGGER ERROR] logger worker thread panicked during shutdown");
            }
        }

        let mut sink = self.sink.lock();
        sink.flush();
        sink.close();

        self.initialized.store(false, Ordering::Release);
    }

    /// Replace the configuration.
    ///
    /// The update applies to every entry processed after this call,
    /// including entries already queued. Switching `async_logging` only
    /// takes effect after the next `shutdown()`/`initialize()` cycle.
    pub fn update_config(&self, config: LoggerConfig) {
        *self.config.write() = config;
    }

    /// Snapshot of the current configuration.
    #[must_use]
    pub fn config(&self) -> LoggerConfig {
        self.config.read().clone()
    }

    #[inline]
    pub fn debug(&self, component: &str, message: impl Into<String>) {
        self.log_to(LogLevel::Debug, component, message, LogDestination::BOTH);
    }

    #[inline]
    pub fn info(&self, component: &str, message: impl Into<String>) {
        self.log_to(LogLevel::Info, component, message, LogDestination::BOTH);
    }

    #[inline]
    pub fn warning(&self, component: &str, message: impl Into<String>) {
        self.log_to(LogLevel::Warning, component, message, LogDestination::BOTH);
    }

    #[inline]
    pub fn error(&self, component: &str, message: impl Into<String>) {
        self.log_to(LogLevel::Error, component, message, LogDestination::BOTH);
    }

    #[inline]
    pub fn critical(&self, component: &str, message: impl Into<String>) {
        self.log_to(LogLevel::Critical, component, message, LogDestination::BOTH);
    }

    /// Log with an explicit destination mask.
    pub fn log_to(
        &self,
        level: LogLevel,
        component: &str,
        message: impl Into<String>,
        destination: LogDestination,
    ) {
        self.submit(LogEntry::new(level, component, message), destination);
    }

    /// Log a pre-rendered format invocation using the configured default
    /// destination. The rendered message is truncated at
    /// [`MAX_FORMATTED_MESSAGE_BYTES`] on a character boundary; overflow is
    /// not an error.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use embedded_logger::core::{Logger, LoggerConfig, LogLevel};
    ///
    /// let logger = Logger::new(LoggerConfig::default());
    /// logger.logf(LogLevel::Info, "NET", format_args!("connected to {}:{}", "host", 80));
    /// ```
    pub fn logf(&self, level: LogLevel, component: &str, args: std::fmt::Arguments<'_>) {
        let message = Self::truncate_message(args.to_string());
        let destination = self.config.read().default_destination;
        self.submit(LogEntry::new(level, component, message), destination);
    }

    fn truncate_message(mut message: String) -> String {
        if message.len() > MAX_FORMATTED_MESSAGE_BYTES {
            let mut end = MAX_FORMATTED_MESSAGE_BYTES;
            while !message.is_char_boundary(end) {
                end -= 1;
            }
            message.truncate(end);
        }
        message
    }

    /// Submit a fully constructed entry.
    ///
    /// No-op when the logger is not initialized. The entry is stamped with
    /// the formatted wall-clock time and the epoch-millisecond counter,
    /// then queued (async) or processed inline (sync). The submission
    /// counter increments unconditionally, even when level thresholds later
    /// filter the entry from every destination.
    pub fn submit(&self, mut entry: LogEntry, destination: LogDestination) {
        if !self.initialized.load(Ordering::Acquire) {
            return;
        }

        entry.timestamp = self.current_timestamp();
        entry.timestamp_ms = self.clock.epoch_millis();
        let queued = QueuedEntry { entry, destination };

        let sender = self.sender.read();
        if let Some(tx) = sender.as_ref() {
            let _ = tx.send(queued);
        } else {
            drop(sender);
            let config = self.config.read().clone();
            Self::process_entry(&config, &self.sink, &queued);
        }

        self.total_entries.fetch_add(1, Ordering::Relaxed);
    }

    /// Emit the startup banner at Info level under the `SYSTEM` component.
    pub fn log_system_startup(&self, system_info: &str) {
        let separator = "=".repeat(BANNER_SEPARATOR_WIDTH);

        self.info(SYSTEM_COMPONENT, separator.clone());
        self.info(SYSTEM_COMPONENT, "EMBEDDED LOGGER STARTUP");
        self.info(SYSTEM_COMPONENT, system_info);
        self.info(
            SYSTEM_COMPONENT,
            format!("Timestamp: {}", self.current_timestamp()),
        );
        self.info(SYSTEM_COMPONENT, separator);
    }

    /// Emit the shutdown banner, including the total submission count.
    pub fn log_system_shutdown(&self) {
        let separator = "=".repeat(BANNER_SEPARATOR_WIDTH);

        self.info(SYSTEM_COMPONENT, separator.clone());
        self.info(SYSTEM_COMPONENT, "EMBEDDED LOGGER SHUTDOWN");
        self.info(
            SYSTEM_COMPONENT,
            format!("Total log entries: {}", self.total_log_count()),
        );
        self.info(
            SYSTEM_COMPONENT,
            format!("Timestamp: {}", self.current_timestamp()),
        );
        self.info(SYSTEM_COMPONENT, separator);
    }

    /// Block until all pending entries are written.
    ///
    /// In async mode this polls the queue until it drains or shutdown
    /// begins, then flushes the file handle. Synchronous mode only flushes
    /// the handle.
    pub fn flush(&self) {
        loop {
            let draining = {
                let sender = self.sender.read();
                match sender.as_ref() {
                    Some(tx) => !tx.is_empty() && !self.shutting_down.load(Ordering::Acquire),
                    None => false,
                }
            };
            if !draining {
                break;
            }
            thread::sleep(FLUSH_POLL_INTERVAL);
        }

        self.sink.lock().flush();
    }

    /// Path of the current output file. Tolerates staleness across a
    /// concurrent rotation.
    #[must_use]
    pub fn current_log_file(&self) -> PathBuf {
        self.sink.lock().current_path().to_path_buf()
    }

    /// Total number of submitted entries.
    #[must_use]
    pub fn total_log_count(&self) -> u64 {
        self.total_entries.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    fn current_timestamp(&self) -> String {
        let pattern = self.config.read().timestamp_format.clone();
        self.clock.formatted_now(&pattern)
    }

    /// Route one entry to its destinations, applying the per-destination
    /// level thresholds from the given config snapshot. Shared by the
    /// worker and the synchronous submission path.
    fn process_entry(config: &LoggerConfig, sink: &Mutex<FileSink>, queued: &QueuedEntry) {
        let entry = &queued.entry;

        if queued.destination.includes_console() && entry.level >= config.console_level {
            let line = format_entry(entry, &FormatOptions::console(config));
            let mut stdout = std::io::stdout();
            let _ = writeln!(stdout, "{}", line);
            let _ = stdout.flush();
        }

        if queued.destination.includes_file() && entry.level >= config.file_level {
            let line = format_entry(entry, &FormatOptions::file(config));
            if let Err(e) = sink.lock().write_line(&line, config) {
                eprintln!("[LOGGER ERROR] {}", e);
            }
        }
    }

    /// Worker loop: one entry per iteration, FIFO, with a fresh config
    /// snapshot per entry. `recv()` keeps yielding buffered entries after
    /// the sender is dropped, so the drain-on-shutdown guarantee is part of
    /// the channel contract rather than a separate code path.
    fn worker_loop(
        config: &RwLock<LoggerConfig>,
        sink: &Mutex<FileSink>,
        receiver: &Receiver<QueuedEntry>,
    ) {
        while let Ok(queued) = receiver.recv() {
            let snapshot = config.read().clone();
            Self::process_entry(&snapshot, sink, &queued);
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.shutdown();
    }
}

// Process-wide logger slot. Installed once by the host at startup; any
// thread may read it. Last writer wins; an installed Arc keeps the logger
// alive independent of later replacement.
static GLOBAL_LOGGER: Mutex<Option<Arc<Logger>>> = Mutex::new(None);

/// Install a logger as the process-wide instance.
pub fn set_global_logger(logger: Arc<Logger>) {
    *GLOBAL_LOGGER.lock() = Some(logger);
}

/// The process-wide logger, if one has been installed.
#[must_use]
pub fn global_logger() -> Option<Arc<Logger>> {
    GLOBAL_LOGGER.lock().clone()
}
