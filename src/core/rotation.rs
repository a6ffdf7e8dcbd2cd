//! Size-based log file rotation
//!
//! [`FileSink`] owns the currently open output file, tracks its accumulated
//! size, and runs the rotation protocol once the configured threshold is
//! crossed: shift the numbered backup chain (evicting the oldest), move the
//! full file to `.1`, then start a fresh timestamped file. All filesystem
//! path operations go through the [`Storage`] capability so the same
//! protocol runs on desktop and embedded targets.

use crate::core::config::LoggerConfig;
use crate::core::error::{LoggerError, Result};
use crate::platform::{Clock, Storage};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

const HEADER_SEPARATOR_WIDTH: usize = 80;

pub struct FileSink {
    clock: Arc<dyn Clock>,
    storage: Arc<dyn Storage>,
    current_path: PathBuf,
    current_size: u64,
    writer: Option<BufWriter<File>>,
}

impl FileSink {
    pub fn new(clock: Arc<dyn Clock>, storage: Arc<dyn Storage>) -> Self {
        Self {
            clock,
            storage,
            current_path: PathBuf::new(),
            current_size: 0,
            writer: None,
        }
    }

    /// Open a fresh output file named from the current timestamp.
    ///
    /// Colons and spaces in the formatted timestamp are replaced with
    /// underscores to keep the name filesystem-safe. The new file starts
    /// with a four-line header; header bytes do not count toward the
    /// rotation threshold.
    pub fn open_new(&mut self, config: &LoggerConfig) -> Result<()> {
        let timestamp = self
            .clock
            .formatted_now(&config.timestamp_format)
            .replace([':', ' '], "_");
        let file_name = format!(
            "{}_{}{}",
            config.file_prefix, timestamp, config.file_extension
        );

        self.current_path = config.log_directory.join(file_name);
        self.current_size = 0;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.current_path)
            .map_err(|e| {
                LoggerError::file_open(self.current_path.display().to_string(), e.to_string())
            })?;
        let mut writer = BufWriter::new(file);

        self.write_header(&mut writer, config)
            .map_err(|e| LoggerError::io_operation("writing log file header", e))?;

        self.writer = Some(writer);
        Ok(())
    }

    fn write_header(&self, writer: &mut BufWriter<File>, config: &LoggerConfig) -> std::io::Result<()> {
        writeln!(writer, "# Embedded Logger Log File")?;
        writeln!(
            writer,
            "# Created: {}",
            self.clock.formatted_now(&config.timestamp_format)
        )?;
        writeln!(writer, "# Format: [Timestamp] [Level] [Component] Message")?;
        writeln!(writer, "{}", "=".repeat(HEADER_SEPARATOR_WIDTH))?;
        writer.flush()
    }

    /// Append one formatted line and rotate afterwards if the accumulated
    /// size reached the threshold.
    ///
    /// A missing writer means the file destination is unavailable; the line
    /// is dropped silently so a logging call never fails the caller. A
    /// failed rotation is reported to the console and the previous file is
    /// reopened so logging continues.
    pub fn write_line(&mut self, line: &str, config: &LoggerConfig) -> Result<()> {
        let Some(writer) = self.writer.as_mut() else {
            return Ok(());
        };

        writer
            .write_all(line.as_bytes())
            .and_then(|()| writer.write_all(b"\n"))
            .and_then(|()| writer.flush())
            .map_err(|e| LoggerError::io_operation("writing log entry", e))?;

        self.current_size += line.len() as u64 + 1;

        if self.current_size >= config.max_file_size {
            if let Err(e) = self.rotate(config) {
                eprintln!("[LOGGER ERROR] {}", e);
                self.reopen_current();
            }
        }

        Ok(())
    }

    /// Run the rotation protocol.
    ///
    /// Backups shift from index `max_backup_files - 1` down to `1`, the
    /// oldest (`.max`) being deleted to make room; the just-closed current
    /// file becomes `.1`; a fresh current file is opened.
    fn rotate(&mut self, config: &LoggerConfig) -> Result<()> {
        if let Some(mut writer) = self.writer.take() {
            let _ = writer.flush();
        }

        let max = config.max_backup_files;
        for i in (1..max).rev() {
            let from = self.backup_path(i);
            if self.storage.exists(&from) {
                let to = self.backup_path(i + 1);
                if i == max - 1 {
                    self.storage.remove(&to);
                }
                if !self.storage.rename(&from, &to) {
                    return Err(LoggerError::rotation(
                        from.display().to_string(),
                        format!("failed to shift backup to index {}", i + 1),
                    ));
                }
            }
        }

        let first_backup = self.backup_path(1);
        if !self.storage.rename(&self.current_path, &first_backup) {
            return Err(LoggerError::rotation(
                self.current_path.display().to_string(),
                "failed to move current file to backup .1".to_string(),
            ));
        }

        self.open_new(config)
    }

    /// Backup file path for the given index, `{current}.{index}`
    fn backup_path(&self, index: usize) -> PathBuf {
        let file_name = self
            .current_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("log");
        self.current_path
            .with_file_name(format!("{}.{}", file_name, index))
    }

    /// Reopen the current path in append mode after a failed rotation.
    fn reopen_current(&mut self) {
        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.current_path)
        {
            Ok(file) => {
                self.current_size = self.storage.file_size(&self.current_path);
                self.writer = Some(BufWriter::new(file));
            }
            Err(e) => {
                eprintln!(
                    "[LOGGER ERROR] failed to reopen '{}' after rotation failure: {}",
                    self.current_path.display(),
                    e
                );
            }
        }
    }

    pub fn flush(&mut self) {
        if let Some(ref mut writer) = self.writer {
            let _ = writer.flush();
        }
    }

    /// Flush and release the file handle.
    pub fn close(&mut self) {
        if let Some(mut writer) = self.writer.take() {
            let _ = writer.flush();
        }
    }

    #[must_use]
    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    #[must_use]
    pub fn current_size(&self) -> u64 {
        self.current_size
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.writer.is_some()
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        self.close();
    }
}
