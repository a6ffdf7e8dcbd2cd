//! Rotation behavior through the public logger API
//!
//! The clock is pinned so rotated file names stay stable and the backup
//! chain is exercised deterministically.

use embedded_logger::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

struct FixedClock;

impl Clock for FixedClock {
    fn formatted_now(&self, _pattern: &str) -> String {
        "2025-01-31 12:00:00".to_string()
    }

    fn epoch_millis(&self) -> u64 {
        1_738_324_800_000
    }
}

/// Storage shim whose renames always fail, simulating a filesystem that
/// refuses the rotation rename chain.
struct RenameFailingStorage(StdStorage);

impl Storage for RenameFailingStorage {
    fn exists(&self, path: &Path) -> bool {
        self.0.exists(path)
    }

    fn create_dir_all(&self, path: &Path) -> bool {
        self.0.create_dir_all(path)
    }

    fn file_size(&self, path: &Path) -> u64 {
        self.0.file_size(path)
    }

    fn remove(&self, path: &Path) -> bool {
        self.0.remove(path)
    }

    fn rename(&self, _from: &Path, _to: &Path) -> bool {
        false
    }
}

/// Sync-mode config sized so one formatted entry line is exactly 31 bytes
/// including the newline: `[    INFO] [      SENSOR] ping`.
///
/// The file threshold starts at Warning so the Info-level startup banner
/// never reaches the tiny file; each test lowers it back to Info once
/// initialization is done.
fn scenario_config(dir: &Path) -> LoggerConfig {
    LoggerConfig::new()
        .with_log_directory(dir)
        .with_async_logging(false)
        .with_colors(false)
        .with_timestamp(false)
        .with_file_level(LogLevel::Warning)
        .with_default_destination(LogDestination::FILE_ONLY)
        .with_max_file_size(100)
        .with_max_backup_files(2)
}

fn admit_info_entries(logger: &Logger) {
    logger.update_config(logger.config().with_file_level(LogLevel::Info));
}

fn backup_path(current: &Path, index: usize) -> PathBuf {
    let name = current.file_name().unwrap().to_str().unwrap();
    current.with_file_name(format!("{}.{}", name, index))
}

#[test]
fn test_rotation_scenario_four_small_entries() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Logger::with_providers(
        scenario_config(temp_dir.path()),
        Arc::new(FixedClock),
        Arc::new(StdStorage),
    );
    logger.initialize().expect("Failed to initialize");
    admit_info_entries(&logger);
    let current = logger.current_log_file();

    // 31 bytes per entry: three stay under the 100-byte threshold, the
    // fourth crosses it and triggers exactly one rotation
    for _ in 0..3 {
        logger.log_to(LogLevel::Info, "SENSOR", "ping", LogDestination::FILE_ONLY);
    }
    assert!(!backup_path(&current, 1).exists());

    logger.log_to(LogLevel::Info, "SENSOR", "ping", LogDestination::FILE_ONLY);

    assert!(backup_path(&current, 1).exists());
    assert!(!backup_path(&current, 2).exists());

    // the fresh current file holds only its four header lines
    let content = fs::read_to_string(&current).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("# Embedded Logger Log File"));

    // the rotated file carries the four entries
    let rotated =
        fs::read_to_string(backup_path(&current, 1)).expect("Failed to read backup file");
    assert_eq!(rotated.matches("ping").count(), 4);

    logger.shutdown();
}

#[test]
fn test_repeated_rotation_evicts_oldest_backup() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Logger::with_providers(
        scenario_config(temp_dir.path()),
        Arc::new(FixedClock),
        Arc::new(StdStorage),
    );
    logger.initialize().expect("Failed to initialize");
    admit_info_entries(&logger);
    let current = logger.current_log_file();

    // each round of four entries fills and rotates one file
    for _ in 0..4 {
        for _ in 0..4 {
            logger.log_to(LogLevel::Info, "SENSOR", "ping", LogDestination::FILE_ONLY);
        }
    }

    assert!(backup_path(&current, 1).exists());
    assert!(backup_path(&current, 2).exists());
    assert!(
        !backup_path(&current, 3).exists(),
        "chain must stay bounded at max_backup_files"
    );

    logger.shutdown();
}

#[test]
fn test_rotation_failure_keeps_logging() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Logger::with_providers(
        scenario_config(temp_dir.path()),
        Arc::new(FixedClock),
        Arc::new(RenameFailingStorage(StdStorage)),
    );
    logger.initialize().expect("Failed to initialize");
    admit_info_entries(&logger);
    let current = logger.current_log_file();

    // every third entry trips a rotation attempt that fails; the sink
    // must reopen the current file and keep accepting writes
    for i in 0..12 {
        logger.log_to(
            LogLevel::Info,
            "SENSOR",
            format!("entry {:02}", i),
            LogDestination::FILE_ONLY,
        );
    }

    let content = fs::read_to_string(&current).expect("Failed to read log file");
    for i in 0..12 {
        assert!(
            content.contains(&format!("entry {:02}", i)),
            "entry {} lost after rotation failure",
            i
        );
    }
    assert!(!backup_path(&current, 1).exists());

    logger.shutdown();
}

#[test]
fn test_rotated_file_name_is_timestamped() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Logger::with_providers(
        scenario_config(temp_dir.path()),
        Arc::new(FixedClock),
        Arc::new(StdStorage),
    );
    logger.initialize().expect("Failed to initialize");

    let name = logger
        .current_log_file()
        .file_name()
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert_eq!(name, "embedded_log_2025-01-31_12_00_00.txt");
    assert!(!name.contains(':'));
    assert!(!name.contains(' '));

    logger.shutdown();
}
