//! Logging Setup
//!
//! Library code logs through the `log` facade. [`init`] installs a `tracing`
//! subscriber that writes:
//! - JSON lines to a daily rolling file under the configured log directory
//! - compact human-readable lines to stderr
//!
//! and redirects `log` records into it. Rolled files from previous days are
//! gzip-compressed in the background.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::AppConfig;

/// Base name of the rolling log file.
pub const LOG_FILE_NAME: &str = "ttrpg-names.log";

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over `config.logging.level`.
///
/// Returns a `WorkerGuard` which must be kept alive for the duration of the application
/// to ensure buffered logs are flushed on shutdown.
pub fn init(config: &AppConfig) -> WorkerGuard {
    let log_dir = config.log_dir();

    if !log_dir.exists() {
        if let Err(e) = fs::create_dir_all(&log_dir) {
            eprintln!("Failed to create logs directory: {}", e);
        }
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = env_filter(&config.logging.level);

    // File Layer: JSON format for easy parsing/ingestion
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_filter(env_filter.clone());

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .compact()
        .with_filter(env_filter);

    // try_init also redirects standard `log` macros to `tracing`
    if let Err(e) = tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
    {
        eprintln!("Failed to initialize tracing subscriber: {}", e);
    }

    // Compress old logs in background (AFTER logging is initialized so log macros work)
    let log_dir_clone = log_dir.clone();
    std::thread::spawn(move || {
        compress_old_logs(&log_dir_clone);
    });

    log::info!(
        "Logging initialized. Writing to: {:?} (daily rolling)",
        log_dir.join(LOG_FILE_NAME)
    );

    guard
}

/// Install a test-writer subscriber. Safe to call from every test.
pub fn init_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("debug"))
        .with_test_writer()
        .try_init();
}

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Compress rolled log files from previous days.
fn compress_old_logs(log_dir: &Path) {
    let today_suffix = chrono::Local::now().format("%Y-%m-%d").to_string();

    let entries = match fs::read_dir(log_dir) {
        Ok(entries) => entries,
        Err(_) => return,
    };

    for path in entries.flatten().map(|entry| entry.path()) {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !is_stale_log(name, &today_suffix) {
            continue;
        }
        match compress_file(&path) {
            Ok(()) => log::info!("Compressed old log: {:?}", path),
            Err(e) => log::warn!("Failed to compress old log {:?}: {}", path, e),
        }
    }
}

/// Rolling files are named `<LOG_FILE_NAME>.YYYY-MM-DD`.
fn is_stale_log(file_name: &str, today_suffix: &str) -> bool {
    file_name.starts_with(&format!("{}.", LOG_FILE_NAME))
        && !file_name.ends_with(today_suffix)
        && !file_name.ends_with(".gz")
}

fn compress_file(path: &Path) -> io::Result<()> {
    let file = fs::File::open(path)?;
    let mut reader = io::BufReader::new(file);

    let mut gz_path_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No filename"))?
        .to_os_string();
    gz_path_name.push(".gz");
    let gz_path: PathBuf = path
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No parent directory"))?
        .join(gz_path_name);

    // Skip if already exists
    if gz_path.exists() {
        return Ok(());
    }

    let output = fs::File::create(&gz_path)?;
    let mut encoder = GzEncoder::new(output, Compression::default());

    io::copy(&mut reader, &mut encoder)?;
    encoder.finish()?;

    fs::remove_file(path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use flate2::read::GzDecoder;
    use tempfile::TempDir;

    #[test]
    fn test_is_stale_log() {
        let today = "2026-10-18";
        assert!(is_stale_log("ttrpg-names.log.2026-10-17", today));
        assert!(!is_stale_log("ttrpg-names.log.2026-10-18", today));
        assert!(!is_stale_log("ttrpg-names.log.2026-10-17.gz", today));
        assert!(!is_stale_log("other.log.2026-10-17", today));
    }

    #[test]
    fn test_compress_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ttrpg-names.log.2020-01-01");
        fs::write(&path, "old log line\n").unwrap();

        compress_file(&path).unwrap();

        assert!(!path.exists());
        let gz = temp.path().join("ttrpg-names.log.2020-01-01.gz");
        let mut decoded = String::new();
        GzDecoder::new(fs::File::open(gz).unwrap())
            .read_to_string(&mut decoded)
            .unwrap();
        assert_eq!(decoded, "old log line\n");
    }

    #[test]
    fn test_compress_old_logs_skips_today() {
        let temp = TempDir::new().unwrap();
        let today = chrono::Local::now().format("%Y-%m-%d").to_string();
        let current = temp.path().join(format!("ttrpg-names.log.{}", today));
        let old = temp.path().join("ttrpg-names.log.2020-01-01");
        fs::write(&current, "today").unwrap();
        fs::write(&old, "yesterday").unwrap();

        compress_old_logs(temp.path());

        assert!(current.exists());
        assert!(!old.exists());
        assert!(temp.path().join("ttrpg-names.log.2020-01-01.gz").exists());
    }

    #[test]
    fn test_init_creates_configured_log_dir() {
        let temp = TempDir::new().unwrap();
        let log_dir = temp.path().join("logs");
        let mut config = AppConfig::default();
        config.logging.log_dir = Some(log_dir.clone());

        // A subscriber installed by another test only makes try_init fail
        let guard = init(&config);
        log::info!("written after init");
        drop(guard);

        assert!(log_dir.is_dir());
    }

    #[test]
    fn test_init_for_tests_is_idempotent() {
        init_for_tests();
        init_for_tests();
        log::debug!("logging still works");
    }
}
