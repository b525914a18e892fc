// src/log.rs
use std::path::Path;
use std::sync::OnceLock;

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
pub use ::log::Level;

use crate::config::consts::{LOG_BASENAME, LOG_KEEP_FILES, LOG_MAX_BYTES, STORE_DIR};

static LOGGER: OnceLock<LoggerHandle> = OnceLock::new();

/// Where log lines go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogTarget {
    /// `<STORE_DIR>/debug_rCURRENT.log`, appended across runs, rotated by size.
    File,
    Stderr,
}

/// Start the logger once per process. Later calls are no-ops.
///
/// Returns a human-readable message on failure; callers treat that as a
/// warning, never as a reason to abort an import.
pub fn init(level: &str, target: LogTarget) -> Result<(), String> {
    if LOGGER.get().is_some() {
        return Ok(());
    }

    let logger = Logger::try_with_str(level)
        .map_err(|e| format!("invalid log level `{level}`: {e}"))?;

    let logger = match target {
        LogTarget::File => {
            let dir = Path::new(STORE_DIR);
            std::fs::create_dir_all(dir)
                .map_err(|e| format!("failed to create `{}`: {e}", dir.display()))?;
            logger
                .log_to_file(
                    FileSpec::default()
                        .directory(dir)
                        .basename(LOG_BASENAME)
                        .suppress_timestamp(),
                )
                .rotate(
                    Criterion::Size(LOG_MAX_BYTES),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(LOG_KEEP_FILES),
                )
                .append()
                .write_mode(WriteMode::Direct)
                .format_for_files(flexi_logger::detailed_format)
        }
        LogTarget::Stderr => logger.log_to_stderr().format(flexi_logger::default_format),
    };

    let handle = logger
        .start()
        .map_err(|e| format!("failed to start logger: {e}"))?;
    let _ = LOGGER.set(handle);
    Ok(())
}

/// Internal logging function
pub fn write_log(level: Level, msg: &str) {
    ::log::log!(target: "lifelist", level, "{msg}");
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Info, &format!($($arg)*))
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Debug, &format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Error, &format!($($arg)*))
    };
}
