use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Appends records to a file, opened on the first record and kept open.
struct AppendLogger {
    path: PathBuf,
    file: Mutex<Option<File>>,
}

impl AppendLogger {
    fn open(&self) -> Option<File> {
        OpenOptions::new().create(true).append(true).open(&self.path).ok()
    }
}

impl Log for AppendLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut slot = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        if slot.is_none() {
            *slot = self.open();
        }
        if let Some(file) = slot.as_mut() {
            let line = format!("[{}] {}: {}\n", record.level(), record.target(), record.args());
            // Drop the handle on failure so the next record reopens the file.
            if file.write_all(line.as_bytes()).is_err() {
                *slot = None;
            }
        }
    }

    fn flush(&self) {
        let mut slot = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(file) = slot.as_mut() {
            let _ = file.flush();
        }
    }
}

/// Appends debug-level log output (chain dispatch, registrations, conflict
/// warnings) to the file at `path`. Fails if a logger is already installed.
pub fn init_logger(path: impl Into<PathBuf>) -> Result<(), SetLoggerError> {
    let logger = AppendLogger {
        path: path.into(),
        file: Mutex::new(None),
    };
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(LevelFilter::Debug);
    Ok(())
}
