//! Logger utility for application-wide logging
//!
//! This module provides a custom logger implementation that works alongside
//! the standard log crate, but adds file output capabilities. The same type
//! doubles as the audit sink commands write completed exports to.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Metadata, LevelFilter};

use crate::export::ExportResult;

/// Custom logger implementation
pub struct Logger {
    /// File handle for log output, `None` for console-only loggers
    file: Mutex<Option<File>>,
}

impl Logger {
    /// Creates a new logger appending to `log_file`
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be opened
    pub fn new(log_file: &str) -> io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
        })
    }

    /// Logger without a file; audit messages are dropped
    pub fn console() -> Self {
        Logger {
            file: Mutex::new(None),
        }
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Records a finished export with its size and georeferencing
    pub fn log_export(&self, result: &ExportResult) -> io::Result<()> {
        self.log(&format!(
            "Export: {} ({}x{} px), world file {}",
            result.image_path.display(),
            result.width_px,
            result.height_px,
            result.world_file_path.display()
        ))?;
        self.log(&format!(
            "  Pixel size: {} x {}, upper left: ({}, {})",
            result.georef.pixel_size_x,
            result.georef.pixel_size_y,
            result.georef.upper_left_x,
            result.georef.upper_left_y
        ))
    }

    /// Static method to initialize the global logger
    pub fn init_global_logger(log_file: &str, level: LevelFilter) -> io::Result<()> {
        let global_logger = Logger::new(log_file)?;

        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(level);
        Ok(())
    }
}

// Implement the Log trait to make our Logger work with the log crate
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = Logger::log(self, &message);

            // Also print to console
            eprintln!("{}", message);
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}
