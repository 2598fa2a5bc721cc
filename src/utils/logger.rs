//! Run log for conversions
//!
//! Console diagnostics go through the `log` facade with `env_logger` as the
//! backend. This logger additionally appends a plain-text record of each
//! run to a file when one is configured.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

/// File-backed run logger
pub struct Logger {
    /// File handle for log output; None when the run log is disabled
    file: Mutex<Option<File>>,
}

impl Logger {
    /// Creates a logger appending to `log_file`
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be opened
    pub fn new<P: AsRef<Path>>(log_file: P) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(log_file)?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
        })
    }

    /// Creates a logger that discards everything
    pub fn disabled() -> Self {
        Logger {
            file: Mutex::new(None),
        }
    }

    /// Creates a file logger if a path is given, a disabled one otherwise
    pub fn from_option(log_file: Option<&str>) -> io::Result<Self> {
        match log_file {
            Some(path) => Logger::new(path),
            None => Ok(Logger::disabled()),
        }
    }

    /// Whether messages are actually written anywhere
    pub fn is_enabled(&self) -> bool {
        self.file.lock().map(|file| file.is_some()).unwrap_or(false)
    }

    /// Initialize console logging through `env_logger`
    ///
    /// Output goes to stderr. `RUST_LOG` takes precedence over `verbose`.
    pub fn init_console_logger(verbose: bool) {
        let default_level = if verbose { "debug" } else { "warn" };
        let result = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
            .target(env_logger::Target::Stderr)
            .try_init();

        if result.is_err() {
            eprintln!("Warning: Global logger was already initialized");
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
}
