//! Logger appending to a single file.

use super::{FileLoggerBuilder, Logger, LoggerCore};
use crate::internal;
use crate::output::{FileSink, Sink};
use std::path::Path;

/// Appends to one file for its whole lifetime. Flushed on drop.
pub struct FileLogger {
    pub(super) core: LoggerCore,
    pub(super) sink: FileSink,
}

impl FileLogger {
    /// Opens `path` with defaults: no template, colors off, auto-flush on.
    ///
    /// # Errors
    /// [`crate::Error::InvalidPath`] or [`crate::Error::FileOpen`].
    pub fn new(path: &str) -> Result<Self, crate::Error> {
        Self::builder(path).build()
    }

    #[must_use]
    pub fn builder(path: &str) -> FileLoggerBuilder {
        FileLoggerBuilder::new(path)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.sink.path()
    }

    /// Truncates the file; the next write starts at offset 0.
    ///
    /// # Errors
    /// I/O errors from flushing or truncating.
    pub fn clear_logs(&mut self) -> Result<(), crate::Error> {
        self.sink.clear()
    }
}

impl Logger for FileLogger {
    fn core(&self) -> &LoggerCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut LoggerCore {
        &mut self.core
    }

    fn emit(&mut self, text: &str) -> Result<(), crate::Error> {
        self.sink.write(text.as_bytes())
    }

    fn flush(&mut self) -> Result<(), crate::Error> {
        self.sink.flush()
    }
}

impl Drop for FileLogger {
    fn drop(&mut self) {
        if let Err(e) = self.sink.flush() {
            internal::warn(
                "FILE",
                &format!("Final flush failed for {}: {e}", self.sink.path().display()),
            );
        }
    }
}
