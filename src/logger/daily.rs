//! Logger that switches to a freshly named file once a day.

use super::{DailyLoggerBuilder, Logger, LoggerCore};
use crate::rotation::{RotationSchedule, RotationScheduler};
use chrono::{DateTime, Local};
use std::path::PathBuf;

/// File logger whose file name is a template re-rendered at a fixed time each day.
///
/// Writes and rotations share one lock, so a line never straddles two files. Dropping the
/// logger stops the rotation thread before the file is closed.
pub struct DailyLogger {
    pub(super) core: LoggerCore,
    pub(super) scheduler: RotationScheduler,
}

impl DailyLogger {
    /// Rotates at midnight with defaults: colors off, auto-flush on.
    ///
    /// # Errors
    /// [`crate::Error::InvalidPath`] or [`crate::Error::FileOpen`] for the first file.
    pub fn new(path_template: &str) -> Result<Self, crate::Error> {
        Self::builder(path_template).build()
    }

    /// Rotates daily at `hour:minute:second` local time.
    ///
    /// # Errors
    /// [`crate::Error::TimeRange`] before anything is opened, then the errors of [`Self::new`].
    pub fn at(
        path_template: &str,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, crate::Error> {
        Self::builder(path_template).at(hour, minute, second).build()
    }

    #[must_use]
    pub fn builder(path_template: &str) -> DailyLoggerBuilder {
        DailyLoggerBuilder::new(path_template)
    }

    /// Truncates the file currently receiving writes.
    ///
    /// # Errors
    /// I/O errors, or an error when a failed rotation left no file open.
    pub fn clear_logs(&mut self) -> Result<(), crate::Error> {
        self.scheduler.clear()
    }

    #[must_use]
    pub fn current_path(&self) -> PathBuf {
        self.scheduler.current_path()
    }

    /// Rotations performed since construction.
    #[must_use]
    pub fn rotation_count(&self) -> u64 {
        self.scheduler.rotation_count()
    }

    #[must_use]
    pub fn next_rotation(&self) -> DateTime<Local> {
        self.scheduler.next_rotation()
    }

    #[must_use]
    pub fn schedule(&self) -> &RotationSchedule {
        self.scheduler.schedule()
    }
}

impl Logger for DailyLogger {
    fn core(&self) -> &LoggerCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut LoggerCore {
        &mut self.core
    }

    fn emit(&mut self, text: &str) -> Result<(), crate::Error> {
        self.scheduler.write(text.as_bytes())
    }

    fn flush(&mut self) -> Result<(), crate::Error> {
        self.scheduler.flush()
    }
}
