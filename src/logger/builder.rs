//! Stepwise construction for the three loggers.
//!
//! Every builder shares the formatting setters; the file-backed ones validate and open
//! their path only in `build`.

use super::{DailyLogger, FileLogger, LineEnding, LoggerCore, StreamLogger};
use crate::fmt::FormatTemplate;
use crate::internal;
use crate::output::{FileSink, Sink, StreamTarget};
use crate::rotation::{
    Clock, DEFAULT_POLL_INTERVAL, RotationSchedule, RotationScheduler, SystemClock, TimeOfDay,
};
use std::sync::Arc;
use std::time::Duration;

/// Setters every builder has, forwarding to its [`LoggerCore`].
macro_rules! core_setters {
    () => {
        /// Line template; `%msg` marks where the message goes.
        #[must_use]
        pub fn format(mut self, template: impl Into<FormatTemplate>) -> Self {
            self.core.set_format(template.into());
            self
        }

        /// Flush the sink after every write.
        #[must_use]
        pub const fn auto_flush(mut self, enabled: bool) -> Self {
            self.core.set_auto_flush(enabled);
            self
        }

        /// Turn color markup into ANSI escapes instead of stripping it.
        #[must_use]
        pub const fn colors(mut self, enabled: bool) -> Self {
            self.core.set_colors(enabled);
            self
        }

        #[must_use]
        pub const fn line_ending(mut self, ending: LineEnding) -> Self {
            self.core.set_line_ending(ending);
            self
        }
    };
}

/// Builds a [`StreamLogger`].
pub struct StreamLoggerBuilder {
    core: LoggerCore,
    target: StreamTarget,
    sink: Option<Box<dyn Sink>>,
}

impl StreamLoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            core: LoggerCore::new(false, true),
            target: StreamTarget::default(),
            sink: None,
        }
    }

    core_setters!();

    #[must_use]
    pub const fn target(mut self, target: StreamTarget) -> Self {
        self.target = target;
        self
    }

    /// Replaces the console stream; `target` is ignored afterwards.
    #[must_use]
    pub fn sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    #[must_use]
    pub fn build(self) -> StreamLogger {
        match self.sink {
            Some(sink) => StreamLogger {
                core: self.core,
                sink,
            },
            None => {
                internal::debug("LOGGER", &format!("Stream logger on {}", self.target));
                StreamLogger::from_target(self.target, self.core)
            }
        }
    }
}

impl Default for StreamLoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a [`FileLogger`].
pub struct FileLoggerBuilder {
    core: LoggerCore,
    path: String,
}

impl FileLoggerBuilder {
    #[must_use]
    pub fn new(path: &str) -> Self {
        Self {
            core: LoggerCore::new(true, false),
            path: path.to_string(),
        }
    }

    core_setters!();

    /// # Errors
    /// [`crate::Error::InvalidPath`] or [`crate::Error::FileOpen`].
    pub fn build(self) -> Result<FileLogger, crate::Error> {
        let sink = FileSink::open(&self.path)?;
        Ok(FileLogger {
            core: self.core,
            sink,
        })
    }
}

/// Builds a [`DailyLogger`].
pub struct DailyLoggerBuilder {
    core: LoggerCore,
    path_template: String,
    at: (u32, u32, u32),
    poll_interval: Duration,
    clock: Arc<dyn Clock>,
}

impl DailyLoggerBuilder {
    #[must_use]
    pub fn new(path_template: &str) -> Self {
        Self {
            core: LoggerCore::new(true, false),
            path_template: path_template.to_string(),
            at: (0, 0, 0),
            poll_interval: DEFAULT_POLL_INTERVAL,
            clock: Arc::new(SystemClock),
        }
    }

    core_setters!();

    /// Local time of day to rotate at. Checked in `build`.
    #[must_use]
    pub const fn at(mut self, hour: u32, minute: u32, second: u32) -> Self {
        self.at = (hour, minute, second);
        self
    }

    /// How often the rotation thread compares the clock against the deadline. Must be
    /// non-zero; `build` rejects [`Duration::ZERO`].
    #[must_use]
    pub const fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Time source for deadlines and file names.
    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Validates the time, opens the first file, and starts the rotation thread.
    ///
    /// # Errors
    /// [`crate::Error::TimeRange`] or [`crate::Error::ZeroPollInterval`] (nothing opened, no
    /// thread started),
    /// [`crate::Error::InvalidPath`], [`crate::Error::FileOpen`], or [`crate::Error::Io`]
    /// if the thread cannot be spawned.
    pub fn build(self) -> Result<DailyLogger, crate::Error> {
        let (hour, minute, second) = self.at;
        let at = TimeOfDay::new(hour, minute, second)?;
        let schedule = RotationSchedule::new(self.path_template, at);
        let scheduler = RotationScheduler::start(schedule, self.clock, self.poll_interval)?;
        Ok(DailyLogger {
            core: self.core,
            scheduler,
        })
    }
}
