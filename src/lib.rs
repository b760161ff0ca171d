#![forbid(unsafe_code)]

//! `sblogger` - small formatting logger with daily file rotation.
//!
//! - Template-driven lines: `%msg` splicing, `{n}` arguments, padding directives,
//!   `{red}`-style color markup, level and call-site tokens, strftime date/time
//! - Console, single-file, and daily-rotating loggers behind one [`Logger`] trait
//! - A process-wide severity threshold
//! - TOML configuration with `source = "..."` includes
//!
//! # Example
//!
//! ```no_run
//! use sblogger::{Level, Logger, StreamLogger};
//!
//! sblogger::set_logging_level(Level::Info);
//!
//! let mut logger = StreamLogger::builder()
//!     .format("[%F %T] [{green}%^lvl{reset}] %msg")
//!     .build();
//!
//! logger.info("user {0} logged in", &[&"ada"]);
//! logger.debug("filtered out", &[]);
//! ```
//!
//! # Features
//!
//! - `colors` (default): emit ANSI escapes for color markup; without it markup is stripped
//! - `cli` (default): the `sblogger` binary
//! - `max-level-*`: compile-time floor for the `sb_*!` macros

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
mod macros;
pub mod output;
pub mod rotation;

pub use config::Config;
pub use error::Error;
pub use fmt::{CallSite, Color, FormatTemplate};
pub use level::{Level, logging_level, set_logging_level, should_emit};
pub use logger::{
    DailyLogger, DailyLoggerBuilder, FileLogger, FileLoggerBuilder, LineEnding, LogRecord, Logger,
    LoggerCore, StreamLogger, StreamLoggerBuilder, from_config,
};
pub use output::{BufferSink, FileSink, Sink, StreamSink, StreamTarget};
pub use rotation::{Clock, ManualClock, RotationSchedule, SystemClock, TimeOfDay};
