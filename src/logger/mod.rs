//! The [`Logger`] trait and its three implementations.
//!
//! Everything a write does beyond handing bytes to a sink (severity gate, rendering,
//! auto-flush, diagnostics on failure) lives in the trait's provided methods, so the
//! stream, file, and rotating-file loggers only supply their sink.

mod builder;
mod daily;
mod file;
mod from_config;
mod stream;

pub use builder::{DailyLoggerBuilder, FileLoggerBuilder, StreamLoggerBuilder};
pub use daily::DailyLogger;
pub use file::FileLogger;
pub use from_config::from_config;
pub use stream::StreamLogger;

use crate::fmt::{self, CallSite, FormatTemplate, RenderContext};
use crate::internal;
use crate::level::{self, Level};
use chrono::Local;
use std::fmt::Display;
use std::str::FromStr;

/// Terminator appended by `write_line` and `new_line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
    /// Classic Mac OS.
    Cr,
}

impl LineEnding {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::Cr => "\r",
        }
    }
}

impl Default for LineEnding {
    fn default() -> Self {
        if cfg!(windows) { Self::CrLf } else { Self::Lf }
    }
}

impl FromStr for LineEnding {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lf" | "unix" => Ok(Self::Lf),
            "crlf" | "windows" => Ok(Self::CrLf),
            "cr" | "mac" => Ok(Self::Cr),
            _ => Err(crate::Error::InvalidLineEnding(s.to_string())),
        }
    }
}

/// One write call, before rendering.
#[derive(Clone, Copy)]
pub struct LogRecord<'a> {
    /// `None` for plain `write`/`write_line`, which only an `Off` threshold suppresses.
    pub level: Option<Level>,
    pub message: &'a str,
    pub args: &'a [&'a dyn Display],
    pub site: Option<&'a CallSite>,
    pub newline: bool,
}

impl<'a> LogRecord<'a> {
    #[must_use]
    pub const fn new(message: &'a str, args: &'a [&'a dyn Display]) -> Self {
        Self {
            level: None,
            message,
            args,
            site: None,
            newline: false,
        }
    }

    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    #[must_use]
    pub const fn line(mut self) -> Self {
        self.newline = true;
        self
    }

    #[must_use]
    pub const fn site(mut self, site: &'a CallSite) -> Self {
        self.site = Some(site);
        self
    }

    /// Whether the current threshold lets this record through.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        match self.level {
            Some(level) => level::should_emit(level),
            None => level::logging_level() != Level::Off,
        }
    }
}

/// Per-logger formatting state shared by all implementations.
#[derive(Debug, Clone)]
pub struct LoggerCore {
    format: FormatTemplate,
    indent: usize,
    auto_flush: bool,
    colors: bool,
    line_ending: LineEnding,
}

impl LoggerCore {
    #[must_use]
    pub fn new(auto_flush: bool, colors: bool) -> Self {
        Self {
            format: FormatTemplate::default(),
            indent: 0,
            auto_flush,
            colors,
            line_ending: LineEnding::default(),
        }
    }

    pub(crate) fn set_format(&mut self, format: FormatTemplate) {
        self.format = format;
    }

    pub(crate) const fn set_auto_flush(&mut self, enabled: bool) {
        self.auto_flush = enabled;
    }

    pub(crate) const fn set_colors(&mut self, enabled: bool) {
        self.colors = enabled;
    }

    pub(crate) const fn set_line_ending(&mut self, ending: LineEnding) {
        self.line_ending = ending;
    }

    #[must_use]
    pub const fn format(&self) -> &FormatTemplate {
        &self.format
    }

    #[must_use]
    pub const fn indent_depth(&self) -> usize {
        self.indent
    }

    #[must_use]
    pub const fn auto_flush(&self) -> bool {
        self.auto_flush
    }

    #[must_use]
    pub const fn colors(&self) -> bool {
        self.colors
    }

    #[must_use]
    pub const fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Renders a record into the exact text handed to the sink.
    #[must_use]
    pub fn render(&self, record: &LogRecord<'_>) -> String {
        let ctx = RenderContext {
            indent: self.indent,
            colors: self.colors,
            level: level::logging_level(),
            site: record.site,
            now: Local::now(),
        };
        let mut text = fmt::render(&self.format, record.message, record.args, &ctx);
        if record.newline {
            text.push_str(self.line_ending.as_str());
        }
        text
    }
}

/// Capability shared by stream, file, and rotating-file loggers.
///
/// Write methods never fail: a sink error is reported on the internal diagnostic channel
/// and the call returns. Only `flush` and `clear_logs` hand errors back.
pub trait Logger {
    fn core(&self) -> &LoggerCore;

    fn core_mut(&mut self) -> &mut LoggerCore;

    /// Hands finished text to the sink.
    ///
    /// # Errors
    /// Sink I/O errors.
    fn emit(&mut self, text: &str) -> Result<(), crate::Error>;

    /// # Errors
    /// Sink I/O errors.
    fn flush(&mut self) -> Result<(), crate::Error>;

    /// Renders without writing, using this logger's template, indent, and colors.
    fn render(&self, message: &str, args: &[&dyn Display]) -> String {
        self.core().render(&LogRecord::new(message, args))
    }

    /// Gate, render, write, and auto-flush one record.
    fn log_record(&mut self, record: &LogRecord<'_>) {
        if !record.is_enabled() {
            return;
        }

        let text = self.core().render(record);
        if let Err(e) = self.emit(&text) {
            internal::warn("LOGGER", &format!("Dropped log write: {e}"));
            return;
        }

        if self.core().auto_flush()
            && let Err(e) = self.flush()
        {
            internal::warn("LOGGER", &format!("Auto-flush failed: {e}"));
        }
    }

    fn write(&mut self, message: &str, args: &[&dyn Display]) {
        self.log_record(&LogRecord::new(message, args));
    }

    fn write_line(&mut self, message: &str, args: &[&dyn Display]) {
        self.log_record(&LogRecord::new(message, args).line());
    }

    /// Bare line terminator: no template, no indent.
    fn new_line(&mut self) {
        if level::logging_level() == Level::Off {
            return;
        }
        let ending = self.core().line_ending().as_str();
        if let Err(e) = self.emit(ending) {
            internal::warn("LOGGER", &format!("Dropped log write: {e}"));
            return;
        }

        if self.core().auto_flush()
            && let Err(e) = self.flush()
        {
            internal::warn("LOGGER", &format!("Auto-flush failed: {e}"));
        }
    }

    /// A full line at `level`.
    fn log(&mut self, level: Level, message: &str, args: &[&dyn Display]) {
        self.log_record(&LogRecord::new(message, args).level(level).line());
    }

    /// Like `write`, but gated at `level` and without a line terminator.
    fn log_partial(&mut self, level: Level, message: &str, args: &[&dyn Display]) {
        self.log_record(&LogRecord::new(message, args).level(level));
    }

    fn trace(&mut self, message: &str, args: &[&dyn Display]) {
        self.log(Level::Trace, message, args);
    }

    fn debug(&mut self, message: &str, args: &[&dyn Display]) {
        self.log(Level::Debug, message, args);
    }

    fn info(&mut self, message: &str, args: &[&dyn Display]) {
        self.log(Level::Info, message, args);
    }

    fn warn(&mut self, message: &str, args: &[&dyn Display]) {
        self.log(Level::Warn, message, args);
    }

    fn error(&mut self, message: &str, args: &[&dyn Display]) {
        self.log(Level::Error, message, args);
    }

    fn critical(&mut self, message: &str, args: &[&dyn Display]) {
        self.log(Level::Critical, message, args);
    }

    /// One more leading tab on every following line. Returns the new depth.
    fn indent(&mut self) -> usize {
        let core = self.core_mut();
        core.indent += 1;
        core.indent
    }

    /// One less leading tab, never below zero. Returns the new depth.
    fn dedent(&mut self) -> usize {
        let core = self.core_mut();
        core.indent = core.indent.saturating_sub(1);
        core.indent
    }

    fn set_format(&mut self, template: &str) {
        self.core_mut().set_format(FormatTemplate::new(template));
    }

    fn format(&self) -> &str {
        self.core().format().as_str()
    }
}
