//! sblogger's own diagnostics: file opens, rotations, and write failures that a log call
//! cannot return to its caller.
//!
//! Always goes to stderr and has its own threshold so that silencing application logs
//! (`set_logging_level(Level::Off)`) does not hide a failing disk.

use crate::config::Config;
use crate::fmt::{self, FormatTemplate, RenderContext};
use crate::level::{self, Level};
use crate::output::{Sink, StreamSink, StreamTarget};
use chrono::Local;
use std::sync::OnceLock;

/// Used until `init` runs.
pub const DEFAULT_LEVEL: Level = Level::Warn;

static INTERNAL_LEVEL: OnceLock<Level> = OnceLock::new();

/// Sets the diagnostic threshold. Only the first call takes effect.
pub fn init(level: Level) {
    if INTERNAL_LEVEL.set(level).is_ok() {
        debug("INTERNAL", &format!("Internal log level: {level}"));
    }
}

/// Reuses an already-loaded config instead of reading it again.
pub fn init_with_config(config: &Config) {
    init(config.internal_level());
}

/// Threshold currently applied to diagnostics.
#[must_use]
pub fn level() -> Level {
    INTERNAL_LEVEL.get().copied().unwrap_or(DEFAULT_LEVEL)
}

fn log(level: Level, scope: &str, msg: &str) {
    if !level::passes(level, self::level()) {
        return;
    }

    let prefix = fmt::render(
        &FormatTemplate::default(),
        "[%F %T] [sblogger] {0} {1}  ",
        &[&level.upper_name(), &scope],
        &RenderContext::plain(level, Local::now()),
    );

    let mut sink = StreamSink::new(StreamTarget::Stderr);
    let line = format!("{prefix}{msg}\n");
    // Nowhere left to report a failure of the side channel itself.
    let _ = sink.write(line.as_bytes());
}

pub fn trace(scope: &str, msg: &str) {
    log(Level::Trace, scope, msg);
}

pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

/// Recoverable problems: a dropped write, a failed flush.
pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}

/// Failures that lose data or leave a logger without a file.
pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
