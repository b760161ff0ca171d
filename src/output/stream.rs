//! Console streams: the default destination when no file is configured.

use super::Sink;
use crate::internal;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

/// `Stdlog` writes through once this much output is pending.
const STDLOG_BUFFER: usize = 8 * 1024;

/// Which console stream a stream logger writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreamTarget {
    #[default]
    Stdout,
    Stderr,
    /// Diagnostic log stream. Shares the stderr descriptor but is only flushed on request
    /// or with auto-flush, like a buffered error log.
    Stdlog,
}

impl StreamTarget {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
            Self::Stdlog => "stdlog",
        }
    }
}

impl fmt::Display for StreamTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StreamTarget {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stdout" | "out" => Ok(Self::Stdout),
            "stderr" | "err" => Ok(Self::Stderr),
            "stdlog" | "log" | "clog" => Ok(Self::Stdlog),
            _ => Err(crate::Error::InvalidTarget(s.to_string())),
        }
    }
}

/// Writes to the process's stdout or stderr.
#[derive(Debug)]
pub struct StreamSink {
    target: StreamTarget,
    /// `Stdlog` output waiting for a flush.
    pending: Vec<u8>,
}

impl StreamSink {
    #[must_use]
    pub const fn new(target: StreamTarget) -> Self {
        Self {
            target,
            pending: Vec::new(),
        }
    }

    #[must_use]
    pub const fn target(&self) -> StreamTarget {
        self.target
    }
}

impl Sink for StreamSink {
    fn write(&mut self, bytes: &[u8]) -> Result<(), crate::Error> {
        match self.target {
            StreamTarget::Stdout => io::stdout().lock().write_all(bytes)?,
            StreamTarget::Stderr => io::stderr().lock().write_all(bytes)?,
            StreamTarget::Stdlog => {
                self.pending.extend_from_slice(bytes);
                if self.pending.len() >= STDLOG_BUFFER {
                    Sink::flush(self)?;
                }
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), crate::Error> {
        match self.target {
            StreamTarget::Stdout => io::stdout().flush()?,
            StreamTarget::Stderr => io::stderr().flush()?,
            StreamTarget::Stdlog => {
                let mut err = io::stderr().lock();
                err.write_all(&self.pending)?;
                err.flush()?;
                self.pending.clear();
            }
        }
        Ok(())
    }
}

/// Diagnostic for a failed final flush. `None` for stderr: the diagnostic channel writes there
/// itself, so reporting would re-enter this path.
fn drop_failure_message(target: StreamTarget, error: &crate::Error) -> Option<String> {
    (target != StreamTarget::Stderr).then(|| format!("Final flush of {target} failed: {error}"))
}

impl Drop for StreamSink {
    fn drop(&mut self) {
        if let Err(e) = Sink::flush(self)
            && let Some(msg) = drop_failure_message(self.target, &e)
        {
            internal::warn("STREAM", &msg);
        }
    }
}
