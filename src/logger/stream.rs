//! Logger over a console stream or any other [`Sink`].

use super::{Logger, LoggerCore, StreamLoggerBuilder};
use crate::output::{Sink, StreamSink, StreamTarget};

/// Writes to stdout, stderr, the buffered `stdlog` stream, or a caller-supplied sink.
pub struct StreamLogger {
    pub(super) core: LoggerCore,
    pub(super) sink: Box<dyn Sink>,
}

impl StreamLogger {
    /// Stdout, no template, colors on, no auto-flush.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    #[must_use]
    pub fn to(target: StreamTarget) -> Self {
        Self::builder().target(target).build()
    }

    #[must_use]
    pub fn builder() -> StreamLoggerBuilder {
        StreamLoggerBuilder::new()
    }

    /// Wraps an arbitrary sink, e.g. a [`crate::output::BufferSink`].
    #[must_use]
    pub fn with_sink(sink: impl Sink + 'static) -> Self {
        Self::builder().sink(sink).build()
    }

    pub(super) fn from_target(target: StreamTarget, core: LoggerCore) -> Self {
        Self {
            core,
            sink: Box::new(StreamSink::new(target)),
        }
    }
}

impl Default for StreamLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for StreamLogger {
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
