//! Where rendered text ends up. Loggers only ever see the [`Sink`] trait, so console streams,
//! files, and in-memory buffers are interchangeable behind it.

mod file;
mod stream;

pub use file::{FileSink, validate_path};
pub use stream::{StreamSink, StreamTarget};

use std::sync::{Arc, Mutex, PoisonError};

/// Byte-level output used by every logger.
pub trait Sink: Send {
    /// Writes the whole buffer or fails.
    ///
    /// # Errors
    /// I/O errors from the underlying stream or file.
    fn write(&mut self, bytes: &[u8]) -> Result<(), crate::Error>;

    /// Pushes buffered bytes to the OS.
    ///
    /// # Errors
    /// I/O errors from the underlying stream or file.
    fn flush(&mut self) -> Result<(), crate::Error>;
}

/// Shared in-memory sink. Clones write into the same buffer, so a test (or an embedding
/// application) keeps one handle and gives the other to a logger.
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    buf: Arc<Mutex<Vec<u8>>>,
    flushes: Arc<Mutex<usize>>,
}

impl BufferSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    #[must_use]
    pub fn contents(&self) -> String {
        let buf = self.buf.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Number of `flush` calls seen, for checking auto-flush behavior.
    #[must_use]
    pub fn flush_count(&self) -> usize {
        *self.flushes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn clear(&self) {
        self.buf
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Sink for BufferSink {
    fn write(&mut self, bytes: &[u8]) -> Result<(), crate::Error> {
        self.buf
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(bytes);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), crate::Error> {
        *self.flushes.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        Ok(())
    }
}
