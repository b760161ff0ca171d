//! Append-mode log file with path validation.

use super::Sink;
use crate::internal;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Expands `~` and rejects paths that cannot name a log file.
///
/// # Errors
/// [`crate::Error::InvalidPath`] when the path is blank, ends in a separator, or has no
/// extension.
pub fn validate_path(path: &str) -> Result<PathBuf, crate::Error> {
    if path.trim().is_empty() {
        return Err(crate::Error::InvalidPath(
            "file path cannot be empty".to_string(),
        ));
    }

    let expanded = PathBuf::from(shellexpand::tilde(path).as_ref());

    if expanded.file_name().is_none() || path.ends_with(['/', '\\']) {
        return Err(crate::Error::InvalidPath(format!("{path} has no file name")));
    }
    if expanded.extension().is_none_or(|ext| ext.is_empty()) {
        return Err(crate::Error::InvalidPath(format!("{path} has no extension")));
    }

    Ok(expanded)
}

/// An open log file plus the path it was opened with.
///
/// Buffered; the owning logger decides when to flush (every write under auto-flush).
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: BufWriter<File>,
}

impl FileSink {
    /// Validates `path` and opens it for appending, creating the file if needed.
    ///
    /// # Errors
    /// [`crate::Error::InvalidPath`] for malformed paths, [`crate::Error::FileOpen`] when the
    /// OS refuses to open it (permissions, missing parent directory).
    pub fn open(path: &str) -> Result<Self, crate::Error> {
        let path = validate_path(path)?;
        Self::open_validated(path)
    }

    pub(crate) fn open_validated(path: PathBuf) -> Result<Self, crate::Error> {
        match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => {
                internal::debug("FILE", &format!("Opened {}", path.display()));
                Ok(Self {
                    path,
                    file: BufWriter::new(file),
                })
            }
            Err(source) => {
                internal::error(
                    "FILE",
                    &format!("Failed to open {}: {source}", path.display()),
                );
                Err(crate::Error::FileOpen { path, source })
            }
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Truncates the file to zero length. Append mode puts the next write at offset 0.
    ///
    /// # Errors
    /// I/O errors from flushing, truncating, or seeking.
    pub fn clear(&mut self) -> Result<(), crate::Error> {
        self.file.flush()?;
        let file = self.file.get_mut();
        file.set_len(0)?;
        file.seek(SeekFrom::Start(0))?;
        internal::debug("FILE", &format!("Cleared {}", self.path.display()));
        Ok(())
    }

    /// Flushes and closes, reporting the flush result the destructor would swallow.
    ///
    /// # Errors
    /// I/O errors from the final flush.
    pub fn close(mut self) -> Result<(), crate::Error> {
        self.file.flush()?;
        internal::debug("FILE", &format!("Closed {}", self.path.display()));
        Ok(())
    }
}

impl Sink for FileSink {
    fn write(&mut self, bytes: &[u8]) -> Result<(), crate::Error> {
        self.file.write_all(bytes)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), crate::Error> {
        self.file.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_paths_are_invalid() {
        assert!(matches!(
            validate_path(""),
            Err(crate::Error::InvalidPath(_))
        ));
        assert!(matches!(
            validate_path(" "),
            Err(crate::Error::InvalidPath(_))
        ));
    }

    #[test]
    fn directory_like_paths_are_invalid() {
        assert!(validate_path("logs/").is_err());
        assert!(validate_path("logs/app").is_err());
    }

    #[test]
    fn tilde_is_expanded() {
        let path = validate_path("~/app.log").unwrap();
        assert!(!path.starts_with("~"));
    }

    #[test]
    fn regular_path_is_valid() {
        assert_eq!(validate_path("logs/app.log").unwrap(), PathBuf::from("logs/app.log"));
    }
}
