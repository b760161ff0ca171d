//! Unified error type for all sblogger operations.
//!
//! Construction failures (bad path, unopenable file, out-of-range rotation time) are the only
//! errors a logger surfaces synchronously. Per-write failures go to the internal side channel.

use std::path::PathBuf;

/// Error type for sblogger operations.
#[derive(Debug)]
pub enum Error {
    /// Path is empty, blank, or lacks a file name or extension.
    InvalidPath(String),
    /// Path is well-formed but the file could not be opened.
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A rotation hour/minute/second is outside its valid range.
    TimeRange {
        field: &'static str,
        value: u32,
        max: u32,
    },
    /// Rotation poll interval of zero, which would busy-loop the rotation thread.
    ZeroPollInterval,
    /// I/O error on an already-open sink.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Cyclic include detected in config sources.
    CyclicInclude(PathBuf),
    /// Invalid log level string.
    InvalidLevel(String),
    /// Unknown output target name in config or CLI input.
    InvalidTarget(String),
    /// Unknown line ending name.
    InvalidLineEnding(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPath(s) => write!(f, "invalid path: {s}"),
            Self::FileOpen { path, source } => {
                write!(f, "cannot open log file {}: {source}", path.display())
            }
            Self::TimeRange { field, value, max } => {
                write!(f, "{field} must be between 0 and {max}, got {value}")
            }
            Self::ZeroPollInterval => write!(f, "rotation poll interval must be non-zero"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::CyclicInclude(p) => write!(f, "cyclic include: {}", p.display()),
            Self::InvalidLevel(level) => write!(f, "invalid level: {level}"),
            Self::InvalidTarget(target) => write!(f, "invalid output target: {target}"),
            Self::InvalidLineEnding(s) => write!(f, "invalid line ending: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileOpen { source, .. } => Some(source),
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}

impl Error {
    /// Tests and callers match on the kind without caring about the payload.
    #[must_use]
    pub const fn is_construction_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidPath(_)
                | Self::FileOpen { .. }
                | Self::TimeRange { .. }
                | Self::ZeroPollInterval
        )
    }
}
