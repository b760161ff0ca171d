//! Severity levels and the process-wide threshold that gates every write.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

/// Derives `Ord` so a call's level can be compared against the current threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// High-volume instrumentation that would be too noisy outside of development.
    #[default]
    Trace = 0,
    /// Startup, teardown, and state-change details useful for diagnosing issues.
    Debug = 1,
    /// Normal operational milestones.
    Info = 2,
    /// Non-fatal anomalies that may need attention.
    Warn = 3,
    /// Failures that prevent an operation from completing.
    Error = 4,
    /// Failures that leave the process unable to continue.
    Critical = 5,
    /// As a threshold, silences everything. Never used as a call level.
    Off = 6,
}

impl Level {
    /// Lowercase because config files and CLI args use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Critical => "critical",
            Self::Off => "off",
        }
    }

    /// Canonical word substituted for `%lvl` and the predefined abbreviations.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Trace => "Trace",
            Self::Debug => "Debug",
            Self::Info => "Info",
            Self::Warn => "Warn",
            Self::Error => "Error",
            Self::Critical => "Critical",
            Self::Off => "Off",
        }
    }

    /// All-caps form selected by the `^` modifier.
    #[must_use]
    pub const fn upper_name(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
            Self::Off => "OFF",
        }
    }

    /// Every level in severity order, `Off` last.
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Trace,
            Self::Debug,
            Self::Info,
            Self::Warn,
            Self::Error,
            Self::Critical,
            Self::Off,
        ]
    }

    const fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::Trace,
            1 => Self::Debug,
            2 => Self::Info,
            3 => Self::Warn,
            4 => Self::Error,
            5 => Self::Critical,
            _ => Self::Off,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl From<ParseLevelError> for crate::Error {
    fn from(e: ParseLevelError) -> Self {
        Self::InvalidLevel(e.0)
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" | "tr" => Ok(Self::Trace),
            "debug" | "dbg" => Ok(Self::Debug),
            "info" | "inf" => Ok(Self::Info),
            "warn" | "warning" | "wn" => Ok(Self::Warn),
            "error" | "err" | "er" => Ok(Self::Error),
            "critical" | "crit" | "crt" => Ok(Self::Critical),
            "off" | "none" => Ok(Self::Off),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// Process-wide threshold. Relaxed ordering: a verbosity knob needs no happens-before with the
/// writes it gates, and concurrent setters resolve last-writer-wins.
static THRESHOLD: AtomicU8 = AtomicU8::new(Level::Trace as u8);

/// Replaces the threshold shared by every logger in the process.
pub fn set_logging_level(level: Level) {
    THRESHOLD.store(level as u8, Ordering::Relaxed);
}

/// Reads the threshold shared by every logger in the process.
#[must_use]
pub fn logging_level() -> Level {
    Level::from_u8(THRESHOLD.load(Ordering::Relaxed))
}

/// A call at `level` is emitted only at or above the threshold; `Off` never emits.
#[must_use]
pub fn should_emit(level: Level) -> bool {
    passes(level, logging_level())
}

/// Pure form of the gate, for callers that already hold a threshold value.
#[must_use]
pub fn passes(level: Level, threshold: Level) -> bool {
    threshold != Level::Off && level != Level::Off && level >= threshold
}

/// Compile-time floor for the call-site macros, chosen with the `max-level-*` features.
pub const STATIC_MIN_LEVEL: Level = if cfg!(feature = "max-level-off") {
    Level::Off
} else if cfg!(feature = "max-level-critical") {
    Level::Critical
} else if cfg!(feature = "max-level-error") {
    Level::Error
} else if cfg!(feature = "max-level-warn") {
    Level::Warn
} else if cfg!(feature = "max-level-info") {
    Level::Info
} else if cfg!(feature = "max-level-debug") {
    Level::Debug
} else {
    Level::Trace
};
