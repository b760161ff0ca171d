//! Configuration struct definitions.

use serde::Deserialize;

/// Settings that apply to every logger in the process.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Initial process-wide threshold.
    pub level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "trace".to_string(),
        }
    }
}

/// The logger built by `from_config`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// `stdout`, `stderr`, `stdlog`, `file`, or `daily`.
    pub target: String,
    /// Log file path for `file`; file-name template for `daily`.
    pub path: Option<String>,
    /// Line template, e.g. `[%F %T] [%^lvl] %msg`.
    pub format: String,
    /// Flush after every write.
    pub auto_flush: Option<bool>,
    /// Turn color markup into ANSI escapes.
    pub colors: Option<bool>,
    /// `lf`, `crlf`, or `cr`. Platform default when unset.
    pub line_ending: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            target: "stdout".to_string(),
            path: None,
            format: String::new(),
            auto_flush: None,
            colors: None,
            line_ending: None,
        }
    }
}

/// Time of day for the daily logger to switch files.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// How often the rotation thread checks the clock. Zero is rejected when the logger is built.
    pub poll_interval_ms: u64,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            hour: 0,
            minute: 0,
            second: 0,
            poll_interval_ms: 1000,
        }
    }
}

/// sblogger's own diagnostics on stderr.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InternalConfig {
    pub level: String,
}

impl Default for InternalConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}
