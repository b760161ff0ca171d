//! TOML configuration loading with `source = "..."` includes.
//!
//! Includes are merged at the TOML table level before deserialization, so a key set in the
//! including file always wins over the same key from an included one.

mod structs;

pub use structs::{GeneralConfig, InternalConfig, LoggerConfig, RotationConfig};

use crate::internal;
use crate::level::Level;
use crate::logger::LineEnding;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// An empty file yields a working stdout logger: every section is `#[serde(default)]`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub logger: LoggerConfig,
    pub rotation: RotationConfig,
    pub internal: InternalConfig,
}

/// Scans raw TOML for top-level `source = "..."` lines before parsing.
/// Returns the include paths and the remaining TOML with those lines removed.
#[doc(hidden)]
#[must_use]
pub fn extract_sources(content: &str) -> (Vec<String>, String) {
    let mut sources = Vec::new();
    let mut remaining = String::new();

    for line in content.lines() {
        let trimmed = line.trim();
        let is_source = trimmed
            .strip_prefix("source")
            .is_some_and(|rest| rest.trim_start().starts_with('='));
        if is_source {
            if let Some(path) = trimmed
                .split_once('=')
                .map(|(_, v)| v.trim().trim_matches('"').trim_matches('\''))
                && !path.is_empty()
            {
                sources.push(path.to_string());
            }
        } else {
            remaining.push_str(line);
            remaining.push('\n');
        }
    }

    (sources, remaining)
}

/// Recursively overlays `over` onto `base`; nested tables merge, other values replace.
fn merge_tables(base: &mut toml::Table, over: toml::Table) {
    for (key, value) in over {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(incoming)) => {
                merge_tables(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

impl Config {
    /// Loads the default config file, or defaults when it does not exist.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::get_config_path()?;
        internal::debug("CONFIG", &format!("Loading config from {}", path.display()));
        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path. A missing file yields defaults.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed, or contains cyclic includes.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        let table = Self::load_table(path, &mut HashSet::new())?;
        Ok(toml::Value::Table(table).try_into()?)
    }

    /// Parses config text directly, without include support.
    ///
    /// # Errors
    /// TOML syntax or type errors.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    fn load_table(path: &Path, seen: &mut HashSet<PathBuf>) -> Result<toml::Table, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(toml::Table::new());
        }

        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        if !seen.insert(canonical.clone()) {
            internal::warn(
                "CONFIG",
                &format!("Cyclic include detected: {}", canonical.display()),
            );
            return Err(crate::Error::CyclicInclude(canonical));
        }

        let content = fs::read_to_string(path)?;
        let (sources, toml_content) = extract_sources(&content);
        let own: toml::Table = toml::from_str(&toml_content)?;

        let mut merged = toml::Table::new();
        for source in sources {
            let expanded = shellexpand::tilde(&source);
            let source_path = Path::new(expanded.as_ref());
            if source_path.exists() {
                internal::debug("CONFIG", &format!("Processing source: {source}"));
                merge_tables(&mut merged, Self::load_table(source_path, seen)?);
            } else {
                internal::warn("CONFIG", &format!("Source file not found: {source}"));
            }
        }
        merge_tables(&mut merged, own);

        Ok(merged)
    }

    /// `<config_dir>/sblogger/sblogger.toml`.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("sblogger").join("sblogger.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Config stores level as a string for TOML ergonomics; unknown names fall back to `Trace`.
    #[must_use]
    pub fn parse_level(&self) -> Level {
        self.general.level.parse().unwrap_or(Level::Trace)
    }

    #[must_use]
    pub fn internal_level(&self) -> Level {
        self.internal.level.parse().unwrap_or(internal::DEFAULT_LEVEL)
    }

    /// Unknown or missing values fall back to the platform line ending.
    #[must_use]
    pub fn parse_line_ending(&self) -> LineEnding {
        self.logger
            .line_ending
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.rotation.poll_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_sources_strips_include_lines() {
        let (sources, rest) = extract_sources("source = \"a.toml\"\n[general]\nlevel = \"info\"\n");
        assert_eq!(sources, vec!["a.toml".to_string()]);
        assert!(!rest.contains("source"));
        assert!(rest.contains("level"));
    }

    #[test]
    fn source_prefixed_keys_are_not_includes() {
        let (sources, rest) = extract_sources("sources_dir = \"x\"\n");
        assert!(sources.is_empty());
        assert!(rest.contains("sources_dir"));
    }

    #[test]
    fn merge_prefers_overlay_and_keeps_nested_keys() {
        let mut base: toml::Table = toml::from_str("[a]\nx = 1\ny = 2\n").unwrap();
        let over: toml::Table = toml::from_str("[a]\ny = 3\n").unwrap();
        merge_tables(&mut base, over);
        assert_eq!(base["a"]["x"].as_integer(), Some(1));
        assert_eq!(base["a"]["y"].as_integer(), Some(3));
    }

    #[test]
    fn empty_config_is_default() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.logger.target, "stdout");
        assert_eq!(config.rotation.poll_interval_ms, 1000);
    }
}
