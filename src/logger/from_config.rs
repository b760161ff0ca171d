//! Logger construction from a loaded [`Config`].

use super::{DailyLogger, FileLogger, Logger, StreamLogger};
use crate::config::Config;
use crate::internal;
use crate::level;
use crate::output::StreamTarget;

fn required_path<'a>(path: Option<&'a str>, target: &str) -> Result<&'a str, crate::Error> {
    path.ok_or_else(|| crate::Error::InvalidPath(format!("target {target} needs logger.path")))
}

/// Applies `[general]` to the process and builds the logger described by `[logger]`.
///
/// Also sets the process-wide threshold from `general.level`.
///
/// # Errors
/// [`crate::Error::InvalidTarget`] for an unknown target, [`crate::Error::InvalidPath`] when
/// `file`/`daily` has no path, and any construction error of the chosen logger.
pub fn from_config(config: &Config) -> Result<Box<dyn Logger + Send>, crate::Error> {
    let threshold = config.parse_level();
    level::set_logging_level(threshold);
    internal::debug("LOGGER", &format!("Log level: {threshold}"));

    let section = &config.logger;
    let target = section.target.to_lowercase();
    let line_ending = config.parse_line_ending();

    let path = || required_path(section.path.as_deref(), &target);

    let logger: Box<dyn Logger + Send> = match target.as_str() {
        "file" => {
            let mut builder = FileLogger::builder(path()?)
                .format(section.format.as_str())
                .line_ending(line_ending);
            if let Some(enabled) = section.auto_flush {
                builder = builder.auto_flush(enabled);
            }
            if let Some(enabled) = section.colors {
                builder = builder.colors(enabled);
            }
            Box::new(builder.build()?)
        }
        "daily" => {
            let rotation = &config.rotation;
            let mut builder = DailyLogger::builder(path()?)
                .format(section.format.as_str())
                .line_ending(line_ending)
                .at(rotation.hour, rotation.minute, rotation.second)
                .poll_interval(config.poll_interval());
            if let Some(enabled) = section.auto_flush {
                builder = builder.auto_flush(enabled);
            }
            if let Some(enabled) = section.colors {
                builder = builder.colors(enabled);
            }
            Box::new(builder.build()?)
        }
        other => {
            let stream: StreamTarget = other.parse()?;
            let mut builder = StreamLogger::builder()
                .target(stream)
                .format(section.format.as_str())
                .line_ending(line_ending);
            if let Some(enabled) = section.auto_flush {
                builder = builder.auto_flush(enabled);
            }
            if let Some(enabled) = section.colors {
                builder = builder.colors(enabled);
            }
            Box::new(builder.build())
        }
    };

    internal::debug("LOGGER", &format!("Logger ready ({target})"));
    Ok(logger)
}
