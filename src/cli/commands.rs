//! Subcommand handlers. Each returns an exit code and reports failures on the internal
//! diagnostic channel.

use super::LogLevel;
use crate::config::Config;
use crate::fmt::{self, FormatTemplate, RenderContext};
use crate::internal;
use crate::level::{self, Level};
use crate::logger::{self, FileLogger, Logger};
use chrono::Local;
use std::fmt::Display;
use std::process::ExitCode;

fn as_display(args: &[String]) -> Vec<&dyn Display> {
    args.iter().map(|a| a as &dyn Display).collect()
}

/// Logs one line through the logger described by `config`, or a file logger when `file`
/// is given.
#[must_use]
pub fn cmd_log(
    config: &Config,
    level: LogLevel,
    message: &str,
    args: &[String],
    format: Option<&str>,
    file: Option<&str>,
) -> ExitCode {
    let built: Result<Box<dyn Logger + Send>, crate::Error> = match file {
        Some(path) => {
            level::set_logging_level(config.parse_level());
            FileLogger::new(path).map(|l| Box::new(l) as Box<dyn Logger + Send>)
        }
        None => logger::from_config(config),
    };

    let mut logger = match built {
        Ok(logger) => logger,
        Err(e) => {
            internal::error("CLI", &format!("Cannot build logger: {e}"));
            return ExitCode::FAILURE;
        }
    };

    if let Some(template) = format {
        logger.set_format(template);
    }
    logger.log(level.into(), message, &as_display(args));

    if let Err(e) = logger.flush() {
        internal::error("CLI", &format!("Flush failed: {e}"));
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Prints `template` rendered with `message` to stdout.
#[must_use]
pub fn cmd_render(
    template: &str,
    message: &str,
    args: &[String],
    level: LogLevel,
    colors: bool,
) -> ExitCode {
    let ctx = RenderContext {
        colors,
        ..RenderContext::plain(level.into(), Local::now())
    };
    let line = fmt::render(
        &FormatTemplate::new(template),
        message,
        &as_display(args),
        &ctx,
    );
    println!("{line}");
    ExitCode::SUCCESS
}

/// Prints the config path and the effective logger settings.
#[must_use]
pub fn cmd_config(config: &Config) -> ExitCode {
    match Config::get_config_path() {
        Ok(path) => println!("path:        {}", path.display()),
        Err(e) => println!("path:        ({e})"),
    }

    let threshold: Level = config.parse_level();
    println!("level:       {threshold}");
    println!("target:      {}", config.logger.target);
    println!(
        "file:        {}",
        config.logger.path.as_deref().unwrap_or("-")
    );
    println!("format:      {}", config.logger.format);
    println!(
        "rotation:    {:02}:{:02}:{:02} every day, polled every {:?}",
        config.rotation.hour,
        config.rotation.minute,
        config.rotation.second,
        config.poll_interval()
    );
    println!("diagnostics: {}", config.internal_level());
    ExitCode::SUCCESS
}
