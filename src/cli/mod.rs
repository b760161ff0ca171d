//! Command-line front end: log a line or preview a template from the shell.

mod commands;

pub use commands::{cmd_config, cmd_log, cmd_render};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Log level for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Critical,
    Off,
}

impl From<LogLevel> for crate::level::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Self::Trace,
            LogLevel::Debug => Self::Debug,
            LogLevel::Info => Self::Info,
            LogLevel::Warn => Self::Warn,
            LogLevel::Error => Self::Error,
            LogLevel::Critical => Self::Critical,
            LogLevel::Off => Self::Off,
        }
    }
}

/// sblogger - write templated log lines from the command line.
#[derive(Parser)]
#[command(name = "sblogger", version, about = "Write templated log lines")]
pub struct Cli {
    /// Config file (defaults to `<config_dir>/sblogger/sblogger.toml`)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Log one line through the configured logger.
    Log {
        /// Severity of the line
        #[arg(value_enum)]
        level: LogLevel,
        /// Message; may contain `{0}`, `{1}`, ... placeholders
        message: String,
        /// Positional arguments for the placeholders
        args: Vec<String>,
        /// Override the configured template
        #[arg(short, long)]
        format: Option<String>,
        /// Write to this file instead of the configured target
        #[arg(long, value_name = "PATH")]
        file: Option<String>,
    },
    /// Print a rendered line without logging it.
    Render {
        /// Line template, e.g. "[%F %T] [%^lvl] %msg"
        template: String,
        /// Message; may contain `{0}`, `{1}`, ... placeholders
        message: String,
        /// Positional arguments for the placeholders
        args: Vec<String>,
        /// Threshold that `%lvl` resolves to
        #[arg(short, long, value_enum, default_value = "trace")]
        level: LogLevel,
        /// Emit ANSI escapes for color markup
        #[arg(long)]
        colors: bool,
    },
    /// Show where the config lives and what it resolves to.
    Config,
}
