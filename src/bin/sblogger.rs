//! `sblogger` binary: one-shot logging and template previews.
//!
//! Usage:
//!   sblogger log <level> <message> [args]...     Log through the configured logger
//!   sblogger render <template> <message> [args]  Print a rendered line
//!   sblogger config                              Show the effective configuration

use clap::Parser;
use sblogger::cli::{Cli, Command, cmd_config, cmd_log, cmd_render};
use sblogger::config::Config;
use sblogger::internal;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match loaded {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    internal::init_with_config(&config);

    match cli.command {
        Command::Log {
            level,
            message,
            args,
            format,
            file,
        } => cmd_log(
            &config,
            level,
            &message,
            &args,
            format.as_deref(),
            file.as_deref(),
        ),
        Command::Render {
            template,
            message,
            args,
            level,
            colors,
        } => cmd_render(&template, &message, &args, level, colors),
        Command::Config => cmd_config(&config),
    }
}
