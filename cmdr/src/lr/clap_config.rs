// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Parser, ValueEnum};
use r3bl_line_reader::{DEFAULT_LOG_FILE_NAME, TracingConfig};
use tracing_core::LevelFilter;

pub const DEFAULT_PROMPT: &str = "lr> ";

#[derive(Debug, Parser)]
#[command(bin_name = "lr")]
#[command(about = "Interactive prompt with line editing and history, on a raw terminal")]
#[command(version)]
#[command(next_line_help = true)]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version}\n\nUSAGE:\n  lr [\x1b[34mOptions\x1b[0m]\n\n{all-args}\n"
)]
/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
/// - <https://developerlife.com/2023/09/17/tuify-clap/>
pub struct CLIArg {
    #[arg(long, short = 'p', default_value = DEFAULT_PROMPT, help = "Prompt to show before each line")]
    pub prompt: String,

    #[arg(long, short = 'l', help = "Log app output to a file for debugging")]
    pub enable_logging: bool,

    #[arg(
        long,
        value_name = "PATH",
        default_value = DEFAULT_LOG_FILE_NAME,
        help = "File to write logs to, when logging is enabled"
    )]
    pub log_file: String,

    #[arg(long, value_enum, default_value_t = LogLevel::Debug, help = "Most verbose level to log")]
    pub log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    #[clap(help = "Also log every decoded key press")]
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(log_level: LogLevel) -> Self {
        match log_level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

impl CLIArg {
    /// Logging goes to a file only. The terminal is in raw mode and belongs to the
    /// editor.
    #[must_use]
    pub fn tracing_config(&self) -> Option<TracingConfig> {
        self.enable_logging.then(|| {
            TracingConfig::new_file(Some(self.log_file.clone()), self.log_level.into())
        })
    }
}
