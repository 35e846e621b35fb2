use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Render a scene description to a plain-text PPM image.
#[derive(Parser, Debug)]
#[command(name = "whitted")]
pub struct Args {
    /// Image width in pixels
    #[arg(value_parser = clap::value_parser!(u32).range(2..))]
    pub width: u32,

    /// Image height in pixels
    #[arg(value_parser = clap::value_parser!(u32).range(2..))]
    pub height: u32,

    /// Scene description file; read from stdin when omitted
    pub scene: Option<PathBuf>,

    /// Cast shadow rays
    #[arg(short, long)]
    pub shadows: bool,

    /// Deepest reflection bounce to follow
    #[arg(long, default_value = "10")]
    pub max_reflect: u32,

    /// Output file; written to stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,
}
