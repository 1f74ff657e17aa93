use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Find and remove images no Markdown document references")]
pub struct Cli {
    /// The root directory of the project
    #[clap(long, short, default_value = ".", global = true)]
    pub root: PathBuf,

    /// Config file to use instead of `<root>/.marker.json`
    #[clap(long, short, global = true)]
    pub config: Option<PathBuf>,

    #[clap(long, short, default_value = "warn", value_enum, global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Remove relative path images that exist locally but are not referenced.
    ///
    /// There can be multiple files and directories (nested) under the root.
    Remove {
        /// Delete the images. Without this flag they are only listed.
        #[clap(long, short)]
        yes: bool,

        #[clap(long, short, default_value = "text", value_enum)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Silent,
}

impl LogLevel {
    pub fn to_tracing_level(self) -> Option<tracing::Level> {
        match self {
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Silent => None,
        }
    }
}
