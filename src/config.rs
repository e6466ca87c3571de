//! Runner configuration

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::runner::OutputFormat;

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Tiered discounts function runner
#[derive(Debug, Parser)]
#[command(
    name = "tiered-discounts",
    about = "Evaluate a cart input document and print the discount result",
    long_about = None
)]
pub struct Config {
    /// Input document path; reads stdin when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output layout (compact, pretty)
    #[arg(long, value_enum, default_value_t = OutputFormat::Compact)]
    pub output_format: OutputFormat,

    /// Logging settings
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
