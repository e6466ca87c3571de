//! Runner
//!
//! Reads a host input document, evaluates it and writes the result document.

use std::{
    fs::File,
    io::{self, BufReader, Read, Write},
    path::Path,
};

use thiserror::Error;
use tracing::info;

use crate::{cart::RunInput, discounts::FunctionRunResult, run::run};

/// Errors raised at the JSON and I/O boundary.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// Input was not a valid run input document, or output could not be serialized.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Output layout for the result document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Single-line JSON.
    #[default]
    Compact,

    /// Indented JSON.
    Pretty,
}

/// Parse input from `reader`, evaluate it, and write the result to `writer`.
///
/// # Errors
///
/// - [`RunnerError::Json`]: the input could not be parsed, or the output could not be serialized.
/// - [`RunnerError::Io`]: reading or writing failed.
pub fn execute<R: Read, W: Write>(
    reader: R,
    mut writer: W,
    format: OutputFormat,
) -> Result<FunctionRunResult, RunnerError> {
    let input: RunInput = serde_json::from_reader(reader)?;
    let result = run(&input);

    match format {
        OutputFormat::Compact => serde_json::to_writer(&mut writer, &result)?,
        OutputFormat::Pretty => serde_json::to_writer_pretty(&mut writer, &result)?,
    }

    writer.write_all(b"\n")?;
    writer.flush()?;

    info!(
        lines = input.cart.len(),
        discounts = result.discounts.len(),
        "evaluated cart"
    );

    Ok(result)
}

/// Evaluate the document at `input`, or stdin when `input` is `None`, writing the result to `writer`.
///
/// # Errors
///
/// - [`RunnerError::Io`]: the input file could not be opened, or reading or writing failed.
/// - [`RunnerError::Json`]: the input could not be parsed, or the output could not be serialized.
pub fn execute_input<W: Write>(
    input: Option<&Path>,
    writer: W,
    format: OutputFormat,
) -> Result<FunctionRunResult, RunnerError> {
    match input {
        Some(path) => execute(BufReader::new(File::open(path)?), writer, format),
        None => execute(io::stdin().lock(), writer, format),
    }
}
