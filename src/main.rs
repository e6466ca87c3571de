//! Tiered discounts function runner.

use std::{io, process::ExitCode};

use tiered_discounts::{config::Config, observability, runner};
use tracing::error;

fn main() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            // clap renders its own usage and help output
            _ = err.print();

            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(err) = observability::init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln for subscriber errors"
        )]
        {
            eprintln!("Logging error: {err}");
        }

        return ExitCode::FAILURE;
    }

    match evaluate(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "evaluation failed");

            ExitCode::FAILURE
        }
    }
}

fn evaluate(config: &Config) -> Result<(), runner::RunnerError> {
    runner::execute_input(
        config.input.as_deref(),
        io::stdout().lock(),
        config.output_format,
    )?;

    Ok(())
}
