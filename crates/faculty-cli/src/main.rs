// Rust guideline compliant 2026-10-16

//! Faculty CLI Application
//!
//! Command-line interface to the Faculty platform.

use clap::Parser;
use faculty_cli::logging::init_tracing;
use faculty_cli::{create_formatter, error_envelope, exit_code, run, should_use_color, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let formatter = create_formatter(cli.json, !cli.no_color && should_use_color());

    let _guard = match init_tracing(&cli.log_level, cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("{err:#}");
            return ExitCode::from(64);
        }
    };

    match run(cli) {
        Ok(code) => exit_status(code),
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("{}", formatter.format_error(&error_envelope(&err)));
            exit_status(exit_code(&err))
        }
    }
}

fn exit_status(code: i32) -> ExitCode {
    u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
}
