//! pdf-protector CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, dispatch to the
//! selected frontend, and exit with the status of the resulting outcome.
//! For programmatic use, prefer the library API (`pdf_protector::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let outcome = match cli::CliArgs::try_parse() {
        Ok(args) => cli::run(args),
        Err(e) => cli::report_parse_error(e),
    };
    ExitCode::from(outcome.exit_code())
}
