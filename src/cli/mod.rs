//! Command Line Interface (CLI) layer for pdf-protector.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that selects a frontend, runs the
//! batch and maps the result to an exit code. It wires user-provided options
//! to the library functionality exposed via `pdf_protector::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::{report_parse_error, run};
