use std::io::Write;

use clap::error::ErrorKind;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use pdf_protector::{Error, Outcome, protect_documents};

use super::args::CliArgs;
use super::errors::AppError;

const HELP_HINT: &str = "For help, use 'pdf-protector -h'.";

/// Which user-facing surface handles the invocation.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Frontend {
    BatchCli,
    /// Graphical mode; not implemented.
    Interactive,
}

impl Frontend {
    pub fn select(args: &CliArgs) -> Self {
        if args.gui {
            Frontend::Interactive
        } else {
            Frontend::BatchCli
        }
    }
}

/// Terminate `message` with a single period and append the help hint.
fn with_help_hint(message: &str) -> String {
    format!("{}.  {}", message.trim_end().trim_end_matches('.'), HELP_HINT)
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => return,
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run_batch(args: &CliArgs) -> Result<Outcome, AppError> {
    if args.inputs.is_empty() {
        return Err(AppError::NoInputs);
    }

    let config = args.to_config();
    debug!(
        "Output location: {:?}, overwrite: {}, failure policy: {}",
        config.output, config.overwrite, config.failure_policy
    );

    let report = protect_documents(&config)?;

    for failure in &report.failures {
        eprintln!("{}", with_help_hint(&failure.message));
    }

    if args.json {
        let mut stdout = std::io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &report)?;
        writeln!(stdout)?;
    }

    Ok(match report.first_failure() {
        None => Outcome::Success,
        Some(failure) => failure.class.into(),
    })
}

pub fn run(args: CliArgs) -> Outcome {
    init_logging(args.log);

    let result = match Frontend::select(&args) {
        Frontend::BatchCli => run_batch(&args),
        Frontend::Interactive => Err(Error::NotImplemented("Graphical user interface").into()),
    };

    match result {
        Ok(outcome) => {
            info!("Finished with outcome {:?}", outcome);
            outcome
        }
        Err(e) => {
            eprintln!("{}", with_help_hint(&e.user_message()));
            e.outcome()
        }
    }
}

/// Print a clap parse result that stopped before `run` (help, version or a
/// malformed invocation) and classify it.
pub fn report_parse_error(err: clap::Error) -> Outcome {
    let outcome = match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Outcome::Help,
        _ => Outcome::UsageError,
    };
    let _ = err.print();
    outcome
}
