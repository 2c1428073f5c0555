use thiserror::Error;

use pdf_protector::Outcome;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No PDF document(s) specified for input")]
    NoInputs,

    #[error(transparent)]
    Protect(#[from] pdf_protector::Error),

    #[error("Failed to write report: {0}")]
    Report(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn outcome(&self) -> Outcome {
        match self {
            AppError::NoInputs => Outcome::UsageError,
            AppError::Protect(e) => e.class().into(),
            AppError::Report(_) | AppError::Io(_) => Outcome::ProcessingFailure,
        }
    }

    /// Per-document errors already carry their "Error processing <file>" prefix.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Protect(e) if e.is_per_document() => e.to_string(),
            other => format!("Error: {other}"),
        }
    }
}
