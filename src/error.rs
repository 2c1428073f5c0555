//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Separates usage and configuration problems (raised before any document is
//! touched) from per-document failures (password, I/O, collision).
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Usage(String),

    #[error("{0}")]
    Configuration(String),

    #[error("Error processing {}: {reason}", .input.display())]
    DocumentPassword { input: PathBuf, reason: String },

    #[error("Error processing {}: {reason}", .input.display())]
    DocumentIo { input: PathBuf, reason: String },

    #[error(
        "Error processing {}: A file of the same name already exists in the output location ({}) and the overwrite flag (-f) was not set",
        .input.display(),
        .output.display()
    )]
    Collision { input: PathBuf, output: PathBuf },

    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

/// Coarse classification of an [`Error`], used for reporting and exit codes.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorClass {
    Usage,
    Configuration,
    Password,
    Io,
    Collision,
    Unsupported,
}

impl Error {
    pub fn class(&self) -> ErrorClass {
        match self {
            Error::Usage(_) => ErrorClass::Usage,
            Error::Configuration(_) => ErrorClass::Configuration,
            Error::DocumentPassword { .. } => ErrorClass::Password,
            Error::DocumentIo { .. } => ErrorClass::Io,
            Error::Collision { .. } => ErrorClass::Collision,
            Error::NotImplemented(_) => ErrorClass::Unsupported,
        }
    }

    /// True for errors tied to a single document rather than the whole invocation.
    pub fn is_per_document(&self) -> bool {
        matches!(
            self.class(),
            ErrorClass::Password | ErrorClass::Io | ErrorClass::Collision
        )
    }
}
