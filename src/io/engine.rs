//! The document engine seam: opening, protecting and saving documents.
//!
//! The batch processor only talks to this trait, so the PDF codec can be
//! swapped (or faked in tests) without touching orchestration code.
use std::path::Path;

use thiserror::Error;

use crate::types::ProtectionPolicy;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{0}")]
    InvalidPassword(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed document: {0}")]
    Malformed(String),

    #[error("Unsupported protection: {0}")]
    Unsupported(String),
}

/// Capability the batch processor needs from a document codec.
pub trait DocumentEngine {
    type Document;

    /// Load `path`, unlocking it with `password` if it is protected.
    fn open(&self, path: &Path, password: &str) -> Result<Self::Document, EngineError>;

    /// Apply `policy` to the in-memory document.
    fn protect(
        &self,
        document: &mut Self::Document,
        policy: &ProtectionPolicy,
    ) -> Result<(), EngineError>;

    fn save(&self, document: &mut Self::Document, path: &Path) -> Result<(), EngineError>;

    /// Release the document. Called on every path that opened one.
    fn close(&self, document: Self::Document) {
        drop(document);
    }
}
