//! High-level, ergonomic library API: protect a batch of documents described
//! by a `ProtectionConfig`, or a single document, with the default `lopdf`
//! engine or a caller-supplied one. Prefer these entrypoints over wiring the
//! resolver and batch processor by hand.
use std::path::Path;

use crate::core::batch::{BatchProcessor, BatchReport};
use crate::core::params::ProtectionConfig;
use crate::core::resolve::resolve_work_items;
use crate::error::Result;
use crate::io::{DocumentEngine, PdfEngine};

/// Resolve and protect every input of `config` with the default PDF engine.
///
/// Usage and configuration problems are returned as `Err` before any document
/// is opened; per-document failures are recorded in the returned report.
pub fn protect_documents(config: &ProtectionConfig) -> Result<BatchReport> {
    protect_documents_with(&PdfEngine::new(), config)
}

/// Same as [`protect_documents`], with an explicit engine.
pub fn protect_documents_with<E: DocumentEngine>(
    engine: &E,
    config: &ProtectionConfig,
) -> Result<BatchReport> {
    let items = resolve_work_items(config)?;
    Ok(BatchProcessor::new(engine, config).run(items))
}

/// Protect one document at `output`, returning that document's error if it failed.
pub fn protect_document(
    input: &Path,
    output: &Path,
    existing_password: &str,
    new_password: &str,
    overwrite: bool,
) -> Result<()> {
    let config = ProtectionConfig::new([input])
        .with_output(output)
        .with_existing_password(existing_password)
        .with_new_password(new_password)
        .with_overwrite(overwrite);

    let mut report = protect_documents(&config)?;
    match report.failures.pop() {
        Some(failure) => Err(failure.error),
        None => Ok(()),
    }
}
