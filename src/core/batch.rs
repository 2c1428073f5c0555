//! Sequential batch processor: opens, protects and saves each work item through
//! a `DocumentEngine`, arbitrating collisions and aggregating a `BatchReport`.
use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, warn};

use crate::core::params::ProtectionConfig;
use crate::core::resolve::WorkItem;
use crate::error::{Error, ErrorClass, Result};
use crate::io::engine::{DocumentEngine, EngineError};
use crate::types::{FailurePolicy, ProtectionPolicy};

/// A work item that did not produce an output file.
#[derive(Debug, Serialize)]
pub struct BatchFailure {
    pub item: WorkItem,
    pub class: ErrorClass,
    pub message: String,
    #[serde(skip_serializing)]
    pub error: Error,
}

/// Aggregated outcome of a batch run.
#[derive(Debug, Default, Serialize)]
pub struct BatchReport {
    pub succeeded: Vec<WorkItem>,
    pub failures: Vec<BatchFailure>,
    /// Inputs skipped because an earlier item failed under fail-fast.
    pub not_attempted: Vec<PathBuf>,
}

impl BatchReport {
    pub fn overall_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn first_failure(&self) -> Option<&BatchFailure> {
        self.failures.first()
    }
}

pub struct BatchProcessor<'a, E: DocumentEngine> {
    engine: &'a E,
    config: &'a ProtectionConfig,
}

impl<'a, E: DocumentEngine> BatchProcessor<'a, E> {
    pub fn new(engine: &'a E, config: &'a ProtectionConfig) -> Self {
        Self { engine, config }
    }

    /// Process `items` in order. Under `FailFast` the run stops at the first
    /// failure and the remaining inputs are listed as not attempted.
    pub fn run(&self, items: Vec<WorkItem>) -> BatchReport {
        let mut report = BatchReport::default();
        let mut items = items.into_iter();

        while let Some(item) = items.next() {
            info!("Processing: {:?} -> {:?}", item.input, item.output);

            match self.process(&item) {
                Ok(()) => {
                    info!("Successfully protected: {:?}", item.output);
                    report.succeeded.push(item);
                }
                Err(error) => {
                    warn!("{}", error);
                    report.failures.push(BatchFailure {
                        class: error.class(),
                        message: error.to_string(),
                        item,
                        error,
                    });
                    if self.config.failure_policy == FailurePolicy::FailFast {
                        report.not_attempted = items.by_ref().map(|rest| rest.input).collect();
                        break;
                    }
                }
            }
        }

        info!(
            "Batch complete: {} protected, {} failed, {} not attempted",
            report.succeeded.len(),
            report.failures.len(),
            report.not_attempted.len()
        );
        report
    }

    /// Pending -> Opened -> Protected -> Saved, or one of the failure states.
    pub fn process(&self, item: &WorkItem) -> Result<()> {
        let mut document = self
            .engine
            .open(&item.input, &self.config.existing_password)
            .map_err(|e| document_error(item, e))?;

        let policy = ProtectionPolicy::for_user_password(&self.config.new_password);
        if let Err(e) = self.engine.protect(&mut document, &policy) {
            self.engine.close(document);
            return Err(document_error(item, e));
        }

        if item.output.exists() && !self.config.overwrite {
            self.engine.close(document);
            return Err(Error::Collision {
                input: item.input.clone(),
                output: item.output.clone(),
            });
        }

        let saved = self.engine.save(&mut document, &item.output);
        self.engine.close(document);
        saved.map_err(|e| document_error(item, e))
    }
}

fn document_error(item: &WorkItem, err: EngineError) -> Error {
    match err {
        EngineError::InvalidPassword(reason) => Error::DocumentPassword {
            input: item.input.clone(),
            reason,
        },
        other => Error::DocumentIo {
            input: item.input.clone(),
            reason: other.to_string(),
        },
    }
}
