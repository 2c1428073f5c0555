//! Output-path resolution: turns a `ProtectionConfig` into ordered work items.
//!
//! Whether the output location is a directory is decided once, up front, so a
//! multi-input batch against a file path fails before any document is opened.
use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::core::params::ProtectionConfig;
use crate::error::{Error, Result};

/// One resolved (input, output) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkItem {
    pub input: PathBuf,
    pub output: PathBuf,
}

pub fn resolve_work_items(config: &ProtectionConfig) -> Result<Vec<WorkItem>> {
    if config.inputs.is_empty() {
        return Err(Error::Usage(
            "No PDF document(s) specified for input".to_string(),
        ));
    }

    let output_is_dir = config.output.is_dir();
    debug!(
        "Resolving {} input(s) against {:?} (directory: {})",
        config.inputs.len(),
        config.output,
        output_is_dir
    );

    if output_is_dir {
        config
            .inputs
            .iter()
            .map(|input| {
                let name = input.file_name().ok_or_else(|| {
                    Error::Configuration(format!(
                        "Input path {:?} does not name a file",
                        input
                    ))
                })?;
                Ok(WorkItem {
                    input: input.clone(),
                    output: config.output.join(name),
                })
            })
            .collect()
    } else if config.inputs.len() == 1 {
        Ok(vec![WorkItem {
            input: config.inputs[0].clone(),
            output: config.output.clone(),
        }])
    } else {
        Err(Error::Configuration(
            "Multiple PDF documents specified for input, but output location is not a directory"
                .to_string(),
        ))
    }
}
