use std::path::PathBuf;

use crate::types::FailurePolicy;

/// Immutable per-invocation configuration, built once from CLI flags or by
/// library callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectionConfig {
    /// Password used to open protected inputs; empty for unprotected ones.
    pub existing_password: String,
    /// User password set on every output; empty leaves outputs openable without one.
    pub new_password: String,
    /// Output directory, or a file path when exactly one input is given
    pub output: PathBuf,
    pub overwrite: bool,
    /// Processed in this order
    pub inputs: Vec<PathBuf>,
    pub failure_policy: FailurePolicy,
}

impl Default for ProtectionConfig {
    fn default() -> Self {
        Self {
            existing_password: String::new(),
            new_password: String::new(),
            output: PathBuf::from("."),
            overwrite: false,
            inputs: Vec::new(),
            failure_policy: FailurePolicy::FailFast,
        }
    }
}

impl ProtectionConfig {
    pub fn new<I, P>(inputs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_existing_password(mut self, password: impl Into<String>) -> Self {
        self.existing_password = password.into();
        self
    }

    pub fn with_new_password(mut self, password: impl Into<String>) -> Self {
        self.new_password = password.into();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }
}
