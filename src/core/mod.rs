//! Core orchestration: the per-invocation `ProtectionConfig`, output-path
//! resolution into work items, and the sequential batch processor. These are
//! consumed by the high-level `api` module and the CLI.
pub mod batch;
pub mod params;
pub mod resolve;
