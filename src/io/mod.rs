//! I/O layer: the `DocumentEngine` capability trait and its `lopdf`-backed
//! implementation used by the CLI and the high-level `api`.
pub mod engine;
pub use engine::{DocumentEngine, EngineError};

pub mod pdf;
pub use pdf::PdfEngine;
