#![doc = r#"
pdf-protector — batch-apply, replace or remove password protection on PDF documents.

Every output is protected with the same policy: an empty owner password,
unrestricted permissions, and AES with a 256-bit key. Only the user password
varies. Setting an empty new password produces an output that opens without a
password, which is how protection is removed.

Quick start: protect a batch into a directory
---------------------------------------------
```rust,no_run
use pdf_protector::{protect_documents, ProtectionConfig};

fn main() -> pdf_protector::Result<()> {
    let config = ProtectionConfig::new(["/in/report.pdf", "/in/invoice.pdf"])
        .with_new_password("s3cret")
        .with_output("/out");

    let report = protect_documents(&config)?;
    for failure in &report.failures {
        eprintln!("{}", failure.message);
    }
    Ok(())
}
```

Single document
---------------
```rust,no_run
use std::path::Path;

fn main() -> pdf_protector::Result<()> {
    pdf_protector::protect_document(
        Path::new("locked.pdf"),
        Path::new("relocked.pdf"),
        "old-password",
        "new-password",
        false, // overwrite
    )
}
```

Batch semantics
---------------
Inputs are processed sequentially in the order given. By default the batch is
fail-fast: the first document that cannot be opened, protected or saved stops
the run and later inputs are reported as not attempted. Use
[`FailurePolicy::ContinueOnError`] to process everything and collect every
failure.

Custom engines
--------------
The codec sits behind [`DocumentEngine`]; [`PdfEngine`] is the `lopdf`-backed
default. Pass another implementation to [`protect_documents_with`].

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — configuration, path resolution and the batch processor.
- [`io`] — the document engine trait and PDF implementation.
- [`types`] — `ProtectionPolicy`, `FailurePolicy`, `Outcome`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::batch::{BatchFailure, BatchProcessor, BatchReport};
pub use crate::core::params::ProtectionConfig;
pub use crate::core::resolve::{WorkItem, resolve_work_items};
pub use error::{Error, ErrorClass, Result};
pub use io::{DocumentEngine, EngineError, PdfEngine};
pub use types::{AccessPermissions, FailurePolicy, Outcome, ProtectionPolicy};

pub use api::{protect_document, protect_documents, protect_documents_with};
