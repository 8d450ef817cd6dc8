//! Dealgate: document validation for startup funding submissions.
//!
//! Given a batch of uploaded files and a claimed startup name, the pipeline
//! decides whether the files are genuine financial/business documents
//! belonging to that startup:
//!
//! 1. **Extraction**: plain text from PDF, Word, PowerPoint, Excel, CSV
//!    and plain-text payloads, dispatched by declared format.
//! 2. **Scoring**: distinct financial vocabulary categories matched, plus
//!    personal-content red flags.
//! 3. **Consistency**: fuzzy similarity between the claimed startup name
//!    and the text.
//! 4. **Verdict**: cross-file rules folded into one accept / reject /
//!    warn decision with a structured explanation.
//!
//! The pipeline is a pure library: no network surface, no persistence, no
//! CLI. The API layer feeds it `UploadedFile`s and serializes the returned
//! `ValidationResult`. Every failure condition is returned as data; nothing
//! here panics on user input.

pub mod config;
pub mod models;
pub mod pipeline;

pub use config::{FinancialCategory, ValidationConfig};
pub use models::{DetectedType, FileAnalysis, ValidationResult};
pub use pipeline::{UploadedFile, Validator};

use tracing_subscriber::EnvFilter;

/// Initialize tracing for embedders that bring no subscriber of their own.
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dealgate=info")),
        )
        .try_init();
}
