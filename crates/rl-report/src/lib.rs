//! rl-report: audit report artifacts.
//!
//! Turns the in-memory action log into a tabular file under a reports
//! directory, with a small JSON manifest alongside. Export is idempotent:
//! re-running it rewrites the same rows.

pub mod store;
pub mod types;

pub use store::ReportStore;
pub use types::ReportManifest;

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid report name: {name}")]
    InvalidName { name: String },
}
