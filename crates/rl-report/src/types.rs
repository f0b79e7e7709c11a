//! Report metadata types.

use serde::{Deserialize, Serialize};

/// Manifest written next to each report file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportManifest {
    pub experiment: String,
    /// RFC 3339 export timestamp.
    pub written_at: String,
    pub rows: usize,
}
