//! Domain-level error taxonomy for docaudit.
//!
//! Check-level faults (a missing folder, a malformed metadata file, an
//! unmatched cross-reference) are not errors — they collapse into a lowered
//! score plus violation strings on the affected category. Only environment
//! failures that prevent the run from completing surface here.

use std::path::PathBuf;

/// docaudit environment errors.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("agents directory unreadable: {path}")]
    AgentsDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report to {path}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for docaudit domain operations.
pub type Result<T> = std::result::Result<T, AuditError>;
