//! The four hard-coded compliance checks.
//!
//! Each category exposes one `check(..) -> CheckResult` entry point. A check
//! never aborts the run: missing files, malformed JSON, and unmatched
//! references all collapse to a lowered score plus violation strings.

pub mod backlog;
pub mod project_refs;
pub mod state;
pub mod structure;

use std::path::Path;

use serde_json::Value;

/// Points-to-percentage conversion shared by all categories.
pub(crate) fn percentage(points: usize, total: usize) -> f64 {
    (points as f64 / total as f64) * 100.0
}

/// Read and parse a JSON metadata file. `None` on any read or parse fault —
/// the caller collapses that to a zero-score result with one violation.
pub(crate) fn read_json(path: &Path) -> Option<Value> {
    let content = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}
