//! docaudit Core Library
//!
//! Audits a documentation tree for structural and content compliance:
//! required folders and files per agent directory, required fields in
//! state/backlog metadata, and cross-references in the project-wide
//! documents. Produces a scored per-agent report and an aggregate summary.

pub mod checks;
pub mod domain;
pub mod evaluator;
pub mod fields;
pub mod layout;
pub mod obs;
pub mod reporting;
pub mod telemetry;

pub use domain::{
    AgentChecks, AgentReport, AuditError, Category, CheckResult, Detail, Grade, Result,
    SummaryReport,
};

pub use evaluator::{evaluate_agent, run_audit};

pub use fields::{field_presence, FieldPresence};

pub use layout::{discover_agent_folders, is_agent_folder_name, DocsLayout};

pub use obs::{emit_agent_checked, emit_audit_finished, emit_audit_started, AuditSpan};

pub use reporting::{render_summary, violation_histogram, write_report_json};

pub use telemetry::init_tracing;

/// docaudit version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
