//! Structured observability hooks for the audit lifecycle.
//!
//! This module provides:
//! - An audit-scoped tracing span via the `AuditSpan` RAII guard
//! - Emission functions for key lifecycle events: start, per-agent result,
//!   finish
//!
//! Events are emitted at `info!` level and honor the `RUST_LOG` env var.

use std::path::Path;

use tracing::info;

use crate::domain::{AgentReport, SummaryReport};

/// RAII guard that enters an audit-scoped tracing span for the duration of
/// a run.
pub struct AuditSpan {
    _span: tracing::span::EnteredSpan,
}

impl AuditSpan {
    /// Create and enter a span tagged with the audited root.
    pub fn enter(root: &Path) -> Self {
        let span = tracing::info_span!("docaudit.run", root = %root.display());
        Self {
            _span: span.entered(),
        }
    }
}

/// Emit event: audit started over a discovered set of agent directories.
pub fn emit_audit_started(root: &Path, total_agents: usize) {
    info!(
        event = "audit.started",
        root = %root.display(),
        total_agents = total_agents,
    );
}

/// Emit event: one agent directory checked.
pub fn emit_agent_checked(report: &AgentReport) {
    info!(
        event = "audit.agent_checked",
        agent = %report.name,
        score = report.score,
        grade = %report.grade,
        violations = report.violations.len(),
    );
}

/// Emit event: audit finished with the run-level score.
pub fn emit_audit_finished(summary: &SummaryReport) {
    info!(
        event = "audit.finished",
        total_agents = summary.total_agents,
        total_score = summary.total_score,
        grade = %summary.overall_grade(),
    );
}
