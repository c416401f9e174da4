//! Per-agent evaluation and run-level aggregation.
//!
//! The audit is fully sequential: discover agent directories in sorted
//! order, run the four checks against each, and fold the results into one
//! [`SummaryReport`]. Check-level faults lower scores; only an unreadable
//! agents directory aborts the run.

use std::collections::BTreeMap;

use crate::checks::{backlog, project_refs, state, structure};
use crate::domain::{AgentChecks, AgentReport, Result, SummaryReport};
use crate::layout::{discover_agent_folders, DocsLayout};
use crate::obs;

/// Run all four compliance checks for one agent directory.
pub fn evaluate_agent(layout: &DocsLayout, folder: &str) -> AgentReport {
    let agent_dir = layout.agent_dir(folder);

    let checks = AgentChecks {
        documentation_structure: structure::check(&agent_dir),
        state_json_format: state::check(&agent_dir),
        project_updates: project_refs::check(layout, folder),
        backlog_format: backlog::check(&agent_dir),
    };

    AgentReport::new(folder, checks)
}

/// Audit every agent directory under the layout's agents dir.
///
/// Agents are evaluated and listed in sorted directory-name order. With no
/// matching directories the summary carries zero agents and a 0.0 total —
/// the averaging step is skipped entirely.
pub fn run_audit(layout: &DocsLayout) -> Result<SummaryReport> {
    let _span = obs::AuditSpan::enter(layout.root());

    let folders = discover_agent_folders(&layout.agents_dir())?;
    obs::emit_audit_started(layout.root(), folders.len());

    let mut agents = BTreeMap::new();
    for folder in &folders {
        let report = evaluate_agent(layout, folder);
        obs::emit_agent_checked(&report);
        agents.insert(folder.clone(), report);
    }

    let summary = SummaryReport::from_agents(agents);
    obs::emit_audit_finished(&summary);
    Ok(summary)
}
