//! Console summary rendering and report artifact writing.
//!
//! Rendering is pure String construction; writing overwrites the fixed
//! artifact path. The tool never creates report directories — a missing
//! parent is an environment failure and propagates.

use std::path::Path;

use chrono::NaiveDate;

use crate::domain::{AuditError, Category, Result, SummaryReport};

const RULE: &str = "============================================================";

/// Render the console summary: header block, per-agent score table,
/// violation-category histogram, and the full violation listing grouped by
/// agent (clean agents are skipped).
pub fn render_summary(report: &SummaryReport, date: NaiveDate) -> String {
    let mut out = String::new();

    out.push_str(RULE);
    out.push('\n');
    out.push_str("AUTOMATED DOCUMENTATION COMPLIANCE REPORT\n");
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("Date: {}\n", date.format("%Y-%m-%d")));
    out.push_str(&format!("Total Agents Checked: {}\n", report.total_agents));
    out.push_str(&format!(
        "Overall Compliance Score: {:.1}%\n",
        report.total_score
    ));
    out.push_str(&format!("Overall Grade: {}\n", report.overall_grade()));

    out.push_str("\n## Agent Scores Summary\n\n");
    out.push_str("| Agent | Score | Grade | Violations |\n");
    out.push_str("|-------|-------|-------|------------|\n");
    for agent in report.agents.values() {
        out.push_str(&format!(
            "| {} | {:.1}% | {} | {} |\n",
            agent.name,
            agent.score,
            agent.grade,
            agent.violations.len()
        ));
    }

    out.push_str("\n## Top Violations\n\n");
    for (category, count) in violation_histogram(report) {
        out.push_str(&format!("- {category}: {count} violations\n"));
    }

    out.push_str("\n## Detailed Violations by Agent\n\n");
    for agent in report.agents.values() {
        if agent.violations.is_empty() {
            continue;
        }
        out.push_str(&format!("### {} ({:.1}%)\n", agent.name, agent.score));
        for violation in &agent.violations {
            out.push_str(&format!("- {violation}\n"));
        }
        out.push('\n');
    }

    out
}

/// Violation counts per category across all agents, in descending count
/// order (ties broken by category name). Clean categories are omitted.
pub fn violation_histogram(report: &SummaryReport) -> Vec<(Category, usize)> {
    let mut counts = [0usize; Category::ALL.len()];
    for agent in report.agents.values() {
        for (slot, (_, result)) in counts.iter_mut().zip(agent.checks.iter()) {
            *slot += result.violations.len();
        }
    }

    let mut histogram: Vec<(Category, usize)> = Category::ALL
        .into_iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .collect();
    histogram.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.as_str().cmp(b.0.as_str())));
    histogram
}

/// Write the report artifact as pretty JSON, overwriting any previous run.
pub fn write_report_json(path: &Path, report: &SummaryReport) -> Result<()> {
    let json = serde_json::to_vec_pretty(report)?;
    std::fs::write(path, json).map_err(|source| AuditError::ReportWrite {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AgentChecks, AgentReport, CheckResult};
    use std::collections::BTreeMap;

    fn check(score: f64, violations: &[&str]) -> CheckResult {
        CheckResult {
            score,
            violations: violations.iter().map(|v| v.to_string()).collect(),
            details: BTreeMap::new(),
        }
    }

    fn sample_report() -> SummaryReport {
        let checks = AgentChecks {
            documentation_structure: check(100.0, &[]),
            state_json_format: check(100.0, &[]),
            project_updates: check(
                0.0,
                &[
                    "Agent not found in AGENTS.md",
                    "Agent documents not found in MANIFEST.md",
                    "Agent completion not reflected in CLAUDE.md",
                ],
            ),
            backlog_format: check(50.0, &[]),
        };
        let mut agents = BTreeMap::new();
        agents.insert(
            "05-notify".to_string(),
            AgentReport::new("05-notify", checks),
        );
        SummaryReport::from_agents(agents)
    }

    #[test]
    fn test_summary_render_is_stable() {
        let report = sample_report();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");

        let actual = render_summary(&report, date);
        let expected = "\
============================================================
AUTOMATED DOCUMENTATION COMPLIANCE REPORT
============================================================
Date: 2024-01-01
Total Agents Checked: 1
Overall Compliance Score: 62.5%
Overall Grade: D

## Agent Scores Summary

| Agent | Score | Grade | Violations |
|-------|-------|-------|------------|
| 05-notify | 62.5% | D | 3 |

## Top Violations

- projectUpdates: 3 violations

## Detailed Violations by Agent

### 05-notify (62.5%)
- [projectUpdates] Agent not found in AGENTS.md
- [projectUpdates] Agent documents not found in MANIFEST.md
- [projectUpdates] Agent completion not reflected in CLAUDE.md

";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_histogram_orders_by_count_then_name() {
        let checks = AgentChecks {
            documentation_structure: check(0.0, &["Missing current/ folder"]),
            state_json_format: check(0.0, &["STATE.json is missing or invalid"]),
            project_updates: check(
                0.0,
                &["AGENTS.md not found", "MANIFEST.md not found"],
            ),
            backlog_format: check(100.0, &[]),
        };
        let mut agents = BTreeMap::new();
        agents.insert("01-a".to_string(), AgentReport::new("01-a", checks));
        let report = SummaryReport::from_agents(agents);

        let histogram = violation_histogram(&report);
        assert_eq!(
            histogram,
            vec![
                (Category::ProjectUpdates, 2),
                (Category::DocumentationStructure, 1),
                (Category::StateJsonFormat, 1),
            ]
        );
    }

    #[test]
    fn test_write_report_overwrites_previous_run() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("automated-compliance-report.json");
        std::fs::write(&path, "stale").expect("seed");

        let report = sample_report();
        write_report_json(&path, &report).expect("write");

        let written: SummaryReport =
            serde_json::from_str(&std::fs::read_to_string(&path).expect("read")).expect("parse");
        assert_eq!(written, report);
    }

    #[test]
    fn test_write_report_missing_parent_propagates() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("current").join("report.json");

        let err = write_report_json(&path, &sample_report()).unwrap_err();
        assert!(err.to_string().contains("failed to write report"));
    }
}
