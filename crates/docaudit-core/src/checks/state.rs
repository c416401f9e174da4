//! STATE.json format check: required fields plus an allowed-status rule.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;

use crate::checks::{percentage, read_json};
use crate::domain::{CheckResult, Detail};
use crate::fields::{field_presence, FieldPresence};

const REQUIRED_FIELDS: [&str; 4] = ["agentNumber", "currentVersion", "status", "lastUpdated"];

const VALID_STATUSES: [&str; 4] = ["planning", "in-progress", "complete", "active"];

/// Validate `STATE.json` under `agent_dir`.
///
/// An absent or unparsable file scores exactly 0 with one violation and no
/// details — no partial credit. Otherwise five sub-checks score one point
/// each: presence of the four required fields, plus `validStatus` (the
/// `status` value must be one of the allowed set). A present-but-invalid
/// status emits its own violation; a missing status is only reported once,
/// by the missing-field message.
pub fn check(agent_dir: &Path) -> CheckResult {
    let Some(state) = read_json(&agent_dir.join("STATE.json")) else {
        return CheckResult::failed("STATE.json is missing or invalid");
    };

    let mut details = BTreeMap::new();
    let mut violations = Vec::new();
    let mut points = 0usize;

    for field in REQUIRED_FIELDS {
        let scores = field_presence(&state, field).scores();
        details.insert(field.to_string(), Detail::Point(scores as u8));
        if scores {
            points += 1;
        } else {
            violations.push(format!("STATE.json missing required field: {field}"));
        }
    }

    let valid_status = matches!(
        state.get("status"),
        Some(Value::String(s)) if VALID_STATUSES.contains(&s.as_str())
    );
    details.insert("validStatus".to_string(), Detail::Point(valid_status as u8));
    if valid_status {
        points += 1;
    } else if let FieldPresence::Present(value) = field_presence(&state, "status") {
        violations.push(format!("Invalid status value: {}", display_value(value)));
    }

    CheckResult {
        score: percentage(points, REQUIRED_FIELDS.len() + 1),
        violations,
        details,
    }
}

/// Bare string for string values, JSON rendering otherwise.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_state(dir: &Path, content: &str) {
        std::fs::write(dir.join("STATE.json"), content).expect("write STATE.json");
    }

    #[test]
    fn test_valid_state_scores_100() {
        let dir = tempdir().expect("tempdir");
        write_state(
            dir.path(),
            r#"{"agentNumber": 5, "currentVersion": "1.0", "status": "active", "lastUpdated": "2024-01-01"}"#,
        );

        let result = check(dir.path());
        assert_eq!(result.score, 100.0);
        assert!(result.violations.is_empty());
        assert_eq!(result.details.get("validStatus"), Some(&Detail::Point(1)));
    }

    #[test]
    fn test_missing_file_scores_exactly_0_with_one_violation() {
        let dir = tempdir().expect("tempdir");

        let result = check(dir.path());
        assert_eq!(result.score, 0.0);
        assert_eq!(
            result.violations,
            vec!["STATE.json is missing or invalid"]
        );
        assert!(result.details.is_empty());
    }

    #[test]
    fn test_malformed_file_scores_exactly_0() {
        let dir = tempdir().expect("tempdir");
        write_state(dir.path(), "{broken");

        let result = check(dir.path());
        assert_eq!(result.score, 0.0);
        assert_eq!(result.violations.len(), 1);
        assert!(result.details.is_empty());
    }

    #[test]
    fn test_invalid_status_emits_one_violation_and_loses_one_point() {
        let dir = tempdir().expect("tempdir");
        write_state(
            dir.path(),
            r#"{"agentNumber": 5, "currentVersion": "1.0", "status": "done", "lastUpdated": "2024-01-01"}"#,
        );

        let result = check(dir.path());
        // status field itself is present; only validStatus fails.
        assert_eq!(result.score, 80.0);
        assert_eq!(result.violations, vec!["Invalid status value: done"]);
        assert_eq!(result.details.get("status"), Some(&Detail::Point(1)));
        assert_eq!(result.details.get("validStatus"), Some(&Detail::Point(0)));
    }

    #[test]
    fn test_missing_status_reports_field_once_without_invalid_message() {
        let dir = tempdir().expect("tempdir");
        write_state(
            dir.path(),
            r#"{"agentNumber": 5, "currentVersion": "1.0", "lastUpdated": "2024-01-01"}"#,
        );

        let result = check(dir.path());
        // Both the field point and validStatus are lost, with one message.
        assert_eq!(result.score, 60.0);
        assert_eq!(
            result.violations,
            vec!["STATE.json missing required field: status"]
        );
    }

    #[test]
    fn test_empty_and_zero_fields_count_as_absent() {
        let dir = tempdir().expect("tempdir");
        write_state(
            dir.path(),
            r#"{"agentNumber": 0, "currentVersion": "", "status": "active", "lastUpdated": "2024-01-01"}"#,
        );

        let result = check(dir.path());
        assert_eq!(result.score, 60.0);
        assert_eq!(
            result.violations,
            vec![
                "STATE.json missing required field: agentNumber",
                "STATE.json missing required field: currentVersion",
            ]
        );
    }

    #[test]
    fn test_non_string_status_is_invalid() {
        let dir = tempdir().expect("tempdir");
        write_state(
            dir.path(),
            r#"{"agentNumber": 5, "currentVersion": "1.0", "status": 3, "lastUpdated": "2024-01-01"}"#,
        );

        let result = check(dir.path());
        assert_eq!(result.score, 80.0);
        assert_eq!(result.violations, vec!["Invalid status value: 3"]);
    }
}
