//! backlog.json format check: list structure plus per-item required fields.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;

use crate::checks::{percentage, read_json};
use crate::domain::{CheckResult, Detail};
use crate::fields::field_presence;

const REQUIRED_ITEM_FIELDS: [&str; 7] = [
    "id",
    "fromAgent",
    "toAgent",
    "requestDate",
    "priority",
    "status",
    "request",
];

/// Validate `backlog.json` under `agent_dir`.
///
/// Two points: the first when the top-level `backlog` key holds an array
/// (empty qualifies); the second only when the array is non-empty and every
/// item carries all seven required fields. One invalid item suppresses the
/// second point for the whole list, but each missing field still reports its
/// own violation indexed by item position. An item that is not an object has
/// no fields, so all seven report missing.
pub fn check(agent_dir: &Path) -> CheckResult {
    let Some(doc) = read_json(&agent_dir.join("backlog.json")) else {
        return CheckResult::failed("backlog.json is missing or invalid");
    };

    let mut violations = Vec::new();
    let mut points = 0usize;

    match doc.get("backlog").and_then(Value::as_array) {
        Some(items) => {
            points += 1;
            let mut items_valid = true;
            for (idx, item) in items.iter().enumerate() {
                for field in REQUIRED_ITEM_FIELDS {
                    if !field_presence(item, field).scores() {
                        violations
                            .push(format!("Backlog item {idx} missing required field: {field}"));
                        items_valid = false;
                    }
                }
            }
            if items_valid && !items.is_empty() {
                points += 1;
            }
        }
        None => violations.push(r#"backlog.json missing "backlog" array"#.to_string()),
    }

    let mut details = BTreeMap::new();
    details.insert("hasStructure".to_string(), Detail::Flag(points >= 1));
    details.insert("itemsValid".to_string(), Detail::Flag(points == 2));

    CheckResult {
        score: percentage(points, 2),
        violations,
        details,
    }
}
