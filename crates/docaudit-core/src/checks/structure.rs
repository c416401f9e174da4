//! Documentation structure check: required folders and files per agent
//! directory.

use std::collections::BTreeMap;
use std::path::Path;

use crate::checks::percentage;
use crate::domain::{CheckResult, Detail};

#[derive(Clone, Copy)]
enum ItemKind {
    Folder,
    File,
}

/// The six required items: sub-check key, on-disk name, kind.
const REQUIRED_ITEMS: [(&str, &str, ItemKind); 6] = [
    ("current", "current", ItemKind::Folder),
    ("working", "working", ItemKind::Folder),
    ("versions", "versions", ItemKind::Folder),
    ("stateJson", "STATE.json", ItemKind::File),
    ("changelog", "CHANGELOG.md", ItemKind::File),
    ("backlog", "backlog.json", ItemKind::File),
];

/// Score the presence of the required layout under `agent_dir`.
///
/// Presence is a plain existence test; a missing agent directory reads as
/// all six items absent.
pub fn check(agent_dir: &Path) -> CheckResult {
    let mut details = BTreeMap::new();
    let mut violations = Vec::new();
    let mut present = 0usize;

    for (key, name, kind) in REQUIRED_ITEMS {
        let exists = agent_dir.join(name).exists();
        details.insert(key.to_string(), Detail::Point(exists as u8));
        if exists {
            present += 1;
        } else {
            match kind {
                ItemKind::Folder => violations.push(format!("Missing {key}/ folder")),
                ItemKind::File => violations.push(format!("Missing {name}")),
            }
        }
    }

    CheckResult {
        score: percentage(present, REQUIRED_ITEMS.len()),
        violations,
        details,
    }
}
