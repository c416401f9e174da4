//! Cross-reference check: the agent must be mentioned in the project-wide
//! documents.

use std::collections::BTreeMap;

use regex::Regex;

use crate::checks::percentage;
use crate::domain::{CheckResult, Detail};
use crate::layout::DocsLayout;

/// Search the three project documents for mentions of `agent_name`.
///
/// `AGENTS.md` and `docs/MANIFEST.md` each require a case-insensitive
/// occurrence of the name; `CLAUDE.md` requires the name followed on the
/// same line by a version token (`v<digits>.<digits>`). A missing document
/// and an unmatched one both fail that document's point, with distinct
/// violation wording.
pub fn check(layout: &DocsLayout, agent_name: &str) -> CheckResult {
    let mut details = BTreeMap::new();
    let mut violations = Vec::new();
    let mut matched = 0usize;

    let documents = [
        (
            "agentsMd",
            "AGENTS.md",
            layout.agents_md(),
            format!("(?i){agent_name}"),
            "Agent not found in AGENTS.md",
        ),
        (
            "manifestMd",
            "MANIFEST.md",
            layout.manifest_md(),
            format!("(?i){agent_name}"),
            "Agent documents not found in MANIFEST.md",
        ),
        (
            "claudeMd",
            "CLAUDE.md",
            layout.claude_md(),
            format!(r"(?i){agent_name}.*v\d+\.\d+"),
            "Agent completion not reflected in CLAUDE.md",
        ),
    ];

    for (key, doc_name, path, pattern, unmatched) in documents {
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let hit = mentions(&content, &pattern);
                details.insert(key.to_string(), Detail::Flag(hit));
                if hit {
                    matched += 1;
                } else {
                    violations.push(unmatched.to_string());
                }
            }
            Err(_) => {
                details.insert(key.to_string(), Detail::Flag(false));
                violations.push(format!("{doc_name} not found"));
            }
        }
    }

    CheckResult {
        score: percentage(matched, 3),
        violations,
        details,
    }
}

/// The agent name is interpolated into the pattern unescaped — regex
/// metacharacters in a name keep their meaning. A name whose pattern fails
/// to compile counts as unmatched.
fn mentions(content: &str, pattern: &str) -> bool {
    Regex::new(pattern)
        .map(|re| re.is_match(content))
        .unwrap_or(false)
}
