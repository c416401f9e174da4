//! Compliance report data model.
//!
//! A run produces one [`SummaryReport`]: per-agent [`AgentReport`]s keyed by
//! directory name, each aggregating four category [`CheckResult`]s into a
//! 0–100 score and a letter [`Grade`].
//!
//! # Invariants
//!
//! Every `CheckResult.score` is in `[0, 100]`. `AgentReport.score` is the
//! unweighted arithmetic mean of exactly four category scores, so it stays in
//! `[0, 100]` too. Violation lists are never null — empty when clean. All
//! values are built fresh per run and only persist as the written report file.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Grades
// ---------------------------------------------------------------------------

/// Letter grade derived from a 0–100 score via fixed, inclusive cut points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Map a score to its grade: ≥90 A, ≥80 B, ≥70 C, ≥60 D, else F.
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Grade::A
        } else if score >= 80.0 {
            Grade::B
        } else if score >= 70.0 {
            Grade::C
        } else if score >= 60.0 {
            Grade::D
        } else {
            Grade::F
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.write_str(letter)
    }
}

// ---------------------------------------------------------------------------
// Check results
// ---------------------------------------------------------------------------

/// Value of one named sub-check inside a category.
///
/// Presence-style sub-checks record a 0/1 point; match-style sub-checks
/// record a boolean. Serialized untagged so the report carries plain `1`/`0`
/// and `true`/`false` values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Detail {
    Flag(bool),
    Point(u8),
}

/// Outcome of one check category for one agent directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Category score in 0–100.
    pub score: f64,

    /// Human-readable violations (empty when clean).
    pub violations: Vec<String>,

    /// Sub-check name → outcome. Empty when the category's input file was
    /// missing or unparsable (no partial credit).
    pub details: BTreeMap<String, Detail>,
}

impl CheckResult {
    /// Zero score with a single violation and no details — the shape every
    /// missing-or-malformed metadata file collapses to.
    pub fn failed(violation: impl Into<String>) -> Self {
        Self {
            score: 0.0,
            violations: vec![violation.into()],
            details: BTreeMap::new(),
        }
    }

    /// Whether the category is fully clean.
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// The four independent check categories, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    DocumentationStructure,
    StateJsonFormat,
    ProjectUpdates,
    BacklogFormat,
}

impl Category {
    /// All categories in the order they aggregate and flatten.
    pub const ALL: [Category; 4] = [
        Category::DocumentationStructure,
        Category::StateJsonFormat,
        Category::ProjectUpdates,
        Category::BacklogFormat,
    ];

    /// Serialized name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::DocumentationStructure => "documentationStructure",
            Category::StateJsonFormat => "stateJsonFormat",
            Category::ProjectUpdates => "projectUpdates",
            Category::BacklogFormat => "backlogFormat",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four category results for one agent, keyed by category name when
/// serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentChecks {
    pub documentation_structure: CheckResult,
    pub state_json_format: CheckResult,
    pub project_updates: CheckResult,
    pub backlog_format: CheckResult,
}

impl AgentChecks {
    /// Category results in report order.
    pub fn iter(&self) -> [(Category, &CheckResult); 4] {
        [
            (
                Category::DocumentationStructure,
                &self.documentation_structure,
            ),
            (Category::StateJsonFormat, &self.state_json_format),
            (Category::ProjectUpdates, &self.project_updates),
            (Category::BacklogFormat, &self.backlog_format),
        ]
    }

    /// Unweighted mean of the four category scores.
    pub fn mean_score(&self) -> f64 {
        let total: f64 = self.iter().iter().map(|(_, c)| c.score).sum();
        total / Category::ALL.len() as f64
    }

    /// Flatten violations across categories, each prefixed with its
    /// category name in brackets.
    pub fn tagged_violations(&self) -> Vec<String> {
        let mut out = Vec::new();
        for (category, result) in self.iter() {
            for violation in &result.violations {
                out.push(format!("[{}] {}", category, violation));
            }
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

/// Aggregated compliance outcome for one agent directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentReport {
    pub name: String,
    pub score: f64,
    pub grade: Grade,
    pub checks: AgentChecks,
    pub violations: Vec<String>,
}

impl AgentReport {
    /// Build an `AgentReport` from the four category results.
    pub fn new(name: impl Into<String>, checks: AgentChecks) -> Self {
        let score = checks.mean_score();
        let violations = checks.tagged_violations();
        Self {
            name: name.into(),
            score,
            grade: Grade::from_score(score),
            checks,
            violations,
        }
    }
}

/// Run-level report across all discovered agent directories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryReport {
    pub total_agents: usize,
    pub total_score: f64,
    /// Agent reports in sorted directory-name order.
    pub agents: BTreeMap<String, AgentReport>,
}

impl SummaryReport {
    /// Build the summary. `total_score` is the mean of agent scores, left at
    /// 0.0 when no agents were discovered (no division by zero).
    pub fn from_agents(agents: BTreeMap<String, AgentReport>) -> Self {
        let total_agents = agents.len();
        let total_score = if agents.is_empty() {
            0.0
        } else {
            agents.values().map(|a| a.score).sum::<f64>() / total_agents as f64
        };
        Self {
            total_agents,
            total_score,
            agents,
        }
    }

    /// Letter grade of the run-level score.
    pub fn overall_grade(&self) -> Grade {
        Grade::from_score(self.total_score)
    }
}
