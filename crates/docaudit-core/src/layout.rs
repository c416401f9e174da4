//! Audited documentation tree layout.
//!
//! All paths are fixed conventions relative to one root: agent directories
//! live under `docs/agents/`, the cross-referenced project documents sit at
//! the root and under `docs/`, and the report artifact is overwritten at a
//! fixed location inside the compliance agent's own `current/` folder.

use std::path::{Path, PathBuf};

use crate::domain::{AuditError, Result};

/// Fixed paths of an audited documentation tree.
#[derive(Debug, Clone)]
pub struct DocsLayout {
    root: PathBuf,
}

impl DocsLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Tree root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the `NN-<slug>` agent directories.
    pub fn agents_dir(&self) -> PathBuf {
        self.root.join("docs").join("agents")
    }

    /// One agent directory by folder name.
    pub fn agent_dir(&self, folder: &str) -> PathBuf {
        self.agents_dir().join(folder)
    }

    /// `AGENTS.md` — the agent roster document.
    pub fn agents_md(&self) -> PathBuf {
        self.root.join("AGENTS.md")
    }

    /// `docs/MANIFEST.md` — the document manifest.
    pub fn manifest_md(&self) -> PathBuf {
        self.root.join("docs").join("MANIFEST.md")
    }

    /// `CLAUDE.md` — the project rules document carrying completion records.
    pub fn claude_md(&self) -> PathBuf {
        self.root.join("CLAUDE.md")
    }

    /// Fixed report artifact path, overwritten on every run.
    pub fn report_path(&self) -> PathBuf {
        self.agents_dir()
            .join("13-compliance")
            .join("current")
            .join("automated-compliance-report.json")
    }
}

/// Whether a directory name matches the agent convention: exactly two ASCII
/// digits, a hyphen, then the rest.
pub fn is_agent_folder_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() > 2
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[2] == b'-'
}

/// List agent directories directly under `agents_dir`, sorted
/// lexicographically. Non-directories and non-matching names are skipped.
///
/// # Errors
///
/// An unreadable agents directory is an environment failure and propagates;
/// per-entry faults inside it are skipped.
pub fn discover_agent_folders(agents_dir: &Path) -> Result<Vec<String>> {
    let entries = std::fs::read_dir(agents_dir).map_err(|source| AuditError::AgentsDir {
        path: agents_dir.to_path_buf(),
        source,
    })?;

    let mut folders = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if is_agent_folder_name(name) {
                folders.push(name.to_string());
            }
        }
    }

    folders.sort();
    Ok(folders)
}
