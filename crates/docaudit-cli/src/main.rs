//! docaudit - Documentation Compliance Auditor CLI
//!
//! The `docaudit` command audits a documentation tree against project
//! conventions: per-agent folder layout, STATE.json and backlog.json
//! metadata, and cross-references in the project-wide documents. It prints
//! a scored console summary and overwrites the JSON report artifact at its
//! fixed path under the tree.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing::Level;

use docaudit_core::{run_audit, DocsLayout};

#[derive(Parser)]
#[command(name = "docaudit")]
#[command(author = "Stevedores Org")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Automated documentation compliance auditing", long_about = None)]
struct Cli {
    /// Documentation tree root (contains AGENTS.md, CLAUDE.md, docs/)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    docaudit_core::init_tracing(cli.json, level);

    let layout = DocsLayout::new(&cli.root);

    let summary = run_audit(&layout)
        .with_context(|| format!("audit failed for root {:?}", cli.root))?;

    print!(
        "{}",
        docaudit_core::render_summary(&summary, Local::now().date_naive())
    );

    let report_path = layout.report_path();
    docaudit_core::write_report_json(&report_path, &summary)
        .with_context(|| format!("failed to save report to {:?}", report_path))?;

    println!("\nDetailed report saved to: {}", report_path.display());

    Ok(())
}
