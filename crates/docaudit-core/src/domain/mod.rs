//! Domain types for compliance auditing.

pub mod error;
pub mod report;

pub use error::{AuditError, Result};
pub use report::{
    AgentChecks, AgentReport, Category, CheckResult, Detail, Grade, SummaryReport,
};
