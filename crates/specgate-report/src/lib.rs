// crates/specgate-report/src/lib.rs
// ============================================================================
// Module: Specgate Report Library
// Description: Report contract and renderers for scan results.
// Purpose: Turn findings and issues into stable text/JSON/document output.
// Dependencies: serde, serde_json, specgate-core, specgate-validators,
// thiserror
// ============================================================================

//! ## Overview
//! The report contract combines the rule engine's findings with validator
//! issues under stable field names. Renderers are pure functions from the
//! report to a string; they never print and never decide exit codes. The
//! front-end owns presentation and process-level concerns.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod document;
pub mod text;

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use specgate_core::Finding;
use specgate_validators::Issue;
use thiserror::Error;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use document::render_document;
pub use text::render_text;

// ============================================================================
// SECTION: Report Status
// ============================================================================

/// Overall scan verdict.
///
/// # Invariants
/// - Wire names are stable lowercase strings for the JSON contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    /// No finding and no issue.
    Passed,
    /// At least one finding or issue.
    Failed,
}

// ============================================================================
// SECTION: Report Contract
// ============================================================================

/// Combined scan report.
///
/// # Invariants
/// - Field names are the stable JSON report contract.
/// - `findings` and `security_issues` keep their producers' ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Path of the scanned specification file.
    pub swagger_file_path: String,
    /// Path of the rule configuration file.
    pub config_file_path: String,
    /// Overall verdict.
    pub status: ReportStatus,
    /// Number of rule-engine findings.
    pub findings_count: usize,
    /// Rule-engine findings in traversal order.
    pub findings: Vec<Finding>,
    /// Number of validator issues.
    pub security_issues_count: usize,
    /// Validator issues in validator execution order.
    pub security_issues: Vec<Issue>,
}

impl ScanReport {
    /// Builds a report from scan results, deriving counts and the verdict.
    #[must_use]
    pub fn build(
        swagger_file_path: &str,
        config_file_path: &str,
        findings: Vec<Finding>,
        security_issues: Vec<Issue>,
    ) -> Self {
        let status = if findings.is_empty() && security_issues.is_empty() {
            ReportStatus::Passed
        } else {
            ReportStatus::Failed
        };
        Self {
            swagger_file_path: swagger_file_path.to_string(),
            config_file_path: config_file_path.to_string(),
            status,
            findings_count: findings.len(),
            findings,
            security_issues_count: security_issues.len(),
            security_issues,
        }
    }

    /// Returns true when the report carries any finding or issue.
    #[must_use]
    pub const fn has_violations(&self) -> bool {
        matches!(self.status, ReportStatus::Failed)
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Report rendering errors.
#[derive(Debug, Error)]
pub enum ReportError {
    /// JSON serialization failed.
    #[error("report could not be serialized: {source}")]
    Serialize {
        /// Underlying serializer error.
        #[from]
        source: serde_json::Error,
    },
}

// ============================================================================
// SECTION: JSON Rendering
// ============================================================================

/// Renders the report as pretty-printed JSON under the stable contract.
///
/// # Errors
///
/// Returns [`ReportError`] when serialization fails.
pub fn render_json(report: &ScanReport) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(report)?)
}
