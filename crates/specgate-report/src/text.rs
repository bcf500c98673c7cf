// crates/specgate-report/src/text.rs
// ============================================================================
// Module: Specgate Text Report
// Description: Plain-text rendering of a scan report.
// Purpose: Produce the human-readable validation summary.
// Dependencies: crate report contract
// ============================================================================

//! ## Overview
//! The text renderer reproduces the validator's established console layout:
//! a banner, the file paths, a STATUS line, numbered findings, numbered
//! issues with severity tags, and a closing advice line when anything was
//! found. Output is returned as one string; the front-end prints it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Write;

use crate::ScanReport;

// ============================================================================
// SECTION: Layout
// ============================================================================

/// Banner / section separator line.
const SEPARATOR: &str = "--------------------------------------";

/// Renders the report in the plain-text layout.
#[must_use]
pub fn render_text(report: &ScanReport) -> String {
    let mut out = String::new();
    // Infallible writes into a String; errors cannot occur.
    let _ = writeln!(out, "Swagger/OpenAPI Specification Validator");
    let _ = writeln!(out, "{SEPARATOR}");
    let _ = writeln!(out, "Specification File: {}", report.swagger_file_path);
    let _ = writeln!(out, "Configuration File: {}", report.config_file_path);
    let _ = writeln!(out);

    if report.has_violations() {
        let _ = writeln!(out, "STATUS: VALIDATION FAILED");
        render_findings(report, &mut out);
        render_issues(report, &mut out);
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Please review the findings and update the API specification or the validator configuration."
        );
    } else {
        let _ = writeln!(out, "STATUS: VALIDATION PASSED - No issues found.");
    }
    out
}

/// Appends the numbered findings section when findings are present.
fn render_findings(report: &ScanReport, out: &mut String) {
    if report.findings.is_empty() {
        return;
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Forbidden Items Found: {}", report.findings_count);
    let _ = writeln!(out, "{SEPARATOR}");
    let total = report.findings.len();
    for (position, finding) in report.findings.iter().enumerate() {
        let number = position + 1;
        let _ = writeln!(out, "  {number}. Path: {}", finding.path);
        let _ = writeln!(out, "     Key: {}", finding.key);
        let _ = writeln!(out, "     Type: {}", finding.kind);
        let _ = writeln!(out, "     Reason: {}", finding.message);
        if number < total {
            let _ = writeln!(out);
        }
    }
}

/// Appends the numbered issues section when issues are present.
fn render_issues(report: &ScanReport, out: &mut String) {
    if report.security_issues.is_empty() {
        return;
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Security Issues Found: {}", report.security_issues_count);
    let _ = writeln!(out, "{SEPARATOR}");
    let total = report.security_issues.len();
    for (position, issue) in report.security_issues.iter().enumerate() {
        let number = position + 1;
        let _ = writeln!(out, "  {number}. [{}] {}", issue.severity, issue.title);
        let _ = writeln!(out, "     Rule ID: {}", issue.rule_id);
        let _ = writeln!(out, "     Path: {}", issue.path);
        let _ = writeln!(out, "     Description: {}", issue.description);
        let _ = writeln!(out, "     Recommendation: {}", issue.recommendation);
        if let Some(reference) = &issue.reference {
            let _ = writeln!(out, "     Reference: {reference}");
        }
        if number < total {
            let _ = writeln!(out);
        }
    }
}
