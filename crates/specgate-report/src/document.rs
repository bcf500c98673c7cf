// crates/specgate-report/src/document.rs
// ============================================================================
// Module: Specgate Report Document
// Description: Standalone HTML report-document rendering.
// Purpose: Produce a self-contained shareable report file.
// Dependencies: crate report contract
// ============================================================================

//! ## Overview
//! The document renderer emits one self-contained HTML page: verdict,
//! findings table, and issues table. All interpolated values pass through
//! an HTML escape so hostile key names or messages cannot inject markup.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Write;

use crate::ReportStatus;
use crate::ScanReport;

// ============================================================================
// SECTION: Escaping
// ============================================================================

/// Escapes text for safe interpolation into HTML content.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for character in text.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// Renders the report as one self-contained HTML document.
#[must_use]
pub fn render_document(report: &ScanReport) -> String {
    let verdict = match report.status {
        ReportStatus::Passed => "VALIDATION PASSED",
        ReportStatus::Failed => "VALIDATION FAILED",
    };

    let mut out = String::new();
    // Infallible writes into a String; errors cannot occur.
    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, "<html lang=\"en\"><head><meta charset=\"utf-8\">");
    let _ = writeln!(out, "<title>Specgate Validation Report</title>");
    let _ = writeln!(
        out,
        "<style>body{{font-family:sans-serif;margin:2rem}}table{{border-collapse:collapse;width:100%;margin-bottom:2rem}}th,td{{border:1px solid #ccc;padding:0.4rem;text-align:left;vertical-align:top}}th{{background:#f0f0f0}}</style>"
    );
    let _ = writeln!(out, "</head><body>");
    let _ = writeln!(out, "<h1>Specgate Validation Report</h1>");
    let _ = writeln!(
        out,
        "<p>Specification File: <code>{}</code></p>",
        escape(&report.swagger_file_path)
    );
    let _ = writeln!(
        out,
        "<p>Configuration File: <code>{}</code></p>",
        escape(&report.config_file_path)
    );
    let _ = writeln!(out, "<h2>Status: {verdict}</h2>");

    render_findings_table(report, &mut out);
    render_issues_table(report, &mut out);

    let _ = writeln!(out, "</body></html>");
    out
}

/// Appends the findings table when findings are present.
fn render_findings_table(report: &ScanReport, out: &mut String) {
    if report.findings.is_empty() {
        return;
    }
    let _ = writeln!(out, "<h3>Forbidden Items ({})</h3>", report.findings_count);
    let _ = writeln!(out, "<table><tr><th>Path</th><th>Key</th><th>Type</th><th>Reason</th></tr>");
    for finding in &report.findings {
        let _ = writeln!(
            out,
            "<tr><td><code>{}</code></td><td><code>{}</code></td><td>{}</td><td>{}</td></tr>",
            escape(&finding.path),
            escape(&finding.key),
            finding.kind,
            escape(&finding.message)
        );
    }
    let _ = writeln!(out, "</table>");
}

/// Appends the issues table when issues are present.
fn render_issues_table(report: &ScanReport, out: &mut String) {
    if report.security_issues.is_empty() {
        return;
    }
    let _ = writeln!(out, "<h3>Security Issues ({})</h3>", report.security_issues_count);
    let _ = writeln!(
        out,
        "<table><tr><th>Severity</th><th>Rule</th><th>Title</th><th>Path</th><th>Description</th><th>Recommendation</th></tr>"
    );
    for issue in &report.security_issues {
        let _ = writeln!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td><code>{}</code></td><td>{}</td><td>{}</td></tr>",
            issue.severity,
            escape(&issue.rule_id),
            escape(&issue.title),
            escape(&issue.path),
            escape(&issue.description),
            escape(&issue.recommendation)
        );
    }
    let _ = writeln!(out, "</table>");
}
