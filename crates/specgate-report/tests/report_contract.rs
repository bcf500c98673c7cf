// crates/specgate-report/tests/report_contract.rs
// ============================================================================
// Module: Report Contract Tests
// Description: JSON contract and status derivation for scan reports.
// Purpose: Pin the stable wire shape consumed by downstream tooling.
// ============================================================================

//! JSON report contract tests.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use specgate_core::Finding;
use specgate_core::RuleKind;
use specgate_report::ReportStatus;
use specgate_report::ScanReport;
use specgate_report::render_json;
use specgate_validators::Issue;
use specgate_validators::Severity;

type TestResult = Result<(), String>;

fn sample_finding() -> Finding {
    Finding {
        path: "info.contact.email".to_string(),
        key: "email".to_string(),
        kind: RuleKind::PathScoped,
        message: "Contact email is sensitive.".to_string(),
    }
}

fn sample_issue() -> Issue {
    Issue {
        rule_id: "AUTH-001".to_string(),
        title: "Weak API Key Configuration".to_string(),
        description: "API key scheme 'legacy' is delivered via the query string.".to_string(),
        severity: Severity::High,
        path: "components.securitySchemes.legacy".to_string(),
        recommendation: "Configure the API key to be sent in a header or cookie.".to_string(),
        reference: None,
    }
}

#[test]
fn clean_report_is_passed_with_zero_counts() {
    let report = ScanReport::build("api.yaml", ".forbidden_keys.yaml", Vec::new(), Vec::new());

    assert_eq!(report.status, ReportStatus::Passed);
    assert!(!report.has_violations());
    assert_eq!(report.findings_count, 0);
    assert_eq!(report.security_issues_count, 0);
}

#[test]
fn findings_alone_fail_the_report() {
    let report =
        ScanReport::build("api.yaml", ".forbidden_keys.yaml", vec![sample_finding()], Vec::new());

    assert_eq!(report.status, ReportStatus::Failed);
    assert_eq!(report.findings_count, 1);
}

#[test]
fn issues_alone_fail_the_report() {
    let report =
        ScanReport::build("api.yaml", ".forbidden_keys.yaml", Vec::new(), vec![sample_issue()]);

    assert_eq!(report.status, ReportStatus::Failed);
    assert_eq!(report.security_issues_count, 1);
}

#[test]
fn json_contract_uses_stable_field_and_kind_names() -> TestResult {
    let report = ScanReport::build(
        "specs/api.yaml",
        ".forbidden_keys.yaml",
        vec![sample_finding()],
        vec![sample_issue()],
    );

    let rendered = render_json(&report).map_err(|err| err.to_string())?;
    let value: serde_json::Value =
        serde_json::from_str(&rendered).map_err(|err| err.to_string())?;

    if value["swagger_file_path"] != "specs/api.yaml" {
        return Err("swagger_file_path mismatch".to_string());
    }
    if value["config_file_path"] != ".forbidden_keys.yaml" {
        return Err("config_file_path mismatch".to_string());
    }
    if value["status"] != "failed" {
        return Err("status mismatch".to_string());
    }
    if value["findings_count"] != 1 || value["security_issues_count"] != 1 {
        return Err("count mismatch".to_string());
    }
    if value["findings"][0]["type"] != "forbidden_key_at_path" {
        return Err("finding kind wire name mismatch".to_string());
    }
    if value["security_issues"][0]["severity"] != "HIGH" {
        return Err("severity wire name mismatch".to_string());
    }
    if value["security_issues"][0].get("reference").is_some() {
        return Err("absent reference must be omitted".to_string());
    }
    Ok(())
}

#[test]
fn json_report_round_trips() -> TestResult {
    let report = ScanReport::build(
        "api.yaml",
        "rules.yaml",
        vec![sample_finding()],
        vec![sample_issue()],
    );

    let rendered = render_json(&report).map_err(|err| err.to_string())?;
    let decoded: ScanReport = serde_json::from_str(&rendered).map_err(|err| err.to_string())?;
    if decoded != report {
        return Err("report did not round-trip".to_string());
    }
    Ok(())
}
