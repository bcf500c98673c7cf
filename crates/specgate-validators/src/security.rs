// crates/specgate-validators/src/security.rs
// ============================================================================
// Module: Specgate Security Validator
// Description: Authentication and transport checks for API specifications.
// Purpose: Surface weak security scheme and server configurations.
// Dependencies: crate::interfaces, specgate-core, tracing
// ============================================================================

//! ## Overview
//! The security validator inspects the conventional OpenAPI locations for
//! weak authentication and transport configuration: security schemes under
//! `components.securitySchemes` and server URLs under `servers`. Checks run
//! rule by rule, each in document order, so the issue list is deterministic.
//!
//! Rules:
//! - `AUTH-001` (HIGH): `apiKey` scheme delivered via the query string.
//! - `AUTH-002` (MEDIUM): `http` scheme using basic authentication.
//! - `AUTH-003` (MEDIUM): the document defines no security schemes at all.
//! - `TRANSPORT-001` (HIGH): server URL using plaintext `http://`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use specgate_core::DocumentNode;
use specgate_core::core::path;
use tracing::debug;

use crate::interfaces::Issue;
use crate::interfaces::Severity;
use crate::interfaces::Validator;

// ============================================================================
// SECTION: Validator
// ============================================================================

/// Authentication and transport validator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecurityValidator;

impl SecurityValidator {
    /// Creates the validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Validator for SecurityValidator {
    fn id(&self) -> &'static str {
        "security"
    }

    fn validate(&self, document: &DocumentNode) -> Vec<Issue> {
        let mut issues = Vec::new();
        check_api_keys_in_query(document, &mut issues);
        check_basic_auth(document, &mut issues);
        check_missing_security_schemes(document, &mut issues);
        check_plaintext_servers(document, &mut issues);
        debug!(count = issues.len(), "security validation finished");
        issues
    }
}

// ============================================================================
// SECTION: Scheme Checks
// ============================================================================

/// Address of the security scheme mapping.
const SECURITY_SCHEMES_PATH: &str = "components.securitySchemes";

/// Returns the security scheme mapping entries, when present.
fn security_schemes(document: &DocumentNode) -> Option<&DocumentNode> {
    document.get("components").and_then(|components| components.get("securitySchemes"))
}

/// AUTH-001: flags `apiKey` schemes delivered via the query string.
fn check_api_keys_in_query(document: &DocumentNode, issues: &mut Vec<Issue>) {
    let Some(schemes) = security_schemes(document).and_then(DocumentNode::as_mapping) else {
        return;
    };
    for (name, scheme) in schemes {
        let is_api_key = scheme.get("type").and_then(DocumentNode::as_str) == Some("apiKey");
        let in_query = scheme.get("in").and_then(DocumentNode::as_str) == Some("query");
        if is_api_key && in_query {
            issues.push(Issue {
                rule_id: "AUTH-001".to_string(),
                title: "Weak API Key Configuration".to_string(),
                description: format!(
                    "API key scheme '{name}' is delivered via the query string."
                ),
                severity: Severity::High,
                path: path::child(SECURITY_SCHEMES_PATH, name),
                recommendation: "Configure the API key to be sent in a header or cookie."
                    .to_string(),
                reference: Some("OWASP API Security Top 10: API2 Broken Authentication".to_string()),
            });
        }
    }
}

/// AUTH-002: flags `http` schemes using basic authentication.
fn check_basic_auth(document: &DocumentNode, issues: &mut Vec<Issue>) {
    let Some(schemes) = security_schemes(document).and_then(DocumentNode::as_mapping) else {
        return;
    };
    for (name, scheme) in schemes {
        let is_http = scheme.get("type").and_then(DocumentNode::as_str) == Some("http");
        let is_basic = scheme.get("scheme").and_then(DocumentNode::as_str) == Some("basic");
        if is_http && is_basic {
            issues.push(Issue {
                rule_id: "AUTH-002".to_string(),
                title: "Basic Authentication Scheme".to_string(),
                description: format!(
                    "Security scheme '{name}' relies on HTTP basic authentication."
                ),
                severity: Severity::Medium,
                path: path::child(SECURITY_SCHEMES_PATH, name),
                recommendation: "Prefer token-based schemes such as OAuth2 or bearer tokens."
                    .to_string(),
                reference: None,
            });
        }
    }
}

/// AUTH-003: flags documents that define no security schemes at all.
fn check_missing_security_schemes(document: &DocumentNode, issues: &mut Vec<Issue>) {
    let empty = match security_schemes(document) {
        None => true,
        Some(node) => node.as_mapping().is_none_or(|schemes| schemes.is_empty()),
    };
    if empty {
        issues.push(Issue {
            rule_id: "AUTH-003".to_string(),
            title: "No Security Schemes Defined".to_string(),
            description: "The specification defines no security schemes.".to_string(),
            severity: Severity::Medium,
            path: SECURITY_SCHEMES_PATH.to_string(),
            recommendation: "Define at least one security scheme and apply it to operations."
                .to_string(),
            reference: None,
        });
    }
}

// ============================================================================
// SECTION: Transport Checks
// ============================================================================

/// TRANSPORT-001: flags server URLs using plaintext HTTP.
fn check_plaintext_servers(document: &DocumentNode, issues: &mut Vec<Issue>) {
    let Some(servers) = document.get("servers").and_then(DocumentNode::as_sequence) else {
        return;
    };
    for (index, server) in servers.iter().enumerate() {
        let Some(url) = server.get("url").and_then(DocumentNode::as_str) else {
            continue;
        };
        if url.starts_with("http://") {
            let server_address = path::index_child("servers", index);
            issues.push(Issue {
                rule_id: "TRANSPORT-001".to_string(),
                title: "Plaintext Server URL".to_string(),
                description: format!("Server URL '{url}' uses plaintext HTTP."),
                severity: Severity::High,
                path: path::child(&server_address, "url"),
                recommendation: "Serve the API exclusively over HTTPS.".to_string(),
                reference: None,
            });
        }
    }
}
