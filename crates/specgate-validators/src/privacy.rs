// crates/specgate-validators/src/privacy.rs
// ============================================================================
// Module: Specgate Privacy Validator
// Description: Personal-data exposure checks for component schemas.
// Purpose: Surface unclassified personal-data properties in schemas.
// Dependencies: crate::interfaces, specgate-core, tracing
// ============================================================================

//! ## Overview
//! The privacy validator scans `components.schemas.*.properties` for
//! property names that look like personal data (contact details, national
//! identifiers, birth dates). A property carrying an
//! `x-data-classification` marker is considered reviewed and is skipped.
//! Matching is case-insensitive substring matching over a fixed term list,
//! so `billing_email` and `Email` both match the `email` term.
//!
//! Rule:
//! - `PRIV-001` (MEDIUM): unclassified personal-data property in a schema.

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
// SECTION: Term List
// ============================================================================

/// Property-name terms treated as personal data.
const PERSONAL_DATA_TERMS: &[&str] = &[
    "email",
    "cpf",
    "cnpj",
    "phone",
    "address",
    "birth_date",
    "birthdate",
    "full_name",
    "ssn",
    "passport",
];

/// Marker key exempting a property from the personal-data rule.
const CLASSIFICATION_MARKER: &str = "x-data-classification";

// ============================================================================
// SECTION: Validator
// ============================================================================

/// Personal-data exposure validator.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrivacyValidator;

impl PrivacyValidator {
    /// Creates the validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Validator for PrivacyValidator {
    fn id(&self) -> &'static str {
        "privacy"
    }

    fn validate(&self, document: &DocumentNode) -> Vec<Issue> {
        let mut issues = Vec::new();
        let schemas = document
            .get("components")
            .and_then(|components| components.get("schemas"))
            .and_then(DocumentNode::as_mapping);
        let Some(schemas) = schemas else {
            return issues;
        };

        for (schema_name, schema) in schemas {
            let Some(properties) = schema.get("properties").and_then(DocumentNode::as_mapping)
            else {
                continue;
            };
            let schema_address =
                path::child(&path::child("components.schemas", schema_name), "properties");
            for (property_name, property) in properties {
                check_property(schema_name, property_name, property, &schema_address, &mut issues);
            }
        }
        debug!(count = issues.len(), "privacy validation finished");
        issues
    }
}

// ============================================================================
// SECTION: Property Checks
// ============================================================================

/// PRIV-001: flags an unclassified personal-data property.
fn check_property(
    schema_name: &str,
    property_name: &str,
    property: &DocumentNode,
    schema_address: &str,
    issues: &mut Vec<Issue>,
) {
    let Some(term) = matched_term(property_name) else {
        return;
    };
    if property.get(CLASSIFICATION_MARKER).is_some() {
        return;
    }
    issues.push(Issue {
        rule_id: "PRIV-001".to_string(),
        title: "Unclassified Personal Data Property".to_string(),
        description: format!(
            "Property '{property_name}' of schema '{schema_name}' looks like personal data ('{term}')."
        ),
        severity: Severity::Medium,
        path: path::child(schema_address, property_name),
        recommendation: format!(
            "Review data minimization for '{property_name}' and add an '{CLASSIFICATION_MARKER}' marker."
        ),
        reference: None,
    });
}

/// Returns the first personal-data term contained in the property name.
fn matched_term(property_name: &str) -> Option<&'static str> {
    let normalized = property_name.to_ascii_lowercase();
    PERSONAL_DATA_TERMS.iter().copied().find(|term| normalized.contains(term))
}
