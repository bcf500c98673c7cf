// crates/specgate-validators/src/interfaces.rs
// ============================================================================
// Module: Specgate Validator Interfaces
// Description: Validator capability trait and issue record types.
// Purpose: Define the contract surface independent validators implement.
// Dependencies: serde, specgate-core
// ============================================================================

//! ## Overview
//! A validator independently scans the same immutable document the rule
//! engine walks and returns its own ordered issue list. Issues are distinct
//! from findings: they carry a rule identifier, a severity, and remediation
//! guidance. Implementations must be deterministic: identical documents
//! yield identical issue lists.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use specgate_core::DocumentNode;

// ============================================================================
// SECTION: Severity
// ============================================================================

/// Issue severity scale.
///
/// # Invariants
/// - Wire names are stable UPPERCASE strings for the report contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Informational weakness.
    Low,
    /// Weakness that should be addressed.
    Medium,
    /// Serious weakness requiring prompt attention.
    High,
    /// Weakness requiring immediate attention.
    Critical,
}

impl Severity {
    /// Returns the stable wire name of the severity.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

// ============================================================================
// SECTION: Issues
// ============================================================================

/// One severity-tagged result from a validator capability.
///
/// # Invariants
/// - Immutable once emitted.
/// - `path` addresses the offending position using the engine's path form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Stable rule identifier (for example `AUTH-001`).
    pub rule_id: String,
    /// Short issue title.
    pub title: String,
    /// What was observed.
    pub description: String,
    /// Issue severity.
    pub severity: Severity,
    /// Address of the offending position.
    pub path: String,
    /// Remediation guidance.
    pub recommendation: String,
    /// Optional reference material.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

// ============================================================================
// SECTION: Validator Capability
// ============================================================================

/// Independent issue producer consuming the scanned document.
pub trait Validator {
    /// Returns the validator's stable identifier.
    fn id(&self) -> &'static str;

    /// Scans the document and returns issues in deterministic order.
    fn validate(&self, document: &DocumentNode) -> Vec<Issue>;
}
