// crates/specgate-core/src/core/finding.rs
// ============================================================================
// Module: Specgate Findings
// Description: Violation records and the traversal-ordered collector.
// Purpose: Accumulate findings in emission order with stable wire names.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`Finding`] is one emitted violation record. Multiple findings may be
//! emitted for the same key occurrence (one per matching rule) and are never
//! deduplicated. The [`FindingLog`] accumulates findings in traversal order
//! and exposes the final ordered list.
//!
//! Wire names for [`RuleKind`] follow the report contract:
//! `forbidden_key`, `forbidden_key_pattern`, `forbidden_key_at_path`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Rule Kinds
// ============================================================================

/// Rule category that produced a finding.
///
/// # Invariants
/// - Wire names are stable for the JSON report contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleKind {
    /// Literal key forbidden anywhere in the document.
    #[serde(rename = "forbidden_key")]
    GlobalKey,
    /// Key or string value matched a forbidden pattern.
    #[serde(rename = "forbidden_key_pattern")]
    Pattern,
    /// Key forbidden at one exact path address.
    #[serde(rename = "forbidden_key_at_path")]
    PathScoped,
}

impl RuleKind {
    /// Returns the stable wire name of the rule kind.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::GlobalKey => "forbidden_key",
            Self::Pattern => "forbidden_key_pattern",
            Self::PathScoped => "forbidden_key_at_path",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

// ============================================================================
// SECTION: Findings
// ============================================================================

/// One emitted violation record.
///
/// # Invariants
/// - Immutable once emitted.
/// - For value-pattern findings `key` carries the matched value text, not
///   the mapping key the value was stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Address of the key occurrence that produced the finding.
    pub path: String,
    /// Offending key name (or matched value text for value findings).
    pub key: String,
    /// Rule category that produced the finding.
    #[serde(rename = "type")]
    pub kind: RuleKind,
    /// Human-readable message.
    pub message: String,
}

// ============================================================================
// SECTION: Finding Collector
// ============================================================================

/// Traversal-ordered finding accumulator.
///
/// # Invariants
/// - Append-only; order of appends is the order of the final list.
#[derive(Debug, Default)]
pub struct FindingLog {
    /// Findings in emission order.
    findings: Vec<Finding>,
}

impl FindingLog {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one finding.
    pub fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    /// Returns the number of collected findings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.findings.len()
    }

    /// Returns true when no finding has been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Consumes the collector and returns the ordered finding list.
    #[must_use]
    pub fn into_findings(self) -> Vec<Finding> {
        self.findings
    }
}
