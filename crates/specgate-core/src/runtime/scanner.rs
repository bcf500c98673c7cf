// crates/specgate-core/src/runtime/scanner.rs
// ============================================================================
// Module: Specgate Scanner
// Description: Scan entry point wiring walker, evaluator, and collector.
// Purpose: Produce the ordered finding list for one document.
// Dependencies: crate::core, crate::runtime
// ============================================================================

//! ## Overview
//! One scan is one uninterruptible synchronous pass: the walker drives the
//! evaluator over the document and the evaluator's log becomes the ordered
//! result. The compiled rule set is only read, so callers may run scans of
//! independent documents in parallel against the same set.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::CompiledRuleSet;
use crate::core::DocumentNode;
use crate::core::Finding;
use crate::runtime::evaluator::RuleEvaluator;
use crate::runtime::walker::walk;

// ============================================================================
// SECTION: Scan Entry Point
// ============================================================================

/// Scans a document against a compiled rule set and returns the findings in
/// traversal order.
#[must_use]
pub fn scan(document: &DocumentNode, rules: &CompiledRuleSet) -> Vec<Finding> {
    let mut evaluator = RuleEvaluator::new(rules);
    walk(document, &mut evaluator);
    evaluator.into_findings()
}
