// crates/specgate-core/src/runtime/evaluator.rs
// ============================================================================
// Module: Specgate Rule Evaluator
// Description: Applies the compiled rule set at each visited position.
// Purpose: Emit ordered findings with exception precedence.
// Dependencies: crate::core, crate::runtime::walker, tracing
// ============================================================================

//! ## Overview
//! The evaluator applies the compiled rule set to every key occurrence the
//! walker reports. Exceptions gate everything: the first exception (in
//! priority order) whose key matches and whose path prefix is a literal
//! prefix of the occurrence's address suppresses all rule categories for
//! that single occurrence. Suppression never extends to descendants and
//! never reaches the value-pattern check.
//!
//! Per unsuppressed occurrence, findings are emitted in a fixed order:
//! global-key match, then each pattern match in declaration order, then
//! path-scoped matches in declaration order. Nothing is deduplicated.

// ============================================================================
// SECTION: Imports
// ============================================================================

use tracing::debug;

use crate::core::CompiledRuleSet;
use crate::core::DocumentNode;
use crate::core::Finding;
use crate::core::FindingLog;
use crate::core::RuleKind;
use crate::core::path;
use crate::runtime::walker::DocumentVisitor;

// ============================================================================
// SECTION: Evaluator
// ============================================================================

/// Rule evaluator feeding a traversal-ordered finding log.
///
/// # Invariants
/// - Holds the compiled rule set read-only; all mutation goes to the log.
#[derive(Debug)]
pub struct RuleEvaluator<'rules> {
    /// Compiled rule set shared across the traversal.
    rules: &'rules CompiledRuleSet,
    /// Ordered finding accumulator.
    log: FindingLog,
}

impl<'rules> RuleEvaluator<'rules> {
    /// Creates an evaluator over a compiled rule set.
    #[must_use]
    pub fn new(rules: &'rules CompiledRuleSet) -> Self {
        Self {
            rules,
            log: FindingLog::new(),
        }
    }

    /// Consumes the evaluator and returns the ordered finding list.
    #[must_use]
    pub fn into_findings(self) -> Vec<Finding> {
        self.log.into_findings()
    }

    /// Returns true when some exception suppresses this key occurrence.
    fn exception_applies(&self, key: &str, address: &str) -> bool {
        for exception in self.rules.exceptions() {
            if exception.key == key && address.starts_with(&exception.path_prefix) {
                debug!(key, address, prefix = %exception.path_prefix, "exception suppressed key");
                return true;
            }
        }
        false
    }

    /// Applies the global-key, key-pattern, and path-scoped checks to one
    /// unsuppressed key occurrence.
    fn check_key(&mut self, key: &str, address: &str) {
        if self.rules.is_forbidden_key(key) {
            self.log.push(Finding {
                path: address.to_string(),
                key: key.to_string(),
                kind: RuleKind::GlobalKey,
                message: format!("Key '{key}' is globally forbidden."),
            });
        }

        for pattern in self.rules.patterns() {
            if pattern.is_full_match(key) {
                self.log.push(Finding {
                    path: address.to_string(),
                    key: key.to_string(),
                    kind: RuleKind::Pattern,
                    message: format!(
                        "Key '{key}' matches forbidden pattern '{text}'.",
                        text = pattern.text()
                    ),
                });
            }
        }

        for rule in self.rules.path_rules() {
            if path::normalize(address) == path::normalize(&rule.path) && key == rule.key {
                let message = rule.reason.clone().unwrap_or_else(|| {
                    format!(
                        "Key '{key}' is forbidden at path '{rule_path}'.",
                        rule_path = rule.path
                    )
                });
                self.log.push(Finding {
                    path: address.to_string(),
                    key: key.to_string(),
                    kind: RuleKind::PathScoped,
                    message,
                });
            }
        }
    }
}

impl DocumentVisitor for RuleEvaluator<'_> {
    fn visit_key(&mut self, key: &str, address: &str, _value: &DocumentNode) {
        if self.exception_applies(key, address) {
            return;
        }
        self.check_key(key, address);
    }

    fn visit_string_value(&mut self, value: &str, address: &str) {
        // Independent of the key-level exception gate: sensitive-looking
        // values are reported even under innocuous or exempted key names.
        for pattern in self.rules.patterns() {
            if pattern.is_full_match(value) {
                self.log.push(Finding {
                    path: address.to_string(),
                    key: value.to_string(),
                    kind: RuleKind::Pattern,
                    message: format!(
                        "Key '{value}' matches forbidden pattern '{text}'.",
                        text = pattern.text()
                    ),
                });
            }
        }
    }
}
