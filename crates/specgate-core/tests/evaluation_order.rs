// crates/specgate-core/tests/evaluation_order.rs
// ============================================================================
// Module: Evaluation Order Tests
// Description: Precedence and ordering guarantees of the rule evaluator.
// Purpose: Pin exception precedence, emission order, and accumulation.
// ============================================================================

//! Ordering and precedence tests for multi-rule key occurrences.

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

use serde_json::json;
use specgate_core::CompiledRuleSet;
use specgate_core::DocumentNode;
use specgate_core::ExceptionRule;
use specgate_core::PathRule;
use specgate_core::RuleConfig;
use specgate_core::RuleKind;
use specgate_core::scan;

/// Compiles a rule config, asserting no pattern diagnostics were produced.
fn compile_clean(config: &RuleConfig) -> CompiledRuleSet {
    let (rules, diagnostics) = CompiledRuleSet::compile(config);
    assert!(diagnostics.is_empty(), "unexpected diagnostics: {diagnostics:?}");
    rules
}

#[test]
fn one_occurrence_accumulates_findings_from_every_category() {
    let document = DocumentNode::from(json!({"api": {"secret": true}}));
    let rules = compile_clean(&RuleConfig {
        forbidden_keys: vec!["secret".to_string()],
        forbidden_key_patterns: vec!["sec.*".to_string(), ".*ret".to_string()],
        forbidden_keys_at_paths: vec![PathRule {
            path: "api.secret".to_string(),
            key: "secret".to_string(),
            reason: None,
        }],
        ..RuleConfig::default()
    });

    let findings = scan(&document, &rules);

    let kinds: Vec<RuleKind> = findings.iter().map(|finding| finding.kind).collect();
    assert_eq!(
        kinds,
        vec![
            RuleKind::GlobalKey,
            RuleKind::Pattern,
            RuleKind::Pattern,
            RuleKind::PathScoped
        ]
    );
    // Pattern findings preserve declaration order, not match quality.
    assert!(findings[1].message.contains("'sec.*'"));
    assert!(findings[2].message.contains("'.*ret'"));
}

#[test]
fn pattern_matching_is_not_short_circuited() {
    let document = DocumentNode::from(json!({"internal_token": 1}));
    let rules = compile_clean(&RuleConfig {
        forbidden_key_patterns: vec![
            "^internal_.*".to_string(),
            ".*_token$".to_string(),
            "unrelated".to_string(),
        ],
        ..RuleConfig::default()
    });

    let findings = scan(&document, &rules);

    assert_eq!(findings.len(), 2);
    assert!(findings[0].message.contains("'^internal_.*'"));
    assert!(findings[1].message.contains("'.*_token$'"));
}

#[test]
fn patterns_require_full_string_matches() {
    let document = DocumentNode::from(json!({"my_internal_flag": 1, "internal_flag": 2}));
    let rules = compile_clean(&RuleConfig {
        forbidden_key_patterns: vec!["internal_.*".to_string()],
        ..RuleConfig::default()
    });

    let findings = scan(&document, &rules);

    // A substring match is not enough; only the fully matching key fires.
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].key, "internal_flag");
}

#[test]
fn exception_suppresses_every_category_for_the_occurrence() {
    let document = DocumentNode::from(json!({"components": {"secret": "x"}}));
    let rules = compile_clean(&RuleConfig {
        forbidden_keys: vec!["secret".to_string()],
        forbidden_key_patterns: vec!["sec.*".to_string()],
        forbidden_keys_at_paths: vec![PathRule {
            path: "components.secret".to_string(),
            key: "secret".to_string(),
            reason: None,
        }],
        allowed_exceptions: vec![ExceptionRule {
            key: "secret".to_string(),
            path_prefix: "components".to_string(),
        }],
        ..RuleConfig::default()
    });

    assert!(scan(&document, &rules).is_empty());
}

#[test]
fn exception_does_not_suppress_descendants() {
    let document = DocumentNode::from(json!({
        "components": {"wrapper": {"secret": "x"}}
    }));
    let rules = compile_clean(&RuleConfig {
        forbidden_keys: vec!["wrapper".to_string(), "secret".to_string()],
        allowed_exceptions: vec![ExceptionRule {
            key: "wrapper".to_string(),
            path_prefix: "components".to_string(),
        }],
        ..RuleConfig::default()
    });

    let findings = scan(&document, &rules);

    // The wrapper occurrence is exempt; its child is still scanned.
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].path, "components.wrapper.secret");
}

#[test]
fn exception_does_not_suppress_value_pattern_check() {
    let document = DocumentNode::from(json!({"components": {"token": "xyz_token"}}));
    let rules = compile_clean(&RuleConfig {
        forbidden_keys: vec!["token".to_string()],
        forbidden_key_patterns: vec![".*_token$".to_string()],
        allowed_exceptions: vec![ExceptionRule {
            key: "token".to_string(),
            path_prefix: "components".to_string(),
        }],
        ..RuleConfig::default()
    });

    let findings = scan(&document, &rules);

    // Key findings are suppressed; the value finding survives.
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].key, "xyz_token");
    assert_eq!(findings[0].kind, RuleKind::Pattern);
}

#[test]
fn exception_requires_matching_prefix() {
    let document = DocumentNode::from(json!({"paths": {"token": "x"}}));
    let rules = compile_clean(&RuleConfig {
        forbidden_keys: vec!["token".to_string()],
        allowed_exceptions: vec![ExceptionRule {
            key: "token".to_string(),
            path_prefix: "components".to_string(),
        }],
        ..RuleConfig::default()
    });

    let findings = scan(&document, &rules);

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].path, "paths.token");
}

#[test]
fn empty_exception_prefix_matches_every_address() {
    let document = DocumentNode::from(json!({"a": {"token": 1}, "b": {"token": 2}}));
    let rules = compile_clean(&RuleConfig {
        forbidden_keys: vec!["token".to_string()],
        allowed_exceptions: vec![ExceptionRule {
            key: "token".to_string(),
            path_prefix: String::new(),
        }],
        ..RuleConfig::default()
    });

    assert!(scan(&document, &rules).is_empty());
}

#[test]
fn value_equal_to_forbidden_key_is_not_a_global_finding() {
    // The global-key check inspects keys, not values.
    let document = DocumentNode::from(json!({"name": "apiKey"}));
    let rules = compile_clean(&RuleConfig {
        forbidden_keys: vec!["apiKey".to_string()],
        ..RuleConfig::default()
    });

    assert!(scan(&document, &rules).is_empty());
}

#[test]
fn scan_is_idempotent() {
    let document = DocumentNode::from(json!({
        "info": {"x-internal_debug": true},
        "list": [{"secret": "abc_token"}]
    }));
    let rules = compile_clean(&RuleConfig {
        forbidden_keys: vec!["secret".to_string()],
        forbidden_key_patterns: vec!["x-internal_.*".to_string(), ".*_token$".to_string()],
        ..RuleConfig::default()
    });

    let first = scan(&document, &rules);
    let second = scan(&document, &rules);

    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}
