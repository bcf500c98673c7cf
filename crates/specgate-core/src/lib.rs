// crates/specgate-core/src/lib.rs
// ============================================================================
// Module: Specgate Core Library
// Description: Policy scan engine for hierarchical API specification trees.
// Purpose: Walk a document once and apply compiled rules deterministically.
// Dependencies: indexmap, regex, serde, serde_json, tracing
// ============================================================================

//! ## Overview
//! Specgate Core scans an in-memory specification document against a
//! compiled rule set and returns an ordered list of findings. Four rule
//! categories are supported: globally forbidden keys, forbidden patterns
//! (full-match regex over keys and string values), path-scoped forbidden
//! keys, and priority-ordered allowed exceptions.
//! Invariants:
//! - One scan is one deterministic depth-first pre-order pass.
//! - The compiled rule set is immutable and shareable across scans.
//! - Invalid patterns become diagnostics, never scan failures.
//! - The engine performs no I/O and never mutates the document.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use self::core::CompiledPattern;
pub use self::core::CompiledRuleSet;
pub use self::core::DocumentNode;
pub use self::core::ExceptionRule;
pub use self::core::Finding;
pub use self::core::FindingLog;
pub use self::core::PathRule;
pub use self::core::PatternDiagnostic;
pub use self::core::RuleConfig;
pub use self::core::RuleKind;
pub use self::core::Scalar;
pub use runtime::DocumentVisitor;
pub use runtime::RuleEvaluator;
pub use runtime::scan;
pub use runtime::walk;
