// crates/specgate-core/src/core/mod.rs
// ============================================================================
// Module: Specgate Core Types
// Description: Document model, path addressing, rules, and findings.
// Purpose: Group the data model consumed by the runtime scan engine.
// Dependencies: crate submodules
// ============================================================================

//! ## Overview
//! Core types shared by the scan runtime: the closed document union, pure
//! path-address helpers, the raw and compiled rule model, and finding
//! records. Everything here is I/O-free.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod document;
pub mod finding;
pub mod path;
pub mod rules;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use document::DocumentNode;
pub use document::Scalar;
pub use finding::Finding;
pub use finding::FindingLog;
pub use finding::RuleKind;
pub use rules::CompiledPattern;
pub use rules::CompiledRuleSet;
pub use rules::ExceptionRule;
pub use rules::PathRule;
pub use rules::PatternDiagnostic;
pub use rules::RuleConfig;
