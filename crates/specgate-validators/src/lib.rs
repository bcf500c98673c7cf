// crates/specgate-validators/src/lib.rs
// ============================================================================
// Module: Specgate Validators Library
// Description: Independent validator capabilities over scanned documents.
// Purpose: Produce severity-tagged issues alongside rule-engine findings.
// Dependencies: serde, specgate-core, tracing
// ============================================================================

//! ## Overview
//! Validators are independent issue producers: each consumes the same
//! immutable document the rule engine scans and returns its own ordered
//! issue list. They share nothing with the rule set; a document with zero
//! findings can still fail validation on issues, and vice versa.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod interfaces;
pub mod privacy;
pub mod security;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use interfaces::Issue;
pub use interfaces::Severity;
pub use interfaces::Validator;
pub use privacy::PrivacyValidator;
pub use security::SecurityValidator;

// ============================================================================
// SECTION: Default Set
// ============================================================================

/// Returns the default validator set in execution order.
#[must_use]
pub fn default_validators() -> Vec<Box<dyn Validator>> {
    vec![Box::new(SecurityValidator::new()), Box::new(PrivacyValidator::new())]
}
