// crates/specgate-core/src/core/path.rs
// ============================================================================
// Module: Specgate Path Addressing
// Description: Stable string addresses for document tree positions.
// Purpose: Compose and normalize node addresses for rule comparison.
// Dependencies: none
// ============================================================================

//! ## Overview
//! Path addresses identify a node's position in the document tree. Mapping
//! descent appends `.key` (bare `key` when the parent address is empty);
//! sequence descent appends `[index]`. Addresses are compared as exact
//! strings by path-scoped rules and as literal prefixes by exceptions.
//!
//! Normalization strips at most one leading separator and nothing else: no
//! case folding, no whitespace trimming. Configured paths with additional
//! leading separators are malformed and simply never match.

// ============================================================================
// SECTION: Address Composition
// ============================================================================

/// Composes the address of a mapping entry from its parent address and key.
#[must_use]
pub fn child(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

/// Composes the address of a sequence element from its parent address and
/// index.
#[must_use]
pub fn index_child(parent: &str, index: usize) -> String {
    format!("{parent}[{index}]")
}

// ============================================================================
// SECTION: Address Normalization
// ============================================================================

/// Strips a single leading `.` separator for comparison against configured
/// path-scoped rule paths, which may or may not carry one.
#[must_use]
pub fn normalize(address: &str) -> &str {
    address.strip_prefix('.').unwrap_or(address)
}
