// crates/specgate-core/tests/path_addressing.rs
// ============================================================================
// Module: Path Addressing Tests
// Description: Unit coverage for address composition and normalization.
// Purpose: Pin the exact string forms path rules compare against.
// ============================================================================

//! Address composition and normalization contract tests.

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

use specgate_core::core::path;

#[test]
fn child_of_empty_parent_is_the_bare_key() {
    assert_eq!(path::child("", "info"), "info");
}

#[test]
fn child_of_nonempty_parent_appends_dot_key() {
    assert_eq!(path::child("info.contact", "email"), "info.contact.email");
}

#[test]
fn index_child_appends_bracketed_index() {
    assert_eq!(path::index_child("servers", 0), "servers[0]");
    assert_eq!(path::index_child("", 3), "[3]");
}

#[test]
fn index_children_compose_for_nested_sequences() {
    let outer = path::index_child("matrix", 1);
    assert_eq!(path::index_child(&outer, 2), "matrix[1][2]");
}

#[test]
fn normalize_strips_a_single_leading_separator() {
    assert_eq!(path::normalize(".info.contact"), "info.contact");
    assert_eq!(path::normalize("info.contact"), "info.contact");
    // Only one separator is stripped; further dots are left alone.
    assert_eq!(path::normalize("..info"), ".info");
}

#[test]
fn normalize_leaves_internal_text_untouched() {
    assert_eq!(path::normalize("info. contact"), "info. contact");
    assert_eq!(path::normalize("Info.Contact"), "Info.Contact");
}
