// crates/specgate-core/src/runtime/walker.rs
// ============================================================================
// Module: Specgate Document Walker
// Description: Deterministic depth-first pre-order document traversal.
// Purpose: Visit every mapping entry and sequence element exactly once.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! The walker performs a single depth-first pre-order pass over a document,
//! starting at the empty root address. Mapping entries are visited in
//! insertion order; sequence elements by index. The walk uses an explicit
//! work stack so untrusted input depth cannot exhaust the native call stack.
//!
//! For every mapping entry the walker invokes [`DocumentVisitor::visit_key`]
//! and, when the entry value is a string scalar, also
//! [`DocumentVisitor::visit_string_value`]. Scalar elements that sit
//! directly inside a sequence get no value visit; only mapping-entry values
//! do. Recursion into a value always happens, regardless of what the
//! visitor decided for the key itself.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::DocumentNode;
use crate::core::Scalar;
use crate::core::path;

// ============================================================================
// SECTION: Visitor Seam
// ============================================================================

/// Callback seam invoked by the walker at every addressable position.
pub trait DocumentVisitor {
    /// Called for every mapping entry with the entry's key, its composed
    /// address, and the entry value.
    fn visit_key(&mut self, key: &str, address: &str, value: &DocumentNode);

    /// Called for every string-scalar value of a mapping entry, at the
    /// entry's address. Never called for scalar sequence elements.
    fn visit_string_value(&mut self, value: &str, address: &str);
}

// ============================================================================
// SECTION: Work Stack
// ============================================================================

/// One unit of pending traversal work.
enum Frame<'doc> {
    /// Expand a node's children at the given address.
    Node {
        /// Node to expand.
        node: &'doc DocumentNode,
        /// Address of the node.
        address: String,
    },
    /// Visit one mapping entry, then descend into its value.
    Entry {
        /// Entry key.
        key: &'doc str,
        /// Entry value.
        value: &'doc DocumentNode,
        /// Composed address of the entry.
        address: String,
    },
}

// ============================================================================
// SECTION: Traversal
// ============================================================================

/// Walks the document depth-first pre-order, invoking the visitor at every
/// mapping entry and descending through every sequence element.
pub fn walk(root: &DocumentNode, visitor: &mut dyn DocumentVisitor) {
    let mut stack = vec![Frame::Node {
        node: root,
        address: String::new(),
    }];

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Node {
                node,
                address,
            } => expand(node, &address, &mut stack),
            Frame::Entry {
                key,
                value,
                address,
            } => {
                visitor.visit_key(key, &address, value);
                if let DocumentNode::Scalar(Scalar::String(text)) = value {
                    visitor.visit_string_value(text, &address);
                }
                stack.push(Frame::Node {
                    node: value,
                    address,
                });
            }
        }
    }
}

/// Pushes a node's children onto the stack in reverse declaration order so
/// they pop in document order.
fn expand<'doc>(node: &'doc DocumentNode, address: &str, stack: &mut Vec<Frame<'doc>>) {
    match node {
        DocumentNode::Mapping(entries) => {
            for (key, value) in entries.iter().rev() {
                stack.push(Frame::Entry {
                    key,
                    value,
                    address: path::child(address, key),
                });
            }
        }
        DocumentNode::Sequence(elements) => {
            for (index, element) in elements.iter().enumerate().rev() {
                stack.push(Frame::Node {
                    node: element,
                    address: path::index_child(address, index),
                });
            }
        }
        // Scalars terminate the branch; nothing to visit below them.
        DocumentNode::Scalar(_) => {}
    }
}
