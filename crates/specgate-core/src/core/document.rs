// crates/specgate-core/src/core/document.rs
// ============================================================================
// Module: Specgate Document Model
// Description: In-memory tree model for API specification documents.
// Purpose: Provide a closed tagged union the scan engine dispatches on.
// Dependencies: indexmap, serde_json
// ============================================================================

//! ## Overview
//! The document model is a closed union of exactly three shapes: an ordered
//! mapping, a sequence, and a scalar. All traversal logic dispatches on the
//! variant tag; no ad hoc type inspection happens anywhere in the engine.
//! Mapping insertion order is preserved and significant for traversal order.
//!
//! Documents are acyclic by construction (decoded from serialized specs).
//! The engine never mutates a document and tolerates arbitrary nesting depth.

// ============================================================================
// SECTION: Imports
// ============================================================================

use indexmap::IndexMap;
use serde_json::Value;

// ============================================================================
// SECTION: Scalar Values
// ============================================================================

/// Scalar leaf of a specification document.
///
/// # Invariants
/// - Variants are exhaustive for decoded spec leaves; anything a decoder
///   cannot represent must be folded into one of these shapes before the
///   scan starts.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// UTF-8 string value.
    String(String),
    /// Numeric value (integer or float, decoder-preserved).
    Number(serde_json::Number),
    /// Boolean value.
    Bool(bool),
    /// Null / absent value.
    Null,
}

// ============================================================================
// SECTION: Document Nodes
// ============================================================================

/// One node of a specification document tree.
///
/// # Invariants
/// - Mapping keys are unique; insertion order is preserved and drives
///   traversal order.
/// - Sequence order is significant.
/// - The tree is acyclic.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentNode {
    /// Ordered mapping from string key to child node.
    Mapping(IndexMap<String, DocumentNode>),
    /// Ordered sequence of child nodes.
    Sequence(Vec<DocumentNode>),
    /// Scalar leaf.
    Scalar(Scalar),
}

impl DocumentNode {
    /// Returns an empty mapping node.
    #[must_use]
    pub fn empty_mapping() -> Self {
        Self::Mapping(IndexMap::new())
    }

    /// Returns the mapping entries when this node is a mapping.
    #[must_use]
    pub const fn as_mapping(&self) -> Option<&IndexMap<String, Self>> {
        match self {
            Self::Mapping(entries) => Some(entries),
            Self::Sequence(_) | Self::Scalar(_) => None,
        }
    }

    /// Returns the sequence elements when this node is a sequence.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::Sequence(elements) => Some(elements),
            Self::Mapping(_) | Self::Scalar(_) => None,
        }
    }

    /// Returns the string text when this node is a string scalar.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(Scalar::String(text)) => Some(text.as_str()),
            Self::Mapping(_) | Self::Sequence(_) | Self::Scalar(_) => None,
        }
    }

    /// Looks up a direct child of a mapping node by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_mapping().and_then(|entries| entries.get(key))
    }
}

impl From<Value> for DocumentNode {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(object) => {
                let mut entries = IndexMap::with_capacity(object.len());
                for (key, child) in object {
                    entries.insert(key, Self::from(child));
                }
                Self::Mapping(entries)
            }
            Value::Array(values) => {
                Self::Sequence(values.into_iter().map(Self::from).collect())
            }
            Value::String(text) => Self::Scalar(Scalar::String(text)),
            Value::Number(number) => Self::Scalar(Scalar::Number(number)),
            Value::Bool(flag) => Self::Scalar(Scalar::Bool(flag)),
            Value::Null => Self::Scalar(Scalar::Null),
        }
    }
}
