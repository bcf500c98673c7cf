// crates/specgate-cli/src/spec_loader.rs
// ============================================================================
// Module: Specgate Spec Loader
// Description: Guarded loading of the specification file to scan.
// Purpose: Decode YAML/JSON specs into the core document model.
// Dependencies: serde_yaml, specgate-core, thiserror
// ============================================================================

//! ## Overview
//! Specification files are untrusted input. The loader caps the file size,
//! requires UTF-8, and decodes through the YAML parser (JSON documents are
//! a YAML subset and decode through the same path). The decoded value is
//! folded into the core document model: tagged values lose their tag,
//! non-string scalar keys are rendered through their scalar display form,
//! and entries under non-scalar keys are dropped as opaque.
//!
//! All failures here happen before the core engine runs; the front-end maps
//! them to its configuration-error exit code.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use specgate_core::DocumentNode;
use specgate_core::Scalar;
use thiserror::Error;
use tracing::debug;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum accepted specification file size in bytes.
pub const MAX_SPEC_BYTES: u64 = 10 * 1_048_576;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Specification load errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum SpecLoadError {
    /// Specification file could not be read.
    #[error("spec file could not be read: {source}")]
    Read {
        /// Underlying I/O error.
        #[from]
        source: std::io::Error,
    },
    /// Specification file exceeds the accepted size.
    #[error("spec file exceeds size limit ({actual} > {MAX_SPEC_BYTES})")]
    TooLarge {
        /// Observed file size in bytes.
        actual: u64,
    },
    /// Specification file is not valid UTF-8.
    #[error("spec file must be utf-8")]
    NotUtf8,
    /// Specification file is not parsable YAML/JSON.
    #[error("spec file could not be parsed: {source}")]
    Parse {
        /// Underlying decode error.
        #[from]
        source: serde_yaml::Error,
    },
}

// ============================================================================
// SECTION: Loading
// ============================================================================

/// Loads a specification file into the core document model.
///
/// # Errors
///
/// Returns [`SpecLoadError`] when the file cannot be read, exceeds
/// [`MAX_SPEC_BYTES`], is not UTF-8, or fails to decode.
pub fn load_spec_document(path: &Path) -> Result<DocumentNode, SpecLoadError> {
    let bytes = fs::read(path)?;
    let actual = bytes.len() as u64;
    if actual > MAX_SPEC_BYTES {
        return Err(SpecLoadError::TooLarge {
            actual,
        });
    }
    let text = String::from_utf8(bytes).map_err(|_| SpecLoadError::NotUtf8)?;
    let value: serde_yaml::Value = serde_yaml::from_str(&text)?;
    debug!(path = %path.display(), "loaded specification file");
    Ok(document_from_yaml(value))
}

// ============================================================================
// SECTION: Conversion
// ============================================================================

/// Folds a decoded YAML value into the core document model.
pub fn document_from_yaml(value: serde_yaml::Value) -> DocumentNode {
    match value {
        serde_yaml::Value::Mapping(mapping) => {
            let mut entries = IndexMap::with_capacity(mapping.len());
            for (key, child) in mapping {
                let Some(key) = mapping_key_text(&key) else {
                    // Entries under non-scalar keys are unrepresentable in
                    // the address model and are dropped as opaque.
                    continue;
                };
                entries.insert(key, document_from_yaml(child));
            }
            DocumentNode::Mapping(entries)
        }
        serde_yaml::Value::Sequence(elements) => {
            DocumentNode::Sequence(elements.into_iter().map(document_from_yaml).collect())
        }
        serde_yaml::Value::String(text) => DocumentNode::Scalar(Scalar::String(text)),
        serde_yaml::Value::Number(number) => DocumentNode::Scalar(scalar_number(&number)),
        serde_yaml::Value::Bool(flag) => DocumentNode::Scalar(Scalar::Bool(flag)),
        serde_yaml::Value::Null => DocumentNode::Scalar(Scalar::Null),
        serde_yaml::Value::Tagged(tagged) => document_from_yaml(tagged.value),
    }
}

/// Renders a scalar mapping key as text; non-scalar keys yield `None`.
fn mapping_key_text(key: &serde_yaml::Value) -> Option<String> {
    match key {
        serde_yaml::Value::String(text) => Some(text.clone()),
        serde_yaml::Value::Bool(flag) => Some(flag.to_string()),
        serde_yaml::Value::Number(number) => Some(number.to_string()),
        serde_yaml::Value::Null => Some("null".to_string()),
        serde_yaml::Value::Mapping(_)
        | serde_yaml::Value::Sequence(_)
        | serde_yaml::Value::Tagged(_) => None,
    }
}

/// Converts a YAML number into the core scalar representation.
fn scalar_number(number: &serde_yaml::Number) -> Scalar {
    if let Some(value) = number.as_i64() {
        return Scalar::Number(serde_json::Number::from(value));
    }
    if let Some(value) = number.as_u64() {
        return Scalar::Number(serde_json::Number::from(value));
    }
    number
        .as_f64()
        .and_then(serde_json::Number::from_f64)
        .map_or(Scalar::Null, Scalar::Number)
}
