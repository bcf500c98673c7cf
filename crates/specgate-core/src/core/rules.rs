// crates/specgate-core/src/core/rules.rs
// ============================================================================
// Module: Specgate Rule Model
// Description: Raw rule categories and the compiled, scan-ready rule set.
// Purpose: Turn configuration into matchers with non-fatal diagnostics.
// Dependencies: regex, serde
// ============================================================================

//! ## Overview
//! Rule configuration carries four categories: globally forbidden keys,
//! forbidden key patterns (regex, full-match semantics), keys forbidden at
//! exact paths, and priority-ordered allowed exceptions. Compilation turns
//! the raw categories into a [`CompiledRuleSet`]: patterns are compiled with
//! full-string anchoring, invalid patterns are dropped into
//! [`PatternDiagnostic`] records, and the remaining patterns keep their
//! declaration order because that order drives finding emission order.
//!
//! The compiled set is immutable, performs no document access, and is safe
//! to share read-only across concurrent scans of independent documents.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashSet;

use regex::Regex;
use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Raw Configuration
// ============================================================================

/// Key forbidden only at one exact path address.
///
/// # Invariants
/// - `path` is compared after normalization (a single leading `.` is
///   tolerated); `key` is compared exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathRule {
    /// Exact address at which the key is forbidden.
    pub path: String,
    /// Key name forbidden at the address.
    pub key: String,
    /// Optional human-readable reason used as the finding message.
    #[serde(default)]
    pub reason: Option<String>,
}

/// Priority-ordered exception suppressing all rule categories for one key
/// occurrence under a path prefix.
///
/// # Invariants
/// - An empty `path_prefix` matches every address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionRule {
    /// Key name the exception applies to.
    pub key: String,
    /// Literal address prefix the exception is scoped to.
    #[serde(default)]
    pub path_prefix: String,
}

/// Raw rule configuration: the four rule categories.
///
/// # Invariants
/// - Absent sections deserialize to empty lists; an empty configuration is
///   valid and yields zero findings for any document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Literal key names forbidden anywhere in the document.
    #[serde(default)]
    pub forbidden_keys: Vec<String>,
    /// Regex patterns (full-match) applied to keys and string values.
    #[serde(default)]
    pub forbidden_key_patterns: Vec<String>,
    /// Keys forbidden only at specific path addresses.
    #[serde(default)]
    pub forbidden_keys_at_paths: Vec<PathRule>,
    /// Priority-ordered allowed exceptions.
    #[serde(default)]
    pub allowed_exceptions: Vec<ExceptionRule>,
}

// ============================================================================
// SECTION: Compilation Diagnostics
// ============================================================================

/// Non-fatal diagnostic for a pattern that failed to compile.
///
/// # Invariants
/// - `index` refers to the pattern's position in the declared
///   `forbidden_key_patterns` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternDiagnostic {
    /// Position of the invalid pattern in the configured list.
    pub index: usize,
    /// Original pattern text as configured.
    pub pattern: String,
    /// Compiler error detail.
    pub detail: String,
}

// ============================================================================
// SECTION: Compiled Patterns
// ============================================================================

/// One successfully compiled forbidden pattern.
///
/// # Invariants
/// - `text` is the original configured pattern, retained verbatim for
///   message formatting; the matcher is anchored for full-string semantics.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// Original pattern text as configured.
    text: String,
    /// Anchored matcher enforcing full-string match semantics.
    matcher: Regex,
}

impl CompiledPattern {
    /// Compiles a configured pattern with full-string anchoring.
    ///
    /// # Errors
    ///
    /// Returns the underlying regex error when the pattern is invalid.
    fn compile(pattern: &str) -> Result<Self, regex::Error> {
        let matcher = Regex::new(&format!("^(?:{pattern})$"))?;
        Ok(Self {
            text: pattern.to_string(),
            matcher,
        })
    }

    /// Returns the original configured pattern text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true when the pattern matches the entire input.
    #[must_use]
    pub fn is_full_match(&self, input: &str) -> bool {
        self.matcher.is_match(input)
    }
}

// ============================================================================
// SECTION: Compiled Rule Set
// ============================================================================

/// Scan-ready rule set compiled from raw configuration.
///
/// # Invariants
/// - Immutable once compiled; shared read-only for the whole traversal.
/// - `patterns` preserves declaration order of the valid patterns.
#[derive(Debug, Clone, Default)]
pub struct CompiledRuleSet {
    /// Literal forbidden-key membership set.
    forbidden_keys: HashSet<String>,
    /// Successfully compiled patterns in declaration order.
    patterns: Vec<CompiledPattern>,
    /// Path-scoped rules in declaration order.
    path_rules: Vec<PathRule>,
    /// Allowed exceptions in priority order.
    exceptions: Vec<ExceptionRule>,
}

impl CompiledRuleSet {
    /// Compiles raw configuration into a rule set plus pattern diagnostics.
    ///
    /// Compilation never aborts: each invalid pattern is recorded as a
    /// [`PatternDiagnostic`] and excluded from the active set.
    #[must_use]
    pub fn compile(config: &RuleConfig) -> (Self, Vec<PatternDiagnostic>) {
        let mut patterns = Vec::with_capacity(config.forbidden_key_patterns.len());
        let mut diagnostics = Vec::new();
        for (index, pattern) in config.forbidden_key_patterns.iter().enumerate() {
            match CompiledPattern::compile(pattern) {
                Ok(compiled) => patterns.push(compiled),
                Err(error) => diagnostics.push(PatternDiagnostic {
                    index,
                    pattern: pattern.clone(),
                    detail: error.to_string(),
                }),
            }
        }

        let compiled = Self {
            forbidden_keys: config.forbidden_keys.iter().cloned().collect(),
            patterns,
            path_rules: config.forbidden_keys_at_paths.clone(),
            exceptions: config.allowed_exceptions.clone(),
        };
        (compiled, diagnostics)
    }

    /// Returns true when the key is in the literal forbidden-key set.
    #[must_use]
    pub fn is_forbidden_key(&self, key: &str) -> bool {
        self.forbidden_keys.contains(key)
    }

    /// Returns the compiled patterns in declaration order.
    #[must_use]
    pub fn patterns(&self) -> &[CompiledPattern] {
        &self.patterns
    }

    /// Returns the path-scoped rules in declaration order.
    #[must_use]
    pub fn path_rules(&self) -> &[PathRule] {
        &self.path_rules
    }

    /// Returns the allowed exceptions in priority order.
    #[must_use]
    pub fn exceptions(&self) -> &[ExceptionRule] {
        &self.exceptions
    }

    /// Returns true when no rule category carries any entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forbidden_keys.is_empty()
            && self.patterns.is_empty()
            && self.path_rules.is_empty()
            && self.exceptions.is_empty()
    }
}
