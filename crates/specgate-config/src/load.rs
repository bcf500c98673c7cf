// crates/specgate-config/src/load.rs
// ============================================================================
// Module: Specgate Config Loading
// Description: Guarded file read and YAML decode for rule configuration.
// Purpose: Enforce strict input handling before the decoder runs.
// Dependencies: serde_yaml, specgate-core, thiserror, tracing
// ============================================================================

//! ## Overview
//! Configuration files are untrusted input. The loader guards the path
//! (total and per-component length), the file size, and the encoding, then
//! decodes the four rule sections with [`specgate_core::RuleConfig`]'s serde
//! defaults. Every failure is typed so the front-end can map it to its
//! configuration-error exit code.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;

use specgate_core::RuleConfig;
use thiserror::Error;
use tracing::debug;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Default configuration file name resolved in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = ".forbidden_keys.yaml";
/// Maximum accepted configuration file size in bytes.
pub const MAX_CONFIG_BYTES: u64 = 1_048_576;
/// Maximum accepted configuration path length in bytes.
const MAX_CONFIG_PATH_LENGTH: usize = 4_096;
/// Maximum accepted length of a single path component in bytes.
const MAX_CONFIG_PATH_COMPONENT: usize = 255;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Rule configuration load errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration path exceeds the accepted length.
    #[error("config path exceeds max length ({length} > {MAX_CONFIG_PATH_LENGTH})")]
    PathTooLong {
        /// Observed path length in bytes.
        length: usize,
    },
    /// One configuration path component exceeds the accepted length.
    #[error("config path component too long ({length} > {MAX_CONFIG_PATH_COMPONENT})")]
    PathComponentTooLong {
        /// Observed component length in bytes.
        length: usize,
    },
    /// Configuration file could not be read.
    #[error("config file could not be read: {source}")]
    Read {
        /// Underlying I/O error.
        #[from]
        source: std::io::Error,
    },
    /// Configuration file exceeds the accepted size.
    #[error("config file exceeds size limit ({actual} > {MAX_CONFIG_BYTES})")]
    TooLarge {
        /// Observed file size in bytes.
        actual: u64,
    },
    /// Configuration file is not valid UTF-8.
    #[error("config file must be utf-8")]
    NotUtf8,
    /// Configuration file is not valid YAML for the rule schema.
    #[error("config file could not be parsed: {source}")]
    Parse {
        /// Underlying decode error.
        #[from]
        source: serde_yaml::Error,
    },
}

// ============================================================================
// SECTION: Loading
// ============================================================================

/// Loads and decodes a rule configuration file.
///
/// # Errors
///
/// Returns [`ConfigError`] when the path violates length guards, the file
/// cannot be read, exceeds [`MAX_CONFIG_BYTES`], is not UTF-8, or fails to
/// decode.
pub fn load_rule_config(path: &Path) -> Result<RuleConfig, ConfigError> {
    guard_path(path)?;

    let bytes = fs::read(path)?;
    let actual = bytes.len() as u64;
    if actual > MAX_CONFIG_BYTES {
        return Err(ConfigError::TooLarge {
            actual,
        });
    }

    let text = String::from_utf8(bytes).map_err(|_| ConfigError::NotUtf8)?;
    let config: RuleConfig = serde_yaml::from_str(&text)?;
    debug!(
        path = %path.display(),
        forbidden_keys = config.forbidden_keys.len(),
        patterns = config.forbidden_key_patterns.len(),
        path_rules = config.forbidden_keys_at_paths.len(),
        exceptions = config.allowed_exceptions.len(),
        "loaded rule configuration"
    );
    Ok(config)
}

/// Rejects paths that exceed total or per-component length guards.
fn guard_path(path: &Path) -> Result<(), ConfigError> {
    let length = path.as_os_str().len();
    if length > MAX_CONFIG_PATH_LENGTH {
        return Err(ConfigError::PathTooLong {
            length,
        });
    }
    for component in path.components() {
        let length = component.as_os_str().len();
        if length > MAX_CONFIG_PATH_COMPONENT {
            return Err(ConfigError::PathComponentTooLong {
                length,
            });
        }
    }
    Ok(())
}
