//! Error types for YAML conversion.
//!
//! The taxonomy is deliberately narrow: the codec core itself never fails
//! (malformed event streams degrade to null or early termination), so the
//! only fallible seams are the external YAML scanner and the serde boundary.

use thiserror::Error;

/// Errors that can occur while converting to or from YAML.
#[derive(Error, Debug)]
pub enum YamlConvError {
    /// The input text was not scannable YAML (decoding path).
    #[error("YAML scan error: {0}")]
    Scan(#[from] yaml_rust2::ScanError),

    /// A typed value failed to cross the object-graph boundary
    /// (serialize/deserialize via `serde_json`).
    #[error("value conversion error: {0}")]
    Convert(#[from] serde_json::Error),
}

/// Convenience alias used throughout yamlconv-core.
pub type Result<T> = std::result::Result<T, YamlConvError>;
