//! Name Dataset Error Types
//!
//! Errors raised while locating, reading, and parsing name datasets.
//! The public loader recovers from all of them; they surface only through
//! [`try_load_name_data`](super::loader::try_load_name_data) and the catalog.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Dataset Errors
// ============================================================================

/// Errors that can occur when working with name datasets.
#[derive(Error, Debug)]
pub enum NameDataError {
    /// No dataset exists for the requested identifier.
    #[error("Name dataset '{resource}' not found")]
    NotFound { resource: String },

    /// Dataset file exists but could not be read.
    #[error("Failed to read name dataset from {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Dataset content is not valid JSON or does not match a dataset shape.
    #[error("Failed to parse name dataset '{resource}' as JSON: {source}")]
    ParseJson {
        resource: String,
        #[source]
        source: serde_json::Error,
    },

    /// Dataset content is not valid YAML or does not match a dataset shape.
    #[error("Failed to parse name dataset '{resource}' as YAML: {source}")]
    ParseYaml {
        resource: String,
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// Category or generator identifier cannot address a dataset.
    #[error("Invalid dataset identifier '{identifier}': {reason}")]
    InvalidIdentifier { identifier: String, reason: String },

    /// Catalog directory scan failed.
    #[error("Failed to scan dataset directory {path}: {source}")]
    ScanFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl NameDataError {
    /// Create a NotFound error.
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a ReadFailed error.
    pub fn read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a ParseJson error.
    pub fn parse_json(resource: impl Into<String>, source: serde_json::Error) -> Self {
        Self::ParseJson {
            resource: resource.into(),
            source,
        }
    }

    /// Create a ParseYaml error.
    pub fn parse_yaml(resource: impl Into<String>, source: serde_yaml_ng::Error) -> Self {
        Self::ParseYaml {
            resource: resource.into(),
            source,
        }
    }

    /// Create an InvalidIdentifier error.
    pub fn invalid_identifier(identifier: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            identifier: identifier.into(),
            reason: reason.into(),
        }
    }

    /// Create a ScanFailed error.
    pub fn scan_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ScanFailed {
            path: path.into(),
            source,
        }
    }

    /// Check if this error only means "no dataset here".
    ///
    /// Missing datasets and rejected identifiers are expected in a catalog of
    /// generators; read and parse failures point at broken data.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::InvalidIdentifier { .. }
        )
    }
}

/// Result type for dataset operations.
pub type Result<T> = std::result::Result<T, NameDataError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_recoverable() {
        let err = NameDataError::not_found("fantasy/elf");
        assert!(err.is_recoverable());

        let err = NameDataError::invalid_identifier("../etc", "path traversal");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_parse_error_is_not_recoverable() {
        let source = serde_json::from_str::<serde_json::Value>("{ broken").unwrap_err();
        let err = NameDataError::parse_json("fantasy/elf", source);
        assert!(!err.is_recoverable());

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = NameDataError::read_failed("/data/fantasy/elf.json", io);
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let err = NameDataError::not_found("dnd/tiefling");
        let msg = format!("{}", err);
        assert!(msg.contains("dnd/tiefling"));

        let err = NameDataError::invalid_identifier("a/b", "contains a path separator");
        let msg = format!("{}", err);
        assert!(msg.contains("a/b"));
        assert!(msg.contains("path separator"));
    }
}
