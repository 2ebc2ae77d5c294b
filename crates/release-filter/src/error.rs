//! Error types for the release-filter crate.
//!
//! Evaluating a well-typed `Release` never fails. Errors only come from the
//! edges: loosely typed records handed in by a pipeline driver, and
//! configuration files.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building releases or loading configuration
#[derive(Error, Debug)]
pub enum FilterError {
    /// A loosely typed record didn't have the expected shape
    ///
    /// `field` names the offending key (`"record"` when the value isn't an
    /// object at all).
    #[error("Malformed record: {field} {reason}")]
    MalformedRecord { field: String, reason: String },

    /// Configuration file could not be read
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid JSON for a FilterConfig
    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration parsed but holds a value the filter can't use
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl FilterError {
    pub(crate) fn malformed(field: &str, reason: impl Into<String>) -> Self {
        FilterError::MalformedRecord {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, FilterError>;
