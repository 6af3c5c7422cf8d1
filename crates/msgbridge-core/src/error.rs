//! Error types for schema loading, resolution and generation

use msgbridge_wire::{ValueError, WireError};
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generator operations
pub type GenResult<T> = Result<T, GenError>;

/// Error type for generator operations
///
/// Every variant is fatal for the unit being generated or decoded; batch
/// drivers report it against the file and carry on with the rest.
#[derive(Error, Debug)]
pub enum GenError {
    /// A registered type token is not known to the registry
    #[error("cannot resolve type {token}")]
    SchemaResolution { token: String },

    /// A token that is neither a builtin nor a well-formed type name
    #[error("unsupported type {token}: {reason}")]
    UnsupportedType { token: String, reason: String },

    /// A registered type that contains itself
    #[error("recursive type: {chain}")]
    RecursiveType { chain: String },

    /// A document that is well-formed JSON but not a valid schema
    #[error("invalid schema {context}: {message}")]
    InvalidSchema { context: String, message: String },

    /// A schema document could not be read
    #[error("failed to read {}: {source}", path.display())]
    ReadSchema {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A schema document is not valid JSON for the input contract
    #[error("failed to parse {}: {source}", path.display())]
    ParseSchema {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Generated output could not be written
    #[error("failed to write {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    InvalidConfig(String),

    /// Encoding or decoding failed
    #[error(transparent)]
    Wire(#[from] WireError),

    /// A dynamic value does not fit its field
    #[error(transparent)]
    Value(#[from] ValueError),
}

impl GenError {
    pub fn invalid_schema(context: impl Into<String>, message: impl Into<String>) -> Self {
        GenError::InvalidSchema {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Short stable name of the error kind, used in logs and reports
    pub fn kind(&self) -> &'static str {
        match self {
            GenError::SchemaResolution { .. } => "schema_resolution",
            GenError::UnsupportedType { .. } => "unsupported_type",
            GenError::RecursiveType { .. } => "recursive_type",
            GenError::InvalidSchema { .. } => "invalid_schema",
            GenError::ReadSchema { .. } => "read_schema",
            GenError::ParseSchema { .. } => "parse_schema",
            GenError::OutputWrite { .. } => "output_write",
            GenError::InvalidConfig(_) => "invalid_config",
            GenError::Wire(_) => "wire",
            GenError::Value(_) => "value",
        }
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
