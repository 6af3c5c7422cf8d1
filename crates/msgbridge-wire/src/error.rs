//! Error types for encoding, decoding and validated construction

use thiserror::Error;

/// Result type alias for wire operations
pub type WireResult<T> = Result<T, WireError>;

/// Error raised while encoding or decoding the wire format
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    /// Decoding would read past the end of the input
    #[error("truncated input: needed {needed} bytes at offset {offset}, only {remaining} remaining")]
    Truncated {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// A string or array is too long for its 4-byte length prefix
    #[error("length {len} does not fit in a 4-byte length prefix")]
    LengthOverflow { len: usize },

    /// Input continues after a complete message
    #[error("{count} trailing bytes after message")]
    TrailingBytes { count: usize },
}

/// Error raised when a [`Value`](crate::Value) does not fit a field's type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("value {value} out of range for {expected}")]
    OutOfRange { expected: &'static str, value: String },

    /// A message value of a different registered type
    #[error("expected message {expected}, found {found}")]
    MessageMismatch { expected: String, found: String },

    /// A nested message value failed its own construction
    #[error("invalid {type_name}: {source}")]
    Nested {
        type_name: String,
        source: Box<ConstructError>,
    },
}

/// Error raised by validated construction of a generated message
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConstructError {
    #[error("too many positional values: {given} given, message has {max} fields")]
    TooManyValues { given: usize, max: usize },

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("no field at ordinal {0}")]
    UnknownOrdinal(usize),

    #[error("field {0} bound more than once")]
    DuplicateField(String),

    #[error("invalid value for field {field}: {source}")]
    InvalidField { field: String, source: ValueError },
}
