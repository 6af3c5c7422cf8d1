//! msgbridge-core - Schema model, type resolution and registry
//!
//! This crate provides everything the emitters need before any code is written:
//! - [`SchemaFile`] and [`SchemaDocument`] for the JSON input contract
//! - [`TypeResolver`] and [`TypeDescriptor`] for classifying type tokens
//! - [`MessageSpec`] and [`ServiceSpec`], the read-only schema model
//! - [`SpecRegistry`], the resolved set of known message types
//! - [`DynamicCodec`] for encoding and decoding [`Value`](msgbridge_wire::Value)s
//!   straight from a spec
//! - [`GeneratorConfig`] and [`GenError`]

mod config;
mod document;
mod dynamic;
mod error;
mod registry;
mod resolver;
mod schema;
mod types;

pub use config::{CONFIG_FILE_NAME, GeneratorConfig};
pub use document::{
    ConstantDocument, DocumentKind, FieldDocument, MessageDocument, SchemaDocument, SchemaFile,
    SectionDocument, ServiceDocument,
};
pub use dynamic::DynamicCodec;
pub use error::{GenError, GenResult};
pub use registry::{BuildFailures, SpecRegistry};
pub use resolver::{HEADER_TYPE, TypeLookup, TypeResolver};
pub use schema::{Constant, ConstantValue, FieldSpec, MessageSpec, ServiceSpec};
pub use types::{PrimitiveKind, TypeDescriptor};

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Log levels accepted in configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    /// Lowercase directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" => Ok(LogLevel::Off),
            other => Err(GenError::InvalidConfig(format!("unknown log level: {other}"))),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        DocumentKind, GenError, GenResult, GeneratorConfig, LogLevel, MessageSpec, SchemaFile,
        ServiceSpec, SpecRegistry, TypeDescriptor, TypeResolver,
    };
}
