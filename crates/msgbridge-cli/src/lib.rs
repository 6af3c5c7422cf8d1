//! msgbridge-cli - Code generator for msgbridge message and service codecs
//!
//! The `msgbridge` binary is a thin wrapper over these modules:
//! - [`codegen`] turns resolved specs into Rust source
//! - [`generate`] drives a batch of schema files to units or package indexes
//! - [`check`] resolves schema files without writing
//! - [`inspect`] decodes a payload with the dynamic codec
//! - [`logging`] installs the tracing subscriber

pub mod check;
pub mod codegen;
pub mod generate;
pub mod inspect;
pub mod logging;
