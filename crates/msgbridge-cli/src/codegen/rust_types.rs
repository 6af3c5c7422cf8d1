//! Rust spellings of field types

use super::UnitContext;
use msgbridge_core::{PrimitiveKind, TypeDescriptor};

/// Rust type of a primitive, which is also the suffix of its wire accessors
/// (`write_u32` / `read_u32`)
pub fn primitive_type(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::Int8 => "i8",
        PrimitiveKind::UInt8 => "u8",
        PrimitiveKind::Int16 => "i16",
        PrimitiveKind::UInt16 => "u16",
        PrimitiveKind::Int32 => "i32",
        PrimitiveKind::UInt32 => "u32",
        PrimitiveKind::Int64 => "i64",
        PrimitiveKind::UInt64 => "u64",
        PrimitiveKind::Float32 => "f32",
        PrimitiveKind::Float64 => "f64",
    }
}

impl UnitContext<'_> {
    /// Field type, e.g. `Vec<GeometryMsgs::Point>`
    pub fn rust_type(&mut self, ty: &TypeDescriptor) -> String {
        match ty {
            TypeDescriptor::Primitive(kind) => primitive_type(*kind).to_string(),
            TypeDescriptor::Bool => "bool".to_string(),
            TypeDescriptor::String => self.runtime_type("WireString"),
            TypeDescriptor::Time => self.runtime_type("Time"),
            TypeDescriptor::Duration => self.runtime_type("Duration"),
            TypeDescriptor::Header => {
                let header_package = self.config.header_package.clone();
                format!("{}::Header", self.namespace(&header_package))
            }
            TypeDescriptor::Array { element, .. } => format!("Vec<{}>", self.rust_type(element)),
            TypeDescriptor::Registered { package, name } => {
                format!("{}::{name}", self.namespace(package))
            }
        }
    }

    /// Type of an associated constant; strings are `&'static str`
    pub fn constant_type(&mut self, ty: &TypeDescriptor) -> String {
        match ty {
            TypeDescriptor::String => "&'static str".to_string(),
            other => self.rust_type(other),
        }
    }
}
