//! Zero-value literals for every field kind
//!
//! | Kind | Literal |
//! |------|---------|
//! | integer | `0` |
//! | float | `0.0` |
//! | bool | `false` |
//! | string | `WireString::new()` |
//! | time / duration | `Time::new(0, 0)` / `Duration::new(0, 0)` |
//! | header | `StdMsgs::Header { seq: 0, stamp: Time::new(0, 0), frame_id: WireString::new() }` |
//! | registered | `GeometryMsgs::Point::default()` |
//! | array | `Vec::new()` |
//!
//! The literals match `DynamicCodec::default_value` in msgbridge-core.

use super::UnitContext;
use msgbridge_core::TypeDescriptor;

impl UnitContext<'_> {
    /// Expression evaluating to the zero value of `ty`
    pub fn default_literal(&mut self, ty: &TypeDescriptor) -> String {
        match ty {
            TypeDescriptor::Primitive(kind) if kind.is_float() => "0.0".to_string(),
            TypeDescriptor::Primitive(_) => "0".to_string(),
            TypeDescriptor::Bool => "false".to_string(),
            TypeDescriptor::String => format!("{}::new()", self.runtime_type("WireString")),
            TypeDescriptor::Time => format!("{}::new(0, 0)", self.runtime_type("Time")),
            TypeDescriptor::Duration => format!("{}::new(0, 0)", self.runtime_type("Duration")),
            TypeDescriptor::Header => {
                let header = self.rust_type(ty);
                format!(
                    "{header} {{ seq: 0, stamp: {}::new(0, 0), frame_id: {}::new() }}",
                    self.runtime_type("Time"),
                    self.runtime_type("WireString")
                )
            }
            TypeDescriptor::Registered { .. } => format!("{}::default()", self.rust_type(ty)),
            TypeDescriptor::Array { .. } => "Vec::new()".to_string(),
        }
    }
}
