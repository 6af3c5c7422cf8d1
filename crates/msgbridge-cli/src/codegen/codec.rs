//! `encode` and `decode` emission
//!
//! Both routines recurse over the field's [`TypeDescriptor`]. Registered
//! messages are expanded inline field by field; headers always use their
//! fixed four-field layout. Array loops name their count and element
//! variables by nesting depth (`n0`/`e0`, `n1`/`e1`, ...).
//!
//! Decode starts from `Self::default()` and assigns into each place, so
//! nested messages and headers are already zero-initialized when their
//! subfields are read. Array elements that are not plain scalars or strings
//! start from their zero-value literal.

use super::UnitContext;
use super::naming::field_ident;
use super::rust_types::primitive_type;
use msgbridge_core::{GenResult, MessageSpec, TypeDescriptor};

fn pad(indent: usize) -> String {
    "    ".repeat(indent)
}

impl UnitContext<'_> {
    pub fn emit_encode(&mut self, spec: &MessageSpec) -> GenResult<String> {
        let mut code = String::new();
        if spec.fields.is_empty() {
            code.push_str("    fn encode(&self, _w: &mut WireWriter) -> Result<(), WireError> {\n");
            code.push_str("        Ok(())\n");
            code.push_str("    }\n");
            return Ok(code);
        }

        code.push_str("    fn encode(&self, w: &mut WireWriter) -> Result<(), WireError> {\n");
        for field in &spec.fields {
            let place = format!("self.{}", field_ident(&field.name));
            self.encode_place(&field.ty, &place, false, 0, 2, &mut code)?;
        }
        code.push_str("        Ok(())\n");
        code.push_str("    }\n");
        Ok(code)
    }

    pub fn emit_decode(&mut self, spec: &MessageSpec) -> GenResult<String> {
        let mut code = String::new();
        if spec.fields.is_empty() {
            code.push_str("    fn decode(_r: &mut WireReader<'_>) -> Result<Self, WireError> {\n");
            code.push_str("        Ok(Self::default())\n");
            code.push_str("    }\n");
            return Ok(code);
        }

        code.push_str("    fn decode(r: &mut WireReader<'_>) -> Result<Self, WireError> {\n");
        code.push_str("        let mut msg = Self::default();\n");
        for field in &spec.fields {
            let place = format!("msg.{}", field_ident(&field.name));
            self.decode_place(&field.ty, &place, 0, 2, &mut code)?;
        }
        code.push_str("        Ok(msg)\n");
        code.push_str("    }\n");
        Ok(code)
    }

    /// Emit writes for the value at `place`
    ///
    /// `by_ref` marks a loop variable bound by `iter()`, which is already a
    /// reference.
    fn encode_place(
        &mut self,
        ty: &TypeDescriptor,
        place: &str,
        by_ref: bool,
        depth: usize,
        indent: usize,
        code: &mut String,
    ) -> GenResult<()> {
        let p = pad(indent);
        let deref = if by_ref { "*" } else { "" };
        let borrow = if by_ref { "" } else { "&" };

        match ty {
            TypeDescriptor::Primitive(kind) => {
                code.push_str(&format!("{p}w.write_{}({deref}{place});\n", primitive_type(*kind)));
            }
            TypeDescriptor::Bool => {
                code.push_str(&format!("{p}w.write_bool({deref}{place});\n"));
            }
            TypeDescriptor::String => {
                code.push_str(&format!("{p}w.write_string({borrow}{place})?;\n"));
            }
            TypeDescriptor::Time | TypeDescriptor::Duration => {
                code.push_str(&format!("{p}w.write_u32({place}.secs);\n"));
                code.push_str(&format!("{p}w.write_u32({place}.nsecs);\n"));
            }
            TypeDescriptor::Header => {
                code.push_str(&format!("{p}w.write_u32({place}.seq);\n"));
                code.push_str(&format!("{p}w.write_u32({place}.stamp.secs);\n"));
                code.push_str(&format!("{p}w.write_u32({place}.stamp.nsecs);\n"));
                code.push_str(&format!("{p}w.write_string(&{place}.frame_id)?;\n"));
            }
            TypeDescriptor::Array { element, .. } => {
                let item = format!("e{depth}");
                code.push_str(&format!("{p}w.write_len({place}.len())?;\n"));
                code.push_str(&format!("{p}for {item} in {place}.iter() {{\n"));
                self.encode_place(element, &item, true, depth + 1, indent + 1, code)?;
                code.push_str(&format!("{p}}}\n"));
            }
            TypeDescriptor::Registered { package, name } => {
                let registry = self.registry;
                let nested = registry.resolve(package, name)?;
                for field in &nested.fields {
                    let sub = format!("{place}.{}", field_ident(&field.name));
                    self.encode_place(&field.ty, &sub, false, depth, indent, code)?;
                }
            }
        }
        Ok(())
    }

    /// Emit reads assigning into the already-initialized `place`
    fn decode_place(
        &mut self,
        ty: &TypeDescriptor,
        place: &str,
        depth: usize,
        indent: usize,
        code: &mut String,
    ) -> GenResult<()> {
        let p = pad(indent);

        match ty {
            TypeDescriptor::Primitive(_) | TypeDescriptor::Bool | TypeDescriptor::String => {
                if let Some(read) = scalar_read(ty) {
                    code.push_str(&format!("{p}{place} = {read};\n"));
                }
            }
            TypeDescriptor::Time | TypeDescriptor::Duration => {
                code.push_str(&format!("{p}{place}.secs = r.read_u32()?;\n"));
                code.push_str(&format!("{p}{place}.nsecs = r.read_u32()?;\n"));
            }
            TypeDescriptor::Header => {
                code.push_str(&format!("{p}{place}.seq = r.read_u32()?;\n"));
                code.push_str(&format!("{p}{place}.stamp.secs = r.read_u32()?;\n"));
                code.push_str(&format!("{p}{place}.stamp.nsecs = r.read_u32()?;\n"));
                code.push_str(&format!("{p}{place}.frame_id = r.read_string()?;\n"));
            }
            TypeDescriptor::Array { element, .. } => {
                let count = format!("n{depth}");
                code.push_str(&format!("{p}let {count} = r.read_len()?;\n"));
                code.push_str(&format!("{p}{place}.reserve(r.capacity_hint({count}));\n"));
                code.push_str(&format!("{p}for _ in 0..{count} {{\n"));
                match scalar_read(element) {
                    Some(read) => code.push_str(&format!("{p}    {place}.push({read});\n")),
                    None => {
                        let item = format!("e{depth}");
                        let literal = self.default_literal(element);
                        code.push_str(&format!("{p}    let mut {item} = {literal};\n"));
                        self.decode_place(element, &item, depth + 1, indent + 1, code)?;
                        code.push_str(&format!("{p}    {place}.push({item});\n"));
                    }
                }
                code.push_str(&format!("{p}}}\n"));
            }
            TypeDescriptor::Registered { package, name } => {
                let registry = self.registry;
                let nested = registry.resolve(package, name)?;
                for field in &nested.fields {
                    let sub = format!("{place}.{}", field_ident(&field.name));
                    self.decode_place(&field.ty, &sub, depth, indent, code)?;
                }
            }
        }
        Ok(())
    }
}

/// Read expression for kinds decoded in one call
fn scalar_read(ty: &TypeDescriptor) -> Option<String> {
    match ty {
        TypeDescriptor::Primitive(kind) => Some(format!("r.read_{}()?", primitive_type(*kind))),
        TypeDescriptor::Bool => Some("r.read_bool()?".to_string()),
        TypeDescriptor::String => Some("r.read_string()?".to_string()),
        _ => None,
    }
}
