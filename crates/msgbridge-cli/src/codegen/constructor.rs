//! Default impl, field accessors and validated construction

use super::UnitContext;
use super::naming::{field_ident, string_literal};
use msgbridge_core::{Constant, ConstantValue, MessageSpec, TypeDescriptor};

impl UnitContext<'_> {
    /// `impl Name { pub const ...; }`, or nothing when there are no constants
    pub fn emit_constants(&mut self, spec: &MessageSpec) -> String {
        if spec.constants.is_empty() {
            return String::new();
        }

        let mut code = String::new();
        code.push_str(&format!("impl {} {{\n", spec.short_name));
        for constant in &spec.constants {
            let ty = self.constant_type(&constant.ty);
            code.push_str(&format!(
                "    pub const {}: {ty} = {};\n",
                field_ident(&constant.name),
                constant_literal(constant)
            ));
        }
        code.push_str("}\n\n");
        code
    }

    /// `impl Default` built from each field's zero value
    pub fn emit_default_impl(&mut self, spec: &MessageSpec) -> String {
        let mut code = String::new();
        code.push_str(&format!("impl Default for {} {{\n", spec.short_name));
        code.push_str("    fn default() -> Self {\n");
        code.push_str("        Self {\n");
        for field in &spec.fields {
            let literal = self.default_literal(&field.ty);
            code.push_str(&format!("            {}: {literal},\n", field_ident(&field.name)));
        }
        code.push_str("        }\n");
        code.push_str("    }\n");
        code.push_str("}\n\n");
        code
    }

    /// The `ACCESSORS` table, one get/set pair per field in ordinal order
    pub fn emit_accessors(&self, spec: &MessageSpec) -> String {
        let mut code = String::new();
        if spec.fields.is_empty() {
            code.push_str("    const ACCESSORS: &'static [FieldAccessor<Self>] = &[];\n");
            return code;
        }

        code.push_str("    const ACCESSORS: &'static [FieldAccessor<Self>] = &[\n");
        for field in &spec.fields {
            let ident = field_ident(&field.name);
            code.push_str("        FieldAccessor {\n");
            code.push_str(&format!("            name: {},\n", string_literal(&field.name)));
            code.push_str(&format!("            get: |m| m.{ident}.to_value(),\n"));
            code.push_str("            set: |m, v| {\n");
            code.push_str(&format!("                m.{ident} = FromValue::from_value(v)?;\n"));
            code.push_str("                Ok(())\n");
            code.push_str("            },\n");
            code.push_str("        },\n");
        }
        code.push_str("    ];\n");
        code
    }

    /// `construct`: bind arguments, then validate each supplied value
    ///
    /// The fallback closure passed to `ConstructMode::accept` is only called
    /// in lenient mode.
    pub fn emit_construct(&mut self, spec: &MessageSpec) -> String {
        let mut code = String::new();
        code.push_str(
            "    fn construct(args: Args, mode: ConstructMode) -> Result<Self, ConstructError> {\n",
        );
        if spec.fields.is_empty() {
            code.push_str("        args.bind(Self::FIELDS, mode)?;\n");
            code.push_str("        Ok(Self::default())\n");
            code.push_str("    }\n");
            return code;
        }

        code.push_str("        let mut slots = args.bind(Self::FIELDS, mode)?.into_iter();\n");
        code.push_str("        let mut msg = Self::default();\n");
        for field in &spec.fields {
            let literal = self.default_literal(&field.ty);
            code.push_str("        if let Some(value) = slots.next().flatten() {\n");
            code.push_str(&format!(
                "            msg.{} = mode.accept({}, FromValue::from_value(value), || {literal})?;\n",
                field_ident(&field.name),
                string_literal(&field.name)
            ));
            code.push_str("        }\n");
        }
        code.push_str("        Ok(msg)\n");
        code.push_str("    }\n");
        code
    }
}

/// Rust literal for a constant's value
fn constant_literal(constant: &Constant) -> String {
    match &constant.value {
        ConstantValue::Int(v) => v.to_string(),
        ConstantValue::Float(v) => float_literal(&constant.ty, *v),
        ConstantValue::Bool(v) => v.to_string(),
        ConstantValue::String(v) => string_literal(v),
    }
}

fn float_literal(ty: &TypeDescriptor, v: f64) -> String {
    let float = match ty {
        TypeDescriptor::Primitive(kind) => super::rust_types::primitive_type(*kind),
        _ => "f64",
    };
    if v.is_nan() {
        format!("{float}::NAN")
    } else if v == f64::INFINITY {
        format!("{float}::INFINITY")
    } else if v == f64::NEG_INFINITY {
        format!("{float}::NEG_INFINITY")
    } else {
        format!("{v:?}")
    }
}
