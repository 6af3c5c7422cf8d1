//! Whole units for messages and services

use super::UnitContext;
use super::naming::{field_ident, raw_string_literal, string_literal};
use msgbridge_core::{GenError, GenResult, GeneratorConfig, MessageSpec, ServiceSpec, SpecRegistry};

/// Generate the unit for one message
pub fn emit_message_unit(
    spec: &MessageSpec,
    registry: &SpecRegistry,
    config: &GeneratorConfig,
) -> GenResult<String> {
    let mut ctx = UnitContext::new(registry, config);
    check_type_name(&spec.full_name, &spec.short_name)?;
    ctx.define_local(&spec.short_name);

    let body = ctx.emit_message_items(spec)?;

    tracing::debug!(
        type_name = %spec.full_name,
        packages = ctx.required.len(),
        "Emitted message unit"
    );
    Ok(assemble_unit(&spec.full_name, &ctx, body))
}

/// Generate the unit for one service: its request, its response and the
/// descriptor type tying them together
pub fn emit_service_unit(
    spec: &ServiceSpec,
    registry: &SpecRegistry,
    config: &GeneratorConfig,
) -> GenResult<String> {
    let mut ctx = UnitContext::new(registry, config);
    check_type_name(&spec.full_name, &spec.short_name)?;
    ctx.define_local(&spec.short_name);
    for message in spec.messages() {
        check_type_name(&message.full_name, &message.short_name)?;
        ctx.define_local(&message.short_name);
    }

    let mut body = String::new();
    for message in spec.messages() {
        body.push_str(&ctx.emit_message_items(message)?);
    }

    body.push_str("#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]\n");
    body.push_str(&format!("pub struct {};\n\n", spec.short_name));
    body.push_str(&format!("impl ServiceDefinition for {} {{\n", spec.short_name));
    body.push_str(&format!(
        "    const TYPE: &'static str = {};\n",
        string_literal(&spec.full_name)
    ));
    body.push_str(&format!(
        "    const MD5SUM: &'static str = {};\n",
        string_literal(&spec.md5sum)
    ));
    body.push_str(&format!("    type Request = {};\n", spec.request.short_name));
    body.push_str(&format!("    type Response = {};\n", spec.response.short_name));
    body.push_str("}\n");

    tracing::debug!(
        type_name = %spec.full_name,
        packages = ctx.required.len(),
        "Emitted service unit"
    );
    Ok(assemble_unit(&spec.full_name, &ctx, body))
}

/// Header comment, prelude and package includes, then the body
fn assemble_unit(full_name: &str, ctx: &UnitContext<'_>, body: String) -> String {
    let mut code = String::new();
    code.push_str(&format!("// Generated by msgbridge from {full_name}. Do not edit.\n\n"));
    code.push_str(&format!("use {}::prelude::*;\n", ctx.config.runtime_crate));
    code.push_str(&ctx.required.emit_includes(ctx.config));
    code.push('\n');
    code.push_str(body.trim_end());
    code.push('\n');
    code
}

fn check_type_name(full_name: &str, short_name: &str) -> GenResult<()> {
    if super::is_allowed_type_name(short_name) {
        Ok(())
    } else {
        Err(GenError::UnsupportedType {
            token: full_name.to_string(),
            reason: format!("type name {short_name} collides with a runtime prelude item"),
        })
    }
}

impl UnitContext<'_> {
    /// Struct, constants, `Default`, `Message`, `ToValue` and `FromValue`
    pub fn emit_message_items(&mut self, spec: &MessageSpec) -> GenResult<String> {
        let name = &spec.short_name;
        let mut code = String::new();

        code.push_str("#[derive(Debug, Clone, PartialEq)]\n");
        code.push_str(&format!("pub struct {name} {{\n"));
        for field in &spec.fields {
            let ty = self.rust_type(&field.ty);
            code.push_str(&format!("    pub {}: {ty},\n", field_ident(&field.name)));
        }
        code.push_str("}\n\n");

        code.push_str(&self.emit_constants(spec));
        code.push_str(&self.emit_default_impl(spec));

        code.push_str(&format!("impl Message for {name} {{\n"));
        code.push_str(&format!(
            "    const TYPE: &'static str = {};\n",
            string_literal(&spec.full_name)
        ));
        code.push_str(&format!(
            "    const MD5SUM: &'static str = {};\n",
            string_literal(&spec.md5sum)
        ));
        code.push_str(&format!("    const HAS_HEADER: bool = {};\n", spec.has_header));
        code.push_str(&format!(
            "    const FULL_TEXT: &'static str = {};\n",
            raw_string_literal(&spec.definition)
        ));
        code.push_str(&format!(
            "    const FIELDS: &'static [&'static str] = &[{}];\n",
            quoted_list(spec.fields.iter().map(|f| f.name.as_str()))
        ));
        code.push_str(&format!(
            "    const FIELD_TYPES: &'static [&'static str] = &[{}];\n",
            quoted_list(spec.fields.iter().map(|f| f.type_token.as_str()))
        ));
        code.push_str(&self.emit_accessors(spec));
        code.push('\n');
        code.push_str(&self.emit_construct(spec));
        code.push('\n');
        code.push_str(&self.emit_encode(spec)?);
        code.push('\n');
        code.push_str(&self.emit_decode(spec)?);
        code.push_str("}\n\n");

        code.push_str(&format!("impl ToValue for {name} {{\n"));
        code.push_str("    fn to_value(&self) -> Value {\n");
        code.push_str("        Value::Message(self.to_message_value())\n");
        code.push_str("    }\n");
        code.push_str("}\n\n");

        code.push_str(&format!("impl FromValue for {name} {{\n"));
        code.push_str("    fn from_value(value: Value) -> Result<Self, ValueError> {\n");
        code.push_str("        message_from_value(value)\n");
        code.push_str("    }\n");
        code.push_str("}\n\n");

        Ok(code)
    }
}

fn quoted_list<'s>(items: impl Iterator<Item = &'s str>) -> String {
    items.map(string_literal).collect::<Vec<_>>().join(", ")
}
