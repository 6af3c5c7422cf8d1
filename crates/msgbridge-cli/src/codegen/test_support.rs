//! Builders shared by the codegen and command tests

use msgbridge_core::{
    Constant, FieldSpec, GeneratorConfig, MessageSpec, SchemaFile, SpecRegistry, TypeDescriptor,
};
use serde_json::json;
use std::path::Path;

pub const MD5: &str = "0123456789abcdef0123456789abcdef";

/// A message document with the given `(name, type)` fields
pub fn message_file(package: &str, name: &str, fields: &[(&str, &str)]) -> SchemaFile {
    let fields: Vec<_> = fields
        .iter()
        .map(|(field, ty)| json!({ "name": field, "type": ty }))
        .collect();
    let doc = json!({
        "kind": "message",
        "package": package,
        "name": name,
        "md5sum": MD5,
        "definition": "",
        "fields": fields,
    });
    SchemaFile::parse(Path::new(&format!("{name}.json")), &doc.to_string()).unwrap()
}

pub fn header_file() -> SchemaFile {
    message_file(
        "std_msgs",
        "Header",
        &[("seq", "uint32"), ("stamp", "time"), ("frame_id", "string")],
    )
}

pub fn point_file() -> SchemaFile {
    message_file(
        "geometry_msgs",
        "Point",
        &[("x", "float64"), ("y", "float64"), ("z", "float64")],
    )
}

pub fn registry(files: &[SchemaFile]) -> SpecRegistry {
    SpecRegistry::try_build(files, "std_msgs").unwrap()
}

pub fn config() -> GeneratorConfig {
    GeneratorConfig::default()
}

pub fn field(name: &str, ty: TypeDescriptor, index: usize) -> FieldSpec {
    FieldSpec {
        name: name.to_string(),
        ty,
        index,
        type_token: String::new(),
    }
}

/// A `test_pkg` message spec built directly from fields and constants
pub fn spec(name: &str, fields: Vec<FieldSpec>, constants: Vec<Constant>) -> MessageSpec {
    MessageSpec::new("test_pkg", name, fields, constants, MD5, "").unwrap()
}
