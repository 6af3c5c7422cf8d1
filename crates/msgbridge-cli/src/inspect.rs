//! Inspect command implementation
//!
//! Decodes a binary payload with the schema-driven dynamic codec, so a
//! payload can be examined without generating code for its type.

use anyhow::{Context, Result};
use msgbridge_core::{DynamicCodec, GeneratorConfig, SchemaFile, SpecRegistry};
use msgbridge_wire::Value;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Run the inspect command; `input` of `-` reads standard input
pub fn run(type_name: &str, input: &Path, files: &[PathBuf], config: &GeneratorConfig) -> Result<()> {
    let schemas = files
        .iter()
        .map(|path| SchemaFile::load(path).with_context(|| format!("Failed to load {path:?}")))
        .collect::<Result<Vec<_>>>()?;
    let registry = SpecRegistry::try_build(&schemas, &config.header_package)
        .context("Failed to resolve schema files")?;

    let data = read_input(input)?;
    let json = decode_to_json(&registry, type_name, &data)?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

/// Decode `data` as one `type_name` message and render it as JSON
pub fn decode_to_json(
    registry: &SpecRegistry,
    type_name: &str,
    data: &[u8],
) -> Result<serde_json::Value> {
    let spec = registry
        .find_message(type_name)
        .with_context(|| format!("Unknown message type {type_name}"))?;

    let message = DynamicCodec::new(registry)
        .from_bytes(spec, data)
        .with_context(|| format!("Failed to decode {} byte(s) as {type_name}", data.len()))?;

    Ok(serde_json::to_value(Value::Message(message))?)
}

fn read_input(input: &Path) -> Result<Vec<u8>> {
    if input == Path::new("-") {
        let mut data = Vec::new();
        std::io::stdin()
            .read_to_end(&mut data)
            .context("Failed to read standard input")?;
        return Ok(data);
    }
    std::fs::read(input).with_context(|| format!("Failed to read {input:?}"))
}
