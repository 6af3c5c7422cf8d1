//! Schema-driven codec over dynamic [`Value`]s
//!
//! Walks a [`MessageSpec`] at runtime instead of through generated code, so
//! a payload can be decoded knowing only its schema documents. Produces the
//! same bytes as the generated `encode`/`decode` for the same schema.

use crate::error::{GenError, GenResult};
use crate::registry::SpecRegistry;
use crate::schema::MessageSpec;
use crate::types::{PrimitiveKind, TypeDescriptor};
use msgbridge_wire::{
    Duration, FromValue, Header, MessageValue, Time, ValueError, WireReader, WireString,
    WireWriter, Value,
};

/// Encoder/decoder for any message in a registry
pub struct DynamicCodec<'a> {
    registry: &'a SpecRegistry,
}

impl<'a> DynamicCodec<'a> {
    pub fn new(registry: &'a SpecRegistry) -> Self {
        Self { registry }
    }

    /// Encode `value` as a `spec` message
    ///
    /// Fields missing from `value` are encoded as their defaults; fields the
    /// spec does not declare are ignored.
    pub fn encode(&self, spec: &MessageSpec, value: &MessageValue, w: &mut WireWriter) -> GenResult<()> {
        for field in &spec.fields {
            match value.get(&field.name) {
                Some(v) => self.encode_value(&field.ty, v, w)?,
                None => {
                    let default = self.default_value(&field.ty)?;
                    self.encode_value(&field.ty, &default, w)?;
                }
            }
        }
        Ok(())
    }

    /// Encode `value` into a fresh buffer
    pub fn to_bytes(&self, spec: &MessageSpec, value: &MessageValue) -> GenResult<Vec<u8>> {
        let mut w = WireWriter::new();
        self.encode(spec, value, &mut w)?;
        Ok(w.into_bytes())
    }

    /// Decode one `spec` message at the reader's cursor
    pub fn decode(&self, spec: &MessageSpec, r: &mut WireReader<'_>) -> GenResult<MessageValue> {
        let mut msg = MessageValue::new(spec.full_name.clone());
        for field in &spec.fields {
            let value = self.decode_value(&field.ty, r)?;
            msg.fields.push((field.name.clone(), value));
        }
        Ok(msg)
    }

    /// Decode a message that must span all of `data`
    pub fn from_bytes(&self, spec: &MessageSpec, data: &[u8]) -> GenResult<MessageValue> {
        let mut r = WireReader::new(data);
        let msg = self.decode(spec, &mut r)?;
        r.finish()?;
        Ok(msg)
    }

    /// Zero value of a field kind
    pub fn default_value(&self, ty: &TypeDescriptor) -> GenResult<Value> {
        Ok(match ty {
            TypeDescriptor::Primitive(kind) if kind.is_float() => Value::Float(0.0),
            TypeDescriptor::Primitive(kind) if kind.is_signed() => Value::Int(0),
            TypeDescriptor::Primitive(_) => Value::UInt(0),
            TypeDescriptor::Bool => Value::Bool(false),
            TypeDescriptor::String => Value::String(WireString::new()),
            TypeDescriptor::Time => Value::Time(Time::new(0, 0)),
            TypeDescriptor::Duration => Value::Duration(Duration::new(0, 0)),
            TypeDescriptor::Header => Value::Header(Header::default()),
            TypeDescriptor::Array { .. } => Value::Array(Vec::new()),
            TypeDescriptor::Registered { package, name } => {
                let spec = self.registry.resolve(package, name)?;
                Value::Message(self.default_message(spec)?)
            }
        })
    }

    /// A message value with every field at its default
    pub fn default_message(&self, spec: &MessageSpec) -> GenResult<MessageValue> {
        let mut msg = MessageValue::new(spec.full_name.clone());
        for field in &spec.fields {
            msg.fields.push((field.name.clone(), self.default_value(&field.ty)?));
        }
        Ok(msg)
    }

    /// Validation predicate of a field kind
    pub fn check(&self, ty: &TypeDescriptor, value: &Value) -> GenResult<()> {
        match (ty, value) {
            (TypeDescriptor::Primitive(kind), v) => {
                check_primitive(*kind, v)?;
            }
            (TypeDescriptor::Array { element, .. }, Value::Array(items)) => {
                for item in items {
                    self.check(element, item)?;
                }
            }
            (TypeDescriptor::Registered { package, name }, Value::Message(msg)) => {
                let spec = self.registry.resolve(package, name)?;
                if msg.type_name != spec.full_name {
                    return Err(ValueError::MessageMismatch {
                        expected: spec.full_name.clone(),
                        found: msg.type_name.clone(),
                    }
                    .into());
                }
                for (field_name, field_value) in &msg.fields {
                    let field = spec.field(field_name).ok_or_else(|| {
                        GenError::invalid_schema(&spec.full_name, format!("unknown field {field_name}"))
                    })?;
                    self.check(&field.ty, field_value)?;
                }
            }
            (TypeDescriptor::Bool, Value::Bool(_))
            | (TypeDescriptor::String, Value::String(_))
            | (TypeDescriptor::Time, Value::Time(_))
            | (TypeDescriptor::Duration, Value::Duration(_))
            | (TypeDescriptor::Header, Value::Header(_)) => {}
            (ty, v) => {
                return Err(ValueError::TypeMismatch {
                    expected: kind_name(ty),
                    found: v.kind_name(),
                }
                .into());
            }
        }
        Ok(())
    }

    fn encode_value(&self, ty: &TypeDescriptor, value: &Value, w: &mut WireWriter) -> GenResult<()> {
        match ty {
            TypeDescriptor::Primitive(kind) => encode_primitive(*kind, value, w)?,
            TypeDescriptor::Bool => w.write_bool(bool::from_value(value.clone())?),
            TypeDescriptor::String => match value {
                Value::String(s) => w.write_string(s)?,
                other => return Err(mismatch("string", other)),
            },
            TypeDescriptor::Time => {
                let t = Time::from_value(value.clone())?;
                w.write_u32(t.secs);
                w.write_u32(t.nsecs);
            }
            TypeDescriptor::Duration => {
                let d = Duration::from_value(value.clone())?;
                w.write_u32(d.secs);
                w.write_u32(d.nsecs);
            }
            TypeDescriptor::Header => match value {
                Value::Header(h) => h.encode(w)?,
                other => return Err(mismatch("header", other)),
            },
            TypeDescriptor::Array { element, .. } => match value {
                Value::Array(items) => {
                    w.write_len(items.len())?;
                    for item in items {
                        self.encode_value(element, item, w)?;
                    }
                }
                other => return Err(mismatch("array", other)),
            },
            TypeDescriptor::Registered { package, name } => {
                let spec = self.registry.resolve(package, name)?;
                match value {
                    Value::Message(msg) if msg.type_name == spec.full_name => {
                        self.encode(spec, msg, w)?;
                    }
                    Value::Message(msg) => {
                        return Err(ValueError::MessageMismatch {
                            expected: spec.full_name.clone(),
                            found: msg.type_name.clone(),
                        }
                        .into());
                    }
                    other => return Err(mismatch("message", other)),
                }
            }
        }
        Ok(())
    }

    fn decode_value(&self, ty: &TypeDescriptor, r: &mut WireReader<'_>) -> GenResult<Value> {
        Ok(match ty {
            TypeDescriptor::Primitive(kind) => decode_primitive(*kind, r)?,
            TypeDescriptor::Bool => Value::Bool(r.read_bool()?),
            TypeDescriptor::String => Value::String(r.read_string()?),
            TypeDescriptor::Time => Value::Time(Time::new(r.read_u32()?, r.read_u32()?)),
            TypeDescriptor::Duration => Value::Duration(Duration::new(r.read_u32()?, r.read_u32()?)),
            TypeDescriptor::Header => Value::Header(Header::decode(r)?),
            TypeDescriptor::Array { element, .. } => {
                let n = r.read_len()?;
                let mut items = Vec::with_capacity(r.capacity_hint(n));
                for _ in 0..n {
                    items.push(self.decode_value(element, r)?);
                }
                Value::Array(items)
            }
            TypeDescriptor::Registered { package, name } => {
                let spec = self.registry.resolve(package, name)?;
                Value::Message(self.decode(spec, r)?)
            }
        })
    }
}

fn kind_name(ty: &TypeDescriptor) -> &'static str {
    match ty {
        TypeDescriptor::Primitive(kind) => kind.name(),
        TypeDescriptor::Bool => "bool",
        TypeDescriptor::String => "string",
        TypeDescriptor::Time => "time",
        TypeDescriptor::Duration => "duration",
        TypeDescriptor::Header => "header",
        TypeDescriptor::Array { .. } => "array",
        TypeDescriptor::Registered { .. } => "message",
    }
}

fn mismatch(expected: &'static str, found: &Value) -> GenError {
    ValueError::TypeMismatch {
        expected,
        found: found.kind_name(),
    }
    .into()
}

fn check_primitive(kind: PrimitiveKind, value: &Value) -> Result<(), ValueError> {
    // Encoding into a scratch buffer runs the same range checks
    encode_primitive(kind, value, &mut WireWriter::new())
}

fn encode_primitive(kind: PrimitiveKind, value: &Value, w: &mut WireWriter) -> Result<(), ValueError> {
    let v = value.clone();
    match kind {
        PrimitiveKind::Int8 => w.write_i8(i8::from_value(v)?),
        PrimitiveKind::UInt8 => w.write_u8(u8::from_value(v)?),
        PrimitiveKind::Int16 => w.write_i16(i16::from_value(v)?),
        PrimitiveKind::UInt16 => w.write_u16(u16::from_value(v)?),
        PrimitiveKind::Int32 => w.write_i32(i32::from_value(v)?),
        PrimitiveKind::UInt32 => w.write_u32(u32::from_value(v)?),
        PrimitiveKind::Int64 => w.write_i64(i64::from_value(v)?),
        PrimitiveKind::UInt64 => w.write_u64(u64::from_value(v)?),
        PrimitiveKind::Float32 => w.write_f32(f32::from_value(v)?),
        PrimitiveKind::Float64 => w.write_f64(f64::from_value(v)?),
    }
    Ok(())
}

fn decode_primitive(kind: PrimitiveKind, r: &mut WireReader<'_>) -> GenResult<Value> {
    Ok(match kind {
        PrimitiveKind::Int8 => Value::Int(r.read_i8()?.into()),
        PrimitiveKind::UInt8 => Value::UInt(r.read_u8()?.into()),
        PrimitiveKind::Int16 => Value::Int(r.read_i16()?.into()),
        PrimitiveKind::UInt16 => Value::UInt(r.read_u16()?.into()),
        PrimitiveKind::Int32 => Value::Int(r.read_i32()?.into()),
        PrimitiveKind::UInt32 => Value::UInt(r.read_u32()?.into()),
        PrimitiveKind::Int64 => Value::Int(r.read_i64()?),
        PrimitiveKind::UInt64 => Value::UInt(r.read_u64()?),
        PrimitiveKind::Float32 => Value::Float(r.read_f32()?.into()),
        PrimitiveKind::Float64 => Value::Float(r.read_f64()?),
    })
}
