//! Traits implemented by generated message and service types

use crate::construct::{Args, ConstructMode};
use crate::error::{ConstructError, ValueError, WireResult};
use crate::reader::WireReader;
use crate::value::{FromValue, MessageValue, ToValue, Value};
use crate::writer::WireWriter;

/// Accessor pair for one field, stored in a static table indexed by ordinal
pub struct FieldAccessor<M> {
    pub name: &'static str,
    pub get: fn(&M) -> Value,
    pub set: fn(&mut M, Value) -> Result<(), ValueError>,
}

impl<M> std::fmt::Debug for FieldAccessor<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldAccessor")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A generated message type with a fixed schema
///
/// Encoding writes every field in declaration order with no framing, so the
/// decoder must use the same schema as the encoder. `MD5SUM` is the checksum
/// peers compare to agree on that schema.
pub trait Message: Default + Clone + ToValue + FromValue + 'static {
    /// Fully-qualified type name, e.g. `geometry_msgs/Point`
    const TYPE: &'static str;

    /// Schema checksum computed by the schema service
    const MD5SUM: &'static str;

    /// Whether the first field is a `header` of the standard header type
    const HAS_HEADER: bool;

    /// Flattened definition text of the type and its dependencies
    const FULL_TEXT: &'static str;

    /// Field names in declaration order
    const FIELDS: &'static [&'static str];

    /// Field type tokens in declaration order
    const FIELD_TYPES: &'static [&'static str];

    /// Accessors in declaration order
    const ACCESSORS: &'static [FieldAccessor<Self>];

    /// Build a message from positional and named values
    ///
    /// Positional values bind to fields in declaration order. Unset fields
    /// keep their defaults. In [`ConstructMode::Strict`] a value failing its
    /// field's type predicate is an error; in [`ConstructMode::Lenient`] the
    /// field falls back to its default instead.
    fn construct(args: Args, mode: ConstructMode) -> Result<Self, ConstructError>;

    /// Append the encoded message to `w`
    fn encode(&self, w: &mut WireWriter) -> WireResult<()>;

    /// Decode one message starting at the reader's cursor
    fn decode(r: &mut WireReader<'_>) -> WireResult<Self>;

    fn to_bytes(&self) -> WireResult<Vec<u8>> {
        let mut w = WireWriter::new();
        self.encode(&mut w)?;
        Ok(w.into_bytes())
    }

    /// Decode a message that must span all of `data`
    fn from_bytes(data: &[u8]) -> WireResult<Self> {
        let mut r = WireReader::new(data);
        let msg = Self::decode(&mut r)?;
        r.finish()?;
        Ok(msg)
    }

    fn ordinal_of(name: &str) -> Option<usize> {
        Self::FIELDS.iter().position(|field| *field == name)
    }

    /// Read the field at `ordinal`
    fn get(&self, ordinal: usize) -> Option<Value> {
        Self::ACCESSORS
            .get(ordinal)
            .map(|accessor| (accessor.get)(self))
    }

    /// Validate `value` and store it in the field at `ordinal`
    fn set(&mut self, ordinal: usize, value: Value) -> Result<(), ConstructError> {
        let accessor = Self::ACCESSORS
            .get(ordinal)
            .ok_or(ConstructError::UnknownOrdinal(ordinal))?;
        (accessor.set)(self, value).map_err(|source| ConstructError::InvalidField {
            field: accessor.name.to_string(),
            source,
        })
    }

    fn to_message_value(&self) -> MessageValue {
        MessageValue {
            type_name: Self::TYPE.to_string(),
            fields: Self::ACCESSORS
                .iter()
                .map(|accessor| (accessor.name.to_string(), (accessor.get)(self)))
                .collect(),
        }
    }
}

/// Strict conversion of a [`Value::Message`] into a generated type
///
/// The value must name exactly `M::TYPE`; its fields are bound by name.
pub fn message_from_value<M: Message>(value: Value) -> Result<M, ValueError> {
    let msg = match value {
        Value::Message(msg) => msg,
        other => {
            return Err(ValueError::TypeMismatch {
                expected: "message",
                found: other.kind_name(),
            });
        }
    };
    if msg.type_name != M::TYPE {
        return Err(ValueError::MessageMismatch {
            expected: M::TYPE.to_string(),
            found: msg.type_name,
        });
    }
    M::construct(Args::from_named(msg.fields), ConstructMode::Strict).map_err(|source| {
        ValueError::Nested {
            type_name: M::TYPE.to_string(),
            source: Box::new(source),
        }
    })
}

/// A generated service: a request/response message pair
pub trait ServiceDefinition {
    const TYPE: &'static str;
    const MD5SUM: &'static str;

    type Request: Message;
    type Response: Message;
}
