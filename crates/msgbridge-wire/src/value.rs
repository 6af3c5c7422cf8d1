//! Dynamic field values and their validation predicates
//!
//! [`Value`] is the loosely typed form of a field used by validated
//! construction, ordinal get/set and the schema-driven dynamic codec.
//! [`FromValue`] is the per-kind predicate deciding whether a value fits a
//! field: integer-like values are range checked against the field width,
//! floats, booleans, strings, times, durations and headers must match exactly,
//! sequences are checked element-wise, and messages must carry the exact
//! registered type name.

use crate::error::ValueError;
use crate::header::Header;
use crate::time::{Duration, Time};
use crate::wire_string::WireString;
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// A dynamically typed field value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(WireString),
    Time(Time),
    Duration(Duration),
    Header(Header),
    Array(Vec<Value>),
    Message(MessageValue),
}

impl Value {
    /// Short name of the value's kind, used in error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "integer",
            Value::UInt(_) => "unsigned integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Time(_) => "time",
            Value::Duration(_) => "duration",
            Value::Header(_) => "header",
            Value::Array(_) => "array",
            Value::Message(_) => "message",
        }
    }
}

/// A message as an ordered list of named field values
#[derive(Debug, Clone, PartialEq)]
pub struct MessageValue {
    /// Fully-qualified type name, e.g. `geometry_msgs/Point`
    pub type_name: String,
    pub fields: Vec<(String, Value)>,
}

impl MessageValue {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field value
    pub fn with(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.push((name.into(), value));
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }
}

impl Serialize for MessageValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Conversion of a field into its dynamic form
pub trait ToValue {
    fn to_value(&self) -> Value;
}

/// Validated conversion of a dynamic value into a field
pub trait FromValue: Sized {
    fn from_value(value: Value) -> Result<Self, ValueError>;
}

fn mismatch(expected: &'static str, found: &Value) -> ValueError {
    ValueError::TypeMismatch {
        expected,
        found: found.kind_name(),
    }
}

macro_rules! integer_value {
    ($ty:ty, $name:literal, $variant:ident, $wide:ty) => {
        impl ToValue for $ty {
            fn to_value(&self) -> Value {
                Value::$variant(<$wide>::from(*self))
            }
        }

        impl FromValue for $ty {
            fn from_value(value: Value) -> Result<Self, ValueError> {
                let out_of_range = |value: String| ValueError::OutOfRange {
                    expected: $name,
                    value,
                };
                match value {
                    Value::Int(v) => <$ty>::try_from(v).map_err(|_| out_of_range(v.to_string())),
                    Value::UInt(v) => <$ty>::try_from(v).map_err(|_| out_of_range(v.to_string())),
                    other => Err(mismatch($name, &other)),
                }
            }
        }
    };
}

integer_value!(i8, "int8", Int, i64);
integer_value!(i16, "int16", Int, i64);
integer_value!(i32, "int32", Int, i64);
integer_value!(i64, "int64", Int, i64);
integer_value!(u8, "uint8", UInt, u64);
integer_value!(u16, "uint16", UInt, u64);
integer_value!(u32, "uint32", UInt, u64);
integer_value!(u64, "uint64", UInt, u64);

impl ToValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl FromValue for f32 {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Float(v) if v.is_finite() && v.abs() > f64::from(f32::MAX) => {
                Err(ValueError::OutOfRange {
                    expected: "float32",
                    value: v.to_string(),
                })
            }
            Value::Float(v) => Ok(v as f32),
            other => Err(mismatch("float32", &other)),
        }
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl FromValue for f64 {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Float(v) => Ok(v),
            other => Err(mismatch("float64", &other)),
        }
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Bool(v) => Ok(v),
            other => Err(mismatch("bool", &other)),
        }
    }
}

impl ToValue for WireString {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl FromValue for WireString {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::String(v) => Ok(v),
            other => Err(mismatch("string", &other)),
        }
    }
}

impl ToValue for Time {
    fn to_value(&self) -> Value {
        Value::Time(*self)
    }
}

impl FromValue for Time {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Time(v) => Ok(v),
            other => Err(mismatch("time", &other)),
        }
    }
}

impl ToValue for Duration {
    fn to_value(&self) -> Value {
        Value::Duration(*self)
    }
}

impl FromValue for Duration {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Duration(v) => Ok(v),
            other => Err(mismatch("duration", &other)),
        }
    }
}

impl ToValue for Header {
    fn to_value(&self) -> Value {
        Value::Header(self.clone())
    }
}

impl FromValue for Header {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Header(v) => Ok(v),
            other => Err(mismatch("header", &other)),
        }
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::Array(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Array(items) => items.into_iter().map(T::from_value).collect(),
            other => Err(mismatch("array", &other)),
        }
    }
}
