// Generated by msgbridge from test_pkg/AddTwoInts. Do not edit.

use msgbridge_wire::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct AddTwoIntsRequest {
    pub a: i64,
    pub b: i64,
}

impl Default for AddTwoIntsRequest {
    fn default() -> Self {
        Self {
            a: 0,
            b: 0,
        }
    }
}

impl Message for AddTwoIntsRequest {
    const TYPE: &'static str = "test_pkg/AddTwoIntsRequest";
    const MD5SUM: &'static str = "36d09b846be0b371c5f190354dd3153e";
    const HAS_HEADER: bool = false;
    const FULL_TEXT: &'static str = r#"int64 a
int64 b
"#;
    const FIELDS: &'static [&'static str] = &["a", "b"];
    const FIELD_TYPES: &'static [&'static str] = &["int64", "int64"];
    const ACCESSORS: &'static [FieldAccessor<Self>] = &[
        FieldAccessor {
            name: "a",
            get: |m| m.a.to_value(),
            set: |m, v| {
                m.a = FromValue::from_value(v)?;
                Ok(())
            },
        },
        FieldAccessor {
            name: "b",
            get: |m| m.b.to_value(),
            set: |m, v| {
                m.b = FromValue::from_value(v)?;
                Ok(())
            },
        },
    ];

    fn construct(args: Args, mode: ConstructMode) -> Result<Self, ConstructError> {
        let mut slots = args.bind(Self::FIELDS, mode)?.into_iter();
        let mut msg = Self::default();
        if let Some(value) = slots.next().flatten() {
            msg.a = mode.accept("a", FromValue::from_value(value), || 0)?;
        }
        if let Some(value) = slots.next().flatten() {
            msg.b = mode.accept("b", FromValue::from_value(value), || 0)?;
        }
        Ok(msg)
    }

    fn encode(&self, w: &mut WireWriter) -> Result<(), WireError> {
        w.write_i64(self.a);
        w.write_i64(self.b);
        Ok(())
    }

    fn decode(r: &mut WireReader<'_>) -> Result<Self, WireError> {
        let mut msg = Self::default();
        msg.a = r.read_i64()?;
        msg.b = r.read_i64()?;
        Ok(msg)
    }
}

impl ToValue for AddTwoIntsRequest {
    fn to_value(&self) -> Value {
        Value::Message(self.to_message_value())
    }
}

impl FromValue for AddTwoIntsRequest {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        message_from_value(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddTwoIntsResponse {
    pub sum: i64,
    pub elapsed: Duration,
}

impl Default for AddTwoIntsResponse {
    fn default() -> Self {
        Self {
            sum: 0,
            elapsed: Duration::new(0, 0),
        }
    }
}

impl Message for AddTwoIntsResponse {
    const TYPE: &'static str = "test_pkg/AddTwoIntsResponse";
    const MD5SUM: &'static str = "b88405221c77b1878a3cbbfff53428d7";
    const HAS_HEADER: bool = false;
    const FULL_TEXT: &'static str = r#"int64 sum
duration elapsed
"#;
    const FIELDS: &'static [&'static str] = &["sum", "elapsed"];
    const FIELD_TYPES: &'static [&'static str] = &["int64", "duration"];
    const ACCESSORS: &'static [FieldAccessor<Self>] = &[
        FieldAccessor {
            name: "sum",
            get: |m| m.sum.to_value(),
            set: |m, v| {
                m.sum = FromValue::from_value(v)?;
                Ok(())
            },
        },
        FieldAccessor {
            name: "elapsed",
            get: |m| m.elapsed.to_value(),
            set: |m, v| {
                m.elapsed = FromValue::from_value(v)?;
                Ok(())
            },
        },
    ];

    fn construct(args: Args, mode: ConstructMode) -> Result<Self, ConstructError> {
        let mut slots = args.bind(Self::FIELDS, mode)?.into_iter();
        let mut msg = Self::default();
        if let Some(value) = slots.next().flatten() {
            msg.sum = mode.accept("sum", FromValue::from_value(value), || 0)?;
        }
        if let Some(value) = slots.next().flatten() {
            msg.elapsed = mode.accept("elapsed", FromValue::from_value(value), || Duration::new(0, 0))?;
        }
        Ok(msg)
    }

    fn encode(&self, w: &mut WireWriter) -> Result<(), WireError> {
        w.write_i64(self.sum);
        w.write_u32(self.elapsed.secs);
        w.write_u32(self.elapsed.nsecs);
        Ok(())
    }

    fn decode(r: &mut WireReader<'_>) -> Result<Self, WireError> {
        let mut msg = Self::default();
        msg.sum = r.read_i64()?;
        msg.elapsed.secs = r.read_u32()?;
        msg.elapsed.nsecs = r.read_u32()?;
        Ok(msg)
    }
}

impl ToValue for AddTwoIntsResponse {
    fn to_value(&self) -> Value {
        Value::Message(self.to_message_value())
    }
}

impl FromValue for AddTwoIntsResponse {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        message_from_value(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddTwoInts;

impl ServiceDefinition for AddTwoInts {
    const TYPE: &'static str = "test_pkg/AddTwoInts";
    const MD5SUM: &'static str = "6a2e34150c00229791cc89ff309fff21";
    type Request = AddTwoIntsRequest;
    type Response = AddTwoIntsResponse;
}
