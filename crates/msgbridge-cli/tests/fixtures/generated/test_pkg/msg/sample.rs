// Generated by msgbridge from test_pkg/Sample. Do not edit.

use msgbridge_wire::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub value: u32,
    pub label: WireString,
}

impl Sample {
    pub const LIMIT: u32 = 305419896;
    pub const NAME: &'static str = "sample";
}

impl Default for Sample {
    fn default() -> Self {
        Self {
            value: 0,
            label: WireString::new(),
        }
    }
}

impl Message for Sample {
    const TYPE: &'static str = "test_pkg/Sample";
    const MD5SUM: &'static str = "0b5ee1bdbd1ea4ac0db4c2d8a6d0ce53";
    const HAS_HEADER: bool = false;
    const FULL_TEXT: &'static str = r#"uint32 LIMIT=305419896
string NAME=sample
uint32 value
string label
"#;
    const FIELDS: &'static [&'static str] = &["value", "label"];
    const FIELD_TYPES: &'static [&'static str] = &["uint32", "string"];
    const ACCESSORS: &'static [FieldAccessor<Self>] = &[
        FieldAccessor {
            name: "value",
            get: |m| m.value.to_value(),
            set: |m, v| {
                m.value = FromValue::from_value(v)?;
                Ok(())
            },
        },
        FieldAccessor {
            name: "label",
            get: |m| m.label.to_value(),
            set: |m, v| {
                m.label = FromValue::from_value(v)?;
                Ok(())
            },
        },
    ];

    fn construct(args: Args, mode: ConstructMode) -> Result<Self, ConstructError> {
        let mut slots = args.bind(Self::FIELDS, mode)?.into_iter();
        let mut msg = Self::default();
        if let Some(value) = slots.next().flatten() {
            msg.value = mode.accept("value", FromValue::from_value(value), || 0)?;
        }
        if let Some(value) = slots.next().flatten() {
            msg.label = mode.accept("label", FromValue::from_value(value), || WireString::new())?;
        }
        Ok(msg)
    }

    fn encode(&self, w: &mut WireWriter) -> Result<(), WireError> {
        w.write_u32(self.value);
        w.write_string(&self.label)?;
        Ok(())
    }

    fn decode(r: &mut WireReader<'_>) -> Result<Self, WireError> {
        let mut msg = Self::default();
        msg.value = r.read_u32()?;
        msg.label = r.read_string()?;
        Ok(msg)
    }
}

impl ToValue for Sample {
    fn to_value(&self) -> Value {
        Value::Message(self.to_message_value())
    }
}

impl FromValue for Sample {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        message_from_value(value)
    }
}
