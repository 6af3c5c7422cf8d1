// Generated by msgbridge from geometry_msgs/Point. Do not edit.

use msgbridge_wire::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for Point {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }
}

impl Message for Point {
    const TYPE: &'static str = "geometry_msgs/Point";
    const MD5SUM: &'static str = "4a842b65f413084dc2b10fb484ea7f17";
    const HAS_HEADER: bool = false;
    const FULL_TEXT: &'static str = r#"float64 x
float64 y
float64 z
"#;
    const FIELDS: &'static [&'static str] = &["x", "y", "z"];
    const FIELD_TYPES: &'static [&'static str] = &["float64", "float64", "float64"];
    const ACCESSORS: &'static [FieldAccessor<Self>] = &[
        FieldAccessor {
            name: "x",
            get: |m| m.x.to_value(),
            set: |m, v| {
                m.x = FromValue::from_value(v)?;
                Ok(())
            },
        },
        FieldAccessor {
            name: "y",
            get: |m| m.y.to_value(),
            set: |m, v| {
                m.y = FromValue::from_value(v)?;
                Ok(())
            },
        },
        FieldAccessor {
            name: "z",
            get: |m| m.z.to_value(),
            set: |m, v| {
                m.z = FromValue::from_value(v)?;
                Ok(())
            },
        },
    ];

    fn construct(args: Args, mode: ConstructMode) -> Result<Self, ConstructError> {
        let mut slots = args.bind(Self::FIELDS, mode)?.into_iter();
        let mut msg = Self::default();
        if let Some(value) = slots.next().flatten() {
            msg.x = mode.accept("x", FromValue::from_value(value), || 0.0)?;
        }
        if let Some(value) = slots.next().flatten() {
            msg.y = mode.accept("y", FromValue::from_value(value), || 0.0)?;
        }
        if let Some(value) = slots.next().flatten() {
            msg.z = mode.accept("z", FromValue::from_value(value), || 0.0)?;
        }
        Ok(msg)
    }

    fn encode(&self, w: &mut WireWriter) -> Result<(), WireError> {
        w.write_f64(self.x);
        w.write_f64(self.y);
        w.write_f64(self.z);
        Ok(())
    }

    fn decode(r: &mut WireReader<'_>) -> Result<Self, WireError> {
        let mut msg = Self::default();
        msg.x = r.read_f64()?;
        msg.y = r.read_f64()?;
        msg.z = r.read_f64()?;
        Ok(msg)
    }
}

impl ToValue for Point {
    fn to_value(&self) -> Value {
        Value::Message(self.to_message_value())
    }
}

impl FromValue for Point {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        message_from_value(value)
    }
}
