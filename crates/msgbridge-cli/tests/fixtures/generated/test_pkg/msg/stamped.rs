// Generated by msgbridge from test_pkg/Stamped. Do not edit.

use msgbridge_wire::prelude::*;
use crate::std_msgs::msg as StdMsgs;
use crate::geometry_msgs::msg as GeometryMsgs;

#[derive(Debug, Clone, PartialEq)]
pub struct Stamped {
    pub header: StdMsgs::Header,
    pub values: Vec<i16>,
    pub grid: Vec<Vec<i16>>,
    pub points: Vec<GeometryMsgs::Point>,
    pub origin: GeometryMsgs::Point,
    pub stamps: Vec<Time>,
    pub r#type: WireString,
    pub flag: bool,
}

impl Default for Stamped {
    fn default() -> Self {
        Self {
            header: StdMsgs::Header { seq: 0, stamp: Time::new(0, 0), frame_id: WireString::new() },
            values: Vec::new(),
            grid: Vec::new(),
            points: Vec::new(),
            origin: GeometryMsgs::Point::default(),
            stamps: Vec::new(),
            r#type: WireString::new(),
            flag: false,
        }
    }
}

impl Message for Stamped {
    const TYPE: &'static str = "test_pkg/Stamped";
    const MD5SUM: &'static str = "9c0e3f8a7b1d2e4f5a6b7c8d9e0f1a2b";
    const HAS_HEADER: bool = true;
    const FULL_TEXT: &'static str = r#"Header header
int16[] values
int16[3][] grid
geometry_msgs/Point[] points
geometry_msgs/Point origin
time[] stamps
string type
bool flag
"#;
    const FIELDS: &'static [&'static str] = &["header", "values", "grid", "points", "origin", "stamps", "type", "flag"];
    const FIELD_TYPES: &'static [&'static str] = &["Header", "int16[]", "int16[3][]", "geometry_msgs/Point[]", "geometry_msgs/Point", "time[]", "string", "bool"];
    const ACCESSORS: &'static [FieldAccessor<Self>] = &[
        FieldAccessor {
            name: "header",
            get: |m| m.header.to_value(),
            set: |m, v| {
                m.header = FromValue::from_value(v)?;
                Ok(())
            },
        },
        FieldAccessor {
            name: "values",
            get: |m| m.values.to_value(),
            set: |m, v| {
                m.values = FromValue::from_value(v)?;
                Ok(())
            },
        },
        FieldAccessor {
            name: "grid",
            get: |m| m.grid.to_value(),
            set: |m, v| {
                m.grid = FromValue::from_value(v)?;
                Ok(())
            },
        },
        FieldAccessor {
            name: "points",
            get: |m| m.points.to_value(),
            set: |m, v| {
                m.points = FromValue::from_value(v)?;
                Ok(())
            },
        },
        FieldAccessor {
            name: "origin",
            get: |m| m.origin.to_value(),
            set: |m, v| {
                m.origin = FromValue::from_value(v)?;
                Ok(())
            },
        },
        FieldAccessor {
            name: "stamps",
            get: |m| m.stamps.to_value(),
            set: |m, v| {
                m.stamps = FromValue::from_value(v)?;
                Ok(())
            },
        },
        FieldAccessor {
            name: "type",
            get: |m| m.r#type.to_value(),
            set: |m, v| {
                m.r#type = FromValue::from_value(v)?;
                Ok(())
            },
        },
        FieldAccessor {
            name: "flag",
            get: |m| m.flag.to_value(),
            set: |m, v| {
                m.flag = FromValue::from_value(v)?;
                Ok(())
            },
        },
    ];

    fn construct(args: Args, mode: ConstructMode) -> Result<Self, ConstructError> {
        let mut slots = args.bind(Self::FIELDS, mode)?.into_iter();
        let mut msg = Self::default();
        if let Some(value) = slots.next().flatten() {
            msg.header = mode.accept("header", FromValue::from_value(value), || StdMsgs::Header { seq: 0, stamp: Time::new(0, 0), frame_id: WireString::new() })?;
        }
        if let Some(value) = slots.next().flatten() {
            msg.values = mode.accept("values", FromValue::from_value(value), || Vec::new())?;
        }
        if let Some(value) = slots.next().flatten() {
            msg.grid = mode.accept("grid", FromValue::from_value(value), || Vec::new())?;
        }
        if let Some(value) = slots.next().flatten() {
            msg.points = mode.accept("points", FromValue::from_value(value), || Vec::new())?;
        }
        if let Some(value) = slots.next().flatten() {
            msg.origin = mode.accept("origin", FromValue::from_value(value), || GeometryMsgs::Point::default())?;
        }
        if let Some(value) = slots.next().flatten() {
            msg.stamps = mode.accept("stamps", FromValue::from_value(value), || Vec::new())?;
        }
        if let Some(value) = slots.next().flatten() {
            msg.r#type = mode.accept("type", FromValue::from_value(value), || WireString::new())?;
        }
        if let Some(value) = slots.next().flatten() {
            msg.flag = mode.accept("flag", FromValue::from_value(value), || false)?;
        }
        Ok(msg)
    }

    fn encode(&self, w: &mut WireWriter) -> Result<(), WireError> {
        w.write_u32(self.header.seq);
        w.write_u32(self.header.stamp.secs);
        w.write_u32(self.header.stamp.nsecs);
        w.write_string(&self.header.frame_id)?;
        w.write_len(self.values.len())?;
        for e0 in self.values.iter() {
            w.write_i16(*e0);
        }
        w.write_len(self.grid.len())?;
        for e0 in self.grid.iter() {
            w.write_len(e0.len())?;
            for e1 in e0.iter() {
                w.write_i16(*e1);
            }
        }
        w.write_len(self.points.len())?;
        for e0 in self.points.iter() {
            w.write_f64(e0.x);
            w.write_f64(e0.y);
            w.write_f64(e0.z);
        }
        w.write_f64(self.origin.x);
        w.write_f64(self.origin.y);
        w.write_f64(self.origin.z);
        w.write_len(self.stamps.len())?;
        for e0 in self.stamps.iter() {
            w.write_u32(e0.secs);
            w.write_u32(e0.nsecs);
        }
        w.write_string(&self.r#type)?;
        w.write_bool(self.flag);
        Ok(())
    }

    fn decode(r: &mut WireReader<'_>) -> Result<Self, WireError> {
        let mut msg = Self::default();
        msg.header.seq = r.read_u32()?;
        msg.header.stamp.secs = r.read_u32()?;
        msg.header.stamp.nsecs = r.read_u32()?;
        msg.header.frame_id = r.read_string()?;
        let n0 = r.read_len()?;
        msg.values.reserve(r.capacity_hint(n0));
        for _ in 0..n0 {
            msg.values.push(r.read_i16()?);
        }
        let n0 = r.read_len()?;
        msg.grid.reserve(r.capacity_hint(n0));
        for _ in 0..n0 {
            let mut e0 = Vec::new();
            let n1 = r.read_len()?;
            e0.reserve(r.capacity_hint(n1));
            for _ in 0..n1 {
                e0.push(r.read_i16()?);
            }
            msg.grid.push(e0);
        }
        let n0 = r.read_len()?;
        msg.points.reserve(r.capacity_hint(n0));
        for _ in 0..n0 {
            let mut e0 = GeometryMsgs::Point::default();
            e0.x = r.read_f64()?;
            e0.y = r.read_f64()?;
            e0.z = r.read_f64()?;
            msg.points.push(e0);
        }
        msg.origin.x = r.read_f64()?;
        msg.origin.y = r.read_f64()?;
        msg.origin.z = r.read_f64()?;
        let n0 = r.read_len()?;
        msg.stamps.reserve(r.capacity_hint(n0));
        for _ in 0..n0 {
            let mut e0 = Time::new(0, 0);
            e0.secs = r.read_u32()?;
            e0.nsecs = r.read_u32()?;
            msg.stamps.push(e0);
        }
        msg.r#type = r.read_string()?;
        msg.flag = r.read_bool()?;
        Ok(msg)
    }
}

impl ToValue for Stamped {
    fn to_value(&self) -> Value {
        Value::Message(self.to_message_value())
    }
}

impl FromValue for Stamped {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        message_from_value(value)
    }
}
