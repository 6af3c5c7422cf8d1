//! The standard message header

use crate::error::WireResult;
use crate::reader::WireReader;
use crate::time::Time;
use crate::wire_string::WireString;
use crate::writer::WireWriter;
use serde::{Deserialize, Serialize};

/// Sequence number, timestamp and coordinate frame carried by stamped messages
///
/// # Wire layout
///
/// ```text
/// +-------+-------------+--------------+-----------------+
/// |  seq  | stamp.secs  | stamp.nsecs  |    frame_id     |
/// | (u32) |    (u32)    |    (u32)     | (u32 len + raw) |
/// +-------+-------------+--------------+-----------------+
/// ```
///
/// The layout is fixed and never reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Header {
    pub seq: u32,
    pub stamp: Time,
    pub frame_id: WireString,
}

impl Header {
    pub fn new(seq: u32, stamp: Time, frame_id: impl Into<WireString>) -> Self {
        Self {
            seq,
            stamp,
            frame_id: frame_id.into(),
        }
    }

    /// Encoded size in bytes: 12 fixed bytes, the 4-byte length and `frame_id`
    pub fn encoded_len(&self) -> usize {
        16 + self.frame_id.len()
    }

    pub fn encode(&self, w: &mut WireWriter) -> WireResult<()> {
        w.write_u32(self.seq);
        w.write_u32(self.stamp.secs);
        w.write_u32(self.stamp.nsecs);
        w.write_string(&self.frame_id)
    }

    pub fn decode(r: &mut WireReader<'_>) -> WireResult<Self> {
        let seq = r.read_u32()?;
        let secs = r.read_u32()?;
        let nsecs = r.read_u32()?;
        let frame_id = r.read_string()?;
        Ok(Self {
            seq,
            stamp: Time::new(secs, nsecs),
            frame_id,
        })
    }
}
