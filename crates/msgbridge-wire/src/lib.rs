//! msgbridge-wire - Runtime support for generated message codecs
//!
//! This crate provides:
//! - [`WireWriter`] and [`WireReader`] for the binary wire format
//! - [`Time`], [`Duration`] and [`Header`] compound field types
//! - [`WireString`], the byte-exact `string` field type
//! - [`Message`] and [`ServiceDefinition`] traits implemented by generated code
//! - [`Value`], [`Args`] and [`ConstructMode`] for validated dynamic construction
//!
//! # Wire format
//!
//! Every fixed-width value is little-endian, regardless of the host that
//! generated the code or the target it runs on. Strings and arrays carry a
//! 4-byte unsigned length prefix; messages are the concatenation of their
//! fields with no framing of their own.
//!
//! ```
//! use msgbridge_wire::{WireReader, WireWriter};
//!
//! let mut w = WireWriter::new();
//! w.write_u32(0x1234_5678);
//! w.write_string("hi").unwrap();
//! assert_eq!(w.as_bytes(), &[0x78, 0x56, 0x34, 0x12, 2, 0, 0, 0, b'h', b'i']);
//!
//! let mut r = WireReader::new(w.as_bytes());
//! assert_eq!(r.read_u32().unwrap(), 0x1234_5678);
//! assert_eq!(r.read_string().unwrap(), "hi");
//! ```

mod construct;
mod error;
mod header;
mod message;
mod reader;
mod time;
mod value;
mod wire_string;
mod writer;

pub use construct::{Args, ConstructMode};
pub use error::{ConstructError, ValueError, WireError, WireResult};
pub use header::Header;
pub use message::{FieldAccessor, Message, ServiceDefinition, message_from_value};
pub use reader::WireReader;
pub use time::{Duration, Time};
pub use value::{FromValue, MessageValue, ToValue, Value};
pub use wire_string::WireString;
pub use writer::WireWriter;

/// Prelude module imported by every generated unit
pub mod prelude {
    pub use crate::{
        Args, ConstructError, ConstructMode, Duration, FieldAccessor, FromValue, Header, Message,
        ServiceDefinition, Time, ToValue, Value, ValueError, WireError, WireReader, WireString,
        WireWriter, message_from_value,
    };
}
