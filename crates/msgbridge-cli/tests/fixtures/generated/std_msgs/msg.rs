// Generated by msgbridge for std_msgs/msg. Do not edit.

pub use msgbridge_wire::Header;
