// Generated by msgbridge for geometry_msgs/msg. Do not edit.

#[allow(unused_imports, unused_mut, non_snake_case, non_upper_case_globals, clippy::all)]
pub mod point;
pub use self::point::Point;
