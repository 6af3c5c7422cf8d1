// Generated by msgbridge for test_pkg/srv. Do not edit.

#[allow(unused_imports, unused_mut, non_snake_case, non_upper_case_globals, clippy::all)]
pub mod add_two_ints;
pub use self::add_two_ints::{AddTwoInts, AddTwoIntsRequest, AddTwoIntsResponse};
