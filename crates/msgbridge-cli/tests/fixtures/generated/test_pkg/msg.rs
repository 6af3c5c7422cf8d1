// Generated by msgbridge for test_pkg/msg. Do not edit.

#[allow(unused_imports, unused_mut, non_snake_case, non_upper_case_globals, clippy::all)]
pub mod sample;
pub use self::sample::Sample;
#[allow(unused_imports, unused_mut, non_snake_case, non_upper_case_globals, clippy::all)]
pub mod stamped;
pub use self::stamped::Stamped;
