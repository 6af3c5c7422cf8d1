#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test]
fn GenError___schema_resolution___names_token() {
    let err = GenError::SchemaResolution {
        token: "geometry_msgs/Pose".into(),
    };

    assert_eq!(err.to_string(), "cannot resolve type geometry_msgs/Pose");
}

#[test]
fn GenError___read_schema___displays_path() {
    let err = GenError::ReadSchema {
        path: PathBuf::from("pkg/msg/Point.json"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    };

    assert_eq!(err.to_string(), "failed to read pkg/msg/Point.json: gone");
}

#[test]
fn GenError___from_wire_error___is_transparent() {
    let wire = WireError::TrailingBytes { count: 2 };

    let err = GenError::from(wire.clone());

    assert_eq!(err.to_string(), wire.to_string());
    assert_eq!(err.kind(), "wire");
}

#[test_case(GenError::RecursiveType { chain: "a/A -> a/A".into() }, "recursive_type")]
#[test_case(GenError::invalid_schema("a/A", "duplicate field x"), "invalid_schema")]
#[test_case(GenError::UnsupportedType { token: "float".into(), reason: "not a builtin type".into() }, "unsupported_type")]
#[test_case(GenError::InvalidConfig("bad".into()), "invalid_config")]
fn GenError___kind___stable_names(err: GenError, expected: &str) {
    assert_eq!(err.kind(), expected);
}
