#![allow(non_snake_case)]

use super::*;
use crate::value::FromValue;

const FIELDS: &[&str] = &["a", "b", "c"];

#[test]
fn Args___bind___positional_fills_in_order() {
    let slots = Args::new()
        .push(Value::Int(1))
        .push(Value::Int(2))
        .bind(FIELDS, ConstructMode::Strict)
        .unwrap();

    assert_eq!(slots, vec![Some(Value::Int(1)), Some(Value::Int(2)), None]);
}

#[test]
fn Args___bind___named_fills_by_name() {
    let slots = Args::new()
        .with("c", Value::Bool(true))
        .bind(FIELDS, ConstructMode::Strict)
        .unwrap();

    assert_eq!(slots, vec![None, None, Some(Value::Bool(true))]);
}

#[test]
fn Args___bind___strict_rejects_too_many_positional() {
    let args = Args::from_positional(vec![Value::Int(0); 4]);

    let err = args.bind(FIELDS, ConstructMode::Strict).unwrap_err();

    assert_eq!(err, ConstructError::TooManyValues { given: 4, max: 3 });
}

#[test]
fn Args___bind___lenient_drops_surplus_positional() {
    let args = Args::from_positional(vec![Value::Int(0); 4]);

    let slots = args.bind(FIELDS, ConstructMode::Lenient).unwrap();

    assert_eq!(slots.len(), 3);
}

#[test]
fn Args___bind___strict_rejects_unknown_name() {
    let err = Args::new()
        .with("z", Value::Int(0))
        .bind(FIELDS, ConstructMode::Strict)
        .unwrap_err();

    assert_eq!(err, ConstructError::UnknownField("z".into()));
}

#[test]
fn Args___bind___strict_rejects_name_bound_positionally() {
    let err = Args::new()
        .push(Value::Int(1))
        .with("a", Value::Int(2))
        .bind(FIELDS, ConstructMode::Strict)
        .unwrap_err();

    assert_eq!(err, ConstructError::DuplicateField("a".into()));
}

#[test]
fn Args___bind___lenient_positional_wins_over_named() {
    let slots = Args::new()
        .push(Value::Int(1))
        .with("a", Value::Int(2))
        .with("zz", Value::Int(3))
        .bind(FIELDS, ConstructMode::Lenient)
        .unwrap();

    assert_eq!(slots[0], Some(Value::Int(1)));
}

#[test]
fn ConstructMode___default___is_strict() {
    assert_eq!(ConstructMode::default(), ConstructMode::Strict);
}

#[test]
fn ConstructMode___accept___strict_reports_field() {
    let checked: Result<u8, _> = u8::from_value(Value::Bool(true));

    let err = ConstructMode::Strict
        .accept("flag", checked, || 0)
        .unwrap_err();

    assert!(matches!(err, ConstructError::InvalidField { field, .. } if field == "flag"));
}

#[test]
fn ConstructMode___accept___lenient_uses_default() {
    let checked: Result<u8, _> = u8::from_value(Value::Bool(true));

    let value = ConstructMode::Lenient.accept("flag", checked, || 9).unwrap();

    assert_eq!(value, 9);
}
