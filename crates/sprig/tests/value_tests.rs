//! Comprehensive tests for Value type

use std::sync::Arc;

use sprig::ast::build::*;
use sprig::*;

#[test]
fn test_primitive_values() {
    assert_eq!(Value::Bool(true), Value::Bool(true));
    assert_ne!(Value::Bool(true), Value::Bool(false));

    assert_eq!(Value::Int(42), Value::Int(42));
    assert_ne!(Value::Int(42), Value::Int(43));

    // No coercion between tags
    assert_ne!(Value::Int(1), Value::Bool(true));
    assert_ne!(Value::Int(0), Value::string("0"));
}

#[test]
fn test_string_values() {
    let s1 = Value::string("hello");
    let s2 = Value::string("hello");
    let s3 = Value::string("world");

    assert_eq!(s1, s2);
    assert_ne!(s1, s3);

    assert_eq!(s1.as_str(), Some("hello"));
}

#[test]
fn test_closures_compare_by_identity() {
    let env = Environment::new();
    let body = Arc::new(var("x"));
    let a = Value::closure(env.clone(), "x", body.clone());
    let b = Value::closure(env, "x", body);

    assert_eq!(a, a.clone());
    assert_ne!(a, b);
}

#[test]
fn test_builtins_compare_by_identity() {
    let prelude = Environment::with_prelude();
    let first_char = prelude.lookup("firstChar").cloned().unwrap();
    let impostor = Value::Builtin(BuiltinFn::new("firstChar", |v| Ok(v.clone())));

    assert_eq!(first_char, first_char.clone());
    assert_ne!(first_char, impostor);

    // A fresh wrapper around the same intrinsic is a different host function
    assert_ne!(first_char, Value::Builtin(Intrinsic::FirstChar.to_builtin()));
}

#[test]
fn test_closure_fields() {
    let env = Environment::new().extend("y", Value::Int(1));
    let value = eval(&env, &lambda("x", binary(var("x"), BinOp::Add, var("y")))).unwrap();
    let closure = value.as_closure().expect("closure");

    assert_eq!(closure.param, "x");
    assert_eq!(closure.body.to_string(), "x + y");
    assert!(closure.env.ptr_eq(&env));
}

#[test]
fn test_display_is_distinct_per_variant() {
    let closure = eval(&Environment::new(), &lambda("n", var("n"))).unwrap();
    let builtin = Environment::with_prelude()
        .lookup("firstChar")
        .cloned()
        .unwrap();

    let rendered = [
        Value::Int(1).to_string(),
        Value::Bool(true).to_string(),
        Value::string("1").to_string(),
        closure.to_string(),
        builtin.to_string(),
    ];
    assert_eq!(
        rendered,
        ["1", "true", "\"1\"", "<closure \\n>", "<builtin firstChar>"]
    );
}

#[test]
fn test_type_names() {
    assert_eq!(Value::Int(1).type_name(), "Int");
    assert_eq!(Value::Bool(false).type_name(), "Bool");
    assert_eq!(Value::string("").type_name(), "String");
    assert_eq!(
        Intrinsic::CharCode.to_builtin().name,
        "charCode"
    );
    assert_eq!(Value::Builtin(Intrinsic::CharCode.to_builtin()).type_name(), "Builtin");
}

#[test]
fn test_recursive_closure_debug_terminates() {
    let fact = let_rec(
        "f",
        lambda("n", app(var("f"), var("n"))),
        var("f"),
    );
    let value = eval(&Environment::new(), &fact).unwrap();
    let debug = format!("{:?}", value.as_closure().unwrap());
    assert!(debug.contains("\"f\""));
}

#[test]
fn test_values_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Value>();
    assert_send_sync::<Environment>();
    assert_send_sync::<Expr>();
}
