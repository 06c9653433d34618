//! Environment tests

use proptest::prelude::*;
use sprig::*;

// ═══════════════════════════════════════════════════════════════════════
// Basic Operations
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_environment_new_is_empty() {
    let env = Environment::new();
    assert!(env.is_empty());
    assert_eq!(env.len(), 0);
    assert!(env.names().is_empty());
}

#[test]
fn test_environment_extend_and_lookup() {
    let env = Environment::new().extend("x", Value::Int(42));

    assert_eq!(env.lookup("x"), Some(&Value::Int(42)));
    assert_eq!(env.lookup("y"), None);
    assert!(env.contains("x"));
    assert!(!env.contains("y"));
}

#[test]
fn test_environment_extend_multiple() {
    let env = Environment::new()
        .extend("a", Value::Int(1))
        .extend("b", Value::Int(2))
        .extend("c", Value::Int(3));

    assert_eq!(env.len(), 3);
    assert_eq!(env.lookup("a"), Some(&Value::Int(1)));
    assert_eq!(env.lookup("b"), Some(&Value::Int(2)));
    assert_eq!(env.lookup("c"), Some(&Value::Int(3)));
}

// ═══════════════════════════════════════════════════════════════════════
// Persistence and Shadowing
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_environment_extend_is_non_destructive() {
    let base = Environment::new().extend("x", Value::Int(1));
    let extended = base.extend("y", Value::Int(2));

    assert_eq!(base.len(), 1);
    assert_eq!(base.lookup("y"), None);
    assert_eq!(extended.lookup("x"), Some(&Value::Int(1)));
}

#[test]
fn test_environment_shadowing() {
    let outer = Environment::new().extend("x", Value::Int(1));
    let inner = outer.extend("x", Value::Int(10));

    assert_eq!(inner.lookup("x"), Some(&Value::Int(10)));
    assert_eq!(outer.lookup("x"), Some(&Value::Int(1)));
}

#[test]
fn test_environment_branches_are_independent() {
    let base = Environment::new().extend("shared", Value::Int(0));
    let left = base.extend("side", Value::string("left"));
    let right = base.extend("side", Value::string("right"));

    assert_eq!(left.lookup("side"), Some(&Value::string("left")));
    assert_eq!(right.lookup("side"), Some(&Value::string("right")));
    assert_eq!(left.lookup("shared"), right.lookup("shared"));
}

#[test]
fn test_environment_define_updates_handle() {
    let mut env = Environment::new();
    let before = env.clone();
    env.define("x", Value::Bool(true));

    assert_eq!(env.lookup("x"), Some(&Value::Bool(true)));
    assert!(before.is_empty());
}

#[test]
fn test_environment_clone_shares_chain() {
    let env = Environment::new().extend("x", Value::Int(1));
    let copy = env.clone();
    assert!(env.ptr_eq(&copy));
    assert!(!env.ptr_eq(&env.extend("y", Value::Int(2))));
}

// ═══════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_with_prelude_binds_intrinsics() {
    let env = Environment::with_prelude();
    for name in ["firstChar", "remainingChars", "charCode", "codeChar"] {
        assert!(env.contains(name), "missing {}", name);
        assert!(env.lookup(name).is_some_and(Value::is_callable));
    }
}

#[test]
fn test_load_prelude_onto_existing_bindings() {
    let mut env = Environment::new().extend("x", Value::Int(1));
    env.load_prelude();
    assert!(env.contains("x"));
    assert!(env.contains("codeChar"));
    assert_eq!(env.len(), 5);
}

// ═══════════════════════════════════════════════════════════════════════
// Extension Law
// ═══════════════════════════════════════════════════════════════════════

fn arb_name() -> impl Strategy<Value = String> {
    "[a-e]{1,2}"
}

fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::Int),
        any::<bool>().prop_map(Value::Bool),
        "[a-z]{0,4}".prop_map(Value::from),
    ]
}

fn arb_env() -> impl Strategy<Value = Environment> {
    prop::collection::vec((arb_name(), arb_value()), 0..8).prop_map(|bindings| {
        bindings
            .into_iter()
            .fold(Environment::new(), |env, (name, value)| env.extend(name, value))
    })
}

proptest! {
    #[test]
    fn prop_extend_binds_name(env in arb_env(), name in arb_name(), value in arb_value()) {
        let extended = env.extend(name.clone(), value.clone());
        prop_assert_eq!(extended.lookup(&name), Some(&value));
    }

    #[test]
    fn prop_extend_preserves_other_names(
        env in arb_env(),
        name in arb_name(),
        other in arb_name(),
        value in arb_value(),
    ) {
        prop_assume!(name != other);
        let extended = env.extend(name, value);
        prop_assert_eq!(extended.lookup(&other), env.lookup(&other));
    }

    #[test]
    fn prop_extend_leaves_parent_unchanged(env in arb_env(), name in arb_name(), value in arb_value()) {
        let before: Vec<(String, Option<Value>)> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|n| (n.to_string(), env.lookup(n).cloned()))
            .collect();
        let len = env.len();

        let _extended = env.extend(name, value);

        prop_assert_eq!(env.len(), len);
        for (n, v) in before {
            prop_assert_eq!(env.lookup(&n).cloned(), v);
        }
    }
}
