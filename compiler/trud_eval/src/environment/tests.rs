use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_global_define_and_overwrite() {
    let mut env = Environment::new();
    env.define_global("x", Value::Number(1.0));
    env.define_global("x", Value::Number(2.0));
    assert_eq!(env.lookup("x"), Some(&Value::Number(2.0)));
    assert_eq!(env.globals().len(), 1);
    assert_eq!(env.lookup("y"), None);
}

#[test]
fn test_local_shadows_global_then_drops() {
    let mut env = Environment::new();
    env.define_global("n", Value::Number(1.0));

    let mut scope = Scope::new();
    scope.define("n", Value::Number(99.0));
    let saved = env.enter_local(scope);
    assert_eq!(env.lookup("n"), Some(&Value::Number(99.0)));

    env.restore_local(saved);
    assert_eq!(env.lookup("n"), Some(&Value::Number(1.0)));
}

#[test]
fn test_nested_call_hides_caller_locals() {
    let mut env = Environment::new();
    let outer: Scope = [("a".to_string(), Value::Number(1.0))].into_iter().collect();
    let saved_outer = env.enter_local(outer);

    let inner: Scope = [("b".to_string(), Value::Number(2.0))].into_iter().collect();
    let saved_inner = env.enter_local(inner);
    assert_eq!(env.lookup("a"), None);
    assert_eq!(env.lookup("b"), Some(&Value::Number(2.0)));

    env.restore_local(saved_inner);
    assert_eq!(env.lookup("a"), Some(&Value::Number(1.0)));
    assert_eq!(env.lookup("b"), None);

    env.restore_local(saved_outer);
    assert_eq!(env.lookup("a"), None);
}

#[test]
fn test_clear() {
    let mut env = Environment::new();
    env.define_global("x", Value::Null);
    env.clear();
    assert!(env.globals().is_empty());
}

#[test]
fn test_scope_iter() {
    let mut scope = Scope::new();
    scope.define("a", Value::Bool(true));
    assert!(scope.contains("a"));
    let items: Vec<_> = scope.iter().collect();
    assert_eq!(items, vec![("a", &Value::Bool(true))]);
}
