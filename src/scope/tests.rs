use crate::lexer::{
    symbols::{Interner, Symbol},
    tokens::TokenKind,
};

use super::scope_manager::ScopeManager;

fn identifier(interner: &mut Interner, name: &str) -> Symbol {
    interner
        .symbol(name, TokenKind::Identifier)
        .unwrap()
        .unwrap()
}

#[test_log::test]
fn test_scope_shadowing() {
    let mut interner = Interner::new();
    let x = identifier(&mut interner, "x");
    let mut scopes = ScopeManager::new();

    scopes.begin_scope();
    scopes.put(x, 1);
    scopes.begin_scope();
    scopes.put(x, 2);
    assert_eq!(scopes.get(x), Some(&2));

    scopes.end_scope();
    assert_eq!(scopes.get(x), Some(&1));

    scopes.end_scope();
    assert!(scopes.is_empty());
}

#[test]
fn test_get_sees_outer_bindings() {
    let mut interner = Interner::new();
    let a = identifier(&mut interner, "a");
    let b = identifier(&mut interner, "b");
    let mut scopes = ScopeManager::new();

    scopes.begin_scope();
    scopes.put(a, "outer");
    scopes.begin_scope();
    scopes.put(b, "inner");

    assert_eq!(scopes.get(a), Some(&"outer"));
    assert_eq!(scopes.get(b), Some(&"inner"));
    assert_eq!(scopes.get_local(a), None);
    assert_eq!(scopes.get_local(b), Some(&"inner"));
    assert_eq!(scopes.depth(), 2);
}

#[test]
fn test_get_missing_symbol() {
    let mut interner = Interner::new();
    let missing = identifier(&mut interner, "missing");
    let mut scopes: ScopeManager<i32> = ScopeManager::new();

    assert_eq!(scopes.get(missing), None);
    assert_eq!(scopes.get_local(missing), None);

    scopes.begin_scope();
    assert_eq!(scopes.get(missing), None);
}

#[test_log::test]
fn test_put_overwrite_returns_previous() {
    let mut interner = Interner::new();
    let b = identifier(&mut interner, "b");
    let mut scopes = ScopeManager::new();

    scopes.begin_scope();
    assert_eq!(scopes.put(b, 2), None);
    assert_eq!(scopes.put(b, 3), Some(2));
    assert_eq!(scopes.get(b), Some(&3));
}

#[test]
fn test_put_does_not_touch_outer_frame() {
    let mut interner = Interner::new();
    let x = identifier(&mut interner, "x");
    let mut scopes = ScopeManager::new();

    scopes.begin_scope();
    scopes.put(x, 10);
    scopes.begin_scope();
    assert_eq!(scopes.put(x, 20), None);
    scopes.end_scope();

    assert_eq!(scopes.get(x), Some(&10));
}

#[test]
fn test_end_scope_drops_bindings() {
    let mut interner = Interner::new();
    let y = identifier(&mut interner, "y");
    let mut scopes = ScopeManager::default();

    scopes.begin_scope();
    scopes.begin_scope();
    scopes.put(y, true);
    scopes.end_scope();

    assert_eq!(scopes.get(y), None);
    assert_eq!(scopes.depth(), 1);
}

#[test]
fn test_keys_are_canonical_symbols() {
    let mut interner = Interner::new();
    let first = identifier(&mut interner, "value");
    let mut scopes = ScopeManager::new();

    scopes.begin_scope();
    scopes.put(first, 'v');

    let again = identifier(&mut interner, "value");
    assert_eq!(scopes.get(again), Some(&'v'));
}

#[test]
#[should_panic(expected = "no open scope")]
fn test_end_scope_on_empty_stack_panics() {
    let mut scopes: ScopeManager<u8> = ScopeManager::new();
    scopes.end_scope();
}

#[test]
#[should_panic(expected = "no open scope")]
fn test_unbalanced_end_scope_panics() {
    let mut scopes: ScopeManager<u8> = ScopeManager::new();
    scopes.begin_scope();
    scopes.end_scope();
    scopes.end_scope();
}

#[test]
#[should_panic(expected = "no open scope")]
fn test_put_without_scope_panics() {
    let mut interner = Interner::new();
    let z = identifier(&mut interner, "z");
    let mut scopes = ScopeManager::new();
    scopes.put(z, 0);
}
