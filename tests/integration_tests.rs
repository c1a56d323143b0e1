//! Integration tests for the whole front end.
//!
//! These tests drive source text through scanning and parsing, render the
//! resulting diagnostics, and bind the parsed names in a scope manager the
//! way an analysis pass would.

use frontend::{
    ast::ast::{Node, NodeKind},
    display_error,
    lexer::{
        lexer::tokenize,
        symbols::{Interner, Symbol},
        tokens::{TokenKind, TokenStream},
    },
    parse_source,
    parser::parser::parse,
    scope::scope_manager::ScopeManager,
};

const FACTORIAL: &str = "\
program {
    int n
    int fact(int k) {
        if k <= 1 then {
            return 1
        } else {
            return k * fact(k - 1)
        }
    }
    // read, then print
    n = read()
    n = write(fact(n))
}
";

fn render(source: &str, file: &str) -> String {
    let mut interner = Interner::new();
    let error = parse_source(source, Some(file.to_string()), &mut interner).unwrap_err();

    let mut out = Vec::new();
    display_error(&error, source, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test_log::test]
fn test_parse_complete_program() {
    let mut interner = Interner::new();
    let program = parse_source(FACTORIAL, Some("fact.prog".to_string()), &mut interner).unwrap();

    let block = program.get_child(0).unwrap();
    let kinds: Vec<NodeKind> = block.get_children().iter().map(|n| n.get_kind()).collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::Decl,
            NodeKind::FunctionDecl,
            NodeKind::Assign,
            NodeKind::Assign
        ]
    );

    let body = block.get_child(1).unwrap().get_child(3).unwrap();
    let branch = body.get_child(0).unwrap();
    assert_eq!(branch.get_kind(), NodeKind::If);

    let recursive = branch
        .get_child(2)
        .and_then(|else_block| else_block.get_child(0))
        .and_then(|ret| ret.get_child(0))
        .unwrap();
    assert_eq!(recursive.get_kind(), NodeKind::MultOp);
    assert_eq!(recursive.get_child(1).unwrap().get_kind(), NodeKind::Call);
}

#[test]
fn test_token_positions_track_lines() {
    let mut interner = Interner::new();
    let tokens = tokenize(FACTORIAL.to_string(), None, &mut interner).unwrap();

    let fact = tokens.iter().find(|token| token.value == "fact").unwrap();
    assert_eq!(fact.get_line(), 3);

    let read = tokens.iter().find(|token| token.value == "read").unwrap();
    assert_eq!(read.get_line(), 11);
    assert!(tokens.iter().all(|token| token.kind != TokenKind::Comment));
    assert_eq!(tokens.last().unwrap().kind, TokenKind::EOF);
}

#[test]
fn test_scanned_and_streamed_parses_agree() {
    let mut interner = Interner::new();
    let tokens = tokenize(FACTORIAL.to_string(), None, &mut interner).unwrap();

    let streamed = parse(TokenStream::new(tokens)).unwrap();
    let scanned = parse_source(FACTORIAL, None, &mut interner).unwrap();

    assert_eq!(streamed, scanned);
    assert_eq!(streamed.to_string(), scanned.to_string());
}

#[test]
fn test_display_missing_close_curly() {
    let output = render("program { int a", "test.prog");

    let expected = "\
Error: UnexpectedToken (found `EOF` on line 1)
Expected: CloseCurly
-> test.prog
  |
1 | program { int a
  | ---------------^
";
    assert_eq!(output, expected);
}

#[test]
fn test_display_error_on_later_line() {
    let source = "program {\n  int a\n  a = 1 < 2 < 3\n}";
    let output = render(source, "chain.prog");

    let expected = "\
Error: UnexpectedToken (found `<` on line 3)
Expected: CloseCurly
-> chain.prog
  |
3 | a = 1 < 2 < 3
  | ----------^
";
    assert_eq!(output, expected);
}

#[test]
fn test_display_uses_default_file_name() {
    let source = "program { while x { } ";
    let mut interner = Interner::new();
    let error = parse_source(source, None, &mut interner).unwrap_err();

    let mut out = Vec::new();
    display_error(&error, source, &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    assert!(output.contains("-> shell"));
    assert_eq!(error.get_found().unwrap().kind, TokenKind::EOF);
}

/// Binds every declared name the way a later pass would, one scope per block.
fn bind(node: &Node, scopes: &mut ScopeManager<NodeKind>, unresolved: &mut Vec<Symbol>) {
    match node.get_kind() {
        NodeKind::Block => {
            scopes.begin_scope();
            for child in node.get_children() {
                bind(child, scopes, unresolved);
            }
            scopes.end_scope();
        }
        NodeKind::Decl | NodeKind::FunctionDecl => {
            let name = node.get_child(1).and_then(Node::get_symbol).unwrap();
            scopes.put(name, node.get_kind());

            if node.get_kind() == NodeKind::FunctionDecl {
                scopes.begin_scope();
                for child in node.get_children().into_iter().skip(2) {
                    bind(child, scopes, unresolved);
                }
                scopes.end_scope();
            }
        }
        NodeKind::Id => {
            let symbol = node.get_symbol().unwrap();
            if scopes.get(symbol).is_none() {
                unresolved.push(symbol);
            }
        }
        _ => {
            for child in node.get_children() {
                bind(child, scopes, unresolved);
            }
        }
    }
}

#[test_log::test]
fn test_bind_names_with_scope_manager() {
    let mut interner = Interner::new();
    let program = parse_source(FACTORIAL, None, &mut interner).unwrap();

    let mut scopes = ScopeManager::new();
    let mut unresolved = Vec::new();
    bind(&program, &mut scopes, &mut unresolved);

    assert!(scopes.is_empty());

    let mut names: Vec<&str> = unresolved
        .iter()
        .filter_map(|symbol| interner.name(*symbol))
        .collect();
    names.sort();
    names.dedup();
    assert_eq!(names, vec!["read", "write"]);
}

#[test]
fn test_sessions_do_not_share_interners() {
    let mut first = Interner::new();
    let mut second = Interner::new();

    parse_source("program { alpha = 1 }", None, &mut first).unwrap();
    parse_source("program { beta = 1 }", None, &mut second).unwrap();

    assert!(first.get("alpha").is_some());
    assert!(first.get("beta").is_none());
    assert!(second.get("alpha").is_none());
}
