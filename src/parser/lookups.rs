use std::collections::HashMap;

use crate::{ast::ast::Node, errors::errors::Error, lexer::tokens::{TokenKind, TokenSource}};

use super::{expr::*, parser::Parser, stmt::*};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Relational,
    Additive,
    Multiplicative,
    Primary,
}

pub type DeclHandler<S> = fn(&mut Parser<S>) -> Result<Node, Error>;
pub type StmtHandler<S> = fn(&mut Parser<S>) -> Result<Node, Error>;
pub type NUDHandler<S> = fn(&mut Parser<S>) -> Result<Node, Error>;

pub fn create_token_lookups<S: TokenSource>(parser: &mut Parser<S>) {
    // Relational
    parser.operator(TokenKind::Equals, BindingPower::Relational);
    parser.operator(TokenKind::NotEquals, BindingPower::Relational);
    parser.operator(TokenKind::Less, BindingPower::Relational);
    parser.operator(TokenKind::LessEquals, BindingPower::Relational);

    // Additive and multiplicative
    parser.operator(TokenKind::Plus, BindingPower::Additive);
    parser.operator(TokenKind::Dash, BindingPower::Additive);
    parser.operator(TokenKind::Or, BindingPower::Additive);
    parser.operator(TokenKind::Star, BindingPower::Multiplicative);
    parser.operator(TokenKind::Slash, BindingPower::Multiplicative);
    parser.operator(TokenKind::And, BindingPower::Multiplicative);

    // Factors
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);
    parser.nud(TokenKind::Integer, parse_int_expr);
    parser.nud(TokenKind::Identifier, parse_name_or_call_expr);

    // Declarations
    parser.decl(TokenKind::Int, parse_decl);
    parser.decl(TokenKind::Boolean, parse_decl);

    // Statements
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::While, parse_while_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
    parser.stmt(TokenKind::OpenCurly, parse_block);
    parser.stmt(TokenKind::Identifier, parse_assign_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type DeclLookup<S> = HashMap<TokenKind, DeclHandler<S>>;
pub type StmtLookup<S> = HashMap<TokenKind, StmtHandler<S>>;
pub type NUDLookup<S> = HashMap<TokenKind, NUDHandler<S>>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
