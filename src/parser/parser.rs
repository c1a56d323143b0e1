//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program entry point.
//! The parser pulls tokens one at a time from a [`TokenSource`] and keeps
//! exactly one token of lookahead.
//!
//! It maintains lookup tables for:
//! - Declaration handlers
//! - Statement handlers
//! - NUD (null denotation) handlers for factors
//! - Binding powers sorting operators into precedence tiers

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{
    ast::ast::Node,
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind, TokenSource},
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, DeclHandler, DeclLookup, NUDHandler,
        NUDLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_block,
};

/// The main parser structure that maintains parsing state.
///
/// This struct owns the token source and the current token, and holds the
/// dispatch tables consulted before any token is consumed.
pub struct Parser<S> {
    /// Where tokens come from
    source: S,
    /// The token under inspection, already scanned
    current: Token,
    /// Lookup table for declaration handlers, keyed by type keyword
    decl_lookup: DeclLookup<S>,
    /// Lookup table for statement handlers, keyed by leading token
    stmt_lookup: StmtLookup<S>,
    /// Lookup table for factor handlers
    nud_lookup: NUDLookup<S>,
    /// Lookup table for operator binding powers (precedence tiers)
    binding_power_lookup: BPLookup,
}

impl<S: TokenSource> Parser<S> {
    /// Creates a new Parser, scanning the first token from `source`.
    ///
    /// # Returns
    ///
    /// The parser with all lookup tables registered, or the scanner's error.
    pub fn new(mut source: S) -> Result<Self, Error> {
        let current = source.next_token()?;
        trace!(token = %current, line = current.get_line(), "scanned");

        let mut parser = Parser {
            source,
            current,
            decl_lookup: HashMap::new(),
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        Ok(parser)
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Advances to the next token and returns the one stepped past.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let next = self.source.next_token()?;
        trace!(token = %next, line = next.get_line(), "scanned");

        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Consumes the current token if it is of `expected_kind`.
    ///
    /// On a mismatch nothing is consumed and the error carries both the
    /// expected kind and the token actually found.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.current.kind != expected_kind {
            return Err(Error::unexpected(expected_kind, &self.current));
        }

        self.advance()
    }

    /// Returns a reference to the declaration lookup table.
    pub fn get_decl_lookup(&self) -> &DeclLookup<S> {
        &self.decl_lookup
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup<S> {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup<S> {
        &self.nud_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// The binding power of the current token; non-operators are `Default`.
    pub fn current_binding_power(&self) -> BindingPower {
        *self
            .binding_power_lookup
            .get(&self.current.kind)
            .unwrap_or(&BindingPower::Default)
    }

    /// Registers an operator in the precedence tier `binding_power`.
    pub fn operator(&mut self, kind: TokenKind, binding_power: BindingPower) {
        self.binding_power_lookup.insert(kind, binding_power);
    }

    /// Registers a null denotation (factor) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler<S>) {
        self.binding_power_lookup.insert(kind, BindingPower::Primary);
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a declaration handler for a type keyword.
    pub fn decl(&mut self, kind: TokenKind, decl_fn: DeclHandler<S>) {
        self.decl_lookup.insert(kind, decl_fn);
    }

    /// Registers a statement handler for a leading token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler<S>) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }
}

/// Parses a whole program from a token source.
///
/// This is the main entry point for parsing. Any syntax error aborts the
/// parse; no partial tree is returned.
///
/// # Returns
///
/// The `Program` node, or the first error that was not absorbed by a
/// declaration or statement list.
pub fn parse<S: TokenSource>(source: S) -> Result<Node, Error> {
    let mut parser = Parser::new(source)?;
    let result = parse_program(&mut parser);

    if let Err(error) = &result {
        debug!(%error, position = ?error.get_position(), "parse failed");
    }

    result
}

/// `program -> 'program' block`
pub fn parse_program<S: TokenSource>(parser: &mut Parser<S>) -> Result<Node, Error> {
    parser.expect(TokenKind::Program)?;
    let block = parse_block(parser)?;

    Ok(Node::Program {
        block: Box::new(block),
    })
}
