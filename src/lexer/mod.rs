//! Lexical analysis module for the front end.
//!
//! This module owns everything the parser consumes:
//!
//! - The token model and the `TokenSource` pull contract
//! - The symbol interner that canonicalizes identifiers, keywords and operators
//! - A regex-driven reference scanner producing tokens on demand
//! - Line tracking for diagnostics, with comments and whitespace skipped

pub mod lexer;
pub mod symbols;
pub mod tokens;
