//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into an Abstract Syntax Tree, one function per grammar
//! rule:
//!
//! - Declarations (variables and functions with their formals)
//! - Statements (if, while, return, nested blocks, assignment)
//! - Expressions in three left-associative tiers: relational, additive and
//!   multiplicative, over parenthesized expressions, literals, names and calls
//!
//! Every choice between alternatives is made from the current token alone,
//! using the dispatch tables built in `lookups`, so a rule is only entered
//! once it is known to apply.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
