use std::fmt::Display;

use thiserror::Error;

use crate::{
    lexer::tokens::{Token, TokenKind},
    Position,
};

#[derive(Error, Debug, Clone)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    /// Shorthand for the syntax error raised when `found` is not `expected`.
    pub fn unexpected(expected: TokenKind, found: &Token) -> Self {
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected,
                found: found.clone(),
            },
            found.span.start.clone(),
        )
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The token kind the parser wanted, for syntax errors.
    pub fn get_expected(&self) -> Option<TokenKind> {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, .. } => Some(*expected),
            ErrorImpl::SymbolOverflow { .. } => None,
        }
    }

    /// The token the parser actually found, for syntax errors.
    pub fn get_found(&self) -> Option<&Token> {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { found, .. } => Some(found),
            ErrorImpl::SymbolOverflow { .. } => None,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::SymbolOverflow { .. } => "SymbolOverflow",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { found, .. } => ErrorTip::Suggestion(format!(
                "found `{}` on line {}",
                found.value, found.span.start.line
            )),
            ErrorImpl::SymbolOverflow { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("Expected: {expected}")]
    UnexpectedToken { expected: TokenKind, found: Token },
    #[error("symbol table is full, cannot intern {token:?}")]
    SymbolOverflow { token: String },
}
