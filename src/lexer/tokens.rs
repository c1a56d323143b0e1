use std::fmt::Display;

use crate::{errors::errors::Error, Position, Span, MK_TOKEN};

use super::symbols::Symbol;

/// Text and kind of every symbol an interner knows before scanning starts.
///
/// `<id>` and `<int>` stand for the identifier and integer-literal classes.
pub const SEEDED_SYMBOLS: [(&str, TokenKind); 28] = [
    ("program", TokenKind::Program),
    ("int", TokenKind::Int),
    ("boolean", TokenKind::Boolean),
    ("if", TokenKind::If),
    ("then", TokenKind::Then),
    ("else", TokenKind::Else),
    ("while", TokenKind::While),
    ("function", TokenKind::Function),
    ("return", TokenKind::Return),
    ("<id>", TokenKind::Identifier),
    ("<int>", TokenKind::Integer),
    ("{", TokenKind::OpenCurly),
    ("}", TokenKind::CloseCurly),
    ("(", TokenKind::OpenParen),
    (")", TokenKind::CloseParen),
    (",", TokenKind::Comma),
    ("=", TokenKind::Assignment),
    ("==", TokenKind::Equals),
    ("!=", TokenKind::NotEquals),
    ("<", TokenKind::Less),
    ("<=", TokenKind::LessEquals),
    ("+", TokenKind::Plus),
    ("-", TokenKind::Dash),
    ("|", TokenKind::Or),
    ("&", TokenKind::And),
    ("*", TokenKind::Star),
    ("/", TokenKind::Slash),
    ("//", TokenKind::Comment),
];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Bogus,
    Integer,
    Identifier,

    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,
    Comma,

    Assignment, // =
    Equals,     // ==
    NotEquals,  // !=
    Less,
    LessEquals,

    Plus,
    Dash,
    Or, // |
    Star,
    Slash,
    And, // &

    Comment,

    // Reserved
    Program,
    Int,
    Boolean,
    If,
    Then,
    Else,
    While,
    Function,
    Return,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// What a token refers to beyond its raw text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lexeme {
    Symbol(Symbol),
    Integer(i64),
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub lexeme: Lexeme,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "`{}` ({})", self.value, self.kind)
    }
}

impl Token {
    pub fn eof(position: Position) -> Self {
        MK_TOKEN!(TokenKind::EOF, String::from("EOF"), Lexeme::Empty, position)
    }

    pub fn get_symbol(&self) -> Option<Symbol> {
        match self.lexeme {
            Lexeme::Symbol(symbol) => Some(symbol),
            _ => None,
        }
    }

    pub fn get_line(&self) -> u32 {
        self.span.start.line
    }
}

/// A pull-based supply of tokens, one at a time.
///
/// Once exhausted, a source keeps returning `EOF` tokens.
pub trait TokenSource {
    fn next_token(&mut self) -> Result<Token, Error>;
}

/// Serves an already scanned token list as a [`TokenSource`].
pub struct TokenStream {
    tokens: std::vec::IntoIter<Token>,
    end: Position,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenStream {
            tokens: tokens.into_iter(),
            end: Position::null(),
        }
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Result<Token, Error> {
        let token = match self.tokens.next() {
            Some(token) => token,
            None => Token::eof(self.end.clone()),
        };
        self.end = token.span.end.clone();

        Ok(token)
    }
}
