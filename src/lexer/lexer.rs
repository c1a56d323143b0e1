use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::{
    symbols::{Interner, Symbol},
    tokens::{Lexeme, Token, TokenKind, TokenSource},
};

/// Handles one pattern match. `None` means the text produced no token.
pub type RegexHandler = fn(&mut Lexer, String) -> Result<Option<Token>, Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Tried in order against the unscanned input; every pattern is anchored.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^//[^\n]*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"^[0-9]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new(r"^[^\sa-zA-Z0-9_]{1,2}").unwrap(), handler: operator_handler },
    ];
}

/// Scans source text into tokens on demand.
///
/// Words and operators are classified through the [`Interner`], so the
/// scanner itself carries no keyword table.
pub struct Lexer<'i> {
    source: String,
    pos: usize,
    line: u32,
    file: Rc<String>,
    interner: &'i mut Interner,
}

impl<'i> Lexer<'i> {
    pub fn new(source: String, file: Option<String>, interner: &'i mut Interner) -> Lexer<'i> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            line: 1,
            file: file_name,
            interner,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn get_position(&self) -> Position {
        Position::new(self.pos as u32, self.line, Rc::clone(&self.file))
    }

    fn intern(&mut self, text: &str, kind: TokenKind) -> Result<Option<Symbol>, Error> {
        self.interner.symbol(text, kind).map_err(|_| {
            Error::new(
                ErrorImpl::SymbolOverflow {
                    token: text.to_string(),
                },
                self.get_position(),
            )
        })
    }

    /// Builds a token for `value` at the current position and steps past it.
    fn emit(&mut self, kind: TokenKind, value: &str, lexeme: Lexeme) -> Token {
        let start = self.get_position();
        self.advance_n(value.len());

        MK_TOKEN!(kind, value.to_string(), lexeme, start, self.get_position())
    }
}

impl TokenSource for Lexer<'_> {
    fn next_token(&mut self) -> Result<Token, Error> {
        while !self.at_eof() {
            let remainder = self.remainder();
            let found = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(remainder)
                    .map(|matched| (pattern.handler, matched.as_str().to_string()))
            });

            match found {
                Some((handler, matched)) => {
                    if let Some(token) = handler(self, matched)? {
                        return Ok(token);
                    }
                }
                None => {
                    let text = remainder.chars().next().map(String::from).unwrap_or_default();
                    return Ok(self.emit(TokenKind::Bogus, &text, Lexeme::Empty));
                }
            }
        }

        Ok(Token::eof(self.get_position()))
    }
}

fn skip_handler(lexer: &mut Lexer, matched: String) -> Result<Option<Token>, Error> {
    lexer.line += matched.matches('\n').count() as u32;
    lexer.advance_n(matched.len());
    Ok(None)
}

fn symbol_handler(lexer: &mut Lexer, matched: String) -> Result<Option<Token>, Error> {
    let token = match lexer.intern(&matched, TokenKind::Identifier)? {
        Some(symbol) => {
            let kind = lexer.interner.kind(symbol).unwrap_or(TokenKind::Identifier);
            lexer.emit(kind, &matched, Lexeme::Symbol(symbol))
        }
        None => lexer.emit(TokenKind::Bogus, &matched, Lexeme::Empty),
    };

    Ok(Some(token))
}

fn number_handler(lexer: &mut Lexer, matched: String) -> Result<Option<Token>, Error> {
    let token = match matched.parse::<i64>() {
        Ok(value) => lexer.emit(TokenKind::Integer, &matched, Lexeme::Integer(value)),
        Err(_) => lexer.emit(TokenKind::Bogus, &matched, Lexeme::Empty),
    };

    Ok(Some(token))
}

fn operator_handler(lexer: &mut Lexer, matched: String) -> Result<Option<Token>, Error> {
    let first_len = matched.chars().next().map_or(matched.len(), char::len_utf8);

    // Two-character spellings win over their one-character prefixes.
    let mut candidates = vec![matched.as_str()];
    if first_len < matched.len() {
        candidates.push(&matched[..first_len]);
    }

    for text in candidates {
        if let Some(symbol) = lexer.intern(text, TokenKind::Bogus)? {
            let kind = lexer.interner.kind(symbol).unwrap_or(TokenKind::Bogus);
            return Ok(Some(lexer.emit(kind, text, Lexeme::Symbol(symbol))));
        }
    }

    Ok(Some(lexer.emit(
        TokenKind::Bogus,
        &matched[..first_len],
        Lexeme::Empty,
    )))
}

/// Scans all of `source`, ending the list with a single `EOF` token.
pub fn tokenize(
    source: String,
    file: Option<String>,
    interner: &mut Interner,
) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file, interner);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token()?;
        let at_end = token.kind == TokenKind::EOF;
        tokens.push(token);

        if at_end {
            return Ok(tokens);
        }
    }
}
