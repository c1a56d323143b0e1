#![allow(clippy::module_inception)]

use std::{
    io::{self, Write},
    rc::Rc,
};

use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorTip},
    lexer::{lexer::Lexer, symbols::Interner},
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod scope;

extern crate regex;

/// A point in the source: byte offset, 1-based line and the source name.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub offset: u32,
    pub line: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(offset: u32, line: u32, file: Rc<String>) -> Self {
        Position { offset, line, file }
    }

    pub fn null() -> Self {
        Position::new(0, 0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Scans and parses a whole program held in memory.
///
/// `file` names the source in diagnostics; `None` falls back to `shell`.
pub fn parse_source(
    source: &str,
    file: Option<String>,
    interner: &mut Interner,
) -> Result<Node, Error> {
    let lexer = Lexer::new(source.to_string(), file, interner);
    parse(lexer)
}

/// Finds the line holding byte `position` of `source`.
///
/// Returns the 1-based line number, the line text and the offset of
/// `position` within that line. The offset one past the end of the source
/// (where EOF tokens sit) resolves to the end of the final line.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    if source.is_empty() || source.ends_with('\n') {
        return Some((line_number, String::new(), 0));
    }

    let last = source.rsplit('\n').next().unwrap_or(source);
    Some((line_number - 1, last.to_string(), last.len()))
}

#[cfg(test)]
mod tests {
    const SOURCE: &str = "program {\n  int a\n  a = 1\n}";

    #[test]
    fn test_get_line_at_position() {
        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 4).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "program {\n");
        assert_eq!(line_pos, 4);

        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 14).unwrap();
        assert_eq!(line_number, 2);
        assert_eq!(line, "  int a\n");
        assert_eq!(line_pos, 4);
    }

    #[test]
    fn test_get_line_at_end_of_source() {
        let (line_number, line, line_pos) =
            super::get_line_at_position(SOURCE, SOURCE.len() as u32).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "}");
        assert_eq!(line_pos, 1);

        let (line_number, line, line_pos) = super::get_line_at_position("a\n", 2).unwrap();
        assert_eq!(line_number, 2);
        assert_eq!(line, "");
        assert_eq!(line_pos, 0);
    }

    #[test]
    fn test_get_line_past_end_of_source() {
        assert!(super::get_line_at_position(SOURCE, 500).is_none());
    }
}

/// Renders `error` against the source text it was raised for.
///
/// ```text
/// Error: UnexpectedToken (found `EOF` on line 1)
/// Expected: CloseCurly
/// -> shell
///   |
/// 1 | program { int a
///   | ---------------^
/// ```
pub fn display_error(error: &Error, source: &str, out: &mut impl Write) -> io::Result<()> {
    let position = error.get_position();

    if let ErrorTip::None = error.get_tip() {
        writeln!(out, "Error: {}", error.get_error_name())?;
    } else {
        writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip())?;
    }
    writeln!(out, "{}", error)?;
    writeln!(out, "-> {}", position.file)?;

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.offset) else {
        return Ok(());
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    writeln!(out, "{:>padding$}", "|")?;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    writeln!(out, "{} | {}", line_string, line_text_removed.trim())?;

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    writeln!(out, "{:>padding$} {:->arrows$}", "|", "^")
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
