//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token covering a start..end position range

/// Creates a Token instance.
///
/// `$start` and `$end` are the [`Position`](crate::Position)s the token's
/// span runs between. With a single position the span is empty, as for
/// hand-built tokens and end markers.
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), Lexeme::Integer(42), start, end);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $lexeme:expr, $start:expr, $end:expr) => {
        Token {
            kind: $kind,
            value: $value,
            lexeme: $lexeme,
            span: $crate::Span {
                start: $start,
                end: $end,
            },
        }
    };
    ($kind:expr, $value:expr, $lexeme:expr, $at:expr) => {{
        let at: $crate::Position = $at;
        $crate::MK_TOKEN!($kind, $value, $lexeme, at.clone(), at)
    }};
}
