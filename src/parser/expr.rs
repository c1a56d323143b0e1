use crate::{
    ast::ast::Node,
    errors::errors::Error,
    lexer::tokens::{TokenKind, TokenSource},
};

use super::{lookups::BindingPower, parser::Parser};

/// `expr -> simple_expr (relop simple_expr)?`
///
/// Relational operators do not chain: a second one is left for the caller.
pub fn parse_expr<S: TokenSource>(parser: &mut Parser<S>) -> Result<Node, Error> {
    let left = parse_simple_expr(parser)?;

    if parser.current_binding_power() != BindingPower::Relational {
        return Ok(left);
    }

    let operator = parser.advance()?;
    let right = parse_simple_expr(parser)?;

    Ok(Node::RelOp {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    })
}

/// `simple_expr -> term (addop term)*`, folded to the left.
pub fn parse_simple_expr<S: TokenSource>(parser: &mut Parser<S>) -> Result<Node, Error> {
    let mut left = parse_term(parser)?;

    while parser.current_binding_power() == BindingPower::Additive {
        let operator = parser.advance()?;
        let right = parse_term(parser)?;

        left = Node::AddOp {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        };
    }

    Ok(left)
}

/// `term -> factor (multop factor)*`, folded to the left.
pub fn parse_term<S: TokenSource>(parser: &mut Parser<S>) -> Result<Node, Error> {
    let mut left = parse_factor(parser)?;

    while parser.current_binding_power() == BindingPower::Multiplicative {
        let operator = parser.advance()?;
        let right = parse_factor(parser)?;

        left = Node::MultOp {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        };
    }

    Ok(left)
}

/// `factor -> '(' expr ')' | <int> | name | name '(' args ')'`
pub fn parse_factor<S: TokenSource>(parser: &mut Parser<S>) -> Result<Node, Error> {
    let nud_fn = parser
        .get_nud_lookup()
        .get(&parser.current_token_kind())
        .copied();

    match nud_fn {
        Some(nud_fn) => nud_fn(parser),
        // Not an atom; report it against the identifier a name would need.
        None => parse_name(parser),
    }
}

pub fn parse_grouping_expr<S: TokenSource>(parser: &mut Parser<S>) -> Result<Node, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let expr = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_int_expr<S: TokenSource>(parser: &mut Parser<S>) -> Result<Node, Error> {
    let token = parser.expect(TokenKind::Integer)?;

    Ok(Node::Int { token })
}

pub fn parse_name_or_call_expr<S: TokenSource>(parser: &mut Parser<S>) -> Result<Node, Error> {
    let callee = parse_name(parser)?;

    if parser.current_token_kind() != TokenKind::OpenParen {
        return Ok(callee);
    }
    parser.advance()?;

    let mut arguments = Vec::new();
    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            arguments.push(parse_expr(parser)?);

            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance()?;
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    Ok(Node::Call {
        callee: Box::new(callee),
        arguments,
    })
}

/// `name -> <id>`
pub fn parse_name<S: TokenSource>(parser: &mut Parser<S>) -> Result<Node, Error> {
    let token = parser.expect(TokenKind::Identifier)?;

    Ok(Node::Id { token })
}
