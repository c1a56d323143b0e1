use crate::{
    ast::ast::Node,
    errors::errors::Error,
    lexer::tokens::{TokenKind, TokenSource},
};

use super::{
    expr::{parse_expr, parse_name},
    parser::Parser,
};

/// `block -> '{' decl* statement* '}'`
///
/// Each list runs while the current token starts another item of that list,
/// so neither loop ever consumes a token it cannot finish with.
pub fn parse_block<S: TokenSource>(parser: &mut Parser<S>) -> Result<Node, Error> {
    parser.expect(TokenKind::OpenCurly)?;

    let mut items = Vec::new();

    while let Some(decl_fn) = parser
        .get_decl_lookup()
        .get(&parser.current_token_kind())
        .copied()
    {
        items.push(decl_fn(parser)?);
    }

    while parser
        .get_stmt_lookup()
        .contains_key(&parser.current_token_kind())
    {
        items.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(Node::Block { items })
}

/// `decl -> type name | type name formals block`
pub fn parse_decl<S: TokenSource>(parser: &mut Parser<S>) -> Result<Node, Error> {
    let ty = parse_type(parser)?;
    let name = parse_name(parser)?;

    if parser.current_token_kind() != TokenKind::OpenParen {
        return Ok(Node::Decl {
            ty: Box::new(ty),
            name: Box::new(name),
        });
    }

    let formals = parse_formals(parser)?;
    let body = parse_block(parser)?;

    Ok(Node::FunctionDecl {
        ty: Box::new(ty),
        name: Box::new(name),
        formals: Box::new(formals),
        body: Box::new(body),
    })
}

/// `type -> 'int' | 'boolean'`
pub fn parse_type<S: TokenSource>(parser: &mut Parser<S>) -> Result<Node, Error> {
    if parser.current_token_kind() == TokenKind::Int {
        parser.advance()?;
        return Ok(Node::IntType);
    }

    parser.expect(TokenKind::Boolean)?;
    Ok(Node::BoolType)
}

/// `formals -> '(' (decl (',' decl)*)? ')'`
pub fn parse_formals<S: TokenSource>(parser: &mut Parser<S>) -> Result<Node, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let mut decls = Vec::new();
    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            decls.push(parse_decl(parser)?);

            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance()?;
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    Ok(Node::Formals { decls })
}

/// Parses one statement, dispatching on its leading token.
///
/// Anything without a registered handler must be an assignment, so the
/// error then reports the missing identifier.
pub fn parse_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<Node, Error> {
    let stmt_fn = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();

    match stmt_fn {
        Some(stmt_fn) => stmt_fn(parser),
        None => parse_assign_stmt(parser),
    }
}

/// `'if' expr 'then' block 'else' block`
pub fn parse_if_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<Node, Error> {
    parser.expect(TokenKind::If)?;

    let condition = parse_expr(parser)?;
    parser.expect(TokenKind::Then)?;
    let then_block = parse_block(parser)?;
    parser.expect(TokenKind::Else)?;
    let else_block = parse_block(parser)?;

    Ok(Node::If {
        condition: Box::new(condition),
        then_block: Box::new(then_block),
        else_block: Box::new(else_block),
    })
}

/// `'while' expr block`
pub fn parse_while_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<Node, Error> {
    parser.expect(TokenKind::While)?;

    let condition = parse_expr(parser)?;
    let body = parse_block(parser)?;

    Ok(Node::While {
        condition: Box::new(condition),
        body: Box::new(body),
    })
}

/// `'return' expr`
pub fn parse_return_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<Node, Error> {
    parser.expect(TokenKind::Return)?;

    let value = parse_expr(parser)?;

    Ok(Node::Return {
        value: Box::new(value),
    })
}

/// `name '=' expr`
pub fn parse_assign_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<Node, Error> {
    let target = parse_name(parser)?;
    parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser)?;

    Ok(Node::Assign {
        target: Box::new(target),
        value: Box::new(value),
    })
}
