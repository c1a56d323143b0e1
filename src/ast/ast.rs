use std::fmt::Display;

use crate::lexer::{
    symbols::Symbol,
    tokens::{Lexeme, Token},
};

/// Node Kinds
///
/// The closed set of tags a [`Node`] can carry.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum NodeKind {
    Program,
    Block,
    Decl,
    FunctionDecl,
    Formals,
    If,
    While,
    Return,
    Assign,
    Call,
    RelOp,
    AddOp,
    MultOp,
    Id,
    Int,
    IntType,
    BoolType,
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A syntax tree node.
///
/// Each variant holds exactly the children its grammar rule produces, in
/// source order. Leaf variants keep the token they were built from; the
/// operator variants keep their operator token.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Program {
        block: Box<Node>,
    },
    Block {
        items: Vec<Node>,
    },
    Decl {
        ty: Box<Node>,
        name: Box<Node>,
    },
    FunctionDecl {
        ty: Box<Node>,
        name: Box<Node>,
        formals: Box<Node>,
        body: Box<Node>,
    },
    Formals {
        decls: Vec<Node>,
    },
    If {
        condition: Box<Node>,
        then_block: Box<Node>,
        else_block: Box<Node>,
    },
    While {
        condition: Box<Node>,
        body: Box<Node>,
    },
    Return {
        value: Box<Node>,
    },
    Assign {
        target: Box<Node>,
        value: Box<Node>,
    },
    Call {
        callee: Box<Node>,
        arguments: Vec<Node>,
    },
    RelOp {
        operator: Token,
        left: Box<Node>,
        right: Box<Node>,
    },
    AddOp {
        operator: Token,
        left: Box<Node>,
        right: Box<Node>,
    },
    MultOp {
        operator: Token,
        left: Box<Node>,
        right: Box<Node>,
    },
    Id {
        token: Token,
    },
    Int {
        token: Token,
    },
    IntType,
    BoolType,
}

impl Node {
    pub fn get_kind(&self) -> NodeKind {
        match self {
            Node::Program { .. } => NodeKind::Program,
            Node::Block { .. } => NodeKind::Block,
            Node::Decl { .. } => NodeKind::Decl,
            Node::FunctionDecl { .. } => NodeKind::FunctionDecl,
            Node::Formals { .. } => NodeKind::Formals,
            Node::If { .. } => NodeKind::If,
            Node::While { .. } => NodeKind::While,
            Node::Return { .. } => NodeKind::Return,
            Node::Assign { .. } => NodeKind::Assign,
            Node::Call { .. } => NodeKind::Call,
            Node::RelOp { .. } => NodeKind::RelOp,
            Node::AddOp { .. } => NodeKind::AddOp,
            Node::MultOp { .. } => NodeKind::MultOp,
            Node::Id { .. } => NodeKind::Id,
            Node::Int { .. } => NodeKind::Int,
            Node::IntType => NodeKind::IntType,
            Node::BoolType => NodeKind::BoolType,
        }
    }

    /// Returns the children in grammar order.
    ///
    /// A call lists its callee first, then its arguments.
    pub fn get_children(&self) -> Vec<&Node> {
        match self {
            Node::Program { block } => vec![block.as_ref()],
            Node::Block { items } => items.iter().collect(),
            Node::Decl { ty, name } => vec![ty.as_ref(), name.as_ref()],
            Node::FunctionDecl {
                ty,
                name,
                formals,
                body,
            } => vec![ty.as_ref(), name.as_ref(), formals.as_ref(), body.as_ref()],
            Node::Formals { decls } => decls.iter().collect(),
            Node::If {
                condition,
                then_block,
                else_block,
            } => vec![condition.as_ref(), then_block.as_ref(), else_block.as_ref()],
            Node::While { condition, body } => vec![condition.as_ref(), body.as_ref()],
            Node::Return { value } => vec![value.as_ref()],
            Node::Assign { target, value } => vec![target.as_ref(), value.as_ref()],
            Node::Call { callee, arguments } => {
                let mut children = vec![callee.as_ref()];
                children.extend(arguments.iter());
                children
            }
            Node::RelOp { left, right, .. }
            | Node::AddOp { left, right, .. }
            | Node::MultOp { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            Node::Id { .. } | Node::Int { .. } | Node::IntType | Node::BoolType => vec![],
        }
    }

    pub fn get_child(&self, index: usize) -> Option<&Node> {
        self.get_children().get(index).copied()
    }

    pub fn child_count(&self) -> usize {
        self.get_children().len()
    }

    /// The token a leaf or operator node was built from.
    pub fn get_token(&self) -> Option<&Token> {
        match self {
            Node::Id { token } | Node::Int { token } => Some(token),
            Node::RelOp { operator, .. }
            | Node::AddOp { operator, .. }
            | Node::MultOp { operator, .. } => Some(operator),
            _ => None,
        }
    }

    pub fn get_symbol(&self) -> Option<Symbol> {
        match self {
            Node::Id { token } => token.get_symbol(),
            _ => None,
        }
    }

    pub fn get_int_value(&self) -> Option<i64> {
        match self {
            Node::Int { token } => match token.lexeme {
                Lexeme::Integer(value) => Some(value),
                _ => None,
            },
            _ => None,
        }
    }
}
