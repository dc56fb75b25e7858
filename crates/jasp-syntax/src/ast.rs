//! The source AST.
//!
//! Compound nodes own their children and a span covering their delimiters.
//! Leaves are the literal, identifier and keyword tokens themselves.

use serde::Serialize;

use crate::span::{SourceItem, Span};
use crate::token::{Bool, Identifier, Keyword, Num, Str, Token};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Ast {
    Bool(Bool),
    Num(Num),
    Str(Str),
    Identifier(Identifier),
    Keyword(Keyword),
    List(List),
    Vector(Vector),
    Obj(Obj),
    Quoted(Quoted),
}

/// `( ... )`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct List {
    pub span: Span,
    pub items: Vec<Ast>,
}

/// `[ ... ]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vector {
    pub span: Span,
    pub items: Vec<Ast>,
}

/// `{ key value ... }`, kept in source order. Duplicate keys are preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Obj {
    pub span: Span,
    pub items: Vec<(Ast, Ast)>,
}

impl Obj {
    /// Pairs up a flat item list; `None` if it has an odd length.
    pub fn from_flat(span: Span, items: Vec<Ast>) -> Option<Self> {
        if items.len() % 2 != 0 {
            return None;
        }
        let mut iter = items.into_iter();
        let mut pairs = Vec::with_capacity(iter.len() / 2);
        while let (Some(key), Some(value)) = (iter.next(), iter.next()) {
            pairs.push((key, value));
        }
        Some(Self { span, items: pairs })
    }
}

/// `'item`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quoted {
    pub span: Span,
    pub item: Box<Ast>,
}

/// The node kinds, for matching on shape alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AstKind {
    Bool,
    Num,
    Str,
    Identifier,
    Keyword,
    List,
    Vector,
    Obj,
    Quoted,
}

impl Ast {
    pub fn kind(&self) -> AstKind {
        match self {
            Ast::Bool(_) => AstKind::Bool,
            Ast::Num(_) => AstKind::Num,
            Ast::Str(_) => AstKind::Str,
            Ast::Identifier(_) => AstKind::Identifier,
            Ast::Keyword(_) => AstKind::Keyword,
            Ast::List(_) => AstKind::List,
            Ast::Vector(_) => AstKind::Vector,
            Ast::Obj(_) => AstKind::Obj,
            Ast::Quoted(_) => AstKind::Quoted,
        }
    }

    /// Converts a value-carrying token into a leaf; delimiters and quotes
    /// come back as `Err`.
    pub fn leaf(token: Token) -> Result<Self, Token> {
        match token {
            Token::Bool(token) => Ok(Ast::Bool(token)),
            Token::Num(token) => Ok(Ast::Num(token)),
            Token::Str(token) => Ok(Ast::Str(token)),
            Token::Identifier(token) => Ok(Ast::Identifier(token)),
            Token::Keyword(token) => Ok(Ast::Keyword(token)),
            token => Err(token),
        }
    }

    pub fn as_identifier(&self) -> Option<&Identifier> {
        match self {
            Ast::Identifier(ident) => Some(ident),
            _ => None,
        }
    }

    /// Direct children, in source order.
    pub fn children(&self) -> Vec<&Ast> {
        match self {
            Ast::List(List { items, .. }) | Ast::Vector(Vector { items, .. }) => items.iter().collect(),
            Ast::Obj(obj) => obj.items.iter().flat_map(|(key, value)| [key, value]).collect(),
            Ast::Quoted(quoted) => vec![&*quoted.item],
            Ast::Bool(_) | Ast::Num(_) | Ast::Str(_) | Ast::Identifier(_) | Ast::Keyword(_) => Vec::new(),
        }
    }
}

impl SourceItem for Ast {
    fn span(&self) -> Span {
        match self {
            Ast::Bool(node) => node.span,
            Ast::Num(node) => node.span,
            Ast::Str(node) => node.span,
            Ast::Identifier(node) => node.span,
            Ast::Keyword(node) => node.span,
            Ast::List(node) => node.span,
            Ast::Vector(node) => node.span,
            Ast::Obj(node) => node.span,
            Ast::Quoted(node) => node.span,
        }
    }

    fn type_name(&self) -> &'static str {
        match self.kind() {
            AstKind::Bool => "Bool",
            AstKind::Num => "Num",
            AstKind::Str => "Str",
            AstKind::Identifier => "Identifier",
            AstKind::Keyword => "Keyword",
            AstKind::List => "List",
            AstKind::Vector => "Vector",
            AstKind::Obj => "Obj",
            AstKind::Quoted => "Quoted",
        }
    }
}
