//! Tokens produced by the tokenizer.
//!
//! Literal, identifier and keyword tokens double as AST leaves, so each of
//! them knows the IR leaf it compiles to.

use jasp_es::Expression;
use serde::Serialize;

use crate::span::{SourceItem, Span};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bool {
    pub span: Span,
    pub value: bool,
}

impl Bool {
    pub fn estree(&self) -> Expression {
        Expression::bool(self.value)
    }
}

/// A numeric literal, kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Num {
    pub span: Span,
    pub number: String,
}

impl Num {
    pub fn value(&self) -> f64 {
        // The tokenizer only emits `[-+]?\d+(\.\d*)?`, which always parses.
        self.number.parse().unwrap_or(f64::NAN)
    }

    pub fn estree(&self) -> Expression {
        Expression::number(self.value())
    }
}

/// A string literal with its escapes already resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Str {
    pub span: Span,
    pub string: String,
}

impl Str {
    /// Builds the token from the raw text between the quotes.
    pub fn from_raw(span: Span, raw: &str) -> Self {
        let mut string = String::with_capacity(raw.len());
        let mut chars = raw.chars();
        while let Some(c) = chars.next() {
            if c != '\\' {
                string.push(c);
                continue;
            }
            match chars.next() {
                Some('n') => string.push('\n'),
                Some('t') => string.push('\t'),
                Some('r') => string.push('\r'),
                Some('0') => string.push('\0'),
                Some(other) => string.push(other),
                None => {}
            }
        }
        Self { span, string }
    }

    pub fn estree(&self) -> Expression {
        Expression::string(self.string.clone())
    }
}

/// An identifier. Operators such as `+` and `<=` are identifiers too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identifier {
    pub span: Span,
    pub name: String,
}

impl Identifier {
    pub fn estree(&self) -> jasp_es::Identifier {
        jasp_es::Identifier::new(self.name.clone())
    }
}

/// A `:keyword`; the name excludes the colon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Keyword {
    pub span: Span,
    pub name: String,
}

impl Keyword {
    pub fn estree(&self) -> Expression {
        Expression::string(self.name.clone())
    }
}

/// The kind of a bracket pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delim {
    Paren,
    Bracket,
    Brace,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Token {
    LParen(Span),
    RParen(Span),
    LBracket(Span),
    RBracket(Span),
    LBrace(Span),
    RBrace(Span),
    Quote(Span),
    Bool(Bool),
    Num(Num),
    Str(Str),
    Identifier(Identifier),
    Keyword(Keyword),
}

impl Token {
    /// The bracket kind, if this token closes one.
    pub fn closing(&self) -> Option<Delim> {
        match self {
            Token::RParen(_) => Some(Delim::Paren),
            Token::RBracket(_) => Some(Delim::Bracket),
            Token::RBrace(_) => Some(Delim::Brace),
            _ => None,
        }
    }

    pub fn identifier(span: Span, name: &str) -> Self {
        Token::Identifier(Identifier {
            span,
            name: name.to_string(),
        })
    }

    pub fn keyword(span: Span, name: &str) -> Self {
        Token::Keyword(Keyword {
            span,
            name: name.to_string(),
        })
    }

    pub fn num(span: Span, number: &str) -> Self {
        Token::Num(Num {
            span,
            number: number.to_string(),
        })
    }

    pub fn str(span: Span, raw: &str) -> Self {
        Token::Str(Str::from_raw(span, raw))
    }

    pub fn bool(span: Span, value: bool) -> Self {
        Token::Bool(Bool { span, value })
    }
}

impl SourceItem for Token {
    fn span(&self) -> Span {
        match self {
            Token::LParen(span)
            | Token::RParen(span)
            | Token::LBracket(span)
            | Token::RBracket(span)
            | Token::LBrace(span)
            | Token::RBrace(span)
            | Token::Quote(span) => *span,
            Token::Bool(token) => token.span,
            Token::Num(token) => token.span,
            Token::Str(token) => token.span,
            Token::Identifier(token) => token.span,
            Token::Keyword(token) => token.span,
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            Token::LParen(_) => "LParen",
            Token::RParen(_) => "RParen",
            Token::LBracket(_) => "LBracket",
            Token::RBracket(_) => "RBracket",
            Token::LBrace(_) => "LBrace",
            Token::RBrace(_) => "RBrace",
            Token::Quote(_) => "Quote",
            Token::Bool(_) => "Bool",
            Token::Num(_) => "Num",
            Token::Str(_) => "Str",
            Token::Identifier(_) => "Identifier",
            Token::Keyword(_) => "Keyword",
        }
    }
}
