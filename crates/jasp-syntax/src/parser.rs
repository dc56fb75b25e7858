//! Recursive-descent parser from tokens to AST forms.
//!
//! The parser pulls tokens one at a time and yields one top-level form per
//! pull. It does not recover: the first error ends the parse.

use crate::ast::{Ast, List, Obj, Quoted, Vector};
use crate::error::{Error, Result};
use crate::span::{SourceItem, Span};
use crate::token::{Delim, Token};
use crate::tokenizer::Tokenizer;

pub struct Parser<I> {
    tokens: I,
    /// Span of the most recently pulled token, reported on end of input.
    last: Span,
    failed: bool,
}

impl<I> Parser<I>
where
    I: Iterator<Item = Result<Token>>,
{
    pub fn new(tokens: I) -> Self {
        Self {
            tokens,
            last: Span::default(),
            failed: false,
        }
    }

    /// Parses every remaining top-level form.
    pub fn parse(self) -> Result<Vec<Ast>> {
        self.collect()
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        match self.tokens.next().transpose()? {
            Some(token) => {
                self.last = token.span();
                Ok(Some(token))
            }
            None => Ok(None),
        }
    }

    fn expr(&mut self, token: Token) -> Result<Ast> {
        match token {
            Token::LParen(span) => self.list(span).map(Ast::List),
            Token::LBracket(span) => self.vector(span).map(Ast::Vector),
            Token::LBrace(span) => self.obj(span).map(Ast::Obj),
            Token::Quote(span) => self.quoted(span).map(Ast::Quoted),
            token @ (Token::RParen(_) | Token::RBracket(_) | Token::RBrace(_)) => Err(
                Error::unexpected_token(format!("unexpected token {}", token.type_name()), token.span()),
            ),
            token => Ast::leaf(token).map_err(|token| {
                Error::unexpected_token(format!("unexpected token {}", token.type_name()), token.span())
            }),
        }
    }

    /// Reads items up to the closing delimiter matching `delim`. Returns the
    /// items and the span from `open` through the closing token.
    fn delimited(&mut self, open: Span, delim: Delim, name: &str) -> Result<(Vec<Ast>, Span)> {
        let mut items = Vec::new();
        while let Some(token) = self.next_token()? {
            match token.closing() {
                Some(closing) if closing == delim => return Ok((items, open.span_to(token.span()))),
                Some(_) => {
                    return Err(Error::unexpected_token(
                        format!("invalid {name}: unexpected token {}", token.type_name()),
                        token.span(),
                    ));
                }
                None => items.push(self.expr(token)?),
            }
        }
        Err(Error::unexpected_end(format!("unexpected end of {name}"), self.last))
    }

    fn list(&mut self, open: Span) -> Result<List> {
        let (items, span) = self.delimited(open, Delim::Paren, "list")?;
        Ok(List { span, items })
    }

    fn vector(&mut self, open: Span) -> Result<Vector> {
        let (items, span) = self.delimited(open, Delim::Bracket, "vector")?;
        Ok(Vector { span, items })
    }

    fn obj(&mut self, open: Span) -> Result<Obj> {
        let (items, span) = self.delimited(open, Delim::Brace, "object")?;
        // `span` ends at the closing brace.
        let close = Span::new(span.end - 1, span.end);
        Obj::from_flat(span, items)
            .ok_or_else(|| Error::unexpected_token("missing object property value", close))
    }

    fn quoted(&mut self, quote: Span) -> Result<Quoted> {
        let Some(token) = self.next_token()? else {
            return Err(Error::unexpected_end("missing quoted item", quote));
        };
        let item = self.expr(token)?;
        Ok(Quoted {
            span: quote.span_to(item.span()),
            item: Box::new(item),
        })
    }
}

impl<I> Iterator for Parser<I>
where
    I: Iterator<Item = Result<Token>>,
{
    type Item = Result<Ast>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let result = match self.next_token() {
            Ok(Some(token)) => self.expr(token),
            Ok(None) => return None,
            Err(err) => Err(err),
        };
        self.failed = result.is_err();
        Some(result)
    }
}

/// Tokenizes and parses a whole source string.
pub fn parse(source: &str) -> Result<Vec<Ast>> {
    Parser::new(Tokenizer::new(source)).parse()
}
