//! Jasp's lexical grammar, expressed as states of the generic [`Lexer`].

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::lexer::{Lexer, State};
use crate::span::Span;
use crate::token::Token;

/// Operator spellings lexed as identifiers, longest first where they overlap.
const OPERATORS: [&str; 12] = ["**", "<=", ">=", "==", "<", ">", "*", "+", "-", "/", "%", "="];

fn single_token(c: char) -> Option<fn(Span) -> Token> {
    let make: fn(Span) -> Token = match c {
        '(' => Token::LParen,
        ')' => Token::RParen,
        '[' => Token::LBracket,
        ']' => Token::RBracket,
        '{' => Token::LBrace,
        '}' => Token::RBrace,
        '\'' => Token::Quote,
        _ => return None,
    };
    Some(make)
}

fn is_separator(c: Option<char>) -> bool {
    match c {
        None => true,
        Some(c) => c.is_whitespace() || matches!(c, '(' | ')' | '[' | ']' | '{' | '}' | ',' | '"'),
    }
}

/// Identifiers start with a letter, `$` or `_` and continue with letters,
/// marks, decimal digits, connector punctuation, ZWNJ and ZWJ.
static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[$_\p{L}][$_\p{L}\p{Mn}\p{Mc}\p{Nd}\p{Pc}\x{200C}\x{200D}]*")
        .expect("identifier pattern is valid")
});

fn whitespace_len(s: &str) -> usize {
    s.len() - s.trim_start_matches(|c: char| c == ',' || c.is_whitespace()).len()
}

/// `[-+]?\d+(\.\d*)?`
fn number_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let digits = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut len = usize::from(matches!(bytes.first(), Some(b'-' | b'+')));
    let integer = digits(len);
    if integer == 0 {
        return 0;
    }
    len += integer;
    if bytes.get(len) == Some(&b'.') {
        len += 1;
        len += digits(len);
    }
    len
}

fn operator_len(s: &str) -> usize {
    OPERATORS
        .iter()
        .find(|op| s.starts_with(**op))
        .map_or(0, |op| op.len())
}

fn identifier_len(s: &str) -> usize {
    IDENTIFIER.find(s).map_or(0, |m| m.end())
}

/// The states of Jasp's lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexState {
    Body,
    Str,
    Identifier,
    Keyword,
}

impl State for LexState {
    type Token = Token;

    fn step(self, lexer: &mut Lexer<'_, Self>) -> Result<Option<Self>> {
        match self {
            LexState::Body => lex_body(lexer),
            LexState::Str => lex_string(lexer),
            LexState::Identifier => lex_identifier(lexer, false),
            LexState::Keyword => lex_identifier(lexer, true),
        }
    }
}

fn lex_body(lexer: &mut Lexer<'_, LexState>) -> Result<Option<LexState>> {
    lexer.ignore_match(whitespace_len);

    if lexer.accept_match(number_len) {
        if is_separator(lexer.peek()) {
            lexer.emit(Token::num);
            return Ok(Some(LexState::Body));
        }
        lexer.rewind();
    }

    if lexer.accept_match(operator_len) {
        if is_separator(lexer.peek()) {
            lexer.emit(Token::identifier);
            return Ok(Some(LexState::Body));
        }
        lexer.rewind();
    }

    if identifier_len(lexer.remaining()) > 0 {
        return Ok(Some(LexState::Identifier));
    }

    let Some(c) = lexer.accept() else {
        return Ok(None);
    };
    if let Some(make) = single_token(c) {
        lexer.emit(|span, _| make(span));
        return Ok(Some(LexState::Body));
    }
    match c {
        '"' => {
            lexer.ignore();
            Ok(Some(LexState::Str))
        }
        ':' => {
            lexer.ignore();
            Ok(Some(LexState::Keyword))
        }
        c => Err(Error::invalid_character(c, lexer.span())),
    }
}

fn lex_string(lexer: &mut Lexer<'_, LexState>) -> Result<Option<LexState>> {
    match lexer.accept() {
        None => Err(Error::unexpected_end("unterminated string constant", lexer.span())),
        Some('"') => {
            lexer.backup();
            lexer.emit(Token::str);
            lexer.accept();
            lexer.ignore();
            Ok(Some(LexState::Body))
        }
        Some('\\') => {
            lexer.accept();
            Ok(Some(LexState::Str))
        }
        Some(_) => Ok(Some(LexState::Str)),
    }
}

fn lex_identifier(lexer: &mut Lexer<'_, LexState>, keyword: bool) -> Result<Option<LexState>> {
    if lexer.accept_match(identifier_len) && is_separator(lexer.peek()) {
        if keyword {
            lexer.emit(Token::keyword);
        } else {
            lexer.emit(|span, name| match name {
                "true" => Token::bool(span, true),
                "false" => Token::bool(span, false),
                name => Token::identifier(span, name),
            });
        }
        return Ok(Some(LexState::Body));
    }

    Err(Error::InvalidToken {
        kind: if keyword { "keyword" } else { "identifier" },
        span: lexer.span(),
    })
}

/// An iterator of Jasp tokens over source text.
pub struct Tokenizer<'src> {
    lexer: Lexer<'src, LexState>,
}

impl<'src> Tokenizer<'src> {
    pub fn new(input: &'src str) -> Self {
        Self {
            lexer: Lexer::new(input, LexState::Body),
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lexer.next()
    }
}

/// Lexes a whole source string.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    Tokenizer::new(source).collect()
}
