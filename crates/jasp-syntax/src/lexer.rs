//! A generic, pull-based scanner driven by a state machine.
//!
//! The scanner keeps a pending lexeme `[start, end)` and a queue of emitted
//! tokens. Each state performs one lexical decision and names the state to
//! run next; returning `None` ends the input. Nothing is lexed until a token
//! is pulled, and each pull runs states only until one token is queued.

use std::collections::VecDeque;

use crate::error::Result;
use crate::span::Span;

/// A state of the lexer's state machine.
pub trait State: Copy {
    type Token;

    /// Runs one lexical decision and returns the next state, or `None` once
    /// the input is exhausted.
    fn step(self, lexer: &mut Lexer<'_, Self>) -> Result<Option<Self>>;
}

pub struct Lexer<'src, S: State> {
    input: &'src str,
    start: usize,
    end: usize,
    width: usize,
    tokens: VecDeque<S::Token>,
    state: Option<S>,
}

impl<'src, S: State> Lexer<'src, S> {
    pub fn new(input: &'src str, state: S) -> Self {
        Self {
            input,
            start: 0,
            end: 0,
            width: 0,
            tokens: VecDeque::new(),
            state: Some(state),
        }
    }

    /// Everything after the pending lexeme.
    pub fn remaining(&self) -> &'src str {
        &self.input[self.end..]
    }

    /// The span of the pending lexeme.
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    /// Consumes one character; `None` at end of input.
    pub fn accept(&mut self) -> Option<char> {
        let c = self.remaining().chars().next();
        self.width = c.map_or(0, char::len_utf8);
        self.end += self.width;
        c
    }

    /// Undoes the last `accept`. Only one step of backup is remembered.
    pub fn backup(&mut self) {
        self.end -= self.width;
        self.width = 0;
    }

    pub fn peek(&mut self) -> Option<char> {
        let c = self.accept();
        self.backup();
        c
    }

    /// Discards the pending lexeme.
    pub fn ignore(&mut self) {
        self.start = self.end;
    }

    /// Drops whatever was accepted since the last emit or ignore.
    pub fn rewind(&mut self) {
        self.end = self.start;
        self.width = 0;
    }

    /// Advances past a lexeme matched at the current position. `pattern`
    /// returns the byte length of its match, zero meaning no match.
    pub fn accept_match(&mut self, pattern: impl FnOnce(&str) -> usize) -> bool {
        let len = pattern(self.remaining());
        if len == 0 {
            return false;
        }
        self.width = len;
        self.end += len;
        true
    }

    pub fn ignore_match(&mut self, pattern: impl FnOnce(&str) -> usize) -> bool {
        if self.accept_match(pattern) {
            self.ignore();
            true
        } else {
            false
        }
    }

    /// Turns the pending lexeme into a token and queues it.
    pub fn emit(&mut self, make: impl FnOnce(Span, &'src str) -> S::Token) {
        let span = self.span();
        let slice = &self.input[self.start..self.end];
        self.ignore();
        self.tokens.push_back(make(span, slice));
    }
}

impl<S: State> Iterator for Lexer<'_, S> {
    type Item = Result<S::Token>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.tokens.pop_front() {
                return Some(Ok(token));
            }
            // An error leaves `state` empty, so the lexer is fused after it.
            let state = self.state.take()?;
            match state.step(self) {
                Ok(next) => self.state = next,
                Err(err) => return Some(Err(err)),
            }
        }
    }
}
