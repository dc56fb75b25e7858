//! Structural matching over AST sequences.
//!
//! Matching is positional and exact: no backtracking, no partial matches.
//! Successful matches hand back the matched items with a fixed shape so
//! callers can destructure them directly.

use crate::ast::{Ast, AstKind};

/// Describes one AST element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Matches any node.
    Any,
    /// Matches nodes of one kind.
    Kind(AstKind),
    /// Matches an identifier with exactly this name.
    Name(&'static str),
}

impl Pattern {
    pub const IDENTIFIER: Pattern = Pattern::Kind(AstKind::Identifier);
    pub const VECTOR: Pattern = Pattern::Kind(AstKind::Vector);
}

pub fn is_match(node: &Ast, pattern: &Pattern) -> bool {
    match pattern {
        Pattern::Any => true,
        Pattern::Kind(kind) => node.kind() == *kind,
        Pattern::Name(name) => node.as_identifier().is_some_and(|ident| ident.name == *name),
    }
}

/// Matches `items` against `patterns` pairwise. Lengths must be equal.
pub fn matches<'a, const N: usize>(items: &'a [Ast], patterns: &[Pattern; N]) -> Option<&'a [Ast; N]> {
    let items: &[Ast; N] = items.try_into().ok()?;
    items
        .iter()
        .zip(patterns)
        .all(|(item, pattern)| is_match(item, pattern))
        .then_some(items)
}

/// Matches the first element of a non-empty sequence, returning it with the
/// rest of the sequence.
pub fn head_match<'a>(items: &'a [Ast], pattern: &Pattern) -> Option<(&'a Ast, &'a [Ast])> {
    let (head, rest) = items.split_first()?;
    is_match(head, pattern).then_some((head, rest))
}

/// Whether every element matches the same pattern. True for an empty slice.
pub fn match_every(items: &[Ast], pattern: &Pattern) -> bool {
    items.iter().all(|item| is_match(item, pattern))
}
