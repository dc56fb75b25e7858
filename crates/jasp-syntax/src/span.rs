//! Source positions.

use std::fmt;

use serde::Serialize;

/// A half-open `[start, end)` byte range into the source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The span from the start of `self` to the end of `end`.
    pub fn span_to(self, end: Span) -> Span {
        Span::new(self.start, end.end)
    }

    /// Whether `other` lies entirely within `self`.
    pub fn contains(self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// The slice of `source` this span covers.
    pub fn slice(self, source: &str) -> &str {
        &source[self.start..self.end]
    }

    /// 1-based line and column (in characters) of the span start.
    pub fn location(self, source: &str) -> (usize, usize) {
        let before = &source[..self.start.min(source.len())];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);
        let column = before[line_start..].chars().count() + 1;
        (line, column)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Anything read from source: it knows where it came from and what it is.
pub trait SourceItem {
    fn span(&self) -> Span;

    /// The node or token kind, as used in error messages.
    fn type_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_to() {
        let open = Span::new(0, 1);
        let close = Span::new(7, 8);
        assert_eq!(open.span_to(close), Span::new(0, 8));
        assert!(open.span_to(close).contains(Span::new(2, 5)));
        assert!(!open.contains(close));
    }

    #[test]
    fn test_location() {
        let source = "(def a 1)\n  (def b\n  2)";
        assert_eq!(Span::new(0, 1).location(source), (1, 1));
        assert_eq!(Span::new(12, 13).location(source), (2, 3));
        assert_eq!(Span::new(21, 22).location(source), (3, 3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Span::new(3, 9).to_string(), "3-9");
    }
}
