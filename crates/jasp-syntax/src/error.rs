//! Errors raised anywhere in the pipeline.

use thiserror::Error;

use crate::span::Span;

/// Everything that can go wrong between source text and IR.
///
/// Every error is terminal for the compilation unit it came from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The lexer hit a character that cannot start any token.
    #[error("{span}: invalid character {found:?}")]
    InvalidCharacter { found: String, span: Span },

    /// An identifier or keyword was not followed by a separator.
    #[error("{span}: invalid {kind}")]
    InvalidToken { kind: &'static str, span: Span },

    /// A token, or a form, that cannot appear where it was found.
    #[error("{span}: {message}")]
    UnexpectedToken { message: String, span: Span },

    /// The input ended inside a string, list, vector, object or quote.
    #[error("{span}: {message}")]
    UnexpectedEndOfInput { message: String, span: Span },
}

impl Error {
    pub fn invalid_character(found: impl Into<String>, span: Span) -> Self {
        Error::InvalidCharacter {
            found: found.into(),
            span,
        }
    }

    pub fn unexpected_token(message: impl Into<String>, span: Span) -> Self {
        Error::UnexpectedToken {
            message: message.into(),
            span,
        }
    }

    pub fn unexpected_end(message: impl Into<String>, span: Span) -> Self {
        Error::UnexpectedEndOfInput {
            message: message.into(),
            span,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Error::InvalidCharacter { span, .. }
            | Error::InvalidToken { span, .. }
            | Error::UnexpectedToken { span, .. }
            | Error::UnexpectedEndOfInput { span, .. } => *span,
        }
    }

    /// The message without the span prefix.
    pub fn message(&self) -> String {
        match self {
            Error::InvalidCharacter { found, .. } => format!("invalid character {found:?}"),
            Error::InvalidToken { kind, .. } => format!("invalid {kind}"),
            Error::UnexpectedToken { message, .. } | Error::UnexpectedEndOfInput { message, .. } => {
                message.clone()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
