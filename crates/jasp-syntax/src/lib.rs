//! Front end for Jasp, a small lisp that compiles to JavaScript.
//!
//! The pipeline is pull-based: [`Tokenizer`] lexes on demand and
//! [`Parser`] consumes tokens one at a time, yielding one top-level form
//! per pull.
//!
//! ```text
//! (def foo [1 2 {:a "b"}])
//! ```
//!
//! Surface syntax: `( )` lists, `[ ]` vectors, `{ }` objects of key/value
//! pairs, `'x` quoting, `:keywords`, identifiers (operators like `+` and
//! `<=` included), numbers, strings and `true`/`false`. Commas are
//! whitespace.

mod ast;
mod error;
mod lexer;
pub mod matcher;
mod parser;
mod span;
mod token;
mod tokenizer;

pub use ast::{Ast, AstKind, List, Obj, Quoted, Vector};
pub use error::{Error, Result};
pub use lexer::{Lexer, State};
pub use matcher::Pattern;
pub use parser::{parse, Parser};
pub use span::{SourceItem, Span};
pub use token::{Bool, Delim, Identifier, Keyword, Num, Str, Token};
pub use tokenizer::{tokenize, LexState, Tokenizer};
