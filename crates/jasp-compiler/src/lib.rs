//! Jasp to JavaScript IR compiler.
//!
//! Takes the forms produced by [`jasp_syntax`] and lowers them to the
//! ESTree-shaped IR in [`jasp_es`]. Four names are special forms:
//!
//! - `(def name value)` declares a `const`.
//! - `(let [a 1 b 2] body)` is a block of `const` bindings followed by `body`.
//! - `(fn [a b] body)` is a function expression returning `body`.
//! - `(if test then else?)` is an `if` statement.
//!
//! Every other list is a call.

mod compiler;

pub use compiler::Compiler;

use jasp_es::Program;
use jasp_syntax::Result;

/// Parses and compiles a whole source string.
pub fn compile(source: &str) -> Result<Program> {
    let forms = jasp_syntax::parse(source)?;
    Compiler::new().compile(&forms)
}
