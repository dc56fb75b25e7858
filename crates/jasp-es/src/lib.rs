//! ESTree-shaped target IR for Jasp.
//!
//! This crate models the subset of JavaScript syntax the compiler emits.
//! Nodes are purely structural: they carry no source positions, and they
//! serialize to ESTree JSON (every node tagged by its `"type"`) so an
//! external printer can turn them into source text.
//!
//! Example:
//! ```json
//! {"type": "VariableDeclaration", "kind": "const", "declarations": [
//!   {"type": "VariableDeclarator",
//!    "id": {"type": "Identifier", "name": "foo"},
//!    "init": {"type": "Literal", "value": 12.0}}
//! ]}
//! ```

mod expression;
mod returning;
mod statement;

pub use expression::{
    ArrayExpression, BinaryExpression, BinaryOperator, CallExpression, Expression,
    FunctionExpression, Identifier, Literal, LiteralValue, LogicalExpression, LogicalOperator,
    MemberExpression, NewExpression, Pattern, SequenceExpression, UnaryExpression, UnaryOperator,
};
pub use statement::{
    BlockStatement, ExpressionStatement, IfStatement, Node, Program, ReturnStatement, Statement,
    VariableDeclaration, VariableDeclarator, VariableKind,
};

#[cfg(test)]
mod tests;
