//! Statement nodes.

use serde::Serialize;

use crate::expression::{Expression, Identifier, Pattern};

/// A statement node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Statement {
    VariableDeclaration(VariableDeclaration),
    Program(Program),
    ExpressionStatement(ExpressionStatement),
    BlockStatement(BlockStatement),
    ReturnStatement(ReturnStatement),
    IfStatement(IfStatement),
}

/// Either half of the IR. The compiler produces these before deciding
/// whether a form sits in expression or statement position.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Expression(Expression),
    Statement(Statement),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    Const,
    Let,
    Var,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableDeclaration {
    pub kind: VariableKind,
    pub declarations: Vec<VariableDeclarator>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct VariableDeclarator {
    pub id: Pattern,
    pub init: Option<Expression>,
}

impl VariableDeclarator {
    pub fn new(id: Identifier, init: Option<Expression>) -> Self {
        Self {
            id: Pattern::Identifier(id),
            init,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Program {
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpressionStatement {
    pub expression: Expression,
}

/// A `{ ... }` block.
///
/// The body is always flat: a block never directly contains another block,
/// because [`BlockStatement::new`] splices nested block bodies into their
/// parent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BlockStatement {
    body: Vec<Statement>,
}

impl BlockStatement {
    pub fn new(body: impl IntoIterator<Item = Statement>) -> Self {
        let mut flat = Vec::new();
        for stmt in body {
            match stmt {
                Statement::BlockStatement(block) => flat.extend(block.body),
                stmt => flat.push(stmt),
            }
        }
        Self { body: flat }
    }

    pub fn body(&self) -> &[Statement] {
        &self.body
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnStatement {
    pub argument: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IfStatement {
    pub test: Expression,
    pub consequent: Box<Statement>,
    pub alternate: Option<Box<Statement>>,
}

impl IfStatement {
    pub fn new(test: Expression, consequent: Statement, alternate: Option<Statement>) -> Self {
        Self {
            test,
            consequent: Box::new(consequent),
            alternate: alternate.map(Box::new),
        }
    }
}

impl Statement {
    pub fn expression(expression: Expression) -> Self {
        ExpressionStatement { expression }.into()
    }

    pub fn ret(argument: Option<Expression>) -> Self {
        ReturnStatement { argument }.into()
    }

    pub fn block(body: impl IntoIterator<Item = Statement>) -> Self {
        BlockStatement::new(body).into()
    }

    pub fn declare(kind: VariableKind, declarations: Vec<VariableDeclarator>) -> Self {
        VariableDeclaration { kind, declarations }.into()
    }

    pub fn if_else(test: Expression, consequent: Statement, alternate: Option<Statement>) -> Self {
        IfStatement::new(test, consequent, alternate).into()
    }
}

impl Node {
    pub fn is_expression(&self) -> bool {
        matches!(self, Node::Expression(_))
    }

    /// Wraps an expression in an `ExpressionStatement`; statements pass through.
    pub fn into_statement(self) -> Statement {
        match self {
            Node::Expression(expression) => Statement::expression(expression),
            Node::Statement(stmt) => stmt,
        }
    }

    /// Returns the expression, or gives the statement back.
    pub fn into_expression(self) -> Result<Expression, Statement> {
        match self {
            Node::Expression(expression) => Ok(expression),
            Node::Statement(stmt) => Err(stmt),
        }
    }
}

macro_rules! impl_from_node {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Statement {
                fn from(node: $variant) -> Self {
                    Statement::$variant(node)
                }
            }

            impl From<$variant> for Node {
                fn from(node: $variant) -> Self {
                    Node::Statement(Statement::$variant(node))
                }
            }
        )*
    };
}

impl_from_node!(
    VariableDeclaration,
    Program,
    ExpressionStatement,
    BlockStatement,
    ReturnStatement,
    IfStatement,
);

impl From<Expression> for Node {
    fn from(expression: Expression) -> Self {
        Node::Expression(expression)
    }
}

impl From<Statement> for Node {
    fn from(stmt: Statement) -> Self {
        Node::Statement(stmt)
    }
}
