//! Expression and pattern nodes.

use serde::{Serialize, Serializer};

use crate::statement::{BlockStatement, Statement};

/// An expression node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Expression {
    Identifier(Identifier),
    Literal(Literal),
    UnaryExpression(UnaryExpression),
    BinaryExpression(BinaryExpression),
    LogicalExpression(LogicalExpression),
    ArrayExpression(ArrayExpression),
    MemberExpression(MemberExpression),
    CallExpression(CallExpression),
    NewExpression(NewExpression),
    SequenceExpression(SequenceExpression),
    FunctionExpression(FunctionExpression),
}

/// A binding target. Only plain identifiers are emitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Pattern {
    Identifier(Identifier),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Literal {
    pub value: LiteralValue,
}

/// The value of a [`Literal`], serialized as a bare JSON value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LiteralValue {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UnaryOperator {
    #[serde(rename = "-")]
    Minus,
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "!")]
    Not,
    #[serde(rename = "~")]
    BitNot,
    #[serde(rename = "typeof")]
    Typeof,
    #[serde(rename = "void")]
    Void,
    #[serde(rename = "delete")]
    Delete,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnaryExpression {
    pub operator: UnaryOperator,
    pub prefix: bool,
    pub argument: Box<Expression>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOperator {
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    NotEq,
    #[serde(rename = "===")]
    StrictEq,
    #[serde(rename = "!==")]
    StrictNotEq,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    LtEq,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    GtEq,
    #[serde(rename = "<<")]
    Shl,
    #[serde(rename = ">>")]
    Shr,
    #[serde(rename = ">>>")]
    UShr,
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
    #[serde(rename = "%")]
    Rem,
    #[serde(rename = "|")]
    BitOr,
    #[serde(rename = "^")]
    BitXor,
    #[serde(rename = "&")]
    BitAnd,
    #[serde(rename = "in")]
    In,
    #[serde(rename = "instanceof")]
    Instanceof,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinaryExpression {
    pub operator: BinaryOperator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LogicalOperator {
    #[serde(rename = "&&")]
    And,
    #[serde(rename = "||")]
    Or,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogicalExpression {
    pub operator: LogicalOperator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ArrayExpression {
    pub elements: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberExpression {
    pub object: Box<Expression>,
    pub property: Box<Expression>,
    pub computed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallExpression {
    pub callee: Box<Expression>,
    pub arguments: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewExpression {
    pub callee: Box<Expression>,
    pub arguments: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceExpression {
    pub expressions: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionExpression {
    pub id: Option<Pattern>,
    pub params: Vec<Pattern>,
    #[serde(serialize_with = "serialize_block")]
    pub body: BlockStatement,
}

/// Function bodies are bare blocks in Rust but still need their ESTree tag.
fn serialize_block<S: Serializer>(block: &BlockStatement, serializer: S) -> Result<S::Ok, S::Error> {
    #[derive(Serialize)]
    #[serde(tag = "type")]
    enum Tagged<'a> {
        BlockStatement { body: &'a [Statement] },
    }

    Tagged::BlockStatement { body: block.body() }.serialize(serializer)
}

impl Expression {
    pub fn identifier(name: impl Into<String>) -> Self {
        Identifier::new(name).into()
    }

    pub fn literal(value: LiteralValue) -> Self {
        Literal { value }.into()
    }

    pub fn null() -> Self {
        Self::literal(LiteralValue::Null)
    }

    pub fn bool(value: bool) -> Self {
        Self::literal(LiteralValue::Boolean(value))
    }

    pub fn number(value: impl Into<f64>) -> Self {
        Self::literal(LiteralValue::Number(value.into()))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::literal(LiteralValue::String(value.into()))
    }

    pub fn array(elements: Vec<Expression>) -> Self {
        ArrayExpression { elements }.into()
    }

    pub fn unary(operator: UnaryOperator, argument: Expression) -> Self {
        UnaryExpression {
            operator,
            prefix: true,
            argument: Box::new(argument),
        }
        .into()
    }

    pub fn binary(operator: BinaryOperator, left: Expression, right: Expression) -> Self {
        BinaryExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
        .into()
    }

    pub fn logical(operator: LogicalOperator, left: Expression, right: Expression) -> Self {
        LogicalExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
        .into()
    }

    /// `object.property`, or `object[property]` when `computed`.
    pub fn member(object: Expression, property: Expression, computed: bool) -> Self {
        MemberExpression {
            object: Box::new(object),
            property: Box::new(property),
            computed,
        }
        .into()
    }

    pub fn call(callee: Expression, arguments: Vec<Expression>) -> Self {
        CallExpression {
            callee: Box::new(callee),
            arguments,
        }
        .into()
    }

    pub fn construct(callee: Expression, arguments: Vec<Expression>) -> Self {
        NewExpression {
            callee: Box::new(callee),
            arguments,
        }
        .into()
    }

    pub fn sequence(expressions: Vec<Expression>) -> Self {
        SequenceExpression { expressions }.into()
    }

    pub fn function(id: Option<Identifier>, params: Vec<Identifier>, body: BlockStatement) -> Self {
        FunctionExpression {
            id: id.map(Pattern::Identifier),
            params: params.into_iter().map(Pattern::Identifier).collect(),
            body,
        }
        .into()
    }
}

macro_rules! impl_from_node {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Expression {
                fn from(node: $variant) -> Self {
                    Expression::$variant(node)
                }
            }
        )*
    };
}

impl_from_node!(
    Identifier,
    Literal,
    UnaryExpression,
    BinaryExpression,
    LogicalExpression,
    ArrayExpression,
    MemberExpression,
    CallExpression,
    NewExpression,
    SequenceExpression,
    FunctionExpression,
);

impl From<Identifier> for Pattern {
    fn from(ident: Identifier) -> Self {
        Pattern::Identifier(ident)
    }
}
