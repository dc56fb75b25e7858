//! Tests for jasp-es.

use std::borrow::Cow;

use proptest::prelude::*;
use serde_json::json;

use crate::*;

fn num(n: i32) -> Expression {
    Expression::number(n)
}

fn const_decl(name: &str, init: Expression) -> Statement {
    Statement::declare(
        VariableKind::Const,
        vec![VariableDeclarator::new(Identifier::new(name), Some(init))],
    )
}

#[test]
fn test_block_flattens_nested_blocks() {
    let block = BlockStatement::new(vec![
        Statement::expression(num(1)),
        Statement::block(vec![
            Statement::expression(num(2)),
            Statement::block(vec![Statement::expression(num(3))]),
        ]),
        Statement::expression(num(4)),
    ]);

    assert_eq!(
        block.body(),
        &[
            Statement::expression(num(1)),
            Statement::expression(num(2)),
            Statement::expression(num(3)),
            Statement::expression(num(4)),
        ]
    );
}

#[test]
fn test_block_keeps_nested_blocks_inside_ifs() {
    let inner = Statement::block(vec![Statement::expression(num(1))]);
    let block = BlockStatement::new(vec![Statement::if_else(num(0), inner.clone(), None)]);

    let Statement::IfStatement(stmt) = &block.body()[0] else {
        panic!("expected an if statement");
    };
    assert_eq!(*stmt.consequent, inner);
}

#[test]
fn test_expression_statement_returning() {
    let stmt = Statement::expression(Expression::identifier("x"));
    assert_eq!(
        stmt.returning().into_owned(),
        Statement::ret(Some(Expression::identifier("x")))
    );
}

#[test]
fn test_returning_leaves_inert_statements() {
    let decl = const_decl("a", num(1));
    assert!(matches!(decl.returning(), Cow::Borrowed(_)));

    let ret = Statement::ret(None);
    assert!(matches!(ret.returning(), Cow::Borrowed(_)));
}

#[test]
fn test_block_returning_rewrites_last_statement() {
    let block = BlockStatement::new(vec![
        const_decl("a", num(1)),
        Statement::expression(Expression::identifier("a")),
    ]);

    let rewritten = block.returning();
    assert_eq!(
        rewritten.body(),
        &[
            const_decl("a", num(1)),
            Statement::ret(Some(Expression::identifier("a"))),
        ]
    );
}

#[test]
fn test_block_returning_empty_or_inert_tail() {
    let empty = BlockStatement::default();
    assert!(matches!(empty.returning(), Cow::Borrowed(_)));

    let inert = BlockStatement::new(vec![
        Statement::expression(num(1)),
        const_decl("a", num(2)),
    ]);
    let rewritten = inert.returning();
    assert!(matches!(rewritten, Cow::Borrowed(_)));
    assert_eq!(rewritten.body()[0], Statement::expression(num(1)));
}

#[test]
fn test_if_returning_rewrites_both_branches() {
    let stmt = IfStatement::new(
        num(1),
        Statement::expression(num(2)),
        Some(Statement::expression(num(4))),
    );

    let rewritten = stmt.returning().into_owned();
    assert_eq!(*rewritten.consequent, Statement::ret(Some(num(2))));
    assert_eq!(rewritten.alternate.as_deref(), Some(&Statement::ret(Some(num(4)))));
    assert_eq!(rewritten.test, num(1));
}

#[test]
fn test_if_returning_without_alternate() {
    let stmt = IfStatement::new(num(1), Statement::expression(num(2)), None);
    let rewritten = stmt.returning().into_owned();
    assert_eq!(*rewritten.consequent, Statement::ret(Some(num(2))));
    assert!(rewritten.alternate.is_none());
}

#[test]
fn test_if_returning_is_identity_when_nothing_changes() {
    let stmt = IfStatement::new(
        num(1),
        const_decl("a", num(2)),
        Some(Statement::ret(Some(num(3)))),
    );
    assert!(matches!(stmt.returning(), Cow::Borrowed(_)));
}

#[test]
fn test_returning_recurses_through_nested_ifs() {
    let nested = Statement::block(vec![
        const_decl("a", num(1)),
        Statement::if_else(
            Expression::identifier("a"),
            Statement::if_else(
                num(0),
                Statement::expression(num(1)),
                Some(Statement::block(vec![Statement::expression(num(2))])),
            ),
            None,
        ),
    ]);

    let expected = Statement::block(vec![
        const_decl("a", num(1)),
        Statement::if_else(
            Expression::identifier("a"),
            Statement::if_else(
                num(0),
                Statement::ret(Some(num(1))),
                Some(Statement::block(vec![Statement::ret(Some(num(2)))])),
            ),
            None,
        ),
    ]);

    assert_eq!(nested.returning().into_owned(), expected);
}

#[test]
fn test_node_into_statement() {
    let node = Node::from(num(1));
    assert!(node.is_expression());
    assert_eq!(node.into_statement(), Statement::expression(num(1)));

    let node = Node::from(Statement::ret(None));
    assert!(!node.is_expression());
    assert_eq!(node.clone().into_statement(), Statement::ret(None));
    assert_eq!(node.into_expression(), Err(Statement::ret(None)));
}

#[test]
fn test_literal_json() {
    assert_eq!(
        serde_json::to_value(Expression::number(12)).unwrap(),
        json!({"type": "Literal", "value": 12.0})
    );
    assert_eq!(
        serde_json::to_value(Expression::string("hi")).unwrap(),
        json!({"type": "Literal", "value": "hi"})
    );
    assert_eq!(
        serde_json::to_value(Expression::bool(false)).unwrap(),
        json!({"type": "Literal", "value": false})
    );
    assert_eq!(
        serde_json::to_value(Expression::null()).unwrap(),
        json!({"type": "Literal", "value": null})
    );
}

#[test]
fn test_declaration_json() {
    let program = Statement::from(Program {
        body: vec![const_decl("foo", num(12))],
    });

    assert_eq!(
        serde_json::to_value(&program).unwrap(),
        json!({
            "type": "Program",
            "body": [{
                "type": "VariableDeclaration",
                "kind": "const",
                "declarations": [{
                    "type": "VariableDeclarator",
                    "id": {"type": "Identifier", "name": "foo"},
                    "init": {"type": "Literal", "value": 12.0}
                }]
            }]
        })
    );
}

#[test]
fn test_function_json() {
    let function = Expression::function(
        None,
        vec![Identifier::new("a")],
        BlockStatement::new(vec![Statement::ret(Some(Expression::identifier("a")))]),
    );

    assert_eq!(
        serde_json::to_value(&function).unwrap(),
        json!({
            "type": "FunctionExpression",
            "id": null,
            "params": [{"type": "Identifier", "name": "a"}],
            "body": {
                "type": "BlockStatement",
                "body": [{
                    "type": "ReturnStatement",
                    "argument": {"type": "Identifier", "name": "a"}
                }]
            }
        })
    );
}

#[test]
fn test_operator_json() {
    let expr = Expression::logical(
        LogicalOperator::And,
        Expression::binary(BinaryOperator::StrictEq, num(1), num(2)),
        Expression::unary(UnaryOperator::Typeof, Expression::identifier("x")),
    );

    assert_eq!(
        serde_json::to_value(&expr).unwrap(),
        json!({
            "type": "LogicalExpression",
            "operator": "&&",
            "left": {
                "type": "BinaryExpression",
                "operator": "===",
                "left": {"type": "Literal", "value": 1.0},
                "right": {"type": "Literal", "value": 2.0}
            },
            "right": {
                "type": "UnaryExpression",
                "operator": "typeof",
                "prefix": true,
                "argument": {"type": "Identifier", "name": "x"}
            }
        })
    );
}

#[test]
fn test_if_json() {
    let stmt = Statement::if_else(Expression::identifier("x"), Statement::expression(num(1)), None);

    assert_eq!(
        serde_json::to_value(&stmt).unwrap(),
        json!({
            "type": "IfStatement",
            "test": {"type": "Identifier", "name": "x"},
            "consequent": {
                "type": "ExpressionStatement",
                "expression": {"type": "Literal", "value": 1.0}
            },
            "alternate": null
        })
    );
}

fn arb_expression() -> impl Strategy<Value = Expression> {
    prop_oneof![
        any::<i32>().prop_map(Expression::number),
        "[a-z]{1,4}".prop_map(Expression::identifier),
    ]
}

fn arb_statement() -> impl Strategy<Value = Statement> {
    let leaf = prop_oneof![
        arb_expression().prop_map(Statement::expression),
        prop::option::of(arb_expression()).prop_map(Statement::ret),
        ("[a-z]{1,4}", arb_expression()).prop_map(|(name, init)| const_decl(&name, init)),
    ];

    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Statement::block),
            (arb_expression(), inner.clone(), prop::option::of(inner))
                .prop_map(|(test, consequent, alternate)| {
                    Statement::if_else(test, consequent, alternate)
                }),
        ]
    })
}

proptest! {
    #[test]
    fn flattening_is_idempotent(body in prop::collection::vec(arb_statement(), 0..6)) {
        let flat = BlockStatement::new(body);
        let wrapped = BlockStatement::new(vec![Statement::BlockStatement(flat.clone())]);
        prop_assert_eq!(wrapped.body(), flat.body());
        prop_assert!(flat.body().iter().all(|stmt| !matches!(stmt, Statement::BlockStatement(_))));
    }

    #[test]
    fn returning_is_idempotent(stmt in arb_statement()) {
        let once = stmt.returning().into_owned();
        let twice = once.returning();
        prop_assert!(matches!(twice, Cow::Borrowed(_)));
        prop_assert_eq!(twice.into_owned(), once);
    }
}
