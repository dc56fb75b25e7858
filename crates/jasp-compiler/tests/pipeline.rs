//! End-to-end tests: source text in, IR and ESTree JSON out.

use jasp_compiler::compile;
use jasp_es::{BlockStatement, Expression, Identifier, Statement, VariableDeclarator, VariableKind};
use jasp_syntax::{Error, Span};
use serde_json::json;

fn assert_program(source: &str, expected: Vec<Statement>) {
    let program = compile(source).expect("compile failed");
    assert_eq!(program.body, expected, "source: {}", source);
}

fn assert_json(source: &str, expected: serde_json::Value) {
    let program = compile(source).expect("compile failed");
    let json = serde_json::to_value(Statement::from(program)).expect("serialize failed");
    assert_eq!(json, expected, "source: {}", source);
}

#[test]
fn test_def() {
    assert_program(
        "(def foo 12)",
        vec![Statement::declare(
            VariableKind::Const,
            vec![VariableDeclarator::new(Identifier::new("foo"), Some(Expression::number(12)))],
        )],
    );
}

#[test]
fn test_fn_with_if_body() {
    let body = BlockStatement::new([Statement::if_else(
        Expression::number(1),
        Statement::ret(Some(Expression::number(2))),
        Some(Statement::ret(Some(Expression::number(4)))),
    )]);
    assert_program(
        "(fn [a b] (if 1 2 4))",
        vec![Statement::expression(Expression::function(
            None,
            vec![Identifier::new("a"), Identifier::new("b")],
            body,
        ))],
    );
}

#[test]
fn test_operator_call() {
    assert_program(
        "(+ 1 2 3)",
        vec![Statement::expression(Expression::call(
            Expression::identifier("+"),
            vec![Expression::number(1), Expression::number(2), Expression::number(3)],
        ))],
    );
}

#[test]
fn test_let() {
    assert_program(
        "(let [a 1 b 2] (+ a b))",
        vec![Statement::block([
            Statement::declare(
                VariableKind::Const,
                vec![
                    VariableDeclarator::new(Identifier::new("a"), Some(Expression::number(1))),
                    VariableDeclarator::new(Identifier::new("b"), Some(Expression::number(2))),
                ],
            ),
            Statement::expression(Expression::call(
                Expression::identifier("+"),
                vec![Expression::identifier("a"), Expression::identifier("b")],
            )),
        ])],
    );
}

#[test]
fn test_unclosed_list() {
    let err = compile("(").unwrap_err();
    assert!(matches!(err, Error::UnexpectedEndOfInput { .. }), "{err:?}");
    assert_eq!(err.span(), Span::new(0, 1));
}

#[test]
fn test_unclosed_vector() {
    let err = compile("[1 2").unwrap_err();
    assert!(matches!(err, Error::UnexpectedEndOfInput { .. }), "{err:?}");
    assert_eq!(err.span(), Span::new(3, 4));
}

#[test]
fn test_multiple_forms_keep_order() {
    let program = compile("(def a 1)\n(def b a)\n(print b)").unwrap();
    assert_eq!(program.body.len(), 3);
    assert!(matches!(program.body[2], Statement::ExpressionStatement(_)));
}

// =============================================================================
// ESTree JSON
// =============================================================================

#[test]
fn test_def_json() {
    assert_json(
        "(def foo 12)",
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
        }),
    );
}

#[test]
fn test_call_json() {
    assert_json(
        r#"(log "hi" :k true)"#,
        json!({
            "type": "Program",
            "body": [{
                "type": "ExpressionStatement",
                "expression": {
                    "type": "CallExpression",
                    "callee": {"type": "Identifier", "name": "log"},
                    "arguments": [
                        {"type": "Literal", "value": "hi"},
                        {"type": "Literal", "value": "k"},
                        {"type": "Literal", "value": true}
                    ]
                }
            }]
        }),
    );
}

#[test]
fn test_fn_json() {
    assert_json(
        "(fn [x] (if x 1))",
        json!({
            "type": "Program",
            "body": [{
                "type": "ExpressionStatement",
                "expression": {
                    "type": "FunctionExpression",
                    "id": null,
                    "params": [{"type": "Identifier", "name": "x"}],
                    "body": {
                        "type": "BlockStatement",
                        "body": [{
                            "type": "IfStatement",
                            "test": {"type": "Identifier", "name": "x"},
                            "consequent": {
                                "type": "ReturnStatement",
                                "argument": {"type": "Literal", "value": 1.0}
                            },
                            "alternate": null
                        }]
                    }
                }
            }]
        }),
    );
}
