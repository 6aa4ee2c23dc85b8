use crate::ast::Syntax::*;
use crate::target::CNode;
use crate::transform::transform;
use crate::util::test::*;

fn ident(name: &str) -> Box<CNode> {
    Box::new(CNode::Identifier {
        name: name.to_string(),
    })
}

#[test]
fn test_transform_wraps_top_level_call_in_statement() {
    let ast = n(Program {
        body: Box::new(n(CallExpr {
            name: r("run"),
            params: vec![],
        })),
    });
    assert_eq!(
        transform(&ast),
        CNode::Program {
            body: vec![CNode::ExpressionStatement {
                expression: Box::new(CNode::CallExpr {
                    callee: ident("run"),
                    arguments: vec![],
                }),
            }],
        },
    );
}

#[test]
fn test_transform_nested_call_stays_bare_expression() {
    let ast = n(Program {
        body: Box::new(n(CallExpr {
            name: r("add"),
            params: vec![
                n(NumberLiteral { value: r("4") }),
                n(CallExpr {
                    name: r("subtract"),
                    params: vec![
                        n(NumberLiteral { value: r("23") }),
                        n(NumberLiteral { value: r("8") }),
                    ],
                }),
            ],
        })),
    });
    assert_eq!(
        transform(&ast),
        CNode::Program {
            body: vec![CNode::ExpressionStatement {
                expression: Box::new(CNode::CallExpr {
                    callee: ident("add"),
                    arguments: vec![
                        CNode::NumberLiteral {
                            value: "4".to_string(),
                        },
                        // Argument position: no ExpressionStatement wrapper.
                        CNode::CallExpr {
                            callee: ident("subtract"),
                            arguments: vec![
                                CNode::NumberLiteral {
                                    value: "23".to_string(),
                                },
                                CNode::NumberLiteral {
                                    value: "8".to_string(),
                                },
                            ],
                        },
                    ],
                }),
            }],
        },
    );
}

#[test]
fn test_transform_literals_pass_through() {
    let ast = n(Program {
        body: Box::new(n(CallExpr {
            name: r("greet"),
            params: vec![
                n(StringLiteral { value: r("hello") }),
                n(IdentifierExpr { name: r("name") }),
            ],
        })),
    });
    assert_eq!(
        transform(&ast),
        CNode::Program {
            body: vec![CNode::ExpressionStatement {
                expression: Box::new(CNode::CallExpr {
                    callee: ident("greet"),
                    arguments: vec![
                        CNode::StringLiteral {
                            value: "hello".to_string(),
                        },
                        CNode::Identifier {
                            name: "name".to_string(),
                        },
                    ],
                }),
            }],
        },
    );
}

fn count_calls_source(node: &crate::ast::Node) -> usize {
    match node.stx() {
        Program { body } => count_calls_source(body),
        CallExpr { params, .. } => 1 + params.iter().map(count_calls_source).sum::<usize>(),
        _ => 0,
    }
}

fn count_calls_target(node: &CNode) -> usize {
    match node {
        CNode::Program { body } => body.iter().map(count_calls_target).sum(),
        CNode::ExpressionStatement { expression } => count_calls_target(expression),
        CNode::CallExpr { callee, arguments } => {
            1 + count_calls_target(callee)
                + arguments.iter().map(count_calls_target).sum::<usize>()
        }
        _ => 0,
    }
}

#[test]
fn test_transform_call_bijection() {
    // Every source call expression maps to exactly one target call
    // expression.
    let ast = n(Program {
        body: Box::new(n(CallExpr {
            name: r("a"),
            params: vec![
                n(CallExpr {
                    name: r("b"),
                    params: vec![n(CallExpr {
                        name: r("c"),
                        params: vec![],
                    })],
                }),
                n(CallExpr {
                    name: r("d"),
                    params: vec![],
                }),
            ],
        })),
    });
    assert_eq!(count_calls_source(&ast), 4);
    assert_eq!(count_calls_target(&transform(&ast)), 4);
}
