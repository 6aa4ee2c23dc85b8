use serde_json::{json, Value};

use crate::ast::{Node, Syntax};
use crate::target::CNode;
use crate::token::Token;

/// JSON renditions of the pipeline's intermediate forms, for diagnostic
/// dumps and readable test output.

pub fn serialise_tokens(tokens: &[Token]) -> Value {
    Value::Array(
        tokens
            .iter()
            .map(|t| {
                json!({
                    "$t": format!("{:?}", t.typ()),
                    "text": t.loc().as_str().to_string(),
                    "start": t.loc().start,
                })
            })
            .collect(),
    )
}

pub fn serialise_ast(node: &Node) -> Value {
    match node.stx() {
        Syntax::Program { body } => json!({
            "$t": "Program",
            "body": serialise_ast(body),
        }),
        Syntax::CallExpr { name, params } => json!({
            "$t": "CallExpression",
            "name": name.as_str().to_string(),
            "params": params.iter().map(serialise_ast).collect::<Vec<_>>(),
        }),
        Syntax::IdentifierExpr { name } => json!({
            "$t": "Identifier",
            "name": name.as_str().to_string(),
        }),
        Syntax::NumberLiteral { value } => json!({
            "$t": "NumberLiteral",
            "value": value.as_str().to_string(),
        }),
        Syntax::StringLiteral { value } => json!({
            "$t": "StringLiteral",
            "value": value.as_str().to_string(),
        }),
    }
}

pub fn serialise_target(node: &CNode) -> Value {
    match node {
        CNode::Program { body } => json!({
            "$t": "Program",
            "body": body.iter().map(serialise_target).collect::<Vec<_>>(),
        }),
        CNode::ExpressionStatement { expression } => json!({
            "$t": "ExpressionStatement",
            "expression": serialise_target(expression),
        }),
        CNode::CallExpr { callee, arguments } => json!({
            "$t": "CallExpression",
            "callee": serialise_target(callee),
            "arguments": arguments.iter().map(serialise_target).collect::<Vec<_>>(),
        }),
        CNode::Identifier { name } => json!({
            "$t": "Identifier",
            "name": name,
        }),
        CNode::NumberLiteral { value } => json!({
            "$t": "NumberLiteral",
            "value": value,
        }),
        CNode::StringLiteral { value } => json!({
            "$t": "StringLiteral",
            "value": value,
        }),
    }
}
