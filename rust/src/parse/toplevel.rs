use crate::ast::{Node, Syntax};
use crate::error::{SyntaxErrorType, SyntaxResult};
use crate::parse::expr::parse_expr;
use crate::parse::parser::Parser;
use crate::token::TokenType;

/// Parses the whole program: exactly one expression. The language is
/// single-statement, so anything left over after it is rejected rather than
/// silently ignored.
pub fn parse_top_level(parser: &mut Parser) -> SyntaxResult<Node> {
    let body = parse_expr(parser)?;
    let trailing = parser.next();
    if trailing.typ() != TokenType::EOF {
        return Err(trailing.error(SyntaxErrorType::TrailingTokens(trailing.typ())));
    };
    Ok(Node::new(
        body.loc().clone(),
        Syntax::Program {
            body: Box::new(body),
        },
    ))
}
