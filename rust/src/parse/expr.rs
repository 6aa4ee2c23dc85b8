use crate::ast::{Node, Syntax};
use crate::error::{SyntaxErrorType, SyntaxResult};
use crate::parse::parser::Parser;
use crate::token::TokenType;

fn parse_call(parser: &mut Parser) -> SyntaxResult<Node> {
    let open = parser.require(TokenType::ParenthesisOpen)?;
    // The token immediately after `(` is the callee name and must be a Word.
    let head = parser.next();
    let name = match head.typ() {
        TokenType::Word => head.loc_take(),
        TokenType::EOF => return Err(head.error(SyntaxErrorType::UnexpectedEnd)),
        typ => return Err(head.error(SyntaxErrorType::ExpectedCallHead(typ))),
    };
    let mut params = Vec::new();
    loop {
        match parser.peek().typ() {
            TokenType::ParenthesisClose => break,
            // An open call must see its closing parenthesis before the input
            // runs out.
            TokenType::EOF => return Err(parser.peek().error(SyntaxErrorType::UnexpectedEnd)),
            _ => params.push(parse_expr(parser)?),
        };
    }
    let close = parser.require(TokenType::ParenthesisClose)?;
    Ok(Node::new(
        open.loc() + close.loc(),
        Syntax::CallExpr { name, params },
    ))
}

pub fn parse_expr(parser: &mut Parser) -> SyntaxResult<Node> {
    match parser.peek().typ() {
        TokenType::Number => {
            let t = parser.next();
            Ok(Node::new(
                t.loc().clone(),
                Syntax::NumberLiteral {
                    value: t.loc_take(),
                },
            ))
        }
        TokenType::String => {
            let t = parser.next();
            Ok(Node::new(
                t.loc().clone(),
                Syntax::StringLiteral {
                    value: t.loc_take(),
                },
            ))
        }
        TokenType::Word => {
            let t = parser.next();
            Ok(Node::new(
                t.loc().clone(),
                Syntax::IdentifierExpr { name: t.loc_take() },
            ))
        }
        TokenType::ParenthesisOpen => parse_call(parser),
        TokenType::EOF => Err(parser.peek().error(SyntaxErrorType::UnexpectedEnd)),
        typ => Err(parser.peek().error(SyntaxErrorType::UnexpectedToken(typ))),
    }
}
