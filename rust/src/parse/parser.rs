use crate::error::{SyntaxErrorType, SyntaxResult};
use crate::token::{Token, TokenType};

/// One shared read cursor over the lexed token sequence. No backtracking: the
/// grammar is decidable on the current token alone.
pub struct Parser {
    tokens: Vec<Token>,
    next: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Parser {
        debug_assert!(matches!(tokens.last().map(|t| t.typ()), Some(TokenType::EOF)));
        Parser { tokens, next: 0 }
    }

    pub fn peek(&self) -> &Token {
        // The cursor never moves past the EOF token, so the stream looks like
        // an endless run of EOF once exhausted.
        &self.tokens[self.next.min(self.tokens.len() - 1)]
    }

    pub fn next(&mut self) -> Token {
        let t = self.peek().clone();
        if t.typ() != TokenType::EOF {
            self.next += 1;
        };
        t
    }

    pub fn require(&mut self, typ: TokenType) -> SyntaxResult<Token> {
        let t = self.next();
        if t.typ() != typ {
            Err(t.error(SyntaxErrorType::RequiredTokenNotFound(typ)))
        } else {
            Ok(t)
        }
    }
}
