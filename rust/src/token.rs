use crate::error::{SyntaxError, SyntaxErrorType};
use crate::source::SourceRange;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum TokenType {
    EOF,
    // Maximal run of ASCII digits.
    Number,
    ParenthesisClose,
    ParenthesisOpen,
    // Single-quoted literal; the range excludes the delimiters.
    String,
    // Maximal run of lowercase ASCII letters.
    Word,
}

#[derive(Clone, Debug)]
pub struct Token {
    loc: SourceRange,
    typ: TokenType,
}

impl Token {
    pub fn new(loc: SourceRange, typ: TokenType) -> Token {
        Token { loc, typ }
    }

    pub fn typ(&self) -> TokenType {
        self.typ
    }

    pub fn loc(&self) -> &SourceRange {
        &self.loc
    }

    pub fn loc_take(self) -> SourceRange {
        self.loc
    }

    pub fn error(&self, typ: SyntaxErrorType) -> SyntaxError {
        SyntaxError::from_loc(&self.loc, typ)
    }
}
