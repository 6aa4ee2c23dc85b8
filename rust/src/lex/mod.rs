use memchr::memchr;

use crate::char::{CharFilter, DIGIT, LETTER_LOWER, WHITESPACE};
use crate::error::{SyntaxError, SyntaxErrorType, SyntaxResult};
use crate::source::{Source, SourceRange};
use crate::token::{Token, TokenType};

#[cfg(test)]
mod tests;

/// A character the lexer does not recognize. Not fatal: the character is
/// skipped and lexing continues, but the resulting token stream is unreliable
/// and the parser is not obliged to recover meaningfully.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct LexDiagnostic {
    pub position: usize,
    pub byte: u8,
}

#[derive(Copy, Clone)]
struct Match {
    len: usize,
}

pub struct Lexer {
    source: Source,
    next: usize,
    diagnostics: Vec<LexDiagnostic>,
}

impl Lexer {
    pub fn new(code: Vec<u8>) -> Lexer {
        Lexer {
            source: Source::new(code),
            next: 0,
            diagnostics: Vec::new(),
        }
    }

    fn end(&self) -> usize {
        self.source.code().len()
    }

    fn remaining(&self) -> usize {
        self.end() - self.next
    }

    fn eof_range(&self) -> SourceRange {
        SourceRange {
            source: self.source.clone(),
            start: self.end(),
            end: self.end(),
        }
    }

    fn at_end(&self) -> bool {
        self.next >= self.end()
    }

    fn while_chars(&self, chars: &CharFilter) -> Match {
        let mut len = 0;
        while len < self.remaining() && chars.has(self.source.code()[self.next + len]) {
            len += 1;
        }
        Match { len }
    }

    fn range(&self, m: Match) -> SourceRange {
        SourceRange {
            source: self.source.clone(),
            start: self.next,
            end: self.next + m.len,
        }
    }

    fn consume(&mut self, m: Match) -> () {
        self.next += m.len;
    }

    fn skip_expect(&mut self, n: usize) -> () {
        debug_assert!(self.next + n <= self.end());
        self.next += n;
    }

    pub fn diagnostics(&self) -> &[LexDiagnostic] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<LexDiagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}

fn lex_string(lexer: &mut Lexer) -> SyntaxResult<Token> {
    let open = lexer.next;
    // Consume `'`.
    lexer.skip_expect(1);
    // The naive scan would read past the end of input when the closing quote
    // is missing; make that a hard error at the opening quote instead.
    let len = memchr(b'\'', &lexer.source.code()[lexer.next..])
        .ok_or_else(|| SyntaxError::new(SyntaxErrorType::UnterminatedString, open))?;
    let loc = lexer.range(Match { len });
    lexer.skip_expect(len + 1);
    Ok(Token::new(loc, TokenType::String))
}

fn lex_word(lexer: &mut Lexer) -> Token {
    let m = lexer.while_chars(&LETTER_LOWER);
    let loc = lexer.range(m);
    lexer.consume(m);
    Token::new(loc, TokenType::Word)
}

fn lex_number(lexer: &mut Lexer) -> Token {
    let m = lexer.while_chars(&DIGIT);
    let loc = lexer.range(m);
    lexer.consume(m);
    Token::new(loc, TokenType::Number)
}

pub fn lex_next(lexer: &mut Lexer) -> SyntaxResult<Token> {
    loop {
        lexer.consume(lexer.while_chars(&WHITESPACE));
        if lexer.at_end() {
            return Ok(Token::new(lexer.eof_range(), TokenType::EOF));
        };
        let c = lexer.source.code()[lexer.next];
        match c {
            b'(' => {
                let loc = lexer.range(Match { len: 1 });
                lexer.skip_expect(1);
                return Ok(Token::new(loc, TokenType::ParenthesisOpen));
            }
            b')' => {
                let loc = lexer.range(Match { len: 1 });
                lexer.skip_expect(1);
                return Ok(Token::new(loc, TokenType::ParenthesisClose));
            }
            b'\'' => return lex_string(lexer),
            c if DIGIT.has(c) => return Ok(lex_number(lexer)),
            c if LETTER_LOWER.has(c) => return Ok(lex_word(lexer)),
            c => {
                lexer.diagnostics.push(LexDiagnostic {
                    position: lexer.next,
                    byte: c,
                });
                lexer.skip_expect(1);
            }
        };
    }
}

pub struct LexedProgram {
    // Always ends with exactly one EOF token.
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<LexDiagnostic>,
}

pub fn lex_all(lexer: &mut Lexer) -> SyntaxResult<LexedProgram> {
    let mut tokens = Vec::new();
    loop {
        let token = lex_next(lexer)?;
        let done = token.typ() == TokenType::EOF;
        tokens.push(token);
        if done {
            return Ok(LexedProgram {
                tokens,
                diagnostics: lexer.take_diagnostics(),
            });
        };
    }
}
