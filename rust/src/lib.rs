use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, Write};

use emit::emit_c;
use lex::{lex_all, LexDiagnostic, Lexer};
use parse::{parser::Parser, toplevel::parse_top_level};
use transform::transform;

pub mod ast;
pub mod char;
pub mod emit;
pub mod error;
pub mod lex;
pub mod parse;
pub mod serialise;
pub mod source;
pub mod target;
pub mod token;
pub mod transform;

pub use error::{SyntaxError, SyntaxErrorType};

#[derive(Debug)]
pub enum CompileError {
    Syntax(SyntaxError),
    IO(io::Error),
}

impl Display for CompileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::Syntax(syntax) => {
                write!(f, "Syntax Error: {:?}", syntax)
            }
            CompileError::IO(io) => {
                write!(f, "IO Error: {}", io)
            }
        }
    }
}

impl Error for CompileError {}

impl From<SyntaxError> for CompileError {
    fn from(err: SyntaxError) -> Self {
        CompileError::Syntax(err)
    }
}

impl From<io::Error> for CompileError {
    fn from(err: io::Error) -> Self {
        CompileError::IO(err)
    }
}

/// Compiles a Lisp-style call expression, represented as an array of bytes,
/// into the equivalent C-style expression statement.
///
/// Lexical diagnostics for skipped unrecognized characters are returned on
/// success; they do not stop compilation but indicate the input was not
/// wholly well formed.
///
/// # Examples
///
/// ```
/// use lisp2c::compile;
///
/// let mut out = Vec::new();
/// compile(b"(add 4 (subtract 23 8))".to_vec(), &mut out).unwrap();
/// assert_eq!(out.as_slice(), b"add(4, subtract(23, 8));\n");
/// ```
pub fn compile<T: Write>(
    source: Vec<u8>,
    output: &mut T,
) -> Result<Vec<LexDiagnostic>, CompileError> {
    let mut lexer = Lexer::new(source);
    let lexed = lex_all(&mut lexer)?;
    let mut parser = Parser::new(lexed.tokens);
    let ast = parse_top_level(&mut parser)?;
    let target = transform(&ast);
    emit_c(output, &target)?;
    Ok(lexed.diagnostics)
}

/// Convenience wrapper over [`compile`] for string inputs and outputs.
pub fn compile_to_string(source: &str) -> Result<String, CompileError> {
    let mut out = Vec::new();
    compile(source.as_bytes().to_vec(), &mut out)?;
    // The emitter only writes ASCII around slices of the UTF-8 input.
    Ok(unsafe { String::from_utf8_unchecked(out) })
}
