use std::io::{self, Write};

use crate::target::CNode;


/// Renders the target tree as C expression-statement text. Pure recursive
/// rendering, one case per variant; arguments are comma-joined.
pub fn emit_c<T: Write>(out: &mut T, node: &CNode) -> io::Result<()> {
    match node {
        CNode::Program { body } => {
            for statement in body {
                emit_c(out, statement)?;
            }
            out.write_all(b"\n")?;
        }
        CNode::ExpressionStatement { expression } => {
            emit_c(out, expression)?;
            out.write_all(b";")?;
        }
        CNode::CallExpr { callee, arguments } => {
            emit_c(out, callee)?;
            out.write_all(b"(")?;
            for (i, argument) in arguments.iter().enumerate() {
                if i > 0 {
                    out.write_all(b", ")?;
                };
                emit_c(out, argument)?;
            }
            out.write_all(b")")?;
        }
        CNode::Identifier { name } => out.write_all(name.as_bytes())?,
        // String literals are emitted as-is, not re-quoted.
        CNode::NumberLiteral { value } | CNode::StringLiteral { value } => {
            out.write_all(value.as_bytes())?
        }
    };
    Ok(())
}
