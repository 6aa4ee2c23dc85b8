/// The target (C-shaped) AST. An independent tree over owned strings; it does
/// not borrow from the source buffer, so it outlives the source tree.
#[derive(Eq, PartialEq, Debug)]
pub enum CNode {
    Program {
        body: Vec<CNode>,
    },
    ExpressionStatement {
        expression: Box<CNode>,
    },
    // The callee is always an Identifier in this grammar, but the shape
    // follows the target language, where any expression can be called.
    CallExpr {
        callee: Box<CNode>,
        arguments: Vec<CNode>,
    },
    Identifier {
        name: String,
    },
    NumberLiteral {
        value: String,
    },
    StringLiteral {
        value: String,
    },
}
