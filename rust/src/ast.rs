use std::fmt;
use std::fmt::{Debug, Formatter};

use crate::error::{SyntaxError, SyntaxErrorType};
use crate::source::SourceRange;

/// A source AST node: a location plus one Syntax variant. Built once by the
/// parser and read-only afterwards; the transformer never mutates it.
pub struct Node {
    data: Box<NodeData>,
}

struct NodeData {
    loc: SourceRange,
    stx: Syntax,
}

impl Node {
    pub fn new(loc: SourceRange, stx: Syntax) -> Node {
        Node {
            data: Box::new(NodeData { loc, stx }),
        }
    }

    pub fn error(&self, typ: SyntaxErrorType) -> SyntaxError {
        SyntaxError::from_loc(self.loc(), typ)
    }

    pub fn loc(&self) -> &SourceRange {
        &self.data.loc
    }

    pub fn stx(&self) -> &Syntax {
        &self.data.stx
    }

    pub fn stx_take(self) -> Syntax {
        self.data.stx
    }
}

// Two nodes are considered equal if their syntax trees are equal, regardless
// of where in the source each was parsed from.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.stx() == other.stx()
    }
}

impl Eq for Node {}

impl Debug for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("{:?}", self.data.stx))
    }
}

#[derive(Eq, PartialEq, Debug)]
pub enum Syntax {
    // The grammar is a single top-level expression; the parser rejects
    // anything after it.
    Program {
        body: Box<Node>,
    },
    // `name` must come from the Word token immediately following `(`.
    CallExpr {
        name: SourceRange,
        params: Vec<Node>,
    },
    // A bare word outside a call head.
    IdentifierExpr {
        name: SourceRange,
    },
    NumberLiteral {
        value: SourceRange,
    },
    StringLiteral {
        value: SourceRange,
    },
}
