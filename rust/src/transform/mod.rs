use crate::ast::{Node, Syntax};
use crate::target::CNode;

#[cfg(test)]
mod tests;

/// Result of the enter hook. Literals are appended to the destination list
/// immediately; containers open a fresh list that their children fill, sealed
/// by the exit hook. This replaces the trick of stashing a reference into the
/// target tree on each source node: the destination list is threaded through
/// the traversal explicitly, and the source tree stays immutable.
enum Entered {
    Appended,
    Opened(Vec<CNode>),
}

fn on_enter(node: &Node, out: &mut Vec<CNode>) -> Entered {
    match node.stx() {
        Syntax::NumberLiteral { value } => {
            out.push(CNode::NumberLiteral {
                value: value.as_str().to_string(),
            });
            Entered::Appended
        }
        Syntax::StringLiteral { value } => {
            out.push(CNode::StringLiteral {
                value: value.as_str().to_string(),
            });
            Entered::Appended
        }
        Syntax::IdentifierExpr { name } => {
            out.push(CNode::Identifier {
                name: name.as_str().to_string(),
            });
            Entered::Appended
        }
        Syntax::Program { .. } | Syntax::CallExpr { .. } => Entered::Opened(Vec::new()),
    }
}

fn on_exit(node: &Node, parent: Option<&Node>, entered: Entered, out: &mut Vec<CNode>) -> () {
    let children = match entered {
        Entered::Appended => return,
        Entered::Opened(children) => children,
    };
    match node.stx() {
        Syntax::CallExpr { name, .. } => {
            let call = CNode::CallExpr {
                callee: Box::new(CNode::Identifier {
                    name: name.as_str().to_string(),
                }),
                arguments: children,
            };
            // A call in argument position stays a bare expression; in any
            // other position it is a whole statement.
            let argument_position =
                matches!(parent.map(|p| p.stx()), Some(Syntax::CallExpr { .. }));
            out.push(if argument_position {
                call
            } else {
                CNode::ExpressionStatement {
                    expression: Box::new(call),
                }
            });
        }
        // The program itself has no call shell; its children are the
        // statement list.
        Syntax::Program { .. } => out.extend(children),
        _ => {}
    };
}

fn traverse_node(node: &Node, parent: Option<&Node>, out: &mut Vec<CNode>) -> () {
    match on_enter(node, out) {
        Entered::Appended => on_exit(node, parent, Entered::Appended, out),
        Entered::Opened(mut children) => {
            match node.stx() {
                Syntax::Program { body } => traverse_node(body, Some(node), &mut children),
                Syntax::CallExpr { params, .. } => {
                    for param in params {
                        traverse_node(param, Some(node), &mut children);
                    }
                }
                _ => {}
            };
            on_exit(node, parent, Entered::Opened(children), out);
        }
    };
}

/// Builds the target tree from the source tree. Total over well-formed source
/// trees: every source variant is matched exhaustively, so there is no
/// unknown-variant failure mode left at runtime.
pub fn transform(program: &Node) -> CNode {
    let mut body = Vec::new();
    traverse_node(program, None, &mut body);
    CNode::Program { body }
}
