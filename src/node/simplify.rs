use num_traits::{One, Zero};

use super::{BinOpKind, Node};

/// Simplifies the node.
///
/// The rewrite works bottom-up: both operands are simplified first, then the
/// identity rules are tried on the result. A rule only fires when both
/// operands are number leaves, so `x * 0` or `0 * (2 + 3)` come back
/// unchanged. Constants are never folded: `2 + 3` stays `2 + 3`.
pub fn simplify(node: Node) -> Node {
    match node {
        Node::BinOp { op, lhs, rhs } => {
            let lhs = simplify(*lhs);
            let rhs = simplify(*rhs);
            simplify_bin_op(op, lhs, rhs)
        }

        // leaves cannot be simplified
        _ => node,
    }
}

fn simplify_bin_op(op: BinOpKind, lhs: Node, rhs: Node) -> Node {
    log::trace!("simplify ({} {} {})", lhs, op, rhs);

    match (op, lhs, rhs) {
        // k * 0 and 0 * k equal 0
        (BinOpKind::Mul, Node::Num { val: a }, Node::Num { val: b })
            if a.is_zero() || b.is_zero() =>
        {
            Node::zero()
        }
        // 1 * k equals k
        (BinOpKind::Mul, Node::Num { val: a }, Node::Num { val: b }) if a.is_one() => {
            Node::Num { val: b }
        }
        // k * 1 equals k
        (BinOpKind::Mul, Node::Num { val: a }, Node::Num { val: b }) if b.is_one() => {
            Node::Num { val: a }
        }

        // k / 1 equals k
        (BinOpKind::Div, Node::Num { val: a }, Node::Num { val: b }) if b.is_one() => {
            Node::Num { val: a }
        }

        // 0 + k equals k
        (BinOpKind::Add, Node::Num { val: a }, Node::Num { val: b }) if a.is_zero() => {
            Node::Num { val: b }
        }
        // k + 0 equals k
        (BinOpKind::Add, Node::Num { val: a }, Node::Num { val: b }) if b.is_zero() => {
            Node::Num { val: a }
        }

        // k - 0 equals k
        (BinOpKind::Sub, Node::Num { val: a }, Node::Num { val: b }) if b.is_zero() => {
            Node::Num { val: a }
        }

        // we cannot simplify
        (op, lhs, rhs) => Node::BinOp {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        },
    }
}
