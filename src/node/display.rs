use std::fmt;
use std::fmt::{Display, Write};

use super::{BinOpKind, Node};

impl Display for BinOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(match self {
            BinOpKind::Add => '+',
            BinOpKind::Sub => '-',
            BinOpKind::Mul => '*',
            BinOpKind::Div => '/',
        })
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // integers print bare, other rationals print as numer/denom
            Node::Num { val } => write!(f, "{}", val),
            Node::Ident(name) => f.write_str(name),
            // every operation gets its own parentheses, there is no
            // precedence-based elision
            Node::BinOp { op, lhs, rhs } => write!(f, "({} {} {})", lhs, op, rhs),
        }
    }
}
