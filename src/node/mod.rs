mod display;
mod eval;
mod simplify;

use num_rational::BigRational;
use num_traits::Zero;
use std::ops::*;

pub use self::eval::*;
pub use self::simplify::*;

/// A kind of binary arithmetic operator
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOpKind {
    /// Builds the node that applies this operator to the two operands.
    pub fn join(self, lhs: Node, rhs: Node) -> Node {
        Node::BinOp {
            op: self,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }
}

/// A node is an operation in the AST (abstract syntax tree).
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Node {
    Num {
        /// The number the node represents
        val: BigRational,
    },
    Ident(String),
    BinOp {
        op: BinOpKind,
        lhs: Box<Node>,
        rhs: Box<Node>,
    },
}

impl Node {
    /// Computes the exact value of the expression.
    pub fn eval(&self) -> Result<BigRational, EvalError> {
        eval(self)
    }

    /// Simplifies the node.
    pub fn simplify(self) -> Node {
        simplify(self)
    }

    /// Returns whether the expression contains no identifiers and can
    /// therefore be evaluated to a number.
    pub fn is_numerical(&self) -> bool {
        match self {
            Node::Num { .. } => true,
            Node::Ident(_) => false,
            Node::BinOp { lhs, rhs, .. } => lhs.is_numerical() && rhs.is_numerical(),
        }
    }

    fn zero() -> Node {
        Node::Num { val: Zero::zero() }
    }
}

impl Add for Node {
    type Output = Node;

    fn add(self, rhs: Self) -> Self::Output {
        BinOpKind::Add.join(self, rhs)
    }
}

impl Sub for Node {
    type Output = Node;

    fn sub(self, rhs: Self) -> Self::Output {
        BinOpKind::Sub.join(self, rhs)
    }
}

impl Mul for Node {
    type Output = Node;

    fn mul(self, rhs: Self) -> Self::Output {
        BinOpKind::Mul.join(self, rhs)
    }
}

impl Div for Node {
    type Output = Node;

    fn div(self, rhs: Self) -> Self::Output {
        BinOpKind::Div.join(self, rhs)
    }
}
