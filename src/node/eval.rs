use num_rational::BigRational;
use num_traits::Zero;

use super::{BinOpKind, Node};

/// A description of the error of a calculation.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum EvalError {
    NonNumerical,
    DivisionByZero,
}

/// Computes the exact value of the expression.
///
/// All arithmetic is done on arbitrary precision rationals, so the result
/// carries no rounding error.
pub fn eval(node: &Node) -> Result<BigRational, EvalError> {
    Ok(match node {
        Node::Num { val } => val.clone(),
        Node::Ident(_) => return Err(EvalError::NonNumerical),
        Node::BinOp { op, lhs, rhs } => {
            let lval = eval(lhs)?;
            let rval = eval(rhs)?;
            match op {
                BinOpKind::Add => lval + rval,
                BinOpKind::Sub => lval - rval,
                BinOpKind::Mul => lval * rval,
                BinOpKind::Div => {
                    // the rational type aborts on a zero denominator, so
                    // check before dividing
                    if rval.is_zero() {
                        return Err(EvalError::DivisionByZero);
                    }
                    lval / rval
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use num_rational::BigRational;

    use crate::lexer::{Lexer, Token};
    use crate::parser::Parser;

    fn parse(expr: &str) -> Node {
        let tokens: Vec<Token> = Lexer::new(expr).map(|r| r.unwrap()).collect();
        Parser::new(&tokens).parse().unwrap()
    }

    fn int(n: i64) -> BigRational {
        BigRational::from_integer(n.into())
    }

    #[test]
    fn it_evaluates_left_associative_chains() {
        assert_eq!(parse("1-2-3").eval(), Ok(int(-4)));
        assert_eq!(parse("100/10/2").eval(), Ok(int(5)));
    }

    #[test]
    fn it_applies_operator_precedence() {
        assert_eq!(parse("2+3*4").eval(), Ok(int(14)));
        assert_eq!(parse("(2+3)*4").eval(), Ok(int(20)));
    }

    #[test]
    fn it_keeps_fractions_exact() {
        assert_eq!(parse("1/3+1/3+1/3").eval(), Ok(int(1)));
        assert_eq!(
            parse("10/4").eval(),
            Ok(BigRational::new(5.into(), 2.into()))
        );
    }

    #[test]
    fn it_reports_division_by_zero() {
        assert_eq!(parse("5/0").eval(), Err(EvalError::DivisionByZero));

        // the divisor is only known to be zero after evaluating it
        assert_eq!(parse("1/(3-3)").eval(), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn it_reports_identifiers_as_non_numerical() {
        assert_eq!(parse("x+1").eval(), Err(EvalError::NonNumerical));
        assert_eq!(parse("2*(3+n)").eval(), Err(EvalError::NonNumerical));
    }

    #[test]
    fn it_checks_numerical_subtrees() {
        assert!(parse("(2+3)*4").is_numerical());
        assert!(!parse("x+1").is_numerical());
        assert!(!parse("1+2*(3-x)").is_numerical());
    }
}
