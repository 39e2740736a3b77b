use num_rational::BigRational;

use super::lexer::{Token, TokenKind};
use super::node::{BinOpKind, Node};

/// A parser converts a list of tokens into an AST (abstract syntax tree).
///
/// The grammar is the classic two-level infix one, with the usual iterative
/// folds so that chains of operators of equal precedence associate to the
/// left:
///
/// ```text
/// expression := term { ('+' | '-') term }
/// term       := factor { ('*' | '/') factor }
/// factor     := number | identifier | '(' expression ')'
/// ```
pub struct Parser<'a> {
    tokens: &'a [Token],
    index: usize,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ParseError {
    /// The input ends where an operand is still required.
    EarlyEof,
    /// The token at this index cannot start a factor.
    UnexpectedToken { index: usize },
    /// The group opened at this index is never closed.
    UnmatchedParen { index: usize },
    /// The first token left over after a complete expression.
    TrailingToken { index: usize },
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &[Token]) -> Parser {
        Parser { tokens, index: 0 }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.index)
    }

    fn accept_add_sub(&mut self) -> Option<BinOpKind> {
        let op = match self.peek()?.kind {
            TokenKind::Plus => BinOpKind::Add,
            TokenKind::Minus => BinOpKind::Sub,
            _ => return None,
        };
        self.index += 1;
        Some(op)
    }

    fn accept_mul_div(&mut self) -> Option<BinOpKind> {
        let op = match self.peek()?.kind {
            TokenKind::Times => BinOpKind::Mul,
            TokenKind::Slash => BinOpKind::Div,
            _ => return None,
        };
        self.index += 1;
        Some(op)
    }

    fn parse_factor(&mut self) -> Result<Node, ParseError> {
        if self.index >= self.tokens.len() {
            return Err(ParseError::EarlyEof);
        }

        let original_index = self.index;
        let token = self.tokens[self.index].clone();
        self.index += 1;

        Ok(match token.kind {
            TokenKind::Num { val } => Node::Num {
                val: BigRational::from_integer(val.into()),
            },
            TokenKind::Ident(name) => Node::Ident(name),
            TokenKind::OpenParen => {
                let expr = self.parse_expression()?;
                let is_closed = self
                    .tokens
                    .get(self.index)
                    .map_or(false, |t| t.kind == TokenKind::CloseParen);
                if !is_closed {
                    return Err(ParseError::UnmatchedParen { index: token.index });
                }

                // consume the parenthesis
                self.index += 1;
                expr
            }

            _ => {
                self.index = original_index;
                return Err(ParseError::UnexpectedToken { index: token.index });
            }
        })
    }

    fn parse_term(&mut self) -> Result<Node, ParseError> {
        let mut node = self.parse_factor()?;

        while let Some(op) = self.accept_mul_div() {
            let rhs = self.parse_factor()?;
            log::trace!("term: {:?}", op);
            node = op.join(node, rhs);
        }

        Ok(node)
    }

    /// Parses a single expression, leaving the cursor just past it.
    /// Check `fully_consumed` afterwards to find out whether anything
    /// is left.
    pub fn parse_expression(&mut self) -> Result<Node, ParseError> {
        let mut node = self.parse_term()?;

        while let Some(op) = self.accept_add_sub() {
            let rhs = self.parse_term()?;
            log::trace!("expression: {:?}", op);
            node = op.join(node, rhs);
        }

        Ok(node)
    }

    /// Returns whether the parser has consumed all of its tokens.
    pub fn fully_consumed(&self) -> bool {
        self.index >= self.tokens.len()
    }

    pub fn parse(mut self) -> Result<Node, ParseError> {
        let node = self.parse_expression()?;

        // there should be no tokens left
        if let Some(token) = self.peek() {
            return Err(ParseError::TrailingToken { index: token.index });
        }

        Ok(node)
    }
}
