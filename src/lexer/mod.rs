mod token;

use std::iter::FusedIterator;

use num_bigint::BigUint;
use num_traits::Zero;

pub use self::token::*;

/// The kind of a lexer error
#[derive(Debug, PartialEq, Eq)]
pub enum LexerErrorKind {
    UnknownToken,
}

/// When the expression is malformed, the lexer will return this error.
#[derive(Debug, PartialEq, Eq)]
pub struct LexerError {
    /// The error kind
    pub kind: LexerErrorKind,

    /// The index of the first character which caused the error
    pub index: usize,
}

/// A lexer reads an arithmetic expression and returns a list of tokens in
/// the expression.
/// This allows us to read the expression in a simpler way later when we want
/// to parse it.
pub struct Lexer<'a> {
    expr: &'a [u8],
    index: usize,
    has_failed: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer from an expression.
    pub fn new(expr: &str) -> Lexer {
        Lexer {
            expr: expr.as_bytes(),
            index: 0,
            has_failed: false,
        }
    }

    fn consume_whitespace(&mut self) {
        while self.index < self.expr.len() {
            match self.expr[self.index] as char {
                ' ' | '\n' | '\r' | '\t' => {}
                _ => break,
            }

            self.index += 1;
        }
    }

    fn try_consume_single_char_token(&mut self) -> Option<Token> {
        if self.index < self.expr.len() {
            let original_index = self.index;
            let c = self.expr[self.index] as char;

            if let Some(kind) = TokenKind::from_single_char(c) {
                // consume the character
                self.index += 1;

                return Some(Token {
                    kind,
                    index: original_index,
                });
            }
        }

        None
    }

    fn try_consume_num(&mut self) -> Option<Token> {
        let original_index = self.index;
        let mut val: BigUint = Zero::zero();
        let mut has_digit = false;

        while self.index < self.expr.len() {
            let c = self.expr[self.index] as char;

            if let Some(digit) = c.to_digit(10) {
                val *= 10u32;
                val += digit;
                has_digit = true;
            } else {
                break;
            }

            self.index += 1;
        }

        if !has_digit {
            return None;
        }

        Some(Token {
            kind: TokenKind::Num { val },
            index: original_index,
        })
    }

    fn try_consume_ident(&mut self) -> Option<Token> {
        let original_index = self.index;
        let mut ident = String::new();

        while self.index < self.expr.len() {
            let c = self.expr[self.index] as char;

            // an identifier is a letter followed by letters or digits
            let is_valid = if ident.is_empty() {
                c.is_ascii_alphabetic()
            } else {
                c.is_ascii_alphanumeric()
            };
            if !is_valid {
                break;
            }

            ident.push(c);

            self.index += 1;
        }

        if ident.is_empty() {
            return None;
        }

        Some(Token {
            kind: TokenKind::Ident(ident),
            index: original_index,
        })
    }
}

// This means that when it returns a none option, then it will keep returning
// none options.
impl<'a> FusedIterator for Lexer<'a> {}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, LexerError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.has_failed {
            return None;
        }

        self.consume_whitespace();

        // is there anything left?
        if self.index >= self.expr.len() {
            return None;
        }

        let original_index = self.index;
        let maybe_token = self
            .try_consume_single_char_token()
            .or_else(|| self.try_consume_num())
            .or_else(|| self.try_consume_ident());

        if let Some(token) = &maybe_token {
            log::trace!("consumed {:?}", token);
        }

        Some(maybe_token.ok_or_else(|| {
            self.has_failed = true;

            // if we didn't get any token, then it is unknown
            LexerError {
                kind: LexerErrorKind::UnknownToken,
                index: original_index,
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_handles_empty_string() {
        let mut lexer = Lexer::new("");
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn it_ignores_whitespace() {
        let mut lexer = Lexer::new("\t+ \r\n");
        assert_eq!(
            lexer.next(),
            Some(Ok(Token {
                kind: TokenKind::Plus,
                index: 1
            }))
        );
        assert_eq!(lexer.next(), None);

        let mut lexer = Lexer::new("   ");
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn it_handles_single_char_tokens() {
        const EXPECTED: [TokenKind; 6] = [
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Times,
            TokenKind::Slash,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
        ];

        let expected_tokens: Vec<Token> = EXPECTED
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, kind)| Token { kind, index: i })
            .collect();

        let actual_tokens: Vec<Token> = Lexer::new("+-*/()").map(|r| r.unwrap()).collect();

        assert_eq!(actual_tokens, expected_tokens);
    }

    fn one_two_three() -> TokenKind {
        TokenKind::Num {
            val: BigUint::from(123u32),
        }
    }

    #[test]
    fn it_handles_integer_numbers() {
        let mut lexer = Lexer::new("123");
        assert_eq!(
            lexer.next(),
            Some(Ok(Token {
                kind: one_two_three(),
                index: 0
            }))
        );
        assert_eq!(lexer.next(), None);

        // the sign is a separate token
        let mut lexer = Lexer::new("-123");
        assert_eq!(
            lexer.next(),
            Some(Ok(Token {
                kind: TokenKind::Minus,
                index: 0
            }))
        );
        assert_eq!(
            lexer.next(),
            Some(Ok(Token {
                kind: one_two_three(),
                index: 1
            }))
        );
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn it_handles_long_literals() {
        let digits = "123456789012345678901234567890";
        let mut lexer = Lexer::new(digits);
        assert_eq!(
            lexer.next(),
            Some(Ok(Token {
                kind: TokenKind::Num {
                    val: digits.parse::<BigUint>().unwrap(),
                },
                index: 0
            }))
        );
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn it_handles_identifiers() {
        let mut lexer = Lexer::new("x1+value");
        assert_eq!(
            lexer.next(),
            Some(Ok(Token {
                kind: TokenKind::Ident("x1".to_string()),
                index: 0
            }))
        );
        assert_eq!(
            lexer.next(),
            Some(Ok(Token {
                kind: TokenKind::Plus,
                index: 2
            }))
        );
        assert_eq!(
            lexer.next(),
            Some(Ok(Token {
                kind: TokenKind::Ident("value".to_string()),
                index: 3
            }))
        );
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn it_does_not_start_identifiers_with_digits() {
        // a digit run directly followed by letters is two tokens
        let mut lexer = Lexer::new("2x");
        assert_eq!(
            lexer.next(),
            Some(Ok(Token {
                kind: TokenKind::Num {
                    val: BigUint::from(2u32),
                },
                index: 0
            }))
        );
        assert_eq!(
            lexer.next(),
            Some(Ok(Token {
                kind: TokenKind::Ident("x".to_string()),
                index: 1
            }))
        );
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn it_stops_after_an_unknown_character() {
        let mut lexer = Lexer::new("1?2");
        assert_eq!(
            lexer.next(),
            Some(Ok(Token {
                kind: TokenKind::Num {
                    val: BigUint::from(1u32),
                },
                index: 0
            }))
        );
        assert_eq!(
            lexer.next(),
            Some(Err(LexerError {
                kind: LexerErrorKind::UnknownToken,
                index: 1
            }))
        );
        assert_eq!(lexer.next(), None);
    }
}
