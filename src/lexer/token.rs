use num_bigint::BigUint;

/// Tokens are simple things like numbers, identifiers, operators and
/// parentheses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Num { val: BigUint },
    Ident(String),
    Plus,
    Minus,
    Times,
    Slash,
    OpenParen,
    CloseParen,
}

impl TokenKind {
    pub fn from_single_char(c: char) -> Option<TokenKind> {
        Some(match c {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Times,
            '/' => TokenKind::Slash,
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,

    /// The index of the first character of the token
    pub index: usize,
}
