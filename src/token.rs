//! The token stream consumed by the parser.
//!
//! Tokens are produced by an external scanner; this crate never looks at raw WKT text.

use std::fmt;

/// One classified WKT token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token<'a> {
    /// A keyword or dimensionality suffix, in any letter case.
    Text(&'a str),
    Number(f64),
    LeftParen,
    RightParen,
    Comma,
}

/// The kind of a [`Token`], without its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Text,
    Number,
    LeftParenthesis,
    RightParenthesis,
    Comma,
}

impl Token<'_> {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Text(_) => TokenKind::Text,
            Token::Number(_) => TokenKind::Number,
            Token::LeftParen => TokenKind::LeftParenthesis,
            Token::RightParen => TokenKind::RightParenthesis,
            Token::Comma => TokenKind::Comma,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Text(text) => f.write_str(text),
            Token::Number(value) => write!(f, "{value}"),
            Token::LeftParen => f.write_str("("),
            Token::RightParen => f.write_str(")"),
            Token::Comma => f.write_str(","),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn kind_and_display() {
        assert_eq!(Token::Text("POINT").kind(), TokenKind::Text);
        assert_eq!(Token::Number(1.5).kind(), TokenKind::Number);
        assert_eq!(Token::RightParen.kind(), TokenKind::RightParenthesis);
        assert_eq!(Token::Number(-2.).to_string(), "-2");
        assert_eq!(Token::Comma.to_string(), ",");
    }
}
