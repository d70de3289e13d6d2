use crate::token::Token;

/// A minimal WKT scanner for tests.
pub(crate) fn tokenize(text: &str) -> Vec<Token<'_>> {
    let bytes = text.as_bytes();
    let mut tokens = vec![];
    let mut i = 0;
    while i < bytes.len() {
        let start = i;
        match bytes[i] {
            b'(' => tokens.push(Token::LeftParen),
            b')' => tokens.push(Token::RightParen),
            b',' => tokens.push(Token::Comma),
            b if b.is_ascii_whitespace() => {}
            b if b.is_ascii_alphabetic() => {
                while i + 1 < bytes.len() && bytes[i + 1].is_ascii_alphabetic() {
                    i += 1;
                }
                tokens.push(Token::Text(&text[start..=i]));
            }
            b'0'..=b'9' | b'-' | b'+' | b'.' => {
                while i + 1 < bytes.len()
                    && matches!(bytes[i + 1], b'0'..=b'9' | b'.' | b'e' | b'E' | b'-' | b'+')
                {
                    i += 1;
                }
                tokens.push(Token::Number(text[start..=i].parse().unwrap()));
            }
            other => panic!("unexpected character {:?}", other as char),
        }
        i += 1;
    }
    tokens
}

#[test]
fn tokenize_point() {
    assert_eq!(
        tokenize("POINT Z (1 -2.5 3e2)"),
        vec![
            Token::Text("POINT"),
            Token::Text("Z"),
            Token::LeftParen,
            Token::Number(1.),
            Token::Number(-2.5),
            Token::Number(300.),
            Token::RightParen,
        ]
    );
}
