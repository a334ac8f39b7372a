#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    // Single character tokens.
    Semicolon,

    // Unary operators.
    Bang,
    Minus,
    Plus,
    Tilde,

    // Keywords.
    Print,
    Nil,
    True,
    False,

    // Literals.
    IntNumber,
    FloatNumber,
    Character,
    String,
    Identifier,

    // End of file.
    Eof,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Int(i64),
    Float(f64),
    Char(char),
    String(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub token_type: TokenType,
    pub lexeme: String,
    pub line: usize,
    pub literal: Option<LiteralValue>,
}
