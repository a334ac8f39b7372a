use crate::diagnostics::Reporter;
use crate::token::{LiteralValue, Token, TokenType};

pub struct Scanner<'a, R: Reporter> {
    reporter: &'a mut R,
    source: &'a str,
    line: usize,
    start_line: usize,
    start: usize,
    current: usize,
    tokens: Vec<Token>,
}

impl<'a, R: Reporter> Scanner<'a, R> {
    pub fn new(reporter: &'a mut R, source: &'a str) -> Scanner<'a, R> {
        Scanner {
            reporter,
            source,
            line: 0,
            start_line: 0,
            start: 0,
            current: 0,
            tokens: Vec::new(),
        }
    }

    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;
            self.scan_token();
        }

        self.start = self.source.len();
        self.start_line = self.line;
        self.add_token(TokenType::Eof);

        self.tokens
    }

    fn scan_token(&mut self) {
        let character = self.advance();

        match character {
            ';' => self.add_token(TokenType::Semicolon),
            '!' => self.add_token(TokenType::Bang),
            '-' => self.add_token(TokenType::Minus),
            '+' => self.add_token(TokenType::Plus),
            '~' => self.add_token(TokenType::Tilde),
            '#' => self.comment(),
            '\'' => self.character(),
            '"' => self.string(),
            ' ' | '\t' | '\r' => {}
            '\n' => {
                self.line += 1;
            }
            _ => {
                if is_digit(character) {
                    self.number();
                } else if is_alpha(character) {
                    self.identifier();
                } else {
                    self.reporter.report_error(self.line, "unexpected character");
                }
            }
        }
    }

    fn comment(&mut self) {
        while !self.is_at_end() && self.peek() != '\n' {
            self.advance();
        }
    }

    fn character(&mut self) {
        let value = self.literal_char();

        if !self.match_char('\'') {
            self.reporter
                .report_error(self.line, "unterminated character literal");
        }

        let value = value.unwrap_or('\0');
        self.add_full_token(TokenType::Character, Some(LiteralValue::Char(value)));
    }

    fn string(&mut self) {
        let mut value = String::new();

        while !self.is_at_end() && self.peek() != '"' {
            if let Some(character) = self.literal_char() {
                value.push(character);
            }
        }

        if !self.match_char('"') {
            self.reporter.report_error(self.line, "unterminated string");
        }

        self.add_full_token(TokenType::String, Some(LiteralValue::String(value)));
    }

    /// Reads one logical character of a character or string literal,
    /// resolving escape sequences. Returns `None` only at end of input.
    fn literal_char(&mut self) -> Option<char> {
        if self.is_at_end() {
            return None;
        }

        let character = self.advance_in_literal();
        if character != '\\' {
            return Some(character);
        }

        if self.is_at_end() {
            return None;
        }

        let escaped = self.advance_in_literal();
        Some(match escaped {
            't' => '\t',
            'n' => '\n',
            'r' => '\r',
            '\\' | '\'' | '"' => escaped,
            _ => {
                self.reporter
                    .report_warning(self.line, "unknown escape sequence, leaving as is");
                escaped
            }
        })
    }

    fn advance_in_literal(&mut self) -> char {
        let character = self.advance();
        if character == '\n' {
            self.line += 1;
        }
        character
    }

    fn number(&mut self) {
        self.digits();

        if self.match_char('.') {
            self.digits();

            match self.lexeme().parse::<f64>() {
                Ok(value) if value.is_finite() => {
                    self.add_full_token(TokenType::FloatNumber, Some(LiteralValue::Float(value)))
                }
                _ => self
                    .reporter
                    .report_error(self.line, "float literal is too large"),
            }
        } else {
            match self.lexeme().parse::<i64>() {
                Ok(value) => {
                    self.add_full_token(TokenType::IntNumber, Some(LiteralValue::Int(value)))
                }
                Err(_) => self
                    .reporter
                    .report_error(self.line, "integer literal is too large"),
            }
        }
    }

    fn digits(&mut self) {
        while !self.is_at_end() && is_digit(self.peek()) {
            self.advance();
        }
    }

    fn identifier(&mut self) {
        while !self.is_at_end() && is_alpha_numeric(self.peek()) {
            self.advance();
        }

        let type_ = resolve_keyword_type(self.lexeme()).unwrap_or(TokenType::Identifier);
        self.add_token(type_)
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn peek(&self) -> char {
        self.source[self.current..].chars().next().unwrap_or('\0')
    }

    fn advance(&mut self) -> char {
        let current = self.peek();
        self.current += current.len_utf8();
        current
    }

    fn match_char(&mut self, character: char) -> bool {
        if !self.is_at_end() && self.peek() == character {
            self.advance();
            return true;
        }

        false
    }

    fn add_token(&mut self, token_type: TokenType) {
        self.add_full_token(token_type, None)
    }

    fn add_full_token(&mut self, token_type: TokenType, literal: Option<LiteralValue>) {
        self.tokens.push(Token {
            token_type,
            line: self.start_line,
            literal,
            lexeme: self.lexeme().to_string(),
        })
    }

    fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }
}

fn is_digit(character: char) -> bool {
    character.is_ascii_digit()
}

fn is_alpha(character: char) -> bool {
    character.is_alphabetic() || character == '_'
}

fn is_alpha_numeric(character: char) -> bool {
    is_digit(character) || is_alpha(character)
}

fn resolve_keyword_type(lexeme: &str) -> Option<TokenType> {
    match lexeme {
        "print" => Some(TokenType::Print),
        "nil" => Some(TokenType::Nil),
        "true" => Some(TokenType::True),
        "false" => Some(TokenType::False),
        _ => None,
    }
}
