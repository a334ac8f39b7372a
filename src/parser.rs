use std::{error::Error, fmt};

use crate::{
    ast::{
        BoolExpr, CharExpr, Expr, ExpressionStmt, FloatExpr, IntExpr, NilExpr, PrintStmt, Stmt,
        StringExpr, UnaryExpr, UnaryOperator, VariableExpr,
    },
    diagnostics::Reporter,
    token::{LiteralValue, Token, TokenType},
};

pub struct Parser<'a, R: Reporter> {
    reporter: &'a mut R,
    tokens: Vec<Token>,
    current: usize,
}

impl<'a, R: Reporter> Parser<'a, R> {
    /// `tokens` must end with an `Eof` token, as produced by the scanner.
    pub fn new(reporter: &'a mut R, tokens: Vec<Token>) -> Parser<'a, R> {
        Parser {
            reporter,
            tokens,
            current: 0,
        }
    }

    pub fn parse(mut self) -> Vec<Stmt> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            self.skip_semicolons();

            if self.is_at_end() {
                break;
            }

            if let Some(statement) = self.statement_with_sync() {
                statements.push(statement);
            }
        }

        statements
    }

    fn statement_with_sync(&mut self) -> Option<Stmt> {
        match self.statement() {
            Ok(statement) => Some(statement),
            Err(_) => {
                self.synchronize();
                None
            }
        }
    }

    /// Discards tokens until the previous one was a `;` or the next one
    /// starts a print statement or ends the input.
    fn synchronize(&mut self) {
        if !self.is_at_end() {
            self.advance();
        }

        loop {
            if self.previous_type() == Some(TokenType::Semicolon) {
                break;
            }

            if let TokenType::Print | TokenType::Eof = self.peek().token_type {
                break;
            }

            self.advance();
        }
    }

    fn skip_semicolons(&mut self) {
        while !self.is_at_end() && self.match_token(TokenType::Semicolon) {}
    }

    fn statement(&mut self) -> Result<Stmt, ParserError> {
        if self.match_token(TokenType::Print) {
            self.print_stmt()
        } else {
            self.expression_stmt()
        }
    }

    fn print_stmt(&mut self) -> Result<Stmt, ParserError> {
        let line = self.previous().line;
        let expression = self.expression()?;

        self.consume(TokenType::Semicolon, "expected ';' after print statement")?;

        Ok(Stmt::Print(Box::new(PrintStmt { line, expression })))
    }

    fn expression_stmt(&mut self) -> Result<Stmt, ParserError> {
        let line = self.peek().line;
        let expression = self.expression()?;

        self.consume(
            TokenType::Semicolon,
            "expected ';' after expression statement",
        )?;

        Ok(Stmt::Expression(Box::new(ExpressionStmt { line, expression })))
    }

    fn expression(&mut self) -> Result<Expr, ParserError> {
        self.unary_expr()
    }

    fn unary_expr(&mut self) -> Result<Expr, ParserError> {
        match UnaryOperator::from_token_type(self.peek().token_type) {
            Some(operator) => {
                self.advance();
                let line = self.previous().line;
                let expression = self.unary_expr()?;
                Ok(Expr::Unary(Box::new(UnaryExpr {
                    line,
                    operator,
                    expression,
                })))
            }
            None => self.primary_expr(),
        }
    }

    fn primary_expr(&mut self) -> Result<Expr, ParserError> {
        let token = self.peek().clone();
        let line = token.line;

        let expr = match (token.token_type, token.literal) {
            (TokenType::Nil, _) => Expr::Nil(Box::new(NilExpr { line })),
            (TokenType::True, _) => Expr::Bool(Box::new(BoolExpr { line, value: true })),
            (TokenType::False, _) => Expr::Bool(Box::new(BoolExpr { line, value: false })),
            (TokenType::IntNumber, Some(LiteralValue::Int(value))) => {
                Expr::Int(Box::new(IntExpr { line, value }))
            }
            (TokenType::FloatNumber, Some(LiteralValue::Float(value))) => {
                Expr::Float(Box::new(FloatExpr { line, value }))
            }
            (TokenType::Character, Some(LiteralValue::Char(value))) => {
                Expr::Char(Box::new(CharExpr { line, value }))
            }
            (TokenType::String, Some(LiteralValue::String(value))) => {
                Expr::String(Box::new(StringExpr { line, value }))
            }
            (TokenType::Identifier, _) => Expr::Variable(Box::new(VariableExpr {
                line,
                name: token.lexeme,
            })),
            _ => return self.error(line, "expected expression"),
        };

        self.advance();
        Ok(expr)
    }

    fn is_at_end(&self) -> bool {
        self.peek().token_type == TokenType::Eof
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn previous(&self) -> &Token {
        &self.tokens[self.current - 1]
    }

    fn previous_type(&self) -> Option<TokenType> {
        self.current
            .checked_sub(1)
            .map(|index| self.tokens[index].token_type)
    }

    fn advance(&mut self) {
        if !self.is_at_end() {
            self.current += 1;
        }
    }

    fn match_token(&mut self, token_type: TokenType) -> bool {
        if self.peek().token_type == token_type {
            self.advance();
            return true;
        }

        false
    }

    fn consume(&mut self, token_type: TokenType, message: &str) -> Result<(), ParserError> {
        if self.match_token(token_type) {
            return Ok(());
        }

        self.error(self.peek().line, message)
    }

    fn error<T>(&mut self, line: usize, message: &str) -> Result<T, ParserError> {
        self.reporter.report_error(line, message);
        Err(ParserError {})
    }
}

#[derive(Debug)]
struct ParserError {}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParserError")
    }
}

impl Error for ParserError {}
