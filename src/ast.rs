use crate::token::TokenType;

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expression(Box<ExpressionStmt>),
    Print(Box<PrintStmt>),
}

pub trait StmtVisitor<T> {
    fn visit_expression_stmt(&mut self, stmt: &ExpressionStmt) -> T;
    fn visit_print_stmt(&mut self, stmt: &PrintStmt) -> T;
}

impl Stmt {
    pub fn accept<T, V: StmtVisitor<T>>(&self, visitor: &mut V) -> T {
        use Stmt::*;
        match self {
            Expression(stmt) => visitor.visit_expression_stmt(stmt),
            Print(stmt) => visitor.visit_print_stmt(stmt),
        }
    }

    pub fn line(&self) -> usize {
        match self {
            Stmt::Expression(stmt) => stmt.line,
            Stmt::Print(stmt) => stmt.line,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub line: usize,
    pub expression: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrintStmt {
    pub line: usize,
    pub expression: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Int(Box<IntExpr>),
    Float(Box<FloatExpr>),
    Bool(Box<BoolExpr>),
    String(Box<StringExpr>),
    Char(Box<CharExpr>),
    Nil(Box<NilExpr>),
    Variable(Box<VariableExpr>),
    Unary(Box<UnaryExpr>),
}

pub trait ExprVisitor<T> {
    fn visit_int_expr(&mut self, expr: &IntExpr) -> T;
    fn visit_float_expr(&mut self, expr: &FloatExpr) -> T;
    fn visit_bool_expr(&mut self, expr: &BoolExpr) -> T;
    fn visit_string_expr(&mut self, expr: &StringExpr) -> T;
    fn visit_char_expr(&mut self, expr: &CharExpr) -> T;
    fn visit_nil_expr(&mut self, expr: &NilExpr) -> T;
    fn visit_variable_expr(&mut self, expr: &VariableExpr) -> T;
    fn visit_unary_expr(&mut self, expr: &UnaryExpr) -> T;
}

impl Expr {
    pub fn accept<T, V: ExprVisitor<T>>(&self, visitor: &mut V) -> T {
        use Expr::*;
        match self {
            Int(expr) => visitor.visit_int_expr(expr),
            Float(expr) => visitor.visit_float_expr(expr),
            Bool(expr) => visitor.visit_bool_expr(expr),
            String(expr) => visitor.visit_string_expr(expr),
            Char(expr) => visitor.visit_char_expr(expr),
            Nil(expr) => visitor.visit_nil_expr(expr),
            Variable(expr) => visitor.visit_variable_expr(expr),
            Unary(expr) => visitor.visit_unary_expr(expr),
        }
    }

    pub fn line(&self) -> usize {
        use Expr::*;
        match self {
            Int(expr) => expr.line,
            Float(expr) => expr.line,
            Bool(expr) => expr.line,
            String(expr) => expr.line,
            Char(expr) => expr.line,
            Nil(expr) => expr.line,
            Variable(expr) => expr.line,
            Unary(expr) => expr.line,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntExpr {
    pub line: usize,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FloatExpr {
    pub line: usize,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoolExpr {
    pub line: usize,
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringExpr {
    pub line: usize,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CharExpr {
    pub line: usize,
    pub value: char,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NilExpr {
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpr {
    pub line: usize,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub line: usize,
    pub operator: UnaryOperator,
    pub expression: Expr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Not,
    Negate,
    Plus,
    BitwiseNot,
}

impl UnaryOperator {
    pub fn from_token_type(token_type: TokenType) -> Option<UnaryOperator> {
        match token_type {
            TokenType::Bang => Some(UnaryOperator::Not),
            TokenType::Minus => Some(UnaryOperator::Negate),
            TokenType::Plus => Some(UnaryOperator::Plus),
            TokenType::Tilde => Some(UnaryOperator::BitwiseNot),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts the nodes of a tree, one per visited node.
    struct NodeCounter;

    impl ExprVisitor<usize> for NodeCounter {
        fn visit_int_expr(&mut self, _: &IntExpr) -> usize {
            1
        }

        fn visit_float_expr(&mut self, _: &FloatExpr) -> usize {
            1
        }

        fn visit_bool_expr(&mut self, _: &BoolExpr) -> usize {
            1
        }

        fn visit_string_expr(&mut self, _: &StringExpr) -> usize {
            1
        }

        fn visit_char_expr(&mut self, _: &CharExpr) -> usize {
            1
        }

        fn visit_nil_expr(&mut self, _: &NilExpr) -> usize {
            1
        }

        fn visit_variable_expr(&mut self, _: &VariableExpr) -> usize {
            1
        }

        fn visit_unary_expr(&mut self, expr: &UnaryExpr) -> usize {
            1 + expr.expression.accept(self)
        }
    }

    impl StmtVisitor<usize> for NodeCounter {
        fn visit_expression_stmt(&mut self, stmt: &ExpressionStmt) -> usize {
            1 + stmt.expression.accept(self)
        }

        fn visit_print_stmt(&mut self, stmt: &PrintStmt) -> usize {
            1 + stmt.expression.accept(self)
        }
    }

    fn variable(line: usize, name: &str) -> Expr {
        Expr::Variable(Box::new(VariableExpr {
            line,
            name: name.to_string(),
        }))
    }

    fn int(line: usize, value: i64) -> Expr {
        Expr::Int(Box::new(IntExpr { line, value }))
    }

    #[test]
    fn structural_equality_compares_lines_and_values() {
        let print = Stmt::Print(Box::new(PrintStmt {
            line: 0,
            expression: variable(0, "abc"),
        }));
        assert_eq!(
            print,
            Stmt::Print(Box::new(PrintStmt {
                line: 0,
                expression: variable(0, "abc"),
            }))
        );
        assert_ne!(
            print,
            Stmt::Print(Box::new(PrintStmt {
                line: 1,
                expression: variable(0, "abc"),
            }))
        );
        assert_ne!(
            print,
            Stmt::Expression(Box::new(ExpressionStmt {
                line: 0,
                expression: variable(0, "abc"),
            }))
        );
        assert_ne!(int(0, 10), int(1, 10));
        assert_ne!(int(0, 10), variable(0, "10"));
    }

    #[test]
    fn visitor_reaches_every_node() {
        let unary = Expr::Unary(Box::new(UnaryExpr {
            line: 5,
            operator: UnaryOperator::Negate,
            expression: Expr::Unary(Box::new(UnaryExpr {
                line: 5,
                operator: UnaryOperator::BitwiseNot,
                expression: int(4, 666),
            })),
        }));
        assert_eq!(unary.accept(&mut NodeCounter), 3);
        assert_eq!(unary.line(), 5);

        let stmt = Stmt::Expression(Box::new(ExpressionStmt {
            line: 1,
            expression: Expr::Nil(Box::new(NilExpr { line: 1 })),
        }));
        assert_eq!(stmt.accept(&mut NodeCounter), 2);
        assert_eq!(stmt.line(), 1);

        for leaf in [
            Expr::Float(Box::new(FloatExpr {
                line: 0,
                value: 3.15,
            })),
            Expr::Bool(Box::new(BoolExpr {
                line: 2,
                value: true,
            })),
            Expr::Char(Box::new(CharExpr {
                line: 7,
                value: 'c',
            })),
            Expr::String(Box::new(StringExpr {
                line: 7,
                value: "string".to_string(),
            })),
        ] {
            assert_eq!(leaf.accept(&mut NodeCounter), 1);
        }
    }

    #[test]
    fn only_operator_tokens_convert_to_unary_operators() {
        assert_eq!(
            UnaryOperator::from_token_type(TokenType::Tilde),
            Some(UnaryOperator::BitwiseNot)
        );
        assert_eq!(
            UnaryOperator::from_token_type(TokenType::Bang),
            Some(UnaryOperator::Not)
        );
        assert_eq!(UnaryOperator::from_token_type(TokenType::String), None);
    }
}
