use std::{io::Write, rc::Rc};

use thiserror::Error;

use crate::{
    ast::{
        BoolExpr, CharExpr, Expr, ExprVisitor, ExpressionStmt, FloatExpr, IntExpr, NilExpr,
        PrintStmt, Stmt, StmtVisitor, StringExpr, UnaryExpr, UnaryOperator, VariableExpr,
    },
    environment::Environment,
    value::RuntimeValue,
};

pub struct Interpreter<'g, W: Write> {
    environment: Environment<'g>,
    out: W,
}

impl<'g, W: Write> Interpreter<'g, W> {
    /// Creates an interpreter whose top-level scope is chained under
    /// `globals`. Print statements write to `out`.
    pub fn new(globals: &'g Environment<'g>, out: W) -> Interpreter<'g, W> {
        Interpreter {
            environment: Environment::with_enclosing(globals),
            out,
        }
    }

    /// Runs `statements` in order, stopping at the first runtime error.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        for statement in statements {
            self.execute(statement)?;
        }

        Ok(())
    }

    pub fn evaluate(&mut self, expr: &Expr) -> Result<RuntimeValue, RuntimeError> {
        expr.accept(self)
    }

    /// Binds `name` in the top-level scope, shadowing any builtin of the same
    /// name. Returns whether the name was new in that scope.
    pub fn define(&mut self, name: &str, value: RuntimeValue) -> bool {
        self.environment.define(name, value)
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn execute(&mut self, stmt: &Stmt) -> Result<(), RuntimeError> {
        stmt.accept(self)
    }
}

impl<W: Write> StmtVisitor<Result<(), RuntimeError>> for Interpreter<'_, W> {
    fn visit_expression_stmt(&mut self, stmt: &ExpressionStmt) -> Result<(), RuntimeError> {
        self.evaluate(&stmt.expression).map(|_| ())
    }

    fn visit_print_stmt(&mut self, stmt: &PrintStmt) -> Result<(), RuntimeError> {
        let value = self.evaluate(&stmt.expression)?;
        writeln!(self.out, "{}", value).map_err(|err| RuntimeError {
            line: stmt.line,
            message: format!("failed to write output: {}", err),
        })
    }
}

impl<W: Write> ExprVisitor<Result<RuntimeValue, RuntimeError>> for Interpreter<'_, W> {
    fn visit_int_expr(&mut self, expr: &IntExpr) -> Result<RuntimeValue, RuntimeError> {
        Ok(RuntimeValue::Int(expr.value))
    }

    fn visit_float_expr(&mut self, expr: &FloatExpr) -> Result<RuntimeValue, RuntimeError> {
        Ok(RuntimeValue::Float(expr.value))
    }

    fn visit_bool_expr(&mut self, expr: &BoolExpr) -> Result<RuntimeValue, RuntimeError> {
        Ok(RuntimeValue::Bool(expr.value))
    }

    fn visit_string_expr(&mut self, expr: &StringExpr) -> Result<RuntimeValue, RuntimeError> {
        Ok(RuntimeValue::String(Rc::new(expr.value.clone())))
    }

    fn visit_char_expr(&mut self, expr: &CharExpr) -> Result<RuntimeValue, RuntimeError> {
        Ok(RuntimeValue::Char(expr.value))
    }

    fn visit_nil_expr(&mut self, _: &NilExpr) -> Result<RuntimeValue, RuntimeError> {
        Ok(RuntimeValue::Nil)
    }

    fn visit_variable_expr(&mut self, expr: &VariableExpr) -> Result<RuntimeValue, RuntimeError> {
        match self.environment.get(&expr.name) {
            Some(value) => Ok(value.clone()),
            None => Err(RuntimeError {
                line: expr.line,
                message: format!("undefined reference to '{}'", expr.name),
            }),
        }
    }

    fn visit_unary_expr(&mut self, expr: &UnaryExpr) -> Result<RuntimeValue, RuntimeError> {
        let operand = self.evaluate(&expr.expression)?;

        Ok(match (expr.operator, operand) {
            (UnaryOperator::Not, RuntimeValue::Bool(value)) => RuntimeValue::Bool(!value),
            (UnaryOperator::Negate, RuntimeValue::Int(value)) => {
                RuntimeValue::Int(value.wrapping_neg())
            }
            (UnaryOperator::Negate, RuntimeValue::Float(value)) => RuntimeValue::Float(-value),
            (UnaryOperator::Plus, value @ (RuntimeValue::Int(_) | RuntimeValue::Float(_))) => {
                value
            }
            (UnaryOperator::BitwiseNot, RuntimeValue::Int(value)) => RuntimeValue::Int(!value),
            (operator, operand) => {
                return Err(RuntimeError {
                    line: expr.line,
                    message: type_mismatch_message(operator, &operand),
                });
            }
        })
    }
}

fn type_mismatch_message(operator: UnaryOperator, operand: &RuntimeValue) -> String {
    let type_name = operand.type_name();
    match operator {
        UnaryOperator::Not | UnaryOperator::Negate => format!("can't negate '{}'", type_name),
        UnaryOperator::Plus => format!("can't do plus for '{}'", type_name),
        UnaryOperator::BitwiseNot => {
            format!("can't perform bitwise not for '{}'", type_name)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RuntimeError {
    pub line: usize,
    pub message: String,
}
