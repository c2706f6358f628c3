//! Tree-walking interpreter.
//!
//! The interpreter holds no program state of its own: all bindings live
//! in the [`Environment`] passed to each call. It only carries the
//! interner (to name symbols in errors) and the print handler.

mod function_call;

use cell_ir::number::parse_number;
use cell_ir::{BinaryOp, Expr, Name, StringInterner};
use cell_lexer::Lexer;
use cell_parse::Parser;
use cell_stack::ensure_sufficient_stack;

use crate::errors::{operand_not_number, redefinition, unknown_symbol, EvalError, Side};
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::{Environment, Error, EvalResult, Value};

pub struct Interpreter<'a> {
    interner: &'a StringInterner,
    print_handler: SharedPrintHandler,
}

impl<'a> Interpreter<'a> {
    /// Interpreter printing to stdout.
    pub fn new(interner: &'a StringInterner) -> Self {
        Interpreter {
            interner,
            print_handler: stdout_handler(),
        }
    }

    #[must_use]
    pub fn with_print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = handler;
        self
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Evaluate a statement sequence in `env`, returning the last value
    /// (none for an empty sequence).
    ///
    /// Statements are pulled one at a time, so a parser can be passed in
    /// directly and each statement runs before the next one is parsed. The
    /// first error, from the sequence or from evaluation, stops everything.
    pub fn evaluate<I, E>(&self, statements: I, env: &Environment) -> Result<Value, E>
    where
        I: IntoIterator<Item = Result<Expr, E>>,
        E: From<EvalError>,
    {
        let mut result = Value::None;
        for statement in statements {
            result = self.eval_expr(&statement?, env)?;
        }
        Ok(result)
    }

    /// Evaluate a function body: each statement in turn, yielding the last.
    pub fn eval_body(&self, body: &[Expr], env: &Environment) -> EvalResult {
        let mut result = Value::None;
        for statement in body {
            result = self.eval_expr(statement, env)?;
        }
        Ok(result)
    }

    /// Lex, parse and evaluate `source` in `env`.
    pub fn run_source(&self, source: &str, env: &Environment) -> Result<Value, Error> {
        let statements = Parser::new(Lexer::new(source.chars()), self.interner);
        self.evaluate(statements.map(|s| s.map_err(Error::from)), env)
    }

    /// Evaluate one expression.
    pub fn eval_expr(&self, expr: &Expr, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| match expr {
            Expr::Number(text) => Ok(Value::Number(parse_number(text))),
            Expr::String(value) => Ok(Value::string(value)),
            Expr::Symbol(name) => env
                .lookup(*name)
                .ok_or_else(|| unknown_symbol(self.interner.lookup(*name))),
            Expr::Function(def) => Ok(Value::function(def.clone(), env.clone())),
            Expr::Operation { op, lhs, rhs } => {
                let lhs = self.eval_expr(lhs, env)?;
                let rhs = self.eval_expr(rhs, env)?;
                self.eval_operation(*op, &lhs, &rhs)
            }
            Expr::Assignment { target, value } => {
                let value = self.eval_expr(value, env)?;
                self.bind(env, *target, value.clone())?;
                Ok(value)
            }
            Expr::Call { callee, args } => self.eval_call(callee, args, env),
        })
    }

    fn eval_operation(&self, op: BinaryOp, lhs: &Value, rhs: &Value) -> EvalResult {
        let l = lhs
            .as_number()
            .ok_or_else(|| operand_not_number(op, Side::Left, lhs.snapshot(self.interner)))?;
        let r = rhs
            .as_number()
            .ok_or_else(|| operand_not_number(op, Side::Right, rhs.snapshot(self.interner)))?;
        Ok(Value::Number(op.apply(l, r)))
    }

    /// Bind `name` in `env`, failing if it is already bound there.
    fn bind(&self, env: &Environment, name: Name, value: Value) -> Result<(), EvalError> {
        env.set(name, value)
            .map_err(|_| redefinition(self.interner.lookup(name)))
    }
}
