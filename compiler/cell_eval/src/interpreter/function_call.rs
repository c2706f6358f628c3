//! Function call evaluation.
//!
//! User functions run in a new scope whose parent is the scope they were
//! defined in; their arguments are evaluated in the caller's scope first.
//! Native functions get their arguments evaluated in a temporary child of
//! the caller's scope, and receive the caller's scope itself.

use super::Interpreter;
use crate::errors::{arity_mismatch, not_callable};
use crate::value::FunctionValue;
use crate::{Environment, EvalResult, Value};
use cell_ir::{snapshot, Expr};

impl Interpreter<'_> {
    /// Evaluate a call expression.
    #[tracing::instrument(level = "debug", skip_all, fields(args = args.len()))]
    pub(super) fn eval_call(&self, callee: &Expr, args: &[Expr], env: &Environment) -> EvalResult {
        let func = self.eval_expr(callee, env)?;
        match &func {
            Value::Function(f) => {
                if !f.arity().accepts(args.len()) {
                    return Err(arity_mismatch(
                        snapshot(callee, self.interner),
                        args.len(),
                        f.arity(),
                    ));
                }
                let frame = f.closure.new_scope();
                for (param, arg) in f.def.params.iter().zip(args) {
                    let value = self.eval_expr(arg, env)?;
                    self.bind(&frame, *param, value)?;
                }
                self.eval_body(&f.def.body, &frame)
            }
            Value::Native(native) => {
                if !native.arity.accepts(args.len()) {
                    return Err(arity_mismatch(
                        snapshot(callee, self.interner),
                        args.len(),
                        native.arity,
                    ));
                }
                let scope = env.new_scope();
                let values = args
                    .iter()
                    .map(|arg| self.eval_expr(arg, &scope))
                    .collect::<Result<Vec<_>, _>>()?;
                (native.func)(self, env, &values)
            }
            other => Err(not_callable(other.snapshot(self.interner))),
        }
    }

    /// Call a value with already-evaluated arguments. Used by native
    /// functions that take functions as arguments.
    pub fn call_value(&self, func: &Value, args: &[Value], env: &Environment) -> EvalResult {
        match func {
            Value::Function(f) => self.call_function(func, f, args),
            Value::Native(native) => {
                if !native.arity.accepts(args.len()) {
                    return Err(arity_mismatch(
                        func.snapshot(self.interner),
                        args.len(),
                        native.arity,
                    ));
                }
                (native.func)(self, env, args)
            }
            other => Err(not_callable(other.snapshot(self.interner))),
        }
    }

    fn call_function(&self, func: &Value, f: &FunctionValue, args: &[Value]) -> EvalResult {
        if !f.arity().accepts(args.len()) {
            return Err(arity_mismatch(
                func.snapshot(self.interner),
                args.len(),
                f.arity(),
            ));
        }
        let frame = f.closure.new_scope();
        for (param, value) in f.def.params.iter().zip(args) {
            self.bind(&frame, *param, value.clone())?;
        }
        self.eval_body(&f.def.body, &frame)
    }
}
