//! Runtime values.

use std::fmt;
use std::rc::Rc;

use cell_ir::number::format_number;
use cell_ir::{snapshot, Expr, FunctionDef, StringInterner};

use crate::errors::{Arity, EvalResult};
use crate::{Environment, Interpreter};

/// Signature of a native function: the interpreter (for interning, output
/// and calling function values), the caller's environment and the
/// evaluated arguments.
pub type NativeFn = fn(&Interpreter<'_>, &Environment, &[Value]) -> EvalResult;

/// A runtime value.
#[derive(Clone)]
pub enum Value {
    Number(f64),
    Str(Rc<str>),
    None,
    /// A user-defined function and the scope it was defined in.
    Function(Rc<FunctionValue>),
    Native(NativeFunction),
}

/// A closure: a function literal paired with its defining scope.
pub struct FunctionValue {
    pub def: Rc<FunctionDef>,
    pub closure: Environment,
}

impl FunctionValue {
    pub fn arity(&self) -> Arity {
        Arity::exact(self.def.params.len())
    }
}

/// A function implemented in Rust.
#[derive(Copy, Clone)]
pub struct NativeFunction {
    pub name: &'static str,
    pub arity: Arity,
    pub func: NativeFn,
}

impl Value {
    pub fn string(s: &str) -> Self {
        Value::Str(Rc::from(s))
    }

    pub fn function(def: Rc<FunctionDef>, closure: Environment) -> Self {
        Value::Function(Rc::new(FunctionValue { def, closure }))
    }

    pub fn native(name: &'static str, arity: Arity, func: NativeFn) -> Self {
        Value::Native(NativeFunction { name, arity, func })
    }

    /// Number 1 or 0.
    pub fn from_bool(b: bool) -> Self {
        Value::Number(if b { 1.0 } else { 0.0 })
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Language-level equality: numbers and strings by value, functions
    /// only when they are the same function value.
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::None, Value::None) => true,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Native(a), Value::Native(b)) => a.name == b.name,
            _ => false,
        }
    }

    /// Tuple rendering for error messages, e.g. `('number', 3)`.
    pub fn snapshot(&self, interner: &StringInterner) -> String {
        match self {
            Value::Number(n) => format!("('number', {})", format_number(*n)),
            Value::Str(s) => format!("('string', '{s}')"),
            Value::None => "('none',)".to_string(),
            Value::Function(f) => snapshot(&Expr::Function(Rc::clone(&f.def)), interner),
            Value::Native(n) => format!("('native', '{}')", n.name),
        }
    }
}

/// How `print` and the REPL show a value.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Str(s) => f.write_str(s),
            Value::None => f.write_str("None"),
            Value::Function(_) => f.write_str("<function>"),
            Value::Native(n) => write!(f, "<native {}>", n.name),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "Number({n})"),
            Value::Str(s) => write!(f, "Str({s:?})"),
            Value::None => f.write_str("None"),
            Value::Function(func) => write!(f, "Function({:?})", func.def.params),
            Value::Native(n) => write!(f, "Native({})", n.name),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}
