//! Functions implemented in Rust.
//!
//! Argument counts are checked by the interpreter against each entry's
//! [`Arity`] before the function runs, so the bodies index `args` freely.

use cell_eval::{native_error, Arity, Environment, EvalResult, Interpreter, NativeFunction, Value};

/// Every native function, in registration order.
pub const NATIVES: &[NativeFunction] = &[
    NativeFunction {
        name: "if",
        arity: Arity::range(2, 3),
        func: if_fn,
    },
    NativeFunction {
        name: "equals",
        arity: Arity::exact(2),
        func: equals_fn,
    },
    NativeFunction {
        name: "set",
        arity: Arity::exact(2),
        func: set_fn,
    },
    NativeFunction {
        name: "char_at",
        arity: Arity::exact(2),
        func: char_at_fn,
    },
    NativeFunction {
        name: "len",
        arity: Arity::exact(1),
        func: len_fn,
    },
    NativeFunction {
        name: "concat",
        arity: Arity::exact(2),
        func: concat_fn,
    },
    NativeFunction {
        name: "print",
        arity: Arity::exact(1),
        func: print_fn,
    },
];

/// `if(test, then, else?)`: calls `then()` when `test` is non-zero,
/// otherwise `else()` (or yields none).
fn if_fn(interp: &Interpreter<'_>, env: &Environment, args: &[Value]) -> EvalResult {
    let Some(test) = args[0].as_number() else {
        return Err(native_error(
            "if",
            format!(
                "Only numbers may be passed to an if, but I was passed {}",
                args[0].snapshot(interp.interner())
            ),
        ));
    };
    let branch = if test == 0.0 { args.get(2) } else { args.get(1) };
    match branch {
        Some(func) => interp.call_value(func, &[], env),
        None => Ok(Value::None),
    }
}

/// `equals(a, b)`: 1 or 0.
fn equals_fn(_: &Interpreter<'_>, _: &Environment, args: &[Value]) -> EvalResult {
    Ok(Value::from_bool(args[0].equals(&args[1])))
}

/// `set(name, value)`: overwrite an existing binding, found by walking
/// out from the caller's scope.
fn set_fn(interp: &Interpreter<'_>, env: &Environment, args: &[Value]) -> EvalResult {
    let Some(text) = args[0].as_str() else {
        return Err(native_error(
            "set",
            format!(
                "set() takes a string as its first argument, but was: {}",
                args[0].snapshot(interp.interner())
            ),
        ));
    };
    let value = args[1].clone();
    let assigned = interp
        .interner()
        .get(text)
        .is_some_and(|name| env.assign(name, value.clone()).is_ok());
    if assigned {
        Ok(value)
    } else {
        Err(native_error(
            "set",
            format!("Attempted to set name '{text}' but it does not exist."),
        ))
    }
}

/// `char_at(index, string)`: the character at the rounded index, or none
/// when out of range.
fn char_at_fn(_: &Interpreter<'_>, _: &Environment, args: &[Value]) -> EvalResult {
    let Some(index) = args[0].as_number() else {
        return Err(native_error(
            "char_at",
            "char_at() must take a number as its first argument.",
        ));
    };
    let Some(s) = args[1].as_str() else {
        return Err(native_error(
            "char_at",
            "char_at() must take a string as its second argument.",
        ));
    };
    // Halves round up, as in `Math.round`.
    let index = (index + 0.5).floor();
    if index.is_nan() || index < 0.0 {
        return Ok(Value::None);
    }
    Ok(s.chars()
        .nth(index as usize)
        .map_or(Value::None, |c| Value::string(c.encode_utf8(&mut [0; 4]))))
}

/// `len(string)`: number of characters.
fn len_fn(_: &Interpreter<'_>, _: &Environment, args: &[Value]) -> EvalResult {
    match args[0].as_str() {
        Some(s) => Ok(Value::Number(s.chars().count() as f64)),
        None => Err(native_error("len", "len() can only be called for a string.")),
    }
}

/// `concat(a, b)`: the two strings joined.
fn concat_fn(_: &Interpreter<'_>, _: &Environment, args: &[Value]) -> EvalResult {
    let Some(a) = args[0].as_str() else {
        return Err(native_error(
            "concat",
            "concat() must take a string as its first argument.",
        ));
    };
    let Some(b) = args[1].as_str() else {
        return Err(native_error(
            "concat",
            "concat() must take a string as its second argument.",
        ));
    };
    Ok(Value::string(&format!("{a}{b}")))
}

/// `print(value)`: writes the value and a newline; yields none.
fn print_fn(interp: &Interpreter<'_>, _: &Environment, args: &[Value]) -> EvalResult {
    interp.print_handler().println(&args[0].to_string());
    Ok(Value::None)
}
