use super::*;
use crate::StringInterner;
use pretty_assertions::assert_eq;

#[test]
fn test_binary_op_symbols_round_trip() {
    for op in [BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div] {
        assert_eq!(BinaryOp::from_symbol(op.as_symbol()), Some(op));
    }
    assert_eq!(BinaryOp::from_symbol("%"), None);
}

#[test]
fn test_binary_op_apply_follows_ieee() {
    assert_eq!(BinaryOp::Add.apply(3.0, 4.0), 7.0);
    assert_eq!(BinaryOp::Sub.apply(3.0, 4.0), -1.0);
    assert_eq!(BinaryOp::Mul.apply(3.0, 4.0), 12.0);
    assert_eq!(BinaryOp::Div.apply(3.0, 4.0), 0.75);
    assert_eq!(BinaryOp::Div.apply(1.0, 0.0), f64::INFINITY);
    assert!(BinaryOp::Div.apply(0.0, 0.0).is_nan());
}

#[test]
fn test_function_literals_compare_structurally() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let a = Expr::function(vec![x], vec![Expr::Symbol(x)]);
    let b = Expr::function(vec![x], vec![Expr::Symbol(x)]);
    assert_eq!(a, b);
    assert_ne!(a, Expr::function(vec![], vec![Expr::Symbol(x)]));
}

#[test]
fn test_kind_names() {
    let interner = StringInterner::new();
    let f = interner.intern("f");
    let call = Expr::call(Expr::Symbol(f), vec![Expr::number("1")]);
    assert_eq!(call.kind_name(), "call");
    assert_eq!(Expr::string("s").kind_name(), "string");
    assert_eq!(Expr::function(vec![], vec![]).kind_name(), "function");
}

const DEPTH: usize = 200_000;

#[test]
fn test_drop_deep_operation_chain() {
    let mut expr = Expr::number("1");
    for _ in 0..DEPTH {
        expr = Expr::operation(BinaryOp::Add, Expr::number("1"), expr);
    }
    drop(expr);
}

#[test]
fn test_drop_deep_calls_and_functions() {
    let interner = StringInterner::new();
    let f = interner.intern("f");
    let mut expr = Expr::number("1");
    for i in 0..DEPTH {
        expr = if i % 2 == 0 {
            Expr::call(Expr::Symbol(f), vec![Expr::number("2"), expr])
        } else {
            Expr::assignment(f, Expr::function(vec![], vec![expr]))
        };
    }
    drop(expr);
}

#[test]
fn test_shared_function_body_outlives_tree() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let body = Expr::operation(BinaryOp::Mul, Expr::Symbol(x), Expr::number("2"));
    let tree = Expr::assignment(x, Expr::function(vec![x], vec![body.clone()]));
    let Expr::Assignment { value, .. } = &tree else {
        panic!("expected an assignment");
    };
    let Expr::Function(def) = &**value else {
        panic!("expected a function");
    };
    let def = Rc::clone(def);
    drop(tree);
    assert_eq!(def.body, vec![body]);
}
