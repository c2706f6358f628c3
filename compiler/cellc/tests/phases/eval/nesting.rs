//! Inputs nested far deeper than the thread stack allows without growth.

use crate::common::{eval_err, eval_ok, run_with};
use cell_passes::Processor;
use pretty_assertions::assert_eq;

const DEPTH: usize = 200_000;

fn sum_chain() -> String {
    format!("{}1", "1 + ".repeat(DEPTH))
}

#[test]
fn test_deep_operation_chain_runs_and_is_freed() {
    assert_eq!(eval_ok(&format!("{};", sum_chain())), "200001");
}

#[test]
fn test_deep_chain_inside_function_body() {
    let source = format!("f = {{{};}}; f();", sum_chain());
    assert_eq!(eval_ok(&source), "200001");
}

#[test]
fn test_arity_error_on_deep_function_literal() {
    let message = eval_err(&format!("{{{};}}(5);", sum_chain()));
    assert!(message.starts_with(
        "1 arguments passed to function ('function', [], [('operation', '+', ('number', '1'), ('operation'"
    ));
    assert!(message.ends_with("but it requires 0 arguments."));
}

#[test]
fn test_deep_chain_through_passes() {
    let source = format!("x = {};", sum_chain());
    let (result, _) = run_with(&source, &[Processor::Fold, Processor::Obfuscate]);
    assert_eq!(result, Ok("200001".to_string()));
}
