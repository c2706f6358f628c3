//! Shared helpers for phase tests.

use cell_eval::{buffer_handler, Value};
use cell_ir::{snapshot, StringInterner};
use cell_passes::Processor;
use cellc::Session;

/// A session whose `print` output is captured.
pub fn session_with(processors: &[Processor]) -> Session {
    Session::with_print_handler(processors, buffer_handler()).expect("library loads")
}

pub fn session() -> Session {
    session_with(&[])
}

/// Run `source` in a fresh session; returns the last value's display form
/// or the error message, plus everything printed.
pub fn run(source: &str) -> (Result<String, String>, String) {
    run_with(source, &[])
}

pub fn run_with(source: &str, processors: &[Processor]) -> (Result<String, String>, String) {
    let session = session_with(processors);
    let result = session
        .run_source(source)
        .map(|value| display(&value))
        .map_err(|err| err.to_string());
    (result, session.print_handler().get_output())
}

pub fn eval_ok(source: &str) -> String {
    match run(source).0 {
        Ok(value) => value,
        Err(err) => panic!("unexpected error for {source:?}: {err}"),
    }
}

pub fn eval_err(source: &str) -> String {
    match run(source).0 {
        Ok(value) => panic!("expected an error for {source:?}, got {value}"),
        Err(err) => err,
    }
}

pub fn output(source: &str) -> String {
    let (result, printed) = run(source);
    if let Err(err) = result {
        panic!("unexpected error for {source:?}: {err}");
    }
    printed
}

fn display(value: &Value) -> String {
    value.to_string()
}

/// Snapshots of every statement in `source`.
pub fn parse_snapshots(source: &str) -> Result<Vec<String>, String> {
    let interner = StringInterner::new();
    cell_parse::parse(source, &interner)
        .map(|statements| {
            statements
                .iter()
                .map(|stmt| snapshot(stmt, &interner))
                .collect()
        })
        .map_err(|err| err.to_string())
}
