//! AST processors and printers over real programs.

use crate::common::{run, run_with, session_with};
use cell_fmt::{minimise, minimise_program};
use cell_passes::Processor;
use pretty_assertions::assert_eq;

/// Obfuscation renames symbols but not strings, so this avoids `set`.
const PROGRAM: &str = "
    double = {:(n) n * 2;};
    sum3 = {:(a, b, c) a + b + c;};
    print(sum3(double(1 + 1), 2 * 2, 10 / 4));
    for(list2(3 - 1, 'x'), print);
";

fn minimised(source: &str, processors: &[Processor]) -> String {
    let session = session_with(processors);
    let statements: Vec<_> = session
        .statements(source.chars())
        .collect::<Result<_, _>>()
        .unwrap();
    minimise_program(&statements, session.interner())
}

#[test]
fn test_processors_do_not_change_behaviour() {
    let plain = run(PROGRAM);
    assert_eq!(plain, (Ok("None".to_string()), "10.5\n2\nx\n".to_string()));
    for processors in [
        vec![Processor::Fold],
        vec![Processor::Obfuscate],
        vec![Processor::Fold, Processor::Obfuscate],
    ] {
        let processed = run_with(PROGRAM, &processors);
        assert_eq!(processed, plain, "{processors:?}");
    }
}

#[test]
fn test_fold_then_minimise() {
    assert_eq!(
        minimised("x = 1 + 2 * 3; y = x + 1 * 2;", &[Processor::Fold]),
        "x=7;y=x+2;"
    );
}

#[test]
fn test_obfuscate_then_minimise() {
    assert_eq!(
        minimised("n = 1; print(n + 1);", &[Processor::Obfuscate]),
        "obs_6e=1;print(obs_6e+1);"
    );
}

#[test]
fn test_obfuscated_program_runs_in_the_same_session() {
    let session = session_with(&[Processor::Obfuscate]);
    session.run_source("x = 4;").unwrap();
    let value = session.run_source("x * 2;").unwrap();
    assert_eq!(value.to_string(), "8");
    assert!(session.run_source("obs_78;").is_ok());
}

#[test]
fn test_minimised_program_runs_the_same() {
    let source = "
        greet = {:(name) print(concat(\"hi \", name));};
        for(list2(\"a\", \"b\"), greet);
    ";
    let compact = minimised(source, &[]);
    assert_eq!(run(&compact), run(source));
}

#[test]
fn test_minimise_picks_quotes() {
    let session = session_with(&[]);
    let statements: Vec<_> = session
        .statements("print(\"it's\"); print('say \"hi\"');".chars())
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(minimise(&statements[0], session.interner()), "print(\"it's\")");
    assert_eq!(minimise(&statements[1], session.interner()), "print('say \"hi\"')");
}
