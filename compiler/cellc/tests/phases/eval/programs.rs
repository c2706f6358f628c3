use crate::common::{eval_ok, output, session};
use pretty_assertions::assert_eq;

#[test]
fn test_arithmetic() {
    assert_eq!(eval_ok("3 + 4 * 5;"), "23");
    assert_eq!(eval_ok("3 - 4;"), "-1");
    assert_eq!(eval_ok("1 / 4;"), "0.25");
    assert_eq!(eval_ok("1 / 0;"), "Infinity");
}

#[test]
fn test_extreme_magnitudes_print_in_exponent_form() {
    assert_eq!(output("print(1000000000 * 1000000000 * 1000);"), "1e+21\n");
    assert_eq!(output("print(1 / 10000000);"), "1e-7\n");
    assert_eq!(eval_ok("1 / 1000000;"), "0.000001");
}

#[test]
fn test_recursion_with_if() {
    let source = "
        factorial = {:(n)
            if(equals(n, 0),
                {1;},
                {n * factorial(n - 1);}
            );
        };
        factorial(10);
    ";
    assert_eq!(eval_ok(source), "3628800");
}

#[test]
fn test_counting_loop_with_set() {
    let source = "
        i = 0;
        loop = {
            if(not(equals(i, 3)), {
                print(i);
                set(\"i\", i + 1);
                loop();
            });
        };
        loop();
    ";
    assert_eq!(output(source), "0\n1\n2\n");
}

#[test]
fn test_closures_capture_definition_scope() {
    let source = "
        make_counter = {
            count = 0;
            {set(\"count\", count + 1);};
        };
        a = make_counter();
        b = make_counter();
        a(); a(); b();
        print(a());
        print(b());
    ";
    assert_eq!(output(source), "3\n2\n");
}

#[test]
fn test_string_processing() {
    let source = "
        reverse = {:(s)
            out = \"\";
            for(chars_in(s), {:(c) set(\"out\", concat(c, out));});
            out;
        };
        reverse(\"cell\");
    ";
    assert_eq!(eval_ok(source), "llec");
}

#[test]
fn test_list_building() {
    let source = "
        squares = list0();
        for(list3(1, 2, 3), {:(x) set(\"squares\", append(squares, x * x));});
        for(squares, print);
    ";
    assert_eq!(output(source), "1\n4\n9\n");
}

#[test]
fn test_sources_share_one_environment() {
    let session = session();
    session.run_source("greeting = 'hello';").unwrap();
    let value = session.run_source("concat(greeting, ' world');").unwrap();
    assert_eq!(value.to_string(), "hello world");
}

#[test]
fn test_display_forms() {
    assert_eq!(eval_ok("None;"), "None");
    assert_eq!(eval_ok("{1;};"), "<function>");
    assert_eq!(eval_ok("print;"), "<native print>");
    assert_eq!(eval_ok("'text';"), "text");
}
