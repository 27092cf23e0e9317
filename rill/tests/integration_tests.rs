use rill::Driver;
use rill_report::CapturingReporter;

fn interpret(source: &str) -> (bool, Vec<String>, Vec<String>) {
    let reporter = CapturingReporter::new();
    let mut driver = Driver::new(&reporter);
    let ok = driver.run(source);
    (ok, reporter.outputs(), reporter.errors())
}

fn expect_output(source: &str, expected: &[&str]) {
    let (ok, outputs, errors) = interpret(source);
    assert!(ok, "unexpected errors: {:?}", errors);
    assert_eq!(outputs, expected);
}

fn expect_runtime_error(source: &str, message: &str) {
    let (ok, _outputs, errors) = interpret(source);
    assert!(!ok);
    assert_eq!(errors, vec![format!("Runtime Error: {}", message)]);
}

#[test]
fn print_expressions() {
    expect_output("print 1 + 2 * 3;", &["7"]);
    expect_output("print \"foo\" + \"bar\";", &["foobar"]);
    expect_output("print 5 / 2;", &["2.5"]);
    expect_output("print 1 < 2;", &["true"]);
    expect_output("print !true;", &["false"]);
}

#[test]
fn fractional_arithmetic_prints_exact_decimals() {
    expect_output("print 0.1 + 0.2;", &["0.3"]);
    expect_output("print 0.3 - 0.1;", &["0.2"]);
    expect_output("print 1.1 * 3;", &["3.3"]);
}

#[test]
fn variables() {
    expect_output(
        r#"
        var a = 1;
        var b = 2;
        print a + b;"#,
        &["3"],
    );
}

#[test]
fn uninitialized_variable_is_null() {
    expect_output(
        r#"
        var a;
        print a;"#,
        &["null"],
    );
}

#[test]
fn assignment() {
    expect_output(
        r#"
        var a = 1;
        a = a + 1;
        print a;"#,
        &["2"],
    );
}

#[test]
fn shadowing_in_nested_block() {
    expect_output(
        r#"
        var a = 1;
        {
            var a = 2;
            print a;
        }
        print a;"#,
        &["2", "1"],
    );
}

#[test]
fn assignment_reaches_enclosing_scope() {
    expect_output(
        r#"
        var a = 1;
        {
            a = 2;
        }
        print a;"#,
        &["2"],
    );
}

#[test]
fn redeclaration_in_same_scope_is_an_error() {
    expect_runtime_error(
        r#"
        var a = 1;
        var a = 2;"#,
        "Variable 'a' is already defined.",
    );
}

#[test]
fn redeclaration_in_nested_scope_is_allowed() {
    expect_output(
        r#"
        var a = 1;
        {
            var a = 2;
        }
        var b = a;
        print b;"#,
        &["1"],
    );
}

#[test]
fn function_call() {
    expect_output(
        r#"
        fn printSum(a, b) {
            print a + b;
        }
        printSum(1, 2);"#,
        &["3"],
    );
}

#[test]
fn function_without_return_yields_null() {
    expect_output(
        r#"
        fn nothing() {}
        print nothing();"#,
        &["null"],
    );
}

#[test]
fn function_return_value() {
    expect_output(
        r#"
        fn sum(a, b) {
            return a + b;
        }
        print sum(40, 2);"#,
        &["42"],
    );
}

#[test]
fn function_prints_as_name() {
    expect_output(
        r#"
        fn hello() {}
        print hello;"#,
        &["<fn hello>"],
    );
}

#[test]
fn early_return() {
    expect_output(
        r#"
        fn check(n) {
            if (n > 10) {
                return "big";
            }
            return "small";
        }
        print check(20);
        print check(5);"#,
        &["big", "small"],
    );
}

#[test]
fn recursion() {
    expect_output(
        r#"
        fn fib(n) {
            if (n <= 1) {
                return n;
            }
            return fib(n - 1) + fib(n - 2);
        }
        print fib(10);"#,
        &["55"],
    );
}

#[test]
fn higher_order_functions() {
    expect_output(
        r#"
        fn double(n) {
            return n * 2;
        }
        fn twice(f, n) {
            return f(f(n));
        }
        print twice(double, 10);"#,
        &["40"],
    );
}

#[test]
fn function_body_cannot_see_caller_locals() {
    expect_runtime_error(
        r#"
        fn peek() {
            return hidden;
        }
        {
            var hidden = 1;
            print peek();
        }"#,
        "Undefined variable 'hidden'.",
    );
}

#[test]
fn arity_mismatch() {
    expect_runtime_error(
        r#"
        fn sum(a, b) {
            return a + b;
        }
        sum(1);"#,
        "Expected 2 arguments but got 1.",
    );
}

#[test]
fn calling_a_non_function() {
    expect_runtime_error(
        r#"
        var a = 1;
        a();"#,
        "Can only call functions.",
    );
}

#[test]
fn return_outside_of_function() {
    expect_runtime_error("return 1;", "Cannot return outside of a function.");
}

#[test]
fn while_loop() {
    expect_output(
        r#"
        var i = 0;
        while (i < 3) {
            print i;
            i = i + 1;
        }"#,
        &["0", "1", "2"],
    );
}

#[test]
fn assignment_in_loop_condition() {
    expect_output(
        r#"
        var total = 0;
        var n = 0;
        while ((n = n + 1) <= 3) {
            total = total + n;
        }
        print total;"#,
        &["6"],
    );
}

#[test]
fn for_loop() {
    expect_output(
        r#"
        var total = 0;
        for (var i = 0; i < 3; i = i + 1) {
            total = total + i;
        }
        print total;"#,
        &["3"],
    );
}

#[test]
fn for_loop_variable_is_scoped_to_the_loop() {
    expect_runtime_error(
        r#"
        for (var i = 0; i < 3; i = i + 1) {}
        print i;"#,
        "Undefined variable 'i'.",
    );
}

#[test]
fn for_loop_without_initializer() {
    expect_output(
        r#"
        var i = 0;
        for (; i < 3; i = i + 1) {}
        print i;"#,
        &["3"],
    );
}

#[test]
fn for_loop_without_increment() {
    expect_output(
        r#"
        for (var i = 0; i < 3;) {
            print i;
            i = i + 1;
        }"#,
        &["0", "1", "2"],
    );
}

#[test]
fn if_statement() {
    expect_output(
        r#"
        if (1 < 2) {
            print "then";
        } else {
            print "else";
        }
        if (1 > 2) {
            print "then";
        } else {
            print "else";
        }"#,
        &["then", "else"],
    );
}

#[test]
fn condition_must_be_a_bool() {
    expect_runtime_error("if (1) print 1;", "Operand must be Bool.");
}

#[test]
fn short_circuit_skips_erroring_operand() {
    expect_output(
        r#"
        print false && (1 / 0 == 0);
        print true || (1 / 0 == 0);"#,
        &["false", "true"],
    );
}

#[test]
fn division_by_zero() {
    expect_runtime_error("print 1 / 0;", "Division by zero.");
}

#[test]
fn mixed_addition_is_an_error() {
    expect_runtime_error(
        "print 1 + \"x\";",
        "Operand types must both be Numbers or both be Strings.",
    );
}

#[test]
fn runtime_error_stops_the_program() {
    let (ok, outputs, errors) = interpret(
        r#"
        print "before";
        print 1 / 0;
        print "after";"#,
    );
    assert!(!ok);
    assert_eq!(outputs, vec!["before".to_string()]);
    assert_eq!(errors, vec!["Runtime Error: Division by zero.".to_string()]);
}

#[test]
fn parse_errors_prevent_evaluation() {
    let (ok, outputs, errors) = interpret(
        r#"
        print "never";
        var 1 = 2;"#,
    );
    assert!(!ok);
    assert!(outputs.is_empty());
    assert_eq!(errors.len(), 1);
}

#[test]
fn several_parse_errors_are_reported_in_one_pass() {
    let (ok, outputs, errors) = interpret(
        r#"
        var 1 = 2;
        var 3 = 4;"#,
    );
    assert!(!ok);
    assert!(outputs.is_empty());
    assert_eq!(errors.len(), 2);
}

#[test]
fn repl_lines_share_state() {
    let reporter = CapturingReporter::new();
    let mut driver = Driver::new(&reporter);

    assert!(driver.run("var a = 1;"));
    assert!(driver.run("a = a + 1;"));
    assert!(driver.run("print a;"));
    assert_eq!(reporter.outputs(), vec!["2".to_string()]);
}

#[test]
fn run_file() {
    let reporter = CapturingReporter::new();
    let mut driver = Driver::new(&reporter);

    assert!(driver.run_file("tests/programs/fib.rill"));
    assert_eq!(reporter.outputs(), vec!["55".to_string()]);
}

#[test]
fn run_file_rejects_other_extensions() {
    let reporter = CapturingReporter::new();
    let mut driver = Driver::new(&reporter);

    assert!(!driver.run_file("tests/programs/fib.txt"));
    assert_eq!(reporter.errors(), vec!["Not a .rill file.".to_string()]);
}

#[test]
fn run_file_reports_missing_files() {
    let reporter = CapturingReporter::new();
    let mut driver = Driver::new(&reporter);

    assert!(!driver.run_file("tests/programs/missing.rill"));
    assert_eq!(
        reporter.errors(),
        vec!["File 'tests/programs/missing.rill' not found.".to_string()]
    );
}
