use std::fs;

use monkey_lang::{
    error::RuntimeError,
    interpreter::{
        environment::Environment, evaluator::core::eval_program, parser::core::Parser,
        value::core::Value,
    },
    run_source,
};
use walkdir::WalkDir;

fn eval_source(source: &str) -> Result<Value, RuntimeError> {
    let mut parser = Parser::new(source);
    let program = parser.parse_program();
    assert!(parser.errors().is_empty(),
            "unexpected parse errors for {source:?}: {:?}",
            parser.errors());

    let env = Environment::new();
    eval_program(&program, &env)
}

fn assert_inspect(source: &str, expected: &str) {
    match eval_source(source) {
        Ok(value) => assert_eq!(value.to_string(), expected, "source: {source:?}"),
        Err(e) => panic!("evaluation of {source:?} failed: {e}"),
    }
}

fn assert_error(source: &str, expected: &str) {
    match eval_source(source) {
        Ok(value) => panic!("evaluation of {source:?} succeeded with {value}"),
        Err(e) => assert_eq!(e.to_string(), expected, "source: {source:?}"),
    }
}

#[test]
fn integer_arithmetic() {
    assert_inspect("5 + 5 * 2;", "15");
    assert_inspect("(5 + 5) * 2;", "20");
    assert_inspect("50 / 2 * 2 + 10", "60");
    assert_inspect("3 * (3 * 3) + 10", "37");
    assert_inspect("-50 + 100 + -50", "0");
    assert_inspect("7 / 2", "3");
    assert_inspect("-7 / 2", "-3");
    assert_inspect("-(-5)", "5");
}

#[test]
fn boolean_operators() {
    assert_inspect("1 < 2", "true");
    assert_inspect("1 > 2", "false");
    assert_inspect("1 == 1", "true");
    assert_inspect("1 != 2", "true");
    assert_inspect("true == true", "true");
    assert_inspect("true != false", "true");
    // Equality across kinds is false, not an error; only the remaining
    // operators care about matching kinds.
    assert_inspect("5 == true", "false");
    assert_inspect("5 != true", "true");
    assert_inspect("(1 < 2) == true", "true");
    assert_inspect("(1 > 2) == true", "false");
}

#[test]
fn bang_inverts_truthiness() {
    assert_inspect("!true", "false");
    assert_inspect("!false", "true");
    assert_inspect("!5", "false");
    assert_inspect("!!5", "true");
    // The untaken branch produces null, which is falsy.
    assert_inspect("!if (false) { 1 }", "true");
}

#[test]
fn conditionals_and_truthiness() {
    assert_inspect("if (true) { 10 }", "10");
    assert_inspect("if (false) { 10 }", "null");
    assert_inspect("if (1 < 2) { 10 } else { 20 }", "10");
    assert_inspect("if (1 > 2) { 10 } else { 20 }", "20");
    // Integer zero is truthy; only null and false are falsy.
    assert_inspect("if (0) { 1 } else { 2 }", "1");
}

#[test]
fn let_bindings_resolve_through_scopes() {
    assert_inspect("let a = 5; a;", "5");
    assert_inspect("let a = 5; let b = a; let c = a + b + 5; c;", "15");
    assert_inspect("let a = 5; let b = a > 3; let c = a * 99; if (b) { 10 } else { 1 };",
                   "10");
}

#[test]
fn functions_apply_positionally() {
    assert_inspect("let identity = fn(x) { x; }; identity(5);", "5");
    assert_inspect("let double = fn(x) { x * 2; }; double(5);", "10");
    assert_inspect("let add = fn(x, y) { x + y; }; add(5, 5);", "10");
    assert_inspect("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", "20");
    assert_inspect("fn(x) { x; }(5)", "5");
}

#[test]
fn closures_remember_their_definition_site() {
    assert_inspect("let newAdder = fn(x) { fn(y) { x + y } }; \
                    let addTwo = newAdder(2); \
                    addTwo(3);",
                   "5");
    // The captured binding shadows the caller's.
    assert_inspect("let x = 100; \
                    let capture = fn() { x }; \
                    let shadow = fn(x) { capture() }; \
                    shadow(1);",
                   "100");
}

#[test]
fn recursion_finds_its_own_binding() {
    assert_inspect("let f = fn(n) { if (n < 2) { n } else { f(n-1) + f(n-2) } }; f(10)",
                   "55");
}

#[test]
fn return_unwinds_only_the_enclosing_function() {
    assert_inspect("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", "10");
    assert_inspect("let f = fn() { return 9; 10; }; f();", "9");
    assert_inspect("let f = fn() { if (true) { return 1; } return 2; }; f();", "1");
    assert_inspect("5 * 5; return 2; 9;", "2");
}

#[test]
fn errors_short_circuit_evaluation() {
    assert_error("5 + true; 5;", "Type mismatch: INT + BOOL");
    assert_error("5 + true + 5;", "Type mismatch: INT + BOOL");
    assert_error("-true", "Unknown operator -BOOL");
    assert_error("true + false;", "Unknown operator: BOOL + BOOL");
    assert_error("if (10 > 1) { true + false; }", "Unknown operator: BOOL + BOOL");
    assert_error("foobar", "Variable foobar not found");
    assert_error("5(1);", "not a function: 5");
    assert_error("\"a\"(1);", "not a function: a");
}

#[test]
fn checked_integer_arithmetic() {
    assert_error("5 / 0", "Division by zero");
    assert_error("2147483647 + 1", "Integer overflow while trying to compute result");
}

#[test]
fn strings_concatenate_and_compare() {
    assert_inspect(r#""hello world""#, "hello world");
    assert_inspect(r#""a" + "b""#, "ab");
    assert_inspect(r#""a" + "b" + "c""#, "abc");
    assert_inspect(r#""hello" == "hello""#, "true");
    assert_inspect(r#""a" != "b""#, "true");
    assert_error(r#""a" - "b""#, "Unknown operator: STRING - STRING");
    assert_error(r#""a" + 1"#, "Type mismatch: STRING + INT");
}

#[test]
fn arrays_index_or_yield_null() {
    assert_inspect("[1, 2 * 2, 3 + 3]", "[1, 4, 6]");
    assert_inspect("[1, 2, 3][0] + [1, 2, 3][1];", "3");
    assert_inspect("let a = [1, 2, 3]; a[2];", "3");
    assert_inspect("[1, 2, 3][99]", "null");
    assert_inspect("[1, 2, 3][0 - 1]", "null");
    assert_inspect("[1, 2] == [1, 2]", "true");
    assert_error("5[0]", "Index operator not supported: INT");
}

#[test]
fn hashes_look_up_by_value_identity() {
    assert_inspect(r#"{"one": 1, "two": 2}["two"];"#, "2");
    assert_inspect(r#"let h = {"a": 1, 2: "b", true: 3}; h["a"]"#, "1");
    assert_inspect(r#"let h = {"a": 1, 2: "b", true: 3}; h[2]"#, "b");
    assert_inspect(r#"let h = {"a": 1, 2: "b", true: 3}; h[true]"#, "3");
    // The key is recomputed, not compared by provenance.
    assert_inspect(r#"let key = "a" + "b"; {"ab": 1}[key]"#, "1");
    assert_inspect(r#"{"a": 1}["b"]"#, "null");
    assert_inspect(r#"{}["missing"]"#, "null");
    assert_inspect(r#"{"a": 1}"#, "{a: 1}");
    assert_error(r#"{"a": 1}[fn(x) { x }];"#, "Unusuable as hash key: FUNCTION");
    assert_error("{[1]: 2}", "Unusuable as hash key: ARRAY");
}

#[test]
fn builtin_len() {
    assert_inspect(r#"len("hello");"#, "5");
    assert_inspect(r#"len("");"#, "0");
    assert_inspect("len([1, 2, 3])", "3");
    assert_inspect("len([])", "0");
    assert_error("len(1)", "Argument to `len` not supported, got INT");
    assert_error(r#"len("one", "two")"#, "Wrong number of args: got 2, expected 1");
}

#[test]
fn builtin_array_helpers() {
    assert_inspect("first([1, 2, 3])", "1");
    assert_inspect("first([])", "null");
    assert_inspect("last([1, 2, 3])", "3");
    assert_inspect("last([])", "null");
    assert_inspect("rest([1, 2, 3])", "[2, 3]");
    assert_inspect("rest([1])", "[]");
    assert_inspect("rest([])", "null");
    assert_inspect("push([1], 2)", "[1, 2]");
    // push copies; the original array is untouched.
    assert_inspect("let a = [1]; let b = push(a, 2); a", "[1]");
    assert_error("first(1)", "Argument to `first` not supported, got INT");
    assert_error("push(1, 2)", "Argument to `push` not supported, got INT");
}

#[test]
fn builtin_puts_returns_null() {
    assert_inspect(r#"puts("hello")"#, "null");
}

#[test]
fn bindings_shadow_builtins() {
    assert_inspect("let len = 5; len", "5");
}

#[test]
fn user_function_arity_is_checked() {
    assert_error("fn(x) { x }();", "Wrong number of args: got 0, expected 1");
    assert_error("let add = fn(x, y) { x + y }; add(1, 2, 3)",
                 "Wrong number of args: got 3, expected 2");
}

#[test]
fn function_values_inspect_their_source() {
    assert_inspect("fn(x) { x + 2; }", "fn(x) {\n(x + 2)\n}");
}

#[test]
fn script_corpus_matches_expected_output() {
    let mut count = 0;

    for entry in WalkDir::new("tests/scripts").into_iter()
                                              .filter_map(Result::ok)
                                              .filter(|e| {
                                                  e.path()
                                                   .extension()
                                                   .is_some_and(|ext| ext == "monkey")
                                              })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("expected");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                           panic!("failed to read {expected_path:?}: {e}")
                       });

        let env = Environment::new();
        let value =
            run_source(&source, &env).unwrap_or_else(|e| panic!("script {path:?} failed: {e}"));

        assert_eq!(value.to_string(), expected.trim(), "script {path:?}");
        count += 1;
    }

    assert!(count > 0, "no scripts found under tests/scripts");
}
