use std::fs;

use minic::{
    error::{Error, RuntimeError},
    evaluate, evaluate_with,
    interpreter::{evaluator::core::EvalOptions, value::core::Value},
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn sample_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "mc"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        count += 1;

        match header(&source) {
            Some(("expect", expected)) => match evaluate(&source) {
                Ok(result) => assert_eq!(result.value.to_string(), expected, "in {path:?}"),
                Err(e) => panic!("Program {path:?} failed:\n{source}\nError: {e}"),
            },
            Some(("error", fragment)) => match evaluate(&source) {
                Ok(result) => panic!("Program {path:?} succeeded with {} but was expected to fail",
                                     result.value),
                Err(e) => assert!(e.to_string().contains(fragment),
                                  "{path:?}: error {e:?} does not mention {fragment:?}"),
            },
            _ => panic!("Program {path:?} has no '// expect:' or '// error:' header"),
        }
    }

    assert!(count > 0, "No sample programs found in tests/programs");
}

/// Reads the `// expect: <value>` or `// error: <fragment>` line a sample
/// program starts with.
fn header(source: &str) -> Option<(&str, &str)> {
    let line = source.lines().next()?.trim().strip_prefix("//")?;
    let (key, value) = line.split_once(':')?;
    Some((key.trim(), value.trim()))
}

fn assert_value(src: &str, expected: Value) {
    match evaluate(src) {
        Ok(result) => assert_eq!(result.value, expected),
        Err(e) => panic!("Program failed: {e}"),
    }
}

fn assert_failure(src: &str, expected: RuntimeError) {
    match evaluate(src) {
        Ok(result) => panic!("Program succeeded with {} but was expected to fail", result.value),
        Err(e) => assert_eq!(e, Error::Runtime(expected)),
    }
}

fn assert_mismatch(src: &str) {
    match evaluate(src) {
        Err(Error::Runtime(RuntimeError::TypeMismatch { .. })) => {},
        other => panic!("Expected a type mismatch, got {other:?}"),
    }
}

#[test]
fn chains_associate_to_the_right() {
    assert_value("int main() { return 1 + 2 + 3; }", Value::Int(6));
    assert_value("int main() { return 1 + 2 * 3; }", Value::Int(7));
    assert_value("int main() { return 2 * 3 + 1; }", Value::Int(8));
    assert_value("int main() { return 10 - 2 - 3; }", Value::Int(11));
    assert_value("int main() { return (10 - 2) - 3; }", Value::Int(5));
}

#[test]
fn arithmetic_and_promotion() {
    assert_value("int main() { return 7 / 2; }", Value::Int(3));
    assert_value("int main() { return 0 - 7 / 2; }", Value::Int(-3));
    assert_value("float main() { return 7 / 2.0; }", Value::Float(3.5));
    assert_value("float main() { float x = 2; return x * 1.5; }", Value::Float(3.0));
    assert_value("float main() { return 3; }", Value::Float(3.0));
    assert_value(r#"string main() { return "ab" + "cd"; }"#, Value::from("abcd"));
}

#[test]
fn large_integers_round_when_promoted() {
    assert_value("float main() { return 9007199254740993 * 1.0; }",
                 Value::Float(9_007_199_254_740_992.0));
    assert_value("float main() { float x = 9007199254740993; return x; }",
                 Value::Float(9_007_199_254_740_992.0));
    assert_value("bool main() { return 9007199254740993 > 1.5; }", Value::Bool(true));
}

#[test]
fn arithmetic_errors() {
    assert_failure("int main() { return 10 / 0; }", RuntimeError::DivisionByZero);
    assert_failure("float main() { return 1.0 / 0.0; }", RuntimeError::DivisionByZero);
    assert_failure("int main() { return 9223372036854775807 + 1; }", RuntimeError::Overflow);
    assert_failure("int main() { int x = 9223372036854775807; x++; return x; }",
                   RuntimeError::Overflow);
    assert_mismatch(r#"string main() { return "a" + 1; }"#);
    assert_mismatch("int main() { return true + 1; }");
    assert_mismatch(r#"int main() { return "a" - "b"; }"#);
}

#[test]
fn comparisons_and_logic() {
    assert_value("bool main() { return 1 < 2; }", Value::Bool(true));
    assert_value("bool main() { return 2 >= 2.0; }", Value::Bool(true));
    assert_value(r#"bool main() { return "abc" < "abd"; }"#, Value::Bool(true));
    assert_value("bool main() { return true == false; }", Value::Bool(false));
    assert_value("bool main() { return true != false; }", Value::Bool(true));
    assert_value("bool main() { return (1 < 2) && (2 < 1); }", Value::Bool(false));
    assert_value("bool main() { return (1 < 2) || (2 < 1); }", Value::Bool(true));
    assert_mismatch("bool main() { return true < false; }");
    assert_mismatch(r#"bool main() { return 1 == "1"; }"#);
    assert_mismatch("bool main() { return 1 && true; }");
}

#[test]
fn logical_operators_evaluate_both_sides() {
    let src = r#"
        bool noisy(bool b) { print("called"); return b; }
        bool main() { return false && noisy(true); }
    "#;
    let result = evaluate(src).unwrap();

    assert_eq!(result.value, Value::Bool(false));
    assert_eq!(result.console, vec!["called".to_string()]);
}

#[test]
fn increment_and_decrement() {
    let result = evaluate("int main() { int x = 5; x--; x--; return x; }").unwrap();
    assert_eq!(result.value, Value::Int(3));
    assert_eq!(result.entry_scope["x"], Value::Int(3));

    assert_value("int main() { int x = 5; return x++; }", Value::Int(5));
    assert_value("int main() { int x = 5; return ++x; }", Value::Int(6));
    assert_value("int main() { int x = 5; return --x; }", Value::Int(4));
    assert_value("float main() { float x = 0.5; x++; return x; }", Value::Float(1.5));
    assert_mismatch("int main() { return 5++; }");
    assert_mismatch("bool main() { bool b = true; b++; return b; }");
    assert_failure("int main() { y++; return 0; }",
                   RuntimeError::UndefinedVariable { name: "y".to_string() });
}

#[test]
fn if_else_and_while() {
    assert_value("int main() { int x = 1; if (x == 1) { return 1; } else { return 2; } }",
                 Value::Int(1));
    assert_value("int main() { if (false) { return 1; } return 2; }", Value::Int(2));
    assert_value("int main() { int i = 0; int s = 0; while (i < 5) { i++; s = s + i; } return s; }",
                 Value::Int(15));
    assert_value("int main() { int i = 0; while (true) { i++; if (i == 3) { return i; } } }",
                 Value::Int(3));
    assert_mismatch("int main() { if (1) { return 1; } return 0; }");
    assert_mismatch("int main() { while (0) { } return 0; }");
}

#[test]
fn declarations_and_scopes() {
    assert_value("int main() { int x; return x; }", Value::Int(0));
    assert_value("float main() { float x; return x; }", Value::Float(0.0));
    assert_value("bool main() { bool x; return x; }", Value::Bool(false));
    assert_value(r#"string main() { string s; return s + "!"; }"#, Value::from("!"));
    assert_failure("int main() { int x = 1; int x = 2; return x; }",
                   RuntimeError::DuplicateDeclaration { name: "x".to_string() });
    assert_value("int main() { int x = 1; if (true) { int x = 2; } return x; }",
                 Value::Int(1));
    assert_value("int main() { int x = 1; if (true) { x = 2; } return x; }", Value::Int(2));
    assert_failure("int main() { if (true) { int y = 2; } return y; }",
                   RuntimeError::UndefinedVariable { name: "y".to_string() });
    assert_value("int main() { int i = 0; while (i < 3) { int t = i; i = t + 1; } return i; }",
                 Value::Int(3));
}

#[test]
fn typed_bindings() {
    assert_mismatch("int main() { int x = 1.5; return x; }");
    assert_mismatch("int main() { int x = 1; x = true; return x; }");
    assert_mismatch("int main() { void x; return 0; }");
    assert_mismatch("int main() { return true; }");
    assert_mismatch("int main() { return foo(); } int foo() { print(1); }");
    assert_value("float main() { float x = 1.0; x = 2; return x; }", Value::Float(2.0));
}

#[test]
fn undefined_names() {
    assert_failure("int main() { return x; }",
                   RuntimeError::UndefinedVariable { name: "x".to_string() });
    assert_failure("int main() { x = 1; return 0; }",
                   RuntimeError::UndefinedVariable { name: "x".to_string() });
    assert_failure("int main() { return nope(); }",
                   RuntimeError::UndefinedFunction { name: "nope".to_string() });
    assert_failure("int start() { return 0; }",
                   RuntimeError::UndefinedFunction { name: "main".to_string() });
}

#[test]
fn functions_and_parameters() {
    assert_value("int main() { return twice(21); } int twice(int n) { return n * 2; }",
                 Value::Int(42));
    assert_value("float main() { return half(3); } float half(float x) { return x / 2; }",
                 Value::Float(1.5));
    assert_value("int fact(int n) { if (n <= 1) { return 1; } return n * fact(n - 1); } \
                  int main() { return fact(10); }",
                 Value::Int(3_628_800));
    assert_failure("int f(int a, int b) { return a; } int main() { return f(1); }",
                   RuntimeError::ArgumentCountMismatch { name:     "f".to_string(),
                                                         expected: 2,
                                                         found:    1, });
    assert_failure("int main(int argc) { return argc; }",
                   RuntimeError::ArgumentCountMismatch { name:     "main".to_string(),
                                                         expected: 1,
                                                         found:    0, });
    assert_mismatch(r#"int f(int a) { return a; } int main() { return f("x"); }"#);
    assert_mismatch("int f(int a, int a) { return a; } int main() { return f(1, 2); }");
}

#[test]
fn frames_do_not_see_caller_variables() {
    assert_failure("int peek() { return secret; } int main() { int secret = 1; return peek(); }",
                   RuntimeError::UndefinedVariable { name: "secret".to_string() });
}

#[test]
fn function_table_errors() {
    assert_failure("int f() { return 1; } int f() { return 2; } int main() { return f(); }",
                   RuntimeError::FunctionAlreadyDefined { name: "f".to_string() });
    assert_failure("void print(int x) { } int main() { return 0; }",
                   RuntimeError::BuiltinFunctionRedefinition { name: "print".to_string() });
}

#[test]
fn void_functions_and_console() {
    let src = r#"
        void greet(string who) { print("hello " + who); }
        int main() { greet("a"); print(1.0); print(2 < 3); return 0; }
    "#;
    let result = evaluate(src).unwrap();

    assert_eq!(result.console,
               vec!["hello a".to_string(), "1.0".to_string(), "true".to_string()]);
    assert_eq!(result.functions, vec!["greet".to_string(), "main".to_string()]);
}

#[test]
fn entry_without_return_is_void() {
    assert_value("void main() { int x = 1; }", Value::Void);
    assert_value("int main() { int x = 1; }", Value::Void);
}

#[test]
fn call_depth_is_limited() {
    let options = EvalOptions { max_call_depth: 16,
                                ..EvalOptions::default() };
    let src = "int down(int n) { return down(n + 1); } int main() { return down(0); }";

    assert_eq!(evaluate_with(src, &options).unwrap_err(),
               Error::Runtime(RuntimeError::CallDepthExceeded { limit: 16 }));

    let src = "int down(int n) { if (n == 0) { return 0; } return down(n - 1); } \
               int main() { return down(10); }";
    assert_eq!(evaluate_with(src, &options).unwrap().value, Value::Int(0));
}

/// Runs `f` on a thread with a 2 MiB stack, the default for spawned threads.
fn on_small_stack<T: Send + 'static>(f: impl FnOnce() -> T + Send + 'static) -> T {
    std::thread::Builder::new().stack_size(2 << 20)
                               .spawn(f)
                               .unwrap()
                               .join()
                               .unwrap()
}

#[test]
fn default_call_depth_fits_a_small_stack() {
    let (deep, runaway) = on_small_stack(|| {
        let deep = evaluate("int down(int n) { if (n == 0) { return 0; } return down(n - 1); } \
                             int main() { return down(250); }");
        let runaway = evaluate("int down(int n) { return down(n + 1); } \
                                int main() { return down(0); }");
        (deep.map(|e| e.value), runaway.map(|e| e.value))
    });

    assert_eq!(deep, Ok(Value::Int(0)));
    assert_eq!(runaway, Err(Error::Runtime(RuntimeError::CallDepthExceeded { limit: 256 })));
}

#[test]
fn long_chains_fit_a_small_stack() {
    let value = on_small_stack(|| {
        let chain = vec!["1"; 50_000].join(" + ");
        evaluate(&format!("int main() {{ return {chain}; }}")).map(|e| e.value)
    });

    assert_eq!(value, Ok(Value::Int(50_000)));
}

#[test]
fn deep_parentheses_fit_a_small_stack() {
    let value = on_small_stack(|| {
        let depth = 20_000;
        let nested = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
        evaluate(&format!("int main() {{ return {nested}; }}")).map(|e| e.value)
    });

    assert_eq!(value, Ok(Value::Int(1)));
}

#[test]
fn entry_is_configurable() {
    let options = EvalOptions { entry: "start".to_string(),
                                ..EvalOptions::default() };

    let result = evaluate_with("int start() { return 4; } int main() { return 0; }", &options);
    assert_eq!(result.unwrap().value, Value::Int(4));
}

#[test]
fn parse_errors_surface_as_errors() {
    assert!(matches!(evaluate("int main() { return 0 }"), Err(Error::Parse(_))));
    assert!(matches!(evaluate("int main() { return 0; } }"), Err(Error::Parse(_))));
}

#[test]
fn boolean_variables_drive_branches() {
    assert_value("int main() { bool b = true; if (b) { return 1; } else { return 2; } }",
                 Value::Int(1));
    assert_failure("int main() { int x = 10 / 0; return x; }", RuntimeError::DivisionByZero);
}

#[test]
fn undefined_variables_are_found_when_running() {
    let src = "int main() { if (false) { return missing; } return 0; }";

    assert!(minic::parse_program(src).is_ok());
    assert_value(src, Value::Int(0));
    assert_failure("int main() { return missing; }",
                   RuntimeError::UndefinedVariable { name: "missing".to_string() });
}
