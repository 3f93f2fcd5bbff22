//! End-to-end scenarios from `SPEC_FULL.md` §8, driven through the public `Evaluator`
//! API the same way `pyr-cli` drives it.

use pretty_assertions::assert_eq;
use pyr::{error::ErrorKind, eval::Evaluator, io::CollectSink, value::Value};

fn run(source: &str) -> Result<Value, pyr::ScriptError> {
    let mut evaluator = Evaluator::new();
    let mut sink = CollectSink::new();
    evaluator.run(source, &mut sink)
}

fn run_with_sink(source: &str) -> (Result<Value, pyr::ScriptError>, String) {
    let mut evaluator = Evaluator::new();
    let mut sink = CollectSink::new();
    let result = evaluator.run(source, &mut sink);
    (result, sink.into_output())
}

#[test]
fn flat_precedence_is_left_to_right() {
    // (2 + 3) * 4 = 20, not 2 + (3 * 4) = 14: locks the flat-precedence contract.
    let value = run("var x = 2 + 3 * 4\nx").unwrap();
    assert_eq!(value, Value::Int(20));
}

#[test]
fn reassigning_a_constant_is_a_runtime_error() {
    let err = run("con p = 3.14\nvar p = 5").unwrap_err();
    assert_eq!(err.kind, ErrorKind::RuntimeError);
    assert_eq!(err.detail, "Cannot reassign constant 'p'");
}

#[test]
fn over_on_an_undefined_name_is_a_runtime_error() {
    let err = run("over q = 5").unwrap_err();
    assert_eq!(err.kind, ErrorKind::RuntimeError);
    assert!(err.detail.contains("over"));
}

#[test]
fn over_on_an_existing_name_reassigns() {
    let value = run("var q = 1\nover q = 2\nq").unwrap();
    assert_eq!(value, Value::Int(2));
}

#[test]
fn recursive_factorial() {
    let value = run(
        "func fact(n){ if n <= 1 { return(1) } return(n * fact(n-1)) }\nfact(5)",
    )
    .unwrap();
    assert_eq!(value, Value::Int(120));
}

#[test]
fn function_call_restores_enclosing_bindings_wholesale() {
    // After the call, `a` must be bit-identical to its pre-call value even though the
    // function body mutates a variable of the same name inside its own call scope.
    let value = run(
        "var a = 1\nfunc bump(a){ over a = a + 100\nreturn(a) }\nbump(41)\na",
    )
    .unwrap();
    assert_eq!(value, Value::Int(1));
}

#[test]
fn for_loop_prints_and_leaves_final_binding() {
    let (result, output) = run_with_sink("for var i = 0 as i < 3 do i++ { exec(i) }\ni");
    assert_eq!(output, "0\n1\n2\n");
    assert_eq!(result.unwrap(), Value::Int(3));
}

#[test]
fn list_access_in_range_and_out_of_range() {
    let value = run("var a = [10, 20, 30]\na[1]").unwrap();
    assert_eq!(value, Value::Int(20));

    let err = run("var a = [10, 20, 30]\na[5]").unwrap_err();
    assert_eq!(err.kind, ErrorKind::RuntimeError);
    assert_eq!(err.detail, "List index out of range");
}

#[test]
fn list_access_with_negative_index_counts_from_the_end() {
    let value = run("var a = [10, 20, 30]\na[-1]").unwrap();
    assert_eq!(value, Value::Int(30));

    let value = run("var a = [10, 20, 30]\na[-3]").unwrap();
    assert_eq!(value, Value::Int(10));

    let err = run("var a = [10, 20, 30]\na[-4]").unwrap_err();
    assert_eq!(err.kind, ErrorKind::RuntimeError);
    assert_eq!(err.detail, "List index out of range");
}

#[test]
fn floor_division_and_modulo_round_toward_negative_infinity() {
    assert_eq!(run("7 // -2").unwrap(), Value::Int(-4));
    assert_eq!(run("7 % -2").unwrap(), Value::Int(-1));
    assert_eq!(run("-7 // 2").unwrap(), Value::Int(-4));
    assert_eq!(run("-7 % 2").unwrap(), Value::Int(1));
    assert_eq!(run("7 // 2").unwrap(), Value::Int(3));
    assert_eq!(run("7 % 2").unwrap(), Value::Int(1));
}

#[test]
fn bool_is_numerically_equal_to_matching_int_and_float() {
    assert_eq!(run("true == 1").unwrap(), Value::Bool(true));
    assert_eq!(run("false == 0").unwrap(), Value::Bool(true));
    assert_eq!(run("true == 1.0").unwrap(), Value::Bool(true));
    assert_eq!(run("true != 0").unwrap(), Value::Bool(true));
}

#[test]
fn surplus_call_arguments_are_ignored() {
    let value = run("func f(x){ return(x) }\nf(1, 2, 3)").unwrap();
    assert_eq!(value, Value::Int(1));
}

#[test]
fn approx_and_average_operators() {
    assert_eq!(run("1.005 ~= 1.0").unwrap(), Value::Bool(true));
    assert_eq!(run("1.02 ~= 1.0").unwrap(), Value::Bool(false));
    assert_eq!(run("4 ~ 6").unwrap(), Value::Float(5.0));
}

#[test]
fn division_by_zero_is_a_zero_division_error() {
    for expr in ["1 / 0", "1 // 0", "1 % 0"] {
        let err = run(expr).unwrap_err();
        assert_eq!(err.kind, ErrorKind::ZeroDivisionError);
    }
}

#[test]
fn driver_formats_booleans_and_null() {
    assert_eq!(pyr::format_result(&Value::Bool(true)), "true");
    assert_eq!(pyr::format_result(&Value::Bool(false)), "false");
    assert_eq!(pyr::format_result(&Value::Null), "null");
}

#[test]
fn while_loop_accumulates() {
    let value = run("var i = 0\nvar total = 0\nwhile i < 5 { over total = total + i\nover i = i + 1 }\ntotal").unwrap();
    assert_eq!(value, Value::Int(10));
}

#[test]
fn if_elif_else_picks_first_match() {
    let value = run("var n = 2\nif n == 1 { exec(\"one\") } elif n == 2 { n } else { n }").unwrap();
    assert_eq!(value, Value::Int(2));
}

#[test]
fn string_concatenation_is_duck_typed() {
    let value = run("\"foo\" + \"bar\"").unwrap();
    assert_eq!(value, Value::String("foobar".to_owned()));
}

#[test]
fn eager_boolean_and_or() {
    // `&` returns the right operand when the left is truthy, else the left.
    assert_eq!(run("0 & 5").unwrap(), Value::Int(0));
    assert_eq!(run("3 & 5").unwrap(), Value::Int(5));
    // `|` returns the left operand when truthy, else the right.
    assert_eq!(run("3 | 5").unwrap(), Value::Int(3));
    assert_eq!(run("0 | 5").unwrap(), Value::Int(5));
}

#[test]
fn undefined_variable_access_errors() {
    let err = run("missing").unwrap_err();
    assert_eq!(err.kind, ErrorKind::RuntimeError);
    assert_eq!(err.detail, "'missing' not defined");
}

#[test]
fn return_outside_function_is_a_runtime_error() {
    let err = run("return(1)").unwrap_err();
    assert_eq!(err.kind, ErrorKind::RuntimeError);
    assert_eq!(err.detail, "'return' outside function");
}

#[test]
fn builtin_conversions_and_len() {
    assert_eq!(run("len(\"hello\")").unwrap(), Value::Int(5));
    assert_eq!(run("len([1,2,3])").unwrap(), Value::Int(3));
    assert_eq!(run("type(1)").unwrap(), Value::String("int".to_owned()));
    assert_eq!(run("str(5)").unwrap(), Value::String("5".to_owned()));
    assert_eq!(run("int(\"5\")").unwrap(), Value::Int(5));
    assert_eq!(run("flt(5)").unwrap(), Value::Float(5.0));
    assert_eq!(run("bool(0)").unwrap(), Value::Bool(false));
    assert_eq!(run("abs(-5)").unwrap(), Value::Int(5));
    assert_eq!(run("pow(2, 10)").unwrap(), Value::Int(1024));
}

#[test]
fn wrong_argument_count_is_a_runtime_error() {
    let err = run("func f(a, b){ a }\nf(1)").unwrap_err();
    assert_eq!(err.kind, ErrorKind::RuntimeError);
}
