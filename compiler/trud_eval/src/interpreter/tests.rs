#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use trud_ir::{Program, Span};

use super::*;
use crate::EvalErrorKind;
use crate::EvalError;

fn program(source: &str) -> Program {
    match trud_parse::parse(source) {
        Ok(program) => program,
        Err(err) => panic!("parse failed: {err}"),
    }
}

fn run(source: &str) -> EvalResult {
    Interpreter::new().evaluate(&program(source))
}

fn run_err(source: &str) -> EvalError {
    match run(source) {
        Ok(value) => panic!("expected error, got {value}"),
        Err(err) => err,
    }
}

mod statements {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_program_is_null() {
        assert_eq!(run("").unwrap(), Value::Null);
    }

    #[test]
    fn arithmetic_precedence() {
        assert_eq!(run("number x = 1 + 2 * 3;").unwrap(), Value::Number(7.0));
    }

    #[test]
    fn boolean_logic() {
        assert_eq!(
            run("bool b = true && false || true;").unwrap(),
            Value::Bool(true)
        );
    }

    #[test]
    fn comment_is_null() {
        assert_eq!(run("// just a comment").unwrap(), Value::Null);
        assert_eq!(run("1; // trailing").unwrap(), Value::Null);
    }

    #[test]
    fn declaration_evaluates_to_bound_value() {
        let value = run("<number, number> f(a) = a;").unwrap();
        assert_eq!(value.to_string(), "<function f>");
    }

    #[test]
    fn redeclaration_overwrites() {
        assert_eq!(run("number x = 1; number x = 2; x;").unwrap(), Value::Number(2.0));
    }

    #[test]
    fn string_concatenation() {
        assert_eq!(
            run(r#""hello" + " " + "world";"#).unwrap(),
            Value::string("hello world")
        );
    }

    #[test]
    fn tuple_elements_in_order() {
        assert_eq!(
            run(r#"(1 + 1, "a", true);"#).unwrap(),
            Value::tuple(vec![
                Value::Number(2.0),
                Value::string("a"),
                Value::Bool(true)
            ])
        );
    }

    #[test]
    fn failed_declaration_leaves_binding_untouched() {
        let mut interp = Interpreter::new();
        interp.evaluate(&program("number x = 1;")).unwrap();
        let err = interp.evaluate(&program("number x = y;")).unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::UndefinedVariable {
                name: "y".to_string()
            }
        );
        assert_eq!(interp.globals().lookup("x"), Some(&Value::Number(1.0)));

        interp.evaluate(&program("number z = undefined_thing;")).unwrap_err();
        assert!(!interp.globals().contains("z"));
    }

    #[test]
    fn statements_persist_across_eval_statement() {
        let mut interp = Interpreter::new();
        for stmt in &program("<number, number> sq(n) = n * n; number a = 4;").body {
            interp.eval_statement(stmt).unwrap();
        }
        let stmt = &program("sq(a);").body[0];
        assert_eq!(interp.eval_statement(stmt).unwrap(), Value::Number(16.0));
        assert_eq!(interp.globals().len(), 2);

        interp.reset();
        assert!(interp.globals().is_empty());
    }
}

mod functions {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn simple_call() {
        assert_eq!(
            run("<number, number> double(x) = x * 2; number res = double(21);").unwrap(),
            Value::Number(42.0)
        );
    }

    #[test]
    fn multiple_parameters() {
        assert_eq!(
            run("<number, number, number> add(a, b) = a + b; add(10, 20);").unwrap(),
            Value::Number(30.0)
        );
    }

    #[test]
    fn zero_parameters() {
        assert_eq!(run("<number> answer() = 42; answer();").unwrap(), Value::Number(42.0));
        assert_eq!(run("<number> seven = 7; seven();").unwrap(), Value::Number(7.0));
    }

    #[test]
    fn factorial() {
        let source = "
            <number, number> fact = match(n) {
                when n <= 1 -> 1;
                otherwise -> n * fact(n - 1);
            };
            number res = fact(5);
        ";
        assert_eq!(run(source).unwrap(), Value::Number(120.0));
    }

    #[test]
    fn fibonacci() {
        let source = "
            <number, number> fib = match(n) {
                when n <= 0 -> 0;
                when n == 1 -> 1;
                otherwise -> fib(n - 1) + fib(n - 2);
            };
            number res = fib(10);
        ";
        assert_eq!(run(source).unwrap(), Value::Number(55.0));
    }

    #[test]
    fn logic_combination() {
        let source = "
            <number, number> abs = match n {
                when n < 0 -> 0 - n;
                otherwise -> n;
            };
            <bool, bool> verify = match dummy {
                when (abs(0 - 5) == 5) && (abs(10) == 10) -> true;
                otherwise -> false;
            };
            verify(true);
        ";
        assert_eq!(run(source).unwrap(), Value::Bool(true));
    }

    #[test]
    fn functions_are_values() {
        let source = "
            <number, number> inc(n) = n + 1;
            <number, number> twice(f, x) = f(f(x));
            twice(inc, 5);
        ";
        assert_eq!(run(source).unwrap(), Value::Number(7.0));
    }

    #[test]
    fn bare_match_is_anonymous_function() {
        let value = run("match x { otherwise -> x + 1; };").unwrap();
        let Value::Function(func) = &value else {
            panic!("expected function, got {value}");
        };
        assert_eq!(func.name, FunctionValue::ANONYMOUS);
        assert_eq!(func.params, vec!["x".to_string()]);

        assert_eq!(
            run("match (a, b) { otherwise -> a * b; }(6, 7);").unwrap(),
            Value::Number(42.0)
        );
    }

    #[test]
    fn bare_match_runs_no_clause() {
        // The clause would fail if it ran.
        assert!(run("match x { when 1 -> missing; };").is_ok());
    }
}

mod matching {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_true_clause_wins() {
        let source = "
            <number> pick = match () {
                when false -> 1;
                when true -> 2;
                otherwise -> 3;
            };
            pick();
        ";
        assert_eq!(run(source).unwrap(), Value::Number(2.0));
    }

    #[test]
    fn clause_after_taken_one_is_not_evaluated() {
        let source = "
            <number, number> f = match n {
                when n > 0 -> 1;
                when missing -> 2;
            };
            f(5);
        ";
        assert_eq!(run(source).unwrap(), Value::Number(1.0));
    }

    #[test]
    fn wildcard_clause() {
        let source = "<number, number> f = match n { when _ -> n * 10; }; f(3);";
        assert_eq!(run(source).unwrap(), Value::Number(30.0));
    }

    #[test]
    fn non_bool_condition() {
        let err = run_err("<number, number> f = match n { when n -> 1; }; f(3);");
        assert_eq!(
            err.to_string(),
            "Match condition must evaluate to bool, got number"
        );
        assert_eq!(err.span, Some(Span::new(36, 37)));
    }

    #[test]
    fn no_matching_case() {
        let err = run_err("<number, number> f = match n { when n < 0 -> 1; }; f(3);");
        assert_eq!(err.kind, EvalErrorKind::NoMatchingCase);
        assert_eq!(err.to_string(), "No match case matched");
        let bt = err.backtrace.expect("raised inside a call");
        assert_eq!(bt.frames()[0].name, "f");
    }
}

mod errors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn undefined_variable_points_at_identifier() {
        let err = run_err("number x = 1;\nx + 1 + y;");
        assert_eq!(err.to_string(), "Variable or function \"y\" not found");
        assert_eq!(err.span, Some(Span::new(22, 23)));
        assert!(err.backtrace.is_none());
    }

    #[test]
    fn arity_names_both_counts() {
        let err = run_err("<number, number> f(a) = a; f(1, 2);");
        assert_eq!(
            err.kind,
            EvalErrorKind::ArityMismatch {
                name: "f".to_string(),
                expected: 1,
                got: 2,
            }
        );
        assert_eq!(err.to_string(), "Function \"f\" expects 1 arguments, got 2");
    }

    const ADD: &str = "<number, number, number> add(a, b) = a + b;";

    #[test]
    fn too_few_arguments() {
        let err = run_err(&format!("{ADD} add(1);"));
        assert_eq!(
            err.kind,
            EvalErrorKind::ArityMismatch {
                name: "add".to_string(),
                expected: 2,
                got: 1,
            }
        );
        assert_eq!(err.to_string(), "Function \"add\" expects 2 arguments, got 1");
    }

    #[test]
    fn too_many_arguments() {
        let err = run_err(&format!("{ADD} add(1, 2, 3);"));
        assert_eq!(
            err.kind,
            EvalErrorKind::ArityMismatch {
                name: "add".to_string(),
                expected: 2,
                got: 3,
            }
        );
        assert_eq!(err.to_string(), "Function \"add\" expects 2 arguments, got 3");
    }

    #[test]
    fn not_callable() {
        let err = run_err("number x = 3; x(1);");
        assert_eq!(err.to_string(), "Cannot call non-function type number");
    }

    #[test]
    fn callee_checked_before_arguments() {
        let err = run_err("number x = 3; x(missing);");
        assert_eq!(err.kind, EvalErrorKind::NotCallable { type_name: "number" });
    }

    #[test]
    fn binary_type_error() {
        let err = run_err(r#"1 + "a";"#);
        assert_eq!(
            err.to_string(),
            "Binary operator \"+\" not defined for types number and string"
        );
        assert_eq!(err.span, Some(Span::new(0, 7)));
    }

    #[test]
    fn no_short_circuit() {
        // The right operand is evaluated even though the left decides.
        let err = run_err("false && missing;");
        assert_eq!(
            err.kind,
            EvalErrorKind::UndefinedVariable {
                name: "missing".to_string()
            }
        );
    }

    #[test]
    fn unary_type_error() {
        let err = run_err("-true;");
        assert_eq!(
            err.to_string(),
            "Unary operator \"-\" not defined for type bool"
        );
    }

    #[test]
    fn no_closures() {
        let source = "
            <number, number> inner(y) = x + y;
            <number, number> outer(x) = inner(1);
            outer(5);
        ";
        let err = run_err(source);
        assert_eq!(
            err.kind,
            EvalErrorKind::UndefinedVariable {
                name: "x".to_string()
            }
        );
        let names: Vec<_> = err
            .backtrace
            .expect("raised inside a call")
            .frames()
            .iter()
            .map(|f| f.name.clone())
            .collect();
        assert_eq!(names, vec!["inner".to_string(), "outer".to_string()]);
    }

    #[test]
    fn locals_do_not_leak_after_call() {
        let err = run_err("<number, number> id(v) = v; id(1); v;");
        assert_eq!(
            err.kind,
            EvalErrorKind::UndefinedVariable {
                name: "v".to_string()
            }
        );
    }
}

mod recursion {
    use super::*;
    use pretty_assertions::assert_eq;

    const FOREVER: &str = "<number, number> forever(n) = forever(n + 1); forever(0);";

    #[test]
    fn runaway_recursion_is_fatal() {
        let mut interp = Interpreter::builder().max_call_depth(Some(200)).build();
        let err = interp.evaluate(&program(FOREVER)).unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::StackOverflow { depth: 200 });
        assert!(err.is_fatal());
        let bt = err.backtrace.expect("raised inside a call");
        assert_eq!(bt.omitted() + bt.len(), 200);
    }

    #[test]
    fn default_limit_is_reached_without_native_overflow() {
        let err = run_err(FOREVER);
        assert_eq!(
            err.kind,
            EvalErrorKind::StackOverflow {
                depth: DEFAULT_MAX_CALL_DEPTH
            }
        );
    }

    #[test]
    fn deep_but_bounded_recursion_succeeds() {
        let source = "
            <number, number> count = match n {
                when n == 0 -> 0;
                otherwise -> 1 + count(n - 1);
            };
            count(5000);
        ";
        assert_eq!(run(source).unwrap(), Value::Number(5000.0));
    }

    #[test]
    fn state_is_clean_after_overflow() {
        let mut interp = Interpreter::builder().max_call_depth(Some(50)).build();
        interp.evaluate(&program(FOREVER)).unwrap_err();
        // The overflowing call's parameter is gone.
        let err = interp.evaluate(&program("n;")).unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::UndefinedVariable {
                name: "n".to_string()
            }
        );
        let value = interp
            .evaluate(&program("<number, number> id(n) = n; id(3);"))
            .unwrap();
        assert_eq!(value, Value::Number(3.0));
    }

    #[test]
    fn builder_configuration() {
        assert_eq!(
            Interpreter::new().max_call_depth(),
            Some(DEFAULT_MAX_CALL_DEPTH)
        );
        assert_eq!(
            Interpreter::builder().max_call_depth(None).build().max_call_depth(),
            None
        );
    }
}
