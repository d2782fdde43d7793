//! Core parser tests.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use trud_ir::{BinaryOp, ExprKind, Program, Span, StmtKind, UnaryOp};

use crate::parse;

fn parse_ok(source: &str) -> Program {
    match parse(source) {
        Ok(program) => program,
        Err(err) => panic!("parse failed for {source:?}: {err}"),
    }
}

/// Parse a single expression statement and return its printed form.
fn expr_str(source: &str) -> String {
    let program = parse_ok(source);
    assert_eq!(program.body.len(), 1);
    match &program.body[0].kind {
        StmtKind::ExpressionStatement { expression } => expression.to_string(),
        other => panic!("expected expression statement, got {other:?}"),
    }
}

#[test]
fn test_empty_program() {
    assert!(parse_ok("").body.is_empty());
    assert!(parse_ok("  \n\t ").body.is_empty());
}

#[test]
fn test_variable_declaration() {
    let program = parse_ok("number x = 5;");
    let stmt = &program.body[0];
    assert_eq!(stmt.span, Span::new(0, 13));
    let StmtKind::VariableDeclaration {
        var_type,
        name,
        initializer,
    } = &stmt.kind
    else {
        panic!("expected variable declaration");
    };
    assert_eq!(var_type, "number");
    assert_eq!(name, "x");
    assert!(matches!(
        initializer.kind,
        ExprKind::NumericLiteral { value, .. } if value == 5.0
    ));
}

#[test]
fn test_string_literal_is_unescaped() {
    let program = parse_ok(r#"string s = "a\"b\n";"#);
    let StmtKind::VariableDeclaration { initializer, .. } = &program.body[0].kind else {
        panic!("expected variable declaration");
    };
    let ExprKind::StringLiteral { value, raw } = &initializer.kind else {
        panic!("expected string literal");
    };
    assert_eq!(value, "a\"b\n");
    assert_eq!(raw, r#""a\"b\n""#);
}

#[test]
fn test_boolean_literals() {
    let program = parse_ok("bool t = true; bool f = false;");
    let values: Vec<bool> = program
        .body
        .iter()
        .map(|stmt| match &stmt.kind {
            StmtKind::VariableDeclaration { initializer, .. } => match initializer.kind {
                ExprKind::BooleanLiteral { value, .. } => value,
                _ => panic!("expected boolean"),
            },
            _ => panic!("expected variable declaration"),
        })
        .collect();
    assert_eq!(values, vec![true, false]);
}

#[test]
fn test_comment_statement() {
    let program = parse_ok("// just a note");
    assert_eq!(program.body.len(), 1);
    assert_eq!(
        program.body[0].kind,
        StmtKind::Comment {
            value: "// just a note".to_string()
        }
    );
}

#[test]
fn test_multiplication_binds_tighter() {
    let program = parse_ok("1 + 2 * 3;");
    let StmtKind::ExpressionStatement { expression } = &program.body[0].kind else {
        panic!("expected expression statement");
    };
    let ExprKind::Binary { op, right, .. } = &expression.kind else {
        panic!("expected binary");
    };
    assert_eq!(*op, BinaryOp::Add);
    assert!(matches!(
        right.kind,
        ExprKind::Binary {
            op: BinaryOp::Mul,
            ..
        }
    ));
}

#[test]
fn test_precedence_levels() {
    assert_eq!(expr_str("(1 + 2) * 3;"), "(1 + 2) * 3");
    assert_eq!(expr_str("a - b - c;"), "a - b - c");
    assert_eq!(expr_str("a - (b - c);"), "a - (b - c)");
    assert_eq!(expr_str("a < b == c > d;"), "a < b == c > d");
    assert_eq!(expr_str("(a == b) < c;"), "(a == b) < c");
    assert_eq!(expr_str("a || b && c;"), "a || b && c");
    assert_eq!(expr_str("(a || b) && c;"), "(a || b) && c");
    assert_eq!(expr_str("a + b < c * d && e;"), "a + b < c * d && e");
}

#[test]
fn test_relational_binds_tighter_than_equality() {
    let program = parse_ok("a < b == c;");
    let StmtKind::ExpressionStatement { expression } = &program.body[0].kind else {
        panic!("expected expression statement");
    };
    let ExprKind::Binary { op, left, .. } = &expression.kind else {
        panic!("expected binary");
    };
    assert_eq!(*op, BinaryOp::Eq);
    assert!(matches!(
        left.kind,
        ExprKind::Binary {
            op: BinaryOp::Lt,
            ..
        }
    ));
}

#[test]
fn test_unary_operators() {
    let program = parse_ok("-x * 2;");
    let StmtKind::ExpressionStatement { expression } = &program.body[0].kind else {
        panic!("expected expression statement");
    };
    let ExprKind::Binary { left, .. } = &expression.kind else {
        panic!("expected binary");
    };
    assert!(matches!(
        left.kind,
        ExprKind::Unary {
            op: UnaryOp::Neg,
            ..
        }
    ));

    assert_eq!(expr_str("!!done;"), "!!done");
    assert_eq!(expr_str("-(a + b);"), "-(a + b)");
}

#[test]
fn test_calls() {
    assert_eq!(expr_str("f();"), "f()");
    assert_eq!(expr_str("f(1, g(2), x + 1);"), "f(1, g(2), x + 1)");
    assert_eq!(expr_str("f(1)(2);"), "f(1)(2)");

    let program = parse_ok("f(1, 2);");
    let StmtKind::ExpressionStatement { expression } = &program.body[0].kind else {
        panic!("expected expression statement");
    };
    assert_eq!(expression.span, Span::new(0, 7));
    let ExprKind::Call { callee, args } = &expression.kind else {
        panic!("expected call");
    };
    assert!(matches!(&callee.kind, ExprKind::Identifier { name } if name == "f"));
    assert_eq!(args.len(), 2);
}

#[test]
fn test_tuple_literal() {
    let program = parse_ok("(1, \"two\", true);");
    let StmtKind::ExpressionStatement { expression } = &program.body[0].kind else {
        panic!("expected expression statement");
    };
    let ExprKind::TupleLiteral { elements } = &expression.kind else {
        panic!("expected tuple");
    };
    assert_eq!(elements.len(), 3);
    assert_eq!(expression.span, Span::new(0, 16));
}

#[test]
fn test_single_parenthesized_is_grouping() {
    let program = parse_ok("(x);");
    let StmtKind::ExpressionStatement { expression } = &program.body[0].kind else {
        panic!("expected expression statement");
    };
    assert!(matches!(expression.kind, ExprKind::Identifier { .. }));
}

#[test]
fn test_sugar_function_declaration() {
    let program = parse_ok("< number, number > inc(a) = a + 1;");
    let StmtKind::FunctionDeclaration(decl) = &program.body[0].kind else {
        panic!("expected function declaration");
    };
    assert_eq!(decl.name, "inc");
    assert_eq!(decl.param_types, vec!["number".to_string()]);
    assert_eq!(decl.return_type, "number");
    assert_eq!(decl.params, vec!["a".to_string()]);
    assert_eq!(decl.body.cases.len(), 1);
    assert!(decl.body.cases[0].condition.is_none());
}

#[test]
fn test_sugar_and_match_forms_agree() {
    let sugar = parse_ok("< number, number > f(a) = a + 1;");
    let matched = parse_ok("< number, number > f = match a { otherwise -> a + 1; };");
    assert_eq!(sugar.to_string(), matched.to_string());
    assert_eq!(
        sugar.to_string(),
        "<number, number> f = match a { otherwise -> a + 1; };\n"
    );
}

#[test]
fn test_match_form_function() {
    let source = "<number, number> fib = match n {
        when n < 2 -> n;
        otherwise -> fib(n - 1) + fib(n - 2);
    };";
    let program = parse_ok(source);
    let StmtKind::FunctionDeclaration(decl) = &program.body[0].kind else {
        panic!("expected function declaration");
    };
    assert_eq!(decl.params, vec!["n".to_string()]);
    assert_eq!(decl.body.cases.len(), 2);
    assert!(decl.body.cases[0].condition.is_some());
    assert!(decl.body.cases[1].condition.is_none());
    assert_eq!(program.body[0].span, Span::new(0, source.len() as u32));
}

#[test]
fn test_match_with_tuple_params_and_wildcard() {
    let program = parse_ok(
        "<number, number, number> gcd = match (a, b) {
            when b == 0 -> a;
            when _ -> gcd(b, a - b * 0);
        };",
    );
    let StmtKind::FunctionDeclaration(decl) = &program.body[0].kind else {
        panic!("expected function declaration");
    };
    assert_eq!(decl.params, vec!["a".to_string(), "b".to_string()]);
    assert!(decl.body.cases[1].condition.is_none());
}

#[test]
fn test_match_skips_comments() {
    let program = parse_ok(
        "<number, number> f = match x {
            // small
            when x < 10 -> 0;
            // everything else
            otherwise -> 1;
        };",
    );
    let StmtKind::FunctionDeclaration(decl) = &program.body[0].kind else {
        panic!("expected function declaration");
    };
    assert_eq!(decl.body.cases.len(), 2);
}

#[test]
fn test_zero_parameter_functions() {
    let program = parse_ok("<number> answer() = 42; <number> other = 7;");
    for stmt in &program.body {
        let StmtKind::FunctionDeclaration(decl) = &stmt.kind else {
            panic!("expected function declaration");
        };
        assert!(decl.params.is_empty());
        assert!(decl.param_types.is_empty());
        assert_eq!(decl.body.cases.len(), 1);
    }
    assert_eq!(
        program.to_string(),
        "<number> answer = match () { otherwise -> 42; };\n<number> other = match () { otherwise -> 7; };\n"
    );
}

#[test]
fn test_type_list_accepts_identifiers() {
    let program = parse_ok("<number, anything> f(a) = a;");
    let StmtKind::FunctionDeclaration(decl) = &program.body[0].kind else {
        panic!("expected function declaration");
    };
    assert_eq!(decl.return_type, "anything");
}

#[test]
fn test_arity_mismatch_is_accepted() {
    let program = parse_ok("<number> f(a, b) = a;");
    let StmtKind::FunctionDeclaration(decl) = &program.body[0].kind else {
        panic!("expected function declaration");
    };
    assert!(decl.param_types.is_empty());
    assert_eq!(decl.params.len(), 2);
}

#[test]
fn test_match_as_expression() {
    let program = parse_ok("number y = match x { when x > 0 -> 1; otherwise -> 0; };");
    let StmtKind::VariableDeclaration { initializer, .. } = &program.body[0].kind else {
        panic!("expected variable declaration");
    };
    assert!(matches!(initializer.kind, ExprKind::Match(_)));
}

#[test]
fn test_printed_program_reparses() {
    let source = "// fib\n<number, number> fib = match n { when n < 2 -> n; otherwise -> fib(n - 1) + fib(n - 2); };\nnumber x = fib(10);\nx * (2 + 3);\n";
    let program = parse_ok(source);
    let printed = program.to_string();
    assert_eq!(printed, source);
    assert_eq!(parse_ok(&printed).to_string(), printed);
}

#[test]
fn test_deep_nesting_does_not_overflow() {
    let depth = 5_000;
    let source = format!("{}1{};", "(".repeat(depth), ")".repeat(depth));
    let program = parse_ok(&source);
    assert_eq!(program.body.len(), 1);
}
