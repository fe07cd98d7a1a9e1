use std::fs;

use rpntab::{ErrorKind, compile, evaluate, rpn::Rpn, tabulate};
use walkdir::WalkDir;

const TOLERANCE: f64 = 1e-9;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for line in extract_blocks(&content, "rpntab") {
            count += 1;
            let (expression, x, expected) = parse_value_line(&line);
            assert_value(expression, x, expected);
        }
        for line in extract_blocks(&content, "rpntab-error") {
            count += 1;
            let (expression, kind) = line.rsplit_once("=>")
                                         .unwrap_or_else(|| panic!("Malformed line in {path:?}: {line}"));
            assert_failure(expression.trim(), kind.trim());
        }
    }

    assert!(count > 0, "No rpntab examples found in book/src");
}

/// Collects the non-empty lines of every fenced block tagged `tag`.
fn extract_blocks(content: &str, tag: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut inside = false;

    for line in content.lines() {
        let trimmed = line.trim();
        if !inside && trimmed.strip_prefix("```") == Some(tag) {
            inside = true;
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            continue;
        }
        if inside && !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines
}

/// Splits `expression @ x => expected`; `@ x` defaults to zero.
fn parse_value_line(line: &str) -> (&str, f64, f64) {
    let (lhs, expected) = line.rsplit_once("=>")
                              .unwrap_or_else(|| panic!("Malformed example: {line}"));
    let expected = expected.trim()
                           .parse()
                           .unwrap_or_else(|_| panic!("Bad expected value: {line}"));
    match lhs.split_once('@') {
        Some((expression, x)) => {
            (expression.trim(),
             x.trim().parse().unwrap_or_else(|_| panic!("Bad x value: {line}")),
             expected)
        },
        None => (lhs.trim(), 0.0, expected),
    }
}

fn assert_close(actual: f64, expected: f64, context: &str) {
    let scale = expected.abs().max(1.0);
    assert!((actual - expected).abs() <= TOLERANCE * scale,
            "{context}: expected {expected}, got {actual}");
}

fn assert_value(src: &str, x: f64, expected: f64) {
    let rpn = compile(src).unwrap_or_else(|e| panic!("'{src}' failed to compile: {e}"));
    let actual = evaluate(&rpn, x).unwrap_or_else(|e| panic!("'{src}' at x = {x} failed: {e}"));
    assert_close(actual, expected, &format!("'{src}' at x = {x}"));
}

fn failure_kind(src: &str) -> ErrorKind {
    match compile(src) {
        Err(e) => e.kind(),
        Ok(rpn) => match evaluate(&rpn, 1.0) {
            Err(e) => e.kind(),
            Ok(v) => panic!("'{src}' succeeded with {v} but was expected to fail"),
        },
    }
}

fn assert_failure(src: &str, kind: &str) {
    assert_eq!(format!("{:?}", failure_kind(src)), kind, "wrong error kind for '{src}'");
}

#[test]
fn precedence() {
    for x in [-2.0, 0.0, 7.5] {
        assert_value("2+3*4", x, 14.0);
        assert_value("(2+3)*4", x, 20.0);
    }
    assert_value("2*3^2", 0.0, 18.0);
    assert_value("10-4/2", 0.0, 8.0);
    assert_value("7+10%4", 0.0, 9.0);
}

#[test]
fn associativity() {
    assert_value("2^3^2", 0.0, 512.0);
    assert_value("8/4/2", 0.0, 1.0);
    assert_value("10-3-2", 0.0, 5.0);
    assert_value("(2^3)^2", 0.0, 64.0);
}

#[test]
fn unary_minus() {
    assert_value("-3+5", 0.0, 2.0);
    assert_value("3*-2", 0.0, -6.0);
    assert_value("2^-1", 0.0, 0.5);
    assert_value("-(2+3)", 0.0, -5.0);
    assert_value("4-(-2)", 0.0, 6.0);
    assert_value("-x", 4.0, -4.0);
}

#[test]
fn negation_binds_tighter_than_power() {
    assert_value("-3^2", 0.0, 9.0);
    assert_value("-x^2", 3.0, 9.0);
    assert_value("-(3^2)", 0.0, -9.0);
}

#[test]
fn variable_and_constant_substitution() {
    assert_value("x^2", 3.0, 9.0);
    assert_value("2*x+1", -1.5, -2.0);

    let rpn = compile("PI").unwrap();
    for x in [-10.0, 0.0, 1e6] {
        assert_eq!(evaluate(&rpn, x).unwrap(), std::f64::consts::PI);
    }
    assert!(!rpn.uses_variable());
    assert!(compile("x*PI").unwrap().uses_variable());
}

#[test]
fn functions() {
    assert_value("sin(PI/2)", 0.0, 1.0);
    assert_value("cos(0)", 0.0, 1.0);
    assert_value("tan(x)", 0.0, 0.0);
    assert_value("log(exp(2))", 0.0, 2.0);
    assert_value("sqrt(16)+1", 0.0, 5.0);
    assert_value("exp(x)", 1.0, std::f64::consts::E);
    assert_value("2*sin(x)^2 + 2*cos(x)^2", 0.7, 2.0);
    assert_value("sqrt x", 25.0, 5.0);
}

#[test]
fn floored_modulo() {
    assert_value("7 % 3", 0.0, 1.0);
    assert_value("-7 % 3", 0.0, 2.0);
    assert_value("7 % -3", 0.0, -2.0);
    assert_value("5.5 % 2", 0.0, 1.5);
}

#[test]
fn error_kinds() {
    assert_failure("(2+3", "ParenMismatch");
    assert_failure("2+3)", "ParenMismatch");
    assert_failure(")", "ParenMismatch");
    assert_failure("2 3", "ExcessOperands");
    assert_failure("1/0", "DivisionByZero");
    assert_failure("5 % 0", "DivisionByZero");
    assert_failure("0^-1", "DivisionByZero");
    assert_failure("log(-1)", "DomainError");
    assert_failure("log(0)", "DomainError");
    assert_failure("sqrt(-4)", "DomainError");
    assert_failure("(-8)^(1/3)", "DomainError");
    assert_failure("2$3", "UnknownSymbol");
    assert_failure("sen(1)", "UnknownFunction");
    assert_failure("pi", "UnknownFunction");
    assert_failure("neg(1)", "UnknownFunction");
    assert_failure("2+", "InsufficientOperands");
    assert_failure("--3", "InsufficientOperands");
    assert_failure("sin()", "InsufficientOperands");
    assert_failure("", "InsufficientOperands");
}

#[test]
fn error_positions() {
    let err = compile("1 + 2 $").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownSymbol);
    assert_eq!(err.position(), 6);

    let err = compile("(1 + (2)").unwrap_err();
    assert_eq!(err.position(), 0);

    let err = compile("1 + foo").unwrap_err();
    assert_eq!(err.to_string(), "Error at position 4: Unknown function 'foo'.");
}

#[test]
fn tabulation() {
    let table = tabulate("x^2", 0.0, 2.0, 3).unwrap();
    assert_eq!(table.xs(), &[0.0, 1.0, 2.0]);
    assert_eq!(table.ys(), &[0.0, 1.0, 4.0]);

    let table = tabulate("2*x", 1.0, 1.0, 1).unwrap();
    assert_eq!(table.into_parts(), (vec![1.0], vec![2.0]));

    let table = tabulate("x", 0.0, 1.0, 11).unwrap();
    assert_eq!(table.len(), 11);
    assert_eq!(table.xs().last(), Some(&1.0));
    assert!(table.iter().all(|(x, y)| x == y));
}

#[test]
fn tabulation_spans_extreme_bounds() {
    let table = tabulate("x", -1e308, 1e308, 3).unwrap();
    assert_eq!(table.xs(), &[-1e308, 0.0, 1e308]);

    let table = tabulate("x", -f64::MAX, f64::MAX, 7).unwrap();
    assert_eq!(table.xs().first(), Some(&-f64::MAX));
    assert_eq!(table.xs().last(), Some(&f64::MAX));
    assert!(table.xs().iter().all(|x| x.is_finite()));
    assert!(table.xs().windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn tabulation_rejects_bad_ranges() {
    assert_eq!(tabulate("x", 5.0, 1.0, 10).unwrap_err().kind(), ErrorKind::InvalidRange);
    assert_eq!(tabulate("x", 0.0, 1.0, 0).unwrap_err().kind(), ErrorKind::InvalidRange);
    assert_eq!(tabulate("x", f64::NAN, 1.0, 3).unwrap_err().kind(), ErrorKind::InvalidRange);
    // Counts past 2^53 - 1 cannot be indexed exactly as f64.
    assert_eq!(tabulate("x", 0.0, 1.0, usize::MAX).unwrap_err().kind(), ErrorKind::InvalidRange);
    // The range is checked before the expression is compiled.
    assert_eq!(tabulate("(", 5.0, 1.0, 3).unwrap_err().kind(), ErrorKind::InvalidRange);
}

#[test]
fn tabulation_fails_fast() {
    let err = tabulate("log(x)", -1.0, 1.0, 5).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DomainError);
    assert!(matches!(err, rpntab::error::TabulationError::Evaluation { x, .. } if x == -1.0));

    let err = tabulate("1/(x-1)", 0.0, 2.0, 3).unwrap_err();
    assert!(matches!(err, rpntab::error::TabulationError::Evaluation { x, .. } if x == 1.0));

    assert_eq!(tabulate("2 3", 0.0, 1.0, 2).unwrap_err().kind(), ErrorKind::ExcessOperands);
    assert_eq!(tabulate("(x", 0.0, 1.0, 2).unwrap_err().kind(), ErrorKind::ParenMismatch);
}

#[test]
fn failing_first_sample_returns_before_large_grids_are_built() {
    let err = tabulate("log(x)", -1.0, 1.0, 1usize << 50).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DomainError);
    assert!(matches!(err, rpntab::error::TabulationError::Evaluation { x, .. } if x == -1.0));
}

#[test]
fn compilation_is_idempotent() {
    let source = "2*sin(1/((exp(3*x)+2)^3)-(tan(x+PI/2) + 1))";
    let first = compile(source).unwrap();
    let second = compile(source).unwrap();
    assert_eq!(first, second);

    for x in [0.0, 0.25, 1.0, 3.5, 10.0] {
        assert_eq!(evaluate(&first, x).unwrap().to_bits(),
                   evaluate(&second, x).unwrap().to_bits());
    }
}

#[test]
fn evaluation_is_deterministic() {
    let rpn = compile("exp(x) % 3 - sqrt(x)").unwrap();
    let reference = evaluate(&rpn, 2.2);
    for _ in 0..100 {
        assert_eq!(evaluate(&rpn, 2.2), reference);
    }
}

#[test]
fn postfix_text_round_trip() {
    let rpn = compile("-x + 3 * sin(PI)").unwrap();
    assert_eq!(rpn.to_string(), format!("x neg 3 {} sin * +", std::f64::consts::PI));

    let parsed: Rpn = rpn.to_string().parse().unwrap();
    assert_eq!(parsed, rpn);
}

#[test]
fn postfix_text_errors() {
    let kind = |s: &str| s.parse::<Rpn>().unwrap_err().kind();
    assert_eq!(kind("2 foo"), ErrorKind::UnknownFunction);
    assert_eq!(kind("2 3 &"), ErrorKind::UnknownOperator);
    assert_eq!(kind("( 2"), ErrorKind::InvalidOperation);
    assert_eq!(kind("1.2.3"), ErrorKind::UnknownSymbol);

    let rpn: Rpn = "+".parse().unwrap();
    assert_eq!(evaluate(&rpn, 0.0).unwrap_err().kind(), ErrorKind::InsufficientOperands);

    let rpn: Rpn = "  2   PI  *  ".parse().unwrap();
    assert_eq!(evaluate(&rpn, 0.0).unwrap(), 2.0 * std::f64::consts::PI);
}

#[test]
fn compiled_expressions_are_shareable_across_threads() {
    let rpn = std::sync::Arc::new(compile("x*x - 1").unwrap());
    let handles: Vec<_> = (0..4).map(|i| {
                                    let rpn = rpn.clone();
                                    std::thread::spawn(move || rpn.evaluate(f64::from(i)))
                                })
                                .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let x = f64::from(u8::try_from(i).unwrap());
        assert_eq!(handle.join().unwrap().unwrap(), x * x - 1.0);
    }
}
