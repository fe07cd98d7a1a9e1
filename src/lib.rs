//! # rpntab
//!
//! rpntab compiles an infix mathematical expression in one free variable `x`
//! into postfix (reverse Polish) form, then evaluates that form at many values
//! of `x`. Expressions support numbers, the constant `PI`, the operators
//! `+ - * / % ^`, unary minus, parentheses and the functions `sin`, `cos`,
//! `tan`, `log`, `sqrt` and `exp`.
//!
//! The pipeline is: tokenizer, shunting-yard converter, stack evaluator. The
//! tabulator drives the first two once and the evaluator once per sample.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::{ParseError, RuntimeError, TabulationError},
    interpreter::{
        converter::{resolve, to_rpn},
        lexer::tokenize,
        tabulator::{Domain, Table, tabulate_rpn},
    },
    rpn::Rpn,
};

/// Provides the error types for every stage.
///
/// This module defines all errors that can be raised while lexing, converting,
/// evaluating or tabulating. Each error carries a position for diagnostics and
/// exposes an [`ErrorKind`](error::ErrorKind) so callers can tell failures
/// apart without reading message text.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Attaches source offsets or postfix indices for context.
/// - Integrates with the standard `Error` trait for reporting.
pub mod error;
/// Runs the compilation and evaluation pipeline.
///
/// This module ties together lexing, conversion to postfix form, evaluation
/// and tabulation.
///
/// # Responsibilities
/// - Coordinates the tokenizer, converter and evaluator.
/// - Drives repeated evaluation across a sampled domain.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Defines the operator and function tables and the postfix sequence type.
///
/// The tables are immutable: precedence, associativity and arity are `const`
/// properties of closed enums, and the name lookups are statics.
///
/// # Responsibilities
/// - Declares `BinaryOperator`, `Function` and the constant table.
/// - Declares `Rpn`, the compiled form shared across evaluations.
/// - Renders and parses postfix text.
pub mod rpn;
/// General utilities for safe numeric conversion.
pub mod util;

pub use error::ErrorKind;

/// Compiles an infix expression into a postfix sequence.
///
/// The expression is tokenized, its identifiers and unary minus are resolved,
/// and the shunting-yard pass reorders it. Arity is not checked here; an
/// expression like `2 3` compiles and fails when evaluated.
///
/// # Errors
/// Returns an error for an unknown character, unbalanced parentheses or an
/// unknown name.
///
/// # Examples
/// ```
/// use rpntab::{ErrorKind, compile};
///
/// let rpn = compile("2 * sin(x) + 1").unwrap();
/// assert_eq!(rpn.to_string(), "2 x sin * 1 +");
///
/// assert_eq!(compile("(2+3").unwrap_err().kind(), ErrorKind::ParenMismatch);
/// assert_eq!(compile("2$3").unwrap_err().kind(), ErrorKind::UnknownSymbol);
/// ```
pub fn compile(expression: &str) -> Result<Rpn, ParseError> {
    let tokens = tokenize(expression)?;
    let resolved = resolve(&tokens)?;
    to_rpn(&resolved)
}

/// Evaluates a compiled expression with the free variable bound to `x`.
///
/// # Errors
/// Returns an error for operand-count mismatches, division by zero, or a
/// function applied outside its domain.
///
/// # Examples
/// ```
/// use rpntab::{ErrorKind, compile, evaluate};
///
/// let rpn = compile("x^2").unwrap();
/// assert_eq!(evaluate(&rpn, 3.0).unwrap(), 9.0);
///
/// let rpn = compile("log(x)").unwrap();
/// assert_eq!(evaluate(&rpn, -1.0).unwrap_err().kind(), ErrorKind::DomainError);
/// ```
pub fn evaluate(rpn: &Rpn, x: f64) -> Result<f64, RuntimeError> {
    rpn.evaluate(x)
}

/// Tabulates an expression over `n` evenly spaced points of `[a, b]`.
///
/// The range is validated first, then the expression is compiled once and
/// evaluated at every point. The first evaluation failure aborts the
/// tabulation.
///
/// # Errors
/// Returns an error for an invalid range, a compile failure, or the first
/// evaluation failure.
///
/// # Examples
/// ```
/// use rpntab::{ErrorKind, tabulate};
///
/// let table = tabulate("x^2", 0.0, 2.0, 3).unwrap();
/// assert_eq!(table.xs(), &[0.0, 1.0, 2.0]);
/// assert_eq!(table.ys(), &[0.0, 1.0, 4.0]);
///
/// assert_eq!(tabulate("x", 5.0, 1.0, 10).unwrap_err().kind(), ErrorKind::InvalidRange);
/// ```
pub fn tabulate(expression: &str, a: f64, b: f64, n: usize) -> Result<Table, TabulationError> {
    let domain = Domain::new(a, b, n)?;
    let rpn = compile(expression)?;
    tabulate_rpn(&rpn, &domain)
}
