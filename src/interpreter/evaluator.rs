/// Core evaluation logic.
///
/// Contains the stack machine that consumes a postfix sequence, along with
/// operand bookkeeping and error propagation.
pub mod core;

/// Binary operator evaluation.
///
/// Implements the arithmetic operators, including the zero-divisor and
/// domain checks.
pub mod binary;

/// Function evaluation.
///
/// Applies the unary builtins and negation, rejecting arguments outside each
/// function's domain.
pub mod function;
