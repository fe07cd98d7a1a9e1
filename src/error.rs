/// Lexing errors.
///
/// Defines the errors raised while scanning source text into tokens. The only
/// lexical failure is a character outside every recognized category.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning tokens into a postfix
/// sequence: unbalanced parentheses, unknown names and tokens that cannot be
/// routed. Lexing errors are wrapped so that compilation has a single error
/// type.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while a postfix sequence is
/// evaluated: arity mismatches, division by zero and domain violations.
pub mod runtime_error;
/// Tabulation errors.
///
/// Errors raised by the sampling driver, either for an invalid range or for
/// a compile or evaluation failure surfaced while tabulating.
pub mod tabulation_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use tabulation_error::TabulationError;

/// The distinguishable kind of every failure the crate reports.
///
/// Each error type exposes a `kind()` accessor so callers can branch on what
/// went wrong without inspecting the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A character outside all recognized lexical categories.
    UnknownSymbol,
    /// Unbalanced parentheses, either unclosed or unopened.
    ParenMismatch,
    /// A token that the converter does not know how to route.
    InvalidOperation,
    /// An operator or function found fewer operands than it needs.
    InsufficientOperands,
    /// Values were left over once every operator had been applied.
    ExcessOperands,
    /// Division or modulo by exactly zero.
    DivisionByZero,
    /// A function or operator applied outside its mathematical domain.
    DomainError,
    /// A name that is neither a function, a constant nor the variable.
    UnknownFunction,
    /// A symbol that is not a recognized operator.
    UnknownOperator,
    /// Non-numeric or out-of-order bounds, or a non-positive sample count.
    InvalidRange,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::UnknownSymbol => "unknown symbol",
            Self::ParenMismatch => "parenthesis mismatch",
            Self::InvalidOperation => "invalid operation",
            Self::InsufficientOperands => "insufficient operands",
            Self::ExcessOperands => "excess operands",
            Self::DivisionByZero => "division by zero",
            Self::DomainError => "domain error",
            Self::UnknownFunction => "unknown function",
            Self::UnknownOperator => "unknown operator",
            Self::InvalidRange => "invalid range",
        };
        f.write_str(name)
    }
}
