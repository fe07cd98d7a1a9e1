use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while evaluating a postfix sequence.
///
/// Positions are indices into the postfix sequence, not the source text.
pub enum RuntimeError {
    /// An operator or function found too few values on the stack.
    InsufficientOperands {
        /// The operator or function that was short of operands.
        token: String,
        /// Index of the token in the postfix sequence.
        index: usize,
    },
    /// The sequence was empty, so no value was produced.
    EmptyExpression,
    /// More than one value remained once the sequence was consumed.
    ExcessOperands {
        /// How many values were left on the stack.
        remaining: usize,
    },
    /// Attempted division or modulo by zero.
    DivisionByZero {
        /// Index of the operator in the postfix sequence.
        index: usize,
    },
    /// A function or operator was applied outside its domain.
    DomainError {
        /// Name of the function or operator symbol.
        operation: String,
        /// The operand that is out of domain.
        argument:  f64,
        /// Index of the token in the postfix sequence.
        index:     usize,
    },
}

impl RuntimeError {
    /// Returns the kind of this error.
    ///
    /// An empty sequence is reported as a shortage of operands.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InsufficientOperands { .. } | Self::EmptyExpression => {
                ErrorKind::InsufficientOperands
            },
            Self::ExcessOperands { .. } => ErrorKind::ExcessOperands,
            Self::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            Self::DomainError { .. } => ErrorKind::DomainError,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientOperands { token, index } => write!(f,
                                                                  "Error at token {index}: Not enough operands for '{token}'."),
            Self::EmptyExpression => write!(f, "Error: Expression is empty."),
            Self::ExcessOperands { remaining } => write!(f,
                                                         "Error: Expression has too many operands ({remaining} values left)."),
            Self::DivisionByZero { index } => write!(f, "Error at token {index}: Division by zero."),
            Self::DomainError { operation,
                                argument,
                                index, } => write!(f,
                                                   "Error at token {index}: '{operation}' is undefined for {argument}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
