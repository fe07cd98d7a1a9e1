use crate::error::{ErrorKind, LexError};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or conversion to
/// postfix form.
pub enum ParseError {
    /// The source could not be scanned.
    Lex(LexError),
    /// A closing parenthesis had no opening partner, or an opening one was
    /// never closed.
    ParenMismatch {
        /// Byte offset of the unmatched parenthesis.
        position: usize,
    },
    /// A token reached the converter that it cannot route.
    InvalidOperation {
        /// The token encountered.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// An identifier that names no function, constant or variable.
    UnknownFunction {
        /// The unrecognized name.
        name:     String,
        /// Byte offset of the name.
        position: usize,
    },
    /// A symbol in postfix text that names no operator.
    UnknownOperator {
        /// The unrecognized symbol.
        symbol:   String,
        /// Byte offset of the symbol.
        position: usize,
    },
}

impl ParseError {
    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lex(e) => e.kind(),
            Self::ParenMismatch { .. } => ErrorKind::ParenMismatch,
            Self::InvalidOperation { .. } => ErrorKind::InvalidOperation,
            Self::UnknownFunction { .. } => ErrorKind::UnknownFunction,
            Self::UnknownOperator { .. } => ErrorKind::UnknownOperator,
        }
    }

    /// Returns the byte offset in the source the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Lex(e) => e.position(),
            Self::ParenMismatch { position }
            | Self::InvalidOperation { position, .. }
            | Self::UnknownFunction { position, .. }
            | Self::UnknownOperator { position, .. } => *position,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),

            Self::ParenMismatch { position } => write!(f,
                                                       "Error at position {position}: Unbalanced parenthesis."),

            Self::InvalidOperation { token, position } => write!(f,
                                                                 "Error at position {position}: Cannot place '{token}' in a postfix sequence."),

            Self::UnknownFunction { name, position } => {
                write!(f, "Error at position {position}: Unknown function '{name}'.")
            },

            Self::UnknownOperator { symbol, position } => {
                write!(f, "Error at position {position}: Unknown operator '{symbol}'.")
            },
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            _ => None,
        }
    }
}
