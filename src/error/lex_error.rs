use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while scanning source text.
pub enum LexError {
    /// Found a character that starts no recognized token.
    UnknownSymbol {
        /// The offending character.
        symbol:   String,
        /// Byte offset of the character in the source.
        position: usize,
    },
}

impl LexError {
    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownSymbol { .. } => ErrorKind::UnknownSymbol,
        }
    }

    /// Returns the byte offset in the source where scanning failed.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnknownSymbol { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSymbol { symbol, position } => {
                write!(f, "Error at position {position}: Unknown symbol '{symbol}'.")
            },
        }
    }
}

impl std::error::Error for LexError {}
