use crate::error::{ErrorKind, ParseError, RuntimeError};

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while tabulating an expression.
pub enum TabulationError {
    /// The bounds or the sample count are unusable.
    InvalidRange {
        /// Why the range was rejected.
        details: String,
    },
    /// The expression did not compile.
    Parse(ParseError),
    /// Evaluation failed at one of the sample points. Tabulation stops at the
    /// first such failure.
    Evaluation {
        /// The sample value being evaluated.
        x:      f64,
        /// What went wrong.
        source: RuntimeError,
    },
}

impl TabulationError {
    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidRange { .. } => ErrorKind::InvalidRange,
            Self::Parse(e) => e.kind(),
            Self::Evaluation { source, .. } => source.kind(),
        }
    }

    pub(crate) fn invalid_range(details: impl Into<String>) -> Self {
        Self::InvalidRange { details: details.into() }
    }
}

impl From<ParseError> for TabulationError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl std::fmt::Display for TabulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRange { details } => write!(f, "Error: Invalid range: {details}."),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Evaluation { x, source } => write!(f, "{source} (at x = {x})"),
        }
    }
}

impl std::error::Error for TabulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidRange { .. } => None,
            Self::Parse(e) => Some(e),
            Self::Evaluation { source, .. } => Some(source),
        }
    }
}
