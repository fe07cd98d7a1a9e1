use logos::Logos;

use crate::{error::LexError, rpn::BinaryOperator};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the expression language.
///
/// Identifiers cover function names, the constant `PI` and the variable `x`;
/// telling those apart is the converter's job.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Identifier tokens, such as `sin`, `PI` or `x`.
    #[regex(r"[A-Za-z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Numeric literal tokens, such as `3`, `3.14` or `.5`.
    #[regex(r"[0-9]*\.?[0-9]+", parse_number)]
    Number(f64),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// One of `+ - * / % ^`.
    #[token("+", |_| BinaryOperator::Add)]
    #[token("-", |_| BinaryOperator::Sub)]
    #[token("*", |_| BinaryOperator::Mul)]
    #[token("/", |_| BinaryOperator::Div)]
    #[token("%", |_| BinaryOperator::Mod)]
    #[token("^", |_| BinaryOperator::Pow)]
    Operator(BinaryOperator),
    /// Whitespace.
    #[regex(r"\s+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(name) => write!(f, "Identifier({name})"),
            Self::Number(value) => write!(f, "Number({value})"),
            Self::LParen => f.write_str("LeftParen"),
            Self::RParen => f.write_str("RightParen"),
            Self::Operator(op) => write!(f, "Operator({op})"),
            Self::Ignored => f.write_str("Ignored"),
        }
    }
}

/// Scans `source` into tokens paired with their byte offset.
///
/// Whitespace is dropped. Scanning stops at the first character that starts
/// no token.
///
/// # Errors
/// Returns [`LexError::UnknownSymbol`] for a character outside every
/// recognized category.
///
/// # Example
/// ```
/// use rpntab::{
///     interpreter::lexer::{Token, tokenize},
///     rpn::BinaryOperator,
/// };
///
/// let tokens = tokenize("2 * x").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(2.0), 0),
///                 (Token::Operator(BinaryOperator::Mul), 2),
///                 (Token::Identifier("x".to_string()), 4)]);
///
/// assert!(tokenize("2 $ 3").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        if let Ok(tok) = token {
            tokens.push((tok, position));
        } else {
            return Err(LexError::UnknownSymbol { symbol: lexer.slice().to_string(),
                                                 position });
        }
    }

    Ok(tokens)
}

/// Renders a token list on one line, each token followed by its offset.
///
/// Used by the `--trace` output of the binary.
#[must_use]
pub fn format_tokens(tokens: &[(Token, usize)]) -> String {
    tokens.iter()
          .map(|(token, position)| format!("{token}@{position}"))
          .collect::<Vec<_>>()
          .join(" ")
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
