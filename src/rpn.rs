use std::{f64::consts::PI, fmt, str::FromStr};

use ordered_float::OrderedFloat;

use crate::{
    error::{LexError, ParseError},
    interpreter::evaluator::core::{EvalResult, evaluate},
};

/// Name of the free variable substituted at evaluation time.
pub const VARIABLE: &str = "x";

/// Name under which unary negation appears in postfix text.
pub const NEGATE: &str = "neg";

/// Named constants recognized in expressions.
pub static CONSTANTS: &[(&str, f64)] = &[("PI", PI)];

/// Looks up a named constant.
///
/// # Example
/// ```
/// use rpntab::rpn::constant;
///
/// assert_eq!(constant("PI"), Some(std::f64::consts::PI));
/// assert_eq!(constant("pi"), None);
/// ```
#[must_use]
pub fn constant(name: &str) -> Option<f64> {
    CONSTANTS.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
}

/// Tie-breaking rule between operators of equal precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` is `a ^ (b ^ c)`.
    Right,
}

/// Represents the binary operators of the expression language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`, floored: the result takes the sign of the divisor.
    Mod,
    /// `^`
    Pow,
}

impl BinaryOperator {
    /// Every operator, in table order.
    pub const ALL: [Self; 6] = [Self::Add, Self::Sub, Self::Mul, Self::Div, Self::Mod, Self::Pow];

    /// Binding strength; higher binds tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 2,
            Self::Mul | Self::Div | Self::Mod => 3,
            Self::Pow => 4,
        }
    }

    #[must_use]
    pub const fn associativity(self) -> Associativity {
        match self {
            Self::Pow => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    /// Number of operands consumed.
    #[must_use]
    pub const fn arity(self) -> usize {
        2
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
        }
    }

    /// Finds the operator written as `symbol`.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Represents the unary functions of the expression language.
///
/// `Negate` has no source spelling; the converter produces it for a `-` in
/// prefix position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    /// Natural logarithm.
    Log,
    Sqrt,
    Exp,
    /// Unary minus.
    Negate,
}

/// Defines the functions callable by name by generating a lookup table and a
/// name list.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $variant:ident
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[(&str, Function)] = &[
            $(
                ($name, Function::$variant),
            )*
        ];
        /// Names of every function that can be called from an expression.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"  => Sin,
    "cos"  => Cos,
    "tan"  => Tan,
    "log"  => Log,
    "sqrt" => Sqrt,
    "exp"  => Exp,
}

impl Function {
    /// Number of operands consumed.
    #[must_use]
    pub const fn arity(self) -> usize {
        1
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Sqrt => "sqrt",
            Self::Exp => "exp",
            Self::Negate => NEGATE,
        }
    }

    /// Finds a function callable by `name` from an expression.
    ///
    /// Negation is not callable by name.
    ///
    /// # Example
    /// ```
    /// use rpntab::rpn::Function;
    ///
    /// assert_eq!(Function::from_name("sqrt"), Some(Function::Sqrt));
    /// assert_eq!(Function::from_name("neg"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        BUILTIN_TABLE.iter().find(|(n, _)| *n == name).map(|(_, f)| *f)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One element of a postfix sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RpnToken {
    /// A literal or resolved constant.
    Number(OrderedFloat<f64>),
    /// The free variable, replaced by the sample value during evaluation.
    Variable,
    Function(Function),
    Operator(BinaryOperator),
}

impl RpnToken {
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number(OrderedFloat(value))
    }
}

impl fmt::Display for RpnToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{}", value.into_inner()),
            Self::Variable => f.write_str(VARIABLE),
            Self::Function(function) => write!(f, "{function}"),
            Self::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// A compiled expression in postfix (reverse Polish) order.
///
/// The sequence is immutable once built. Evaluation only reads it, so one
/// `Rpn` can be evaluated at any number of points, from any number of
/// threads.
///
/// It displays as space-separated postfix text, and that text parses back
/// with [`str::parse`].
///
/// # Example
/// ```
/// use rpntab::{compile, rpn::Rpn};
///
/// let rpn = compile("2 + 3 * 4").unwrap();
/// assert_eq!(rpn.to_string(), "2 3 4 * +");
///
/// let parsed: Rpn = "2 3 4 * +".parse().unwrap();
/// assert_eq!(parsed, rpn);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rpn {
    tokens: Vec<RpnToken>,
}

impl Rpn {
    #[must_use]
    pub fn tokens(&self) -> &[RpnToken] {
        &self.tokens
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether the free variable occurs in the sequence.
    #[must_use]
    pub fn uses_variable(&self) -> bool {
        self.tokens.contains(&RpnToken::Variable)
    }

    /// Evaluates the sequence with the free variable bound to `x`.
    ///
    /// See [`crate::evaluate`].
    pub fn evaluate(&self, x: f64) -> EvalResult<f64> {
        evaluate(self, x)
    }
}

impl From<Vec<RpnToken>> for Rpn {
    fn from(tokens: Vec<RpnToken>) -> Self {
        Self { tokens }
    }
}

impl FromIterator<RpnToken> for Rpn {
    fn from_iter<I: IntoIterator<Item = RpnToken>>(iter: I) -> Self {
        Self { tokens: iter.into_iter().collect() }
    }
}

impl fmt::Display for Rpn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

impl FromStr for Rpn {
    type Err = ParseError;

    /// Parses whitespace-separated postfix text.
    ///
    /// Words are numbers, the variable `x`, named constants, operator
    /// symbols, function names and `neg`. Arity is not checked here; a
    /// malformed sequence fails when it is evaluated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = Vec::new();
        let mut offset = 0;

        for piece in s.split_inclusive(char::is_whitespace) {
            let position = offset;
            offset += piece.len();

            let word = piece.trim_end();
            if word.is_empty() {
                continue;
            }
            tokens.push(parse_word(word, position)?);
        }

        Ok(Self { tokens })
    }
}

/// Classifies a single word of postfix text.
fn parse_word(word: &str, position: usize) -> Result<RpnToken, ParseError> {
    if let Some(op) = BinaryOperator::from_symbol(word) {
        return Ok(RpnToken::Operator(op));
    }
    if word == VARIABLE {
        return Ok(RpnToken::Variable);
    }
    if word == NEGATE {
        return Ok(RpnToken::Function(Function::Negate));
    }
    if let Some(value) = constant(word) {
        return Ok(RpnToken::number(value));
    }
    if let Some(function) = Function::from_name(word) {
        return Ok(RpnToken::Function(function));
    }

    let Some(first) = word.chars().next() else {
        return Err(ParseError::InvalidOperation { token: word.to_string(),
                                                  position });
    };

    if first.is_ascii_digit() || matches!(first, '.' | '-' | '+') {
        return word.parse()
                   .map(RpnToken::number)
                   .map_err(|_| ParseError::Lex(LexError::UnknownSymbol { symbol: word.to_string(),
                                                                          position }));
    }
    if first.is_alphabetic() {
        return Err(ParseError::UnknownFunction { name: word.to_string(),
                                                 position });
    }
    if matches!(first, '(' | ')') {
        return Err(ParseError::InvalidOperation { token: word.to_string(),
                                                  position });
    }

    Err(ParseError::UnknownOperator { symbol: word.to_string(),
                                      position })
}
